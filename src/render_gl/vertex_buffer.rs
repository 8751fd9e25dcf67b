use gl;
use std;

/// Static `ARRAY_BUFFER` holding packed `f32` vertex data.
pub struct VertexBuffer {
    gl: gl::Gl,
    glid: gl::types::GLuint,
}

impl VertexBuffer {
    pub fn new(gl: &gl::Gl, vertices: &[f32]) -> VertexBuffer {
        let mut vbo = VertexBuffer {
            gl: gl.clone(),
            glid: 0,
        };

        unsafe {
            gl.GenBuffers(1, &mut vbo.glid);
            gl.BindBuffer(gl::ARRAY_BUFFER, vbo.glid);
            gl.BufferData(
                gl::ARRAY_BUFFER,
                (vertices.len() * std::mem::size_of::<f32>()) as gl::types::GLsizeiptr,
                vertices.as_ptr() as *const gl::types::GLvoid,
                gl::STATIC_DRAW,
            );
            gl.BindBuffer(gl::ARRAY_BUFFER, 0);
        }
        debug!("Created vertex buffer {} with {} floats", vbo.glid, vertices.len());

        vbo
    }

    pub fn bind(&self) {
        unsafe {
            self.gl.BindBuffer(gl::ARRAY_BUFFER, self.glid);
        }
    }

    pub fn unbind(&self) {
        unsafe {
            self.gl.BindBuffer(gl::ARRAY_BUFFER, 0);
        }
    }
}

impl Drop for VertexBuffer {
    fn drop(&mut self) {
        unsafe {
            self.gl.DeleteBuffers(1, &self.glid);
        }
    }
}
