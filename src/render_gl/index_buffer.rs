use gl;
use std;

/// Static `ELEMENT_ARRAY_BUFFER` of `u32` indices.
///
/// The element binding is part of vertex array state, so bind the vertex
/// array first when the buffer should stay attached to it.
pub struct IndexBuffer {
    gl: gl::Gl,
    glid: gl::types::GLuint,
    count: usize,
}

impl IndexBuffer {
    pub fn new(gl: &gl::Gl, indices: &[u32]) -> IndexBuffer {
        let mut ibo = IndexBuffer {
            gl: gl.clone(),
            glid: 0,
            count: indices.len(),
        };

        unsafe {
            gl.GenBuffers(1, &mut ibo.glid);
            gl.BindBuffer(gl::ELEMENT_ARRAY_BUFFER, ibo.glid);
            gl.BufferData(
                gl::ELEMENT_ARRAY_BUFFER,
                (indices.len() * std::mem::size_of::<u32>()) as gl::types::GLsizeiptr,
                indices.as_ptr() as *const gl::types::GLvoid,
                gl::STATIC_DRAW,
            );
        }
        debug!("Created index buffer {} with {} indices", ibo.glid, ibo.count);

        ibo
    }

    pub fn bind(&self) {
        unsafe {
            self.gl.BindBuffer(gl::ELEMENT_ARRAY_BUFFER, self.glid);
        }
    }

    pub fn unbind(&self) {
        unsafe {
            self.gl.BindBuffer(gl::ELEMENT_ARRAY_BUFFER, 0);
        }
    }

    pub fn count(&self) -> usize {
        self.count
    }
}

impl Drop for IndexBuffer {
    fn drop(&mut self) {
        unsafe {
            self.gl.DeleteBuffers(1, &self.glid);
        }
    }
}
