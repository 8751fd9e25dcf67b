use gl;

pub struct VertexArray {
    gl: gl::Gl,
    glid: gl::types::GLuint,
}

impl VertexArray {
    pub fn new(gl: &gl::Gl) -> VertexArray {
        let mut vao = VertexArray {
            gl: gl.clone(),
            glid: 0,
        };

        unsafe {
            gl.GenVertexArrays(1, &mut vao.glid);
        }

        vao
    }

    pub fn bind(&self) {
        unsafe {
            self.gl.BindVertexArray(self.glid);
        }
    }

    pub fn unbind(&self) {
        unsafe {
            self.gl.BindVertexArray(0);
        }
    }

    /// Describes a float attribute read from the currently bound `ARRAY_BUFFER`.
    /// The vertex array must be bound.
    pub fn enable_float_attrib(
        &self,
        location: gl::types::GLuint,
        components: gl::types::GLint,
        stride: usize,
        offset: usize,
    ) {
        unsafe {
            self.gl.EnableVertexAttribArray(location);
            self.gl.VertexAttribPointer(
                location,
                components,
                gl::FLOAT,
                gl::FALSE,
                stride as gl::types::GLsizei,
                offset as *const gl::types::GLvoid,
            );
        }
    }
}

impl Drop for VertexArray {
    fn drop(&mut self) {
        unsafe {
            self.gl.DeleteVertexArrays(1, &self.glid);
        }
    }
}
