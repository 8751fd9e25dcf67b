use gl;
use std;
use std::collections::HashMap;
use std::ffi::{CStr, CString};
use resources::{self, Resources};
use super::shader_source::{ShaderProgramSource, ShaderStage};

#[derive(Debug, Fail)]
pub enum Error {
    #[fail(display = "Failed to load resource {}", name)]
    ResourceLoad { name: String, #[cause] inner: resources::Error },
    #[fail(display = "Shader {} has no {} section", name, stage)]
    MissingStage { name: String, stage: ShaderStage },
    #[fail(display = "Failed to compile {} shader {}: {}", stage, name, message)]
    CompileError { name: String, stage: ShaderStage, message: String },
    #[fail(display = "Failed to link program {}: {}", name, message)]
    LinkError { name: String, message: String },
    #[fail(display = "Program has no active uniform {}", name)]
    UnknownUniform { name: String },
    #[fail(display = "Uniform {} is not a {}", name, expected)]
    UniformType { name: String, expected: &'static str },
}

struct Uniform {
    location: gl::types::GLint,
    typ: gl::types::GLenum,
}

pub struct Program {
    gl: gl::Gl,
    id: gl::types::GLuint,

    uniforms: HashMap<String, Uniform>,
}

impl Program {
    /// Builds a program from the `<name>.shader` resource, which carries
    /// both the vertex and the fragment section.
    pub fn from_res(gl: &gl::Gl, res: &Resources, name: &str) -> Result<Program, Error> {
        let resource_name = format!("{}.shader", name);

        let text = res.load_string(&resource_name)
            .map_err(|e| Error::ResourceLoad { name: resource_name.clone(), inner: e })?;
        info!("Loaded shader resource {}", resource_name);

        let source = ShaderProgramSource::parse(&text);

        let shaders = [ShaderStage::Vertex, ShaderStage::Fragment].iter()
            .map(|&stage| Shader::from_stage(gl, &source, stage, &resource_name))
            .collect::<Result<Vec<Shader>, Error>>()?;

        Program::from_shaders(gl, &shaders[..])
            .map_err(|message| {
                error!("Failed to link {}: {}", resource_name, message);
                Error::LinkError { name: resource_name.clone(), message }
            })
    }

    pub fn from_shaders(gl: &gl::Gl, shaders: &[Shader]) -> Result<Program, String> {
        let program_id = unsafe { gl.CreateProgram() };

        for shader in shaders {
            unsafe { gl.AttachShader(program_id, shader.id()); }
        }

        unsafe { gl.LinkProgram(program_id); }

        let mut success: gl::types::GLint = 1;
        unsafe {
            gl.GetProgramiv(program_id, gl::LINK_STATUS, &mut success);
        }

        if success == 0 {
            let message = program_info_log(gl, program_id);
            unsafe { gl.DeleteProgram(program_id); }
            return Err(message);
        }

        unsafe { gl.ValidateProgram(program_id); }

        let mut valid: gl::types::GLint = 1;
        unsafe {
            gl.GetProgramiv(program_id, gl::VALIDATE_STATUS, &mut valid);
        }
        if valid == 0 {
            warn!("Program {} failed validation: {}", program_id, program_info_log(gl, program_id));
        }

        for shader in shaders {
            unsafe { gl.DetachShader(program_id, shader.id()); }
        }

        let uniforms = Program::get_uniforms(gl, program_id);
        debug!("Linked program {} with {} active uniforms", program_id, uniforms.len());

        Ok(Program { gl: gl.clone(), id: program_id, uniforms })
    }

    pub fn id(&self) -> gl::types::GLuint {
        self.id
    }

    pub fn set_used(&self) {
        unsafe {
            self.gl.UseProgram(self.id);
        }
    }

    fn get_uniforms(gl: &gl::Gl, id: gl::types::GLuint) -> HashMap<String, Uniform> {
        let mut uniforms = HashMap::new();

        let mut total: gl::types::GLint = 0;
        unsafe {
            gl.GetProgramiv(id, gl::ACTIVE_UNIFORMS, &mut total);
        }

        for index in 0..total {
            let mut name_len: gl::types::GLsizei = 0;
            let mut size: gl::types::GLint = 0;
            let mut typ: gl::types::GLenum = gl::ZERO;
            let mut name_buf = vec![0u8; 256];

            unsafe {
                gl.GetActiveUniform(
                    id,
                    index as gl::types::GLuint,
                    name_buf.len() as gl::types::GLsizei,
                    &mut name_len,
                    &mut size,
                    &mut typ,
                    name_buf.as_mut_ptr() as *mut gl::types::GLchar,
                );
            }
            name_buf.truncate(name_len.max(0) as usize);

            let name = match CString::new(name_buf) {
                Ok(name) => name,
                Err(_) => continue,
            };

            let location = unsafe { gl.GetUniformLocation(id, name.as_ptr()) };

            uniforms.insert(name.to_string_lossy().into_owned(), Uniform { location, typ });
        }

        uniforms
    }

    pub fn has_uniform(&self, name: &str) -> bool {
        self.uniforms.contains_key(name)
    }

    pub fn set_uniform4f(&self, name: &str, value: [gl::types::GLfloat; 4]) -> Result<(), Error> {
        let uniform = self.uniforms.get(name)
            .ok_or_else(|| Error::UnknownUniform { name: name.into() })?;

        if uniform.typ != gl::FLOAT_VEC4 {
            return Err(Error::UniformType { name: name.into(), expected: "vec4" });
        }

        unsafe {
            self.gl.Uniform4f(uniform.location, value[0], value[1], value[2], value[3]);
        }
        Ok(())
    }
}

impl Drop for Program {
    fn drop(&mut self) {
        unsafe {
            self.gl.DeleteProgram(self.id);
        }
    }
}

pub struct Shader {
    gl: gl::Gl,
    id: gl::types::GLuint,
}

impl Shader {
    /// Compiles one section of a parsed `.shader` file. Failures are logged
    /// with the stage name before being returned.
    pub fn from_stage(
        gl: &gl::Gl,
        source: &ShaderProgramSource,
        stage: ShaderStage,
        name: &str,
    ) -> Result<Shader, Error> {
        let text = source.stage(stage);
        if text.trim().is_empty() {
            return Err(Error::MissingStage { name: name.into(), stage });
        }

        let text = CString::new(text).map_err(|_| Error::CompileError {
            name: name.into(),
            stage,
            message: "source contains a nul byte".into(),
        })?;

        Shader::from_source(gl, &text, stage.gl_kind())
            .map_err(|message| {
                error!("Failed to compile {} shader {}:\n{}", stage, name, message);
                Error::CompileError { name: name.into(), stage, message }
            })
    }

    pub fn from_source(
        gl: &gl::Gl,
        source: &CStr,
        kind: gl::types::GLenum
    ) -> Result<Shader, String> {
        let id = shader_from_source(gl, source, kind)?;
        Ok(Shader { gl: gl.clone(), id })
    }

    pub fn id(&self) -> gl::types::GLuint {
        self.id
    }
}

impl Drop for Shader {
    fn drop(&mut self) {
        unsafe {
            self.gl.DeleteShader(self.id);
        }
    }
}

fn shader_from_source(
    gl: &gl::Gl,
    source: &CStr,
    kind: gl::types::GLenum
) -> Result<gl::types::GLuint, String> {
    let id = unsafe { gl.CreateShader(kind) };
    unsafe {
        gl.ShaderSource(id, 1, &source.as_ptr(), std::ptr::null());
        gl.CompileShader(id);
    }

    let mut success: gl::types::GLint = 1;
    unsafe {
        gl.GetShaderiv(id, gl::COMPILE_STATUS, &mut success);
    }

    if success == 0 {
        let mut len: gl::types::GLint = 0;
        unsafe {
            gl.GetShaderiv(id, gl::INFO_LOG_LENGTH, &mut len);
        }

        let error = create_whitespace_cstring_with_len(len as usize);

        unsafe {
            gl.GetShaderInfoLog(
                id,
                len,
                std::ptr::null_mut(),
                error.as_ptr() as *mut gl::types::GLchar
            );
            gl.DeleteShader(id);
        }

        return Err(error.to_string_lossy().into_owned());
    }

    Ok(id)
}

fn program_info_log(gl: &gl::Gl, id: gl::types::GLuint) -> String {
    let mut len: gl::types::GLint = 0;
    unsafe {
        gl.GetProgramiv(id, gl::INFO_LOG_LENGTH, &mut len);
    }

    let error = create_whitespace_cstring_with_len(len as usize);

    unsafe {
        gl.GetProgramInfoLog(
            id,
            len,
            std::ptr::null_mut(),
            error.as_ptr() as *mut gl::types::GLchar
        );
    }

    error.to_string_lossy().into_owned()
}

fn create_whitespace_cstring_with_len(len: usize) -> CString {
    // allocate buffer of correct size
    let mut buffer: Vec<u8> = Vec::with_capacity(len + 1);
    // fill it with len spaces
    buffer.extend([b' '].iter().cycle().take(len));
    // convert buffer to CString
    unsafe { CString::from_vec_unchecked(buffer) }
}
