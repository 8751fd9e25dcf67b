#[macro_use] extern crate failure;
#[macro_use] extern crate log;
extern crate env_logger;
extern crate gl;
extern crate sdl2;

#[cfg(test)]
extern crate tempfile;

pub mod config;
pub mod render_gl;
pub mod resources;
pub mod shape;

use std::ffi::CStr;
use std::path::Path;

use config::Config;
use failure::err_msg;
use resources::Resources;
use shape::Shape;

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .target(log_target())
        .init();

    if let Err(e) = run(Config::default()) {
        error!("{}", failure_to_string(e));
        ::std::process::exit(1);
    }
}

/// Compiler diagnostics go to stdout alongside the rest of the log.
fn log_target() -> env_logger::Target {
    env_logger::Target::Stdout
}

fn run(config: Config) -> Result<(), failure::Error> {
    let res = Resources::from_relative_exe_path(Path::new("assets"))?;
    debug!("Resource root {}", res.root_path().display());

    let sdl = sdl2::init().map_err(err_msg)?;
    let video_subsystem = sdl.video().map_err(err_msg)?;

    let gl_attr = video_subsystem.gl_attr();
    gl_attr.set_context_profile(sdl2::video::GLProfile::Core);
    gl_attr.set_context_version(config.gl_version.0, config.gl_version.1);

    let window = video_subsystem
        .window(&config.title, config.width, config.height)
        .opengl()
        .build()
        .map_err(|e| err_msg(e.to_string()))?;
    info!("Opened window {:?} ({}x{})", config.title, config.width, config.height);

    let _gl_context = window.gl_create_context().map_err(err_msg)?;
    let gl = gl::Gl::load_with(|s| {
        video_subsystem.gl_get_proc_address(s) as *const std::os::raw::c_void
    });
    info!("OpenGL {}", gl_version_string(&gl));

    let viewport = render_gl::Viewport::for_window(config.width as i32, config.height as i32);
    viewport.set_used(&gl);

    let color_buffer = render_gl::ColorBuffer::from_color(config.clear_color);
    color_buffer.set_used(&gl);

    // geometry

    let shape = Shape::from_kind(config.shape);
    info!(
        "Drawing {:?}: {} vertices, {} triangles",
        config.shape,
        shape.vertex_count(),
        shape.triangle_count()
    );

    let vao = render_gl::VertexArray::new(&gl);
    vao.bind();

    let vbo = render_gl::VertexBuffer::new(&gl, &shape.positions);
    vbo.bind();
    vao.enable_float_attrib(0, 2, Shape::stride(), 0);

    // element binding is recorded in the bound vertex array
    let ibo = render_gl::IndexBuffer::new(&gl, &shape.indices);
    ibo.bind();

    // shaders

    let program = render_gl::Program::from_res(&gl, &res, &config.shader)?;
    program.set_used();
    if program.has_uniform("u_Color") {
        program.set_uniform4f("u_Color", config.shape_color)?;
    }

    vao.unbind();
    vbo.unbind();
    ibo.unbind();

    let mut event_pump = sdl.event_pump().map_err(err_msg)?;
    'main: loop {
        for event in event_pump.poll_iter() {
            match event {
                sdl2::event::Event::Quit { .. } => break 'main,
                _ => {}
            }
        }

        color_buffer.clear(&gl);
        vao.bind();
        unsafe {
            gl.DrawElements(
                gl::TRIANGLES,
                ibo.count() as gl::types::GLsizei,
                gl::UNSIGNED_INT,
                ::std::ptr::null(),
            );
        }

        vao.unbind();

        window.gl_swap_window();
    }

    info!("Window closed, releasing program {}", program.id());
    Ok(())
}

fn gl_version_string(gl: &gl::Gl) -> String {
    let version = unsafe { gl.GetString(gl::VERSION) };
    if version.is_null() {
        return "version unknown".into();
    }
    unsafe { CStr::from_ptr(version as *const std::os::raw::c_char) }
        .to_string_lossy()
        .into_owned()
}

pub fn failure_to_string(e: failure::Error) -> String {
    use std::fmt::Write;

    let mut result = String::new();

    for (i, cause) in e.iter_chain().enumerate() {
        if i > 0 {
            let _ = writeln!(&mut result, "   Which caused the following issue:");
        }
        let _ = write!(&mut result, "{}", cause);
        if let Some(backtrace) = cause.backtrace() {
            let backtrace_str = format!("{}", backtrace);
            if backtrace_str.len() > 0 {
                let _ = writeln!(&mut result, " This happened at {}", backtrace);
            } else {
                let _ = writeln!(&mut result);
            }
        } else {
            let _ = writeln!(&mut result);
        }
    }

    result
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn log_goes_to_stdout() {
        assert!(matches!(log_target(), env_logger::Target::Stdout));
    }

    #[test]
    fn failure_chain_lists_every_cause() {
        let inner = resources::Error::Io(
            ::std::io::Error::new(::std::io::ErrorKind::NotFound, "no such file")
        );
        let outer = render_gl::Error::ResourceLoad { name: "shaders/basic.shader".into(), inner };

        let text = failure_to_string(outer.into());
        assert!(text.starts_with("Failed to load resource shaders/basic.shader"));
        assert!(text.contains("Which caused the following issue:"));
        assert!(text.contains("I/O error"));
        assert!(text.contains("no such file"));
    }
}
