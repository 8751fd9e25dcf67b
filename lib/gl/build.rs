extern crate gl_generator;

use gl_generator::{Api, Fallbacks, Profile, Registry};
use std::env;
use std::fs::File;
use std::io::BufWriter;
use std::path::Path;

fn main() {
    let out_dir = env::var("OUT_DIR").unwrap();
    let mut file_gl = BufWriter::new(File::create(&Path::new(&out_dir).join("bindings.rs")).unwrap());

    let registry = Registry::new(Api::Gl, (3, 3), Profile::Core, Fallbacks::All, []);

    if env::var("CARGO_FEATURE_DEBUG").is_ok() {
        registry
            .write_bindings(gl_generator::DebugStructGenerator, &mut file_gl)
            .unwrap();
    } else {
        registry
            .write_bindings(gl_generator::StructGenerator, &mut file_gl)
            .unwrap();
    }
}
