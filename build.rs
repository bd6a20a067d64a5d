use gl_generator::{Api, Fallbacks, Profile, Registry, StructGenerator};
use std::{env, fs, path};

/// Every demo requests this context version.
const GL_VERSION: (u8, u8) = (3, 3);

fn main() {
    println!("cargo:rerun-if-changed=build.rs");
    let out_dir = env::var("OUT_DIR").unwrap();
    let path = path::Path::new(&out_dir).join("gl.rs");
    let mut file = fs::File::create(path).unwrap();
    Registry::new(Api::Gl, GL_VERSION, Profile::Core, Fallbacks::All, [])
        .write_bindings(StructGenerator, &mut file)
        .unwrap();
}
