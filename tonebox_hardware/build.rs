//! Copies the workspace `memory.x` next to the build output so the linker
//! can find it when building the on-target examples, and wires up their
//! linker scripts. Changing `memory.x` re-runs this script so new memory
//! settings reach the examples.

use std::{env, fs::File, io::Write, path::PathBuf};

fn main() {
    println!("cargo:rustc-link-arg-examples=--nmagic");
    println!("cargo:rustc-link-arg-examples=-Tlink.x");

    println!("cargo:rustc-link-arg-examples=-Tdefmt.x");

    println!("cargo:rerun-if-changed=../memory.x");

    let out = &PathBuf::from(env::var_os("OUT_DIR").unwrap());
    File::create(out.join("memory.x"))
        .unwrap()
        .write_all(include_bytes!("../memory.x"))
        .unwrap();
    println!("cargo:rustc-link-search={}", out.display());
}
