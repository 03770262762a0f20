use std::env;
use std::fs;
use std::path::Path;

include!("build_support/version_literal.rs");

fn main() {
    let version = env::var("MARSHALING_TESTS_BUILD_VERSION")
        .unwrap_or_else(|_| format!("{}-dev", env!("CARGO_PKG_VERSION")));
    let out_dir = env::var_os("OUT_DIR").expect("OUT_DIR is set by cargo");
    let dest_path = Path::new(&out_dir).join("version.rs");

    fs::write(&dest_path, version_source(&version)).expect("failed to write version.rs");

    println!("cargo:rerun-if-env-changed=MARSHALING_TESTS_BUILD_VERSION");
}
