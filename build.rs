use std::env;
use std::fs;
use std::path::PathBuf;

fn main() {
    println!("cargo:rerun-if-changed=config.toml");

    // Place config.toml next to the compiled binary so the app can find
    // it regardless of the working directory it is launched from.
    let out_dir = PathBuf::from(env::var("OUT_DIR").unwrap());
    let target_dir = out_dir
        .ancestors()
        .nth(3)
        .expect("unexpected OUT_DIR layout");

    fs::copy("config.toml", target_dir.join("config.toml")).unwrap();
}
