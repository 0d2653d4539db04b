use std::env;

fn main() {
    // logcat writes go through liblog on Android targets.
    if env::var("CARGO_CFG_TARGET_OS").as_deref() == Ok("android") {
        println!("cargo:rustc-link-lib=log");
    }
    println!("cargo:rerun-if-changed=build.rs");
}
