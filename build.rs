use std::env;

fn main() {
    // Pick a compile-time tracing ceiling that matches the build profile, so
    // release viewers ship without log call sites.
    let profile = env::var("PROFILE").unwrap_or_else(|_| "debug".to_string());

    match profile.as_str() {
        "release" => {
            println!("cargo:rustc-cfg=feature=\"tracing_max_level_off\"");
            println!("cargo:rustc-cfg=feature=\"no_logging\"");
        }
        "profiling" => {
            println!("cargo:rustc-cfg=feature=\"tracing_max_level_warn\"");
        }
        _ => {
            println!("cargo:rustc-cfg=feature=\"tracing_max_level_trace\"");
        }
    }

    println!("cargo:rerun-if-env-changed=PROFILE");
}
