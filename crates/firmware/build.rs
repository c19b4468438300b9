use std::env;
use std::fs;
use std::path::PathBuf;

/// Build-time overrides baked into the firmware with `cargo:rustc-env`
const PARAMETER_VARS: [&str; 6] = [
    "IR_LOGICAL_ONE_US",
    "IR_FRAME_TIMEOUT_US",
    "DRIVE_SPEED_STEP",
    "DRIVE_SPEED_MAX",
    "DRIVE_INITIAL_SPEED",
    "DRIVE_SETTLE_MS",
];

fn main() {
    // Generate BUILD_ID for debugging (changes on every build)
    use std::time::{SystemTime, UNIX_EPOCH};
    let build_id = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs())
        .unwrap_or(0);
    println!("cargo:rustc-env=BUILD_ID={}", build_id);

    // Parameter overrides; unset variables are passed through empty and the
    // firmware keeps its defaults
    for name in PARAMETER_VARS {
        if let Ok(value) = env::var(name) {
            println!("cargo:rustc-env={}={}", name, value);
            println!("cargo:warning=Using {} from environment: {}", name, value);
        } else {
            println!("cargo:rustc-env={}=", name);
        }
        println!("cargo:rerun-if-env-changed={}", name);
    }

    // Linker script for cortex-m-rt, only needed on target
    if env::var_os("CARGO_FEATURE_PICO2_W").is_some() {
        let out_dir = PathBuf::from(env::var("OUT_DIR").expect("OUT_DIR not set"));
        fs::copy("memory.x", out_dir.join("memory.x")).expect("Failed to copy memory.x");
        println!("cargo:rustc-link-search={}", out_dir.display());
    }
    println!("cargo:rerun-if-changed=memory.x");
}
