// Sets SEVENIQ_VERSION for `seveniqctl --version`

fn main() {
    // An exported SEVENIQ_VERSION wins over the crate version
    let version = match std::env::var("SEVENIQ_VERSION") {
        Ok(v) if !v.is_empty() => v,
        _ => env!("CARGO_PKG_VERSION").to_string(),
    };
    println!("cargo:rustc-env=SEVENIQ_VERSION={}", version);

    println!("cargo:rerun-if-env-changed=SEVENIQ_VERSION");
    println!("cargo:rerun-if-changed=build.rs");
}
