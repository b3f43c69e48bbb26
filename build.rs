/// Build script for orrery
/// Stamps the package version into the binaries.
fn main() {
    println!("cargo:rerun-if-changed=Cargo.toml");

    if let Ok(version) = std::env::var("CARGO_PKG_VERSION") {
        println!("cargo:rustc-env=ORRERY_VERSION={version}");
    }
}
