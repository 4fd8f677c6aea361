// File: crates/plot-core/build.rs
// Summary: Links the Windows system libraries Skia's ICU text shaping needs.

fn main() {
    #[cfg(target_os = "windows")]
    {
        // RegOpenKeyExW and friends.
        println!("cargo:rustc-link-lib=advapi32");
    }
}
