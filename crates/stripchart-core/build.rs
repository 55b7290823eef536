// File: crates/stripchart-core/build.rs
// Summary: Links the Windows system libraries Skia's raster/text backends need.

fn main() {
    #[cfg(target_os = "windows")]
    {
        // Skia's font manager and ICU data lookup use the registry API.
        println!("cargo:rustc-link-lib=advapi32");
    }
}
