use std::path::PathBuf;

fn main() {
    // Inline scripts pulled in with include_str! are tracked by Cargo, but the
    // embedded config and page effects are also watched explicitly.
    let Ok(manifest_dir) = std::env::var("CARGO_MANIFEST_DIR") else { return; };
    let manifest_dir = PathBuf::from(manifest_dir);

    for path in ["src/page_effects.js", "assets/page_config.json"] {
        println!("cargo:rerun-if-changed={}", manifest_dir.join(path).display());
    }
}
