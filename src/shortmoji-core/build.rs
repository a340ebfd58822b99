//! Build script for shortmoji-core.
//!
//! Embeds every shortcode table under `data/` into the library as a static
//! resource table (`$OUT_DIR/embedded_resources.rs`).

use std::fmt::Write as _;
use std::path::{Path, PathBuf};

fn main() {
    let manifest_dir = PathBuf::from(
        std::env::var("CARGO_MANIFEST_DIR").expect("CARGO_MANIFEST_DIR is set by cargo"),
    );
    let data_dir = manifest_dir.join("data");
    let out_dir = PathBuf::from(std::env::var("OUT_DIR").expect("OUT_DIR is set by cargo"));

    let mut files = collect_data_files(&data_dir);
    files.sort_by(|a, b| a.0.cmp(&b.0));

    let mut table = String::from("pub(crate) static EMBEDDED: &[(&str, &[u8])] = &[\n");
    for (name, path) in &files {
        let _ = writeln!(
            table,
            "    ({:?}, include_bytes!({:?})),",
            name,
            path.display().to_string()
        );
    }
    table.push_str("];\n");

    std::fs::write(out_dir.join("embedded_resources.rs"), table)
        .expect("Failed to write embedded_resources.rs");

    // Rerun when the data set changes
    println!("cargo:rerun-if-changed={}", data_dir.display());
    for (_, path) in &files {
        println!("cargo:rerun-if-changed={}", path.display());
    }
}

/// Returns `(resource name, absolute path)` for every regular file in `dir`.
fn collect_data_files(dir: &Path) -> Vec<(String, PathBuf)> {
    let Ok(entries) = std::fs::read_dir(dir) else {
        return Vec::new();
    };

    entries
        .flatten()
        .filter(|entry| entry.path().is_file())
        .filter_map(|entry| {
            let name = entry.file_name().to_str()?.to_string();
            Some((name, entry.path()))
        })
        .collect()
}
