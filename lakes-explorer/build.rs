//! Build script for lakes-explorer.
//!
//! Copies the lake-list CSV and the species reference JSON into `OUT_DIR`
//! so they can be embedded via `include_str!` at compile time. The bulk
//! fish tables are fetched at runtime as gzipped JSON and are not
//! embedded.

use std::env;
use std::fs;
use std::path::Path;

fn main() {
    let out_dir = env::var("OUT_DIR").unwrap();

    let files = vec![
        ("../fixtures/mn_lakes.csv", "mn_lakes.csv"),
        ("../fixtures/fish_species.json", "fish_species.json"),
    ];

    for (src_path, dest_name) in &files {
        let src = Path::new(src_path);
        let dest = Path::new(&out_dir).join(dest_name);
        if src.exists() {
            fs::copy(src, &dest).unwrap_or_else(|e| {
                panic!("Failed to copy {} to {}: {}", src_path, dest.display(), e);
            });
        } else {
            // Create empty placeholder so include_str! doesn't fail
            fs::write(&dest, "").unwrap();
            println!(
                "cargo:warning=Fixture file {} not found, using empty placeholder",
                src_path
            );
        }
        println!("cargo:rerun-if-changed={}", src_path);
    }

    println!("cargo:rerun-if-changed=build.rs");
}
