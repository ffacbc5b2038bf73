//! Build script for the storefront crate.
//!
//! Fingerprints the stylesheet so pages can link an immutable,
//! content-addressed copy.

use std::env;
use std::fs;
use std::path::Path;

use sha2::{Digest, Sha256};

/// Hex characters of the digest kept in the file name.
const HASH_LEN: usize = 8;

fn main() {
    let manifest_dir =
        env::var("CARGO_MANIFEST_DIR").expect("CARGO_MANIFEST_DIR must be set by Cargo");
    let css_dir = Path::new(&manifest_dir).join("static/css");
    let css_path = css_dir.join("main.css");

    println!("cargo:rerun-if-changed={}", css_path.display());

    let content = fs::read(&css_path).expect("static/css/main.css must exist");

    let digest = format!("{:x}", Sha256::digest(&content));
    let short_hash: String = digest.chars().take(HASH_LEN).collect();

    // Read by `filters::STYLESHEET_HREF`
    println!("cargo:rustc-env=CSS_HASH={short_hash}");

    let derived_dir = css_dir.join("derived");
    fs::create_dir_all(&derived_dir).expect("Failed to create derived CSS directory");
    fs::copy(&css_path, derived_dir.join(format!("main.{short_hash}.css")))
        .expect("Failed to copy CSS to derived directory");
}
