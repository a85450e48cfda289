use std::collections::BTreeSet;
use std::fs;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
struct DemoDefaults {
    table_total: i64,
    table_page_size: i64,
    pagination_visible_count: i64,
    toast_duration_ms: u32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
struct CategoryEntry {
    id: String,
    label: String,
    title: String,
    description: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
struct ShowcaseManifest {
    schema_version: u32,
    brand: String,
    demo: DemoDefaults,
    categories: Vec<CategoryEntry>,
}

fn validate(manifest: &ShowcaseManifest, path: &str) {
    if manifest.schema_version != 1 {
        panic!(
            "manifest schema mismatch in {path}: expected 1 found {}",
            manifest.schema_version
        );
    }
    if manifest.brand.trim().is_empty() {
        panic!("manifest {path} has an empty brand");
    }
    if manifest.categories.is_empty() {
        panic!("manifest {path} declares no categories");
    }

    let mut seen = BTreeSet::new();
    for category in &manifest.categories {
        if category.id.trim().is_empty() || category.label.trim().is_empty() {
            panic!("manifest {path} has a category with an empty id or label");
        }
        if !seen.insert(category.id.as_str()) {
            panic!("duplicate category id `{}` in {path}", category.id);
        }
    }

    let demo = &manifest.demo;
    if demo.table_total <= 0 || demo.table_page_size <= 0 || demo.pagination_visible_count <= 0 {
        panic!("demo pagination values in {path} must be positive");
    }
    if demo.toast_duration_ms == 0 {
        panic!("demo toast duration in {path} must be positive");
    }
}

fn main() {
    let crate_root = PathBuf::from(std::env::var("CARGO_MANIFEST_DIR").expect("manifest dir"));
    let path = crate_root.join("showcase.manifest.toml");
    println!("cargo:rerun-if-changed={}", path.display());

    let raw = fs::read_to_string(&path)
        .unwrap_or_else(|err| panic!("failed to read {}: {err}", path.display()));
    let manifest: ShowcaseManifest = toml::from_str(&raw)
        .unwrap_or_else(|err| panic!("failed to parse {}: {err}", path.display()));
    validate(&manifest, &path.display().to_string());

    let json = serde_json::to_string_pretty(&manifest).expect("serialize showcase manifest");
    let generated = format!(
        "/// Build-time generated showcase manifest JSON.\n\
pub const SHOWCASE_MANIFEST_JSON: &str = r##\"{}\"##;\n",
        json
    );

    let out_dir = PathBuf::from(std::env::var("OUT_DIR").expect("OUT_DIR"));
    let out_file = out_dir.join("showcase_manifest_generated.rs");
    fs::write(&out_file, generated)
        .unwrap_or_else(|err| panic!("failed to write {}: {err}", out_file.display()));
}
