//! Build-graph layering: kernel ← search ← harness.
//!
//! The kernel knows nothing about strategies or worlds, and the engine
//! knows nothing about worlds. Checked against both source and manifests.

use std::fmt::Write;
use std::fs;
use std::path::Path;

fn walk(dir: &Path, forbidden: &[&str], violations: &mut Vec<(String, usize, String)>) {
    let Ok(entries) = fs::read_dir(dir) else {
        return;
    };
    for entry in entries.flatten() {
        let path = entry.path();
        if path.is_dir() {
            walk(&path, forbidden, violations);
        } else if path.extension().is_some_and(|e| e == "rs") {
            check_file(&path, forbidden, violations);
        }
    }
}

fn check_file(path: &Path, forbidden: &[&str], violations: &mut Vec<(String, usize, String)>) {
    let Ok(content) = fs::read_to_string(path) else {
        return;
    };
    for (line_no, line) in content.lines().enumerate() {
        let trimmed = line.trim();
        if trimmed.starts_with("//") || trimmed.starts_with("/*") || trimmed.starts_with('*') {
            continue;
        }
        if forbidden.iter().any(|p| trimmed.contains(p)) {
            violations.push((path.display().to_string(), line_no + 1, line.to_string()));
        }
    }
}

fn workspace_root() -> &'static Path {
    // lock-tests lives at tests/lock/
    let manifest_dir = Path::new(env!("CARGO_MANIFEST_DIR"));
    manifest_dir
        .parent()
        .expect("tests/ exists")
        .parent()
        .expect("workspace root exists")
}

fn assert_source_clean(crate_dir: &str, forbidden: &[&str]) {
    let mut violations = Vec::new();
    walk(&workspace_root().join(crate_dir).join("src"), forbidden, &mut violations);
    if !violations.is_empty() {
        let mut msg = format!("{crate_dir} reaches up the layer stack:\n");
        for (file, line, content) in &violations {
            let _ = writeln!(msg, "  {file}:{line}: {content}");
        }
        panic!("{msg}");
    }
}

fn assert_manifest_clean(crate_dir: &str, forbidden: &[&str]) {
    let path = workspace_root().join(crate_dir).join("Cargo.toml");
    let content = fs::read_to_string(&path).expect("crate manifest must exist");
    for (line_no, line) in content.lines().enumerate() {
        let trimmed = line.trim();
        if trimmed.starts_with('#') {
            continue;
        }
        for pattern in forbidden {
            assert!(
                !trimmed.contains(pattern),
                "{crate_dir}/Cargo.toml line {}: depends on {pattern}: {trimmed}",
                line_no + 1
            );
        }
    }
}

#[test]
fn kernel_source_stays_below_search() {
    assert_source_clean("kernel", &["wayfind_search", "wayfind_harness"]);
}

#[test]
fn search_source_stays_below_harness() {
    assert_source_clean("search", &["wayfind_harness"]);
}

#[test]
fn manifests_follow_layering() {
    assert_manifest_clean("kernel", &["wayfind-search", "wayfind-harness"]);
    assert_manifest_clean("search", &["wayfind-harness"]);
}

#[test]
fn engine_has_no_cli_or_config_stack() {
    assert_manifest_clean("kernel", &["clap", "toml", "tracing-subscriber"]);
    assert_manifest_clean("search", &["clap", "toml", "tracing-subscriber"]);
}
