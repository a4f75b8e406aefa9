//! Cross-process determinism.
//!
//! Spawns the `search_fixture` binary under several environment variants
//! and asserts that all produce identical output. Search results must not
//! be influenced by process-level state (cwd, locale, env vars, hash seeds).

use std::path::Path;
use std::process::Command;

use wayfind_kernel::proof::hash::ContentHash;

fn workspace_root() -> String {
    Path::new(env!("CARGO_MANIFEST_DIR"))
        .parent()
        .expect("tests/ exists")
        .parent()
        .expect("workspace root exists")
        .to_string_lossy()
        .to_string()
}

/// Run the binary with the given cwd and environment overrides.
/// Returns stdout as a string.
fn run_variant(work_dir: &str, env_overrides: &[(&str, &str)]) -> String {
    let bin = env!("CARGO_BIN_EXE_search_fixture");

    let mut command = Command::new(bin);
    command.current_dir(work_dir);

    // Clear locale-related env to establish baseline, then apply overrides.
    command
        .env_remove("LC_ALL")
        .env_remove("LC_COLLATE")
        .env_remove("LANG")
        .env_remove("LANGUAGE")
        .env_remove("RUST_LOG");

    for &(key, val) in env_overrides {
        command.env(key, val);
    }

    let output = command.output().unwrap_or_else(|e| {
        panic!("failed to spawn {bin} (work_dir={work_dir}, overrides={env_overrides:?}): {e}")
    });

    assert!(
        output.status.success(),
        "search_fixture exited with {}: stderr={}",
        output.status,
        String::from_utf8_lossy(&output.stderr)
    );

    String::from_utf8(output.stdout).expect("stdout is valid UTF-8")
}

#[test]
fn crossproc_search_fixture_env_variants() {
    let root = workspace_root();
    let baseline = run_variant(&root, &[]);

    for world in ["maze", "food", "npuzzle", "hanoi"] {
        assert!(
            baseline.contains(&format!("{world}.trace_digest=sha256:")),
            "baseline output missing {world}.trace_digest"
        );
        assert!(
            baseline.contains(&format!("{world}.termination=goal_reached")),
            "{world} did not reach its goal"
        );
    }
    assert!(baseline.contains("hanoi.cost=7"));
    assert!(baseline.contains("npuzzle.cost=4"));
    assert!(baseline.contains("maze.cost=8"));

    let alt_cwd = std::env::temp_dir().to_string_lossy().to_string();
    let variant_cwd = run_variant(&alt_cwd, &[]);
    assert_eq!(
        baseline, variant_cwd,
        "output differs when cwd changes from {root} to {alt_cwd}"
    );

    let variant_locale = run_variant(&root, &[("LC_ALL", "C"), ("LANG", "C")]);
    assert_eq!(baseline, variant_locale, "output differs when LC_ALL=C LANG=C");

    let variant_noise = run_variant(
        &root,
        &[
            ("WAYFIND_NOISE", "1"),
            ("RUST_LOG", "trace"),
            ("HOME", "/nonexistent"),
        ],
    );
    assert_eq!(baseline, variant_noise, "output differs with spurious env vars");
}

#[test]
fn crossproc_matches_in_process_run() {
    use lock_tests::fixtures::open_grid;
    use wayfind_harness::{run_maze_position, RunConfig};

    let config = RunConfig {
        strategy: "astar".into(),
        heuristic: "manhattan".into(),
        ..RunConfig::default()
    };
    let report = run_maze_position(&open_grid(5, 5), &config).unwrap();
    let output = run_variant(&workspace_root(), &[]);

    let digest = |key: &str| -> ContentHash {
        let line = output
            .lines()
            .find_map(|line| line.strip_prefix(key))
            .unwrap_or_else(|| panic!("fixture output has no {key} line"));
        ContentHash::parse(line).unwrap_or_else(|| panic!("{key} is not a content hash: {line}"))
    };
    let trace = digest("maze.trace_digest=");
    assert_eq!(trace.algorithm(), "sha256");
    assert_eq!(trace, report.trace_digest);
    assert_eq!(digest("maze.report_digest="), report.report_digest);
}
