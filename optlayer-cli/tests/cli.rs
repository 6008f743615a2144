//! CLI integration tests.
//!
//! Each test runs the real binary against an isolated home directory.

mod common;

use common::TestEnv;
use predicates::prelude::*;

// ============================================================================
// get
// ============================================================================

#[test]
fn test_get_default() {
    let env = TestEnv::new();
    assert_eq!(env.get(&[], "lines", &[]), "15 (Default)\n");
}

#[test]
fn test_get_unknown_setting_fails() {
    let env = TestEnv::new();
    env.command()
        .args(["get", "no-such-setting"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Unknown setting: no-such-setting"));
}

#[test]
fn test_command_line_overrides() {
    let env = TestEnv::new();
    assert_eq!(env.get(&[], "lines", &["-lines", "7"]), "7 (Commandline)\n");
    assert_eq!(env.get(&[], "cycle", &["-no-cycle"]), "false (Commandline)\n");
    assert_eq!(
        env.get(&[], "sort", &["-no-sort", "-sort"]),
        "true (Commandline)\n"
    );
}

#[test]
fn test_alias_shares_value() {
    let env = TestEnv::new();
    assert_eq!(env.get(&[], "monitor", &["-m", "2"]), "2 (Default)\n");
    assert_eq!(env.get(&[], "m", &["-m", "2"]), "2 (Commandline)\n");
}

// ============================================================================
// Precedence across sources
// ============================================================================

#[test]
fn test_precedence_chain() {
    let env = TestEnv::new();
    let resources = env.write_file(
        "Xresources",
        "rofi.lines: 1\nrofi.columns: 3\nrofi.font: Db 9\nrofi.dpi: 120\n",
    );
    env.write_default_resource_file("rofi.lines: 2\nrofi.font: File 9\n");
    let theme = env.write_file("theme.yaml", "lines: 4\nsort: \"yes\"\n");

    let resources = resources.to_str().unwrap();
    let theme = theme.to_str().unwrap();
    let global = ["--resources", resources, "--theme", theme];

    assert_eq!(env.get(&global, "dpi", &[]), "120 (XResources)\n");
    assert_eq!(env.get(&global, "font", &[]), "File 9 (File)\n");
    assert_eq!(env.get(&global, "lines", &[]), "4 (Rasi File)\n");
    assert_eq!(env.get(&global, "lines", &["-lines", "5"]), "5 (Commandline)\n");
    // Mistyped theme property is ignored.
    assert_eq!(env.get(&global, "sort", &[]), "false (Default)\n");
}

#[test]
fn test_explicit_config_replaces_default_resource_file() {
    let env = TestEnv::new();
    env.write_default_resource_file("rofi.lines: 2\n");
    let other = env.write_file("other-config", "rofi.columns: 6\n");

    let args = ["--config", other.to_str().unwrap()];
    assert_eq!(env.get(&args, "lines", &[]), "15 (Default)\n");
    assert_eq!(env.get(&args, "columns", &[]), "6 (File)\n");
}

#[test]
fn test_missing_resources_file_is_io_error() {
    let env = TestEnv::new();
    env.command()
        .args(["--resources", "/nonexistent/Xresources", "dump"])
        .assert()
        .code(5);
}

#[test]
fn test_invalid_theme_is_config_error() {
    let env = TestEnv::new();
    let theme = env.write_file("theme.yaml", "lines: 1.5\n");
    env.command()
        .arg("--theme")
        .arg(&theme)
        .arg("dump")
        .assert()
        .code(7);
}

#[test]
fn test_keybindings_resolved_from_resources() {
    let env = TestEnv::new();
    env.write_default_resource_file("rofi.kb-cancel: Control+c\n");
    assert_eq!(env.get(&[], "kb-cancel", &[]), "Control+c (File)\n");
}

// ============================================================================
// Views
// ============================================================================

#[test]
fn test_dump() {
    let env = TestEnv::new();
    env.command()
        .args(["dump", "--", "-lines", "9"])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "! \"Number of lines\" Set from: Commandline\nrofi.lines: ",
        ))
        .stdout(predicate::str::contains("! rofi.m: "))
        .stdout(predicate::str::contains("rofi.monitor:").not())
        .stdout(predicate::str::contains("! rofi.kb-cancel: "));
}

#[test]
fn test_dump_uses_engine_namespace() {
    let env = TestEnv::new();
    env.write_file(".config/optlayer/engine.yaml", "namespace: launcher\n");
    env.write_file(".config/launcher/config", "launcher.lines: 3\n");

    env.command()
        .arg("dump")
        .assert()
        .success()
        .stdout(predicate::str::contains("\nlauncher.lines: "))
        .stdout(predicate::str::contains("rofi.").not());
}

#[test]
fn test_list_plain() {
    let env = TestEnv::new();
    env.command()
        .args(["list", "--plain"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\t-[no-]sort "))
        .stdout(predicate::str::contains("\t-lines [number]"))
        .stdout(predicate::str::contains("\t\t15 (Default)\n"));
}

#[test]
fn test_list_json() {
    let env = TestEnv::new();
    let output = env
        .command()
        .args(["list", "--format", "json", "--", "-no-cycle"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let entries: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    let entries = entries.as_array().unwrap();
    let cycle = entries.iter().find(|e| e["name"] == "cycle").unwrap();
    assert_eq!(cycle["value"], false);
    assert_eq!(cycle["source"], "CommandLine");
    assert!(entries.iter().any(|e| e["name"] == "kb-row-down"));
    assert!(!entries.iter().any(|e| e["name"] == "switchers"));
}

#[test]
fn test_help_keys() {
    let env = TestEnv::new();
    env.command()
        .args(["help-keys", "--", "-kb-cancel", "Escape"])
        .assert()
        .success()
        .stdout(predicate::str::contains("<b>cancel"))
        .stdout(predicate::str::contains(
            "</b> (Escape) <span style='italic' size='small'>Quit rofi</span>",
        ))
        .stdout(predicate::str::contains("<b>lines").not())
        .stderr(predicate::str::contains("10 entries"));
}

#[test]
fn test_help_keys_custom_prefix() {
    let env = TestEnv::new();
    env.command()
        .args(["--quiet", "help-keys", "--prefix", "ssh"])
        .assert()
        .success()
        .stdout(predicate::str::contains("<b>client"))
        .stdout(predicate::str::contains("<b>command"))
        .stderr(predicate::str::is_empty());
}

// ============================================================================
// Misc
// ============================================================================

#[test]
fn test_completions_bash() {
    let env = TestEnv::new();
    env.command()
        .args(["completions", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("optlayer"));
}

#[test]
fn test_invalid_engine_config_exit_code() {
    let env = TestEnv::new();
    let engine = env.write_file("engine.yaml", "help_prefix: toolong\n");
    env.command()
        .arg("--engine-config")
        .arg(&engine)
        .arg("dump")
        .assert()
        .code(7)
        .stderr(predicate::str::contains("help_prefix"));
}
