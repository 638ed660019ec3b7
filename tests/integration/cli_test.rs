//! Integration tests for the sgrline binary.

use predicates::prelude::*;

use super::helpers::{sgrline, temp_config};

// ============================================================================
// render
// ============================================================================

#[test]
fn render_truncates_argument_to_width() {
    let (_temp_dir, config) = temp_config("");
    sgrline(&config)
        .args(["render", "--width", "5", "hello world"])
        .assert()
        .success()
        .stdout("hello\x1b[m\x1b[m\n");
}

#[test]
fn render_applies_style_flags() {
    let (_temp_dir, config) = temp_config("");
    sgrline(&config)
        .args(["render", "-w", "10", "--fg", "brightgreen", "--bold", "ok"])
        .assert()
        .success()
        .stdout("\x1b[1;92mok\x1b[m\x1b[m\n");
}

#[test]
fn render_uses_config_default_style() {
    let (_temp_dir, config) = temp_config("[style]\nbg = \"blue\"\n[line]\nmax_width = 3\n");
    sgrline(&config)
        .args(["render", "abcdef"])
        .assert()
        .success()
        .stdout("abc\x1b[m\x1b[44m\n");
}

#[test]
fn render_reads_stdin_lines() {
    let (_temp_dir, config) = temp_config("");
    sgrline(&config)
        .args(["render", "-w", "2"])
        .write_stdin("one\ntwo\n")
        .assert()
        .success()
        .stdout("on\x1b[m\x1b[m\ntw\x1b[m\x1b[m\n");
}

#[test]
fn render_raw_keeps_embedded_escapes() {
    let (_temp_dir, config) = temp_config("");
    sgrline(&config)
        .args(["render", "--raw", "-w", "3", "ab\x1b[31mcd"])
        .assert()
        .success()
        .stdout("ab\x1b[31mc\x1b[m\x1b[m\n");
}

#[test]
fn render_honors_no_color() {
    let (_temp_dir, config) = temp_config("");
    sgrline(&config)
        .env("NO_COLOR", "1")
        .args(["render", "-w", "4", "--fg", "red", "colorful"])
        .assert()
        .success()
        .stdout("colo\n");
}

#[test]
fn render_rejects_unknown_color() {
    let (_temp_dir, config) = temp_config("");
    sgrline(&config)
        .args(["render", "--fg", "purple", "x"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("purple"));
}

#[test]
fn render_fails_on_bad_config() {
    let (_temp_dir, config) = temp_config("[style]\nfg = \"BLACK\"\n");
    sgrline(&config)
        .args(["render", "x"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("BLACK"));
}

// ============================================================================
// colors
// ============================================================================

#[test]
fn colors_lists_all_named_colors() {
    let (_temp_dir, config) = temp_config("");
    let assert = sgrline(&config).env("NO_COLOR", "1").arg("colors").assert().success();
    let stdout = String::from_utf8_lossy(&assert.get_output().stdout).to_string();

    let lines: Vec<&str> = stdout.lines().collect();
    assert_eq!(lines.len(), 16);
    assert_eq!(lines[0], "   black");
    assert_eq!(lines[15], "   brightwhite");
}

#[test]
fn colors_emit_background_swatches() {
    let (_temp_dir, config) = temp_config("");
    sgrline(&config)
        .arg("colors")
        .assert()
        .success()
        .stdout(predicate::str::contains("\x1b[41m  \x1b[m\x1b[m"))
        .stdout(predicate::str::contains("\x1b[107m  "));
}

// ============================================================================
// config
// ============================================================================

#[test]
fn config_path_prints_override() {
    let (_temp_dir, config) = temp_config("");
    sgrline(&config)
        .args(["config", "path"])
        .assert()
        .success()
        .stdout(predicate::str::contains("config.toml"));
}

#[test]
fn config_init_creates_file() {
    let temp_dir = tempfile::TempDir::new().unwrap();
    let path = temp_dir.path().join("sub").join("config.toml");

    sgrline(&path)
        .args(["config", "init"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Created"));
    assert!(path.exists());

    sgrline(&path)
        .args(["config", "init"])
        .assert()
        .success()
        .stdout(predicate::str::contains("already exists"));
}

#[test]
fn config_show_prints_toml() {
    let (_temp_dir, config) = temp_config("[style]\nfg = \"red\"\nbold = true\n");
    sgrline(&config)
        .args(["config", "show"])
        .assert()
        .success()
        .stdout(predicate::str::contains("[style]"))
        .stdout(predicate::str::contains("fg = \"red\""))
        .stdout(predicate::str::contains("bold = true"));
}
