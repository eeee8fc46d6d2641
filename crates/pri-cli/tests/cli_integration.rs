//! CLI Integration Tests
//!
//! Run the `pri-site` binary end-to-end against pages and configuration files
//! written to a temporary directory.

use std::fs;
use std::path::PathBuf;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

// ============================================================================
// Test Utilities
// ============================================================================

fn cli_cmd() -> Command {
    Command::cargo_bin("pri-site").expect("Failed to find pri-site binary")
}

fn write_file(dir: &TempDir, name: &str, contents: &str) -> PathBuf {
    let path = dir.path().join(name);
    fs::write(&path, contents).unwrap();
    path
}

const FULL_PAGE: &str = r##"<!DOCTYPE html>
<html>
<body>
  <div id="loader-overlay"></div>
  <header class="header">
    <ul class="nav-links"><li><a href="#vision">Vision</a></li></ul>
    <div class="hamburger"></div>
  </header>
  <aside id="sideDrawer"><button id="drawerClose"></button>
    <nav class="drawer-nav"><ul><li><a href="#accueil">Accueil</a></li></ul></nav>
  </aside>
  <div id="drawerBackdrop"></div>
  <h1 id="heroType"></h1>
  <div class="org-card"></div>
  <div id="direction-parti">
    <div class="direction-parti-card">
      <h3 class="direction-parti-name">A</h3><p class="direction-parti-role">B</p>
    </div>
  </div>
  <form id="contactForm"><button id="contactSubmit"></button><div class="form-feedback"></div></form>
  <a class="scroll-top" id="backToTop"></a>
  <script type="application/json" id="site-config">
    {"relay": {"user_id": "u1", "service_id": "s1", "template_id": "t1"}}
  </script>
</body>
</html>
"##;

// ============================================================================
// check-markup
// ============================================================================

#[test]
fn test_check_markup_full_page_is_wired() {
    let dir = TempDir::new().unwrap();
    let page = write_file(&dir, "index.html", FULL_PAGE);

    cli_cmd()
        .arg("check-markup")
        .arg(&page)
        .arg("--strict")
        .assert()
        .success()
        .stdout(predicate::str::contains("drawer"))
        .stdout(predicate::str::contains("inert").not())
        .stdout(predicate::str::contains("Site config: relay configured"));
}

#[test]
fn test_check_markup_reports_missing_hooks() {
    let dir = TempDir::new().unwrap();
    let page = write_file(&dir, "bare.html", r#"<h1 id="heroType"></h1>"#);

    cli_cmd()
        .arg("check-markup")
        .arg(&page)
        .assert()
        .success()
        .stdout(predicate::str::contains("typewriter     wired"))
        .stdout(predicate::str::contains("inert (missing .hamburger"))
        .stdout(predicate::str::contains("Site config: absent"));
}

#[test]
fn test_check_markup_strict_fails_on_inert_component() {
    let dir = TempDir::new().unwrap();
    let page = write_file(&dir, "bare.html", r#"<h1 id="heroType"></h1>"#);

    cli_cmd()
        .arg("check-markup")
        .arg(&page)
        .arg("--strict")
        .assert()
        .failure()
        .stderr(predicate::str::contains("inert component(s)"));
}

#[test]
fn test_check_markup_strict_fails_on_invalid_config() {
    let dir = TempDir::new().unwrap();
    let broken = FULL_PAGE.replace(r#""template_id": "t1"}}"#, r#""template_id": "t1""#);
    let page = write_file(&dir, "broken.html", &broken);

    cli_cmd()
        .arg("check-markup")
        .arg(&page)
        .arg("--strict")
        .assert()
        .failure()
        .stdout(predicate::str::contains("Site config: invalid"));
}

#[test]
fn test_check_markup_json_output() {
    let dir = TempDir::new().unwrap();
    let page = write_file(&dir, "bare.html", r#"<h1 id="heroType"></h1>"#);

    let output = cli_cmd()
        .arg("check-markup")
        .arg(&page)
        .arg("--json")
        .output()
        .unwrap();
    assert!(output.status.success());

    let report: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    let components = report["components"].as_array().unwrap();
    let typewriter = components
        .iter()
        .find(|c| c["component"] == "typewriter")
        .unwrap();
    assert_eq!(typewriter["wired"], true);

    let drawer = components.iter().find(|c| c["component"] == "drawer").unwrap();
    assert_eq!(drawer["wired"], false);
    assert_eq!(drawer["missing"][0]["kind"], "class");
    assert_eq!(drawer["missing"][0]["name"], "hamburger");
    assert_eq!(report["config"]["status"], "absent");
}

#[test]
fn test_check_markup_missing_file() {
    cli_cmd()
        .args(["check-markup", "/nonexistent/page.html"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to read"));
}

// ============================================================================
// mailto
// ============================================================================

#[test]
fn test_mailto_default_recipient() {
    cli_cmd()
        .args(["mailto", "--field", "nom=Koné", "--field", "message=Bonjour"])
        .assert()
        .success()
        .stdout(predicate::str::starts_with(
            "mailto:lepri.vision2030@gmail.com?subject=Nouvelle%20demande%20depuis%20le%20site%20PRI",
        ))
        .stdout(predicate::str::contains(
            "&body=nom%3A%20Kon%C3%A9%0Amessage%3A%20Bonjour",
        ));
}

#[test]
fn test_mailto_value_may_contain_equals() {
    cli_cmd()
        .args(["mailto", "--field", "expr=a=b"])
        .assert()
        .success()
        .stdout(predicate::str::contains("body=expr%3A%20a%3Db"));
}

#[test]
fn test_mailto_uses_config_addressing() {
    let dir = TempDir::new().unwrap();
    let config = write_file(
        &dir,
        "site.json",
        r#"{"mail": {"recipient": "contact@example.org", "subject": "Test"}}"#,
    );

    cli_cmd()
        .args(["mailto", "--field", "a=1", "--config"])
        .arg(&config)
        .assert()
        .success()
        .stdout(predicate::str::starts_with(
            "mailto:contact@example.org?subject=Test&body=a%3A%201",
        ));
}

#[test]
fn test_mailto_rejects_malformed_field() {
    cli_cmd()
        .args(["mailto", "--field", "no-separator"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("expected name=value"));
}

// ============================================================================
// config
// ============================================================================

#[test]
fn test_config_defaults_are_placeholders() {
    let dir = TempDir::new().unwrap();
    let config = write_file(&dir, "site.json", "{}");

    cli_cmd()
        .arg("config")
        .arg(&config)
        .assert()
        .success()
        .stdout(predicate::str::contains("Status: mail fallback only"))
        .stdout(predicate::str::contains("user_id still holds a placeholder"))
        .stdout(predicate::str::contains("Send timeout: 15000 ms"))
        .stdout(predicate::str::contains("Recipient: lepri.vision2030@gmail.com"));
}

#[test]
fn test_config_configured_relay() {
    let dir = TempDir::new().unwrap();
    let config = write_file(
        &dir,
        "site.json",
        r#"{"relay": {"user_id": "u", "service_id": "svc", "template_id": "tpl", "send_timeout_ms": 8000}, "log_filter": "debug"}"#,
    );

    cli_cmd()
        .arg("config")
        .arg(&config)
        .assert()
        .success()
        .stdout(predicate::str::contains("Status: configured"))
        .stdout(predicate::str::contains("Service: svc"))
        .stdout(predicate::str::contains("Send timeout: 8000 ms"))
        .stdout(predicate::str::contains("Log filter: debug"));
}

#[test]
fn test_config_parse_error() {
    let dir = TempDir::new().unwrap();
    let config = write_file(&dir, "site.json", "{ not json");

    cli_cmd()
        .arg("config")
        .arg(&config)
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid site config"));
}
