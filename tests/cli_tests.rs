use std::io::Write;
use std::process::Command;

const MANIFEST: &str = r#"routes:
  - method: GET
    path: /movies
    handler: list_movies
  - method: GET
    path: "/movies/{id:number}"
    handler: get_movie
  - method: GET
    path: "/movies/{title:string}"
    handler: find_movie
"#;

fn manifest_file() -> tempfile::NamedTempFile {
    let mut file = tempfile::Builder::new().suffix(".yaml").tempfile().unwrap();
    file.write_all(MANIFEST.as_bytes()).unwrap();
    file
}

fn routeboard() -> Command {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_routeboard"));
    cmd.env("ROUTEBOARD_LOG_LEVEL", "error");
    cmd.env_remove("RUST_LOG");
    cmd
}

#[test]
fn test_cli_list_prints_table_in_order() {
    let manifest = manifest_file();
    let output = routeboard()
        .arg("list")
        .arg("--routes")
        .arg(manifest.path())
        .output()
        .expect("run cli");

    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).unwrap();
    let lines: Vec<&str> = stdout.lines().collect();
    assert_eq!(lines.len(), 3);
    assert!(lines[0].ends_with("/movies"));
    assert!(lines[1].ends_with("/movies/{id:number}"));
    assert!(lines[2].ends_with("/movies/{title:string}"));
}

#[test]
fn test_cli_probe_hit() {
    let manifest = manifest_file();
    let output = routeboard()
        .args(["probe", "--quiet", "--routes"])
        .arg(manifest.path())
        .args(["GET", "/movies/42"])
        .output()
        .expect("run cli");

    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).unwrap();
    let mut lines = stdout.lines();
    assert_eq!(lines.next(), Some("status: 200"));
    let body: serde_json::Value = serde_json::from_str(lines.next().unwrap()).unwrap();
    assert_eq!(body["handler"], "get_movie");
    assert_eq!(body["params"]["id"], "42");
}

#[test]
fn test_cli_probe_miss_exits_nonzero() {
    let manifest = manifest_file();
    let output = routeboard()
        .args(["probe", "--quiet", "--routes"])
        .arg(manifest.path())
        .args(["DELETE", "/movies/42"])
        .output()
        .expect("run cli");

    assert_eq!(output.status.code(), Some(1));
    let stdout = String::from_utf8(output.stdout).unwrap();
    assert_eq!(stdout.trim(), "status: 404");
}

#[test]
fn test_cli_probe_with_config_file() {
    let manifest = manifest_file();
    let mut config = tempfile::Builder::new().suffix(".yaml").tempfile().unwrap();
    config.write_all(b"show_log: false\n").unwrap();

    let output = routeboard()
        .env("ROUTEBOARD_LOG_LEVEL", "info")
        .args(["probe", "--routes"])
        .arg(manifest.path())
        .arg("--config")
        .arg(config.path())
        .args(["GET", "/movies"])
        .output()
        .expect("run cli");

    assert!(output.status.success());
    let stderr = String::from_utf8(output.stderr).unwrap();
    assert!(!stderr.contains("routing with route"));
}

#[test]
fn test_cli_reports_bad_manifest() {
    let mut manifest = tempfile::Builder::new().suffix(".yaml").tempfile().unwrap();
    manifest
        .write_all(b"routes:\n  - method: TRACE\n    path: /x\n    handler: x\n")
        .unwrap();

    let output = routeboard()
        .arg("list")
        .arg("--routes")
        .arg(manifest.path())
        .output()
        .expect("run cli");

    assert!(!output.status.success());
    let stderr = String::from_utf8(output.stderr).unwrap();
    assert!(stderr.contains("unsupported HTTP method: TRACE"));
}
