// Exit codes and output routing of the declang binary

use std::fs;
use std::path::PathBuf;
use std::process::{Command, Output};

fn write_source(name: &str, source: &str) -> PathBuf {
    let path = std::env::temp_dir().join(format!("declang-{}-{}.dcl", std::process::id(), name));
    fs::write(&path, source).expect("Failed to write source file");
    path
}

fn declang(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_declang"))
        .args(args)
        .output()
        .expect("Failed to run declang")
}

fn run_file(name: &str, source: &str) -> Output {
    let path = write_source(name, source);
    let output = declang(&[path.to_str().expect("non-UTF-8 temp path")]);
    let _ = fs::remove_file(&path);
    output
}

#[test]
fn test_success_prints_to_stdout() {
    let output = run_file("ok", "declarar x = 2;\nimprimir(x + 3 * 4);\nimprimir(x / 4);\n");

    assert_eq!(output.status.code(), Some(0));
    assert_eq!(String::from_utf8_lossy(&output.stdout), "14\n0.5\n");
    assert!(output.stderr.is_empty(), "unexpected stderr: {}", String::from_utf8_lossy(&output.stderr));
}

#[test]
fn test_wrong_argument_count() {
    assert_eq!(declang(&[]).status.code(), Some(64));
    assert_eq!(declang(&["a.dcl", "b.dcl"]).status.code(), Some(64));
}

#[test]
fn test_missing_file() {
    let output = declang(&["/nonexistent/declang/source.dcl"]);

    assert_eq!(output.status.code(), Some(74));
    assert!(String::from_utf8_lossy(&output.stderr).contains("could not read file"));
}

#[test]
fn test_runtime_error_keeps_earlier_output() {
    let output = run_file("runtime", "imprimir(1);\nimprimir(1 / 0);\nimprimir(2);\n");

    assert_eq!(output.status.code(), Some(74));
    assert_eq!(String::from_utf8_lossy(&output.stdout), "1\n");
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Runtime error: division by zero [line 2]"));
    assert!(stderr.contains("Execution failed."));
}

#[test]
fn test_parse_errors_all_reported() {
    let output = run_file("parse", "declarar = 1;\nimprimir(2;\nimprimir(3);\n");

    assert_eq!(output.status.code(), Some(74));
    assert!(output.stdout.is_empty());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("[line 1] Error at '=': Expected variable name."));
    assert!(stderr.contains("[line 2] Error at ';': Expected ')' after expression."));
}

#[test]
fn test_lex_error() {
    let output = run_file("lex", "imprimir(1);\ndeclarar x = 2 $ 3;\n");

    assert_eq!(output.status.code(), Some(74));
    assert!(output.stdout.is_empty());
    assert!(String::from_utf8_lossy(&output.stderr).contains("[line 2] Error: Unexpected character '$'."));
}
