use std::fs;
use std::path::{Path, PathBuf};
use std::process::{Command, Output};

fn run_cli(input: &Path, output: &Path, extra: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_skijump"))
        .args(extra)
        .arg(input)
        .arg(output)
        .output()
        .expect("Failed to execute command")
}

fn write_config(dir: &Path, name: &str, contents: &str) -> PathBuf {
    let path = dir.join(name);
    fs::write(&path, contents).unwrap();
    path
}

fn read_rows(path: &Path, delimiter: char) -> Vec<(f64, f64)> {
    fs::read_to_string(path)
        .unwrap()
        .lines()
        .map(|line| {
            let mut columns = line.split(delimiter).map(|v| v.parse::<f64>().unwrap());
            (columns.next().unwrap(), columns.next().unwrap())
        })
        .collect()
}

#[test]
fn test_cli_default_point_count() {
    let dir = tempfile::tempdir().unwrap();
    let input = write_config(dir.path(), "jump.json", r#"{"v0": 10.0, "alpha": 0.3}"#);
    let output = dir.path().join("out.txt");

    let result = run_cli(&input, &output, &[]);
    assert!(result.status.success(), "stderr: {}", String::from_utf8_lossy(&result.stderr));

    let rows = read_rows(&output, ' ');
    assert_eq!(rows.len(), 10);
    assert_eq!(rows[0], (0.0, 0.0));

    // 丘 y = -2 - x 上に着地
    let (x_last, y_last) = rows[9];
    assert!(x_last > 0.0);
    assert!((y_last - (-2.0 - x_last)).abs() < 1e-6);

    // 等間隔
    let step = x_last / 9.0;
    for (i, (x, _)) in rows.iter().enumerate() {
        assert!((x - step * i as f64).abs() < 1e-9);
    }
}

#[test]
fn test_cli_point_count_and_comma() {
    let dir = tempfile::tempdir().unwrap();
    let input = write_config(dir.path(), "jump.yaml", "v0: 3.0\nalpha: 0.4\n");
    let output = dir.path().join("out.csv");

    let result = run_cli(&input, &output, &["-n", "7", "--delimiter", "comma"]);
    assert!(result.status.success(), "stderr: {}", String::from_utf8_lossy(&result.stderr));
    assert_eq!(read_rows(&output, ',').len(), 7);
}

#[test]
fn test_cli_single_point() {
    let dir = tempfile::tempdir().unwrap();
    let input = write_config(dir.path(), "jump.json", r#"{"v0": 10.0, "alpha": 0.3}"#);
    let output = dir.path().join("out.txt");

    let result = run_cli(&input, &output, &["-n", "1"]);
    assert!(result.status.success());
    assert_eq!(
        fs::read_to_string(&output).unwrap(),
        "0.000000000000000000e+00 0.000000000000000000e+00\n"
    );
}

#[test]
fn test_cli_zero_points_fails() {
    let dir = tempfile::tempdir().unwrap();
    let input = write_config(dir.path(), "jump.json", r#"{"v0": 10.0, "alpha": 0.3}"#);
    let output = dir.path().join("out.txt");

    let result = run_cli(&input, &output, &["-n", "0"]);
    assert!(!result.status.success());
    let stderr = String::from_utf8_lossy(&result.stderr);
    assert!(stderr.contains("invalid argument"), "stderr: {}", stderr);
    assert!(!output.exists());
}

#[test]
fn test_cli_zero_velocity_fails() {
    let dir = tempfile::tempdir().unwrap();
    let input = write_config(dir.path(), "jump.json", r#"{"v0": 0.0, "alpha": 0.3}"#);
    let output = dir.path().join("out.txt");

    let result = run_cli(&input, &output, &[]);
    assert!(!result.status.success());
    let stderr = String::from_utf8_lossy(&result.stderr);
    assert!(stderr.contains("invalid jump parameter"), "stderr: {}", stderr);
    assert!(!output.exists());
}

#[test]
fn test_cli_missing_input_fails() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("missing.json");
    let output = dir.path().join("out.txt");

    let result = run_cli(&input, &output, &[]);
    assert!(!result.status.success());
    let stderr = String::from_utf8_lossy(&result.stderr);
    assert!(stderr.contains("cannot read configuration"), "stderr: {}", stderr);
    assert!(!output.exists());
}

#[test]
fn test_cli_malformed_input_fails() {
    let dir = tempfile::tempdir().unwrap();
    let input = write_config(dir.path(), "jump.json", r#"{"alpha": 0.3}"#);
    let output = dir.path().join("out.txt");

    let result = run_cli(&input, &output, &[]);
    assert!(!result.status.success());
    let stderr = String::from_utf8_lossy(&result.stderr);
    assert!(stderr.contains("malformed JSON configuration"), "stderr: {}", stderr);
}

#[test]
fn test_cli_help() {
    let output = Command::new(env!("CARGO_BIN_EXE_skijump"))
        .arg("--help")
        .output()
        .expect("Failed to execute command");

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("--delimiter"));
    assert!(stdout.contains("-n <N>"));
}
