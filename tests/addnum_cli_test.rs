use std::path::PathBuf;
use std::process::{Command, Output};

use native_lib::loader::dynamic_lib_filenames;

// An empty config keeps a per-user config file out of the runs.
fn addnum(args: &[&str]) -> Output {
    let dir = tempfile::tempdir().unwrap();
    let config = dir.path().join("config.toml");
    std::fs::write(&config, "").unwrap();
    Command::new(env!("CARGO_BIN_EXE_addnum"))
        .args(args)
        .arg("--config")
        .arg(&config)
        .output()
        .expect("failed to run addnum")
}

fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).into_owned()
}

fn stderr(output: &Output) -> String {
    String::from_utf8_lossy(&output.stderr).into_owned()
}

#[test]
fn test_prints_sum_and_exits_zero() {
    let output = addnum(&["2", "3"]);
    assert!(output.status.success(), "stderr: {}", stderr(&output));
    assert_eq!(stdout(&output).trim_end(), "Sum rcvd from C file calculation: 5");
}

#[test]
fn test_negative_operand_is_a_value_not_a_flag() {
    let output = addnum(&["-5", "5"]);
    assert!(output.status.success(), "stderr: {}", stderr(&output));
    assert!(stdout(&output).trim_end().ends_with(": 0"));
}

#[test]
fn test_bad_input_hints_on_stderr_and_exits_zero() {
    let output = addnum(&["abc", "5"]);
    assert!(output.status.success());
    assert!(stdout(&output).is_empty());
    assert!(stderr(&output).contains("\"abc\" in number_1 is not a whole number"));
}

#[test]
fn test_missing_library_exits_nonzero() {
    let output = addnum(&["2", "3", "--library", "/nonexistent/libnative_lib.so"]);
    assert!(!output.status.success());
    assert!(stdout(&output).is_empty());
    assert!(stderr(&output).contains("native library failed to load"));
}

#[test]
fn test_repeat_shows_one_message_per_trigger() {
    let output = addnum(&["40", "2", "--repeat", "3"]);
    assert!(output.status.success());
    let text = stdout(&output);
    let lines: Vec<&str> = text.lines().collect();
    assert_eq!(lines.len(), 3);
    assert!(lines.iter().all(|line| line.ends_with("42")));
}

#[test]
fn test_loads_built_cdylib_by_module_name() {
    let exe = PathBuf::from(env!("CARGO_BIN_EXE_addnum"));
    let target_dir = exe.parent().unwrap();
    let built = target_dir.join(&dynamic_lib_filenames("native_lib")[0]);
    assert!(built.is_file(), "expected {} next to addnum", built.display());

    let output = addnum(&["2", "3", "--library", built.to_str().unwrap()]);
    assert!(output.status.success(), "stderr: {}", stderr(&output));
    assert!(stdout(&output).trim_end().ends_with(": 5"));
}
