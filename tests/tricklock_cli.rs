use std::process::Command;

fn combined_output(output: &std::process::Output) -> String {
    let mut combined = String::new();
    combined.push_str(&String::from_utf8_lossy(&output.stdout));
    combined.push_str(&String::from_utf8_lossy(&output.stderr));
    combined
}

fn tricklock_bin() -> &'static str {
    option_env!("CARGO_BIN_EXE_tricklock").expect("tricklock test binary not built")
}

#[test]
fn help_mentions_name() {
    let output = Command::new(tricklock_bin())
        .arg("--help")
        .output()
        .expect("run tricklock --help");
    assert!(output.status.success());
    let combined = combined_output(&output);
    assert!(combined.contains("tricklock"));
    assert!(combined.contains("--profile-dir"));
}

#[test]
fn doctor_prints_profile_and_log_paths() {
    let output = Command::new(tricklock_bin())
        .args(["--doctor", "--profile-dir", "/tmp/tricklock-doctor"])
        .output()
        .expect("run tricklock --doctor");
    assert!(output.status.success());
    let combined = combined_output(&output);
    assert!(combined.contains("tricklock"));
    assert!(combined.contains("profile_dir: /tmp/tricklock-doctor"));
    assert!(combined.contains("debug_log:"));
}

#[test]
fn rejects_invalid_code_length() {
    let output = Command::new(tricklock_bin())
        .args(["--doctor", "--code-length", "5"])
        .output()
        .expect("run tricklock with bad code length");
    assert!(!output.status.success());
    let combined = combined_output(&output);
    assert!(combined.contains("--code-length"));
}
