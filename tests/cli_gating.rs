use assert_cmd::Command;
use tempfile::TempDir;

fn cmd_with_session(tmp: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("femtrack").unwrap();
    cmd.current_dir(tmp.path());
    cmd.arg("--session").arg(tmp.path().join("session.json"));
    cmd
}

#[test]
fn private_command_requires_login() {
    let tmp = TempDir::new().unwrap();
    let mut cmd = cmd_with_session(&tmp);
    cmd.arg("me");
    let assert = cmd.assert().failure();
    let err = String::from_utf8_lossy(&assert.get_output().stderr).to_string();
    assert!(err.contains("login"), "stderr was: {err}");
}

#[test]
fn analysis_gated_without_token() {
    let tmp = TempDir::new().unwrap();
    let mut cmd = cmd_with_session(&tmp);
    cmd.args(["analysis", "--email", "user@example.com"]);
    cmd.assert().failure();
}

#[test]
fn decode_frame_gated_without_token() {
    let tmp = TempDir::new().unwrap();
    std::fs::write(tmp.path().join("frame.bin"), [0u8; 44]).unwrap();
    let mut cmd = cmd_with_session(&tmp);
    cmd.args(["decode-frame", "--input"]);
    cmd.arg(tmp.path().join("frame.bin"));
    cmd.assert().failure();
}

#[test]
fn decode_frame_works_when_logged_in() {
    let tmp = TempDir::new().unwrap();
    let session = serde_json::json!({
        "api_base": "http://localhost:8000",
        "token": "tok-test",
        "email": "user@example.com"
    });
    std::fs::write(
        tmp.path().join("session.json"),
        serde_json::to_string(&session).unwrap(),
    )
    .unwrap();
    std::fs::write(tmp.path().join("frame.bin"), [0u8; 44]).unwrap();

    let mut cmd = cmd_with_session(&tmp);
    cmd.args(["decode-frame", "--input"]);
    cmd.arg(tmp.path().join("frame.bin"));
    let assert = cmd.assert().success();
    let out = String::from_utf8_lossy(&assert.get_output().stdout).to_string();
    // 0 survives flow_ml's [0,500] bound; hb's [5,20] drops it.
    assert!(out.contains("flow_ml = 0.00"), "stdout was: {out}");
    assert!(!out.contains("hb ="), "stdout was: {out}");
}

#[test]
fn signup_validates_password_match_locally() {
    let tmp = TempDir::new().unwrap();
    let mut cmd = cmd_with_session(&tmp);
    cmd.args([
        "signup",
        "--email",
        "user@example.com",
        "--password",
        "one",
        "--confirm",
        "two",
    ]);
    let assert = cmd.assert().failure();
    let err = String::from_utf8_lossy(&assert.get_output().stderr).to_string();
    assert!(err.contains("do not match"), "stderr was: {err}");
}
