use assert_cmd::Command;

#[test]
fn help_lists_subcommands() {
    let mut cmd = Command::cargo_bin("femtrack").unwrap();
    cmd.arg("--help");
    let assert = cmd.assert().success();
    let out = String::from_utf8_lossy(&assert.get_output().stdout).to_string();
    for sub in [
        "signup",
        "login",
        "add-reading",
        "analysis",
        "predict",
        "decode-frame",
        "feedback",
        "gas",
    ] {
        assert!(out.contains(sub), "missing subcommand {sub}");
    }
}

#[test]
fn version_flag_works() {
    let mut cmd = Command::cargo_bin("femtrack").unwrap();
    cmd.arg("--version");
    cmd.assert().success();
}
