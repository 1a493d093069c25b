use assert_cmd::Command;
use std::fs;
use std::path::Path;
use tempfile::TempDir;

fn cli() -> Command {
    let mut cmd = Command::cargo_bin("strings2android").unwrap();
    cmd.env("NO_COLOR", "1");
    cmd
}

fn write_strings(root: &Path, bundle: &str, content: &str) {
    let dir = root.join(bundle);
    fs::create_dir_all(&dir).unwrap();
    fs::write(dir.join("Localizable.strings"), content).unwrap();
}

#[test]
fn test_no_arguments_prints_usage() {
    let output = cli().output().unwrap();

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Usage"), "unexpected stdout: {}", stdout);
}

#[test]
fn test_single_argument_does_no_work() {
    let temp_dir = TempDir::new().unwrap();
    write_strings(temp_dir.path(), "en.lproj", "\"a\" = \"A\";\n");

    let output = cli().arg(temp_dir.path()).output().unwrap();

    assert!(output.status.success());
    assert!(String::from_utf8_lossy(&output.stdout).contains("Usage"));
    assert!(!temp_dir.path().join("res").exists());
}

#[test]
fn test_three_arguments_does_no_work() {
    let ios = TempDir::new().unwrap();
    let android = TempDir::new().unwrap();
    write_strings(ios.path(), "en.lproj", "\"a\" = \"A\";\n");

    let output = cli()
        .args([ios.path(), android.path(), android.path()])
        .output()
        .unwrap();

    assert!(output.status.success());
    assert!(String::from_utf8_lossy(&output.stdout).contains("Usage"));
    assert!(!android.path().join("res").exists());
}

#[test]
fn test_converts_project() {
    let ios = TempDir::new().unwrap();
    let android = TempDir::new().unwrap();
    write_strings(
        ios.path(),
        "en.lproj",
        "/* Main screen */\n\"hello.world\" = \"Hi %@, you have $@ items!\";\n\"bye\" = \"Bye\";\n",
    );
    write_strings(ios.path(), "sv.lproj", "\"bye\" = \"Hej då\";\n");

    let output = cli().args([ios.path(), android.path()]).output().unwrap();

    assert!(
        output.status.success(),
        "CLI failed: {}",
        String::from_utf8_lossy(&output.stderr)
    );
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Wrote 2 strings to"), "stdout: {}", stdout);
    assert!(stdout.contains("Wrote 1 strings to"), "stdout: {}", stdout);

    let en = fs::read_to_string(android.path().join("res/values/strings.xml")).unwrap();
    assert_eq!(
        en,
        "<resources>\n  <string name=\"hello_world\" formatted=\"false\">Hi $1%s, you have %s items!</string>\n  <string name=\"bye\">Bye</string>\n</resources>\n"
    );
    let sv = fs::read_to_string(android.path().join("res/values-sv/strings.xml")).unwrap();
    assert!(sv.contains("<string name=\"bye\">Hej då</string>"));
}

#[test]
fn test_diagnostics_name_file_and_line() {
    let ios = TempDir::new().unwrap();
    let android = TempDir::new().unwrap();
    write_strings(
        ios.path(),
        "en.lproj",
        "\"ok\" = \"OK\";\nnot a valid entry\n\"3d\" = \"3D\";\n",
    );

    let output = cli().args([ios.path(), android.path()]).output().unwrap();

    assert!(output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(
        stderr.contains("Localizable.strings:2: could not parse line contents 'not a valid entry'"),
        "stderr: {}",
        stderr
    );
    assert!(
        stderr.contains("Localizable.strings:3: invalid key string '3d'"),
        "stderr: {}",
        stderr
    );
    let en = fs::read_to_string(android.path().join("res/values/strings.xml")).unwrap();
    assert_eq!(en.matches("<string ").count(), 1);
}

#[test]
fn test_missing_root_fails() {
    let android = TempDir::new().unwrap();
    let missing = android.path().join("missing");

    let output = cli().arg(&missing).arg(android.path()).output().unwrap();

    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Error:"), "stderr: {}", stderr);
    assert!(stderr.contains("cannot list directory"), "stderr: {}", stderr);
}

#[test]
fn test_quiet_hides_progress() {
    let ios = TempDir::new().unwrap();
    let android = TempDir::new().unwrap();
    write_strings(ios.path(), "en.lproj", "\"a\" = \"A\";\n");

    let output = cli()
        .arg("--quiet")
        .args([ios.path(), android.path()])
        .output()
        .unwrap();

    assert!(output.status.success());
    assert!(output.stdout.is_empty());
    assert!(android.path().join("res/values/strings.xml").is_file());
}

#[test]
fn test_utf16_encoding_flag() {
    let ios = TempDir::new().unwrap();
    let android = TempDir::new().unwrap();
    let dir = ios.path().join("de.lproj");
    fs::create_dir_all(&dir).unwrap();
    let bytes: Vec<u8> = "\"greeting\" = \"Grüß dich\";\n"
        .encode_utf16()
        .flat_map(|unit| unit.to_le_bytes())
        .collect();
    fs::write(dir.join("Localizable.strings"), bytes).unwrap();

    let output = cli()
        .args(["--encoding", "utf-16"])
        .args([ios.path(), android.path()])
        .output()
        .unwrap();

    assert!(
        output.status.success(),
        "CLI failed: {}",
        String::from_utf8_lossy(&output.stderr)
    );
    let de = fs::read_to_string(android.path().join("res/values-de/strings.xml")).unwrap();
    assert!(de.contains("<string name=\"greeting\">Grüß dich</string>"));
}

#[test]
fn test_localizable_only_flag() {
    let ios = TempDir::new().unwrap();
    let android = TempDir::new().unwrap();
    write_strings(ios.path(), "en.lproj", "\"a\" = \"A\";\n");
    fs::write(
        ios.path().join("en.lproj/InfoPlist.strings"),
        "\"CFBundleName\" = \"App\";\n",
    )
    .unwrap();

    let output = cli()
        .args(["--source-files", "localizable"])
        .args([ios.path(), android.path()])
        .output()
        .unwrap();

    assert!(output.status.success());
    assert!(android.path().join("res/values/strings.xml").is_file());
    assert!(!android.path().join("res/values/infoplist.xml").exists());
}
