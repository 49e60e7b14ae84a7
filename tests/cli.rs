use std::fs;
use std::process::Command;

fn bin() -> Command {
    Command::new(env!("CARGO_BIN_EXE_tidymerge"))
}

#[test]
fn too_few_arguments_is_usage_error() {
    let dir = tempfile::tempdir().unwrap();
    let out = bin().arg(dir.path()).arg("only").output().expect("run");
    assert_eq!(out.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&out.stderr);
    assert!(stderr.contains("Usage"));
    assert!(!dir.path().join("only.clang-tidy").exists());
}

#[test]
fn no_arguments_is_usage_error() {
    let out = bin().output().expect("run");
    assert_eq!(out.status.code(), Some(1));
}

#[test]
fn writes_merged_file_and_confirms() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(
        dir.path().join("core.clang-tidy"),
        "Checks: 'foo,bar'\nWarningsAsErrors: ''\nCheckOptions:\n  - key: x\n    value: '1'\n",
    )
    .unwrap();
    fs::write(
        dir.path().join("drv.clang-tidy"),
        "Checks: 'bar,baz'\nCheckOptions:\n  - key: y\n    value: '3'\n  - key: x\n    value: '2'\n",
    )
    .unwrap();
    fs::write(dir.path().join("merged.clang-tidy"), "stale").unwrap();

    let out = bin()
        .arg(dir.path())
        .args(["core", "gone", "drv", "merged"])
        .output()
        .expect("run");
    assert!(out.status.success());

    let target = dir.path().join("merged.clang-tidy");
    let stdout = String::from_utf8_lossy(&out.stdout);
    assert!(stdout.contains(&target.display().to_string()));
    let stderr = String::from_utf8_lossy(&out.stderr);
    assert!(stderr.contains("gone.clang-tidy"));

    let text = fs::read_to_string(&target).unwrap();
    assert_eq!(
        text,
        "WarningsAsErrors: ''\n\
         Checks: >\n  foo,\n  bar,\n  baz,\n\
         CheckOptions:\n- key: x\n  value: '2'\n- key: y\n  value: '3'\n"
    );
}

#[test]
fn malformed_input_fails_without_output() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join("bad.clang-tidy"), "Checks: [oops\n").unwrap();

    let out = bin()
        .arg(dir.path())
        .args(["bad", "merged"])
        .output()
        .expect("run");
    assert_eq!(out.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&out.stderr);
    assert!(stderr.contains("error:"));
    assert!(!dir.path().join("merged.clang-tidy").exists());
}

#[test]
fn hyphen_prefixed_names_are_inputs() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join("-x.clang-tidy"), "Checks: 'foo'\n").unwrap();
    fs::write(dir.path().join("-v.clang-tidy"), "Checks: 'bar'\n").unwrap();

    let out = bin()
        .arg(dir.path())
        .args(["-x", "-v", "out"])
        .output()
        .expect("run");
    assert!(out.status.success());

    let text = fs::read_to_string(dir.path().join("out.clang-tidy")).unwrap();
    assert_eq!(text, "Checks: >\n  foo,\n  bar,\n");
}

#[test]
fn unwritable_output_is_fatal() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join("a.clang-tidy"), "Checks: 'foo'\n").unwrap();
    fs::create_dir(dir.path().join("merged.clang-tidy")).unwrap();

    let out = bin()
        .arg(dir.path())
        .args(["a", "merged"])
        .output()
        .expect("run");
    assert_eq!(out.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&out.stderr);
    assert!(stderr.contains("error: write"));
    assert!(stderr.contains("merged.clang-tidy"));
}
