use std::fs;

use tempfile::tempdir;

use crate::common::{run_probe, run_probe_with_env, stdout_of, ROOT_ENV};

#[test]
fn existing_root_relative_directory_prints_true() {
    let temp = tempdir().expect("can create temporary directory");
    fs::create_dir_all(temp.path().join("build/foo")).expect("can create fixture tree");
    let root = temp.path().display().to_string();

    let output = run_probe(&["--root", &root, "//build/foo"]);
    assert_eq!(output.status.code(), Some(0));
    assert_eq!(stdout_of(&output), "True\n");
}

#[test]
fn missing_root_relative_directory_prints_false() {
    let temp = tempdir().expect("can create temporary directory");
    fs::create_dir_all(temp.path().join("build")).expect("can create fixture tree");
    let root = temp.path().display().to_string();

    let output = run_probe(&["--root", &root, "//build/missing"]);
    assert_eq!(output.status.code(), Some(0));
    assert_eq!(stdout_of(&output), "False\n");
}

#[test]
fn regular_file_prints_false() {
    let temp = tempdir().expect("can create temporary directory");
    let file = temp.path().join("somefile.txt");
    fs::write(&file, "contents").expect("can write fixture file");

    let output = run_probe(&[&file.display().to_string()]);
    assert_eq!(output.status.code(), Some(0));
    assert_eq!(stdout_of(&output), "False\n");
}

#[test]
fn absolute_path_passes_through_without_root_joining() {
    let temp = tempdir().expect("can create temporary directory");
    let dir = temp.path().join("plain");
    fs::create_dir_all(&dir).expect("can create fixture tree");

    // Point the root somewhere unrelated; a non-// path must ignore it.
    let output = run_probe(&["--root", "/nonexistent-root", &dir.display().to_string()]);
    assert_eq!(output.status.code(), Some(0));
    assert_eq!(stdout_of(&output), "True\n");
}

#[test]
fn environment_variable_supplies_the_source_root() {
    let temp = tempdir().expect("can create temporary directory");
    fs::create_dir_all(temp.path().join("build/foo")).expect("can create fixture tree");
    let root = temp.path().display().to_string();

    let output = run_probe_with_env(&["//build/foo"], &[(ROOT_ENV, &root)]);
    assert_eq!(output.status.code(), Some(0));
    assert_eq!(stdout_of(&output), "True\n");
}

#[test]
fn cli_root_overrides_environment_root() {
    let cli_temp = tempdir().expect("can create temporary directory");
    fs::create_dir_all(cli_temp.path().join("build/foo")).expect("can create fixture tree");
    let env_temp = tempdir().expect("can create temporary directory");

    let output = run_probe_with_env(
        &[
            "--root",
            &cli_temp.path().display().to_string(),
            "//build/foo",
        ],
        &[(ROOT_ENV, &env_temp.path().display().to_string())],
    );
    assert_eq!(output.status.code(), Some(0));
    assert_eq!(stdout_of(&output), "True\n");
}

#[test]
fn repeated_invocations_print_identical_verdicts() {
    let temp = tempdir().expect("can create temporary directory");
    fs::create_dir_all(temp.path().join("sub")).expect("can create fixture tree");
    let root = temp.path().display().to_string();

    let first = run_probe(&["--root", &root, "//sub"]);
    let second = run_probe(&["--root", &root, "//sub"]);
    assert_eq!(first.status.code(), second.status.code());
    assert_eq!(stdout_of(&first), stdout_of(&second));
}

#[test]
fn json_format_reports_resolution_details() {
    let temp = tempdir().expect("can create temporary directory");
    fs::create_dir_all(temp.path().join("build/foo")).expect("can create fixture tree");
    let root = temp.path().display().to_string();

    let output = run_probe_with_env(&["--format", "json", "//build/foo"], &[(ROOT_ENV, &root)]);
    assert_eq!(output.status.code(), Some(0));

    let report: serde_json::Value =
        serde_json::from_str(stdout_of(&output).trim()).expect("stdout should be valid JSON");
    assert_eq!(report["path"], "//build/foo");
    assert_eq!(report["exists"], true);
    assert_eq!(report["root_source"], "env");
}

#[cfg(unix)]
#[test]
fn unreadable_parent_is_inconclusive_with_exit_two() {
    use std::os::unix::fs::PermissionsExt;

    // Running as root bypasses permission bits, making the fixture moot.
    if unsafe { libc::geteuid() } == 0 {
        return;
    }

    let temp = tempdir().expect("can create temporary directory");
    let locked = temp.path().join("locked");
    fs::create_dir_all(locked.join("inner")).expect("can create fixture tree");
    fs::set_permissions(&locked, fs::Permissions::from_mode(0o000))
        .expect("can lock fixture directory");

    let output = run_probe(&[&locked.join("inner").display().to_string()]);

    fs::set_permissions(&locked, fs::Permissions::from_mode(0o755))
        .expect("can unlock fixture directory");

    assert_eq!(output.status.code(), Some(2));
    assert!(stdout_of(&output).is_empty(), "no verdict on a fault");
}
