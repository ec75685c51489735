use std::process::{Command, Output};

fn run_dlayout(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_dlayout"))
        .args(args)
        .env_remove("RUST_LOG")
        .env_remove("DLAYOUT_DEBUG")
        .env_remove("DLAYOUT_DEFAULT")
        .output()
        .expect("failed to spawn dlayout")
}

#[test]
fn lists_every_layout_without_arguments() {
    let out = run_dlayout(&[]);
    assert!(out.status.success());
    assert_eq!(
        String::from_utf8_lossy(&out.stdout),
        "0\tNCHW\t1\n1\tNC4HW\t4\n2\tNC32HW\t32\n"
    );
}

#[test]
fn resolves_names_and_ordinals() {
    let out = run_dlayout(&["nc4hw", "2"]);
    assert!(out.status.success());
    assert_eq!(
        String::from_utf8_lossy(&out.stdout),
        "1\tNC4HW\t4\n2\tNC32HW\t32\n"
    );
}

#[test]
fn bad_ordinal_exits_with_status_one() {
    let out = run_dlayout(&["nc4hw", "9", "nchw"]);
    assert_eq!(out.status.code(), Some(1));
    assert_eq!(String::from_utf8_lossy(&out.stdout), "1\tNC4HW\t4\n");

    let stderr = String::from_utf8_lossy(&out.stderr);
    assert!(stderr.contains("invalid layout ordinal 9"), "stderr: {stderr}");
    assert_eq!(stderr.lines().count(), 1, "stderr: {stderr}");
}

#[test]
fn bad_environment_exits_with_status_one() {
    let out = Command::new(env!("CARGO_BIN_EXE_dlayout"))
        .env_remove("RUST_LOG")
        .env("DLAYOUT_DEFAULT", "NHWC")
        .output()
        .expect("failed to spawn dlayout");
    assert_eq!(out.status.code(), Some(1));
    assert!(out.stdout.is_empty());
    assert!(String::from_utf8_lossy(&out.stderr).contains("DLAYOUT_DEFAULT"));
}
