use std::{
    io::Write,
    process::{Command, Stdio},
};

fn seqmerge() -> Command {
    Command::new(env!("CARGO_BIN_EXE_seqmerge"))
}

#[test]
fn merges_from_flags() {
    let out = seqmerge()
        .args(["--left", "-5,0,3", "--right", "-5,4"])
        .output()
        .unwrap();
    assert!(out.status.success());
    assert_eq!(String::from_utf8(out.stdout).unwrap(), "[-5, -5, 0, 3, 4]\n");
}

#[test]
fn stdin_with_left_fails() {
    let out = seqmerge().args(["--stdin", "--left", "1"]).output().unwrap();
    assert!(!out.status.success());
}

#[test]
fn answers_stdin_requests() {
    let mut child = seqmerge()
        .arg("--stdin")
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .spawn()
        .unwrap();
    child
        .stdin
        .take()
        .unwrap()
        .write_all(b"{\"left\":[1,3],\"right\":[2]}\nnot json\n")
        .unwrap();
    let out = child.wait_with_output().unwrap();
    assert!(out.status.success());

    let stdout = String::from_utf8(out.stdout).unwrap();
    let lines: Vec<_> = stdout.lines().collect();
    assert_eq!(
        lines[0],
        r#"{"Merged":{"merged":[1,2,3],"sorted_inputs":true}}"#
    );
    assert!(lines[1].starts_with(r#"{"Error":"#));
    assert_eq!(lines.len(), 2);
}
