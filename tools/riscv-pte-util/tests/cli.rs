use std::process::{Command, Output};

fn run(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_riscv-pte-util"))
        .args(args)
        .output()
        .expect("spawn riscv-pte-util")
}

fn stdout(out: &Output) -> String {
    String::from_utf8_lossy(&out.stdout).into_owned()
}

fn stderr(out: &Output) -> String {
    String::from_utf8_lossy(&out.stderr).into_owned()
}

#[test]
fn encodes_sv39_entry() {
    let out = run(&["sv39", "0x80000000", "URWV"]);
    assert_eq!(out.status.code(), Some(0));
    assert_eq!(
        stdout(&out),
        "mode=sv39 pa=0x80000000 flags=0x17 pte_val=0x8000017\n"
    );
}

#[test]
fn encodes_sv32_entry() {
    let out = run(&["sv32", "0x1000", "V"]);
    assert_eq!(out.status.code(), Some(0));
    assert_eq!(stdout(&out), "mode=sv32 pa=0x1000 flags=0x1 pte_val=0x101\n");
}

#[test]
fn encodes_empty_sv48_entry() {
    let out = run(&["Sv48", "0x0", ""]);
    assert_eq!(out.status.code(), Some(0));
    assert_eq!(stdout(&out), "mode=Sv48 pa=0x0 flags=0x0 pte_val=0x0\n");
}

#[test]
fn bare_hex_prefix_is_address_zero() {
    let out = run(&["sv48", "0x", ""]);
    assert_eq!(out.status.code(), Some(0));
    assert_eq!(stdout(&out), "mode=sv48 pa=0x0 flags=0x0 pte_val=0x0\n");

    let out = run(&["sv39", "0x", "V"]);
    assert_eq!(out.status.code(), Some(0));
    assert_eq!(stdout(&out), "mode=sv39 pa=0x0 flags=0x1 pte_val=0x1\n");
}

#[test]
fn wrong_argument_count_prints_usage() {
    let cases: [&[&str]; 3] = [&["sv39", "0x80000000"], &[], &["sv39", "0x0", "V", "X"]];
    for args in cases {
        let out = run(args);
        assert_eq!(out.status.code(), Some(1), "{args:?}");
        let text = stdout(&out);
        let lines: Vec<_> = text.lines().collect();
        assert_eq!(lines.len(), 2, "{text}");
        assert!(lines[0].starts_with("usage: "));
        assert!(lines[0].ends_with(" (sv32|sv39|sv48) <pa> <DAGUXWRV>"));
        assert!(lines[1].ends_with(" sv39 0x80000000 URWV"));
    }
}

#[test]
fn bad_address_prints_nothing_on_stdout() {
    let out = run(&["sv39", "0xGG", "V"]);
    assert_eq!(out.status.code(), Some(2));
    assert!(stdout(&out).is_empty());
    assert!(stderr(&out).contains("0xGG"), "{}", stderr(&out));
}

#[test]
fn bad_flag_is_named() {
    let out = run(&["sv39", "0x1000", "RWQ"]);
    assert_eq!(out.status.code(), Some(2));
    assert!(stdout(&out).is_empty());
    assert!(stderr(&out).contains("unknown PTE flag: Q"), "{}", stderr(&out));
}

#[test]
fn bad_mode_is_named() {
    let out = run(&["sv64", "0x1000", "V"]);
    assert_eq!(out.status.code(), Some(2));
    assert!(stdout(&out).is_empty());
    assert!(stderr(&out).contains("invalid PTE mode: sv64"), "{}", stderr(&out));
}
