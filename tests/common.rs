#![allow(dead_code)]
use assert_cmd::Command;
use ledgercat::run_app;

pub const EXAMPLES: &str = "tests/example_files";

pub fn test_args(args: &[&str]) {
    let mut function_args: Vec<&str> = vec!["testing"];
    for arg in args {
        function_args.push(arg);
    }
    let res = run_app(function_args.iter().map(|x| x.to_string()).collect());
    assert!(res.is_ok());
}

pub fn test_err(args: &[&str]) {
    let mut function_args: Vec<&str> = vec!["testing"];
    for arg in args {
        function_args.push(arg);
    }
    let res = run_app(function_args.iter().map(|x| x.to_string()).collect());
    assert!(res.is_err());
}

/// The binary, isolated from the user's home directory and log settings
pub fn ledgercat() -> Command {
    let mut command = Command::cargo_bin("ledgercat").unwrap();
    command.env("HOME", EXAMPLES).env_remove("RUST_LOG");
    command
}

/// Runs the binary, checks it succeeded and returns what it printed
pub fn stdout(args: &[&str]) -> String {
    let assert = ledgercat().args(args).assert().success();
    String::from_utf8(assert.get_output().stdout.clone()).unwrap()
}

pub fn balance_line(account: &str, amount: i64) -> String {
    format!("  {:<30} {:>10}", account, amount)
}
