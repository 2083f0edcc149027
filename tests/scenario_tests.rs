// tests/scenario_tests.rs

//! End-to-end sessions driven through the menu with scripted input.

use bank_ledger::{Customer, PromptError, Prompter, run_session};
use std::io::{Cursor, Write};
use std::process::{Command, Output, Stdio};

fn run_script(customers: &mut [Customer], script: &str) -> (Result<usize, PromptError>, String) {
    let mut prompter = Prompter::new(Cursor::new(script.as_bytes().to_vec()), Vec::new());
    let result = run_session(&mut prompter, customers);
    let output = String::from_utf8(prompter.into_output()).expect("Output is not UTF-8");
    (result, output)
}

/// Runs the built binary with `script` on stdin
fn run_binary(script: &str, log_filter: &str) -> Output {
    let mut child = Command::new(env!("CARGO_BIN_EXE_bank_ledger"))
        .env("RUST_LOG", log_filter)
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .expect("Failed to start bank_ledger");

    child
        .stdin
        .take()
        .expect("Stdin not piped")
        .write_all(script.as_bytes())
        .expect("Failed to write script");

    child.wait_with_output().expect("Failed to wait for bank_ledger")
}

fn roster() -> Vec<Customer> {
    vec![
        Customer::new("Grace", "Hopper", 52, "301-12345678", 250.0),
        Customer::new("Linus", "Torvalds", 29, "377-87654321", 500.0),
        Customer::new("Barbara", "Liskov", 47, "355-11223344", 1000.0),
    ]
}

#[test]
fn test_ledger_scenario_through_menu() {
    let mut customers = roster();
    let script = "2\n\
                  2\n50\n\
                  3\n600\n\
                  2\n150\n\
                  1\n\
                  3\n699\n\
                  1\n\
                  4\n";

    let (result, output) = run_script(&mut customers, script);
    assert_eq!(result.unwrap(), 1);

    let expected_in_order = [
        "Welcome Linus Torvalds to the Bank App!",
        "Credited $50. New balance: $550",
        "Transaction cancelled. Insufficient balance. Current balance: $550",
        "Credited $150. $1 fee deducted. New balance: $699",
        "Your current balance is: $699",
        "Debited $699. New balance: $0",
        "Your current balance is: $0",
        "Thank you for using the Bank App!",
    ];

    let mut rest = output.as_str();
    for expected in expected_in_order {
        let at = rest
            .find(expected)
            .unwrap_or_else(|| panic!("Missing {:?} in output:\n{}", expected, output));
        rest = &rest[at + expected.len()..];
    }

    assert_eq!(customers[1].account.check_balance(), 0.0);
    assert_eq!(customers[0].account.check_balance(), 250.0);
    assert_eq!(customers[2].account.check_balance(), 1000.0);
}

#[test]
fn test_menu_accepts_labels() {
    let mut customers = roster();
    let script = "barbara liskov\ncredit money\n100\ncheck balance\nexit\n";

    let (result, output) = run_script(&mut customers, script);
    assert_eq!(result.unwrap(), 2);
    assert!(output.contains("Credited $100. New balance: $1100"));
    assert!(output.contains("Your current balance is: $1100"));
}

#[test]
fn test_invalid_amount_is_reprompted() {
    let mut customers = roster();
    let script = "1\n3\ntwenty\n\n20.25\n4\n";

    let (result, output) = run_script(&mut customers, script);
    assert!(result.is_ok());
    assert_eq!(output.matches("Please enter a number").count(), 2);
    assert!(output.contains("Debited $20.25. New balance: $229.75"));
    assert_eq!(customers[0].account.check_balance(), 229.75);
}

#[test]
fn test_invalid_menu_choice_is_reprompted() {
    let mut customers = roster();
    let script = "7\n1\n9\ntransfer\n4\n";

    let (result, output) = run_script(&mut customers, script);
    assert_eq!(result.unwrap(), 0);
    assert_eq!(
        output
            .matches("Please select one of the listed options")
            .count(),
        3
    );
}

#[test]
fn test_negative_credit_can_overdraw() {
    let mut customers = roster();
    let script = "1\n2\n-300\n1\n4\n";

    let (result, output) = run_script(&mut customers, script);
    assert!(result.is_ok());
    assert!(output.contains("Credited $-300. New balance: $-50"));
    assert_eq!(customers[0].account.check_balance(), -50.0);
}

#[test]
fn test_end_of_input_before_exit() {
    let mut customers = roster();
    let (result, output) = run_script(&mut customers, "3\n2\n40\n");

    assert!(matches!(result, Err(PromptError::InputClosed)));
    assert!(output.contains("Credited $40. New balance: $1040"));
    assert!(!output.contains("Thank you for using the Bank App!"));
}

#[test]
fn test_empty_roster() {
    let mut customers: Vec<Customer> = Vec::new();
    let (result, _) = run_script(&mut customers, "1\n");
    assert!(matches!(result, Err(PromptError::NoChoices)));
}

#[test]
fn test_negative_zero_amount_prints_as_zero() {
    let mut customers = roster();
    let (result, output) = run_script(&mut customers, "2\n2\n-0\n4\n");

    assert!(result.is_ok());
    assert!(output.contains("Credited $0. New balance: $500"));
    assert!(!output.contains("$-0"));
}

#[test]
fn test_binary_exits_cleanly_with_logs_on_stderr() {
    let output = run_binary("1\n4\n", "debug");
    let stdout = String::from_utf8_lossy(&output.stdout);
    let stderr = String::from_utf8_lossy(&output.stderr);

    assert!(output.status.success(), "Exit status: {}", output.status);
    assert!(stdout.contains("Thank you for using the Bank App!"));
    assert!(stderr.contains("Session started for customer 0"));
    for level in ["DEBUG", "INFO", "WARN", "ERROR"] {
        assert!(!stdout.contains(level), "Log line on stdout:\n{}", stdout);
    }
}

#[test]
fn test_binary_end_of_input_warns_on_stderr() {
    let output = run_binary("1\n", "warn");
    let stdout = String::from_utf8_lossy(&output.stdout);
    let stderr = String::from_utf8_lossy(&output.stderr);

    assert!(output.status.success(), "Exit status: {}", output.status);
    assert!(stdout.contains("to the Bank App!"));
    assert!(!stdout.contains("Thank you for using the Bank App!"));
    assert!(stderr.contains("WARN"));
    assert!(stderr.contains("Input closed, ending session"));
    assert!(!stdout.contains("Input closed"));
}
