use crate::constants::{CREDIT_FEE, FEE_THRESHOLD};
use serde::Serialize;
use std::fmt;

#[derive(Debug, Default, Clone, PartialEq, Serialize)]
pub struct BankAccount {
    balance: f64,
}

/// Result of a debit. Running short of funds is an outcome, not an error.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DebitOutcome {
    Debited { amount: f64, balance: f64 },
    InsufficientBalance { balance: f64 },
}

/// Result of a credit, with the fee taken if the amount crossed the threshold
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CreditOutcome {
    pub amount: f64,
    pub fee: Option<f64>,
    pub balance: f64,
}

impl BankAccount {
    pub fn new(initial_balance: f64) -> Self {
        Self {
            balance: initial_balance,
        }
    }

    /// Withdraws `amount` unless it exceeds the current balance
    pub fn debit(&mut self, amount: f64) -> DebitOutcome {
        if amount > self.balance {
            return DebitOutcome::InsufficientBalance {
                balance: self.balance,
            };
        }

        self.balance -= amount;
        DebitOutcome::Debited {
            amount,
            balance: self.balance,
        }
    }

    /// Deposits `amount`. Amounts strictly above the threshold pay a flat fee,
    /// deducted after the deposit. Negative amounts are not rejected.
    pub fn credit(&mut self, amount: f64) -> CreditOutcome {
        self.balance += amount;

        let fee = if amount > FEE_THRESHOLD {
            self.balance -= CREDIT_FEE;
            Some(CREDIT_FEE)
        } else {
            None
        };

        CreditOutcome {
            amount,
            fee,
            balance: self.balance,
        }
    }

    pub fn check_balance(&self) -> f64 {
        self.balance
    }
}

impl DebitOutcome {
    pub fn is_debited(&self) -> bool {
        matches!(self, DebitOutcome::Debited { .. })
    }

    pub fn balance(&self) -> f64 {
        match *self {
            DebitOutcome::Debited { balance, .. } => balance,
            DebitOutcome::InsufficientBalance { balance } => balance,
        }
    }
}

/// Folds `-0` into `0` so messages never show `$-0`
fn money(value: f64) -> f64 {
    value + 0.0
}

impl fmt::Display for DebitOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            DebitOutcome::Debited { amount, balance } => write!(
                f,
                "Debited ${}. New balance: ${}",
                money(amount),
                money(balance)
            ),
            DebitOutcome::InsufficientBalance { balance } => write!(
                f,
                "Transaction cancelled. Insufficient balance. Current balance: ${}",
                money(balance)
            ),
        }
    }
}

impl fmt::Display for CreditOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.fee {
            Some(fee) => write!(
                f,
                "Credited ${}. ${fee} fee deducted. New balance: ${}",
                money(self.amount),
                money(self.balance)
            ),
            None => write!(
                f,
                "Credited ${}. New balance: ${}",
                money(self.amount),
                money(self.balance)
            ),
        }
    }
}
