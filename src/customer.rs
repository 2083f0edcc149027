use crate::account::BankAccount;
use serde::Serialize;

/// A bank customer. Personal details are informational only.
#[derive(Debug, Clone, Serialize)]
pub struct Customer {
    pub first_name: String,
    pub last_name: String,
    pub age: u8,
    pub mobile_number: String,
    pub account: BankAccount,
}

impl Customer {
    pub fn new(
        first_name: impl Into<String>,
        last_name: impl Into<String>,
        age: u8,
        mobile_number: impl Into<String>,
        starting_balance: f64,
    ) -> Self {
        Self {
            first_name: first_name.into(),
            last_name: last_name.into(),
            age,
            mobile_number: mobile_number.into(),
            account: BankAccount::new(starting_balance),
        }
    }

    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}
