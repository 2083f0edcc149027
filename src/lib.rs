pub mod account;
pub mod constants;
pub mod customer;
pub mod generator;
pub mod prompt;
pub mod session;

pub use account::{BankAccount, CreditOutcome, DebitOutcome};
pub use customer::Customer;
pub use generator::generate_customers;
pub use prompt::{PromptError, Prompter};
pub use session::{Action, run_session};
