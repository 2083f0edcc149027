use crate::constants::{
    CHECK_BALANCE, CREDIT_MONEY, DEBIT_MONEY, ENTER_AMOUNT, EXIT, FAREWELL, SELECT_ACTION,
    SELECT_CUSTOMER,
};
use crate::customer::Customer;
use crate::prompt::{PromptError, Prompter};
use std::io::{BufRead, Write};
use tracing::{debug, info};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    CheckBalance,
    CreditMoney,
    DebitMoney,
    Exit,
}

impl Action {
    /// Menu order
    pub const ALL: [Action; 4] = [
        Action::CheckBalance,
        Action::CreditMoney,
        Action::DebitMoney,
        Action::Exit,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Action::CheckBalance => CHECK_BALANCE,
            Action::CreditMoney => CREDIT_MONEY,
            Action::DebitMoney => DEBIT_MONEY,
            Action::Exit => EXIT,
        }
    }
}

/// Lets the user pick a customer, then serves menu actions against that
/// customer's account until Exit is chosen.
///
/// Returns the index of the selected customer.
pub fn run_session<R: BufRead, W: Write>(
    prompter: &mut Prompter<R, W>,
    customers: &mut [Customer],
) -> Result<usize, PromptError> {
    let names: Vec<String> = customers.iter().map(Customer::full_name).collect();
    let selected = prompter.select(SELECT_CUSTOMER, &names)?;
    let customer = &mut customers[selected];

    info!("Session started for customer {}", selected);
    prompter.say(format!("Welcome {} to the Bank App!", customer.full_name()))?;

    let labels = Action::ALL.map(|action| action.label());
    loop {
        let action = Action::ALL[prompter.select(SELECT_ACTION, &labels)?];
        debug!("Selected {:?}", action);

        match action {
            Action::CheckBalance => {
                prompter.say(format!(
                    "Your current balance is: ${}",
                    customer.account.check_balance()
                ))?;
            }
            Action::CreditMoney => {
                let amount = prompter.input_number(ENTER_AMOUNT)?;
                let outcome = customer.account.credit(amount);
                prompter.say(outcome)?;
            }
            Action::DebitMoney => {
                let amount = prompter.input_number(ENTER_AMOUNT)?;
                let outcome = customer.account.debit(amount);
                if !outcome.is_debited() {
                    info!("Debit of {} refused, balance {}", amount, outcome.balance());
                }
                prompter.say(outcome)?;
            }
            Action::Exit => {
                prompter.say(FAREWELL)?;
                break;
            }
        }
    }

    info!("Session ended for customer {}", selected);
    Ok(selected)
}
