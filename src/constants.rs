/// Customer generation

pub const CUSTOMER_COUNT: usize = 10;
pub const MIN_AGE: u8 = 18;
pub const MAX_AGE: u8 = 70;
pub const MIN_STARTING_BALANCE: u32 = 100;
pub const MAX_STARTING_BALANCE: u32 = 1000;
pub const MOBILE_NUMBER_PATTERN: &str = "3##-########";

/// Credit fee rule

pub const FEE_THRESHOLD: f64 = 100.0;
pub const CREDIT_FEE: f64 = 1.0;

/// Menu and prompt labels

pub const CHECK_BALANCE: &str = "Check Balance";
pub const CREDIT_MONEY: &str = "Credit Money";
pub const DEBIT_MONEY: &str = "Debit Money";
pub const EXIT: &str = "Exit";

pub const SELECT_CUSTOMER: &str = "Select a customer:";
pub const SELECT_ACTION: &str = "What would you like to do?";
pub const ENTER_AMOUNT: &str = "Enter the amount:";
pub const PROMPT: &str = "> ";

/// Messages

pub const NOT_A_NUMBER: &str = "Please enter a number";
pub const NOT_AN_OPTION: &str = "Please select one of the listed options";
pub const FAREWELL: &str = "Thank you for using the Bank App!";
