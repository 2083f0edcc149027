use crate::constants::{
    MAX_AGE, MAX_STARTING_BALANCE, MIN_AGE, MIN_STARTING_BALANCE, MOBILE_NUMBER_PATTERN,
};
use crate::customer::Customer;
use rand::Rng;
use tracing::debug;

const FIRST_NAMES: &[&str] = &[
    "Olivia", "Liam", "Emma", "Noah", "Amelia", "Oliver", "Sophia", "Elijah", "Isabella", "Mateo",
    "Mia", "Lucas", "Harper", "Levi", "Evelyn", "Ezra", "Luna", "Asher", "Camila", "James",
    "Aria", "Leo", "Nora", "Kai", "Zoe", "Hudson", "Maya", "Ivan", "Chloe", "Miles",
];

const LAST_NAMES: &[&str] = &[
    "Smith", "Johnson", "Williams", "Brown", "Jones", "Garcia", "Miller", "Davis", "Rodriguez",
    "Martinez", "Hernandez", "Lopez", "Gonzalez", "Wilson", "Anderson", "Thomas", "Taylor",
    "Moore", "Jackson", "Martin", "Lee", "Perez", "Thompson", "White", "Harris", "Clark",
    "Lewis", "Walker", "Young", "Nguyen",
];

/// Generates `count` customers with fake personal details and a random
/// whole-number starting balance
pub fn generate_customers<R: Rng + ?Sized>(rng: &mut R, count: usize) -> Vec<Customer> {
    let customers: Vec<Customer> = (0..count).map(|_| generate_customer(rng)).collect();

    debug!(
        "Generated {} customers: {}",
        customers.len(),
        serde_json::to_string(&customers).unwrap_or_default()
    );
    customers
}

fn generate_customer<R: Rng + ?Sized>(rng: &mut R) -> Customer {
    let first_name = FIRST_NAMES[rng.gen_range(0..FIRST_NAMES.len())];
    let last_name = LAST_NAMES[rng.gen_range(0..LAST_NAMES.len())];
    let age = rng.gen_range(MIN_AGE..=MAX_AGE);
    let mobile_number = fill_digits(rng, MOBILE_NUMBER_PATTERN);
    let starting_balance = rng.gen_range(MIN_STARTING_BALANCE..=MAX_STARTING_BALANCE);

    Customer::new(
        first_name,
        last_name,
        age,
        mobile_number,
        f64::from(starting_balance),
    )
}

/// Replaces every `#` in `pattern` with a random decimal digit
fn fill_digits<R: Rng + ?Sized>(rng: &mut R, pattern: &str) -> String {
    pattern
        .chars()
        .map(|c| {
            if c == '#' {
                char::from(b'0' + rng.gen_range(0..10u8))
            } else {
                c
            }
        })
        .collect()
}
