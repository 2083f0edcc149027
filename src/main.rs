use bank_ledger::constants::CUSTOMER_COUNT;
use bank_ledger::{PromptError, Prompter, generate_customers, run_session};
use std::io;
use std::process;
use tracing::warn;
use tracing_subscriber::EnvFilter;

fn main() {
    // Diagnostics go to stderr so they never mix with the prompts on stdout
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "warn".into()))
        .with_writer(io::stderr)
        .init();

    let mut customers = generate_customers(&mut rand::thread_rng(), CUSTOMER_COUNT);
    let mut prompter = Prompter::new(io::stdin().lock(), io::stdout().lock());

    match run_session(&mut prompter, &mut customers) {
        Ok(_) => {}
        Err(PromptError::InputClosed) => warn!("Input closed, ending session"),
        Err(e) => {
            eprintln!("Error running session: {}", e);
            process::exit(1);
        }
    }
}
