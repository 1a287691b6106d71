//! # Order Collector
//!
//! Interactive phone-order desk. Reads answers from stdin, prints prompts and
//! receipts to stdout and logs to stderr (see [`setup_tracing`]).
//!
//! ```bash
//! cargo run
//! RUST_LOG=debug cargo run 2>desk.log
//! ```

use order_collector::config;
use order_collector::error::AppError;
use order_collector::lifecycle::{setup_tracing, Session};
use order_collector::prompt::Prompter;
use std::io;
use std::process::ExitCode;
use tracing::{error, info};

fn run() -> Result<(), AppError> {
    let shop = config::load_embedded()?;
    info!(shop = %shop.name, items = shop.menu.len(), "Menu loaded");

    let mut prompter = Prompter::new(io::stdin().lock(), io::stdout().lock());
    Session::new(&shop).run(&mut prompter)?;
    Ok(())
}

fn main() -> ExitCode {
    // Setup tracing once for the entire application
    setup_tracing();

    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!(error = %e, "Order desk stopped");
            eprintln!("{e}");
            ExitCode::FAILURE
        }
    }
}
