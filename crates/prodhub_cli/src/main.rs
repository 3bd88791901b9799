//! CLI smoke entry point.
//!
//! # Responsibility
//! - Verify `prodhub_core` linkage and the configured store end to end.
//! - Print today's quote from the configured store.
//!
//! Settings come from `PRODHUB_*` variables, optionally via a `.env` file.

use log::info;
use prodhub_core::{
    init_logging_from_config, CoreConfig, ProductivityHub, SqliteStore, SystemClock,
};
use std::error::Error;
use std::process::ExitCode;

fn main() -> ExitCode {
    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("prodhub: {err}");
            ExitCode::FAILURE
        }
    }
}

fn run() -> Result<(), Box<dyn Error>> {
    // A missing .env file is fine; the process environment still applies.
    let _ = dotenvy::dotenv();
    let config = CoreConfig::from_env()?;
    init_logging_from_config(&config)?;

    println!("prodhub_core ping={}", prodhub_core::ping());
    println!("prodhub_core version={}", prodhub_core::core_version());

    let conn = config.open_db()?;
    let store = SqliteStore::new(&conn);
    let clock = SystemClock;
    let hub = ProductivityHub::new(&store, config.read_policy, &clock);

    let quote = hub.quotes().daily_quote()?;
    println!("\"{}\" - {}", quote.text, quote.author);

    match hub.session().current_user()? {
        Some(user) => println!("signed in as {}", user.username),
        None => println!("no active session"),
    }
    info!("event=cli_run module=cli status=ok");
    Ok(())
}
