//! Headless scenario runner (native).
//!
//! Replays a JSON scenario against a slider and prints every change.

mod scenario;

use std::path::PathBuf;

use scenario::{DemoError, Scenario};

fn main() {
    env_logger::init();
    log::info!("Starting Twinslide demo");

    if let Err(e) = run() {
        log::error!("{}", e);
        eprintln!("{}", e);
        std::process::exit(1);
    }
}

fn run() -> Result<(), DemoError> {
    let path = std::env::args().nth(1).map(PathBuf::from).ok_or(DemoError::Usage)?;
    let scenario = Scenario::load(&path)?;
    log::info!(
        "Loaded {} step(s) in {:?} mode from {}",
        scenario.steps.len(),
        scenario.config.mode,
        path.display()
    );

    let outcome = scenario.run()?;
    for (low, high) in &outcome.changes {
        println!("{} .. {}", low, high);
    }
    println!(
        "final: {} .. {} (delta {}, {} event(s))",
        outcome.texts.0, outcome.texts.1, outcome.value_delta, outcome.events
    );
    Ok(())
}
