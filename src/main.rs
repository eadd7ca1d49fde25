use pagenav::{ReplayError, Scenario};
use std::env;

/// Replays a navigation scenario and prints the state after every step.
fn main() -> Result<(), ReplayError> {
    env_logger::init();

    let args: Vec<String> = env::args().collect();
    if args.len() != 2 {
        eprintln!("Replays a scripted page-navigation session against an in-memory page.");
        eprintln!();
        eprintln!("Usage: {} <path/to/scenario.json>", args[0]);
        eprintln!();
        eprintln!("Each output line is the tracker state after one step, as JSON.");
        eprintln!("Set RUST_LOG=debug to trace activations and timers.");
        std::process::exit(1);
    }

    let scenario = Scenario::from_file(&args[1])?;
    log::info!(
        "Loaded scenario with {} sections and {} steps",
        scenario.sections.len(),
        scenario.steps.len()
    );

    for record in scenario.run()? {
        println!("{}", serde_json::to_string(&record)?);
    }
    Ok(())
}
