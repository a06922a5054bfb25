//! Wellsim - Entry Point
//!
//! Runs the interactive loop: print the stats panel and menu, read one
//! choice, dispatch to the matching simulator operation, repeat until the
//! user exits.

use std::io::{self, Write};

use clap::Parser;

use wellsim::core::error::Result;
use wellsim::simulation::{Activity, Simulator};
use wellsim::ui::display;

/// Turn-based wellbeing simulator
#[derive(Parser, Debug)]
#[command(name = "wellsim")]
#[command(about = "Track energy, happiness, and stress through days of activities and events")]
struct Args {
    /// Random seed for deterministic daily events
    #[arg(long)]
    seed: Option<u64>,
}

fn main() -> Result<()> {
    // Initialize tracing for logging
    tracing_subscriber::fmt()
        .with_env_filter("wellsim=info")
        .init();

    let args = Args::parse();
    let seed = args.seed.unwrap_or_else(rand::random);
    tracing::info!(seed, "wellsim starting");

    let mut sim = Simulator::new(seed);

    loop {
        println!("{}", display::stats_panel(&sim));
        println!("{}", display::menu());
        print!("Enter your choice: ");
        io::stdout().flush()?;

        let choice = match read_choice()? {
            Some(choice) => choice,
            None => break, // stdin closed
        };

        match choice {
            1 => sim.perform(Activity::Exercise),
            2 => sim.perform(Activity::Meditate),
            3 => sim.perform(Activity::EatHealthy),
            4 => sim.perform(Activity::Relax),
            5 => sim.perform(Activity::Sleep),
            6 => sim.advance_day(),
            7 => println!("{}", display::activity_log(&sim)),
            8 => sim.reset(),
            9 => {
                println!("Exiting Health Simulator. Goodbye!");
                break;
            }
            _ => println!("Invalid choice. Please select a number from the menu."),
        }
        println!();
    }

    Ok(())
}

/// Read one menu choice, re-prompting until a line parses as a number.
/// Returns `None` once stdin is closed.
fn read_choice() -> Result<Option<i32>> {
    let mut input = String::new();
    loop {
        input.clear();
        if io::stdin().read_line(&mut input)? == 0 {
            return Ok(None);
        }
        match input.trim().parse::<i32>() {
            Ok(choice) => return Ok(Some(choice)),
            Err(_) => {
                print!("Invalid input. Please enter a number: ");
                io::stdout().flush()?;
            }
        }
    }
}
