mod simulation;

use std::thread;
use std::time::Duration;

use anyhow::Result;
use clap::Parser;

use simulation::{SimWorld, DEFAULT_FLOOR_COUNT};

#[derive(Parser)]
#[command(name = "elevator_sim")]
#[command(about = "Single-elevator simulation with frame-based ticks")]
struct Cli {
    /// Number of riders to spawn (1-5)
    #[arg(long, default_value = "3")]
    riders: usize,

    /// Number of floors in the building
    #[arg(long, default_value_t = DEFAULT_FLOOR_COUNT)]
    floors: usize,

    /// Seed for a reproducible run
    #[arg(long)]
    seed: Option<u64>,

    /// Maximum number of ticks before giving up
    #[arg(long, default_value = "1000")]
    max_ticks: u64,

    /// Delay between frames in milliseconds
    #[arg(long, default_value = "250")]
    frame_delay: u64,
}

fn main() {
    env_logger::init();
    let cli = Cli::parse();

    if let Err(error) = run(&cli) {
        eprintln!("Error: {error:#}");
        std::process::exit(1);
    }
}

/// Run the simulation headless, printing one frame per tick
fn run(cli: &Cli) -> Result<()> {
    let mut world = match cli.seed {
        Some(seed) => SimWorld::new_with_seed(cli.floors, cli.riders, seed)?,
        None => SimWorld::new(cli.floors, cli.riders)?,
    };

    println!("Running elevator simulation...");
    println!("Floors: {}, Riders: {}", cli.floors, cli.riders);
    println!();

    println!("Initial state:");
    println!("{}", world.draw_building());

    loop {
        let result = world.tick();

        println!("--- Tick {} ---", world.ticks());
        println!("{}", world.draw_building());

        if result.completed {
            println!("Simulation complete after {} ticks", world.ticks());
            break;
        }

        if world.ticks() >= cli.max_ticks {
            println!("Stopped after {} ticks without completing", world.ticks());
            break;
        }

        if cli.frame_delay > 0 {
            thread::sleep(Duration::from_millis(cli.frame_delay));
        }
    }

    println!("=== Final State ===");
    world.print_summary();

    Ok(())
}
