//! Scatter-and-grow on a random 64×64 torus.
//!
//! Fills the lattice with fair 0/1 values, then each step scatters cells
//! with probability 0.2 and applies threshold growth at 4, printing the
//! grid total after every step.
//!
//! Run with:
//!   cargo run --example scatter_growth -- [steps] [seed]

use toroid_engine::{InitialState, Rule, Stepper, StepperConfig};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let mut args = std::env::args().skip(1);
    let steps = args.next().map(|s| s.parse::<usize>()).transpose()?.unwrap_or(100);
    let seed = args.next().map(|s| s.parse::<u64>()).transpose()?;

    let mut stepper = Stepper::new(StepperConfig {
        rows: 64,
        cols: 64,
        seed,
        initial: InitialState::Random,
        schedule: vec![
            Rule::Scattering { gamma: 0.2 },
            Rule::ThresholdGrowth { number: 4.0 },
        ],
    })?;

    println!("seed {}", stepper.seed().unwrap_or_default());
    println!("step 0: total {}", stepper.snapshot().sum());
    for stats in stepper.run(steps) {
        println!(
            "step {}: total {} ({} us)",
            stats.step, stats.total, stats.total_us
        );
    }
    Ok(())
}
