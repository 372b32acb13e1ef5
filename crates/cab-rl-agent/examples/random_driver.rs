//! Example: random and greedy drivers working a month
//!
//! `cargo run --example random_driver -- [travel_times.json] [config.json]`
//!
//! Without a table file a synthetic one is generated.

use cab_rl_agent::{GreedyPolicy, RandomPolicy};
use cab_rl_core::TrajectoryBatch;
use cab_rl_env::prelude::*;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::info;

fn main() -> anyhow::Result<()> {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let mut args = std::env::args().skip(1);
    let table_path = args.next();
    let config = match args.next() {
        Some(path) => CabConfig::from_json_file(path)?,
        None => CabConfig::default(),
    };

    let mut rng = StdRng::seed_from_u64(2024);
    let table = match table_path {
        Some(path) => TravelTimeTable::from_json_file(path, &config)?,
        None => {
            info!("no table given, generating synthetic travel times");
            TravelTimeTable::from_fn(&config, |from, to, _, _| {
                if from == to { 0 } else { rng.gen_range(1..=6) }
            })
        }
    };
    let env = CabDriverEnv::new(config, table)?;
    let runner = env.runner().with_step_limit(10_000);

    let num_episodes = 10;
    let mut random_runs = TrajectoryBatch::new();
    let mut greedy_runs = TrajectoryBatch::new();

    let mut random = RandomPolicy::new();
    let mut greedy = GreedyPolicy::new(|s: &CabState, a: &CabAction| env.reward(s, a));

    for episode in 0..num_episodes {
        let start = env.reset(&mut rng).initial_state;

        let (summary, trajectory) = runner.run_from(start, &mut random, &mut rng)?;
        info!(episode, policy = "random", reward = %summary.total_reward, steps = summary.steps);
        random_runs.push(trajectory);

        let (summary, trajectory) = runner.run_from(start, &mut greedy, &mut rng)?;
        info!(episode, policy = "greedy", reward = %summary.total_reward, steps = summary.steps);
        greedy_runs.push(trajectory);
    }

    println!(
        "Average reward over {num_episodes} episodes: random {:.1}, greedy {:.1}",
        random_runs.avg_reward(),
        greedy_runs.avg_reward()
    );

    Ok(())
}
