//! Cab-driver environment
//!
//! A driver moves between `m` locations over hourly time slots and days of
//! the week. At each state the environment offers a batch of customer
//! requests; the chosen action determines the reward and the next state via
//! a travel-time lookup table.
//!
//! ```no_run
//! use cab_rl_env::{CabConfig, CabDriverEnv, TravelTimeTable};
//! use cab_rl_env::prelude::*;
//! use rand::{rngs::StdRng, SeedableRng};
//!
//! # fn main() -> cab_rl_core::Result<()> {
//! let config = CabConfig::default();
//! let table = TravelTimeTable::from_json_file("tm.json", &config)?;
//! let env = CabDriverEnv::new(config, table)?;
//!
//! let mut rng = StdRng::seed_from_u64(0);
//! let state = env.reset(&mut rng).initial_state;
//! let batch = env.requests(&state, &mut rng)?;
//! let step = env.step(&state, &batch.actions[0])?;
//! # let _ = step;
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod clock;
pub mod config;
pub mod encoding;
pub mod model;
pub mod requests;
pub mod spaces;
pub mod travel;
pub mod types;

pub use clock::Calendar;
pub use config::CabConfig;
pub use encoding::{StateActionEncoding, StateEncoding};
pub use model::{CabDriverEnv, Trip};
pub use requests::RequestModel;
pub use spaces::{CabActionSpace, CabStateSpace, IDLE_INDEX};
pub use travel::TravelTimeTable;
pub use types::{CabAction, CabState, Ride};

// Re-export core types
pub use cab_rl_core::{
    ActionBatch, ActionIndex, ActionSpace, Encoder, Environment, Episode, EpisodeRunner, RLError,
    Result, Reward, StateSpace, Step,
};

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::{CabAction, CabConfig, CabDriverEnv, CabState, TravelTimeTable};
    pub use cab_rl_core::prelude::*;
}
