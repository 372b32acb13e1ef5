//! Baseline policies for the cab-driver environment
//!
//! Neither policy learns; they exist to drive episodes and to give a
//! reference return for learning agents to beat.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod greedy;
pub mod random;

pub use greedy::GreedyPolicy;
pub use random::RandomPolicy;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::{GreedyPolicy, RandomPolicy};
    pub use cab_rl_core::prelude::*;
}
