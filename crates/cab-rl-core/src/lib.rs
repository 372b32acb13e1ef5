//! Core reinforcement learning traits and types for the cab-driver
//! environment
//!
//! This crate provides the domain-free vocabulary: spaces, the pure
//! `Environment` model trait, policies, rewards, trajectories and episode
//! bookkeeping.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod action;
pub mod environment;
pub mod episode;
pub mod error;
pub mod observation;
pub mod policy;
pub mod reward;
pub mod state;
pub mod trajectory;

// Re-export core traits and types
pub use action::{Action, ActionBatch, ActionIndex, ActionSpace};
pub use environment::{Environment, Reset, Step};
pub use episode::{Episode, EpisodeRunner};
pub use error::{RLError, Result};
pub use observation::{multi_hot, Encoder};
pub use policy::Policy;
pub use reward::Reward;
pub use state::{State, StateSpace};
pub use trajectory::{Trajectory, TrajectoryBatch, Transition};

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::{
        Action, ActionBatch, ActionIndex, ActionSpace, Encoder, Environment, EpisodeRunner,
        Policy, Result, Reward, State, StateSpace, Step,
    };
}
