//! Environment traits and types

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::{Action, ActionBatch, ActionSpace, Reward, State, StateSpace};

/// Result of a single environment step
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Step<S> {
    /// State after the action completes
    pub next_state: S,
    /// Reward signal
    pub reward: Reward,
    /// Hours the action took
    pub elapsed: u64,
}

/// Everything a consumer needs to start interacting with an environment
#[derive(Debug)]
pub struct Reset<'a, A, S, St> {
    /// Full action space
    pub action_space: &'a A,
    /// Full state space
    pub state_space: &'a S,
    /// Initial state
    pub initial_state: St,
}

/// Core environment trait.
///
/// Environments are pure models: `step` is a function of its inputs, and all
/// randomness comes from the caller's rng.
pub trait Environment: Send + Sync {
    /// State type
    type State: State;
    /// Action type
    type Action: Action;
    /// State space type
    type StateSpace: StateSpace<State = Self::State>;
    /// Action space type
    type ActionSpace: ActionSpace<Action = Self::Action>;

    /// Get the action space
    fn action_space(&self) -> &Self::ActionSpace;

    /// Get the state space
    fn state_space(&self) -> &Self::StateSpace;

    /// Hand out the spaces and draw an initial state
    fn reset<R: Rng + ?Sized>(
        &self,
        rng: &mut R,
    ) -> Reset<'_, Self::ActionSpace, Self::StateSpace, Self::State> {
        Reset {
            action_space: self.action_space(),
            state_space: self.state_space(),
            initial_state: self.state_space().sample(rng),
        }
    }

    /// Feasible actions in `state`
    fn requests<R: Rng + ?Sized>(
        &self,
        state: &Self::State,
        rng: &mut R,
    ) -> crate::Result<ActionBatch<Self::Action>>;

    /// Apply `action` in `state`
    fn step(&self, state: &Self::State, action: &Self::Action) -> crate::Result<Step<Self::State>>;
}
