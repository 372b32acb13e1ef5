//! State representations and state spaces

use rand::Rng;
use std::fmt::Debug;

/// Trait for states in an RL environment
pub trait State: Clone + Debug + Send + Sync {
    /// Get a feature representation of the state
    fn features(&self) -> Vec<f64>;
}

/// Trait for finite, enumerable state spaces
pub trait StateSpace: Send + Sync {
    /// The type of states in this space
    type State: State;

    /// Sample a state uniformly from the space
    fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> Self::State;

    /// Check if a state is valid within this space
    fn contains(&self, state: &Self::State) -> bool;

    /// Number of states in the space
    fn len(&self) -> usize;

    /// Whether the space has no states
    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
