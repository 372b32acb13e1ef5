//! Action representations and action spaces

use rand::Rng;
use serde::{Deserialize, Serialize};
use std::fmt::Debug;

/// Trait for actions in an RL environment
pub trait Action: Clone + Debug + Send + Sync {
    /// Convert action to a vector representation
    fn to_vec(&self) -> Vec<f64>;
}

/// Trait for finite, index-addressable action spaces
pub trait ActionSpace: Send + Sync {
    /// The type of actions in this space
    type Action: Action;

    /// Sample an action uniformly from the space
    fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> Self::Action;

    /// Check if an action is valid within this space
    fn contains(&self, action: &Self::Action) -> bool;

    /// Number of actions in the space
    fn len(&self) -> usize;

    /// Whether the space has no actions
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Resolve an action index
    fn get(&self, index: ActionIndex) -> Option<Self::Action>;

    /// Reverse lookup of an action's index
    fn index_of(&self, action: &Self::Action) -> Option<ActionIndex>;
}

/// Index into a discrete action space
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub struct ActionIndex(pub usize);

impl std::fmt::Display for ActionIndex {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// A menu of feasible actions offered to a policy at one step.
///
/// `indices` and `actions` are parallel: `actions[i]` is the action at
/// `indices[i]` in the full action space.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ActionBatch<A> {
    /// Indices into the full action space
    pub indices: Vec<ActionIndex>,
    /// Resolved actions
    pub actions: Vec<A>,
}

impl<A> ActionBatch<A> {
    /// Number of actions on offer
    #[must_use]
    pub fn len(&self) -> usize {
        self.actions.len()
    }

    /// Whether nothing is on offer
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.actions.is_empty()
    }

    /// Iterate over `(index, action)` pairs
    pub fn iter(&self) -> impl Iterator<Item = (ActionIndex, &A)> {
        self.indices.iter().copied().zip(self.actions.iter())
    }
}
