//! Policy abstractions for action selection

use rand::Rng;

use crate::{Action, ActionBatch, ActionIndex, State};

/// Core policy trait for selecting one action from a menu of requests
pub trait Policy: Send + Sync {
    /// State type
    type State: State;
    /// Action type
    type Action: Action;

    /// Pick one entry of `batch` for `state`
    fn act<R: Rng + ?Sized>(
        &mut self,
        state: &Self::State,
        batch: &ActionBatch<Self::Action>,
        rng: &mut R,
    ) -> crate::Result<(ActionIndex, Self::Action)>;
}
