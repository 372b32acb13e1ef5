//! Myopic policy that takes the best immediate reward

use rand::Rng;
use std::marker::PhantomData;

use cab_rl_core::{Action, ActionBatch, ActionIndex, Policy, RLError, Reward, State};

/// Picks the request with the highest one-step reward under `score`.
///
/// Ties go to the earliest entry in the batch, so idle wins a tie.
pub struct GreedyPolicy<S, A, F> {
    score: F,
    _phantom: PhantomData<fn(&S) -> A>,
}

impl<S, A, F> GreedyPolicy<S, A, F>
where
    F: Fn(&S, &A) -> cab_rl_core::Result<Reward>,
{
    /// Create a greedy policy over `score`
    pub fn new(score: F) -> Self {
        Self {
            score,
            _phantom: PhantomData,
        }
    }
}

impl<S, A, F> Policy for GreedyPolicy<S, A, F>
where
    S: State,
    A: Action,
    F: Fn(&S, &A) -> cab_rl_core::Result<Reward> + Send + Sync,
{
    type State = S;
    type Action = A;

    fn act<R: Rng + ?Sized>(
        &mut self,
        state: &Self::State,
        batch: &ActionBatch<Self::Action>,
        _rng: &mut R,
    ) -> cab_rl_core::Result<(ActionIndex, Self::Action)> {
        let mut best: Option<(Reward, ActionIndex, &A)> = None;
        for (index, action) in batch.iter() {
            let reward = (self.score)(state, action)?;
            if best.as_ref().map_or(true, |(top, _, _)| reward > *top) {
                best = Some((reward, index, action));
            }
        }
        best.map(|(_, index, action)| (index, action.clone()))
            .ok_or_else(|| RLError::InvalidAction("empty request batch".to_string()))
    }
}
