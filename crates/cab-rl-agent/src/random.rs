//! Random policy for baseline comparisons

use rand::Rng;
use std::marker::PhantomData;

use cab_rl_core::{Action, ActionBatch, ActionIndex, Policy, RLError, State};

/// Policy that selects uniformly among the offered requests
#[derive(Debug)]
pub struct RandomPolicy<S, A> {
    _phantom: PhantomData<fn(&S) -> A>,
}

impl<S, A> RandomPolicy<S, A> {
    /// Create a new random policy
    #[must_use]
    pub fn new() -> Self {
        Self {
            _phantom: PhantomData,
        }
    }
}

impl<S, A> Default for RandomPolicy<S, A> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S, A> Policy for RandomPolicy<S, A>
where
    S: State,
    A: Action,
{
    type State = S;
    type Action = A;

    fn act<R: Rng + ?Sized>(
        &mut self,
        _state: &Self::State,
        batch: &ActionBatch<Self::Action>,
        rng: &mut R,
    ) -> cab_rl_core::Result<(ActionIndex, Self::Action)> {
        if batch.is_empty() {
            return Err(RLError::InvalidAction("empty request batch".to_string()));
        }
        let pick = rng.gen_range(0..batch.len());
        Ok((batch.indices[pick], batch.actions[pick].clone()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[derive(Debug, Clone, PartialEq)]
    struct Pos(usize);

    impl State for Pos {
        fn features(&self) -> Vec<f64> {
            vec![]
        }
    }

    impl Action for Pos {
        fn to_vec(&self) -> Vec<f64> {
            vec![]
        }
    }

    #[test]
    fn test_picks_from_batch() {
        let batch = ActionBatch {
            indices: vec![ActionIndex(0), ActionIndex(7), ActionIndex(9)],
            actions: vec![Pos(0), Pos(7), Pos(9)],
        };
        let mut policy = RandomPolicy::new();
        let mut rng = StdRng::seed_from_u64(3);
        let mut seen = std::collections::HashSet::new();
        for _ in 0..100 {
            let (index, action) = policy.act(&Pos(0), &batch, &mut rng).unwrap();
            assert_eq!(index.0, action.0);
            seen.insert(index);
        }
        assert_eq!(seen.len(), 3);
    }

    #[test]
    fn test_empty_batch_is_an_error() {
        let batch: ActionBatch<Pos> = ActionBatch {
            indices: vec![],
            actions: vec![],
        };
        let mut policy = RandomPolicy::new();
        let err = policy.act(&Pos(0), &batch, &mut StdRng::seed_from_u64(0));
        assert!(err.is_err());
    }
}
