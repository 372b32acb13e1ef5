//! One-hot encodings for neural-network input

use ndarray::Array1;

use cab_rl_core::{multi_hot, Encoder};

use crate::config::CabConfig;
use crate::types::{CabAction, CabState};

/// `m + t + d` vector: location, then hour, then day, each one-hot
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StateEncoding {
    locations: usize,
    hours: usize,
    days: usize,
}

impl StateEncoding {
    /// Encoding for `config`
    #[must_use]
    pub fn new(config: &CabConfig) -> Self {
        Self {
            locations: config.locations,
            hours: config.hours,
            days: config.days,
        }
    }

    /// Offsets of the three hot positions for `state`
    fn hot(&self, state: &CabState) -> [usize; 3] {
        [
            state.location(),
            self.locations + state.time(),
            self.locations + self.hours + state.day(),
        ]
    }

    /// Encode one state
    #[must_use]
    pub fn encode_state(&self, state: &CabState) -> Array1<f32> {
        multi_hot(self.dim(), &self.hot(state))
    }
}

impl Encoder<CabState> for StateEncoding {
    fn dim(&self) -> usize {
        self.locations + self.hours + self.days
    }

    fn encode(&self, input: &CabState) -> Array1<f32> {
        self.encode_state(input)
    }
}

/// `m + t + d + m + m` vector: the state encoding followed by one-hot
/// pickup and one-hot drop. Idle leaves the action part zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StateActionEncoding {
    state: StateEncoding,
}

impl StateActionEncoding {
    /// Encoding for `config`
    #[must_use]
    pub fn new(config: &CabConfig) -> Self {
        Self {
            state: StateEncoding::new(config),
        }
    }

    /// Encode a state-action pair
    #[must_use]
    pub fn encode_pair(&self, state: &CabState, action: &CabAction) -> Array1<f32> {
        let base = self.state.dim();
        let m = self.state.locations;
        let mut hot = self.state.hot(state).to_vec();
        if let CabAction::Ride(ride) = action {
            hot.push(base + ride.pickup());
            hot.push(base + m + ride.drop());
        }
        multi_hot(self.dim(), &hot)
    }
}

impl Encoder<(CabState, CabAction)> for StateActionEncoding {
    fn dim(&self) -> usize {
        self.state.dim() + 2 * self.state.locations
    }

    fn encode(&self, input: &(CabState, CabAction)) -> Array1<f32> {
        self.encode_pair(&input.0, &input.1)
    }
}
