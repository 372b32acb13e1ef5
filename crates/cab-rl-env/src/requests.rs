//! Customer request generation

use rand::seq::index;
use rand::Rng;
use rand_distr::{Distribution, Poisson};
use tracing::debug;

use cab_rl_core::{ActionBatch, ActionIndex, ActionSpace, RLError, Result};

use crate::config::CabConfig;
use crate::spaces::{CabActionSpace, IDLE_INDEX};
use crate::types::{CabAction, CabState};

/// Draws the menu of ride requests a driver sees at a location.
///
/// The number of requests is Poisson with a per-location mean, capped at
/// `max_requests`; the requests themselves are distinct rides drawn
/// uniformly. Idle is always offered first.
#[derive(Debug, Clone)]
pub struct RequestModel {
    /// `None` for locations that never see a request
    counts: Vec<Option<Poisson<f64>>>,
    max_requests: usize,
}

impl RequestModel {
    /// Build the per-location count distributions from `config`
    pub fn new(config: &CabConfig) -> Result<Self> {
        let counts = config
            .request_rates
            .iter()
            .map(|&rate| {
                if rate == 0.0 {
                    Ok(None)
                } else {
                    Poisson::new(rate)
                        .map(Some)
                        .map_err(|e| RLError::InvalidConfig(format!("request rate {rate}: {e}")))
                }
            })
            .collect::<Result<Vec<_>>>()?;
        Ok(Self {
            counts,
            max_requests: config.max_requests,
        })
    }

    /// Number of ride requests at `location`, already capped.
    ///
    /// Fails with [`RLError::InvalidLocation`] for a location without a rate.
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    pub fn draw_count<R: Rng + ?Sized>(&self, location: usize, rng: &mut R) -> Result<usize> {
        let count = self
            .counts
            .get(location)
            .ok_or(RLError::InvalidLocation {
                location,
                locations: self.counts.len(),
            })?;
        let drawn = count
            .as_ref()
            .map_or(0, |poisson| poisson.sample(rng) as usize);
        Ok(drawn.min(self.max_requests))
    }

    /// The request batch for `state`.
    ///
    /// Fails with [`RLError::InsufficientActions`] when the drawn count
    /// exceeds the number of distinct rides; the count is never truncated.
    pub fn requests<R: Rng + ?Sized>(
        &self,
        state: &CabState,
        space: &CabActionSpace,
        rng: &mut R,
    ) -> Result<ActionBatch<CabAction>> {
        let wanted = self.draw_count(state.location(), rng)?;
        self.sample_rides(wanted, space, rng)
    }

    /// Idle plus `wanted` distinct rides
    pub fn sample_rides<R: Rng + ?Sized>(
        &self,
        wanted: usize,
        space: &CabActionSpace,
        rng: &mut R,
    ) -> Result<ActionBatch<CabAction>> {
        let available = space.ride_count();
        if wanted > available {
            return Err(RLError::InsufficientActions {
                requested: wanted,
                available,
            });
        }

        let mut indices = Vec::with_capacity(wanted + 1);
        indices.push(IDLE_INDEX);
        indices.extend(
            index::sample(rng, available, wanted)
                .into_iter()
                .map(|i| ActionIndex(i + 1)),
        );

        let actions = indices
            .iter()
            .map(|&i| {
                space
                    .get(i)
                    .ok_or_else(|| RLError::InvalidAction(format!("no action at index {i}")))
            })
            .collect::<Result<Vec<_>>>()?;

        debug!(requests = wanted, indices = ?indices, "generated request batch");
        Ok(ActionBatch { indices, actions })
    }
}
