//! The cab-driver transition and reward model

use rand::Rng;
use tracing::trace;

use cab_rl_core::{
    ActionBatch, ActionSpace, Environment, EpisodeRunner, RLError, Result, Reward, StateSpace,
    Step,
};

use crate::clock::Calendar;
use crate::config::CabConfig;
use crate::encoding::{StateActionEncoding, StateEncoding};
use crate::requests::RequestModel;
use crate::spaces::{CabActionSpace, CabStateSpace};
use crate::travel::TravelTimeTable;
use crate::types::{CabAction, CabState};

/// How the hours of one action break down.
///
/// Exactly one of `idle` and `ride` is non-zero unless the table records a
/// zero-hour ride.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Trip {
    /// Hours spent waiting (1 for idle, else 0)
    pub idle: u32,
    /// Hours driving empty to the pickup
    pub transit: u32,
    /// Hours driving the customer
    pub ride: u32,
    /// Where the driver ends up
    pub drop: usize,
}

impl Trip {
    /// Total hours consumed, widened so two long legs cannot overflow
    #[must_use]
    pub fn elapsed(&self) -> u64 {
        u64::from(self.idle) + u64::from(self.transit) + u64::from(self.ride)
    }
}

/// The cab-driver environment.
///
/// Holds the immutable configuration, both spaces, the shared travel-time
/// table and the request model. Every method is a pure function of its
/// arguments plus that fixed data; randomness is always passed in.
#[derive(Debug, Clone)]
pub struct CabDriverEnv {
    config: CabConfig,
    calendar: Calendar,
    action_space: CabActionSpace,
    state_space: CabStateSpace,
    table: TravelTimeTable,
    requests: RequestModel,
}

impl CabDriverEnv {
    /// Build the environment, validating `config` against itself and `table`
    pub fn new(config: CabConfig, table: TravelTimeTable) -> Result<Self> {
        config.validate()?;
        let expected = [
            config.locations,
            config.locations,
            config.hours,
            config.days,
        ];
        if table.shape() != expected {
            return Err(RLError::TravelTable(format!(
                "table shape {:?} does not match configuration {:?}",
                table.shape(),
                expected
            )));
        }

        Ok(Self {
            calendar: config.calendar(),
            action_space: CabActionSpace::new(&config),
            state_space: CabStateSpace::new(&config),
            requests: RequestModel::new(&config)?,
            table,
            config,
        })
    }

    /// Configuration the environment was built with
    #[must_use]
    pub fn config(&self) -> &CabConfig {
        &self.config
    }

    /// Travel-time table in use
    #[must_use]
    pub fn table(&self) -> &TravelTimeTable {
        &self.table
    }

    /// Build a validated state for this environment
    pub fn state(&self, location: usize, time: usize, day: usize) -> Result<CabState> {
        CabState::new(&self.config, location, time, day)
    }

    /// Build a validated action for this environment; `(0,0)` is idle
    pub fn action(&self, pickup: usize, drop: usize) -> Result<CabAction> {
        CabAction::from_pair(&self.config, pickup, drop)
    }

    /// Advance `(time, day)` by `elapsed` hours with wrap-around
    #[must_use]
    pub fn advance(&self, time: usize, day: usize, elapsed: u64) -> (usize, usize) {
        self.calendar.advance(time, day, elapsed)
    }

    /// Decompose `action` taken in `state` into idle, transit and ride hours.
    ///
    /// A ride whose pickup is elsewhere first drives to the pickup; the ride
    /// leg is then looked up at the hour and day of arrival there.
    pub fn trip(&self, state: &CabState, action: &CabAction) -> Result<Trip> {
        self.check(state, action)?;
        let (loc, time, day) = (state.location(), state.time(), state.day());

        let trip = match action {
            CabAction::Idle => Trip {
                idle: 1,
                transit: 0,
                ride: 0,
                drop: loc,
            },
            CabAction::Ride(ride) if ride.pickup() == loc => Trip {
                idle: 0,
                transit: 0,
                ride: self.table.time(loc, ride.drop(), time, day),
                drop: ride.drop(),
            },
            CabAction::Ride(ride) => {
                let transit = self.table.time(loc, ride.pickup(), time, day);
                let (pickup_time, pickup_day) =
                    self.calendar.advance(time, day, u64::from(transit));
                Trip {
                    idle: 0,
                    transit,
                    ride: self.table.time(ride.pickup(), ride.drop(), pickup_time, pickup_day),
                    drop: ride.drop(),
                }
            }
        };
        Ok(trip)
    }

    /// Reward for taking `action` in `state`.
    ///
    /// Idle costs one hour; a ride earns revenue for the ride leg and costs
    /// every driven hour.
    pub fn reward(&self, state: &CabState, action: &CabAction) -> Result<Reward> {
        let trip = self.trip(state, action)?;
        Ok(self.reward_for(action, &trip))
    }

    /// Next state and hours elapsed for taking `action` in `state`
    pub fn transition(&self, state: &CabState, action: &CabAction) -> Result<(CabState, u64)> {
        let trip = self.trip(state, action)?;
        Ok((self.arrive(state, &trip), trip.elapsed()))
    }

    /// Episode runner bounded by the configured `episode_hours`
    #[must_use]
    pub fn runner(&self) -> EpisodeRunner<'_, Self> {
        EpisodeRunner::new(self, self.config.episode_hours)
    }

    /// State-space one-hot encoding of `state`
    #[must_use]
    pub fn encode(&self, state: &CabState) -> ndarray::Array1<f32> {
        StateEncoding::new(&self.config).encode_state(state)
    }

    /// State-action one-hot encoding
    #[must_use]
    pub fn encode_state_action(
        &self,
        state: &CabState,
        action: &CabAction,
    ) -> ndarray::Array1<f32> {
        StateActionEncoding::new(&self.config).encode_pair(state, action)
    }

    fn reward_for(&self, action: &CabAction, trip: &Trip) -> Reward {
        let (cost, revenue) = (self.config.cost_per_hour, self.config.revenue_per_hour);
        if action.is_idle() {
            return Reward(-cost);
        }
        let ride = i64::from(trip.ride);
        let driven = i64::from(trip.transit) + ride;
        Reward(revenue * ride - cost * driven)
    }

    /// The end state: drop location, start time advanced by the whole trip
    fn arrive(&self, state: &CabState, trip: &Trip) -> CabState {
        let (time, day) = self.calendar.advance(state.time(), state.day(), trip.elapsed());
        CabState::from_parts(trip.drop, time, day)
    }

    fn check(&self, state: &CabState, action: &CabAction) -> Result<()> {
        if !self.state_space.contains(state) {
            return Err(RLError::InvalidState(format!(
                "{state} is outside this environment"
            )));
        }
        if !self.action_space.contains(action) {
            return Err(RLError::InvalidAction(format!(
                "{action} is outside this environment"
            )));
        }
        Ok(())
    }
}

impl Environment for CabDriverEnv {
    type State = CabState;
    type Action = CabAction;
    type StateSpace = CabStateSpace;
    type ActionSpace = CabActionSpace;

    fn action_space(&self) -> &Self::ActionSpace {
        &self.action_space
    }

    fn state_space(&self) -> &Self::StateSpace {
        &self.state_space
    }

    fn requests<R: Rng + ?Sized>(
        &self,
        state: &Self::State,
        rng: &mut R,
    ) -> Result<ActionBatch<Self::Action>> {
        if !self.state_space.contains(state) {
            return Err(RLError::InvalidState(format!(
                "{state} is outside this environment"
            )));
        }
        self.requests.requests(state, &self.action_space, rng)
    }

    fn step(&self, state: &Self::State, action: &Self::Action) -> Result<Step<Self::State>> {
        let trip = self.trip(state, action)?;
        let step = Step {
            next_state: self.arrive(state, &trip),
            reward: self.reward_for(action, &trip),
            elapsed: trip.elapsed(),
        };
        trace!(%state, %action, ?trip, next = %step.next_state, "transition");
        Ok(step)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn env_with(table: TravelTimeTable) -> CabDriverEnv {
        CabDriverEnv::new(CabConfig::default(), table).unwrap()
    }

    fn flat(hours: u32) -> CabDriverEnv {
        let table = TravelTimeTable::from_fn(&CabConfig::default(), |_, _, _, _| hours);
        env_with(table)
    }

    #[test]
    fn test_idle_trip() {
        let env = flat(3);
        let state = env.state(0, 10, 2).unwrap();
        let trip = env.trip(&state, &CabAction::Idle).unwrap();
        assert_eq!(
            trip,
            Trip {
                idle: 1,
                transit: 0,
                ride: 0,
                drop: 0
            }
        );
        assert_eq!(env.reward(&state, &CabAction::Idle).unwrap(), Reward(-5));
        assert_eq!(
            env.transition(&state, &CabAction::Idle).unwrap(),
            (env.state(0, 11, 2).unwrap(), 1)
        );
    }

    #[test]
    fn test_same_location_ride() {
        let env = flat(3);
        let state = env.state(2, 5, 1).unwrap();
        let action = env.action(2, 4).unwrap();
        let trip = env.trip(&state, &action).unwrap();
        assert_eq!(
            trip,
            Trip {
                idle: 0,
                transit: 0,
                ride: 3,
                drop: 4
            }
        );
        assert_eq!(env.reward(&state, &action).unwrap(), Reward(9 * 3 - 5 * 3));
    }

    #[test]
    fn test_reposition_looks_up_ride_at_arrival_time() {
        let config = CabConfig::default();
        // Transit 0 -> 1 takes 2 hours; the 1 -> 2 leg is slow only from hour 22.
        let table = TravelTimeTable::from_fn(&config, |from, to, hour, _| match (from, to) {
            (0, 1) => 2,
            (1, 2) if hour >= 22 => 6,
            _ => 1,
        });
        let env = env_with(table);
        let state = env.state(0, 20, 0).unwrap();
        let action = env.action(1, 2).unwrap();

        let trip = env.trip(&state, &action).unwrap();
        assert_eq!(
            trip,
            Trip {
                idle: 0,
                transit: 2,
                ride: 6,
                drop: 2
            }
        );
        assert_eq!(env.reward(&state, &action).unwrap(), Reward(9 * 6 - 5 * 8));
        assert_eq!(
            env.transition(&state, &action).unwrap(),
            (env.state(2, 4, 1).unwrap(), 8)
        );
    }

    #[test]
    fn test_step_agrees_with_parts() {
        let env = flat(2);
        let state = env.state(3, 23, 6).unwrap();
        for action in env.action_space().actions() {
            let step = env.step(&state, action).unwrap();
            let (next, elapsed) = env.transition(&state, action).unwrap();
            assert_eq!(step.next_state, next);
            assert_eq!(step.elapsed, elapsed);
            assert_eq!(step.reward, env.reward(&state, action).unwrap());
        }
    }

    #[test]
    fn test_long_legs_do_not_overflow() {
        let half = u32::MAX / 2 + 1;
        let table = TravelTimeTable::from_fn(&CabConfig::default(), |_, _, _, _| half);
        let env = env_with(table);
        let state = env.state(1, 0, 0).unwrap();
        let action = env.action(3, 4).unwrap();

        let step = env.step(&state, &action).unwrap();
        assert_eq!(step.elapsed, 1 << 32);
        assert_eq!(step.next_state, env.state(4, 16, 3).unwrap());
        assert_eq!(step.reward, Reward(9 * (1 << 31) - 5 * (1 << 32)));
        assert_eq!(
            env.transition(&state, &action).unwrap(),
            (step.next_state, 1 << 32)
        );
    }

    #[test]
    fn test_rejects_foreign_state() {
        let env = flat(1);
        let big = CabConfig {
            locations: 9,
            request_rates: vec![1.0; 9],
            ..CabConfig::default()
        };
        let foreign = CabState::new(&big, 8, 0, 0).unwrap();
        assert!(matches!(
            env.step(&foreign, &CabAction::Idle),
            Err(RLError::InvalidState(_))
        ));
    }

    #[test]
    fn test_table_shape_must_match_config() {
        let small = CabConfig {
            locations: 3,
            request_rates: vec![1.0; 3],
            ..CabConfig::default()
        };
        let table = TravelTimeTable::from_fn(&small, |_, _, _, _| 1);
        let err = CabDriverEnv::new(CabConfig::default(), table).unwrap_err();
        assert!(matches!(err, RLError::TravelTable(_)));
    }
}
