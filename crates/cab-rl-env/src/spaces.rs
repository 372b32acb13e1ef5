//! The discrete action and state spaces

use rand::Rng;

use cab_rl_core::{ActionIndex, ActionSpace, StateSpace};

use crate::config::CabConfig;
use crate::types::{CabAction, CabState, Ride};

/// Index of the idle action in every [`CabActionSpace`]
pub const IDLE_INDEX: ActionIndex = ActionIndex(0);

/// Every action the driver can take.
///
/// Index 0 is reserved for [`CabAction::Idle`]; indices `1..=m*(m-1)` hold
/// the rides in row-major order of `(pickup, drop)`, skipping the diagonal.
#[derive(Debug, Clone)]
pub struct CabActionSpace {
    locations: usize,
    actions: Vec<CabAction>,
}

impl CabActionSpace {
    /// Enumerate the action space for `config`
    #[must_use]
    pub fn new(config: &CabConfig) -> Self {
        let m = config.locations;
        let mut actions = Vec::with_capacity(config.action_count());
        actions.push(CabAction::Idle);
        for pickup in 0..m {
            for drop in (0..m).filter(|&d| d != pickup) {
                actions.push(CabAction::Ride(Ride::from_parts(pickup, drop)));
            }
        }
        Self {
            locations: m,
            actions,
        }
    }

    /// All actions, idle first
    #[must_use]
    pub fn actions(&self) -> &[CabAction] {
        &self.actions
    }

    /// The ride actions only
    #[must_use]
    pub fn rides(&self) -> &[CabAction] {
        &self.actions[1..]
    }

    /// Number of ride actions
    #[must_use]
    pub fn ride_count(&self) -> usize {
        self.actions.len() - 1
    }
}

impl ActionSpace for CabActionSpace {
    type Action = CabAction;

    fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> Self::Action {
        self.actions[rng.gen_range(0..self.actions.len())]
    }

    fn contains(&self, action: &Self::Action) -> bool {
        match action {
            CabAction::Idle => true,
            CabAction::Ride(ride) => {
                ride.pickup() < self.locations && ride.drop() < self.locations
            }
        }
    }

    fn len(&self) -> usize {
        self.actions.len()
    }

    fn get(&self, index: ActionIndex) -> Option<Self::Action> {
        self.actions.get(index.0).copied()
    }

    fn index_of(&self, action: &Self::Action) -> Option<ActionIndex> {
        match action {
            CabAction::Idle => Some(IDLE_INDEX),
            CabAction::Ride(_) if !self.contains(action) => None,
            CabAction::Ride(ride) => {
                let (p, d) = (ride.pickup(), ride.drop());
                let column = if d < p { d } else { d - 1 };
                Some(ActionIndex(1 + p * (self.locations - 1) + column))
            }
        }
    }
}

/// Every `(location, time, day)` triple
#[derive(Debug, Clone, Copy)]
pub struct CabStateSpace {
    locations: usize,
    hours: usize,
    days: usize,
}

impl CabStateSpace {
    /// The state space for `config`
    #[must_use]
    pub fn new(config: &CabConfig) -> Self {
        Self {
            locations: config.locations,
            hours: config.hours,
            days: config.days,
        }
    }

    /// Enumerate all states, location-major then time then day
    pub fn iter(&self) -> impl Iterator<Item = CabState> + '_ {
        (0..self.locations).flat_map(move |l| {
            (0..self.hours)
                .flat_map(move |t| (0..self.days).map(move |d| CabState::from_parts(l, t, d)))
        })
    }
}

impl StateSpace for CabStateSpace {
    type State = CabState;

    fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> Self::State {
        CabState::from_parts(
            rng.gen_range(0..self.locations),
            rng.gen_range(0..self.hours),
            rng.gen_range(0..self.days),
        )
    }

    fn contains(&self, state: &Self::State) -> bool {
        state.location() < self.locations && state.time() < self.hours && state.day() < self.days
    }

    fn len(&self) -> usize {
        self.locations * self.hours * self.days
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_action_space_layout() {
        let space = CabActionSpace::new(&CabConfig::default());
        assert_eq!(space.len(), 21);
        assert_eq!(space.get(IDLE_INDEX), Some(CabAction::Idle));
        assert_eq!(space.get(ActionIndex(1)).unwrap().pair(), (0, 1));
        assert_eq!(space.get(ActionIndex(4)).unwrap().pair(), (0, 4));
        assert_eq!(space.get(ActionIndex(5)).unwrap().pair(), (1, 0));
        assert_eq!(space.get(ActionIndex(20)).unwrap().pair(), (4, 3));
        assert_eq!(space.get(ActionIndex(21)), None);
        assert!(space.rides().iter().all(|a| !a.is_idle()));
    }

    #[test]
    fn test_index_of_inverts_get() {
        let space = CabActionSpace::new(&CabConfig::default());
        for (i, action) in space.actions().iter().enumerate() {
            assert_eq!(space.index_of(action), Some(ActionIndex(i)));
        }
    }

    #[test]
    fn test_foreign_ride_is_rejected() {
        let big = CabConfig {
            locations: 8,
            request_rates: vec![1.0; 8],
            ..CabConfig::default()
        };
        let ride = CabAction::from_pair(&big, 6, 7).unwrap();
        let space = CabActionSpace::new(&CabConfig::default());
        assert!(!space.contains(&ride));
        assert_eq!(space.index_of(&ride), None);
    }

    #[test]
    fn test_state_space() {
        let config = CabConfig::default();
        let space = CabStateSpace::new(&config);
        assert_eq!(space.len(), 840);
        assert_eq!(space.iter().count(), 840);
        assert_eq!(
            space.iter().next(),
            Some(CabState::new(&config, 0, 0, 0).unwrap())
        );

        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..100 {
            assert!(space.contains(&space.sample(&mut rng)));
        }
    }
}
