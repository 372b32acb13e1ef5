//! Driver states and ride actions

use serde::Serialize;

use cab_rl_core::{Action, RLError, Result, State};

use crate::config::CabConfig;

/// Driver position and current time: `(location, time slot, day)`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub struct CabState {
    location: usize,
    time: usize,
    day: usize,
}

impl CabState {
    /// Build a state, rejecting any component outside the configured ranges
    pub fn new(config: &CabConfig, location: usize, time: usize, day: usize) -> Result<Self> {
        check_location(config, location)?;
        if time >= config.hours {
            return Err(RLError::InvalidTime {
                time,
                hours: config.hours,
            });
        }
        if day >= config.days {
            return Err(RLError::InvalidDay {
                day,
                days: config.days,
            });
        }
        Ok(Self {
            location,
            time,
            day,
        })
    }

    /// Caller guarantees the components are in range
    pub(crate) fn from_parts(location: usize, time: usize, day: usize) -> Self {
        Self {
            location,
            time,
            day,
        }
    }

    /// Current location
    #[must_use]
    pub fn location(&self) -> usize {
        self.location
    }

    /// Current hour of day
    #[must_use]
    pub fn time(&self) -> usize {
        self.time
    }

    /// Current day of week
    #[must_use]
    pub fn day(&self) -> usize {
        self.day
    }
}

impl State for CabState {
    #[allow(clippy::cast_precision_loss)]
    fn features(&self) -> Vec<f64> {
        vec![self.location as f64, self.time as f64, self.day as f64]
    }
}

impl std::fmt::Display for CabState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "(loc {}, hour {}, day {})", self.location, self.time, self.day)
    }
}

/// A customer request from `pickup` to `drop`, with `pickup != drop`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub struct Ride {
    pickup: usize,
    drop: usize,
}

impl Ride {
    /// Build a ride, rejecting out-of-range or identical endpoints
    pub fn new(config: &CabConfig, pickup: usize, drop: usize) -> Result<Self> {
        check_location(config, pickup)?;
        check_location(config, drop)?;
        if pickup == drop {
            return Err(RLError::InvalidAction(format!(
                "pickup and drop are both location {pickup}"
            )));
        }
        Ok(Self { pickup, drop })
    }

    pub(crate) fn from_parts(pickup: usize, drop: usize) -> Self {
        debug_assert_ne!(pickup, drop);
        Self { pickup, drop }
    }

    /// Pickup location
    #[must_use]
    pub fn pickup(&self) -> usize {
        self.pickup
    }

    /// Drop location
    #[must_use]
    pub fn drop(&self) -> usize {
        self.drop
    }
}

/// What the driver does next
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub enum CabAction {
    /// Accept no ride and wait one hour, written `(0,0)`
    Idle,
    /// Serve a request
    Ride(Ride),
}

impl CabAction {
    /// Build an action from a `(pickup, drop)` pair; `(0,0)` is idle
    pub fn from_pair(config: &CabConfig, pickup: usize, drop: usize) -> Result<Self> {
        if (pickup, drop) == (0, 0) {
            Ok(Self::Idle)
        } else {
            Ride::new(config, pickup, drop).map(Self::Ride)
        }
    }

    /// The `(pickup, drop)` pair, `(0,0)` for idle
    #[must_use]
    pub fn pair(&self) -> (usize, usize) {
        match self {
            Self::Idle => (0, 0),
            Self::Ride(ride) => (ride.pickup, ride.drop),
        }
    }

    /// Whether this is the idle action
    #[must_use]
    pub fn is_idle(&self) -> bool {
        matches!(self, Self::Idle)
    }
}

impl Action for CabAction {
    #[allow(clippy::cast_precision_loss)]
    fn to_vec(&self) -> Vec<f64> {
        let (pickup, drop) = self.pair();
        vec![pickup as f64, drop as f64]
    }
}

impl std::fmt::Display for CabAction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Idle => write!(f, "idle"),
            Self::Ride(ride) => write!(f, "{} -> {}", ride.pickup, ride.drop),
        }
    }
}

fn check_location(config: &CabConfig, location: usize) -> Result<()> {
    if location >= config.locations {
        return Err(RLError::InvalidLocation {
            location,
            locations: config.locations,
        });
    }
    Ok(())
}
