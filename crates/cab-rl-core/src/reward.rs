//! Reward signals

use serde::{Deserialize, Serialize};

/// Reward signal from the environment, in whole currency units.
///
/// Rewards in this environment are products of integer hours and integer
/// rates, so an `i64` keeps them exact.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub struct Reward(pub i64);

impl Reward {
    /// Get the reward value
    #[must_use]
    pub fn value(&self) -> i64 {
        self.0
    }
}

impl From<i64> for Reward {
    fn from(value: i64) -> Self {
        Self(value)
    }
}

impl From<Reward> for i64 {
    fn from(reward: Reward) -> Self {
        reward.0
    }
}

impl std::ops::Add for Reward {
    type Output = Self;

    fn add(self, other: Self) -> Self::Output {
        Self(self.0 + other.0)
    }
}

impl std::ops::AddAssign for Reward {
    fn add_assign(&mut self, other: Self) {
        self.0 += other.0;
    }
}

impl std::ops::Mul<i64> for Reward {
    type Output = Self;

    fn mul(self, scalar: i64) -> Self::Output {
        Self(self.0 * scalar)
    }
}

impl std::iter::Sum for Reward {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::default(), |acc, r| acc + r)
    }
}

impl std::fmt::Display for Reward {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
