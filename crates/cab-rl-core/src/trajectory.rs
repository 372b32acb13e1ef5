//! Trajectory storage

use serde::{Deserialize, Serialize};

use crate::{ActionIndex, Reward};

/// Single transition in a trajectory
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Transition<S, A> {
    /// State the action was taken in
    pub state: S,
    /// Index of the action in the full action space
    pub action_index: ActionIndex,
    /// Action taken
    pub action: A,
    /// Reward received
    pub reward: Reward,
    /// Resulting state
    pub next_state: S,
    /// Hours consumed by the action
    pub elapsed: u64,
}

/// Complete trajectory of an episode
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Trajectory<S, A> {
    /// Sequence of transitions
    pub transitions: Vec<Transition<S, A>>,
    /// Total reward
    pub total_reward: Reward,
    /// Total hours elapsed
    pub total_elapsed: u64,
    /// Episode ID
    pub episode_id: String,
}

impl<S, A> Trajectory<S, A> {
    /// Create a new empty trajectory
    pub fn new(episode_id: String) -> Self {
        Self {
            transitions: Vec::new(),
            total_reward: Reward::default(),
            total_elapsed: 0,
            episode_id,
        }
    }

    /// Add a transition to the trajectory
    pub fn push(&mut self, transition: Transition<S, A>) {
        self.total_reward += transition.reward;
        self.total_elapsed += transition.elapsed;
        self.transitions.push(transition);
    }

    /// Get the length of the trajectory
    #[must_use]
    pub fn len(&self) -> usize {
        self.transitions.len()
    }

    /// Check if trajectory is empty
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.transitions.is_empty()
    }

    /// Final state reached, if any step was taken
    #[must_use]
    pub fn last_state(&self) -> Option<&S> {
        self.transitions.last().map(|t| &t.next_state)
    }
}

/// Batch of trajectories
#[derive(Debug, Clone)]
pub struct TrajectoryBatch<S, A> {
    /// Collection of trajectories
    pub trajectories: Vec<Trajectory<S, A>>,
}

impl<S, A> TrajectoryBatch<S, A> {
    /// Create a new empty batch
    #[must_use]
    pub fn new() -> Self {
        Self {
            trajectories: Vec::new(),
        }
    }

    /// Add a trajectory to the batch
    pub fn push(&mut self, trajectory: Trajectory<S, A>) {
        self.trajectories.push(trajectory);
    }

    /// Get total number of transitions across all trajectories
    #[must_use]
    pub fn total_transitions(&self) -> usize {
        self.trajectories.iter().map(Trajectory::len).sum()
    }

    /// Get average episode reward
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn avg_reward(&self) -> f64 {
        if self.trajectories.is_empty() {
            0.0
        } else {
            let total: i64 = self
                .trajectories
                .iter()
                .map(|t| t.total_reward.value())
                .sum();
            total as f64 / self.trajectories.len() as f64
        }
    }
}

impl<S, A> Default for TrajectoryBatch<S, A> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn transition(reward: i64, elapsed: u64) -> Transition<u8, u8> {
        Transition {
            state: 0,
            action_index: ActionIndex(0),
            action: 0,
            reward: Reward(reward),
            next_state: 1,
            elapsed,
        }
    }

    #[test]
    fn test_trajectory_accumulates() {
        let mut trajectory = Trajectory::new("ep".to_string());
        assert!(trajectory.is_empty());
        trajectory.push(transition(-5, 1));
        trajectory.push(transition(8, 2));

        assert_eq!(trajectory.len(), 2);
        assert_eq!(trajectory.total_reward, Reward(3));
        assert_eq!(trajectory.total_elapsed, 3);
        assert_eq!(trajectory.last_state(), Some(&1));
    }

    #[test]
    fn test_batch_average() {
        let mut batch = TrajectoryBatch::new();
        assert!((batch.avg_reward() - 0.0).abs() < f64::EPSILON);

        let mut a = Trajectory::new("a".to_string());
        a.push(transition(10, 1));
        let mut b = Trajectory::new("b".to_string());
        b.push(transition(-4, 1));
        b.push(transition(-1, 1));
        batch.push(a);
        batch.push(b);

        assert_eq!(batch.total_transitions(), 3);
        assert!((batch.avg_reward() - 2.5).abs() < f64::EPSILON);
    }
}
