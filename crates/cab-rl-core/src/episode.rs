//! Episode bookkeeping and the episode loop

use chrono::{DateTime, Utc};
use rand::Rng;
use serde::{Deserialize, Serialize};
use tracing::{info, trace};

use crate::{Environment, Policy, Reward, Step, Trajectory, Transition};

/// Episode information
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Episode {
    /// Episode ID
    pub id: String,
    /// Total reward
    pub total_reward: Reward,
    /// Number of steps
    pub steps: usize,
    /// Hours elapsed in simulated time
    pub hours: u64,
    /// Whether the step limit cut the episode short
    pub truncated: bool,
    /// Start time
    pub start_time: DateTime<Utc>,
    /// End time
    pub end_time: Option<DateTime<Utc>>,
}

impl Episode {
    /// Start a new episode
    #[must_use]
    pub fn begin() -> Self {
        Self {
            id: uuid::Uuid::new_v4().to_string(),
            total_reward: Reward::default(),
            steps: 0,
            hours: 0,
            truncated: false,
            start_time: Utc::now(),
            end_time: None,
        }
    }

    /// Account for one step
    pub fn record<S>(&mut self, step: &Step<S>) {
        self.total_reward += step.reward;
        self.steps += 1;
        self.hours += step.elapsed;
    }

    /// Close the episode
    pub fn finish(&mut self) {
        self.end_time = Some(Utc::now());
    }

    /// Whether the episode has been closed
    #[must_use]
    pub fn is_finished(&self) -> bool {
        self.end_time.is_some()
    }
}

/// Drives one environment with one policy until a simulated-hours budget is
/// spent.
pub struct EpisodeRunner<'e, E> {
    env: &'e E,
    max_hours: u64,
    step_limit: Option<usize>,
}

impl<'e, E> EpisodeRunner<'e, E>
where
    E: Environment,
{
    /// Create a runner that stops once `max_hours` have elapsed
    pub fn new(env: &'e E, max_hours: u64) -> Self {
        Self {
            env,
            max_hours,
            step_limit: None,
        }
    }

    /// Also stop after `steps` steps, marking the episode truncated.
    ///
    /// Guards against tables with zero-hour rides, where a policy can keep
    /// the clock from ever moving.
    #[must_use]
    pub fn with_step_limit(mut self, steps: usize) -> Self {
        self.step_limit = Some(steps);
        self
    }

    /// Run one episode from a freshly drawn initial state
    pub fn run<P, R>(
        &self,
        policy: &mut P,
        rng: &mut R,
    ) -> crate::Result<(Episode, Trajectory<E::State, E::Action>)>
    where
        P: Policy<State = E::State, Action = E::Action>,
        R: Rng + ?Sized,
    {
        let initial = self.env.reset(rng).initial_state;
        self.run_from(initial, policy, rng)
    }

    /// Run one episode from a given initial state
    pub fn run_from<P, R>(
        &self,
        initial: E::State,
        policy: &mut P,
        rng: &mut R,
    ) -> crate::Result<(Episode, Trajectory<E::State, E::Action>)>
    where
        P: Policy<State = E::State, Action = E::Action>,
        R: Rng + ?Sized,
    {
        let mut episode = Episode::begin();
        let mut trajectory = Trajectory::new(episode.id.clone());
        let mut state = initial;

        while episode.hours < self.max_hours {
            if self.step_limit.is_some_and(|limit| episode.steps >= limit) {
                episode.truncated = true;
                break;
            }
            let batch = self.env.requests(&state, rng)?;
            let (action_index, action) = policy.act(&state, &batch, rng)?;
            let step = self.env.step(&state, &action)?;
            trace!(
                ?state,
                ?action,
                reward = step.reward.value(),
                elapsed = step.elapsed,
                "step"
            );

            episode.record(&step);
            trajectory.push(Transition {
                state,
                action_index,
                action,
                reward: step.reward,
                next_state: step.next_state.clone(),
                elapsed: step.elapsed,
            });
            state = step.next_state;
        }

        episode.finish();
        info!(
            episode = %episode.id,
            steps = episode.steps,
            hours = episode.hours,
            reward = episode.total_reward.value(),
            truncated = episode.truncated,
            "episode finished"
        );
        Ok((episode, trajectory))
    }
}
