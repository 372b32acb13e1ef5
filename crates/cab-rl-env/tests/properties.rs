//! Property tests over the whole state and action spaces

use cab_rl_env::{
    ActionIndex, ActionSpace, CabAction, CabConfig, CabDriverEnv, Calendar, Environment, Reward,
    StateSpace, TravelTimeTable, IDLE_INDEX,
};
use proptest::prelude::*;
use rand::rngs::StdRng;
use rand::SeedableRng;

/// Deterministic but irregular table with cells in `0..=max`
fn scrambled_env(max: u32) -> CabDriverEnv {
    let config = CabConfig::default();
    let table = TravelTimeTable::from_fn(&config, |f, t, h, d| {
        let mix = (f * 31 + t * 17 + h * 7 + d * 3) % (max as usize + 1);
        u32::try_from(mix).unwrap()
    });
    CabDriverEnv::new(config, table).unwrap()
}

proptest! {
    #[test]
    fn advance_stays_in_range(time in 0usize..24, day in 0usize..7, elapsed in any::<u64>()) {
        let (t, d) = Calendar::new(24, 7).advance(time, day, elapsed);
        prop_assert!(t < 24);
        prop_assert!(d < 7);
    }

    #[test]
    fn advance_by_zero_is_identity(time in 0usize..24, day in 0usize..7) {
        prop_assert_eq!(Calendar::new(24, 7).advance(time, day, 0), (time, day));
    }

    #[test]
    fn advance_composes_hour_by_hour(time in 0usize..24, day in 0usize..7, elapsed in 0u64..200) {
        let cal = Calendar::new(24, 7);
        let stepped = (0..elapsed).fold((time, day), |(t, d), _| cal.advance(t, d, 1));
        prop_assert_eq!(cal.advance(time, day, elapsed), stepped);
    }

    #[test]
    fn idle_is_one_costly_hour_in_place(
        location in 0usize..5,
        time in 0usize..24,
        day in 0usize..7,
    ) {
        let env = scrambled_env(9);
        let state = env.state(location, time, day).unwrap();
        let step = env.step(&state, &CabAction::Idle).unwrap();

        prop_assert_eq!(step.reward, Reward(-5));
        prop_assert_eq!(step.next_state.location(), location);
        prop_assert_eq!(step.elapsed, 1);
    }

    #[test]
    fn every_step_lands_inside_the_state_space(
        location in 0usize..5,
        time in 0usize..24,
        day in 0usize..7,
        index in 0usize..21,
    ) {
        let env = scrambled_env(30);
        let state = env.state(location, time, day).unwrap();
        let action = env.action_space().get(ActionIndex(index)).unwrap();
        let step = env.step(&state, &action).unwrap();
        let trip = env.trip(&state, &action).unwrap();

        prop_assert!(env.state_space().contains(&step.next_state));
        prop_assert_eq!(step.elapsed, trip.elapsed());
        prop_assert_eq!(step.next_state, env.transition(&state, &action).unwrap().0);
        if let CabAction::Ride(ride) = action {
            prop_assert_eq!(step.next_state.location(), ride.drop());
            let expected = 9 * i64::from(trip.ride) - 5 * i64::from(trip.transit + trip.ride);
            prop_assert_eq!(step.reward, Reward(expected));
        }
    }

    #[test]
    fn requests_always_include_idle(
        location in 0usize..5,
        time in 0usize..24,
        day in 0usize..7,
        seed in any::<u64>(),
    ) {
        let env = scrambled_env(3);
        let state = env.state(location, time, day).unwrap();
        let batch = env.requests(&state, &mut StdRng::seed_from_u64(seed)).unwrap();

        prop_assert_eq!(batch.indices[0], IDLE_INDEX);
        prop_assert!((1..=16).contains(&batch.len()));
        prop_assert_eq!(batch.indices.len(), batch.actions.len());
    }
}
