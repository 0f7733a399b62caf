//! Property tests over the simulation invariants

use proptest::prelude::*;

use vector_rocks::consts::{FRAME_DT, INITIAL_ASTEROIDS, ROTATIONS};
use vector_rocks::sim::{GameMode, TickInput, TrigTable, World, tick};
use vector_rocks::wrap_degrees;

proptest! {
    #[test]
    fn wrap_degrees_lands_in_range(deg in any::<i32>()) {
        let wrapped = wrap_degrees(deg);
        prop_assert!((0..360).contains(&wrapped));
        prop_assert_eq!(wrapped, deg.rem_euclid(360));
    }

    #[test]
    fn table_index_is_always_valid(deg in any::<i32>()) {
        let index = TrigTable::index_for(deg);
        prop_assert!(index < ROTATIONS);
    }

    #[test]
    fn table_directions_are_unit_length(deg in -10_000i32..10_000) {
        let table = TrigTable::build();
        let dir = table.direction(deg);
        prop_assert!((dir.length() - 1.0).abs() < 1e-4);
    }

    #[test]
    fn asteroid_population_holds_under_random_play(
        seed in any::<u64>(),
        script in proptest::collection::vec(0u8..128, 1..200),
    ) {
        let mut world = World::new(seed);
        world.mode = GameMode::Playing;

        for byte in script {
            let input = TickInput {
                fire: byte & 1 != 0,
                thrust: byte & 2 != 0,
                reverse: byte & 4 != 0,
                turn_left: byte & 8 != 0,
                turn_right: byte & 16 != 0,
                ..Default::default()
            };
            tick(&mut world, &input, FRAME_DT);
            if world.mode != GameMode::Playing {
                break;
            }
            prop_assert_eq!(world.active_asteroids(), INITIAL_ASTEROIDS);
        }
    }

    #[test]
    fn score_only_grows_while_playing(
        seed in any::<u64>(),
        frames in 1usize..300,
    ) {
        let mut world = World::new(seed);
        world.mode = GameMode::Playing;
        let mut last = 0;
        for frame in 0..frames {
            let input = TickInput {
                fire: frame % 3 == 0,
                turn_right: frame % 2 == 0,
                ..Default::default()
            };
            tick(&mut world, &input, FRAME_DT);
            prop_assert!(world.score >= last);
            last = world.score;
        }
    }
}
