//! Test suite for the volume engine.

use super::*;
use crate::grid::DenseGrid;
use crate::instruction::parse_instructions;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

const REBOOT_INIT: &str = include_str!("fixtures/reboot_init.txt");
const REBOOT_FULL: &str = include_str!("fixtures/reboot_full.txt");

fn on(min: i32, max: i32) -> Instruction {
    Instruction::on(Region::cube(min, max))
}

fn off(min: i32, max: i32) -> Instruction {
    Instruction::off(Region::cube(min, max))
}

/// Runs the instructions through a fresh engine.
fn run(instructions: &[Instruction]) -> Volume {
    instructions.iter().cloned().collect::<VolumeEngine>().total_on()
}

#[cfg(test)]
mod basic_operations {
    use super::*;

    #[test]
    fn test_new_engine_is_empty() {
        let engine = VolumeEngine::new();
        assert!(engine.is_empty());
        assert_eq!(engine.total_on(), 0);
    }

    #[test]
    fn test_single_on() {
        let mut engine = VolumeEngine::new();
        engine.apply(&on(10, 12));
        assert_eq!(engine.total_on(), 27);
        assert_eq!(engine.len(), 1);
        assert_eq!(engine.ledger()[0].sign(), Sign::Positive);
    }

    #[test]
    fn test_off_on_empty_engine_records_nothing() {
        let mut engine = VolumeEngine::new();
        engine.apply(&off(0, 5));
        assert!(engine.is_empty());
        assert_eq!(engine.total_on(), 0);
    }

    #[test]
    fn test_total_on_is_a_pure_read() {
        let mut engine = VolumeEngine::new();
        engine.apply(&on(0, 3));
        let before = engine.ledger().to_vec();
        assert_eq!(engine.total_on(), 64);
        assert_eq!(engine.total_on(), 64);
        assert_eq!(engine.ledger(), before.as_slice());
    }

    #[test]
    fn test_corrections_only_use_prior_entries() {
        let mut engine = VolumeEngine::new();
        engine.apply(&on(0, 1));
        engine.apply(&on(0, 1));
        // +A, then -A (correction) and +A (own entry).
        assert_eq!(engine.len(), 3);

        engine.apply(&off(0, 1));
        // One correction per prior entry, nothing for the off region itself.
        assert_eq!(engine.len(), 6);
        assert_eq!(engine.total_on(), 0);
    }

    #[test]
    fn test_disjoint_instruction_adds_no_corrections() {
        let mut engine = VolumeEngine::new();
        engine.apply(&on(0, 1));
        engine.apply(&on(5, 6));
        assert_eq!(engine.len(), 2);
        assert_eq!(engine.total_on(), 16);
    }
}

#[cfg(test)]
mod scenarios {
    use super::*;

    #[test]
    fn test_two_overlapping_cubes() {
        assert_eq!(run(&[on(10, 12), on(11, 13)]), 27 + 27 - 8);
    }

    #[test]
    fn test_off_cuts_into_union() {
        let mut engine = VolumeEngine::new();
        engine.extend([on(10, 12), on(11, 13), off(9, 11)]);
        assert_eq!(engine.total_on(), 38);

        engine.apply(&Instruction::on(Region::point(10, 10, 10)));
        assert_eq!(engine.total_on(), 39);
    }

    #[test]
    fn test_compute_on_count_matches_engine() {
        let instructions = [on(10, 12), on(11, 13), off(9, 11), on(10, 10)];
        assert_eq!(compute_on_count(&instructions), 39);
        assert_eq!(compute_on_count(&[]), 0);
    }
}

#[cfg(test)]
mod properties {
    use super::*;

    #[test]
    fn test_repeated_on_is_idempotent() {
        let base = [on(-3, 4), off(0, 2)];
        let once = run(&[base[0], base[1], on(1, 5)]);
        let twice = run(&[base[0], base[1], on(1, 5), on(1, 5)]);
        assert_eq!(once, twice);
    }

    #[test]
    fn test_on_then_off_cancels() {
        assert_eq!(run(&[on(-7, 7), off(-7, 7)]), 0);
    }

    #[test]
    fn test_cancellation_leaves_unrelated_regions() {
        let untouched = on(100, 101);
        assert_eq!(run(&[untouched, on(0, 9), off(0, 9)]), 8);
    }

    #[test]
    fn test_order_matters_for_overlapping_pair() {
        let a = on(0, 2);
        let b = off(1, 3);
        let on_then_off = run(&[a, b]);
        let off_then_on = run(&[b, a]);
        assert_eq!(on_then_off, 27 - 8);
        assert_eq!(off_then_on, 27);
        assert_ne!(on_then_off, off_then_on);
    }

    #[test]
    fn test_off_covering_everything_clears() {
        let instructions = [on(0, 3), on(2, 6), off(4, 5), on(-2, 1), off(-10, 10)];
        assert_eq!(run(&instructions), 0);
    }

    #[test]
    fn test_matches_dense_grid_on_random_sequences() {
        let mut rng = StdRng::seed_from_u64(0x5eed_2021);

        for _ in 0..200 {
            let len = rng.gen_range(1..=12);
            let instructions: Vec<Instruction> = (0..len)
                .map(|_| {
                    let mut axis = || {
                        let a: i32 = rng.gen_range(-6..=6);
                        let b: i32 = rng.gen_range(-6..=6);
                        (a.min(b), a.max(b))
                    };
                    let region = Region::from_bounds(axis(), axis(), axis()).unwrap();
                    if rng.gen_bool(0.6) {
                        Instruction::on(region)
                    } else {
                        Instruction::off(region)
                    }
                })
                .collect();

            let mut engine = VolumeEngine::new();
            let mut grid = DenseGrid::for_instructions(&instructions).unwrap();
            for (step, instruction) in instructions.iter().enumerate() {
                engine.apply(instruction);
                grid.apply(instruction).unwrap();
                assert_eq!(
                    engine.total_on(),
                    grid.count_on(),
                    "diverged after step {step} of {instructions:?}"
                );
            }
        }
    }
}

#[cfg(test)]
mod reference_listings {
    use super::*;

    #[test]
    fn test_init_window_matches_known_count() {
        let instructions = parse_instructions(REBOOT_INIT).unwrap();
        assert_eq!(instructions.len(), 22);
        assert_eq!(
            compute_on_count_within(&instructions, &Region::INIT_WINDOW),
            590_784
        );
    }

    #[test]
    fn test_init_window_matches_dense_grid() {
        let instructions: Vec<Instruction> = parse_instructions(REBOOT_INIT)
            .unwrap()
            .into_iter()
            .filter(|i| Region::INIT_WINDOW.contains_region(&i.region()))
            .collect();
        assert_eq!(instructions.len(), 20);
        assert_eq!(
            DenseGrid::count(&instructions).unwrap(),
            compute_on_count(&instructions)
        );
    }

    #[test]
    fn test_init_listing_without_window() {
        let instructions = parse_instructions(REBOOT_INIT).unwrap();
        assert_eq!(compute_on_count(&instructions), 39_769_202_357_779);
    }

    #[test]
    fn test_full_reboot_matches_known_count() {
        let instructions = parse_instructions(REBOOT_FULL).unwrap();
        assert_eq!(instructions.len(), 60);
        assert_eq!(compute_on_count(&instructions), 2_758_514_936_282_235);
    }

    #[test]
    fn test_full_reboot_init_window() {
        let instructions = parse_instructions(REBOOT_FULL).unwrap();
        assert_eq!(
            compute_on_count_within(&instructions, &Region::INIT_WINDOW),
            474_140
        );
    }

    #[test]
    fn test_full_reboot_too_large_for_dense_grid() {
        let instructions = parse_instructions(REBOOT_FULL).unwrap();
        assert!(matches!(
            DenseGrid::for_instructions(&instructions),
            Err(crate::grid::GridError::TooLarge { .. })
        ));
    }
}
