//! Unit tests for sg-core primitives.

#[cfg(test)]
mod agent {
    use crate::{AgentType, SgError};

    #[test]
    fn codes_roundtrip() {
        assert_eq!(AgentType::try_from(0u8).unwrap(), AgentType::X);
        assert_eq!(AgentType::try_from(1u8).unwrap(), AgentType::O);
        assert_eq!(AgentType::O.code(), 1);
    }

    #[test]
    fn out_of_range_code_rejected() {
        assert!(matches!(AgentType::try_from(2u8), Err(SgError::InvalidAgentType(_))));
        assert!(matches!(AgentType::try_from('Z'), Err(SgError::InvalidAgentType(_))));
    }

    #[test]
    fn flip_is_involution() {
        assert_eq!(AgentType::X.flipped(), AgentType::O);
        assert_eq!(AgentType::O.flipped().flipped(), AgentType::O);
    }

    #[test]
    fn display() {
        assert_eq!(AgentType::X.to_string(), "X");
        assert_eq!(AgentType::O.to_string(), "O");
    }
}

#[cfg(test)]
mod lattice {
    use proptest::prelude::*;

    use crate::{AgentType, Lattice, SgError, TrialRng};

    fn lat(s: &str) -> Lattice {
        s.parse().unwrap()
    }

    #[test]
    fn parse_and_display_roundtrip() {
        let l = lat("XXOOXO");
        assert_eq!(l.len(), 6);
        assert_eq!(l.to_string(), "XXOOXO");
    }

    #[test]
    fn parse_rejects_foreign_symbol() {
        assert!(matches!("XO?".parse::<Lattice>(), Err(SgError::InvalidAgentType(_))));
    }

    #[test]
    fn from_codes_rejects_out_of_range() {
        assert!(Lattice::from_codes(&[0, 1, 1]).is_ok());
        assert!(Lattice::from_codes(&[0, 3]).is_err());
    }

    #[test]
    fn wrap_handles_negative_and_overflow() {
        let l = lat("XOXOX");
        assert_eq!(l.wrap(-1), 4);
        assert_eq!(l.wrap(-6), 4);
        assert_eq!(l.wrap(5), 0);
        assert_eq!(l.wrap(12), 2);
        assert_eq!(l.type_at_offset(0, -1), AgentType::X);
        assert_eq!(l.type_at_offset(4, 1), AgentType::X);
        assert_eq!(l.type_at_offset(4, 2), AgentType::O);
    }

    #[test]
    fn remove_then_insert_restores_length() {
        let mut l = lat("XXOOX");
        let a = l.remove(1).unwrap();
        assert_eq!(a, AgentType::X);
        assert_eq!(l.len(), 4);
        l.insert_at(3, a).unwrap();
        assert_eq!(l.len(), 5);
        assert_eq!(l.to_string(), "XOOXX");
    }

    #[test]
    fn insert_at_end_appends() {
        let mut l = lat("XX");
        l.insert_at(2, AgentType::O).unwrap();
        assert_eq!(l.to_string(), "XXO");
        assert!(l.insert_at(5, AgentType::O).is_err());
    }

    #[test]
    fn remove_out_of_range_errors() {
        let mut l = lat("XO");
        assert!(matches!(
            l.remove(2),
            Err(SgError::PositionOutOfRange { position: 2, len: 2 })
        ));
    }

    #[test]
    fn relocate_forward_and_backward() {
        let mut l = lat("OXXXX");
        l.relocate(0, 3).unwrap();
        assert_eq!(l.to_string(), "XXXOX");
        l.relocate(3, 1).unwrap();
        assert_eq!(l.to_string(), "XOXXX");
        l.relocate(1, 1).unwrap();
        assert_eq!(l.to_string(), "XOXXX");
    }

    #[test]
    fn random_lattice_has_requested_size() {
        let mut rng = TrialRng::new(7, 0);
        let l = Lattice::random(1_000, &mut rng);
        assert_eq!(l.len(), 1_000);
        let o = l.count_of(AgentType::O);
        assert!((300..700).contains(&o), "suspicious type balance: {o}");
    }

    #[test]
    fn relabelled_swaps_every_agent() {
        assert_eq!(lat("XXOX").relabelled().to_string(), "OOXO");
    }

    fn arb_lattice() -> impl Strategy<Value = Lattice> {
        prop::collection::vec(any::<bool>(), 2..64)
            .prop_map(|v| Lattice::from_types(v.into_iter().map(AgentType::from).collect()))
    }

    proptest! {
        #[test]
        fn relocate_matches_remove_insert(l in arb_lattice(), a in any::<usize>(), b in any::<usize>()) {
            let from = a % l.len();
            let to = b % l.len();

            let mut rotated = l.clone();
            rotated.relocate(from, to).unwrap();

            let mut spliced = l.clone();
            let agent = spliced.remove(from).unwrap();
            spliced.insert_at(to, agent).unwrap();

            prop_assert_eq!(rotated.len(), l.len());
            prop_assert_eq!(rotated, spliced);
        }
    }
}

#[cfg(test)]
mod config {
    use crate::ModelConfig;

    #[test]
    fn valid_config_builds() {
        let cfg = ModelConfig::new(100, 3, 0.5).unwrap();
        assert_eq!(cfg.neighbourhood(), 6);
        assert_eq!(cfg.tick_budget(), 50_000);
    }

    #[test]
    fn zero_fields_rejected() {
        assert!(ModelConfig::new(0, 1, 0.5).is_err());
        assert!(ModelConfig::new(10, 0, 0.5).is_err());
    }

    #[test]
    fn tolerance_must_be_open_interval() {
        for t in [0.0, 1.0, -0.1, 1.5, f64::NAN] {
            assert!(ModelConfig::new(10, 2, t).is_err(), "tolerance {t} accepted");
        }
        assert!(ModelConfig::new(10, 2, 0.999).is_ok());
    }

    #[test]
    fn vision_at_or_above_size_rejected() {
        for size in 1..20 {
            for vision in size..size + 5 {
                assert!(
                    ModelConfig::new(size, vision, 0.5).is_err(),
                    "size {size} vision {vision} accepted"
                );
            }
        }
        assert!(ModelConfig::new(5, 4, 0.5).is_ok());
    }
}

#[cfg(test)]
mod rng {
    use crate::{SimRng, TrialRng};

    #[test]
    fn deterministic_same_seed() {
        let mut r1 = TrialRng::new(12345, 3);
        let mut r2 = TrialRng::new(12345, 3);
        for _ in 0..100 {
            assert_eq!(r1.index(1_000), r2.index(1_000));
        }
    }

    #[test]
    fn different_trials_differ() {
        let mut r0 = TrialRng::new(1, 0);
        let mut r1 = TrialRng::new(1, 1);
        let a: Vec<usize> = (0..8).map(|_| r0.index(1 << 20)).collect();
        let b: Vec<usize> = (0..8).map(|_| r1.index(1 << 20)).collect();
        assert_ne!(a, b, "seeds for adjacent trials should diverge");
    }

    #[test]
    fn index_in_bounds() {
        let mut rng = TrialRng::new(0, 0);
        for _ in 0..1000 {
            assert!(rng.index(7) < 7);
        }
    }

    #[test]
    fn gen_bool_extremes() {
        let mut rng = TrialRng::new(0, 0);
        assert!(!rng.gen_bool(0.0));
        assert!(rng.gen_bool(1.0));
    }

    #[test]
    fn sim_rng_seeds_are_reproducible() {
        let mut a = SimRng::new(9);
        let mut b = SimRng::new(9);
        assert_eq!(a.next_seed(), b.next_seed());
    }
}
