//! Tests for `StickyPolicy`.

use super::StickyPolicy;
use std::time::Duration;

mod sticky_policy_defaults {
    use super::*;

    #[test]
    fn new_is_unbounded_and_immediate() {
        let policy = StickyPolicy::new();

        assert_eq!(policy.max_attempts, None);
        assert_eq!(policy.initial_delay, Duration::ZERO);
        assert_eq!(policy.max_delay, StickyPolicy::DEFAULT_MAX_DELAY);
        assert!((policy.multiplier - StickyPolicy::DEFAULT_MULTIPLIER).abs() < f64::EPSILON);
    }

    #[test]
    fn default_trait_matches_new() {
        assert_eq!(StickyPolicy::new(), StickyPolicy::default());
    }

    #[test]
    fn default_never_stops_retrying() {
        let policy = StickyPolicy::default();

        assert!(policy.should_retry(1));
        assert!(policy.should_retry(1_000_000));
        assert!(policy.should_retry(u32::MAX));
    }

    #[test]
    fn default_never_delays() {
        let policy = StickyPolicy::default();

        for retry in [0, 1, 10, 1000] {
            assert_eq!(policy.delay_for_retry(retry), Duration::ZERO);
        }
    }
}

mod sticky_policy_builder {
    use super::*;

    #[test]
    fn with_max_attempts_sets_bound() {
        let policy = StickyPolicy::new().with_max_attempts(5);
        assert_eq!(policy.max_attempts, Some(5));
    }

    #[test]
    #[should_panic(expected = "max_attempts must be at least 1")]
    fn with_max_attempts_zero_panics() {
        let _ = StickyPolicy::new().with_max_attempts(0);
    }

    #[test]
    fn unbounded_clears_bound() {
        let policy = StickyPolicy::new().with_max_attempts(5).unbounded();
        assert_eq!(policy.max_attempts, None);
    }

    #[test]
    #[should_panic(expected = "multiplier must be positive")]
    fn with_multiplier_zero_panics() {
        let _ = StickyPolicy::new().with_multiplier(0.0);
    }

    #[test]
    fn builder_chains_correctly() {
        let policy = StickyPolicy::new()
            .with_max_attempts(10)
            .with_initial_delay(Duration::from_millis(500))
            .with_max_delay(Duration::from_secs(30))
            .with_multiplier(3.0);

        assert_eq!(policy.max_attempts, Some(10));
        assert_eq!(policy.initial_delay, Duration::from_millis(500));
        assert_eq!(policy.max_delay, Duration::from_secs(30));
        assert!((policy.multiplier - 3.0).abs() < f64::EPSILON);
    }
}

mod delay_for_retry {
    use super::*;

    #[test]
    fn first_retry_returns_initial_delay() {
        let policy = StickyPolicy::new().with_initial_delay(Duration::from_secs(5));
        assert_eq!(policy.delay_for_retry(0), Duration::from_secs(5));
    }

    #[test]
    fn later_retries_multiply_delay() {
        let policy = StickyPolicy::new()
            .with_initial_delay(Duration::from_secs(5))
            .with_multiplier(2.0);

        assert_eq!(policy.delay_for_retry(1), Duration::from_secs(10));
        assert_eq!(policy.delay_for_retry(2), Duration::from_secs(20));
    }

    #[test]
    fn delay_is_capped_at_max() {
        let policy = StickyPolicy::new()
            .with_initial_delay(Duration::from_secs(10))
            .with_max_delay(Duration::from_secs(30))
            .with_multiplier(2.0);

        // 10 * 2^2 = 40 -> capped at 30
        assert_eq!(policy.delay_for_retry(2), Duration::from_secs(30));
    }

    #[test]
    fn huge_retry_number_caps_at_max() {
        let policy = StickyPolicy::new()
            .with_initial_delay(Duration::from_secs(1))
            .with_max_delay(Duration::from_secs(60));

        assert_eq!(policy.delay_for_retry(u32::MAX), Duration::from_secs(60));
    }

    #[test]
    fn duration_max_ceiling_saturates() {
        let policy = StickyPolicy::new()
            .with_initial_delay(Duration::from_secs(1))
            .with_max_delay(Duration::MAX);

        assert_eq!(policy.delay_for_retry(100), Duration::MAX);
        assert_eq!(policy.delay_for_retry(u32::MAX), Duration::MAX);
    }

    #[test]
    fn negative_multiplier_yields_no_delay() {
        let mut policy = StickyPolicy::new().with_initial_delay(Duration::from_secs(1));
        policy.multiplier = -2.0;

        assert_eq!(policy.delay_for_retry(1), Duration::ZERO);
    }

    #[test]
    fn nan_multiplier_yields_no_delay() {
        let mut policy = StickyPolicy::new().with_initial_delay(Duration::from_secs(1));
        policy.multiplier = f64::NAN;

        assert_eq!(policy.delay_for_retry(3), Duration::ZERO);
    }

    #[test]
    fn fractional_multiplier_works() {
        let policy = StickyPolicy::new()
            .with_initial_delay(Duration::from_secs(4))
            .with_multiplier(1.5);

        assert_eq!(policy.delay_for_retry(0), Duration::from_secs(4));
        assert_eq!(policy.delay_for_retry(1), Duration::from_secs(6));
        assert_eq!(policy.delay_for_retry(2), Duration::from_secs(9));
    }
}

mod should_retry {
    use super::*;

    #[test]
    fn bounded_policy_retries_under_max() {
        let policy = StickyPolicy::new().with_max_attempts(3);

        assert!(policy.should_retry(1));
        assert!(policy.should_retry(2));
        assert!(!policy.should_retry(3));
        assert!(!policy.should_retry(4));
    }

    #[test]
    fn single_attempt_never_retries() {
        let policy = StickyPolicy::new().with_max_attempts(1);

        assert!(!policy.should_retry(1));
    }
}
