//! Baseline policies for tests, demos, and opponents

use rand::{Rng, SeedableRng, rngs::StdRng};

use crate::ports::Policy;

use super::tree::{ACTION_MAX, ACTION_MIN};

/// Policy that submits the same action every step.
#[derive(Debug, Clone)]
pub struct ConstantPolicy {
    name: String,
    action: f64,
}

impl ConstantPolicy {
    pub fn new(name: impl Into<String>, action: f64) -> Self {
        ConstantPolicy {
            name: name.into(),
            action,
        }
    }

    /// A policy that always drives straight.
    pub fn straight(name: impl Into<String>) -> Self {
        Self::new(name, 0.0)
    }
}

impl<S> Policy<S, f64> for ConstantPolicy {
    fn perform_action(&mut self, _state: &S) -> f64 {
        self.action
    }

    fn name(&self) -> &str {
        &self.name
    }
}

/// Policy that submits a uniformly random turn input each step.
#[derive(Debug)]
pub struct RandomPolicy {
    name: String,
    rng: StdRng,
}

impl RandomPolicy {
    pub fn new(name: impl Into<String>, seed: u64) -> Self {
        RandomPolicy {
            name: name.into(),
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl<S> Policy<S, f64> for RandomPolicy {
    fn perform_action(&mut self, _state: &S) -> f64 {
        self.rng.random_range(ACTION_MIN..=ACTION_MAX)
    }

    fn name(&self) -> &str {
        &self.name
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn constant_policy_ignores_the_state() {
        let mut policy = ConstantPolicy::new("left", 1.0);
        assert_eq!(Policy::<(), f64>::perform_action(&mut policy, &()), 1.0);
        assert_eq!(Policy::<(), f64>::perform_action(&mut policy, &()), 1.0);
    }

    #[test]
    fn random_policy_is_reproducible_and_in_range() {
        let mut a = RandomPolicy::new("a", 9);
        let mut b = RandomPolicy::new("b", 9);
        for _ in 0..50 {
            let action_a = Policy::<(), f64>::perform_action(&mut a, &());
            let action_b = Policy::<(), f64>::perform_action(&mut b, &());
            assert_eq!(action_a, action_b);
            assert!((ACTION_MIN..=ACTION_MAX).contains(&action_a));
        }
    }
}
