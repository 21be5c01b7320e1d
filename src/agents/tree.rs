//! Expression-tree-backed control policy

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::{
    Error, Result,
    game::PursuitState,
    gp::{EvalContext, FloatExpr},
    ports::Policy,
};

/// Turn input range the game expects from policies.
pub const ACTION_MIN: f64 = -1.0;
pub const ACTION_MAX: f64 = 1.0;
/// Action substituted when tree evaluation yields no usable number.
pub const NEUTRAL_ACTION: f64 = 0.0;

/// A control policy backed by a float-rooted expression tree.
///
/// The tree's raw output is unconstrained; this adapter owns the
/// recovery and range contract: an indeterminate (NaN) result is
/// replaced with the neutral action, and everything else is clamped to
/// the [-1, 1] turn-input range before it reaches the game.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TreePolicy {
    name: String,
    tree: FloatExpr,
}

impl TreePolicy {
    pub fn new(name: impl Into<String>, tree: FloatExpr) -> Self {
        TreePolicy {
            name: name.into(),
            tree,
        }
    }

    pub fn tree(&self) -> &FloatExpr {
        &self.tree
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Save the policy as a JSON file.
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let file = std::fs::File::create(&path).map_err(|source| Error::Io {
            operation: format!("create policy file {}", path.as_ref().display()),
            source,
        })?;
        serde_json::to_writer_pretty(file, self)?;
        Ok(())
    }

    /// Load a policy from a JSON file.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let file = std::fs::File::open(&path).map_err(|source| Error::Io {
            operation: format!("open policy file {}", path.as_ref().display()),
            source,
        })?;
        let policy = serde_json::from_reader(file)?;
        Ok(policy)
    }
}

impl Policy<PursuitState, f64> for TreePolicy {
    fn perform_action(&mut self, state: &PursuitState) -> f64 {
        let ctx = EvalContext::new(state);
        let raw = self.tree.evaluate(&ctx);
        if raw.is_nan() {
            return NEUTRAL_ACTION;
        }
        raw.clamp(ACTION_MIN, ACTION_MAX)
    }

    fn name(&self) -> &str {
        &self.name
    }
}
