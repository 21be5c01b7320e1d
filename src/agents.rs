//! Policy implementations for the pursuit-evasion game

pub mod fixed;
pub mod tree;

pub use fixed::{ConstantPolicy, RandomPolicy};
pub use tree::TreePolicy;
