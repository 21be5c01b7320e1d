//! Ports (trait boundaries) for games, policies, and run observers.
//!
//! These traits separate the episode driver from any particular game:
//! the driver only ever sees an opaque state type plus the operations
//! declared here.

pub mod game;
pub mod observer;
pub mod policy;

pub use game::Game;
pub use observer::Observer;
pub use policy::Policy;
