//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must stay pure:
//! - Fixed timestep only
//! - No rendering or platform dependencies
//! - Mutation happens only through input application and `tick`

pub mod state;
pub mod tick;

pub use state::{Ball, Bar, GamePhase, GameState, Outcome};
pub use tick::{InputEvent, apply_input, tick};
