//! Jump navigation: assign short key chords to eligible widgets, expose the
//! data an overlay needs to label them, and resolve the next keypress back
//! to a target for the host's focus manager.

pub mod assignment;
pub mod jumper;
pub mod session;

#[cfg(feature = "tui")]
pub mod overlay;

pub use assignment::JumpAssignment;
pub use jumper::{JumpError, JumpInfo, JumpMap, JumpTarget, Jumper};
pub use session::{JumpOutcome, JumpSession, SessionState};
