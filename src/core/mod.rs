//! Terminal input abstractions shared by the demo app.

pub mod event;

pub use event::Key;
