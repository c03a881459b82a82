//! zjump - spatial jump navigation for terminal widget trees.
//!
//! Module structure:
//! - ui: scene-side primitives (cell geometry, widget traits, scene tree)
//! - jump: target resolver, jump map, and the modal jump session
//! - config: static id-to-key assignment table loading
//! - logging: tracing initialization

pub mod config;
pub mod jump;
pub mod logging;
pub mod ui;

#[cfg(feature = "tui")]
pub mod core;
