//! Platform abstraction layer
//!
//! Handles browser/native differences for:
//! - Input events (keys, touch zones, buttons)

pub mod input;

pub use input::{Button, TouchZone, command_for_button, command_for_key, command_for_touch};
