//! Presentation boundary
//!
//! The simulation never touches the display. After each frame the host
//! captures a `FrameSnapshot` and hands it to a renderer.

#[cfg(target_arch = "wasm32")]
pub mod dom;
pub mod snapshot;

#[cfg(target_arch = "wasm32")]
pub use dom::DomRenderer;
pub use snapshot::{FrameSnapshot, Sprite};
