//! Lumen engine crate.
//!
//! This crate owns the platform + GPU runtime pieces shared by the demos:
//! device and surface, window loop, frame timing, logging, and the small
//! render helpers (depth target, mipmapped textures) the demos build on.

pub mod device;
pub mod window;
pub mod time;
pub mod core;

pub mod logging;
pub mod render;
