//! Cubist engine crate.
//!
//! This crate owns the platform + GPU runtime pieces used by the demo scenes.

pub mod camera;
pub mod core;
pub mod device;
pub mod logging;
pub mod render;
pub mod time;
pub mod window;
