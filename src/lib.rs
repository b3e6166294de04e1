//! Terra - real-time planet visualizer
//!
//! A textured globe with day/night shading driven by a sun direction
//! derived from the local time of day, an additive atmosphere glow shell,
//! a procedural starfield, and a damped orbit camera.

pub mod core;
pub mod render;
pub mod scene;
pub mod shading;
pub mod starfield;
pub mod sun;
