//! Shared output utilities

pub mod display;

pub use display::{BoardRenderer, Color, ColorOutput};
