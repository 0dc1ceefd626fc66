//! Integration tests for chromawarp crates.
//!
//! This crate contains end-to-end tests that drive a [`ColorSession`] over
//! an in-memory canvas, checking that color creation, input modes and
//! whole-canvas excursions agree across the core, color, batch and mix
//! crates.
//!
//! [`ColorSession`]: chromawarp_mix::ColorSession

pub mod canvas;

pub use canvas::MemoryCanvas;

#[cfg(test)]
mod color_overrides;

#[cfg(test)]
mod excursions;
