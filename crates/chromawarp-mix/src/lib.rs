//! # chromawarp-mix
//!
//! Mixing-space color functions for a drawing host.
//!
//! A [`ColorSession`] sits between user code and a [`Host`] canvas. It reads
//! color arguments in an input mode (host RGB/HSB/HSL or any colorimetric
//! space), converts them into the current mixing space, and drives the batch
//! engine for whole-canvas excursions.
//!
//! - [`context`] - input mode, maxima and mixing space state
//! - [`args`] - argument shapes for color creation
//! - [`value`] - tagged color values with cached sRGB/HSB/HSL
//! - [`host`] - the trait a drawing host implements
//! - [`session`] - the session itself
//!
//! ```text
//! user code -> ColorSession -> MixingContext -> chromawarp-color
//!                   |
//!                   +-> BatchEngine -> Host (PixelSurface)
//! ```

#![warn(missing_docs)]

pub mod args;
pub mod context;
pub mod host;
pub mod session;
pub mod value;

pub use args::ColorArgs;
pub use context::{InputMode, Maxima, MixingContext};
pub use host::{parse_hex, parse_native, Host};
pub use session::ColorSession;
pub use value::ColorValue;

pub use chromawarp_core::{ColorSpace, Error, Result, WhitePoint};
