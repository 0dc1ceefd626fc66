//! Parallel whole-buffer RGBA8 conversion between sRGB and the CIE spaces.
//!
//! The engine owns a fixed worker pool and a scratch buffer. Each call
//! partitions the buffer, hands one chunk to every worker, converts the
//! remainder on the calling thread and waits on an atomic completion counter.
//!
//! # Architecture
//!
//! ```text
//! BatchEngine (enter / exit / assume)
//!     ├── partition  - pixel-aligned chunking
//!     ├── kernels    - f32 per-pixel routines, quantized to bytes
//!     ├── sync       - CompletionCounter, spin or block
//!     └── rayon::ThreadPool
//! ```
//!
//! # Example
//!
//! ```rust
//! use chromawarp_batch::{BatchEngine, BulkRoutine, EngineConfig};
//! use chromawarp_core::{ColorSpace, WhitePoint};
//!
//! let engine = BatchEngine::new(EngineConfig::default().with_workers(1)).unwrap();
//! let mut pixels = vec![255u8, 255, 255, 255];
//! engine.convert_in_place(&mut pixels, BulkRoutine::Encode(ColorSpace::CieLab), WhitePoint::D65);
//! assert_eq!(pixels[0], 255); // L = 100
//! ```

#![warn(missing_docs)]

pub mod config;
pub mod engine;
pub mod kernels;
pub mod partition;
pub mod sync;

pub use config::{EngineConfig, WaitStrategy};
pub use engine::{BatchEngine, PixelSurface};
pub use kernels::{BulkRoutine, PixelKernel};
pub use sync::CompletionCounter;
