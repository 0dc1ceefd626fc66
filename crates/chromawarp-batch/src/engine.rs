//! Whole-surface color space excursions.
//!
//! [`BatchEngine`] converts an RGBA8 surface between sRGB and one other
//! space in place. The buffer is copied into the engine's scratch
//! allocation, cut into `workers + 1` pixel-aligned chunks, and each pool
//! worker converts one chunk while the calling thread converts the last.
//! The caller returns only after every chunk is done.
//!
//! # Example
//!
//! ```rust
//! use chromawarp_batch::{BatchEngine, EngineConfig};
//! use chromawarp_core::{ColorSpace, WhitePoint};
//!
//! let mut engine = BatchEngine::new(EngineConfig::default().with_workers(2)).unwrap();
//! let mut canvas = vec![120u8, 150, 180, 255].repeat(64);
//!
//! engine.enter_color_space(ColorSpace::CieXyz, WhitePoint::D65, &mut canvas);
//! assert_eq!(engine.active_space(), ColorSpace::CieXyz);
//!
//! engine.exit_color_space(&mut canvas);
//! assert!(canvas[..3].iter().zip([120u8, 150, 180]).all(|(a, b)| a.abs_diff(b) <= 1));
//! ```

use std::time::Instant;

use chromawarp_core::{ColorSpace, Error, Result, WhitePoint};
use rayon::{ThreadPool, ThreadPoolBuilder};
use tracing::{debug, trace, warn};

use crate::config::{EngineConfig, WaitStrategy};
use crate::kernels::{BulkRoutine, PixelKernel};
use crate::partition::split_chunks;
use crate::sync::CompletionCounter;

/// An RGBA8 pixel buffer the engine can read and write back.
pub trait PixelSurface {
    /// Length of the pixel buffer in bytes.
    fn byte_len(&self) -> usize;

    /// Copies the current pixels into `dst`, which is exactly
    /// [`byte_len`](Self::byte_len) bytes long.
    fn read_pixels(&self, dst: &mut [u8]);

    /// Replaces the pixels with `src`.
    fn write_pixels(&mut self, src: &[u8]);
}

impl PixelSurface for Vec<u8> {
    fn byte_len(&self) -> usize {
        self.len()
    }

    fn read_pixels(&self, dst: &mut [u8]) {
        dst.copy_from_slice(self);
    }

    fn write_pixels(&mut self, src: &[u8]) {
        self.copy_from_slice(src);
    }
}

/// Parallel sRGB excursion engine.
///
/// Holds a fixed worker pool, built once, and a scratch buffer that grows
/// with the largest surface seen and is released when the engine drops.
pub struct BatchEngine {
    pool: Option<ThreadPool>,
    workers: usize,
    wait: WaitStrategy,
    scratch: Vec<u8>,
    active_space: ColorSpace,
    active_white: WhitePoint,
}

impl std::fmt::Debug for BatchEngine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BatchEngine")
            .field("workers", &self.workers)
            .field("wait", &self.wait)
            .field("scratch", &self.scratch.len())
            .field("active_space", &self.active_space)
            .field("active_white", &self.active_white)
            .finish()
    }
}

impl BatchEngine {
    /// Builds the worker pool described by `config`.
    ///
    /// Zero workers skips the pool and converts on the calling thread.
    ///
    /// # Errors
    ///
    /// [`Error::WorkerPool`] if the threads cannot be spawned.
    pub fn new(config: EngineConfig) -> Result<Self> {
        let workers = config.resolved_workers();
        let pool = if workers == 0 {
            None
        } else {
            let pool = ThreadPoolBuilder::new()
                .num_threads(workers)
                .thread_name(|i| format!("chromawarp-worker-{i}"))
                .build()
                .map_err(|e| Error::worker_pool(e.to_string()))?;
            Some(pool)
        };
        debug!(workers, wait = ?config.wait, "batch engine ready");

        Ok(Self {
            pool,
            workers,
            wait: config.wait,
            scratch: Vec::new(),
            active_space: ColorSpace::Srgb,
            active_white: WhitePoint::D65,
        })
    }

    /// Number of pool workers, not counting the calling thread.
    #[inline]
    pub fn workers(&self) -> usize {
        self.workers
    }

    /// Space the surface is currently encoded in.
    #[inline]
    pub fn active_space(&self) -> ColorSpace {
        self.active_space
    }

    /// White point of the active excursion.
    #[inline]
    pub fn active_white(&self) -> WhitePoint {
        self.active_white
    }

    /// Current size of the scratch allocation in bytes.
    #[inline]
    pub fn scratch_capacity(&self) -> usize {
        self.scratch.len()
    }

    /// Converts `surface` from sRGB into `space` and records the excursion.
    ///
    /// Entering the active space and white again does nothing. If another
    /// excursion is active the surface goes back to sRGB first, and entering
    /// sRGB is the same as [`exit_color_space`](Self::exit_color_space).
    pub fn enter_color_space<S>(&mut self, space: ColorSpace, white: WhitePoint, surface: &mut S)
    where
        S: PixelSurface + ?Sized,
    {
        if space == ColorSpace::Srgb {
            if self.active_space != ColorSpace::Srgb {
                self.exit_color_space(surface);
            }
            return;
        }
        if self.active_space == space && self.active_white == white {
            trace!(%space, "already active");
            return;
        }
        if self.active_space != ColorSpace::Srgb {
            self.exit_color_space(surface);
        }

        debug!(%space, ?white, "entering color space");
        self.convert_surface(surface, BulkRoutine::Encode(space), white);
        self.active_space = space;
        self.active_white = white;
    }

    /// Parses `name` and enters that space.
    ///
    /// # Errors
    ///
    /// [`Error::UnsupportedColorSpace`] for names outside the supported set.
    pub fn enter_color_space_by_name<S>(
        &mut self,
        name: &str,
        white: WhitePoint,
        surface: &mut S,
    ) -> Result<()>
    where
        S: PixelSurface + ?Sized,
    {
        let space: ColorSpace = name.parse()?;
        self.enter_color_space(space, white, surface);
        Ok(())
    }

    /// Converts `surface` back to sRGB and ends the excursion.
    ///
    /// Outside an excursion this only logs a warning.
    pub fn exit_color_space<S>(&mut self, surface: &mut S)
    where
        S: PixelSurface + ?Sized,
    {
        if self.active_space == ColorSpace::Srgb {
            warn!("exit_color_space called while already in sRGB");
            return;
        }

        debug!(space = %self.active_space, "exiting color space");
        self.convert_surface(surface, BulkRoutine::Decode(self.active_space), self.active_white);
        self.active_space = ColorSpace::Srgb;
        self.active_white = WhitePoint::D65;
    }

    /// Records `space` as active without touching any pixels.
    ///
    /// Used when the surface content was drawn directly in `space`, so a
    /// later exit still converts it back.
    pub fn assume_color_space(&mut self, space: ColorSpace, white: WhitePoint) {
        debug!(%space, ?white, "assuming color space");
        self.active_space = space;
        self.active_white = white;
    }

    /// Runs `routine` over a raw RGBA8 buffer.
    pub fn convert_in_place(&self, buf: &mut [u8], routine: BulkRoutine, white: WhitePoint) {
        let kernel = PixelKernel::new(routine, white);
        let start = Instant::now();
        self.dispatch(buf, &|chunk| kernel.run(chunk));
        trace!(
            %routine,
            bytes = buf.len(),
            elapsed_us = start.elapsed().as_micros() as u64,
            "bulk conversion done"
        );
    }

    /// Applies `f` to every chunk of `buf`, one chunk per worker and the
    /// last on the calling thread. Returns after all chunks are done.
    pub fn dispatch(&self, buf: &mut [u8], f: &(dyn Fn(&mut [u8]) + Sync)) {
        let mut chunks = split_chunks(buf, self.workers + 1);
        let last = chunks.pop();
        trace!(
            workers = chunks.len(),
            chunk = chunks.first().map_or(0, |c| c.len()),
            remainder = last.as_ref().map_or(0, |c| c.len()),
            "dispatching"
        );

        let Some(pool) = &self.pool else {
            if let Some(last) = last {
                f(last);
            }
            return;
        };

        let counter = CompletionCounter::new(chunks.len());
        pool.in_place_scope(|scope| {
            for chunk in chunks {
                let counter = &counter;
                scope.spawn(move |_| {
                    let _arrival = counter.arrival();
                    f(chunk);
                });
            }
            if let Some(last) = last {
                f(last);
            }
            counter.wait(self.wait);
        });
    }

    fn convert_surface<S>(&mut self, surface: &mut S, routine: BulkRoutine, white: WhitePoint)
    where
        S: PixelSurface + ?Sized,
    {
        let len = surface.byte_len();
        self.reserve_scratch(len);

        let mut scratch = std::mem::take(&mut self.scratch);
        let buf = &mut scratch[..len];
        surface.read_pixels(buf);
        self.convert_in_place(buf, routine, white);
        surface.write_pixels(buf);
        self.scratch = scratch;
    }

    fn reserve_scratch(&mut self, len: usize) {
        let have = self.scratch.len();
        if have >= len {
            return;
        }
        let grown = len.max(have.saturating_mul(2));
        trace!(from = have, to = grown, "growing scratch");
        self.scratch.resize(grown, 0);
    }
}
