//! The color session a host draws through.
//!
//! [`ColorSession`] wraps a [`Host`] and replaces its color entry points.
//! Every color passes through the [`MixingContext`]: raw arguments are read
//! in the input mode, converted to the mixing space and handed to the host
//! as normalized components. Whole-canvas excursions go through the
//! [`BatchEngine`] built by [`load_backend`](ColorSession::load_backend).
//!
//! # Example
//!
//! ```rust
//! use chromawarp_batch::{EngineConfig, PixelSurface};
//! use chromawarp_core::{ColorSpace, WhitePoint};
//! use chromawarp_mix::{ColorSession, ColorValue, Host};
//!
//! #[derive(Default)]
//! struct Canvas {
//!     pixels: Vec<u8>,
//!     fill: Option<ColorValue>,
//! }
//!
//! impl PixelSurface for Canvas {
//!     fn byte_len(&self) -> usize { self.pixels.len() }
//!     fn read_pixels(&self, dst: &mut [u8]) { dst.copy_from_slice(&self.pixels) }
//!     fn write_pixels(&mut self, src: &[u8]) { self.pixels.copy_from_slice(src) }
//! }
//!
//! impl Host for Canvas {
//!     fn set_fill(&mut self, color: &ColorValue) { self.fill = Some(color.clone()) }
//!     fn set_stroke(&mut self, _: &ColorValue) {}
//!     fn set_background(&mut self, _: &ColorValue) {}
//! }
//!
//! let mut session = ColorSession::with_config(Canvas::default(), EngineConfig::default().with_workers(0));
//! session.load_backend().unwrap();
//! session.warp_to_color_space(ColorSpace::CieLab, Some(WhitePoint::D65)).unwrap();
//! session.fill([0.0, 162.0, 205.0]).unwrap();
//!
//! let fill = session.host().fill.as_ref().unwrap();
//! assert_eq!(fill.space(), ColorSpace::CieLab);
//! assert!((fill.native()[0] - 61.865).abs() < 1e-2);
//! ```

use chromawarp_batch::{BatchEngine, EngineConfig};
use chromawarp_color::{from_gray, to_normalized, Conversion};
use chromawarp_core::{ColorSpace, Error, Result, Tristimulus, WhitePoint};
use tracing::{debug, trace};

use crate::args::ColorArgs;
use crate::context::{InputMode, Maxima, MixingContext};
use crate::host::Host;
use crate::value::ColorValue;

/// A drawing session with mixing-space aware color functions.
pub struct ColorSession<H: Host> {
    host: H,
    context: MixingContext,
    config: EngineConfig,
    engine: Option<BatchEngine>,
}

impl<H: Host> ColorSession<H> {
    /// Wraps `host`, reading engine settings from the environment.
    pub fn new(host: H) -> Self {
        Self::with_config(host, EngineConfig::from_env())
    }

    /// Wraps `host` with explicit engine settings.
    pub fn with_config(host: H, config: EngineConfig) -> Self {
        Self {
            host,
            context: MixingContext::new(),
            config,
            engine: None,
        }
    }

    /// Builds the conversion backend. Calling it again does nothing.
    ///
    /// # Errors
    ///
    /// [`Error::WorkerPool`] if the worker threads cannot be started.
    pub fn load_backend(&mut self) -> Result<()> {
        if self.engine.is_some() {
            debug!("backend already loaded");
            return Ok(());
        }
        self.engine = Some(BatchEngine::new(self.config)?);
        debug!("backend loaded");
        Ok(())
    }

    /// Returns `true` once [`load_backend`](Self::load_backend) succeeded.
    #[inline]
    pub fn is_loaded(&self) -> bool {
        self.engine.is_some()
    }

    /// The wrapped host.
    #[inline]
    pub fn host(&self) -> &H {
        &self.host
    }

    /// The wrapped host, mutably. Drawing calls go here.
    #[inline]
    pub fn host_mut(&mut self) -> &mut H {
        &mut self.host
    }

    /// Unwraps the host.
    pub fn into_host(self) -> H {
        self.host
    }

    /// Current input and mixing state.
    #[inline]
    pub fn context(&self) -> &MixingContext {
        &self.context
    }

    /// The batch engine, once loaded.
    #[inline]
    pub fn engine(&self) -> Option<&BatchEngine> {
        self.engine.as_ref()
    }

    fn ensure_loaded(&self) -> Result<()> {
        if self.engine.is_none() {
            return Err(Error::BackendNotLoaded);
        }
        Ok(())
    }

    // =========================================================================
    // Modes
    // =========================================================================

    /// Sets how raw arguments are read. `None` keeps the last input white.
    pub fn set_input_mode(
        &mut self,
        mode: impl Into<InputMode>,
        white: Option<WhitePoint>,
    ) -> Result<()> {
        self.ensure_loaded()?;
        let mode = mode.into();
        self.context.set_input_mode(mode, white);
        debug!(%mode, white = ?self.context.input_white(), "input mode");
        Ok(())
    }

    /// Sets the input mode and replaces its maxima.
    ///
    /// # Errors
    ///
    /// [`Error::InvalidColorArguments`] for a zero or non-finite maximum.
    pub fn set_input_mode_with_maxima(
        &mut self,
        mode: impl Into<InputMode>,
        white: Option<WhitePoint>,
        maxima: impl Into<Maxima>,
    ) -> Result<()> {
        self.ensure_loaded()?;
        let mode = mode.into();
        self.context.set_input_mode_with_maxima(mode, white, maxima.into())?;
        debug!(%mode, maxima = ?self.context.maxima(mode), "input mode");
        Ok(())
    }

    /// Makes new colors live in `space` without converting the canvas.
    ///
    /// Outside an excursion the canvas is treated as already holding
    /// `space` content, so a later [`exit_color_space`](Self::exit_color_space)
    /// converts it to sRGB. During an excursion the canvas keeps the encoding
    /// it was entered with and exit decodes that one.
    pub fn warp_to_color_space(&mut self, space: ColorSpace, white: Option<WhitePoint>) -> Result<()> {
        let engine = self.engine.as_mut().ok_or(Error::BackendNotLoaded)?;
        self.context.set_mixing_space(space, white);
        if engine.active_space() == ColorSpace::Srgb {
            engine.assume_color_space(space, self.context.mixing_white());
        }
        debug!(%space, canvas = %engine.active_space(), "warped");
        Ok(())
    }

    /// Converts the canvas into `space` and mixes new colors there.
    /// `None` keeps the last mixing white.
    pub fn enter_color_space(&mut self, space: ColorSpace, white: Option<WhitePoint>) -> Result<()> {
        let engine = self.engine.as_mut().ok_or(Error::BackendNotLoaded)?;
        let white = white.unwrap_or(self.context.mixing_white());
        engine.enter_color_space(space, white, &mut self.host);
        self.context.set_mixing_space(space, Some(white));
        Ok(())
    }

    /// Converts the canvas back to sRGB and mixes in sRGB again.
    ///
    /// Outside an excursion this only logs a warning.
    pub fn exit_color_space(&mut self) -> Result<()> {
        let engine = self.engine.as_mut().ok_or(Error::BackendNotLoaded)?;
        engine.exit_color_space(&mut self.host);
        self.context.set_mixing_space(ColorSpace::Srgb, None);
        Ok(())
    }

    // =========================================================================
    // Color creation
    // =========================================================================

    /// Creates a color in the mixing space.
    ///
    /// Numbers are read in the input mode, strings as sRGB, and existing
    /// values from their own space and white.
    ///
    /// # Errors
    ///
    /// [`Error::InvalidColorArguments`] if the host cannot read the arguments.
    pub fn color(&self, args: impl Into<ColorArgs>) -> Result<ColorValue> {
        self.ensure_loaded()?;
        let target = self.context.mixing_space();
        let target_white = self.context.mixing_white();

        let args = args.into();
        let (source, source_white, native) = match args {
            ColorArgs::Value(value) => {
                if value.space() == target && value.white() == target_white {
                    return Ok(value);
                }
                (value.space(), value.white(), value.native())
            }
            ColorArgs::Css(_) => {
                let rgb_max = self.context.maxima(InputMode::Rgb);
                let srgb = self.host.parse_native(&args, InputMode::Rgb, rgb_max)?;
                (ColorSpace::Srgb, WhitePoint::D65, srgb)
            }
            _ => match self.context.input_mode() {
                InputMode::Space(space) => {
                    let white = self.context.input_white();
                    let native = read_native(&args, space, white, self.context.current_maxima())?;
                    (space, white, native)
                }
                mode => {
                    let srgb = self.host.parse_native(&args, mode, self.context.current_maxima())?;
                    (ColorSpace::Srgb, WhitePoint::D65, srgb)
                }
            },
        };

        let out = Conversion::new(source, source_white, target, target_white)
            .apply(Tristimulus::from_array(native));
        trace!(%source, %target, ?native, "color");
        Ok(ColorValue::new(to_normalized(out.to_array(), target), target, target_white))
    }

    /// Sets the host fill color.
    pub fn fill(&mut self, args: impl Into<ColorArgs>) -> Result<()> {
        let color = self.color(args)?;
        self.host.set_fill(&color);
        Ok(())
    }

    /// Sets the host stroke color.
    pub fn stroke(&mut self, args: impl Into<ColorArgs>) -> Result<()> {
        let color = self.color(args)?;
        self.host.set_stroke(&color);
        Ok(())
    }

    /// Clears the host canvas.
    pub fn background(&mut self, args: impl Into<ColorArgs>) -> Result<()> {
        let color = self.color(args)?;
        self.host.set_background(&color);
        Ok(())
    }

    // =========================================================================
    // Queries
    // =========================================================================

    /// sRGB red in the RGB maxima.
    pub fn red(&self, color: &ColorValue) -> Result<f64> {
        self.rgb_channel(color, 0)
    }

    /// sRGB green in the RGB maxima.
    pub fn green(&self, color: &ColorValue) -> Result<f64> {
        self.rgb_channel(color, 1)
    }

    /// sRGB blue in the RGB maxima.
    pub fn blue(&self, color: &ColorValue) -> Result<f64> {
        self.rgb_channel(color, 2)
    }

    /// Alpha in the current input mode's alpha maximum.
    pub fn alpha(&self, color: &ColorValue) -> Result<f64> {
        self.ensure_loaded()?;
        Ok(color.alpha() * self.context.current_maxima()[3])
    }

    /// Hue from HSB in HSB input mode, from HSL otherwise.
    pub fn hue(&self, color: &ColorValue) -> Result<f64> {
        self.hsx_channel(color, 0)
    }

    /// Saturation from HSB in HSB input mode, from HSL otherwise.
    pub fn saturation(&self, color: &ColorValue) -> Result<f64> {
        self.hsx_channel(color, 1)
    }

    /// HSL lightness in the HSL maxima.
    pub fn lightness(&self, color: &ColorValue) -> Result<f64> {
        self.ensure_loaded()?;
        Ok(color.hsl()[2] * self.context.maxima(InputMode::Hsl)[2])
    }

    /// HSB brightness in the HSB maxima.
    pub fn brightness(&self, color: &ColorValue) -> Result<f64> {
        self.ensure_loaded()?;
        Ok(color.hsb()[2] * self.context.maxima(InputMode::Hsb)[2])
    }

    fn rgb_channel(&self, color: &ColorValue, channel: usize) -> Result<f64> {
        self.ensure_loaded()?;
        Ok(color.srgb()[channel] * self.context.maxima(InputMode::Rgb)[channel])
    }

    fn hsx_channel(&self, color: &ColorValue, channel: usize) -> Result<f64> {
        self.ensure_loaded()?;
        if self.context.input_mode() == InputMode::Hsb {
            Ok(color.hsb()[channel] * self.context.maxima(InputMode::Hsb)[channel])
        } else {
            Ok(color.hsl()[channel] * self.context.maxima(InputMode::Hsl)[channel])
        }
    }
}

impl<H: Host + std::fmt::Debug> std::fmt::Debug for ColorSession<H> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ColorSession")
            .field("host", &self.host)
            .field("context", &self.context)
            .field("engine", &self.engine)
            .finish()
    }
}

/// Reads numeric arguments as native components of `space`, divided by the
/// mode's maxima. One or two numbers are a gray level.
fn read_native(
    args: &ColorArgs,
    space: ColorSpace,
    white: WhitePoint,
    maxima: [f64; 4],
) -> Result<[f64; 4]> {
    let native = match *args {
        ColorArgs::Gray(g) => from_gray(g / maxima[0], space, white).to_array(),
        ColorArgs::GrayAlpha(g, a) => {
            let gray = from_gray(g / maxima[0], space, white);
            Tristimulus::with_alpha(gray.components, a / maxima[3]).to_array()
        }
        ColorArgs::Triple([a, b, c]) => [a / maxima[0], b / maxima[1], c / maxima[2], 1.0],
        ColorArgs::Quad(q) => std::array::from_fn(|i| q[i] / maxima[i]),
        ColorArgs::Css(_) | ColorArgs::Value(_) => {
            return Err(Error::invalid_arguments(format!(
                "{space} input takes 1 to 4 numbers"
            )));
        }
    };
    Ok(native)
}
