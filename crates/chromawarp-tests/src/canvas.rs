//! In-memory RGBA8 canvas used as a drawing host.
//!
//! Stores pixels row-major, four bytes each. Fill and stroke are kept as raw
//! bytes exactly as a browser canvas would keep them: the normalized
//! components of whatever space the session mixes in.

use chromawarp_batch::PixelSurface;
use chromawarp_mix::{ColorArgs, ColorValue, Host, InputMode, Result};

/// A width x height RGBA8 canvas.
#[derive(Debug, Clone)]
pub struct MemoryCanvas {
    width: usize,
    height: usize,
    pixels: Vec<u8>,
    fill: [u8; 4],
    stroke: [u8; 4],
}

impl MemoryCanvas {
    /// Opaque white canvas with a white fill and black stroke.
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            pixels: vec![255; width * height * 4],
            fill: [255; 4],
            stroke: [0, 0, 0, 255],
        }
    }

    /// Canvas width in pixels.
    pub fn width(&self) -> usize {
        self.width
    }

    /// Canvas height in pixels.
    pub fn height(&self) -> usize {
        self.height
    }

    /// Raw RGBA8 bytes.
    pub fn pixels(&self) -> &[u8] {
        &self.pixels
    }

    /// Current fill bytes.
    pub fn fill(&self) -> [u8; 4] {
        self.fill
    }

    /// Current stroke bytes.
    pub fn stroke(&self) -> [u8; 4] {
        self.stroke
    }

    /// Pixel at (x, y). Panics outside the canvas.
    pub fn get(&self, x: usize, y: usize) -> [u8; 4] {
        let i = (y * self.width + x) * 4;
        [self.pixels[i], self.pixels[i + 1], self.pixels[i + 2], self.pixels[i + 3]]
    }

    /// Fills a rectangle with the fill color, clipped to the canvas.
    pub fn rect(&mut self, x: usize, y: usize, w: usize, h: usize) {
        let x_end = (x + w).min(self.width);
        let y_end = (y + h).min(self.height);
        for row in y.min(y_end)..y_end {
            for col in x.min(x_end)..x_end {
                let i = (row * self.width + col) * 4;
                self.pixels[i..i + 4].copy_from_slice(&self.fill);
            }
        }
    }
}

impl PixelSurface for MemoryCanvas {
    fn byte_len(&self) -> usize {
        self.pixels.len()
    }

    fn read_pixels(&self, dst: &mut [u8]) {
        dst.copy_from_slice(&self.pixels);
    }

    fn write_pixels(&mut self, src: &[u8]) {
        self.pixels.copy_from_slice(src);
    }
}

impl Host for MemoryCanvas {
    /// Adds a handful of CSS color names on top of the default reader.
    fn parse_native(&self, args: &ColorArgs, mode: InputMode, maxima: [f64; 4]) -> Result<[f64; 4]> {
        if let ColorArgs::Css(name) = args {
            if let Some(rgb) = named_color(name) {
                return Ok([rgb[0], rgb[1], rgb[2], 255].map(|b| b as f64 / 255.0));
            }
        }
        chromawarp_mix::parse_native(args, mode, maxima)
    }

    fn set_fill(&mut self, color: &ColorValue) {
        self.fill = color.to_rgba8();
    }

    fn set_stroke(&mut self, color: &ColorValue) {
        self.stroke = color.to_rgba8();
    }

    fn set_background(&mut self, color: &ColorValue) {
        let rgba = color.to_rgba8();
        for px in self.pixels.chunks_exact_mut(4) {
            px.copy_from_slice(&rgba);
        }
    }
}

fn named_color(name: &str) -> Option<[u8; 3]> {
    let rgb = match name.trim().to_ascii_lowercase().as_str() {
        "black" => [0, 0, 0],
        "white" => [255, 255, 255],
        "red" => [255, 0, 0],
        "lime" => [0, 255, 0],
        "blue" => [0, 0, 255],
        "lightskyblue" => [135, 206, 250],
        "rebeccapurple" => [102, 51, 153],
        _ => return None,
    };
    Some(rgb)
}
