//! The generic pixel-access contract.
//!
//! [`PixelAccess`] is the operation table a host image system expects every
//! image backend to provide: point, row, and sample reads and writes, in
//! both 8-bit integer and normalized floating forms. Backends implement
//! the row and sample operations; the point operations are width-1 spans
//! over the rows and rarely need overriding.

use crate::errors::ImageError;
use surfpix_surface::{Color, FColor, FSample, Sample};

/// Pixel access operations over a 2D image.
///
/// # Bounds behavior
///
/// Row operations clamp `r` to the image width and return `0` without
/// error when `l` or `y` is outside the image or the clamped span is
/// empty. Partially out-of-range spans are silently clamped, and a
/// buffer shorter than the span clamps it further — the returned count
/// is always the number of pixels actually transferred. Sample reads
/// behave the same for bounds, but an invalid channel index is a real
/// error and writes nothing.
pub trait PixelAccess {
    /// Image width in pixels.
    fn width(&self) -> i32;

    /// Image height in pixels.
    fn height(&self) -> i32;

    /// Number of color channels (3 for surface-backed images).
    fn channels(&self) -> usize;

    /// Read pixels `l..r` of row `y` into `out`, returning the number of
    /// pixels read.
    fn get_row(&mut self, l: i32, r: i32, y: i32, out: &mut [Color]) -> usize;

    /// Write `colors` to pixels `l..r` of row `y`, returning the number of
    /// pixels written.
    fn put_row(&mut self, l: i32, r: i32, y: i32, colors: &[Color]) -> usize;

    /// Floating variant of [`get_row`](Self::get_row).
    fn get_row_f(&mut self, l: i32, r: i32, y: i32, out: &mut [FColor]) -> usize;

    /// Floating variant of [`put_row`](Self::put_row).
    fn put_row_f(&mut self, l: i32, r: i32, y: i32, colors: &[FColor]) -> usize;

    /// Read individual samples from pixels `l..r` of row `y`.
    ///
    /// With `channels: Some(list)`, each pixel contributes the listed
    /// channels in order; every index must be below
    /// [`channels()`](Self::channels) or the whole call fails with
    /// [`ImageError::InvalidChannel`] before anything is written. With
    /// `None`, each pixel contributes all of its channels in order.
    ///
    /// Returns the number of samples written. Bounds rejection is `Ok(0)`.
    fn get_samples(
        &mut self,
        l: i32,
        r: i32,
        y: i32,
        out: &mut [Sample],
        channels: Option<&[usize]>,
    ) -> Result<usize, ImageError>;

    /// Floating variant of [`get_samples`](Self::get_samples); each sample
    /// is converted through the int-to-float mapping.
    fn get_samples_f(
        &mut self,
        l: i32,
        r: i32,
        y: i32,
        out: &mut [FSample],
        channels: Option<&[usize]>,
    ) -> Result<usize, ImageError>;

    /// Read a single pixel, or `None` if it lies outside the image.
    fn get_pixel(&mut self, x: i32, y: i32) -> Option<Color> {
        let mut out = [Color::default()];
        (self.get_row(x, x.saturating_add(1), y, &mut out) == 1).then(|| out[0])
    }

    /// Write a single pixel, returning whether it landed inside the image.
    fn put_pixel(&mut self, x: i32, y: i32, color: Color) -> bool {
        self.put_row(x, x.saturating_add(1), y, &[color]) == 1
    }

    /// Floating variant of [`get_pixel`](Self::get_pixel).
    fn get_pixel_f(&mut self, x: i32, y: i32) -> Option<FColor> {
        let mut out = [FColor::default()];
        (self.get_row_f(x, x.saturating_add(1), y, &mut out) == 1).then(|| out[0])
    }

    /// Floating variant of [`put_pixel`](Self::put_pixel).
    fn put_pixel_f(&mut self, x: i32, y: i32, color: FColor) -> bool {
        self.put_row_f(x, x.saturating_add(1), y, &[color]) == 1
    }
}
