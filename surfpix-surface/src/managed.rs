//! Owned, in-memory surface implementation.
//!
//! [`ManagedSurface`] stores its pixels in a `Vec<u8>` and implements the
//! full [`Surface`] contract, including optional row padding and the
//! lock/update bookkeeping a windowing system would normally provide. It
//! serves as a software stand-in for a display surface: the owner drains
//! [`take_updates`](ManagedSurface::take_updates) to learn which regions
//! need presenting.
//!
//! # Example
//!
//! ```
//! use surfpix_surface::{ManagedSurface, PixelFormat, Surface};
//!
//! let surface = ManagedSurface::new(640, 480, PixelFormat::rgb888());
//! assert_eq!(surface.width(), 640);
//! assert_eq!(surface.pitch(), 640 * 4);
//! assert!(!surface.must_lock());
//! ```

use crate::format::PixelFormat;
use crate::surface::Surface;
use anyhow::{anyhow, Result};
use surfpix_common::Rect;

/// A surface that manages its own memory.
#[derive(Debug, Clone)]
pub struct ManagedSurface {
    width: u32,
    height: u32,
    /// Bytes per row, >= width * bytes_per_pixel.
    pitch: usize,
    format: PixelFormat,
    data: Vec<u8>,
    must_lock: bool,
    /// Current lock nesting depth.
    lock_depth: u32,
    /// Total number of lock acquisitions, for hosts auditing the lock
    /// discipline of code accessing the surface.
    lock_count: u64,
    /// Regions reported via `update_rect` and not yet drained.
    updates: Vec<Rect>,
}

impl ManagedSurface {
    /// Create a surface with tightly packed rows.
    pub fn new(width: u32, height: u32, format: PixelFormat) -> Self {
        let pitch = width as usize * format.bytes_per_pixel as usize;
        Self {
            width,
            height,
            pitch,
            format,
            data: vec![0u8; pitch * height as usize],
            must_lock: false,
            lock_depth: 0,
            lock_count: 0,
            updates: Vec::new(),
        }
    }

    /// Create a surface with an explicit pitch, allowing trailing row
    /// padding. Fails if `pitch` cannot hold a full row of pixels.
    pub fn with_pitch(width: u32, height: u32, pitch: usize, format: PixelFormat) -> Result<Self> {
        let min_pitch = width as usize * format.bytes_per_pixel as usize;
        if pitch < min_pitch {
            return Err(anyhow!(
                "pitch {} too small for {} pixels of {} bytes",
                pitch,
                width,
                format.bytes_per_pixel
            ));
        }
        let mut surface = Self::new(width, height, format);
        surface.pitch = pitch;
        surface.data = vec![0u8; pitch * height as usize];
        Ok(surface)
    }

    /// Make the surface demand lock/unlock bracketing around raw access,
    /// the way a hardware-backed surface would.
    pub fn set_must_lock(&mut self, must_lock: bool) {
        self.must_lock = must_lock;
    }

    /// The raw backing bytes.
    pub fn data(&self) -> &[u8] {
        &self.data
    }

    /// Current lock nesting depth. Zero whenever the lock discipline has
    /// been followed to completion.
    pub fn lock_depth(&self) -> u32 {
        self.lock_depth
    }

    /// Total lock acquisitions over the surface's lifetime.
    pub fn lock_count(&self) -> u64 {
        self.lock_count
    }

    /// Regions reported as changed and not yet drained.
    pub fn updates(&self) -> &[Rect] {
        &self.updates
    }

    /// Drain the pending update regions, leaving the list empty.
    pub fn take_updates(&mut self) -> Vec<Rect> {
        std::mem::take(&mut self.updates)
    }
}

impl Surface for ManagedSurface {
    fn width(&self) -> u32 {
        self.width
    }

    fn height(&self) -> u32 {
        self.height
    }

    fn pitch(&self) -> usize {
        self.pitch
    }

    fn format(&self) -> &PixelFormat {
        &self.format
    }

    fn must_lock(&self) -> bool {
        self.must_lock
    }

    fn lock(&mut self) {
        self.lock_depth += 1;
        self.lock_count += 1;
    }

    fn unlock(&mut self) {
        debug_assert!(self.lock_depth > 0, "unlock without matching lock");
        self.lock_depth = self.lock_depth.saturating_sub(1);
    }

    fn pixels(&self) -> &[u8] {
        &self.data
    }

    fn pixels_mut(&mut self) -> &mut [u8] {
        &mut self.data
    }

    fn update_rect(&mut self, rect: Rect) {
        self.updates.push(rect);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_sizes_buffer() {
        let surface = ManagedSurface::new(100, 50, PixelFormat::rgb565());
        assert_eq!(surface.pitch(), 200);
        assert_eq!(surface.data().len(), 200 * 50);
    }

    #[test]
    fn test_with_pitch_allows_padding() {
        let surface = ManagedSurface::with_pitch(10, 4, 64, PixelFormat::rgb24()).unwrap();
        assert_eq!(surface.pitch(), 64);
        assert_eq!(surface.data().len(), 64 * 4);
    }

    #[test]
    fn test_with_pitch_rejects_short_rows() {
        assert!(ManagedSurface::with_pitch(10, 4, 16, PixelFormat::rgb888()).is_err());
    }

    #[test]
    fn test_lock_bookkeeping() {
        let mut surface = ManagedSurface::new(8, 8, PixelFormat::rgb888());
        surface.set_must_lock(true);
        assert!(surface.must_lock());

        surface.lock();
        surface.lock();
        assert_eq!(surface.lock_depth(), 2);
        surface.unlock();
        surface.unlock();
        assert_eq!(surface.lock_depth(), 0);
        assert_eq!(surface.lock_count(), 2);
    }

    #[test]
    fn test_update_regions_accumulate_and_drain() {
        let mut surface = ManagedSurface::new(8, 8, PixelFormat::rgb888());
        surface.update_rect(Rect::new(1, 2, 3, 4));
        surface.update_rect(Rect::new(0, 0, 8, 1));
        assert_eq!(surface.updates().len(), 2);

        let drained = surface.take_updates();
        assert_eq!(drained[0], Rect::new(1, 2, 3, 4));
        assert!(surface.updates().is_empty());
    }
}
