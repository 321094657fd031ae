//! The surface-backed image adapter.
//!
//! [`SurfaceImage`] wraps a borrowed [`Surface`] and implements the full
//! [`PixelAccess`] contract over it: every access decodes or encodes raw
//! surface pixels through the codec, brackets raw buffer access with the
//! surface's lock when required, and tracks which region has been dirtied
//! so the owner can flush just the changed rectangle to the display.
//!
//! # Update modes
//!
//! In the default deferred mode, writes accumulate into a dirty rectangle
//! and nothing reaches the surface's update mechanism until
//! [`flush`](SurfaceImage::flush). With auto-update enabled, each row
//! write immediately reports its one-row span instead.
//!
//! # Example
//!
//! ```
//! use surfpix_image::{PixelAccess, SurfaceImage};
//! use surfpix_surface::{Color, ManagedSurface, PixelFormat};
//!
//! let mut surface = ManagedSurface::new(320, 200, PixelFormat::rgb888());
//! let mut image = SurfaceImage::wrap(&mut surface, false).unwrap();
//!
//! assert!(image.put_pixel(10, 10, Color::new(255, 0, 0)));
//! assert_eq!(image.get_pixel(10, 10), Some(Color::new(255, 0, 0)));
//!
//! image.flush();
//! drop(image);
//! assert_eq!(surface.take_updates().len(), 1);
//! ```

use crate::errors::ImageError;
use crate::image::PixelAccess;
use crate::lock::LockGuard;
use crate::region::DirtyRegion;
use std::fmt;
use surfpix_common::Rect;
use surfpix_surface::{codec, Color, FColor, FSample, PixelCodec, Sample, Surface};
use tracing::{debug, trace};

/// An image backed by a borrowed, externally owned surface.
///
/// The adapter never owns the surface; dropping the adapter releases only
/// adapter state and ends the borrow. Surface geometry is fixed for the
/// adapter's lifetime.
pub struct SurfaceImage<'s, S: Surface + ?Sized> {
    surface: &'s mut S,
    xsize: i32,
    ysize: i32,
    channels: usize,
    auto_lock: bool,
    auto_update: bool,
    dirty: DirtyRegion,
}

impl<S: Surface + ?Sized> fmt::Debug for SurfaceImage<'_, S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SurfaceImage")
            .field("xsize", &self.xsize)
            .field("ysize", &self.ysize)
            .field("channels", &self.channels)
            .field("auto_lock", &self.auto_lock)
            .field("auto_update", &self.auto_update)
            .field("dirty", &self.dirty)
            .finish_non_exhaustive()
    }
}

impl<'s, S: Surface + ?Sized> SurfaceImage<'s, S> {
    /// Wrap a surface, validating that its format is usable.
    ///
    /// Only direct-color surfaces are supported: indexed/palette formats
    /// and 1-byte-per-pixel formats fail with
    /// [`ImageError::UnsupportedFormat`], as do byte widths the codec
    /// cannot handle and channel masks that are not `2^n - 1`.
    ///
    /// Locking defaults to the surface's own requirement; `auto_update`
    /// chooses immediate per-row flushes over deferred dirty tracking.
    pub fn wrap(surface: &'s mut S, auto_update: bool) -> Result<Self, ImageError> {
        let format = surface.format();
        if !format.is_direct() {
            return Err(ImageError::UnsupportedFormat);
        }
        if PixelCodec::for_format(format).is_none() || !format.has_valid_channel_masks() {
            return Err(ImageError::UnsupportedFormat);
        }

        let auto_lock = surface.must_lock();
        let (xsize, ysize) = (surface.width() as i32, surface.height() as i32);
        debug!(
            "wrapped {}x{} surface, {} bytes/pixel, auto_lock={}, auto_update={}",
            xsize, ysize, format.bytes_per_pixel, auto_lock, auto_update
        );

        Ok(Self {
            surface,
            xsize,
            ysize,
            channels: Color::CHANNELS,
            auto_lock,
            auto_update,
            dirty: DirtyRegion::new(),
        })
    }

    /// Enable or disable lock bracketing around pixel access.
    ///
    /// The effective setting is `must_lock && enabled`: locking can be
    /// forced off (e.g. when the caller already holds the surface lock)
    /// but never onto a surface that does not require it.
    pub fn set_auto_lock(&mut self, enabled: bool) {
        self.auto_lock = self.surface.must_lock() && enabled;
    }

    /// Whether pixel access currently brackets with the surface lock.
    pub fn auto_lock(&self) -> bool {
        self.auto_lock
    }

    /// Switch between immediate per-row flushes (`true`) and deferred
    /// dirty-rectangle accumulation (`false`).
    pub fn set_auto_update(&mut self, enabled: bool) {
        self.auto_update = enabled;
    }

    /// Whether writes flush immediately instead of accumulating.
    pub fn auto_update(&self) -> bool {
        self.auto_update
    }

    /// The rectangle dirtied since the last flush, if any.
    pub fn dirty_region(&self) -> Option<Rect> {
        self.dirty.peek()
    }

    /// Propagate the accumulated dirty rectangle to the surface's update
    /// mechanism and clear it. Does nothing when no pixels were written.
    pub fn flush(&mut self) {
        if let Some(rect) = self.dirty.take() {
            trace!("flushing update region {:?}", rect);
            self.surface.update_rect(rect);
        }
    }

    /// Clamp a span against the image bounds the way every access does:
    /// reject out-of-range `l`/`y`, silently clamp `r`, reject empty.
    fn clamp_span(&self, l: i32, mut r: i32, y: i32) -> Option<(i32, i32)> {
        if l < 0 || l >= self.xsize {
            return None;
        }
        if y < 0 || y >= self.ysize {
            return None;
        }
        if r > self.xsize {
            r = self.xsize;
        }
        if r <= l {
            return None;
        }
        Some((l, r))
    }

    /// Record a completed write: immediate one-row flush in auto-update
    /// mode, dirty accumulation otherwise.
    fn note_write(&mut self, l: i32, r: i32, y: i32) {
        if self.auto_update {
            self.surface.update_rect(Rect::new(l, y, (r - l) as u32, 1));
        } else {
            self.dirty.extend(l, r, y);
        }
    }

    /// Validate a channel selection list against the image's channels.
    fn check_channels(&self, channels: Option<&[usize]>) -> Result<(), ImageError> {
        if let Some(list) = channels {
            for &ch in list {
                if ch >= self.channels {
                    return Err(ImageError::InvalidChannel(ch));
                }
            }
        }
        Ok(())
    }
}

impl<S: Surface + ?Sized> PixelAccess for SurfaceImage<'_, S> {
    fn width(&self) -> i32 {
        self.xsize
    }

    fn height(&self) -> i32 {
        self.ysize
    }

    fn channels(&self) -> usize {
        self.channels
    }

    fn get_row(&mut self, l: i32, r: i32, y: i32, out: &mut [Color]) -> usize {
        let Some((l, r)) = self.clamp_span(l, r, y) else {
            return 0;
        };
        // A short output buffer clamps the span further, so the returned
        // count is always what was actually transferred.
        let count = ((r - l) as usize).min(out.len());
        if count == 0 {
            return 0;
        }

        let guard = LockGuard::acquire(&mut *self.surface, self.auto_lock);
        codec::read_span(guard.surface(), l, l + count as i32, y, out);

        count
    }

    fn put_row(&mut self, l: i32, r: i32, y: i32, colors: &[Color]) -> usize {
        let Some((l, r)) = self.clamp_span(l, r, y) else {
            return 0;
        };
        let count = ((r - l) as usize).min(colors.len());
        if count == 0 {
            return 0;
        }
        let r = l + count as i32;

        {
            let mut guard = LockGuard::acquire(&mut *self.surface, self.auto_lock);
            codec::write_span(guard.surface_mut(), l, r, y, colors);
        }

        self.note_write(l, r, y);
        count
    }

    fn get_row_f(&mut self, l: i32, r: i32, y: i32, out: &mut [FColor]) -> usize {
        let Some((l, r)) = self.clamp_span(l, r, y) else {
            return 0;
        };
        let count = ((r - l) as usize).min(out.len());
        if count == 0 {
            return 0;
        }

        let guard = LockGuard::acquire(&mut *self.surface, self.auto_lock);
        let mut col = [Color::default()];
        for (i, slot) in out.iter_mut().take(count).enumerate() {
            let x = l + i as i32;
            codec::read_span(guard.surface(), x, x + 1, y, &mut col);
            *slot = col[0].to_float();
        }

        count
    }

    fn put_row_f(&mut self, l: i32, r: i32, y: i32, colors: &[FColor]) -> usize {
        let Some((l, r)) = self.clamp_span(l, r, y) else {
            return 0;
        };
        let count = ((r - l) as usize).min(colors.len());
        if count == 0 {
            return 0;
        }
        let r = l + count as i32;

        {
            let mut guard = LockGuard::acquire(&mut *self.surface, self.auto_lock);
            for (i, fcolor) in colors.iter().take(count).enumerate() {
                let x = l + i as i32;
                codec::write_span(guard.surface_mut(), x, x + 1, y, &[fcolor.to_color()]);
            }
        }

        self.note_write(l, r, y);
        count
    }

    fn get_samples(
        &mut self,
        l: i32,
        r: i32,
        y: i32,
        out: &mut [Sample],
        channels: Option<&[usize]>,
    ) -> Result<usize, ImageError> {
        let Some((l, r)) = self.clamp_span(l, r, y) else {
            return Ok(0);
        };
        // Validate before taking the lock so rejection never leaves the
        // surface locked.
        self.check_channels(channels)?;

        let guard = LockGuard::acquire(&mut *self.surface, self.auto_lock);
        let mut col = [Color::default()];
        let mut slots = out.iter_mut();
        let mut count = 0;

        'pixels: for x in l..r {
            codec::read_span(guard.surface(), x, x + 1, y, &mut col);
            match channels {
                Some(list) => {
                    for &ch in list {
                        let Some(slot) = slots.next() else {
                            break 'pixels;
                        };
                        *slot = col[0].channel(ch);
                        count += 1;
                    }
                }
                None => {
                    for ch in 0..self.channels {
                        let Some(slot) = slots.next() else {
                            break 'pixels;
                        };
                        *slot = col[0].channel(ch);
                        count += 1;
                    }
                }
            }
        }

        Ok(count)
    }

    fn get_samples_f(
        &mut self,
        l: i32,
        r: i32,
        y: i32,
        out: &mut [FSample],
        channels: Option<&[usize]>,
    ) -> Result<usize, ImageError> {
        let Some((l, r)) = self.clamp_span(l, r, y) else {
            return Ok(0);
        };
        self.check_channels(channels)?;

        let guard = LockGuard::acquire(&mut *self.surface, self.auto_lock);
        let mut col = [Color::default()];
        let mut slots = out.iter_mut();
        let mut count = 0;

        'pixels: for x in l..r {
            codec::read_span(guard.surface(), x, x + 1, y, &mut col);
            let fcol = col[0].to_float();
            match channels {
                Some(list) => {
                    for &ch in list {
                        let Some(slot) = slots.next() else {
                            break 'pixels;
                        };
                        *slot = fcol.channel(ch);
                        count += 1;
                    }
                }
                None => {
                    for ch in 0..self.channels {
                        let Some(slot) = slots.next() else {
                            break 'pixels;
                        };
                        *slot = fcol.channel(ch);
                        count += 1;
                    }
                }
            }
        }

        Ok(count)
    }
}
