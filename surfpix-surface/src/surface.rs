//! The externally owned surface contract.

use crate::format::PixelFormat;
use surfpix_common::Rect;

/// A live, externally owned rectangular pixel buffer.
///
/// The surface's geometry (`width`, `height`, `pitch`) and format are fixed
/// for as long as anything borrows it; implementations must not resize or
/// re-layout the buffer underneath a borrower.
///
/// # Locking
///
/// Some surfaces (typically hardware-backed or format-converted ones) only
/// expose a valid pixel buffer between [`lock`](Surface::lock) and
/// [`unlock`](Surface::unlock) calls. [`must_lock`](Surface::must_lock)
/// reports whether that discipline applies; when it does, every raw access
/// through [`pixels`](Surface::pixels) or
/// [`pixels_mut`](Surface::pixels_mut) must be bracketed by a lock/unlock
/// pair. Lock calls may nest.
pub trait Surface {
    /// Surface width in pixels.
    fn width(&self) -> u32;

    /// Surface height in pixels.
    fn height(&self) -> u32;

    /// Bytes per row, including any trailing padding. Always at least
    /// `width * bytes_per_pixel`. Note this is a **byte** count, not a
    /// pixel count.
    fn pitch(&self) -> usize;

    /// The pixel format describing the buffer's byte layout.
    fn format(&self) -> &PixelFormat;

    /// Whether raw buffer access must be bracketed by lock/unlock.
    fn must_lock(&self) -> bool;

    /// Acquire exclusive access to the raw pixel buffer.
    fn lock(&mut self);

    /// Release exclusive access to the raw pixel buffer.
    fn unlock(&mut self);

    /// The raw pixel bytes, row-major with `pitch` bytes per row.
    fn pixels(&self) -> &[u8];

    /// Mutable access to the raw pixel bytes.
    fn pixels_mut(&mut self) -> &mut [u8];

    /// Report that a region of the surface has changed and should be
    /// presented by the surface's owner (e.g. copied to the display).
    fn update_rect(&mut self, rect: Rect);
}
