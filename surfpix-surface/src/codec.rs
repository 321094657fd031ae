//! Raw pixel codec.
//!
//! Translates between packed pixel values and surface bytes for the four
//! supported pixel widths, in either byte order. The codec is chosen once
//! per surface from its [`PixelFormat`] rather than re-derived per pixel.
//!
//! The span functions are defensively bounds-checked: a span touching any
//! out-of-range coordinate is a silent no-op, never an error. Callers that
//! want partial spans clamp before calling.

use crate::color::Color;
use crate::format::{ByteOrder, PixelFormat};
use crate::surface::Surface;

/// Storage width of one pixel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PixelWidth {
    One,
    Two,
    Three,
    Four,
}

impl PixelWidth {
    /// Map a byte count onto a width, if supported.
    pub const fn from_bytes(bytes: u8) -> Option<Self> {
        match bytes {
            1 => Some(Self::One),
            2 => Some(Self::Two),
            3 => Some(Self::Three),
            4 => Some(Self::Four),
            _ => None,
        }
    }

    /// Width in bytes.
    pub const fn bytes(self) -> usize {
        match self {
            Self::One => 1,
            Self::Two => 2,
            Self::Three => 3,
            Self::Four => 4,
        }
    }
}

/// Strategy for reading and writing raw pixels of a fixed width and order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PixelCodec {
    width: PixelWidth,
    order: ByteOrder,
}

impl PixelCodec {
    pub const fn new(width: PixelWidth, order: ByteOrder) -> Self {
        Self { width, order }
    }

    /// Build the codec matching a pixel format, or `None` if the format's
    /// byte width is outside the supported 1-4 range.
    pub fn for_format(format: &PixelFormat) -> Option<Self> {
        PixelWidth::from_bytes(format.bytes_per_pixel)
            .map(|width| Self::new(width, format.byte_order))
    }

    pub const fn width(&self) -> PixelWidth {
        self.width
    }

    /// Read one packed pixel value from `bytes`.
    ///
    /// # Panics
    ///
    /// Panics if `bytes` is shorter than the codec's pixel width.
    pub fn read_raw(&self, bytes: &[u8]) -> u32 {
        match (self.width, self.order) {
            (PixelWidth::One, _) => u32::from(bytes[0]),
            (PixelWidth::Two, ByteOrder::Little) => {
                u32::from(u16::from_le_bytes([bytes[0], bytes[1]]))
            }
            (PixelWidth::Two, ByteOrder::Big) => {
                u32::from(u16::from_be_bytes([bytes[0], bytes[1]]))
            }
            (PixelWidth::Three, ByteOrder::Little) => {
                u32::from(bytes[0]) | u32::from(bytes[1]) << 8 | u32::from(bytes[2]) << 16
            }
            (PixelWidth::Three, ByteOrder::Big) => {
                u32::from(bytes[0]) << 16 | u32::from(bytes[1]) << 8 | u32::from(bytes[2])
            }
            (PixelWidth::Four, ByteOrder::Little) => {
                u32::from_le_bytes([bytes[0], bytes[1], bytes[2], bytes[3]])
            }
            (PixelWidth::Four, ByteOrder::Big) => {
                u32::from_be_bytes([bytes[0], bytes[1], bytes[2], bytes[3]])
            }
        }
    }

    /// Write one packed pixel value into `bytes`.
    ///
    /// # Panics
    ///
    /// Panics if `bytes` is shorter than the codec's pixel width.
    pub fn write_raw(&self, raw: u32, bytes: &mut [u8]) {
        match (self.width, self.order) {
            (PixelWidth::One, _) => bytes[0] = raw as u8,
            (PixelWidth::Two, ByteOrder::Little) => {
                bytes[..2].copy_from_slice(&(raw as u16).to_le_bytes());
            }
            (PixelWidth::Two, ByteOrder::Big) => {
                bytes[..2].copy_from_slice(&(raw as u16).to_be_bytes());
            }
            (PixelWidth::Three, ByteOrder::Little) => {
                bytes[0] = raw as u8;
                bytes[1] = (raw >> 8) as u8;
                bytes[2] = (raw >> 16) as u8;
            }
            (PixelWidth::Three, ByteOrder::Big) => {
                bytes[0] = (raw >> 16) as u8;
                bytes[1] = (raw >> 8) as u8;
                bytes[2] = raw as u8;
            }
            (PixelWidth::Four, ByteOrder::Little) => {
                bytes[..4].copy_from_slice(&raw.to_le_bytes());
            }
            (PixelWidth::Four, ByteOrder::Big) => {
                bytes[..4].copy_from_slice(&raw.to_be_bytes());
            }
        }
    }
}

/// Decode a run of pixels on row `y`, columns `l..r`, into `out`.
///
/// Out-of-range coordinates make the whole call a no-op. At most
/// `out.len()` pixels are decoded.
///
/// # Panics
///
/// Panics if the surface's byte width is outside 1-4; the adapter rejects
/// such surfaces at construction.
pub fn read_span<S: Surface + ?Sized>(surface: &S, l: i32, r: i32, y: i32, out: &mut [Color]) {
    let codec = PixelCodec::for_format(surface.format())
        .expect("surface pixel width must be 1, 2, 3 or 4 bytes");
    let (w, h) = (surface.width() as i32, surface.height() as i32);
    if l < 0 || y < 0 || l >= w || y >= h || r < 0 || r > w || r <= l {
        return;
    }

    let format = *surface.format();
    let bpp = codec.width().bytes();
    let pixels = surface.pixels();
    let mut offset = y as usize * surface.pitch() + l as usize * bpp;

    for slot in out.iter_mut().take((r - l) as usize) {
        let raw = codec.read_raw(&pixels[offset..offset + bpp]);
        *slot = format.unpack(raw);
        offset += bpp;
    }
}

/// Encode a run of pixels on row `y`, columns `l..r`, from `colors`.
///
/// Out-of-range coordinates make the whole call a no-op. At most
/// `colors.len()` pixels are encoded.
///
/// # Panics
///
/// Panics if the surface's byte width is outside 1-4; the adapter rejects
/// such surfaces at construction.
pub fn write_span<S: Surface + ?Sized>(surface: &mut S, l: i32, r: i32, y: i32, colors: &[Color]) {
    let codec = PixelCodec::for_format(surface.format())
        .expect("surface pixel width must be 1, 2, 3 or 4 bytes");
    let (w, h) = (surface.width() as i32, surface.height() as i32);
    if l < 0 || y < 0 || l >= w || y >= h || r < 0 || r > w || r <= l {
        return;
    }

    let format = *surface.format();
    let bpp = codec.width().bytes();
    let mut offset = y as usize * surface.pitch() + l as usize * bpp;
    let pixels = surface.pixels_mut();

    for color in colors.iter().take((r - l) as usize) {
        let raw = format.pack(*color);
        codec.write_raw(raw, &mut pixels[offset..offset + bpp]);
        offset += bpp;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::managed::ManagedSurface;
    use proptest::prelude::*;

    #[test]
    fn test_three_byte_orders_differ() {
        let little = PixelCodec::new(PixelWidth::Three, ByteOrder::Little);
        let big = PixelCodec::new(PixelWidth::Three, ByteOrder::Big);

        let mut bytes = [0u8; 3];
        little.write_raw(0x00AA_BBCC, &mut bytes);
        assert_eq!(bytes, [0xCC, 0xBB, 0xAA]);

        big.write_raw(0x00AA_BBCC, &mut bytes);
        assert_eq!(bytes, [0xAA, 0xBB, 0xCC]);
    }

    #[test]
    fn test_one_byte_ignores_order() {
        let little = PixelCodec::new(PixelWidth::One, ByteOrder::Little);
        let big = PixelCodec::new(PixelWidth::One, ByteOrder::Big);
        assert_eq!(little.read_raw(&[0x7F]), 0x7F);
        assert_eq!(big.read_raw(&[0x7F]), 0x7F);
    }

    #[test]
    fn test_width_from_bytes() {
        assert_eq!(PixelWidth::from_bytes(3), Some(PixelWidth::Three));
        assert_eq!(PixelWidth::from_bytes(0), None);
        assert_eq!(PixelWidth::from_bytes(5), None);
    }

    #[test]
    fn test_span_out_of_range_is_noop() {
        let mut surface = ManagedSurface::new(4, 4, PixelFormat::rgb888());
        let sentinel = Color::new(1, 2, 3);
        let mut out = [sentinel; 4];

        read_span(&surface, -1, 4, 0, &mut out);
        assert_eq!(out, [sentinel; 4]);

        read_span(&surface, 0, 4, 7, &mut out);
        assert_eq!(out, [sentinel; 4]);

        write_span(&mut surface, 0, 4, -2, &[Color::new(9, 9, 9); 4]);
        assert!(surface.data().iter().all(|&b| b == 0));
    }

    #[test]
    fn test_span_round_trip_with_row_padding() {
        let format = PixelFormat::rgb24();
        let mut surface = ManagedSurface::with_pitch(3, 2, 16, format).unwrap();
        let colors = [
            Color::new(10, 20, 30),
            Color::new(40, 50, 60),
            Color::new(70, 80, 90),
        ];

        write_span(&mut surface, 0, 3, 1, &colors);

        let mut out = [Color::default(); 3];
        read_span(&surface, 0, 3, 1, &mut out);
        assert_eq!(out, colors);

        // Row 0 was never touched.
        read_span(&surface, 0, 3, 0, &mut out);
        assert_eq!(out, [Color::default(); 3]);
    }

    proptest! {
        #[test]
        fn prop_raw_round_trip(raw in any::<u32>(), bytes in 1u8..=4, big in any::<bool>()) {
            let width = PixelWidth::from_bytes(bytes).unwrap();
            let order = if big { ByteOrder::Big } else { ByteOrder::Little };
            let codec = PixelCodec::new(width, order);

            let mask = match width {
                PixelWidth::One => 0xFF,
                PixelWidth::Two => 0xFFFF,
                PixelWidth::Three => 0x00FF_FFFF,
                PixelWidth::Four => u32::MAX,
            };
            let raw = raw & mask;

            let mut buf = [0u8; 4];
            codec.write_raw(raw, &mut buf[..width.bytes()]);
            prop_assert_eq!(codec.read_raw(&buf[..width.bytes()]), raw);
        }

        #[test]
        fn prop_representable_colors_survive_decode_encode(
            r in any::<u8>(), g in any::<u8>(), b in any::<u8>(), wide in any::<bool>(),
        ) {
            let format = if wide { PixelFormat::rgb888() } else { PixelFormat::rgb565() };
            // Quantize once to land on a representable color, then the
            // round trip must be exact.
            let color = format.unpack(format.pack(Color::new(r, g, b)));
            prop_assert_eq!(format.unpack(format.pack(color)), color);
        }
    }
}
