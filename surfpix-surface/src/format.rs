//! Pixel format descriptions and channel packing.
//!
//! A [`PixelFormat`] describes how a surface stores one pixel: its byte
//! width, byte order, and where each color channel sits inside the packed
//! value. It converts between packed pixel values and canonical [`Color`]s.
//!
//! # Channel layout
//!
//! Each channel is described by a `max` (the largest value the channel can
//! hold, always of the form `2^n - 1`) and a `shift` (the bit position of
//! the channel's least significant bit). Extraction shifts and masks the
//! packed value, then widens the channel to 8 bits by shifting left by the
//! channel's loss (`8 - n`). Composition is the exact inverse, so packing
//! and unpacking round-trip for every color representable at the format's
//! channel depth.
//!
//! # Example
//!
//! ```
//! use surfpix_surface::{Color, PixelFormat};
//!
//! let format = PixelFormat::rgb565();
//! let raw = format.pack(Color::new(255, 255, 255));
//! assert_eq!(raw, 0xFFFF);
//! assert_eq!(format.unpack(raw), Color::new(248, 252, 248));
//! ```

use crate::color::{Color, Sample};

/// Byte order of a multi-byte pixel in surface memory.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ByteOrder {
    /// Least significant byte first.
    Little,
    /// Most significant byte first.
    Big,
}

impl ByteOrder {
    /// The byte order of the platform we are running on.
    pub const fn native() -> Self {
        if cfg!(target_endian = "big") {
            Self::Big
        } else {
            Self::Little
        }
    }
}

/// Describes how a surface encodes one pixel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PixelFormat {
    /// Storage width of one pixel in bytes (1, 2, 3 or 4).
    pub bytes_per_pixel: u8,

    /// Byte order for multi-byte pixels.
    pub byte_order: ByteOrder,

    /// Palette (indexed) format. Indexed surfaces carry indices into a
    /// color table rather than direct channel values and are rejected by
    /// the image adapter.
    pub indexed: bool,

    /// Maximum valid red component value (e.g. 255 for 8-bit red).
    pub red_max: u16,

    /// Maximum valid green component value.
    pub green_max: u16,

    /// Maximum valid blue component value.
    pub blue_max: u16,

    /// Bit shift for the least significant bit of the red component.
    pub red_shift: u8,

    /// Bit shift for the least significant bit of the green component.
    pub green_shift: u8,

    /// Bit shift for the least significant bit of the blue component.
    pub blue_shift: u8,
}

impl PixelFormat {
    /// Standard 32-bit storage RGB format, 8 bits per channel, red at bit
    /// 16, platform byte order.
    pub const fn rgb888() -> Self {
        Self {
            bytes_per_pixel: 4,
            byte_order: ByteOrder::native(),
            indexed: false,
            red_max: 255,
            green_max: 255,
            blue_max: 255,
            red_shift: 16,
            green_shift: 8,
            blue_shift: 0,
        }
    }

    /// Packed 24-bit RGB format, 8 bits per channel, no padding byte.
    pub const fn rgb24() -> Self {
        Self {
            bytes_per_pixel: 3,
            ..Self::rgb888()
        }
    }

    /// 16-bit RGB565 format: 5 bits red, 6 bits green, 5 bits blue.
    pub const fn rgb565() -> Self {
        Self {
            bytes_per_pixel: 2,
            byte_order: ByteOrder::native(),
            indexed: false,
            red_max: 31,
            green_max: 63,
            blue_max: 31,
            red_shift: 11,
            green_shift: 5,
            blue_shift: 0,
        }
    }

    /// 8-bit palette format. Provided so hosts can describe surfaces the
    /// adapter will refuse to wrap.
    pub const fn indexed8() -> Self {
        Self {
            bytes_per_pixel: 1,
            byte_order: ByteOrder::native(),
            indexed: true,
            red_max: 255,
            green_max: 255,
            blue_max: 255,
            red_shift: 0,
            green_shift: 0,
            blue_shift: 0,
        }
    }

    /// Whether this format encodes channel values directly.
    pub const fn is_direct(&self) -> bool {
        !self.indexed && self.bytes_per_pixel != 1
    }

    /// Whether every channel max has the `2^n - 1` shape, with at most 8
    /// bits per channel, as the packing arithmetic relies on. Channels
    /// deeper than 8 bits cannot widen into an 8-bit sample.
    pub fn has_valid_channel_masks(&self) -> bool {
        fn ok(max: u16) -> bool {
            max != 0 && max <= 255 && max & (max + 1) == 0
        }
        ok(self.red_max) && ok(self.green_max) && ok(self.blue_max)
    }

    /// Extract the three color channels from a packed pixel value.
    pub fn unpack(&self, raw: u32) -> Color {
        Color([
            widen(raw, self.red_shift, self.red_max),
            widen(raw, self.green_shift, self.green_max),
            widen(raw, self.blue_shift, self.blue_max),
        ])
    }

    /// Compose the three color channels into a packed pixel value.
    pub fn pack(&self, color: Color) -> u32 {
        narrow(color.channel(0), self.red_shift, self.red_max)
            | narrow(color.channel(1), self.green_shift, self.green_max)
            | narrow(color.channel(2), self.blue_shift, self.blue_max)
    }
}

/// Bits lost when narrowing an 8-bit sample to a channel with this max.
fn loss(max: u16) -> u32 {
    8 - max.count_ones()
}

fn widen(raw: u32, shift: u8, max: u16) -> Sample {
    (((raw >> shift) & u32::from(max)) << loss(max)) as Sample
}

fn narrow(sample: Sample, shift: u8, max: u16) -> u32 {
    (u32::from(sample) >> loss(max)) << shift
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rgb888_pack_unpack() {
        let pf = PixelFormat::rgb888();
        let raw = pf.pack(Color::new(0x11, 0x22, 0x33));
        assert_eq!(raw, 0x0011_2233);
        assert_eq!(pf.unpack(raw), Color::new(0x11, 0x22, 0x33));
    }

    #[test]
    fn test_rgb24_matches_rgb888_layout() {
        let pf = PixelFormat::rgb24();
        assert_eq!(pf.bytes_per_pixel, 3);
        assert_eq!(pf.pack(Color::new(0xAA, 0xBB, 0xCC)), 0x00AA_BBCC);
    }

    #[test]
    fn test_rgb565_quantizes() {
        let pf = PixelFormat::rgb565();
        assert_eq!(pf.pack(Color::new(255, 255, 255)), 0xFFFF);
        assert_eq!(pf.pack(Color::new(0, 0, 0)), 0x0000);
        // 8-bit values narrow to the channel depth and widen back.
        assert_eq!(pf.unpack(pf.pack(Color::new(200, 100, 50))), Color::new(200, 100, 48));
    }

    #[test]
    fn test_round_trip_exact_for_representable_colors() {
        let pf = PixelFormat::rgb565();
        for r in (0..=248).step_by(8) {
            let color = Color::new(r, 0, 0);
            assert_eq!(pf.unpack(pf.pack(color)), color);
        }
    }

    #[test]
    fn test_channel_mask_validation() {
        assert!(PixelFormat::rgb888().has_valid_channel_masks());
        assert!(PixelFormat::rgb565().has_valid_channel_masks());

        let mut bad = PixelFormat::rgb888();
        bad.green_max = 250;
        assert!(!bad.has_valid_channel_masks());

        bad.green_max = 0;
        assert!(!bad.has_valid_channel_masks());
    }

    #[test]
    fn test_channels_deeper_than_8_bits_are_invalid() {
        // 1023 is 2^10 - 1: well-formed shape, but too wide to widen
        // into an 8-bit sample.
        let mut bad = PixelFormat::rgb888();
        bad.red_max = 1023;
        assert!(!bad.has_valid_channel_masks());
    }

    #[test]
    fn test_is_direct() {
        assert!(PixelFormat::rgb888().is_direct());
        assert!(PixelFormat::rgb565().is_direct());
        assert!(!PixelFormat::indexed8().is_direct());
    }
}
