//! Canonical color values and sample conversions.
//!
//! Every pixel decodes to exactly three 8-bit channels regardless of the
//! surface's storage format. Floating access uses 0.0-1.0 samples; the
//! float-to-int conversion keeps the additive bias of the original
//! implementation (`trunc(f * 255 + 0.01)`) so quantization matches.

/// An 8-bit color sample.
pub type Sample = u8;

/// A normalized floating color sample in 0.0-1.0.
pub type FSample = f64;

/// Convert an 8-bit sample to a normalized float sample.
pub fn sample_to_float(sample: Sample) -> FSample {
    f64::from(sample) / 255.0
}

/// Convert a normalized float sample to an 8-bit sample.
///
/// The small additive bias means the conversion is exact for the 256
/// canonical values: `float_to_sample(sample_to_float(s)) == s`.
pub fn float_to_sample(sample: FSample) -> Sample {
    (sample * 255.0 + 0.01) as Sample
}

/// A 3-channel integer color (red, green, blue), 0-255 per channel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Color(pub [Sample; 3]);

/// A 3-channel floating color, 0.0-1.0 per channel.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct FColor(pub [FSample; 3]);

impl Color {
    /// Number of channels in a canonical color.
    pub const CHANNELS: usize = 3;

    pub const fn new(r: Sample, g: Sample, b: Sample) -> Self {
        Self([r, g, b])
    }

    /// Get a single channel by index (0 = red, 1 = green, 2 = blue).
    pub const fn channel(&self, index: usize) -> Sample {
        self.0[index]
    }

    /// Convert to a normalized floating color.
    pub fn to_float(self) -> FColor {
        FColor([
            sample_to_float(self.0[0]),
            sample_to_float(self.0[1]),
            sample_to_float(self.0[2]),
        ])
    }
}

impl FColor {
    pub const fn new(r: FSample, g: FSample, b: FSample) -> Self {
        Self([r, g, b])
    }

    /// Get a single channel by index (0 = red, 1 = green, 2 = blue).
    pub const fn channel(&self, index: usize) -> FSample {
        self.0[index]
    }

    /// Convert to an 8-bit integer color.
    pub fn to_color(self) -> Color {
        Color([
            float_to_sample(self.0[0]),
            float_to_sample(self.0[1]),
            float_to_sample(self.0[2]),
        ])
    }
}
