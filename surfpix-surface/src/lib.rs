//! Surface abstraction and pixel codec.
//!
//! This crate defines the contract for an externally owned pixel surface
//! ([`Surface`]), the [`PixelFormat`] descriptor that tells us how its raw
//! bytes encode color, and the codec that translates between raw pixels and
//! canonical 3-channel [`Color`] values. [`ManagedSurface`] is an owned,
//! in-memory implementation of the surface contract.

pub mod codec;
pub mod color;
pub mod format;
pub mod managed;
pub mod surface;

pub use codec::{read_span, write_span, PixelCodec, PixelWidth};
pub use color::{float_to_sample, sample_to_float, Color, FColor, FSample, Sample};
pub use format::{ByteOrder, PixelFormat};
pub use managed::ManagedSurface;
pub use surface::Surface;
