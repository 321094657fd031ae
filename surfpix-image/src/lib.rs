//! Surface-backed image adapter.
//!
//! Adapts a generic pixel-access contract ([`PixelAccess`]) onto a live,
//! externally owned surface whose byte layout is only known at runtime.
//! The adapter handles format-agnostic pixel decode/encode, transparent
//! lock/unlock bracketing, and dirty-rectangle tracking so callers can
//! flush only the changed region to the display.

pub mod adapter;
pub mod errors;
pub mod image;
pub mod region;

mod lock;

pub use adapter::SurfaceImage;
pub use errors::ImageError;
pub use image::PixelAccess;
pub use region::DirtyRegion;
