//! Presentation data module
//!
//! Turns a simulation state into drawable, serializable frame data. No
//! graphics API lives here; a platform front end draws what `FrameSnapshot`
//! describes.

pub mod frame;
pub mod overlay;
pub mod palette;

pub use frame::FrameSnapshot;
pub use overlay::{AimGuide, Rect, WarningOverlay};
