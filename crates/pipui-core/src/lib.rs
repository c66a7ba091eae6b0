#![forbid(unsafe_code)]

//! Core position model for picture-in-picture overlays.
//!
//! # Role in PipUI
//! `pipui-core` is the pure layer: the six legal anchor positions, the
//! relational geometry between them, and the placement configuration the UI
//! layer consults when snapping a dragged overlay. It holds no lifecycle
//! state and performs no I/O; the controller crate (`pipui`) builds on top.
//!
//! # Primary responsibilities
//! - **AnchorPosition**: the corner/edge placements and their mirror
//!   relations (horizontal/vertical opposite, same-side, middle checks).
//! - **PlacementConfig**: the allowed-position set, the default position for
//!   a freshly shown overlay, and drag-snap target resolution.
//!
//! All relation functions are total and side-effect free, implemented as
//! exact table lookups.

pub mod placement;
pub mod position;

pub use placement::PlacementConfig;
pub use position::{AnchorPosition, Band, Side};
