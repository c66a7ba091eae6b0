#![forbid(unsafe_code)]

//! Lifecycle controller for a single picture-in-picture overlay.
//!
//! # Role in PipUI
//! `pipui` owns the overlay's lifecycle state machine and mediates every
//! transition (`show`, `dismiss`, enter PIP, enter full screen). Rendering,
//! animation timing, and gesture handling live in the host application; they
//! plug in through the [`Overlay`] and [`HostSurface`] capability traits and
//! report animation completion back through
//! [`PipController::presentation_finished`] and
//! [`PipController::dismissal_finished`].
//!
//! # How it fits in the system
//! The host shell constructs one [`PipController`] per application (an
//! explicit context object, not a global) and injects it wherever lifecycle
//! requests originate. The UI layer consults the re-exported
//! [`PlacementConfig`] for initial placement and drag-snap targets.
//!
//! # Example
//!
//! ```ignore
//! use pipui::{PipController, PipMode};
//!
//! let mut controller = PipController::new(Box::new(shell_surface));
//! controller.show(Box::new(video_overlay), Some(Box::new(|| {
//!     // fade-in finished
//! })));
//! assert!(controller.is_active());
//! ```

pub mod controller;
pub mod lifecycle;
pub mod overlay;

pub use controller::{Completion, PipController};
pub use lifecycle::{LifecycleState, PipMode};
pub use overlay::{HostSurface, Overlay, PresentContext, SurfaceId};
pub use pipui_core::{AnchorPosition, Band, PlacementConfig, Side};
