#![forbid(unsafe_code)]

//! Capability traits implemented by the host application.
//!
//! The controller never renders or animates anything itself. It talks to two
//! collaborators:
//!
//! - [`Overlay`]: the floating view's controller. Decides its own initial
//!   mode, performs its own fade-in/removal, and receives lifecycle
//!   notifications through the dispatcher hooks.
//! - [`HostSurface`]: the application shell. Supplies the current top-level
//!   surface the overlay's visual root attaches to.
//!
//! # Completion protocol
//!
//! `present` and `dismiss` only *start* an externally animated operation.
//! The UI layer must report the outcome back to the controller exactly once
//! per started operation — [`PipController::presentation_finished`] after
//! the fade-in, [`PipController::dismissal_finished`] after the removal —
//! even when the operation was requested with `animated == false`. The
//! controller measures no wall-clock time of its own.
//!
//! [`PipController::presentation_finished`]: crate::PipController::presentation_finished
//! [`PipController::dismissal_finished`]: crate::PipController::dismissal_finished

use crate::lifecycle::PipMode;
use pipui_core::AnchorPosition;

/// Opaque identifier for a top-level host surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SurfaceId(u64);

impl SurfaceId {
    /// Wrap a host-chosen surface identifier.
    #[inline]
    pub const fn new(raw: u64) -> Self {
        Self(raw)
    }

    /// The raw identifier.
    #[inline]
    pub const fn get(self) -> u64 {
        self.0
    }
}

/// Everything an overlay needs to begin presenting itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PresentContext {
    /// Surface the overlay's visual root was attached to.
    pub surface: SurfaceId,
    /// Anchor the overlay should initially sit at when collapsed.
    pub initial_position: AnchorPosition,
}

/// The floating view's controller.
///
/// At most one implementor is live at a time; the controller owns it for the
/// duration of its lifecycle and drops it after the dismissal completes.
pub trait Overlay {
    /// Presentation mode to start in. Read once, at show time.
    fn initial_mode(&self) -> PipMode;

    /// Begin presenting: fade the visual root in on the attached surface.
    ///
    /// Must eventually lead to exactly one `presentation_finished` call on
    /// the controller.
    fn present(&mut self, ctx: PresentContext);

    /// Begin removal, optionally skipping the animation.
    ///
    /// Must eventually lead to exactly one `dismissal_finished` call on the
    /// controller, even when `animated` is false.
    fn dismiss(&mut self, animated: bool);

    /// Lifecycle notification: the controller collapsed the overlay.
    fn entered_pip(&mut self) {}

    /// Lifecycle notification: the controller expanded the overlay.
    fn entered_full_screen(&mut self) {}
}

/// The application shell's surface lookup.
pub trait HostSurface {
    /// The current top-level surface, if any.
    ///
    /// Returning `None` makes `show` a silent no-op; the caller has no
    /// actionable recovery, so no error is reported.
    fn active_surface(&mut self) -> Option<SurfaceId>;

    /// Attach the overlay's visual root to the surface.
    fn attach(&mut self, surface: SurfaceId, overlay: &mut dyn Overlay);

    /// Detach the overlay's visual root after a completed dismissal.
    fn detach(&mut self, _overlay: &mut dyn Overlay) {}
}
