#![forbid(unsafe_code)]

//! The PIP lifecycle controller.
//!
//! [`PipController`] owns the [`LifecycleState`], the single live overlay
//! handle, and the placement configuration. Every transition goes through
//! it; the host UI layer requests state changes and reports the completion
//! of externally animated operations back through
//! [`presentation_finished`](PipController::presentation_finished) and
//! [`dismissal_finished`](PipController::dismissal_finished).
//!
//! # State Machine
//!
//! ```text
//! Idle --show--> (Pip or Full, per overlay.initial_mode)
//! Pip  --enter_full_screen_mode--> Full
//! Full --enter_pip_mode--> Pip
//! {Pip, Full} --dismiss--> Exiting --dismissal_finished--> Idle
//! ```
//!
//! `show` while an overlay is already live is not additive: the current
//! overlay is dismissed without animation and the new show is queued to run
//! once the dismissal finishes. The queued show's completion is carried
//! through the sequence and fires after the replacement overlay's
//! presentation.
//!
//! # Invariants
//!
//! 1. An overlay handle exists iff the state is not `Idle`, before and
//!    after every public operation.
//! 2. At most one overlay handle is live at any instant; a replacement
//!    never overlaps the overlay it replaces.
//! 3. State transitions are applied synchronously *before* any queued
//!    caller completion runs, so a completion observing the controller sees
//!    the post-transition state.
//!
//! # Failure Modes
//!
//! Every invalid request is a silent no-op rather than an error: a PIP
//! request must never take the host application down. The no-op branches
//! emit `tracing` events under the `pipui.lifecycle` target so hosts can
//! still diagnose dropped requests.

use std::fmt;
use std::mem;

use crate::lifecycle::LifecycleState;
use crate::overlay::{HostSurface, Overlay, PresentContext};
use pipui_core::PlacementConfig;

/// Caller-supplied completion callback, fired at most once.
pub type Completion = Box<dyn FnOnce()>;

/// A `show` request queued behind an in-flight dismissal.
struct PendingShow {
    overlay: Box<dyn Overlay>,
    completion: Option<Completion>,
}

/// Lifecycle controller for a single floating overlay.
///
/// One instance per application shell; inject it wherever lifecycle
/// requests originate. Single-threaded by design: all methods take
/// `&mut self` and no internal locking exists.
pub struct PipController {
    state: LifecycleState,
    overlay: Option<Box<dyn Overlay>>,
    host: Box<dyn HostSurface>,
    placement: PlacementConfig,
    /// A presentation (fade-in) is in flight.
    presenting: bool,
    present_completions: Vec<Completion>,
    dismiss_completions: Vec<Completion>,
    pending_show: Option<PendingShow>,
}

impl PipController {
    /// Create an idle controller backed by the given host shell.
    pub fn new(host: Box<dyn HostSurface>) -> Self {
        Self::with_placement(host, PlacementConfig::default())
    }

    /// Create an idle controller with a non-default placement configuration.
    pub fn with_placement(host: Box<dyn HostSurface>, placement: PlacementConfig) -> Self {
        Self {
            state: LifecycleState::Idle,
            overlay: None,
            host,
            placement,
            presenting: false,
            present_completions: Vec::new(),
            dismiss_completions: Vec::new(),
            pending_show: None,
        }
    }

    // -----------------------------------------------------------------
    // Queries
    // -----------------------------------------------------------------

    /// Current lifecycle state.
    #[inline]
    pub fn state(&self) -> LifecycleState {
        self.state
    }

    /// True iff an overlay is registered (state ≠ `Idle`).
    #[inline]
    pub fn is_active(&self) -> bool {
        self.state.is_active()
    }

    /// True iff the overlay is currently collapsed to an anchor.
    #[inline]
    pub fn is_pip(&self) -> bool {
        matches!(self.state, LifecycleState::Pip)
    }

    /// The live overlay handle, if any.
    #[inline]
    pub fn visible_overlay(&self) -> Option<&dyn Overlay> {
        self.overlay.as_deref()
    }

    /// Mutable access to the live overlay handle, if any.
    #[inline]
    pub fn visible_overlay_mut(&mut self) -> Option<&mut (dyn Overlay + 'static)> {
        self.overlay.as_deref_mut()
    }

    /// Placement configuration read by the UI layer for initial placement
    /// and drag-snap targets.
    #[inline]
    pub fn placement(&self) -> &PlacementConfig {
        &self.placement
    }

    /// Mutable access to the placement configuration.
    #[inline]
    pub fn placement_mut(&mut self) -> &mut PlacementConfig {
        &mut self.placement
    }

    // -----------------------------------------------------------------
    // Lifecycle operations
    // -----------------------------------------------------------------

    /// Show an overlay.
    ///
    /// - No host surface available: silent no-op; `on_complete` is dropped
    ///   and a live overlay, if any, is left untouched.
    /// - An overlay is already live: the current overlay is dismissed
    ///   without animation and this show (with its completion) runs after
    ///   the dismissal finishes. A show already queued this way is
    ///   superseded, last writer wins.
    /// - Otherwise the overlay becomes the live handle, the state moves to
    ///   `Pip` or `Full` per [`Overlay::initial_mode`], the visual root is
    ///   attached to the host surface, and the overlay starts its fade-in.
    ///   `on_complete` fires from [`presentation_finished`](Self::presentation_finished).
    pub fn show(&mut self, overlay: Box<dyn Overlay>, on_complete: Option<Completion>) {
        // Surface precondition comes first: without a surface the call is a
        // pure no-op, even while an overlay is live.
        let Some(surface) = self.host.active_surface() else {
            tracing::debug!(target: "pipui.lifecycle", "show ignored: no host surface available");
            return;
        };

        if self.state.is_active() {
            if self.pending_show.is_some() {
                tracing::debug!(target: "pipui.lifecycle", "pending show superseded by newer show request");
            }
            self.pending_show = Some(PendingShow {
                overlay,
                completion: on_complete,
            });
            if !self.state.is_exiting() {
                self.dismiss(false, None);
            }
            return;
        }

        let mut overlay = overlay;
        let mode = overlay.initial_mode();
        self.transition(LifecycleState::from(mode));
        self.host.attach(surface, &mut *overlay);
        self.overlay = Some(overlay);

        self.presenting = true;
        if let Some(done) = on_complete {
            self.present_completions.push(done);
        }

        let ctx = PresentContext {
            surface,
            initial_position: self.placement.initial_position(),
        };
        tracing::debug!(target: "pipui.lifecycle", mode = ?mode, position = ?ctx.initial_position, "overlay presenting");
        if let Some(overlay) = self.overlay.as_mut() {
            overlay.present(ctx);
        }
    }

    /// Dismiss the live overlay.
    ///
    /// The state moves to `Exiting` immediately; the overlay performs its
    /// own removal and the UI layer reports
    /// [`dismissal_finished`](Self::dismissal_finished) when it is done.
    ///
    /// With no live overlay this is a trivially successful no-op:
    /// `on_complete` still fires (immediately) and the state stays `Idle`.
    /// During an in-flight dismissal the completion joins the existing one;
    /// the overlay's dismiss capability is not invoked a second time.
    pub fn dismiss(&mut self, animated: bool, on_complete: Option<Completion>) {
        match self.state {
            LifecycleState::Idle => {
                tracing::debug!(target: "pipui.lifecycle", "dismiss with no active overlay");
                if let Some(done) = on_complete {
                    done();
                }
            }
            LifecycleState::Exiting => {
                tracing::debug!(target: "pipui.lifecycle", "dismiss joined in-flight dismissal");
                if let Some(done) = on_complete {
                    self.dismiss_completions.push(done);
                }
            }
            LifecycleState::Pip | LifecycleState::Full => {
                self.transition(LifecycleState::Exiting);
                if let Some(done) = on_complete {
                    self.dismiss_completions.push(done);
                }
                if let Some(overlay) = self.overlay.as_mut() {
                    overlay.dismiss(animated);
                }
            }
        }
    }

    /// Collapse the overlay to its anchor.
    ///
    /// Sets the state to `Pip` and notifies the overlay through
    /// [`Overlay::entered_pip`]. No-op unless an overlay is presented
    /// (a dismissing overlay no longer accepts mode changes).
    pub fn enter_pip_mode(&mut self) {
        if !self.state.is_presented() {
            tracing::debug!(target: "pipui.lifecycle", state = ?self.state, "enter_pip_mode ignored");
            return;
        }
        self.transition(LifecycleState::Pip);
        if let Some(overlay) = self.overlay.as_mut() {
            overlay.entered_pip();
        }
    }

    /// Expand the overlay to full mode.
    ///
    /// Symmetric to [`enter_pip_mode`](Self::enter_pip_mode): sets `Full`
    /// and notifies [`Overlay::entered_full_screen`].
    pub fn enter_full_screen_mode(&mut self) {
        if !self.state.is_presented() {
            tracing::debug!(target: "pipui.lifecycle", state = ?self.state, "enter_full_screen_mode ignored");
            return;
        }
        self.transition(LifecycleState::Full);
        if let Some(overlay) = self.overlay.as_mut() {
            overlay.entered_full_screen();
        }
    }

    // -----------------------------------------------------------------
    // Completion notifications (UI layer → controller)
    // -----------------------------------------------------------------

    /// The overlay's fade-in finished.
    ///
    /// Fires the completions queued by the `show` that started the
    /// presentation. No-op when no presentation is in flight.
    pub fn presentation_finished(&mut self) {
        if !self.presenting {
            tracing::debug!(target: "pipui.lifecycle", "presentation_finished with no presentation in flight");
            return;
        }
        self.presenting = false;
        for done in mem::take(&mut self.present_completions) {
            done();
        }
    }

    /// The overlay's removal finished.
    ///
    /// Resets the state to `Idle`, detaches and drops the overlay handle,
    /// fires the queued dismissal completions (after the reset, so they
    /// observe `Idle`), and finally performs a pending show if one was
    /// queued behind the dismissal. No-op unless a dismissal is in flight.
    pub fn dismissal_finished(&mut self) {
        if !self.state.is_exiting() {
            tracing::debug!(target: "pipui.lifecycle", state = ?self.state, "dismissal_finished with no dismissal in flight");
            return;
        }
        self.reset();
        for done in mem::take(&mut self.dismiss_completions) {
            done();
        }
        if let Some(pending) = self.pending_show.take() {
            self.show(pending.overlay, pending.completion);
        }
    }

    // -----------------------------------------------------------------
    // Internal
    // -----------------------------------------------------------------

    fn transition(&mut self, next: LifecycleState) {
        let from = self.state;
        self.state = next;
        tracing::debug!(target: "pipui.lifecycle", ?from, to = ?next, "lifecycle transition");
    }

    fn reset(&mut self) {
        self.transition(LifecycleState::Idle);
        if let Some(mut overlay) = self.overlay.take() {
            self.host.detach(&mut *overlay);
        }
        if self.presenting {
            // The dismissed overlay's fade-in never completed; its show
            // completions can no longer fire.
            self.presenting = false;
            let dropped = self.present_completions.len();
            self.present_completions.clear();
            tracing::debug!(target: "pipui.lifecycle", dropped, "presentation cancelled by dismissal");
        }
    }
}

impl fmt::Debug for PipController {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PipController")
            .field("state", &self.state)
            .field("has_overlay", &self.overlay.is_some())
            .field("presenting", &self.presenting)
            .field("pending_show", &self.pending_show.is_some())
            .field("placement", &self.placement)
            .finish_non_exhaustive()
    }
}

// ===========================================================================
// Tests
// ===========================================================================
