#![forbid(unsafe_code)]

//! Lifecycle states for the managed overlay.
//!
//! State machine: `Idle → {Pip, Full} ⇄ … → Exiting → Idle`
//!
//! `Idle` is both the initial and the terminal state: no overlay is
//! registered. `Exiting` is entered the moment a dismiss is requested, so
//! queries issued while the removal animation runs reflect the terminal
//! intent rather than the stale visible state.

/// Presentation mode an overlay starts in, chosen by the overlay itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PipMode {
    /// Collapsed to a corner/edge anchor.
    Pip,
    /// Expanded to full size.
    Full,
}

/// Current lifecycle state of the controller.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum LifecycleState {
    /// No overlay registered.
    #[default]
    Idle,
    /// An overlay is registered and collapsed to an anchor.
    Pip,
    /// An overlay is registered and expanded.
    Full,
    /// A dismiss is in flight; the overlay is being removed.
    Exiting,
}

impl LifecycleState {
    /// An overlay is registered (anything but [`Idle`](Self::Idle)).
    #[inline]
    pub fn is_active(self) -> bool {
        !matches!(self, Self::Idle)
    }

    /// The overlay is visible in one of its two presentation modes.
    ///
    /// False during [`Exiting`](Self::Exiting): a dismissing overlay no
    /// longer accepts mode changes.
    #[inline]
    pub fn is_presented(self) -> bool {
        matches!(self, Self::Pip | Self::Full)
    }

    /// A dismissal is in flight.
    #[inline]
    pub fn is_exiting(self) -> bool {
        matches!(self, Self::Exiting)
    }
}

impl From<PipMode> for LifecycleState {
    fn from(mode: PipMode) -> Self {
        match mode {
            PipMode::Pip => Self::Pip,
            PipMode::Full => Self::Full,
        }
    }
}
