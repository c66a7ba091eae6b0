#![forbid(unsafe_code)]

//! Placement configuration: which anchors an overlay may snap to.
//!
//! The controller owns one [`PlacementConfig`]; the UI layer reads it when
//! first placing a freshly shown overlay (the default position) and when
//! choosing a snap target at the end of a drag or after a rotation.
//!
//! # Failure Modes
//!
//! Neither invariant from the data model is enforced here: an emptied
//! allowed set or a default outside the allowed set is a host configuration
//! error, and the config stays usable (`resolve` falls back to the
//! requested position when the allowed set is empty).

use crate::position::AnchorPosition;

/// Allowed anchor positions and the default placement for a new overlay.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PlacementConfig {
    /// Ordered set of positions the overlay may snap to.
    allowed: Vec<AnchorPosition>,
    /// Position used when an overlay is first shown.
    default_position: AnchorPosition,
}

impl Default for PlacementConfig {
    fn default() -> Self {
        Self {
            allowed: AnchorPosition::ALL.to_vec(),
            default_position: AnchorPosition::BottomRight,
        }
    }
}

impl PlacementConfig {
    /// All six positions allowed, default at the bottom-right corner.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the allowed positions (builder style).
    #[must_use]
    pub fn allowed(mut self, positions: impl Into<Vec<AnchorPosition>>) -> Self {
        self.allowed = positions.into();
        self
    }

    /// Set the default position (builder style).
    #[must_use]
    pub fn default_position(mut self, position: AnchorPosition) -> Self {
        self.default_position = position;
        self
    }

    /// Replace the allowed positions in place.
    pub fn set_allowed(&mut self, positions: impl Into<Vec<AnchorPosition>>) {
        self.allowed = positions.into();
    }

    /// Replace the default position in place.
    pub fn set_default_position(&mut self, position: AnchorPosition) {
        self.default_position = position;
    }

    /// The ordered allowed-position set.
    #[inline]
    pub fn allowed_positions(&self) -> &[AnchorPosition] {
        &self.allowed
    }

    /// The position a freshly shown overlay is placed at.
    #[inline]
    pub fn initial_position(&self) -> AnchorPosition {
        self.default_position
    }

    /// Whether the overlay may snap to `position`.
    #[inline]
    pub fn is_allowed(&self, position: AnchorPosition) -> bool {
        self.allowed.contains(&position)
    }

    /// Resolve a desired snap target against the allowed set.
    ///
    /// Returns `desired` when it is allowed. Otherwise tries, in order, the
    /// nearest relatives: the same-side vertical opposite, the horizontal
    /// mirror, the mirror's vertical opposite, and finally the first entry
    /// of the allowed set. With an empty allowed set the desired position is
    /// returned unchanged.
    pub fn resolve(&self, desired: AnchorPosition) -> AnchorPosition {
        if self.is_allowed(desired) {
            return desired;
        }
        let candidates = [
            desired.vertical_opposite(),
            desired.horizontal_opposite(),
            desired.horizontal_opposite().vertical_opposite(),
        ];
        for candidate in candidates {
            if self.is_allowed(candidate) {
                return candidate;
            }
        }
        self.allowed.first().copied().unwrap_or(desired)
    }
}

// ===========================================================================
// Tests
// ===========================================================================
