#![forbid(unsafe_code)]

//! Anchor positions and the relations between them.
//!
//! An overlay in PIP mode sits at one of six screen placements: the four
//! corners plus the vertical middle of either side. Drag-snap and rotation
//! handling only ever need a handful of relations over these values
//! (which placement mirrors which, which share a side), so everything here
//! is an exact table lookup over [`AnchorPosition`].
//!
//! # Invariants
//!
//! 1. `horizontal_opposite` is an involution: applying it twice returns the
//!    input, for all six positions.
//! 2. `vertical_opposite` is an involution on the four corners; the two
//!    middle positions are fixed points (they have no vertical opposite).
//! 3. `is_vertical_relative_to` is reflexive: every position is on the same
//!    side as itself.
//! 4. `from_parts(p.band(), p.side()) == p` for all positions.

// ---------------------------------------------------------------------------
// Side / Band decomposition
// ---------------------------------------------------------------------------

/// Horizontal half of the screen an anchor position occupies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Side {
    Left,
    Right,
}

impl Side {
    /// The opposite side.
    #[inline]
    pub const fn opposite(self) -> Self {
        match self {
            Self::Left => Self::Right,
            Self::Right => Self::Left,
        }
    }
}

/// Vertical band of the screen an anchor position occupies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Band {
    Top,
    Middle,
    Bottom,
}

impl Band {
    /// The vertical mirror of this band.
    ///
    /// `Middle` is its own mirror: a middle placement has no vertical
    /// opposite.
    #[inline]
    pub const fn mirrored(self) -> Self {
        match self {
            Self::Top => Self::Bottom,
            Self::Middle => Self::Middle,
            Self::Bottom => Self::Top,
        }
    }
}

// ---------------------------------------------------------------------------
// AnchorPosition
// ---------------------------------------------------------------------------

/// One of the six legal screen placements for a collapsed (PIP) overlay.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum AnchorPosition {
    TopLeft,
    MiddleLeft,
    BottomLeft,
    TopRight,
    MiddleRight,
    BottomRight,
}

impl AnchorPosition {
    /// All six positions, left side top-to-bottom then right side.
    pub const ALL: [AnchorPosition; 6] = [
        Self::TopLeft,
        Self::MiddleLeft,
        Self::BottomLeft,
        Self::TopRight,
        Self::MiddleRight,
        Self::BottomRight,
    ];

    /// Compose a position from its vertical band and horizontal side.
    #[inline]
    pub const fn from_parts(band: Band, side: Side) -> Self {
        match (band, side) {
            (Band::Top, Side::Left) => Self::TopLeft,
            (Band::Middle, Side::Left) => Self::MiddleLeft,
            (Band::Bottom, Side::Left) => Self::BottomLeft,
            (Band::Top, Side::Right) => Self::TopRight,
            (Band::Middle, Side::Right) => Self::MiddleRight,
            (Band::Bottom, Side::Right) => Self::BottomRight,
        }
    }

    /// Which horizontal half of the screen this position sits on.
    #[inline]
    pub const fn side(self) -> Side {
        match self {
            Self::TopLeft | Self::MiddleLeft | Self::BottomLeft => Side::Left,
            Self::TopRight | Self::MiddleRight | Self::BottomRight => Side::Right,
        }
    }

    /// Which vertical band this position sits in.
    #[inline]
    pub const fn band(self) -> Band {
        match self {
            Self::TopLeft | Self::TopRight => Band::Top,
            Self::MiddleLeft | Self::MiddleRight => Band::Middle,
            Self::BottomLeft | Self::BottomRight => Band::Bottom,
        }
    }

    /// The horizontal mirror of this position (same band, opposite side).
    ///
    /// Total: every position has exactly one mirror. Used to flip a
    /// placement when the overlay is dragged across the screen's vertical
    /// centerline.
    #[inline]
    pub const fn horizontal_opposite(self) -> Self {
        match self {
            Self::TopLeft => Self::TopRight,
            Self::TopRight => Self::TopLeft,
            Self::MiddleLeft => Self::MiddleRight,
            Self::MiddleRight => Self::MiddleLeft,
            Self::BottomLeft => Self::BottomRight,
            Self::BottomRight => Self::BottomLeft,
        }
    }

    /// The vertical mirror on the same side (top ↔ bottom).
    ///
    /// The two middle positions are returned unchanged: a middle placement
    /// has no vertical opposite. This is the documented behavior, not an
    /// error.
    #[inline]
    pub const fn vertical_opposite(self) -> Self {
        match self {
            Self::TopLeft => Self::BottomLeft,
            Self::BottomLeft => Self::TopLeft,
            Self::TopRight => Self::BottomRight,
            Self::BottomRight => Self::TopRight,
            Self::MiddleLeft => Self::MiddleLeft,
            Self::MiddleRight => Self::MiddleRight,
        }
    }

    /// True iff `other` is exactly the horizontal mirror of this position.
    #[inline]
    pub fn is_horizontal_relative_to(self, other: Self) -> bool {
        self.horizontal_opposite() == other
    }

    /// True iff `other` is on the same side of the screen as this position.
    ///
    /// This is a same-side test, not a strict-opposite test: it holds for
    /// `a.is_vertical_relative_to(a)`, middle positions included.
    #[inline]
    pub fn is_vertical_relative_to(self, other: Self) -> bool {
        self.side() == other.side()
    }

    /// True iff this is one of the two middle (edge, not corner) positions.
    #[inline]
    pub const fn is_middle(self) -> bool {
        matches!(self, Self::MiddleLeft | Self::MiddleRight)
    }
}

// ===========================================================================
// Tests
// ===========================================================================
