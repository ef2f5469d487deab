//! Geometry primitives shared by the placement engine and the controller
//!
//! All coordinates are viewport-relative with the origin at the top-left.

use serde::{Deserialize, Serialize};

/// Position and extent of an anchor or panel in viewport coordinates
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Rect {
    pub const fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Right edge (x + width)
    pub fn right(&self) -> f32 {
        self.x + self.width
    }

    /// Bottom edge (y + height)
    pub fn bottom(&self) -> f32 {
        self.y + self.height
    }

    /// Horizontal midpoint
    pub fn center_x(&self) -> f32 {
        self.x + self.width / 2.0
    }

    /// Check whether a point falls inside (right/bottom edges exclusive)
    pub fn contains(&self, x: f32, y: f32) -> bool {
        x >= self.x && x < self.right() && y >= self.y && y < self.bottom()
    }
}

/// Drawable area, excluding platform chrome
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct ViewportSize {
    pub width: f32,
    pub height: f32,
}

impl ViewportSize {
    pub const fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    /// Remove platform-reserved rows (status bar etc.) from the usable height
    pub fn with_chrome_inset(self, inset: f32) -> Self {
        Self {
            width: self.width,
            height: (self.height - inset.max(0.0)).max(0.0),
        }
    }
}

/// Minimum clearance from each viewport edge
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Margin {
    pub top: f32,
    pub right: f32,
    pub bottom: f32,
    pub left: f32,
}

impl Margin {
    pub const fn new(top: f32, right: f32, bottom: f32, left: f32) -> Self {
        Self {
            top,
            right,
            bottom,
            left,
        }
    }

    /// Same clearance on all four sides
    pub const fn uniform(value: f32) -> Self {
        Self::new(value, value, value, value)
    }

    /// Left/right clearance only
    pub const fn horizontal(left: f32, right: f32) -> Self {
        Self::new(0.0, right, 0.0, left)
    }

    /// Copy with every side floored at zero
    pub fn sanitized(self) -> Self {
        Self {
            top: self.top.max(0.0),
            right: self.right.max(0.0),
            bottom: self.bottom.max(0.0),
            left: self.left.max(0.0),
        }
    }

    /// True if any side is negative
    pub fn has_negative(&self) -> bool {
        self.top < 0.0 || self.right < 0.0 || self.bottom < 0.0 || self.left < 0.0
    }
}

/// Preferred panel size. A zero width means "fill the available width".
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DesiredSize {
    pub width: f32,
    pub height: f32,
}

impl DesiredSize {
    pub const fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }
}

/// Item list layout axis inside the panel
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Orientation {
    #[default]
    Horizontal,
    Vertical,
}

/// Which way the arrow points
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ArrowDirection {
    /// Arrow points up, panel sits below the anchor
    Up,
    /// Arrow points down, panel sits above the anchor
    Down,
}

/// Triangle edge of the arrow that carries the panel colour
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TintedEdge {
    Top,
    Bottom,
}

impl ArrowDirection {
    /// The arrow is drawn as a bordered zero-size box; the edge facing the
    /// panel is painted with the panel background, the others stay clear.
    pub fn tinted_edge(&self) -> TintedEdge {
        match self {
            ArrowDirection::Up => TintedEdge::Bottom,
            ArrowDirection::Down => TintedEdge::Top,
        }
    }
}
