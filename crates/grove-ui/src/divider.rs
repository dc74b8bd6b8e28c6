//! Row divider decoration.
//!
//! Pure rendering geometry: given a divider style with an intrinsic
//! thickness, computes the pixel rectangle trailing every laid-out row -
//! below it for vertical lists, to the right of it for horizontal ones -
//! and the per-row space the host must reserve so rows don't paint over
//! the divider. The host draws the returned rects itself.

use grove_ui_graphics::{Color, EdgeInsets, Rect};
use smallvec::SmallVec;
use thiserror::Error;

/// Divider rects kept inline for typical visible-row counts.
const INLINE_ROWS: usize = 8;

/// Scroll direction of the list the decoration is attached to.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Orientation {
    /// Rows stack top to bottom; dividers run below each row.
    Vertical,
    /// Rows run left to right; dividers run to the right of each row.
    Horizontal,
}

/// Visual parameters for the divider line.
///
/// Builder-style setters; the default is a hairline at 12% black.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DividerStyle {
    pub thickness: f32,
    pub color: Color,
}

impl Default for DividerStyle {
    fn default() -> Self {
        Self {
            thickness: 1.0,
            color: Color::BLACK.with_alpha(0.12),
        }
    }
}

impl DividerStyle {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn thickness(mut self, thickness: f32) -> Self {
        self.thickness = thickness;
        self
    }

    pub fn color(mut self, color: Color) -> Self {
        self.color = color;
        self
    }
}

/// Rejected divider configuration.
#[derive(Clone, Copy, Debug, PartialEq, Error)]
pub enum DividerError {
    /// Thickness must be strictly positive and finite.
    #[error("divider thickness must be positive and finite, got {0}")]
    InvalidThickness(f32),
}

/// Bounds of one laid-out row: its rect plus the outer margins the
/// host's layout assigned to it. Dividers sit past the margin.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct RowBounds {
    pub rect: Rect,
    pub margins: EdgeInsets,
}

impl RowBounds {
    pub fn new(rect: Rect) -> Self {
        Self {
            rect,
            margins: EdgeInsets::default(),
        }
    }

    pub fn with_margins(rect: Rect, margins: EdgeInsets) -> Self {
        Self { rect, margins }
    }
}

/// Computes divider geometry for a list host.
///
/// Validated at construction; a built decoration always produces
/// well-formed rects.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DividerDecoration {
    style: DividerStyle,
    orientation: Orientation,
}

impl DividerDecoration {
    /// Fails with [`DividerError::InvalidThickness`] when the style's
    /// thickness is zero, negative, or non-finite.
    pub fn new(style: DividerStyle, orientation: Orientation) -> Result<Self, DividerError> {
        if !style.thickness.is_finite() || style.thickness <= 0.0 {
            return Err(DividerError::InvalidThickness(style.thickness));
        }
        Ok(Self { style, orientation })
    }

    pub fn style(&self) -> DividerStyle {
        self.style
    }

    pub fn orientation(&self) -> Orientation {
        self.orientation
    }

    /// Space the host must reserve on each row for its divider: the
    /// bottom edge for vertical lists, the right edge for horizontal
    /// ones.
    pub fn item_offsets(&self) -> EdgeInsets {
        match self.orientation {
            Orientation::Vertical => {
                EdgeInsets::from_components(0.0, 0.0, 0.0, self.style.thickness)
            }
            Orientation::Horizontal => {
                EdgeInsets::from_components(0.0, 0.0, self.style.thickness, 0.0)
            }
        }
    }

    /// One divider rect per laid-out row.
    ///
    /// Each rect starts just past the row's trailing edge plus its
    /// trailing margin and spans the viewport's padded cross-axis
    /// extent. A viewport whose padding leaves no cross-axis extent
    /// yields no rects.
    pub fn layout(
        &self,
        viewport: Rect,
        padding: EdgeInsets,
        rows: &[RowBounds],
    ) -> SmallVec<[Rect; INLINE_ROWS]> {
        let mut dividers = SmallVec::new();
        match self.orientation {
            Orientation::Vertical => {
                let left = viewport.x + padding.left;
                let right = viewport.right() - padding.right;
                if right <= left {
                    log::warn!("divider layout: padding leaves no horizontal extent");
                    return dividers;
                }
                for row in rows {
                    let top = row.rect.bottom() + row.margins.bottom;
                    dividers.push(Rect::new(left, top, right - left, self.style.thickness));
                }
            }
            Orientation::Horizontal => {
                let top = viewport.y + padding.top;
                let bottom = viewport.bottom() - padding.bottom;
                if bottom <= top {
                    log::warn!("divider layout: padding leaves no vertical extent");
                    return dividers;
                }
                for row in rows {
                    let left = row.rect.right() + row.margins.right;
                    dividers.push(Rect::new(left, top, self.style.thickness, bottom - top));
                }
            }
        }
        dividers
    }
}
