//! Phase-space to pixel mapping.

use pf_core::{BoundingBox, Point, Real};
use pf_models::Model;
use serde::{Deserialize, Serialize};

use crate::error::{RenderError, RenderResult};

/// Canvas dimensions in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CanvasSize {
    pub width: Real,
    pub height: Real,
}

impl Default for CanvasSize {
    fn default() -> Self {
        Self {
            width: 800.0,
            height: 600.0,
        }
    }
}

impl CanvasSize {
    pub fn new(width: Real, height: Real) -> RenderResult<Self> {
        let size = Self { width, height };
        size.validate()?;
        Ok(size)
    }

    pub fn validate(&self) -> RenderResult<()> {
        let ok = |v: Real| v.is_finite() && v > 0.0;
        if ok(self.width) && ok(self.height) {
            Ok(())
        } else {
            Err(RenderError::InvalidCanvas {
                width: self.width,
                height: self.height,
            })
        }
    }
}

/// Per-axis affine map from a display box onto a canvas.
///
/// Pixel rows grow downward, so the y axis is flipped: `y_min` lands on the
/// bottom edge and `y_max` on the top edge.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CoordinateMapper {
    bbox: BoundingBox,
    canvas: CanvasSize,
    scale_x: Real,
    scale_y: Real,
}

impl CoordinateMapper {
    pub fn new(bbox: BoundingBox, canvas: CanvasSize) -> RenderResult<Self> {
        canvas.validate()?;
        Ok(Self {
            bbox,
            canvas,
            scale_x: canvas.width / bbox.width(),
            scale_y: canvas.height / bbox.height(),
        })
    }

    pub fn bounding_box(&self) -> BoundingBox {
        self.bbox
    }

    pub fn canvas(&self) -> CanvasSize {
        self.canvas
    }

    pub fn to_pixel(&self, p: Point) -> (Real, Real) {
        let px = (p.x - self.bbox.x_min()) * self.scale_x;
        let py = self.canvas.height - (p.y - self.bbox.y_min()) * self.scale_y;
        (px, py)
    }

    /// Inverse of `to_pixel`.
    pub fn to_phase(&self, px: Real, py: Real) -> Point {
        Point::new(
            self.bbox.x_min() + px / self.scale_x,
            self.bbox.y_min() + (self.canvas.height - py) / self.scale_y,
        )
    }
}

/// One-shot mapping through `model`'s display box.
pub fn to_pixel(
    model: &Model,
    x: Real,
    y: Real,
    width: Real,
    height: Real,
) -> RenderResult<(Real, Real)> {
    let mapper = CoordinateMapper::new(model.display_box(), CanvasSize::new(width, height)?)?;
    Ok(mapper.to_pixel(Point::new(x, y)))
}
