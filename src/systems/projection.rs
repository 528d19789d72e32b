//! World-to-screen projection through the viewport pair.
//!
//! Pure functions only, no backend calls: given a world-space bound, a
//! bitmap's pixel dimensions, and the layer/screen viewports, compute the
//! visible sub-rectangle of the bitmap and where it lands in device
//! pixels. A bound that misses the layer viewport projects to nothing and
//! the caller skips the draw.

use raylib::prelude::{Rectangle, Vector2};
use thiserror::Error;

use crate::resources::layerviewport::LayerViewport;
use crate::resources::screenviewport::ScreenViewport;

/// A viewport whose dimensions cannot produce a sound destination
/// rectangle. Onscreen skips are `Ok(None)`; this is a caller bug.
#[derive(Debug, Error, Clone, Copy, PartialEq)]
pub enum ProjectionError {
    #[error("layer viewport has non-positive size {width}x{height}")]
    MalformedLayerViewport { width: f32, height: f32 },
    #[error("screen viewport has non-positive size {width}x{height}")]
    MalformedScreenViewport { width: f32, height: f32 },
}

/// Axis-aligned world-space bound: center plus half-extents.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WorldBound {
    pub center: Vector2,
    pub half_width: f32,
    pub half_height: f32,
}

impl WorldBound {
    pub fn new(center: Vector2, half_width: f32, half_height: f32) -> Self {
        Self {
            center,
            half_width,
            half_height,
        }
    }

    pub fn left(&self) -> f32 {
        self.center.x - self.half_width
    }

    pub fn right(&self) -> f32 {
        self.center.x + self.half_width
    }

    pub fn top(&self) -> f32 {
        self.center.y - self.half_height
    }

    pub fn bottom(&self) -> f32 {
        self.center.y + self.half_height
    }
}

/// Reject viewports with zero or negative dimensions.
pub fn validate_viewports(
    layer_vp: &LayerViewport,
    screen_vp: &ScreenViewport,
) -> Result<(), ProjectionError> {
    if layer_vp.width <= 0.0 || layer_vp.height <= 0.0 {
        return Err(ProjectionError::MalformedLayerViewport {
            width: layer_vp.width,
            height: layer_vp.height,
        });
    }
    if screen_vp.width <= 0.0 || screen_vp.height <= 0.0 {
        return Err(ProjectionError::MalformedScreenViewport {
            width: screen_vp.width,
            height: screen_vp.height,
        });
    }
    Ok(())
}

/// Map `bound` through the viewport pair.
///
/// Returns the source rectangle in bitmap pixels (the full bitmap when the
/// bound is entirely visible) and the destination rectangle in device
/// pixels. `Ok(None)` when the bound and the layer viewport do not
/// overlap; a zero-area overlap counts as no overlap.
pub fn project(
    bound: &WorldBound,
    bitmap_size: Vector2,
    layer_vp: &LayerViewport,
    screen_vp: &ScreenViewport,
) -> Result<Option<(Rectangle, Rectangle)>, ProjectionError> {
    validate_viewports(layer_vp, screen_vp)?;

    // A degenerate bound covers no pixels.
    if bound.half_width <= 0.0 || bound.half_height <= 0.0 {
        return Ok(None);
    }

    let x0 = bound.left().max(layer_vp.left());
    let x1 = bound.right().min(layer_vp.right());
    let y0 = bound.top().max(layer_vp.top());
    let y1 = bound.bottom().min(layer_vp.bottom());
    if x1 <= x0 || y1 <= y0 {
        return Ok(None);
    }

    // The visible fraction of the bound selects the bitmap sub-rectangle.
    let bound_w = bound.half_width * 2.0;
    let bound_h = bound.half_height * 2.0;
    let src = Rectangle {
        x: (x0 - bound.left()) / bound_w * bitmap_size.x,
        y: (y0 - bound.top()) / bound_h * bitmap_size.y,
        width: (x1 - x0) / bound_w * bitmap_size.x,
        height: (y1 - y0) / bound_h * bitmap_size.y,
    };

    // Pixels per world unit, fixed by the viewport pair.
    let px = screen_vp.width / layer_vp.width;
    let py = screen_vp.height / layer_vp.height;
    let dest = Rectangle {
        x: screen_vp.left + (x0 - layer_vp.left()) * px,
        y: screen_vp.top + (y0 - layer_vp.top()) * py,
        width: (x1 - x0) * px,
        height: (y1 - y0) * py,
    };

    Ok(Some((src, dest)))
}
