//! Offset transform and draw-op composition for layer stacks.
//!
//! This is the middle of the pipeline: take an entity's pose and one of
//! its layers, place the layer's anchor in world space (rotated with the
//! entity), and run the result through
//! [`project`](crate::systems::projection::project). The output is a
//! backend-agnostic [`DrawOp`] the render pass submits verbatim.

use raylib::prelude::{Rectangle, Vector2};

use crate::components::halfextent::HalfExtent;
use crate::components::layerstack::{LayerStack, SpriteLayer};
use crate::components::rotation::Rotation;
use crate::resources::layerviewport::LayerViewport;
use crate::resources::screenviewport::ScreenViewport;
use crate::systems::projection::{ProjectionError, WorldBound, project};

/// One backend submission: which texture, which sub-rectangle of it, where
/// on screen, and how to rotate it.
///
/// `dest.x`/`dest.y` is where `origin` lands, matching raylib's
/// `draw_texture_pro` convention; `origin` is the center of the visible
/// sub-image so rotation pivots there. Per-axis scaling is implied by the
/// `src`/`dest` pair and need not be uniform.
#[derive(Debug, Clone)]
pub struct DrawOp {
    pub tex_key: String,
    pub src: Rectangle,
    pub dest: Rectangle,
    pub origin: Vector2,
    pub rotation: f32,
}

/// World-space bound of one layer of an entity.
///
/// The layer's anchor is the offset (in half-extent fractions) rotated
/// with the entity's orientation, so the distance from the entity position
/// to the anchor does not change as the entity turns. The bound stays
/// axis-aligned; only the anchor moves.
pub fn layer_world_bound(
    pos: Vector2,
    rotation: &Rotation,
    extent: &HalfExtent,
    layer: &SpriteLayer,
) -> WorldBound {
    let diff = Vector2::new(extent.w * layer.offset.x, extent.h * layer.offset.y);
    let (sin, cos) = rotation.radians().sin_cos();
    let anchor = Vector2::new(
        pos.x + cos * diff.x - sin * diff.y,
        pos.y + sin * diff.x + cos * diff.y,
    );
    WorldBound::new(anchor, extent.w * layer.scale.x, extent.h * layer.scale.y)
}

/// Compose one layer into a draw op, or `Ok(None)` when the layer falls
/// outside the layer viewport and the draw must be skipped.
pub fn compose_layer(
    pos: Vector2,
    rotation: &Rotation,
    extent: &HalfExtent,
    layer: &SpriteLayer,
    bitmap_size: Vector2,
    layer_vp: &LayerViewport,
    screen_vp: &ScreenViewport,
) -> Result<Option<DrawOp>, ProjectionError> {
    let bound = layer_world_bound(pos, rotation, extent, layer);
    let Some((src, dest)) = project(&bound, bitmap_size, layer_vp, screen_vp)? else {
        return Ok(None);
    };

    // Rotate the visible sub-image about its own (scaled) center.
    let origin = Vector2::new(dest.width * 0.5, dest.height * 0.5);
    let dest = Rectangle {
        x: dest.x + origin.x,
        y: dest.y + origin.y,
        ..dest
    };

    Ok(Some(DrawOp {
        tex_key: layer.tex_key.clone(),
        src,
        dest,
        origin,
        rotation: rotation.degrees,
    }))
}

/// Compose a full stack in declared order.
///
/// `bitmap_size` resolves a texture key to its pixel dimensions. Layers
/// whose key does not resolve are skipped; the stack was validated against
/// the store at construction, so that only happens if the store changed
/// underneath the entity.
pub fn compose_stack(
    pos: Vector2,
    rotation: &Rotation,
    extent: &HalfExtent,
    stack: &LayerStack,
    mut bitmap_size: impl FnMut(&str) -> Option<Vector2>,
    layer_vp: &LayerViewport,
    screen_vp: &ScreenViewport,
) -> Result<Vec<DrawOp>, ProjectionError> {
    let mut ops = Vec::with_capacity(stack.layers.len());
    for layer in &stack.layers {
        let Some(size) = bitmap_size(&layer.tex_key) else {
            continue;
        };
        if let Some(op) = compose_layer(pos, rotation, extent, layer, size, layer_vp, screen_vp)? {
            ops.push(op);
        }
    }
    Ok(ops)
}
