use bevy_ecs::prelude::*;
use raylib::prelude::*;

use crate::components::halfextent::HalfExtent;
use crate::components::layerstack::LayerStack;
use crate::components::mapposition::MapPosition;
use crate::components::rotation::Rotation;
use crate::components::zindex::ZIndex;
use crate::resources::layerviewport::LayerViewport;
use crate::resources::screenviewport::ScreenViewport;
use crate::resources::texturestore::TextureStore;
use crate::systems::composite::compose_stack;
use crate::systems::projection::{ProjectionError, validate_viewports};

/// Draw every layered entity through the current viewport pair.
///
/// Entities are sorted by [`ZIndex`] (painter's algorithm); each entity's
/// layers then go out in declared order. Layers that miss the layer
/// viewport produce no submission at all. A malformed viewport aborts the
/// whole pass with an error; the caller decides whether to log or bail.
pub fn render_pass(
    world: &mut World,
    d: &mut RaylibDrawHandle,
) -> Result<(), ProjectionError> {
    let layer_vp = *world.resource::<LayerViewport>();
    let screen_vp = *world.resource::<ScreenViewport>();
    validate_viewports(&layer_vp, &screen_vp)?;

    // Query: (MapPosition, Rotation, HalfExtent, LayerStack, ZIndex)
    // Collect, sort by z, then draw.
    let mut to_draw: Vec<(MapPosition, Rotation, HalfExtent, LayerStack, ZIndex)> = {
        let mut q = world.query::<(&MapPosition, &Rotation, &HalfExtent, &LayerStack, &ZIndex)>();
        q.iter(world)
            .map(|(p, r, e, s, z)| (*p, *r, *e, s.clone(), *z))
            .collect()
    };
    to_draw.sort_by_key(|(_, _, _, _, z)| *z);

    let textures = world.resource::<TextureStore>();
    for (position, rotation, extent, stack, _z) in to_draw.iter() {
        let ops = compose_stack(
            position.pos,
            rotation,
            extent,
            stack,
            |key| textures.size_of(key),
            &layer_vp,
            &screen_vp,
        )?;
        for op in ops {
            match textures.get(&op.tex_key) {
                Some(tex) => {
                    d.draw_texture_pro(tex, op.src, op.dest, op.origin, op.rotation, Color::WHITE)
                }
                None => log::warn!("texture '{}' vanished between compose and draw", op.tex_key),
            }
        }
    }

    Ok(())
}
