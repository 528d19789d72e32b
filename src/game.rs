//! Demo scene: one spinning card entity.
//!
//! Builds placeholder textures at runtime (solid colors for the card body
//! and portrait, text-rendered glyphs for the digits) so the demo needs no
//! asset files, then spawns a card whose layer stack exercises the whole
//! pipeline: a full-size base, an inset portrait, and two digit overlays
//! bound to attack and health slots.

use bevy_ecs::prelude::*;
use raylib::prelude::*;

use crate::components::halfextent::HalfExtent;
use crate::components::layerstack::{DIGIT_COUNT, DigitSlot, LayerError, LayerStack, SpriteLayer};
use crate::components::mapposition::MapPosition;
use crate::components::rotation::Rotation;
use crate::components::zindex::ZIndex;
use crate::resources::frametime::FrameTime;
use crate::resources::texturestore::TextureStore;

pub const CARD_BASE: &str = "card_base";
pub const CARD_PORTRAIT: &str = "card_portrait";

/// Seconds between digit rerolls in the demo.
const REROLL_PERIOD: f32 = 2.0;
/// Demo spin speed in degrees per second.
const SPIN_SPEED: f32 = 45.0;

fn digit_key(value: usize) -> String {
    format!("digit{value}")
}

fn digit_keys() -> [String; DIGIT_COUNT] {
    std::array::from_fn(digit_key)
}

/// Generate the demo textures and put them in the store.
pub fn load_textures(
    rl: &mut RaylibHandle,
    thread: &RaylibThread,
    store: &mut TextureStore,
) -> Result<(), String> {
    let base = Image::gen_image_color(180, 260, Color::DARKBLUE);
    let base = rl
        .load_texture_from_image(thread, &base)
        .map_err(|e| format!("Failed to create base texture: {e}"))?;
    store.insert(CARD_BASE, base);

    let portrait = Image::gen_image_color(140, 140, Color::BEIGE);
    let portrait = rl
        .load_texture_from_image(thread, &portrait)
        .map_err(|e| format!("Failed to create portrait texture: {e}"))?;
    store.insert(CARD_PORTRAIT, portrait);

    for value in 0..DIGIT_COUNT {
        let glyph = Image::image_text(&value.to_string(), 32, Color::RAYWHITE);
        let glyph = rl
            .load_texture_from_image(thread, &glyph)
            .map_err(|e| format!("Failed to create digit texture {value}: {e}"))?;
        store.insert(digit_key(value), glyph);
    }

    log::info!("Generated {} placeholder textures", store.len());
    Ok(())
}

/// Spawn the demo card at the scenario pose: centered at (400, 300) with a
/// 90x130 half-extent, digits tucked into the top corners.
pub fn spawn_card(world: &mut World) -> Result<Entity, LayerError> {
    let stack = LayerStack::new([
        SpriteLayer::base(CARD_BASE),
        SpriteLayer::new(
            CARD_PORTRAIT,
            Vector2::new(0.0, -0.2),
            Vector2::new(0.78, 0.54),
        ),
        SpriteLayer::new(
            digit_key(0),
            Vector2::new(-0.68, -0.84),
            Vector2::new(0.1, 0.1),
        ),
        SpriteLayer::new(
            digit_key(0),
            Vector2::new(0.68, -0.84),
            Vector2::new(0.1, 0.1),
        ),
    ])
    .with_attack_slot(DigitSlot::new(2, digit_keys()))
    .with_health_slot(DigitSlot::new(3, digit_keys()));

    {
        let store = world.resource::<TextureStore>();
        stack.validate(|key| store.contains(key))?;
    }

    let entity = world
        .spawn((
            MapPosition::new(400.0, 300.0),
            Rotation::default(),
            HalfExtent::new(90.0, 130.0),
            stack,
            ZIndex(0),
        ))
        .id();
    log::info!("Spawned demo card {entity}");
    Ok(entity)
}

/// Spin every card and reroll its digits on a fixed cadence.
pub fn update_cards(mut query: Query<(&mut Rotation, &mut LayerStack)>, time: Res<FrameTime>) {
    let previous = time.elapsed - time.delta;
    let reroll =
        (time.elapsed / REROLL_PERIOD).floor() > (previous / REROLL_PERIOD).floor();

    for (mut rotation, mut stack) in query.iter_mut() {
        rotation.degrees = (rotation.degrees + SPIN_SPEED * time.delta) % 360.0;

        if reroll && stack.attack.is_some() {
            if let Err(e) = stack.set_attack_value(fastrand::i32(0..DIGIT_COUNT as i32)) {
                log::warn!("attack reroll rejected: {e}");
            }
        }
        if reroll && stack.health.is_some() {
            if let Err(e) = stack.set_health_value(fastrand::i32(0..DIGIT_COUNT as i32)) {
                log::warn!("health reroll rejected: {e}");
            }
        }
    }
}
