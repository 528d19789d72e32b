//! Ordered image layers for a composite entity.
//!
//! A [`LayerStack`] holds the full visual of an entity: an ordered list of
//! [`SpriteLayer`]s sharing the entity's position and orientation, drawn
//! back to front in declared order. Two optional [`DigitSlot`]s bind a
//! layer to ten pre-loaded digit bitmaps so attack/health values can be
//! swapped by rebinding the layer's texture key.

use bevy_ecs::prelude::Component;
use raylib::prelude::Vector2;
use smallvec::SmallVec;
use thiserror::Error;

/// Digit overlays select from exactly ten bitmaps, one per value 0-9.
pub const DIGIT_COUNT: usize = 10;

/// Validation failures when assembling or mutating a [`LayerStack`].
#[derive(Debug, Error, Clone, PartialEq)]
pub enum LayerError {
    #[error("digit value {0} is outside 0-9")]
    DigitOutOfRange(i32),
    #[error("no {0} digit slot on this layer stack")]
    MissingDigitSlot(&'static str),
    #[error("{kind} digit slot points at layer {layer}, which does not exist")]
    DigitSlotOutOfBounds { kind: &'static str, layer: usize },
    #[error("layer {index} references bitmap '{key}', which is not loaded")]
    MissingBitmap { index: usize, key: String },
    #[error("layer {index} has non-positive scale ({sx}, {sy})")]
    NonPositiveScale { index: usize, sx: f32, sy: f32 },
}

/// One image layer of a composite entity.
///
/// `offset` places the layer's anchor relative to the owner: each axis is
/// a fraction of the bounding half-extent, conventionally in [-1, 1] but
/// not clamped. `scale` sizes the layer's own bound as a fraction of the
/// half-extent and must be strictly positive.
#[derive(Debug, Clone, PartialEq)]
pub struct SpriteLayer {
    pub tex_key: String,
    pub offset: Vector2,
    pub scale: Vector2,
}

impl SpriteLayer {
    pub fn new(tex_key: impl Into<String>, offset: Vector2, scale: Vector2) -> Self {
        Self {
            tex_key: tex_key.into(),
            offset,
            scale,
        }
    }

    /// A layer that exactly covers the owner's bound. The entity's own
    /// body image is just this, no special casing in the renderer.
    pub fn base(tex_key: impl Into<String>) -> Self {
        Self::new(tex_key, Vector2::zero(), Vector2::one())
    }
}

/// Binding of one layer to ten digit bitmaps.
#[derive(Debug, Clone, PartialEq)]
pub struct DigitSlot {
    /// Index into [`LayerStack::layers`] of the layer this slot rebinds.
    pub layer: usize,
    /// Texture keys for the digits 0-9, in value order.
    pub keys: [String; DIGIT_COUNT],
    /// Currently selected value.
    pub value: i32,
}

impl DigitSlot {
    pub fn new(layer: usize, keys: [String; DIGIT_COUNT]) -> Self {
        Self {
            layer,
            keys,
            value: 0,
        }
    }
}

/// The ordered layers of one composite entity plus its digit slots.
///
/// Later layers composite atop earlier ones through image transparency
/// only. Layers are declared once at construction; afterwards only digit
/// slots rebind texture keys.
#[derive(Component, Debug, Clone, Default)]
pub struct LayerStack {
    pub layers: SmallVec<[SpriteLayer; 4]>,
    pub attack: Option<DigitSlot>,
    pub health: Option<DigitSlot>,
}

impl LayerStack {
    pub fn new(layers: impl IntoIterator<Item = SpriteLayer>) -> Self {
        Self {
            layers: SmallVec::from_iter(layers),
            attack: None,
            health: None,
        }
    }

    pub fn with_attack_slot(mut self, slot: DigitSlot) -> Self {
        self.attack = Some(slot);
        self
    }

    pub fn with_health_slot(mut self, slot: DigitSlot) -> Self {
        self.health = Some(slot);
        self
    }

    /// Select the attack digit. The bound layer shows `keys[value]` on the
    /// next draw. Values outside 0-9 are rejected.
    pub fn set_attack_value(&mut self, value: i32) -> Result<(), LayerError> {
        let slot = self
            .attack
            .as_mut()
            .ok_or(LayerError::MissingDigitSlot("attack"))?;
        Self::rebind_digit(&mut self.layers, slot, "attack", value)
    }

    /// Select the health digit. Same contract as [`Self::set_attack_value`].
    pub fn set_health_value(&mut self, value: i32) -> Result<(), LayerError> {
        let slot = self
            .health
            .as_mut()
            .ok_or(LayerError::MissingDigitSlot("health"))?;
        Self::rebind_digit(&mut self.layers, slot, "health", value)
    }

    pub fn attack_value(&self) -> Option<i32> {
        self.attack.as_ref().map(|s| s.value)
    }

    pub fn health_value(&self) -> Option<i32> {
        self.health.as_ref().map(|s| s.value)
    }

    fn rebind_digit(
        layers: &mut SmallVec<[SpriteLayer; 4]>,
        slot: &mut DigitSlot,
        kind: &'static str,
        value: i32,
    ) -> Result<(), LayerError> {
        if !(0..DIGIT_COUNT as i32).contains(&value) {
            return Err(LayerError::DigitOutOfRange(value));
        }
        let layer = layers
            .get_mut(slot.layer)
            .ok_or(LayerError::DigitSlotOutOfBounds {
                kind,
                layer: slot.layer,
            })?;
        slot.value = value;
        layer.tex_key = slot.keys[value as usize].clone();
        Ok(())
    }

    /// Construction-time gate: every referenced bitmap must already be
    /// loaded, every scale strictly positive, and digit slots must point
    /// at existing layers. Call with `|key| store.contains(key)` before
    /// spawning; a failure here is fatal for the entity.
    pub fn validate(&self, mut loaded: impl FnMut(&str) -> bool) -> Result<(), LayerError> {
        for (index, layer) in self.layers.iter().enumerate() {
            if layer.scale.x <= 0.0 || layer.scale.y <= 0.0 {
                return Err(LayerError::NonPositiveScale {
                    index,
                    sx: layer.scale.x,
                    sy: layer.scale.y,
                });
            }
            if !loaded(&layer.tex_key) {
                return Err(LayerError::MissingBitmap {
                    index,
                    key: layer.tex_key.clone(),
                });
            }
        }
        for (kind, slot) in [("attack", &self.attack), ("health", &self.health)] {
            let Some(slot) = slot else { continue };
            if slot.layer >= self.layers.len() {
                return Err(LayerError::DigitSlotOutOfBounds {
                    kind,
                    layer: slot.layer,
                });
            }
            for key in &slot.keys {
                if !loaded(key) {
                    return Err(LayerError::MissingBitmap {
                        index: slot.layer,
                        key: key.clone(),
                    });
                }
            }
        }
        Ok(())
    }
}
