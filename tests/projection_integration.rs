//! Integration tests for the coordinate mapper and draw-op composition:
//! viewport mapping, clipping, skip-on-disjoint, and draw order.

use raylib::prelude::Vector2;

use cardengine::components::halfextent::HalfExtent;
use cardengine::components::layerstack::{LayerStack, SpriteLayer};
use cardengine::components::rotation::Rotation;
use cardengine::resources::layerviewport::LayerViewport;
use cardengine::resources::screenviewport::ScreenViewport;
use cardengine::systems::composite::{compose_layer, compose_stack};
use cardengine::systems::projection::{
    ProjectionError, WorldBound, project, validate_viewports,
};

const EPSILON: f32 = 1e-3;

fn approx_eq(a: f32, b: f32) -> bool {
    (a - b).abs() < EPSILON
}

#[test]
fn fully_visible_bound_uses_the_whole_bitmap() {
    let layer_vp = LayerViewport::new(400.0, 300.0, 800.0, 600.0);
    let screen_vp = ScreenViewport::new(0.0, 0.0, 800.0, 600.0);
    let bound = WorldBound::new(Vector2::new(400.0, 300.0), 90.0, 130.0);

    let (src, dest) = project(&bound, Vector2::new(180.0, 260.0), &layer_vp, &screen_vp)
        .unwrap()
        .unwrap();

    assert!(approx_eq(src.x, 0.0));
    assert!(approx_eq(src.y, 0.0));
    assert!(approx_eq(src.width, 180.0));
    assert!(approx_eq(src.height, 260.0));

    // One world unit is one pixel here, so the dest is the bound itself.
    assert!(approx_eq(dest.x, 310.0));
    assert!(approx_eq(dest.y, 170.0));
    assert!(approx_eq(dest.width, 180.0));
    assert!(approx_eq(dest.height, 260.0));
}

#[test]
fn dest_area_fraction_matches_bound_area_fraction() {
    let layer_vp = LayerViewport::new(400.0, 300.0, 800.0, 600.0);
    let screen_vp = ScreenViewport::new(0.0, 0.0, 400.0, 300.0);
    let bound = WorldBound::new(Vector2::new(400.0, 300.0), 50.0, 25.0);

    let (_, dest) = project(&bound, Vector2::new(64.0, 64.0), &layer_vp, &screen_vp)
        .unwrap()
        .unwrap();

    let bound_fraction = (100.0 * 50.0) / (800.0 * 600.0);
    let dest_fraction = (dest.width * dest.height) / (400.0 * 300.0);
    assert!(
        approx_eq(bound_fraction, dest_fraction),
        "bound fraction {bound_fraction} vs dest fraction {dest_fraction}"
    );
}

#[test]
fn partially_visible_bound_selects_the_matching_sub_rectangle() {
    let layer_vp = LayerViewport::new(0.0, 0.0, 200.0, 150.0);
    let screen_vp = ScreenViewport::new(0.0, 0.0, 400.0, 300.0); // 2 px per unit
    // Sticks out of the viewport's left edge by half its width.
    let bound = WorldBound::new(Vector2::new(-100.0, 0.0), 20.0, 10.0);

    let (src, dest) = project(&bound, Vector2::new(40.0, 20.0), &layer_vp, &screen_vp)
        .unwrap()
        .unwrap();

    // Only the right half of the bitmap is visible.
    assert!(approx_eq(src.x, 20.0));
    assert!(approx_eq(src.width, 20.0));
    assert!(approx_eq(src.y, 0.0));
    assert!(approx_eq(src.height, 20.0));

    // The overlap starts at the viewport's left edge.
    assert!(approx_eq(dest.x, 0.0));
    assert!(approx_eq(dest.y, 130.0));
    assert!(approx_eq(dest.width, 40.0));
    assert!(approx_eq(dest.height, 40.0));
}

#[test]
fn screen_viewport_offset_shifts_the_destination() {
    let layer_vp = LayerViewport::new(0.0, 0.0, 200.0, 150.0);
    let inset = ScreenViewport::new(20.0, 40.0, 400.0, 300.0);
    let bound = WorldBound::new(Vector2::new(0.0, 0.0), 10.0, 10.0);

    let (_, dest) = project(&bound, Vector2::new(32.0, 32.0), &layer_vp, &inset)
        .unwrap()
        .unwrap();

    // Same mapping as the origin-anchored viewport, translated by (20, 40).
    assert!(approx_eq(dest.x, 20.0 + 90.0 * 2.0));
    assert!(approx_eq(dest.y, 40.0 + 65.0 * 2.0));
}

#[test]
fn disjoint_bound_projects_to_nothing() {
    let layer_vp = LayerViewport::new(400.0, 300.0, 800.0, 600.0);
    let screen_vp = ScreenViewport::new(0.0, 0.0, 800.0, 600.0);
    let bound = WorldBound::new(Vector2::new(2000.0, 300.0), 90.0, 130.0);

    let projected = project(&bound, Vector2::new(64.0, 64.0), &layer_vp, &screen_vp).unwrap();
    assert!(projected.is_none());
}

#[test]
fn touching_edges_count_as_no_overlap() {
    let layer_vp = LayerViewport::new(0.0, 0.0, 200.0, 150.0);
    let screen_vp = ScreenViewport::new(0.0, 0.0, 200.0, 150.0);
    // Right edge of the bound exactly on the viewport's left edge.
    let bound = WorldBound::new(Vector2::new(-110.0, 0.0), 10.0, 10.0);

    let projected = project(&bound, Vector2::new(16.0, 16.0), &layer_vp, &screen_vp).unwrap();
    assert!(projected.is_none());
}

#[test]
fn degenerate_bound_projects_to_nothing() {
    let layer_vp = LayerViewport::new(0.0, 0.0, 200.0, 150.0);
    let screen_vp = ScreenViewport::new(0.0, 0.0, 200.0, 150.0);
    let bound = WorldBound::new(Vector2::new(0.0, 0.0), 0.0, 10.0);

    let projected = project(&bound, Vector2::new(16.0, 16.0), &layer_vp, &screen_vp).unwrap();
    assert!(projected.is_none());
}

#[test]
fn malformed_viewports_are_an_explicit_error() {
    let good_layer = LayerViewport::new(0.0, 0.0, 200.0, 150.0);
    let good_screen = ScreenViewport::new(0.0, 0.0, 200.0, 150.0);

    let flat = LayerViewport::new(0.0, 0.0, 200.0, 0.0);
    assert_eq!(
        validate_viewports(&flat, &good_screen),
        Err(ProjectionError::MalformedLayerViewport {
            width: 200.0,
            height: 0.0,
        })
    );

    let negative = ScreenViewport::new(0.0, 0.0, -640.0, 480.0);
    assert_eq!(
        validate_viewports(&good_layer, &negative),
        Err(ProjectionError::MalformedScreenViewport {
            width: -640.0,
            height: 480.0,
        })
    );

    // The mapper itself refuses the same viewports.
    let bound = WorldBound::new(Vector2::new(0.0, 0.0), 10.0, 10.0);
    assert!(project(&bound, Vector2::new(16.0, 16.0), &flat, &good_screen).is_err());
}

#[test]
fn compose_layer_pivots_on_the_sub_image_center() {
    let layer_vp = LayerViewport::new(400.0, 300.0, 800.0, 600.0);
    let screen_vp = ScreenViewport::new(0.0, 0.0, 800.0, 600.0);
    let rotation = Rotation::new(25.0);

    let op = compose_layer(
        Vector2::new(400.0, 300.0),
        &rotation,
        &HalfExtent::new(90.0, 130.0),
        &SpriteLayer::base("base"),
        Vector2::new(180.0, 260.0),
        &layer_vp,
        &screen_vp,
    )
    .unwrap()
    .unwrap();

    assert_eq!(op.tex_key, "base");
    assert!(approx_eq(op.rotation, 25.0));
    // Origin is the center of the destination, and dest.x/.y is where the
    // origin lands, so the op pivots on the bound's screen center.
    assert!(approx_eq(op.origin.x, op.dest.width * 0.5));
    assert!(approx_eq(op.origin.y, op.dest.height * 0.5));
    assert!(approx_eq(op.dest.x, 400.0));
    assert!(approx_eq(op.dest.y, 300.0));
}

#[test]
fn compose_stack_emits_ops_in_declared_order() {
    let layer_vp = LayerViewport::new(400.0, 300.0, 800.0, 600.0);
    let screen_vp = ScreenViewport::new(0.0, 0.0, 800.0, 600.0);
    let stack = LayerStack::new([
        SpriteLayer::base("base"),
        SpriteLayer::new(
            "portrait",
            Vector2::new(0.0, -0.2),
            Vector2::new(0.78, 0.54),
        ),
        SpriteLayer::new(
            "digit0",
            Vector2::new(-0.68, -0.84),
            Vector2::new(0.1, 0.1),
        ),
    ]);

    let ops = compose_stack(
        Vector2::new(400.0, 300.0),
        &Rotation::default(),
        &HalfExtent::new(90.0, 130.0),
        &stack,
        |_| Some(Vector2::new(64.0, 64.0)),
        &layer_vp,
        &screen_vp,
    )
    .unwrap();

    let keys: Vec<&str> = ops.iter().map(|op| op.tex_key.as_str()).collect();
    assert_eq!(keys, vec!["base", "portrait", "digit0"]);
}

#[test]
fn offscreen_layers_produce_no_submission() {
    let layer_vp = LayerViewport::new(400.0, 300.0, 800.0, 600.0);
    let screen_vp = ScreenViewport::new(0.0, 0.0, 800.0, 600.0);
    let stack = LayerStack::new([
        SpriteLayer::base("base"),
        // Anchor at 30 half-widths to the right: far outside the viewport.
        SpriteLayer::new(
            "digit0",
            Vector2::new(30.0, 0.0),
            Vector2::new(0.1, 0.1),
        ),
    ]);

    let ops = compose_stack(
        Vector2::new(400.0, 300.0),
        &Rotation::default(),
        &HalfExtent::new(90.0, 130.0),
        &stack,
        |_| Some(Vector2::new(64.0, 64.0)),
        &layer_vp,
        &screen_vp,
    )
    .unwrap();

    let keys: Vec<&str> = ops.iter().map(|op| op.tex_key.as_str()).collect();
    assert_eq!(keys, vec!["base"]);
}

#[test]
fn digit_rebind_is_visible_on_the_next_compose() {
    let layer_vp = LayerViewport::new(400.0, 300.0, 800.0, 600.0);
    let screen_vp = ScreenViewport::new(0.0, 0.0, 800.0, 600.0);
    let keys: [String; 10] = std::array::from_fn(|v| format!("digit{v}"));
    let mut stack = LayerStack::new([
        SpriteLayer::base("base"),
        SpriteLayer::new(
            "digit0",
            Vector2::new(-0.68, -0.84),
            Vector2::new(0.1, 0.1),
        ),
    ])
    .with_attack_slot(cardengine::components::layerstack::DigitSlot::new(1, keys));

    stack.set_attack_value(7).unwrap();

    let ops = compose_stack(
        Vector2::new(400.0, 300.0),
        &Rotation::default(),
        &HalfExtent::new(90.0, 130.0),
        &stack,
        |_| Some(Vector2::new(16.0, 16.0)),
        &layer_vp,
        &screen_vp,
    )
    .unwrap();

    assert_eq!(ops[1].tex_key, "digit7");
}
