// Host-side tests for instanced scene geometry and label placement.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod constants {
    include!("../src/constants.rs");
}
mod input {
    include!("../src/input.rs");
}
mod dom {
    include!("../src/dom.rs");
}
mod overlay {
    include!("../src/overlay.rs");
}
mod geometry {
    include!("../src/render/geometry.rs");
}

use crate::constants::INSTANCES_PER_FRAME;
use gallery_core::*;
use geometry::*;
use glam::{Vec2, Vec3};
use overlay::label_placement;

fn make_scene() -> GalleryScene {
    let gallery = Gallery::new(vec![
        FrameSpec::new("a.jpg", Vec3::new(0.0, 0.0, 1.5), Vec3::ZERO, "a"),
        FrameSpec::new("b.jpg", Vec3::new(-0.8, 0.0, -0.6), Vec3::ZERO, "b"),
    ])
    .unwrap()
    .with_origin(GALLERY_ORIGIN);
    GallerySceneBuilder::new(gallery)
        .phases(vec![0.25, 0.75])
        .build()
}

#[test]
fn unit_cube_has_flat_faces() {
    let (vertices, indices) = unit_cube();
    assert_eq!(vertices.len(), 24);
    assert_eq!(indices.len(), 36);
    for v in &vertices {
        let p = Vec3::from(v.position);
        let n = Vec3::from(v.normal);
        assert!((p.dot(n) - 0.5).abs() < 1e-6, "vertex lies on its face");
        assert!(p.abs().max_element() <= 0.5 + 1e-6);
    }
}

#[test]
fn cube_triangles_wind_outwards() {
    let (vertices, indices) = unit_cube();
    for tri in indices.chunks(3) {
        let [a, b, c] = [0, 1, 2].map(|k| Vec3::from(vertices[tri[k] as usize].position));
        let n = Vec3::from(vertices[tri[0] as usize].normal);
        assert!((b - a).cross(c - a).dot(n) > 0.0);
    }
}

#[test]
fn one_ground_plus_three_instances_per_frame() {
    let scene = make_scene();
    let instances = build_instances(&scene.snapshot(), scene.gallery().origin());
    assert_eq!(instances.len(), 1 + 2 * INSTANCES_PER_FRAME);
}

#[test]
fn ground_top_face_sits_at_the_gallery_origin() {
    let g = ground_instance(GALLERY_ORIGIN);
    let m = glam::Mat4::from_cols_array_2d(&g.model);
    let top = m.transform_point3(Vec3::new(0.0, 0.5, 0.0));
    assert!(top.abs_diff_eq(GALLERY_ORIGIN, 1e-6));
}

#[test]
fn borders_skip_fog_and_carry_the_damped_colour() {
    let mut scene = make_scene();
    scene.pointer_moved(Some(1));
    scene.advance(0.05);
    let snap = scene.snapshot();
    let instances = build_instances(&snap, scene.gallery().origin());
    let border = &instances[1 + INSTANCES_PER_FRAME + 1];
    assert_eq!(border.params[0], KIND_UNLIT);
    assert_eq!(border.params[3], 0.0);
    assert_eq!(border.color[..3], snap.frames[1].border_color.to_array());
}

#[test]
fn image_panel_carries_zoom_and_scale() {
    let mut scene = make_scene();
    scene.advance(1.0);
    let snap = scene.snapshot();
    let instances = build_instances(&snap, scene.gallery().origin());
    let image = &instances[1 + 2];
    assert_eq!(image.params[0], KIND_IMAGE);
    assert_eq!(image.params[1], snap.frames[0].image_zoom);
    assert_eq!(image.params[2], 0.25);
    // body x scale 1 times nominal image x scale
    let m = glam::Mat4::from_cols_array_2d(&image.model);
    assert!((m.x_axis.truncate().length() - IMAGE_SCALE.x).abs() < 1e-5);
}

#[test]
fn hidden_labels_have_no_placement() {
    let anchor = ScreenPoint {
        position: Vec2::new(100.0, 50.0),
        pixels_per_unit: 400.0,
    };
    assert!(label_placement(Some(anchor), false).is_none());
    assert!(label_placement(None, true).is_none());
}

#[test]
fn label_font_scales_with_distance() {
    let near = label_placement(
        Some(ScreenPoint {
            position: Vec2::new(100.0, 50.0),
            pixels_per_unit: 800.0,
        }),
        true,
    )
    .unwrap();
    assert_eq!(near.left, 100.0);
    assert_eq!(near.top, 50.0);
    assert!((near.font_px - LABEL_FONT_SIZE * 800.0).abs() < 1e-4);
    assert!((near.max_width_px - LABEL_MAX_WIDTH * 800.0).abs() < 1e-4);
}

#[test]
fn label_anchor_projects_in_front_of_the_standoff_camera() {
    let scene = make_scene();
    let viewport = Vec2::new(1280.0, 720.0);
    let lens = Lens::default().with_viewport(viewport.x, viewport.y);
    let snap = scene.snapshot();
    let frame = &snap.frames[0];
    let anchor = frame.transform.transform_point3(LABEL_ANCHOR);
    let p = lens.project(&CameraPose::standoff(), anchor, viewport).unwrap();
    // right of and above the centre of the screen
    assert!(p.position.x > viewport.x / 2.0);
    assert!(p.position.y < viewport.y / 2.0);
    assert!(label_placement(Some(p), frame.label_visible).is_some());
}
