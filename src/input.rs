use crate::constants::{DPR_MAX, DPR_MIN};
use gallery_core::camera::pixel_to_ndc;
use glam::Vec2;
use web_sys as web;

/// Clamp the browser's device pixel ratio to the range the canvas renders at.
#[inline]
pub fn clamp_device_pixel_ratio(dpr: f64) -> f64 {
    if dpr.is_finite() {
        dpr.clamp(DPR_MIN, DPR_MAX)
    } else {
        DPR_MIN
    }
}

/// Pointer position relative to a rect's top-left corner, in CSS pixels.
#[inline]
pub fn client_to_local(client: Vec2, rect_origin: Vec2) -> Vec2 {
    client - rect_origin
}

/// NDC under a pointer given in client coordinates.
#[inline]
pub fn client_to_ndc(client: Vec2, rect_origin: Vec2, rect_size: Vec2) -> Vec2 {
    pixel_to_ndc(client_to_local(client, rect_origin), rect_size)
}

/// Canvas rect in CSS pixels as `(top_left, size)`.
#[inline]
pub fn canvas_css_rect(canvas: &web::HtmlCanvasElement) -> (Vec2, Vec2) {
    let rect = canvas.get_bounding_client_rect();
    (
        Vec2::new(rect.left() as f32, rect.top() as f32),
        Vec2::new(rect.width() as f32, rect.height() as f32),
    )
}

#[inline]
pub fn pointer_ndc(ev: &web::MouseEvent, canvas: &web::HtmlCanvasElement) -> Vec2 {
    let (origin, size) = canvas_css_rect(canvas);
    client_to_ndc(
        Vec2::new(ev.client_x() as f32, ev.client_y() as f32),
        origin,
        size,
    )
}
