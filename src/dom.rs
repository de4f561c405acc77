use crate::input::clamp_device_pixel_ratio;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

pub fn sync_canvas_backing_size(canvas: &web::HtmlCanvasElement) {
    if let Some(w) = web::window() {
        let dpr = clamp_device_pixel_ratio(w.device_pixel_ratio());
        let rect = canvas.get_bounding_client_rect();
        let w_px = (rect.width() * dpr) as u32;
        let h_px = (rect.height() * dpr) as u32;
        canvas.set_width(w_px.max(1));
        canvas.set_height(h_px.max(1));
    }
}

pub fn wire_canvas_resize(canvas: &web::HtmlCanvasElement) {
    sync_canvas_backing_size(canvas);
    let canvas_resize = canvas.clone();
    let closure = Closure::wrap(Box::new(move || {
        sync_canvas_backing_size(&canvas_resize);
    }) as Box<dyn FnMut()>);
    if let Some(window) = web::window() {
        _ = window.add_event_listener_with_callback("resize", closure.as_ref().unchecked_ref());
    }
    closure.forget();
}

/// Pointer cursor while a frame is hovered.
pub fn set_cursor(canvas: &web::HtmlCanvasElement, active: bool) {
    let cursor = if active { "pointer" } else { "auto" };
    _ = canvas.style().set_property("cursor", cursor);
}

pub fn create_div(document: &web::Document) -> anyhow::Result<web::HtmlElement> {
    document
        .create_element("div")
        .map_err(|e| anyhow::anyhow!("create_element failed: {:?}", e))?
        .dyn_into::<web::HtmlElement>()
        .map_err(|e| anyhow::anyhow!("not an HtmlElement: {:?}", e))
}

pub fn append_to_body(document: &web::Document, el: &web::HtmlElement) -> anyhow::Result<()> {
    let body = document
        .body()
        .ok_or_else(|| anyhow::anyhow!("document has no body"))?;
    body.append_child(el)
        .map_err(|e| anyhow::anyhow!("append_child failed: {:?}", e))?;
    Ok(())
}

/// Apply `(property, value)` pairs to an element's inline style.
pub fn apply_style(el: &web::HtmlElement, props: &[(&str, &str)]) {
    let style = el.style();
    for (k, v) in props {
        _ = style.set_property(k, v);
    }
}
