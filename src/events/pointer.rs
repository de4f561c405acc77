use crate::dom;
use crate::input;
use crate::location::BrowserLocation;
use gallery_core::camera::{Lens, Ray};
use gallery_core::scene::GalleryScene;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use web_sys as web;

#[derive(Clone)]
pub struct InputWiring {
    pub canvas: web::HtmlCanvasElement,
    pub scene: Rc<RefCell<GalleryScene>>,
    pub location: Rc<RefCell<BrowserLocation>>,
}

pub fn wire_input_handlers(w: InputWiring) {
    wire_pointermove(&w);
    wire_pointerleave(&w);
    wire_click(&w);
}

/// World ray under the pointer through the current (damped) camera.
fn pointer_ray(ev: &web::MouseEvent, canvas: &web::HtmlCanvasElement, scene: &GalleryScene) -> Ray {
    let (_, size) = input::canvas_css_rect(canvas);
    let lens = Lens::default().with_viewport(size.x, size.y);
    lens.ray(&scene.camera(), input::pointer_ndc(ev, canvas))
}

fn wire_pointermove(w: &InputWiring) {
    let w = w.clone();
    let canvas_for_listener = w.canvas.clone();

    let closure = wasm_bindgen::closure::Closure::wrap(Box::new(move |ev: web::PointerEvent| {
        let mut scene = w.scene.borrow_mut();
        let ray = pointer_ray(&ev, &w.canvas, &scene);
        let hit = scene.pick(&ray);
        scene.pointer_moved(hit);
        dom::set_cursor(&w.canvas, scene.cursor_active());
    }) as Box<dyn FnMut(_)>);
    _ = canvas_for_listener
        .add_event_listener_with_callback("pointermove", closure.as_ref().unchecked_ref());
    closure.forget();
}

fn wire_pointerleave(w: &InputWiring) {
    let w = w.clone();
    let canvas_for_listener = w.canvas.clone();

    let closure = wasm_bindgen::closure::Closure::wrap(Box::new(move |_ev: web::PointerEvent| {
        w.scene.borrow_mut().pointer_left();
        dom::set_cursor(&w.canvas, false);
    }) as Box<dyn FnMut(_)>);
    _ = canvas_for_listener
        .add_event_listener_with_callback("pointerleave", closure.as_ref().unchecked_ref());
    closure.forget();
}

fn wire_click(w: &InputWiring) {
    let w = w.clone();
    let canvas_for_listener = w.canvas.clone();

    let closure = wasm_bindgen::closure::Closure::wrap(Box::new(move |ev: web::MouseEvent| {
        let mut scene = w.scene.borrow_mut();
        let ray = pointer_ray(&ev, &w.canvas, &scene);
        let hit = scene.pick(&ray);
        scene.click(hit, &mut *w.location.borrow_mut());
        ev.prevent_default();
    }) as Box<dyn FnMut(_)>);
    _ = canvas_for_listener.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
    closure.forget();
}
