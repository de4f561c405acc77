use crate::location::BrowserLocation;
use gallery_core::scene::GalleryScene;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Keys that release focus, same as clicking empty space.
#[inline]
pub fn is_dismiss_key(key: &str) -> bool {
    matches!(key, "Escape" | "Esc")
}

pub fn wire_global_keydown(scene: Rc<RefCell<GalleryScene>>, location: Rc<RefCell<BrowserLocation>>) {
    let closure = wasm_bindgen::closure::Closure::wrap(Box::new(move |ev: web::KeyboardEvent| {
        if ev.repeat() || !is_dismiss_key(&ev.key()) {
            return;
        }
        log::info!("[keys] dismiss");
        scene.borrow_mut().dismiss(&mut *location.borrow_mut());
        ev.prevent_default();
    }) as Box<dyn FnMut(_)>);
    if let Some(window) = web::window() {
        _ = window.add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref());
    }
    closure.forget();
}
