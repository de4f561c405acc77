use crate::clock::FrameClock;
use crate::dom;
use crate::input;
use crate::overlay::LabelOverlay;
use crate::render;
use gallery_core::scene::GalleryScene;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

pub struct FrameContext<'a> {
    pub scene: Rc<RefCell<GalleryScene>>,
    pub canvas: web::HtmlCanvasElement,
    pub labels: LabelOverlay,
    pub gpu: Option<render::GpuState<'a>>,
    pub clock: FrameClock,
}

impl<'a> FrameContext<'a> {
    pub fn frame(&mut self) {
        let dt_sec = self.clock.tick();

        // Apply step: advance, then hand every consumer the same snapshot.
        let (snapshot, ground_origin, cursor_active) = {
            let mut scene = self.scene.borrow_mut();
            scene.advance(dt_sec);
            (
                scene.snapshot(),
                scene.gallery().origin(),
                scene.cursor_active(),
            )
        };

        dom::set_cursor(&self.canvas, cursor_active);
        let (origin, size) = input::canvas_css_rect(&self.canvas);
        self.labels.update(&snapshot, origin, size);

        if let Some(g) = &mut self.gpu {
            g.resize_if_needed(self.canvas.width(), self.canvas.height());
            if let Err(e) = g.render(&snapshot, ground_origin) {
                log::error!("render error: {:?}", e);
            }
        }
    }
}

pub async fn init_gpu(canvas: &web::HtmlCanvasElement) -> Option<render::GpuState<'static>> {
    // leak a canvas clone to satisfy 'static lifetime for surface
    let leaked_canvas = Box::leak(Box::new(canvas.clone()));
    match render::GpuState::new(leaked_canvas).await {
        Ok(g) => Some(g),
        Err(e) => {
            log::error!("WebGPU init error: {:?}", e);
            None
        }
    }
}

pub fn start_loop(frame_ctx: Rc<RefCell<FrameContext<'static>>>) {
    let tick: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
    let tick_clone = tick.clone();
    *tick.borrow_mut() = Some(Closure::wrap(Box::new(move || {
        frame_ctx.borrow_mut().frame();
        request_frame(&tick_clone);
    }) as Box<dyn FnMut()>));
    request_frame(&tick);
}

fn request_frame(tick: &Rc<RefCell<Option<Closure<dyn FnMut()>>>>) {
    let Some(w) = web::window() else {
        return;
    };
    if let Some(cb) = tick.borrow().as_ref() {
        _ = w.request_animation_frame(cb.as_ref().unchecked_ref());
    }
}
