#![cfg(target_arch = "wasm32")]
use crate::location::BrowserLocation;
use gallery_core::constants::GALLERY_ORIGIN;
use gallery_core::gallery::Gallery;
use gallery_core::scene::GallerySceneBuilder;
use std::cell::RefCell;
use std::rc::Rc;
use std::sync::atomic::{AtomicBool, Ordering};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys as web;

mod clock;
mod constants;
mod dom;
mod events;
mod exhibits;
mod frame;
mod input;
mod location;
mod overlay;
mod render;

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("gallery-web starting");

    spawn_local(async move {
        if let Err(e) = init().await {
            log::error!("init error: {:?}", e);
        }
    });
    Ok(())
}

async fn init() -> anyhow::Result<()> {
    static STARTED: AtomicBool = AtomicBool::new(false);
    if STARTED.swap(true, Ordering::SeqCst) {
        return Ok(());
    }

    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    let document = window
        .document()
        .ok_or_else(|| anyhow::anyhow!("no document"))?;

    let canvas_el = document
        .get_element_by_id(constants::CANVAS_ID)
        .ok_or_else(|| anyhow::anyhow!("missing #{}", constants::CANVAS_ID))?;
    let canvas: web::HtmlCanvasElement = canvas_el
        .dyn_into::<web::HtmlCanvasElement>()
        .map_err(|e| anyhow::anyhow!(format!("{:?}", e)))?;

    // Maintain canvas internal pixel size to match CSS size * clamped devicePixelRatio
    dom::wire_canvas_resize(&canvas);

    // Two exhibits sharing an image would share an identifier; refuse to start.
    let gallery = Gallery::new(exhibits::exhibits())?.with_origin(GALLERY_ORIGIN);

    overlay::mount_header(&document)?;
    overlay::mount_credit(&document)?;
    let labels = overlay::LabelOverlay::new(&document, &gallery)?;

    let location = Rc::new(RefCell::new(BrowserLocation::new(constants::BASE_PATH)));
    let scene = Rc::new(RefCell::new(GallerySceneBuilder::new(gallery).build()));

    // Deep links focus on the very first tick.
    scene.borrow_mut().sync_location(&*location.borrow());

    {
        let scene = scene.clone();
        let location = location.clone();
        location::wire_popstate(move || {
            scene.borrow_mut().sync_location(&*location.borrow());
        });
    }

    events::wire_input_handlers(events::InputWiring {
        canvas: canvas.clone(),
        scene: scene.clone(),
        location: location.clone(),
    });
    events::wire_global_keydown(scene.clone(), location.clone());

    let gpu: Option<render::GpuState> = frame::init_gpu(&canvas).await;

    let frame_ctx = Rc::new(RefCell::new(frame::FrameContext {
        scene,
        canvas,
        labels,
        gpu,
        clock: clock::FrameClock::new(),
    }));
    frame::start_loop(frame_ctx);

    Ok(())
}
