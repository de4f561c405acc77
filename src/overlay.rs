use crate::constants::{
    CREDIT_ID, CREDIT_TEXT, HEADER_ID, HEADER_SUBTITLE, HEADER_TITLE, LABEL_CLASS,
    LABEL_LINE_HEIGHT, OVERLAY_FONT, OVERLAY_Z_INDEX,
};
use crate::dom;
use gallery_core::camera::{Lens, ScreenPoint};
use gallery_core::constants::{LABEL_ANCHOR, LABEL_FONT_SIZE, LABEL_MAX_WIDTH};
use gallery_core::gallery::Gallery;
use gallery_core::scene::SceneSnapshot;
use glam::Vec2;
use web_sys as web;

/// Where a frame label lands on screen, in CSS pixels.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LabelPlacement {
    pub left: f32,
    pub top: f32,
    pub font_px: f32,
    pub max_width_px: f32,
}

/// Place a label anchored at its top-left corner; `None` hides it.
pub fn label_placement(anchor: Option<ScreenPoint>, visible: bool) -> Option<LabelPlacement> {
    if !visible {
        return None;
    }
    let p = anchor?;
    Some(LabelPlacement {
        left: p.position.x,
        top: p.position.y,
        font_px: LABEL_FONT_SIZE * p.pixels_per_unit,
        max_width_px: LABEL_MAX_WIDTH * p.pixels_per_unit,
    })
}

pub fn mount_header(document: &web::Document) -> anyhow::Result<()> {
    let el = dom::create_div(document)?;
    el.set_id(HEADER_ID);
    dom::apply_style(
        &el,
        &[
            ("position", "absolute"),
            ("top", "0px"),
            ("width", "100%"),
            ("text-align", "center"),
            ("color", "white"),
            ("font-family", OVERLAY_FONT),
            ("z-index", OVERLAY_Z_INDEX),
            ("pointer-events", "none"),
        ],
    );
    el.set_inner_html(&format!(
        "<h1 style='margin:0;font-size:1em'>{HEADER_TITLE}</h1>\
         <p style='margin:0;font-size:0.75em'>{HEADER_SUBTITLE}</p>"
    ));
    dom::append_to_body(document, &el)
}

pub fn mount_credit(document: &web::Document) -> anyhow::Result<()> {
    let el = dom::create_div(document)?;
    el.set_id(CREDIT_ID);
    dom::apply_style(
        &el,
        &[
            ("position", "absolute"),
            ("bottom", "20px"),
            ("left", "20px"),
            ("color", "white"),
            ("font-family", OVERLAY_FONT),
            ("font-size", "0.8em"),
            ("z-index", OVERLAY_Z_INDEX),
            ("pointer-events", "none"),
        ],
    );
    el.set_text_content(Some(CREDIT_TEXT));
    dom::append_to_body(document, &el)
}

/// One absolutely positioned DOM label per frame, in layout order.
pub struct LabelOverlay {
    labels: Vec<web::HtmlElement>,
}

impl LabelOverlay {
    pub fn new(document: &web::Document, gallery: &Gallery) -> anyhow::Result<Self> {
        let mut labels = Vec::with_capacity(gallery.len());
        for frame in gallery.iter() {
            let el = dom::create_div(document)?;
            _ = el.class_list().add_1(LABEL_CLASS);
            let line_height = LABEL_LINE_HEIGHT.to_string();
            dom::apply_style(
                &el,
                &[
                    ("position", "absolute"),
                    ("display", "none"),
                    ("color", "white"),
                    ("font-family", OVERLAY_FONT),
                    ("line-height", line_height.as_str()),
                    ("pointer-events", "none"),
                    ("white-space", "nowrap"),
                    ("overflow", "hidden"),
                ],
            );
            for line in frame.label_lines() {
                let row = dom::create_div(document)?;
                row.set_text_content(Some(line));
                el.append_child(&row)
                    .map_err(|e| anyhow::anyhow!("append_child failed: {:?}", e))?;
            }
            dom::append_to_body(document, &el)?;
            labels.push(el);
        }
        Ok(Self { labels })
    }

    /// Re-anchor every label for this tick. `origin` and `viewport` are the
    /// canvas rect in CSS pixels.
    pub fn update(&self, snapshot: &SceneSnapshot, origin: Vec2, viewport: Vec2) {
        let lens = Lens::default().with_viewport(viewport.x, viewport.y);
        for (el, frame) in self.labels.iter().zip(&snapshot.frames) {
            let anchor = frame.transform.transform_point3(LABEL_ANCHOR);
            let screen = lens.project(&snapshot.camera, anchor, viewport);
            let style = el.style();
            let shown = frame.label_visible && !frame.label_occluded;
            match label_placement(screen, shown) {
                Some(p) => {
                    _ = style.set_property("display", "block");
                    _ = style.set_property("left", &format!("{:.1}px", origin.x + p.left));
                    _ = style.set_property("top", &format!("{:.1}px", origin.y + p.top));
                    _ = style.set_property("font-size", &format!("{:.2}px", p.font_px));
                    _ = style.set_property("max-width", &format!("{:.1}px", p.max_width_px));
                }
                None => {
                    _ = style.set_property("display", "none");
                }
            }
        }
    }
}
