use gallery_core::location::{LocationProvider, ROOT_PATH};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys as web;

/// Normalize a deploy base path: leading slash, no trailing slash, "" for the site root.
pub fn normalize_base(base: &str) -> String {
    let trimmed = base.trim_matches('/');
    if trimmed.is_empty() {
        String::new()
    } else {
        format!("/{trimmed}")
    }
}

/// Route path as seen by the gallery, with the deploy base removed.
pub fn strip_base(base: &str, pathname: &str) -> String {
    let rest = match pathname.strip_prefix(base) {
        Some(rest) if rest.is_empty() || rest.starts_with('/') => rest,
        _ => return pathname_or_root(pathname),
    };
    pathname_or_root(rest)
}

/// Browser pathname for a gallery route.
pub fn join_base(base: &str, path: &str) -> String {
    if path == ROOT_PATH && !base.is_empty() {
        format!("{base}/")
    } else {
        format!("{base}{path}")
    }
}

fn pathname_or_root(path: &str) -> String {
    if path.is_empty() {
        ROOT_PATH.to_string()
    } else {
        path.to_string()
    }
}

/// `history.pushState` / `location.pathname` under an optional base path.
pub struct BrowserLocation {
    base: String,
}

impl BrowserLocation {
    pub fn new(base: &str) -> Self {
        Self {
            base: normalize_base(base),
        }
    }
}

impl LocationProvider for BrowserLocation {
    fn current_path(&self) -> String {
        web::window()
            .and_then(|w| w.location().pathname().ok())
            .map(|p| strip_base(&self.base, &p))
            .unwrap_or_else(|| ROOT_PATH.to_string())
    }

    fn navigate(&mut self, path: &str) {
        let url = join_base(&self.base, path);
        let history = match web::window().map(|w| w.history()) {
            Some(Ok(h)) => h,
            _ => {
                log::warn!("[location] history unavailable, dropping navigation to {url}");
                return;
            }
        };
        if let Err(e) = history.push_state_with_url(&JsValue::NULL, "", Some(&url)) {
            log::warn!("[location] pushState {url} failed: {:?}", e);
        }
    }
}

/// Run `handler` on back/forward navigation.
pub fn wire_popstate(mut handler: impl FnMut() + 'static) {
    let closure = Closure::wrap(Box::new(move || handler()) as Box<dyn FnMut()>);
    if let Some(window) = web::window() {
        _ = window.add_event_listener_with_callback("popstate", closure.as_ref().unchecked_ref());
    }
    closure.forget();
}
