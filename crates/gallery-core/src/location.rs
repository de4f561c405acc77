//! Navigable location abstraction.
//!
//! The gallery never parses URLs itself: it asks the provider for the current
//! `/item/:id` match and hands it whole paths to navigate to.

pub const ROOT_PATH: &str = "/";
const ITEM_PREFIX: &str = "/item/";

/// Path that deep-links to one frame.
pub fn item_path(identifier: &str) -> String {
    format!("{ITEM_PREFIX}{identifier}")
}

/// Match `/item/:id` (an optional trailing slash is accepted) and extract `id`.
pub fn match_item(path: &str) -> Option<&str> {
    let rest = path.strip_prefix(ITEM_PREFIX)?;
    let id = rest.strip_suffix('/').unwrap_or(rest);
    if id.is_empty() || id.contains('/') {
        return None;
    }
    Some(id)
}

pub trait LocationProvider {
    fn current_path(&self) -> String;
    fn navigate(&mut self, path: &str);

    fn item_id(&self) -> Option<String> {
        match_item(&self.current_path()).map(str::to_string)
    }
}

/// In-memory history stack with browser-like back/forward.
#[derive(Clone, Debug)]
pub struct MemoryLocation {
    history: Vec<String>,
    current: usize,
}

impl Default for MemoryLocation {
    fn default() -> Self {
        Self::new(ROOT_PATH)
    }
}

impl MemoryLocation {
    pub fn new(path: &str) -> Self {
        Self {
            history: vec![path.to_string()],
            current: 0,
        }
    }

    pub fn len(&self) -> usize {
        self.history.len()
    }

    pub fn is_empty(&self) -> bool {
        self.history.is_empty()
    }

    /// Step one entry back; returns false at the start of history.
    pub fn back(&mut self) -> bool {
        self.shift_history(-1)
    }

    /// Step one entry forward; returns false at the end of history.
    pub fn forward(&mut self) -> bool {
        self.shift_history(1)
    }

    fn shift_history(&mut self, delta: isize) -> bool {
        let next = self.current as isize + delta;
        if next < 0 || next as usize >= self.history.len() {
            return false;
        }
        self.current = next as usize;
        true
    }
}

impl LocationProvider for MemoryLocation {
    fn current_path(&self) -> String {
        self.history[self.current].clone()
    }

    fn navigate(&mut self, path: &str) {
        self.history.truncate(self.current + 1);
        self.history.push(path.to_string());
        self.current = self.history.len() - 1;
    }
}
