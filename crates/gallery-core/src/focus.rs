//! Focus state machine and camera damping.
//!
//! The focused frame is derived from the navigable location and nothing else.
//! Clicks and misses only ever write the location, then re-derive from it, so
//! a location change from anywhere (click, back/forward, deep link) funnels
//! through the same [`FocusController::sync`] path.

use crate::camera::CameraPose;
use crate::constants::{CAMERA_DAMP_TAU, FOCUS_FORWARD_OFFSET, GOLDEN_RATIO};
use crate::damping::{damp_quat, damp_vec3};
use crate::gallery::Gallery;
use crate::location::{item_path, LocationProvider, ROOT_PATH};
use glam::Vec3;

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum FocusState {
    #[default]
    Unfocused,
    Focused(String),
}

impl FocusState {
    pub fn identifier(&self) -> Option<&str> {
        match self {
            FocusState::Unfocused => None,
            FocusState::Focused(id) => Some(id),
        }
    }
}

/// Resolve a raw location id against the layout. Unknown ids mean no focus.
pub fn resolve_focus(gallery: &Gallery, item_id: Option<&str>) -> FocusState {
    let Some(id) = item_id else {
        return FocusState::Unfocused;
    };
    match gallery.find(id) {
        Some(frame) => FocusState::Focused(frame.identifier().to_string()),
        None => {
            log::debug!("[focus] no frame for id {id}, staying unfocused");
            FocusState::Unfocused
        }
    }
}

/// Where the camera should end up for a given focus.
///
/// Focused: just in front of the frame at half its height, looking the way the
/// frame faces. Everything else: the default standoff.
pub fn target_pose(gallery: &Gallery, focus: &FocusState) -> CameraPose {
    let Some(index) = focus.identifier().and_then(|id| gallery.index_of(id)) else {
        return CameraPose::standoff();
    };
    match (gallery.world_transform(index), gallery.world_orientation(index)) {
        (Some(world), Some(orientation)) => {
            let eye = Vec3::new(0.0, GOLDEN_RATIO / 2.0, FOCUS_FORWARD_OFFSET);
            CameraPose::new(world.transform_point3(eye), orientation)
        }
        _ => CameraPose::standoff(),
    }
}

pub struct FocusController {
    state: FocusState,
    actual: CameraPose,
    target: CameraPose,
    tau: f32,
}

impl Default for FocusController {
    fn default() -> Self {
        Self::new(CameraPose::initial())
    }
}

impl FocusController {
    pub fn new(initial: CameraPose) -> Self {
        Self {
            state: FocusState::Unfocused,
            actual: initial,
            target: CameraPose::standoff(),
            tau: CAMERA_DAMP_TAU,
        }
    }

    pub fn state(&self) -> &FocusState {
        &self.state
    }

    pub fn focused(&self) -> Option<&str> {
        self.state.identifier()
    }

    /// Snapshot of the pose the renderer should use this frame.
    pub fn camera(&self) -> CameraPose {
        self.actual
    }

    pub fn target(&self) -> CameraPose {
        self.target
    }

    /// Re-derive focus and target pose from the location. Never writes back.
    pub fn sync<L: LocationProvider + ?Sized>(&mut self, gallery: &Gallery, location: &L) {
        let item = location.item_id();
        let next = resolve_focus(gallery, item.as_deref());
        if next != self.state {
            log::debug!("[focus] {:?} -> {:?}", self.state, next);
        }
        self.state = next;
        self.target = target_pose(gallery, &self.state);
    }

    /// A frame was clicked: toggle it off if it is the focused one, focus it otherwise.
    pub fn click<L: LocationProvider + ?Sized>(
        &mut self,
        identifier: &str,
        gallery: &Gallery,
        location: &mut L,
    ) {
        let path = if self.focused() == Some(identifier) {
            ROOT_PATH.to_string()
        } else {
            item_path(identifier)
        };
        write_location(location, &path);
        self.sync(gallery, location);
    }

    /// The pointer hit nothing: always release focus.
    pub fn miss<L: LocationProvider + ?Sized>(&mut self, gallery: &Gallery, location: &mut L) {
        write_location(location, ROOT_PATH);
        self.sync(gallery, location);
    }

    /// Damp the actual pose toward the target by `dt` seconds.
    pub fn advance(&mut self, dt: f32) {
        self.actual.position = damp_vec3(self.actual.position, self.target.position, self.tau, dt);
        self.actual.orientation =
            damp_quat(self.actual.orientation, self.target.orientation, self.tau, dt);
    }
}

fn write_location<L: LocationProvider + ?Sized>(location: &mut L, path: &str) {
    if location.current_path() != path {
        location.navigate(path);
    }
}
