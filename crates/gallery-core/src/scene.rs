//! Gallery composition: layout, per-frame visuals and the focus controller,
//! advanced together once per rendered frame.
//!
//! Input handlers mutate state immediately; `advance` lets damping pick up the
//! new targets; `snapshot` hands the renderer everything it needs to draw,
//! decoupled from how the state changed.

use crate::camera::{CameraPose, Ray};
use crate::constants::LABEL_ANCHOR;
use crate::focus::{FocusController, FocusState};
use crate::gallery::Gallery;
use crate::location::LocationProvider;
use crate::picking::{line_of_sight_blocked, pick_frame};
use crate::visual::FrameVisual;
use glam::{Affine3A, Vec3};
use rand::Rng;

/// Render state of one frame for the current tick.
#[derive(Clone, Debug)]
pub struct FrameAppearance {
    pub identifier: String,
    /// Frame-local to world space.
    pub transform: Affine3A,
    pub image_scale: Vec3,
    pub image_zoom: f32,
    /// Fixed zoom phase in `[0, 1)`; also seeds the image placeholder.
    pub phase: f32,
    /// Linear RGB.
    pub border_color: Vec3,
    pub hovered: bool,
    pub label_visible: bool,
    /// Another frame stands between the camera and the label anchor.
    pub label_occluded: bool,
}

/// Everything drawn this tick. The camera pose is a copy; writing to it has no effect.
#[derive(Clone, Debug)]
pub struct SceneSnapshot {
    pub camera: CameraPose,
    pub elapsed: f32,
    pub frames: Vec<FrameAppearance>,
}

pub struct GallerySceneBuilder {
    gallery: Gallery,
    phases: Option<Vec<f32>>,
    initial_camera: CameraPose,
}

impl GallerySceneBuilder {
    pub fn new(gallery: Gallery) -> Self {
        Self {
            gallery,
            phases: None,
            initial_camera: CameraPose::initial(),
        }
    }

    /// Fix the zoom phase of each frame instead of drawing them at random.
    /// Missing entries fall back to 0.
    pub fn phases(mut self, phases: Vec<f32>) -> Self {
        self.phases = Some(phases);
        self
    }

    pub fn initial_camera(mut self, pose: CameraPose) -> Self {
        self.initial_camera = pose;
        self
    }

    pub fn build_with_rng(self, rng: &mut impl Rng) -> GalleryScene {
        let visuals = match &self.phases {
            Some(phases) => self
                .gallery
                .iter()
                .enumerate()
                .map(|(i, f)| {
                    FrameVisual::new(f.identifier(), phases.get(i).copied().unwrap_or(0.0))
                })
                .collect(),
            None => self
                .gallery
                .iter()
                .map(|f| FrameVisual::with_random_phase(f.identifier(), &mut *rng))
                .collect(),
        };
        GalleryScene {
            gallery: self.gallery,
            visuals,
            focus: FocusController::new(self.initial_camera),
            hovered: None,
            elapsed: 0.0,
        }
    }

    pub fn build(self) -> GalleryScene {
        self.build_with_rng(&mut rand::thread_rng())
    }
}

pub struct GalleryScene {
    gallery: Gallery,
    visuals: Vec<FrameVisual>,
    focus: FocusController,
    hovered: Option<usize>,
    elapsed: f32,
}

impl GalleryScene {
    pub fn gallery(&self) -> &Gallery {
        &self.gallery
    }

    pub fn visuals(&self) -> &[FrameVisual] {
        &self.visuals
    }

    pub fn focus(&self) -> &FocusState {
        self.focus.state()
    }

    pub fn focused(&self) -> Option<&str> {
        self.focus.focused()
    }

    pub fn camera(&self) -> CameraPose {
        self.focus.camera()
    }

    pub fn target_camera(&self) -> CameraPose {
        self.focus.target()
    }

    pub fn hovered(&self) -> Option<usize> {
        self.hovered
    }

    pub fn elapsed(&self) -> f32 {
        self.elapsed
    }

    /// Any frame under the pointer; the frontend shows a pointer cursor.
    pub fn cursor_active(&self) -> bool {
        self.hovered.is_some()
    }

    pub fn pick(&self, ray: &Ray) -> Option<usize> {
        pick_frame(&self.gallery, ray).map(|(i, _)| i)
    }

    /// The location changed (startup, back/forward, deep link).
    pub fn sync_location<L: LocationProvider + ?Sized>(&mut self, location: &L) {
        self.focus.sync(&self.gallery, location);
    }

    /// The pointer now rests over `hit` (or nothing). Only the nearest frame is hovered.
    pub fn pointer_moved(&mut self, hit: Option<usize>) {
        let hit = hit.filter(|&i| i < self.visuals.len());
        if hit == self.hovered {
            return;
        }
        if let Some(prev) = self.hovered.take() {
            self.visuals[prev].pointer_leave();
        }
        if let Some(i) = hit {
            self.visuals[i].pointer_enter();
        }
        self.hovered = hit;
    }

    pub fn pointer_left(&mut self) {
        self.pointer_moved(None);
    }

    /// A click resolves to exactly one of: a frame click, or a miss.
    pub fn click<L: LocationProvider + ?Sized>(&mut self, hit: Option<usize>, location: &mut L) {
        let clicked = hit
            .and_then(|i| self.visuals.get(i))
            .map(|v| v.click().to_string());
        match clicked {
            Some(id) => {
                log::info!("[click] frame {id}");
                self.focus.click(&id, &self.gallery, location);
            }
            None => self.dismiss(location),
        }
    }

    /// Release focus as if the pointer missed every frame.
    pub fn dismiss<L: LocationProvider + ?Sized>(&mut self, location: &mut L) {
        self.focus.miss(&self.gallery, location);
    }

    pub fn advance(&mut self, dt: f32) {
        if dt.is_finite() && dt > 0.0 {
            self.elapsed += dt;
        }
        self.focus.advance(dt);
        let focused = self.focus.focused();
        for v in &mut self.visuals {
            v.advance(dt, self.elapsed, focused);
        }
    }

    pub fn snapshot(&self) -> SceneSnapshot {
        let focused = self.focus.focused();
        let camera = self.focus.camera();
        let frames = self
            .visuals
            .iter()
            .enumerate()
            .map(|(i, v)| {
                let transform = self.gallery.world_transform(i).unwrap_or(Affine3A::IDENTITY);
                let anchor = transform.transform_point3(LABEL_ANCHOR);
                FrameAppearance {
                    identifier: v.identifier().to_string(),
                    transform,
                    image_scale: v.image_scale(),
                    image_zoom: v.zoom(),
                    phase: v.phase(),
                    border_color: v.border_color(),
                    hovered: v.hovered(),
                    label_visible: v.label_visible(focused),
                    label_occluded: line_of_sight_blocked(
                        &self.gallery,
                        camera.position,
                        anchor,
                        i,
                    ),
                }
            })
            .collect();
        SceneSnapshot {
            camera,
            elapsed: self.elapsed,
            frames,
        }
    }
}
