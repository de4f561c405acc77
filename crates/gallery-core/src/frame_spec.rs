use crate::constants::{FRAME_BODY_OFFSET, FRAME_BODY_SCALE};
use glam::{Affine3A, Quat, Vec3};
use smallvec::SmallVec;
use uuid::Uuid;

/// Derive the routing identifier for an image source.
///
/// A name-based (version 5) UUID in the URL namespace, lowercase and
/// hyphenated, so it is stable across runs and platforms.
pub fn frame_identifier(image_source: &str) -> String {
    Uuid::new_v5(&Uuid::NAMESPACE_URL, image_source.as_bytes())
        .hyphenated()
        .to_string()
}

/// One exhibit: where it hangs, which way it faces, what it shows.
#[derive(Clone, Debug, PartialEq)]
pub struct FrameSpec {
    identifier: String,
    image_source: String,
    pub position: Vec3,
    /// Euler angles in radians, applied in X, Y, Z order.
    pub rotation: Vec3,
    pub label: String,
}

impl FrameSpec {
    pub fn new(
        image_source: impl Into<String>,
        position: Vec3,
        rotation: Vec3,
        label: impl Into<String>,
    ) -> Self {
        let image_source = image_source.into();
        Self {
            identifier: frame_identifier(&image_source),
            image_source,
            position,
            rotation,
            label: label.into(),
        }
    }

    pub fn identifier(&self) -> &str {
        &self.identifier
    }

    pub fn image_source(&self) -> &str {
        &self.image_source
    }

    pub fn orientation(&self) -> Quat {
        Quat::from_rotation_x(self.rotation.x)
            * Quat::from_rotation_y(self.rotation.y)
            * Quat::from_rotation_z(self.rotation.z)
    }

    /// Frame-local to layout space.
    pub fn local_transform(&self) -> Affine3A {
        Affine3A::from_rotation_translation(self.orientation(), self.position)
    }

    /// Transform of the unit box that forms the frame body, in frame-local space.
    pub fn body_local_transform() -> Affine3A {
        Affine3A::from_scale_rotation_translation(FRAME_BODY_SCALE, Quat::IDENTITY, FRAME_BODY_OFFSET)
    }

    pub fn label_lines(&self) -> SmallVec<[&str; 4]> {
        self.label.lines().collect()
    }
}
