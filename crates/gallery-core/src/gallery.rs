//! Static arrangement of every frame in the hall.

use crate::frame_spec::FrameSpec;
use fnv::FnvHashMap;
use glam::{Affine3A, Quat, Vec3};
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum GalleryError {
    #[error("frames {first} and {second} share identifier {identifier} (source {image_source})")]
    DuplicateIdentifier {
        identifier: String,
        image_source: String,
        first: usize,
        second: usize,
    },
}

/// Ordered, immutable collection of [`FrameSpec`]s with an identifier index.
///
/// Order only matters for presentation; lookups go through the identifier.
#[derive(Clone, Debug)]
pub struct Gallery {
    frames: Vec<FrameSpec>,
    index: FnvHashMap<String, usize>,
    origin: Vec3,
}

impl Gallery {
    pub fn new(frames: Vec<FrameSpec>) -> Result<Self, GalleryError> {
        let mut index = FnvHashMap::default();
        for (i, f) in frames.iter().enumerate() {
            if let Some(&first) = index.get(f.identifier()) {
                return Err(GalleryError::DuplicateIdentifier {
                    identifier: f.identifier().to_string(),
                    image_source: f.image_source().to_string(),
                    first,
                    second: i,
                });
            }
            index.insert(f.identifier().to_string(), i);
        }
        log::info!("[gallery] {} frames", frames.len());
        Ok(Self {
            frames,
            index,
            origin: Vec3::ZERO,
        })
    }

    /// Mount the whole layout at `origin` in world space.
    pub fn with_origin(mut self, origin: Vec3) -> Self {
        self.origin = origin;
        self
    }

    pub fn origin(&self) -> Vec3 {
        self.origin
    }

    pub fn len(&self) -> usize {
        self.frames.len()
    }

    pub fn is_empty(&self) -> bool {
        self.frames.is_empty()
    }

    pub fn frames(&self) -> &[FrameSpec] {
        &self.frames
    }

    pub fn iter(&self) -> impl Iterator<Item = &FrameSpec> {
        self.frames.iter()
    }

    pub fn get(&self, index: usize) -> Option<&FrameSpec> {
        self.frames.get(index)
    }

    pub fn index_of(&self, identifier: &str) -> Option<usize> {
        self.index.get(identifier).copied()
    }

    pub fn find(&self, identifier: &str) -> Option<&FrameSpec> {
        self.index_of(identifier).and_then(|i| self.frames.get(i))
    }

    /// Frame-local to world space.
    pub fn world_transform(&self, index: usize) -> Option<Affine3A> {
        let frame = self.frames.get(index)?;
        Some(Affine3A::from_translation(self.origin) * frame.local_transform())
    }

    /// The direction a frame faces, in world space. The layout origin never rotates.
    pub fn world_orientation(&self, index: usize) -> Option<Quat> {
        self.frames.get(index).map(FrameSpec::orientation)
    }

    /// World transform of the unit box forming a frame's body.
    pub fn body_transform(&self, index: usize) -> Option<Affine3A> {
        self.world_transform(index)
            .map(|w| w * FrameSpec::body_local_transform())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn spec(src: &str, x: f32) -> FrameSpec {
        FrameSpec::new(src, Vec3::new(x, 0.0, 0.0), Vec3::ZERO, "label")
    }

    #[test]
    fn duplicate_sources_are_rejected() {
        let err = Gallery::new(vec![spec("a", 0.0), spec("b", 1.0), spec("a", 2.0)]).unwrap_err();
        match err {
            GalleryError::DuplicateIdentifier {
                image_source,
                first,
                second,
                ..
            } => {
                assert_eq!(image_source, "a");
                assert_eq!((first, second), (0, 2));
            }
        }
    }

    #[test]
    fn lookup_by_identifier() {
        let g = Gallery::new(vec![spec("a", 0.0), spec("b", 1.0)]).unwrap();
        let id = g.frames()[1].identifier().to_string();
        assert_eq!(g.index_of(&id), Some(1));
        assert_eq!(g.find(&id).map(|f| f.position.x), Some(1.0));
        assert_eq!(g.index_of("missing"), None);
    }

    #[test]
    fn origin_offsets_world_transform() {
        let g = Gallery::new(vec![spec("a", 2.0)])
            .unwrap()
            .with_origin(Vec3::new(0.0, -0.5, 0.0));
        let p = g.world_transform(0).unwrap().transform_point3(Vec3::ZERO);
        assert!(p.abs_diff_eq(Vec3::new(2.0, -0.5, 0.0), 1e-6));
    }
}
