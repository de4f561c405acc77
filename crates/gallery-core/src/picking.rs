use crate::camera::Ray;
use crate::gallery::Gallery;
use glam::{Affine3A, Vec3};

/// Intersect a ray with the unit cube (`[-0.5, 0.5]^3`) placed by `transform`.
///
/// The ray is carried into box space unnormalized, so the returned `t` is in
/// world units along the original ray. A ray starting inside the box hits at 0.
pub fn ray_box(ray: &Ray, transform: &Affine3A) -> Option<f32> {
    let inv = transform.inverse();
    let o = inv.transform_point3(ray.origin);
    let d = inv.transform_vector3(ray.direction);
    let mut t_min = f32::NEG_INFINITY;
    let mut t_max = f32::INFINITY;
    for axis in 0..3 {
        let (oa, da) = (o[axis], d[axis]);
        if da.abs() < 1e-9 {
            if !(-0.5..=0.5).contains(&oa) {
                return None;
            }
            continue;
        }
        let t0 = (-0.5 - oa) / da;
        let t1 = (0.5 - oa) / da;
        t_min = t_min.max(t0.min(t1));
        t_max = t_max.min(t0.max(t1));
        if t_min > t_max {
            return None;
        }
    }
    if t_max < 0.0 {
        return None;
    }
    Some(t_min.max(0.0))
}

/// Nearest frame whose body the ray hits, as `(index, distance)`.
pub fn pick_frame(gallery: &Gallery, ray: &Ray) -> Option<(usize, f32)> {
    let mut best = None::<(usize, f32)>;
    for i in 0..gallery.len() {
        let Some(body) = gallery.body_transform(i) else {
            continue;
        };
        if let Some(t) = ray_box(ray, &body) {
            match best {
                Some((_, bt)) if t >= bt => {}
                _ => best = Some((i, t)),
            }
        }
    }
    best
}

/// True when another frame's body sits between `from` and `to`.
/// Frame `skip` (the one `to` belongs to) never blocks.
pub fn line_of_sight_blocked(gallery: &Gallery, from: Vec3, to: Vec3, skip: usize) -> bool {
    let distance = from.distance(to);
    if distance <= f32::EPSILON {
        return false;
    }
    let ray = ray_towards(from, to);
    (0..gallery.len())
        .filter(|&i| i != skip)
        .filter_map(|i| gallery.body_transform(i))
        .any(|body| ray_box(&ray, &body).is_some_and(|t| t < distance))
}

#[inline]
pub fn ray_towards(origin: Vec3, target: Vec3) -> Ray {
    Ray {
        origin,
        direction: (target - origin).normalize(),
    }
}
