//! Frame-rate independent exponential damping.
//!
//! Every helper is a pure function of `(current, target, tau, dt)`: the value
//! covers the fraction `1 - exp(-dt / tau)` of the remaining distance, so two
//! half-steps land exactly where one full step would. Unlike a spring there is
//! no velocity state and no overshoot.

use glam::{Quat, Vec3};

/// Fraction of the remaining distance covered in `dt` seconds.
///
/// Returns 0 for non-positive or non-finite `dt` and 1 for a non-positive
/// time constant (snap).
#[inline]
pub fn damp_alpha(tau: f32, dt: f32) -> f32 {
    if !dt.is_finite() || dt <= 0.0 {
        return 0.0;
    }
    if tau <= 0.0 {
        return 1.0;
    }
    1.0 - (-dt / tau).exp()
}

#[inline]
pub fn damp_vec3(current: Vec3, target: Vec3, tau: f32, dt: f32) -> Vec3 {
    current.lerp(target, damp_alpha(tau, dt))
}

/// Linear RGB colours damp per channel exactly like positions.
#[inline]
pub fn damp_color(current: Vec3, target: Vec3, tau: f32, dt: f32) -> Vec3 {
    damp_vec3(current, target, tau, dt)
}

/// Damp an orientation along the shortest arc.
pub fn damp_quat(current: Quat, target: Quat, tau: f32, dt: f32) -> Quat {
    let alpha = damp_alpha(tau, dt);
    if alpha <= 0.0 {
        return current;
    }
    // slerp picks the short way round when the dot product is negative
    current.slerp(target, alpha).normalize()
}
