use glam::Vec3;

/// Convert one sRGB-encoded channel in `[0, 1]` to linear light.
#[inline]
pub fn srgb_to_linear(c: f32) -> f32 {
    if c <= 0.040_45 {
        c / 12.92
    } else {
        ((c + 0.055) / 1.055).powf(2.4)
    }
}

/// Decode a `0xRRGGBB` sRGB colour into linear RGB.
///
/// All colour damping and shading happens in linear space; the surface format
/// takes care of re-encoding on output.
pub fn srgb_hex(hex: u32) -> Vec3 {
    let r = ((hex >> 16) & 0xff) as f32 / 255.0;
    let g = ((hex >> 8) & 0xff) as f32 / 255.0;
    let b = (hex & 0xff) as f32 / 255.0;
    Vec3::new(srgb_to_linear(r), srgb_to_linear(g), srgb_to_linear(b))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn white_and_black_are_fixed_points() {
        assert_eq!(srgb_hex(0xffffff), Vec3::ONE);
        assert_eq!(srgb_hex(0x000000), Vec3::ZERO);
    }

    #[test]
    fn orange_decodes_to_linear() {
        let c = srgb_hex(0xffa500);
        assert!((c.x - 1.0).abs() < 1e-6);
        assert!((c.y - 0.3763).abs() < 1e-3);
        assert_eq!(c.z, 0.0);
    }
}
