use crate::constants::{GROUND_THICKNESS, IMAGE_THICKNESS, INSTANCES_PER_FRAME};
use gallery_core::color::srgb_hex;
use gallery_core::constants::{
    BORDER_OFFSET, BORDER_SCALE, FRAME_BODY_HEX, GROUND_HEX, GROUND_SIZE, IMAGE_OFFSET,
};
use gallery_core::frame_spec::FrameSpec;
use gallery_core::scene::SceneSnapshot;
use glam::{Affine3A, Mat4, Quat, Vec3};

// Shading modes, read from `params.x` in the shader.
pub const KIND_LIT: f32 = 0.0;
pub const KIND_UNLIT: f32 = 1.0;
pub const KIND_IMAGE: f32 = 2.0;

#[repr(C)]
#[derive(Copy, Clone, Debug, bytemuck::Pod, bytemuck::Zeroable)]
pub struct Vertex {
    pub position: [f32; 3],
    pub normal: [f32; 3],
    pub uv: [f32; 2],
}

impl Vertex {
    const ATTRIBUTES: [wgpu::VertexAttribute; 3] =
        wgpu::vertex_attr_array![0 => Float32x3, 1 => Float32x3, 2 => Float32x2];

    pub fn layout() -> wgpu::VertexBufferLayout<'static> {
        wgpu::VertexBufferLayout {
            array_stride: std::mem::size_of::<Vertex>() as u64,
            step_mode: wgpu::VertexStepMode::Vertex,
            attributes: &Self::ATTRIBUTES,
        }
    }
}

/// Per-instance data: model matrix columns, linear colour, shading params
/// `(kind, zoom, seed, fogged)`.
#[repr(C)]
#[derive(Copy, Clone, Debug, bytemuck::Pod, bytemuck::Zeroable)]
pub struct InstanceRaw {
    pub model: [[f32; 4]; 4],
    pub color: [f32; 4],
    pub params: [f32; 4],
}

impl InstanceRaw {
    const ATTRIBUTES: [wgpu::VertexAttribute; 6] = wgpu::vertex_attr_array![
        3 => Float32x4,
        4 => Float32x4,
        5 => Float32x4,
        6 => Float32x4,
        7 => Float32x4,
        8 => Float32x4
    ];

    pub fn layout() -> wgpu::VertexBufferLayout<'static> {
        wgpu::VertexBufferLayout {
            array_stride: std::mem::size_of::<InstanceRaw>() as u64,
            step_mode: wgpu::VertexStepMode::Instance,
            attributes: &Self::ATTRIBUTES,
        }
    }

    fn new(transform: Affine3A, color: Vec3, kind: f32, zoom: f32, seed: f32, fogged: bool) -> Self {
        Self {
            model: Mat4::from(transform).to_cols_array_2d(),
            color: color.extend(1.0).to_array(),
            params: [kind, zoom, seed, if fogged { 1.0 } else { 0.0 }],
        }
    }
}

/// Unit cube centred on the origin, one quad per face so normals and UVs stay flat.
pub fn unit_cube() -> (Vec<Vertex>, Vec<u16>) {
    // (normal, u axis, v axis); u runs left→right, v top→bottom when facing the normal
    let faces: [([f32; 3], [f32; 3], [f32; 3]); 6] = [
        ([0.0, 0.0, 1.0], [1.0, 0.0, 0.0], [0.0, -1.0, 0.0]),
        ([0.0, 0.0, -1.0], [-1.0, 0.0, 0.0], [0.0, -1.0, 0.0]),
        ([1.0, 0.0, 0.0], [0.0, 0.0, -1.0], [0.0, -1.0, 0.0]),
        ([-1.0, 0.0, 0.0], [0.0, 0.0, 1.0], [0.0, -1.0, 0.0]),
        ([0.0, 1.0, 0.0], [1.0, 0.0, 0.0], [0.0, 0.0, 1.0]),
        ([0.0, -1.0, 0.0], [1.0, 0.0, 0.0], [0.0, 0.0, -1.0]),
    ];
    let mut vertices = Vec::with_capacity(24);
    let mut indices = Vec::with_capacity(36);
    for (n, u, v) in faces {
        let (n, u, v) = (Vec3::from(n), Vec3::from(u), Vec3::from(v));
        let base = vertices.len() as u16;
        for (su, sv) in [(0.0, 0.0), (1.0, 0.0), (1.0, 1.0), (0.0, 1.0)] {
            let p = n * 0.5 + u * (su - 0.5) + v * (sv - 0.5);
            vertices.push(Vertex {
                position: p.to_array(),
                normal: n.to_array(),
                uv: [su, sv],
            });
        }
        // (u × v) points along -n, so this winding is counter-clockwise seen from outside
        indices.extend_from_slice(&[base, base + 2, base + 1, base, base + 3, base + 2]);
    }
    (vertices, indices)
}

/// Flat ground slab whose top face sits at `origin`.
pub fn ground_instance(origin: Vec3) -> InstanceRaw {
    let transform = Affine3A::from_scale_rotation_translation(
        Vec3::new(GROUND_SIZE, GROUND_THICKNESS, GROUND_SIZE),
        Quat::IDENTITY,
        origin - Vec3::Y * (GROUND_THICKNESS * 0.5),
    );
    InstanceRaw::new(transform, srgb_hex(GROUND_HEX), KIND_LIT, 0.0, 0.0, true)
}

/// Ground plus body, border and image panel for every frame in the snapshot.
pub fn build_instances(snapshot: &SceneSnapshot, ground_origin: Vec3) -> Vec<InstanceRaw> {
    let mut out = Vec::with_capacity(1 + snapshot.frames.len() * INSTANCES_PER_FRAME);
    out.push(ground_instance(ground_origin));
    let body_color = srgb_hex(FRAME_BODY_HEX);
    for frame in &snapshot.frames {
        let body = frame.transform * FrameSpec::body_local_transform();
        let border = body
            * Affine3A::from_scale_rotation_translation(BORDER_SCALE, Quat::IDENTITY, BORDER_OFFSET);
        let image = body
            * Affine3A::from_scale_rotation_translation(
                Vec3::new(frame.image_scale.x, frame.image_scale.y, IMAGE_THICKNESS),
                Quat::IDENTITY,
                IMAGE_OFFSET,
            );
        out.push(InstanceRaw::new(body, body_color, KIND_LIT, 0.0, 0.0, true));
        out.push(InstanceRaw::new(border, frame.border_color, KIND_UNLIT, 0.0, 0.0, false));
        out.push(InstanceRaw::new(
            image,
            Vec3::ONE,
            KIND_IMAGE,
            frame.image_zoom,
            frame.phase,
            true,
        ));
    }
    out
}
