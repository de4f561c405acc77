use glam::Vec3;

// Shared layout/animation tuning constants used by the gallery core and the web frontend.

pub const GOLDEN_RATIO: f32 = 1.618_034;

// Frame geometry (frame-local units)
pub const FRAME_BODY_SCALE: Vec3 = Vec3::new(1.0, GOLDEN_RATIO, 0.05);
pub const FRAME_BODY_OFFSET: Vec3 = Vec3::new(0.0, GOLDEN_RATIO / 2.0, 0.0); // body centre above the frame origin
pub const BORDER_SCALE: Vec3 = Vec3::new(0.9, 0.93, 0.9); // relative to the body
pub const BORDER_OFFSET: Vec3 = Vec3::new(0.0, 0.0, 0.2);
pub const IMAGE_OFFSET: Vec3 = Vec3::new(0.0, 0.0, 0.7);

// Image scale relative to the body, and the extra shrink applied while hovered
pub const IMAGE_SCALE: Vec3 = Vec3::new(0.85, 0.9, 1.0);
pub const HOVER_SHRINK: Vec3 = Vec3::new(0.85, 0.905, 1.0);

// Label anchor (top-left of the text block) and world-space font size
pub const LABEL_ANCHOR: Vec3 = Vec3::new(0.55, GOLDEN_RATIO, 0.0);
pub const LABEL_FONT_SIZE: f32 = 0.025;
pub const LABEL_MAX_WIDTH: f32 = 0.2;

// Camera
pub const INITIAL_CAMERA_POSITION: Vec3 = Vec3::new(0.0, 2.0, 15.0);
pub const DEFAULT_STANDOFF: Vec3 = Vec3::new(0.0, 0.0, 5.5); // unfocused "centered, pulled back" framing
pub const FOCUS_FORWARD_OFFSET: f32 = 1.25; // distance in front of a focused frame
pub const CAMERA_FOV_Y_DEGREES: f32 = 70.0;
pub const CAMERA_ZNEAR: f32 = 0.1;
pub const CAMERA_ZFAR: f32 = 1000.0;

// Damping time constants (seconds)
pub const CAMERA_DAMP_TAU: f32 = 0.4;
pub const VISUAL_DAMP_TAU: f32 = 0.1;

// Image zoom pulse: ZOOM_BASE + sin(phase * ZOOM_PHASE_SPREAD + t / ZOOM_TIME_DIVISOR) * ZOOM_AMPLITUDE
pub const ZOOM_BASE: f32 = 2.0;
pub const ZOOM_AMPLITUDE: f32 = 0.5;
pub const ZOOM_PHASE_SPREAD: f32 = 10_000.0;
pub const ZOOM_TIME_DIVISOR: f32 = 3.0;

// Palette (sRGB hex; convert with `color::srgb_hex`)
pub const BACKGROUND_HEX: u32 = 0xb6_04_04;
pub const GROUND_HEX: u32 = 0x05_05_05;
pub const FRAME_BODY_HEX: u32 = 0x15_15_15;
pub const BORDER_NEUTRAL_HEX: u32 = 0xff_ff_ff;
pub const BORDER_HOVER_HEX: u32 = 0xff_a5_00; // orange

// Scene dressing
pub const GALLERY_ORIGIN: Vec3 = Vec3::new(0.0, -0.5, 0.0);
pub const GROUND_SIZE: f32 = 50.0;
pub const FOG_NEAR: f32 = 0.0;
pub const FOG_FAR: f32 = 15.0;
