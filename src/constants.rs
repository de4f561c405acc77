/// Browser-side tuning for the gallery front end.
///
/// Layout and animation constants shared with the host-testable core live in
/// `gallery_core::constants`; everything here only matters once a canvas and
/// a DOM exist.
// Mount points
pub const CANVAS_ID: &str = "app-canvas";
pub const BASE_PATH: &str = ""; // deploy under a sub-path, e.g. "/hall"

// Device pixel ratio clamp for the canvas backing store
pub const DPR_MIN: f64 = 1.0;
pub const DPR_MAX: f64 = 1.5;

// Longest step fed to damping; a backgrounded tab resumes without a jump
pub const MAX_FRAME_DT: f32 = 0.1;

// Overlays
pub const HEADER_ID: &str = "hall-header";
pub const HEADER_TITLE: &str = "THE HERALD HALL";
pub const HEADER_SUBTITLE: &str = "of 12STEM2306";
pub const CREDIT_ID: &str = "hall-credit";
pub const CREDIT_TEXT: &str = "made by jai©";
pub const OVERLAY_FONT: &str = "Consolas, sans-serif";
pub const OVERLAY_Z_INDEX: &str = "10";
pub const LABEL_CLASS: &str = "frame-label";
pub const LABEL_LINE_HEIGHT: f32 = 1.2; // multiple of the font size

// Lighting for the frame bodies
pub const LIGHT_DIRECTION: [f32; 3] = [0.3, 1.0, 0.6]; // towards the light
pub const AMBIENT_LIGHT: f32 = 0.35;

// Instanced geometry
pub const GROUND_THICKNESS: f32 = 0.01;
pub const IMAGE_THICKNESS: f32 = 0.01; // in body space
pub const INSTANCES_PER_FRAME: usize = 3; // body, border, image
pub const INITIAL_INSTANCE_CAPACITY: usize = 64;
