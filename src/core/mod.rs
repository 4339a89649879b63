pub mod animation;
pub mod camera;
pub mod chime;
pub mod constants;
pub mod input;
pub mod rewards;
pub mod run_loop;
pub mod scene;
pub mod scroll;
pub mod session;
pub mod smooth_scroll;
pub mod tween;

// Shaders bundled as string constants
pub static CRYSTALS_WGSL: &str = include_str!("../../shaders/crystals.wgsl");
pub static PARTICLES_WGSL: &str = include_str!("../../shaders/particles.wgsl");
pub static LINES_WGSL: &str = include_str!("../../shaders/lines.wgsl");
