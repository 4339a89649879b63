use glam::Vec3;

// Scroll → UI tuning shared by the scroll mapper, rewards and session.

// Scarcity message bands (upper bound exclusive, last band closed)
pub const SCARCITY_TIER_B_START: f64 = 0.2;
pub const SCARCITY_TIER_C_START: f64 = 0.45;
pub const SCARCITY_TIER_D_START: f64 = 0.7;

// Intro text is shown only at the very top of the page
pub const INTRO_VISIBLE_BELOW: f64 = 0.05;

// Camera dolly driven by scroll: z = START_Z - p * DOLLY_DEPTH, y = p * RISE
pub const CAMERA_START_Z: f32 = 10.0;
pub const CAMERA_DOLLY_DEPTH: f32 = 150.0;
pub const CAMERA_RISE: f32 = 10.0;
pub const CAMERA_TWEEN_SEC: f32 = 0.5;

// Secret rewards: trigger windows are [start, end)
pub const REWARD_CRYSTAL_WINDOW: (f64, f64) = (0.18, 0.22);
pub const REWARD_CRYSTAL_HZ: f32 = 880.0;
pub const REWARD_SIREN_WINDOW: (f64, f64) = (0.48, 0.52);
pub const REWARD_SIREN_HZ: f32 = 1200.0;
// Both rewards re-arm once progress leaves the middle of the page
pub const REWARD_RESET_BELOW: f64 = 0.1;
pub const REWARD_RESET_ABOVE: f64 = 0.6;

// HUD windows are open intervals
pub const GALLERY_HUD_WINDOW: (f64, f64) = (0.3, 0.8);
pub const GALLERY_PARALLAX_PX: f64 = -100.0; // px per unit of progress past the window start
pub const TESTIMONIAL_HUD_WINDOW: (f64, f64) = (0.45, 0.7);

// Toast auto-hide
pub const SECRET_TOAST_MS: i32 = 3000;

// Pointer / orientation
pub const POINTER_TARGET_SCALE: f32 = 2.0; // ndc → camera look target
pub const LIGHT_FOLLOW_SCALE: f32 = 15.0; // ndc → point light world offset
pub const LIGHT_FOLLOW_DEPTH: f32 = 5.0; // light sits this far in front of the camera
pub const LIGHT_TWEEN_SEC: f32 = 0.5;
pub const TILT_DEGREES_PER_UNIT: f64 = 45.0;
pub const TILT_BETA_REST_DEG: f64 = 45.0; // phone held at 45° reads as centered

// Click feedback
pub const CLICK_CHIME_MIN_HZ: f32 = 600.0;
pub const CLICK_CHIME_SPAN_HZ: f32 = 400.0;
pub const CLICK_FLASH_INTENSITY: f32 = 2.0;
pub const CLICK_FLASH_SEC: f32 = 1.0;

// Chime synthesis
pub const MASTER_VOLUME: f32 = 0.3;
pub const CHIME_PEAK_GAIN: f32 = 0.5;
pub const CHIME_ATTACK_SEC: f64 = 0.05;
pub const CHIME_LENGTH_SEC: f64 = 1.5;
pub const CHIME_FLOOR_GAIN: f32 = 0.01; // exponential ramps cannot reach zero

// Camera rig
pub const CAMERA_FOV_DEG: f32 = 75.0;
pub const CAMERA_NEAR: f32 = 0.1;
pub const CAMERA_FAR: f32 = 1000.0;
pub const CAMERA_LOOK_YAW: f32 = -0.1; // pointer x → yaw
pub const CAMERA_LOOK_PITCH: f32 = 0.1; // pointer y → pitch
pub const CAMERA_EASE: f32 = 0.05; // new = old + (target - old) * CAMERA_EASE
pub const MAX_PIXEL_RATIO: f64 = 2.0;

// Object motion
pub const CRYSTAL_SPIN_PER_SEC: f32 = 0.05;
pub const TORUS_WOBBLE_AMPLITUDE: f32 = 0.5;
pub const TORUS_SPIN_PER_TICK: f32 = 0.01;

// Scene layout
pub const CRYSTAL_COUNT: usize = 100;
pub const CRYSTAL_SPREAD: f32 = 40.0;
pub const CRYSTAL_DEPTH: f32 = 40.0;
pub const CRYSTAL_SCALE_MIN: f32 = 0.5;
pub const CRYSTAL_SCALE_SPAN: f32 = 2.0;
pub const CRYSTAL_STRETCH: f32 = 3.0; // y scale multiplier

pub const PARTICLE_COUNT: usize = 10_000;
pub const PARTICLE_SPREAD: f32 = 100.0;
pub const PARTICLE_Y_OFFSET: f32 = -20.0;
pub const PARTICLE_NEAR_Z: f32 = -30.0;
pub const PARTICLE_DEPTH: f32 = 100.0;

pub const OCEAN_SIZE: f32 = 200.0;
pub const OCEAN_SEGMENTS: u32 = 100;
pub const OCEAN_POSITION: Vec3 = Vec3::new(0.0, -20.0, -100.0);
pub const OCEAN_WAVE_FREQ: f32 = 10.0;
pub const OCEAN_WAVE_AMPLITUDE: f32 = 2.0;
pub const OCEAN_WAVE_V_SPEED: f32 = 0.8;

pub const TORUS_RADIUS: f32 = 10.0;
pub const TORUS_TUBE: f32 = 0.5;
pub const TORUS_RADIAL_SEGMENTS: u32 = 16;
pub const TORUS_TUBULAR_SEGMENTS: u32 = 100;
pub const TORUS_POSITION: Vec3 = Vec3::new(0.0, 5.0, -145.0);

// Palette (sRGB hex)
pub const BACKGROUND_HEX: u32 = 0x05000a;
pub const FOG_HEX: u32 = 0xff80b3;
pub const FOG_DENSITY: f32 = 0.015;
pub const CRYSTAL_HEX: u32 = 0xffb3d1;
pub const CRYSTAL_TRANSMISSION: f32 = 0.9;
pub const PARTICLE_HEX: u32 = 0xff4d94;
pub const OCEAN_HEX: u32 = 0x110022;
pub const OCEAN_EMISSIVE_HEX: u32 = 0x330044;
pub const OCEAN_METALNESS: f32 = 0.8;
pub const TORUS_HEX: u32 = 0xffffff;
pub const AMBIENT_HEX: u32 = 0xffffff;
pub const AMBIENT_INTENSITY: f32 = 0.5;
pub const POINT_LIGHT_HEX: u32 = 0xff80b3;
pub const POINT_LIGHT_INTENSITY: f32 = 5.0;
pub const POINT_LIGHT_RANGE: f32 = 50.0;
pub const POINT_LIGHT_DECAY: f32 = 2.0;

// Smoothed scrolling
pub const SMOOTH_SCROLL_SEC: f64 = 1.5;
pub const WHEEL_LINE_PX: f64 = 100.0 / 6.0;
