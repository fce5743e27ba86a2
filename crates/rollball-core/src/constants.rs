//! Simulation constants and tuning parameters.

use glam::Vec3;

/// Simulation tick rate (Hz).
pub const TICK_RATE: u32 = 60;

/// Seconds per tick.
pub const DT: f32 = 1.0 / TICK_RATE as f32;

/// World up axis. Pins rotate about it; the ball rolls on the plane normal to it.
pub const UP: Vec3 = Vec3::Y;

// --- Ball control ---

/// Torque magnitude applied each tick while a direction is commanded (N·m).
pub const TORQUE_STRENGTH: f32 = 0.03;

// --- Pins ---

/// Yaw change applied to a struck pin (radians).
pub const PIN_ROTATION_ANGLE: f32 = std::f32::consts::FRAC_PI_2;

/// Duration of the pin rotation animation (seconds).
pub const PIN_ROTATION_SECS: f32 = 0.5;

/// Default pin layout: four pins around the ball, 0.4 m out on each axis.
pub const DEFAULT_PIN_LAYOUT: [Vec3; 4] = [
    Vec3::new(0.0, 0.0, 0.4),
    Vec3::new(0.0, 0.0, -0.4),
    Vec3::new(0.4, 0.0, 0.0),
    Vec3::new(-0.4, 0.0, 0.0),
];

// --- Assets ---

/// Asset name of the bowling ball model.
pub const BALL_ASSET: &str = "Bowling_Ball.usdz";

/// Asset name of the bowling pin model.
pub const PIN_ASSET: &str = "Bowling_Pin.usdz";

/// Bowling ball collision radius (meters).
pub const BALL_RADIUS: f32 = 0.1;

/// Bowling ball mass (kg).
pub const BALL_MASS: f32 = 1.0;

/// Bowling pin collision radius on the play plane (meters).
pub const PIN_RADIUS: f32 = 0.06;

/// Bowling pin mass (kg).
pub const PIN_MASS: f32 = 0.4;

// --- Headless rigid-body step ---

/// Fraction of angular velocity kept per tick (rolling resistance).
pub const ROLLING_DAMPING: f32 = 0.98;

/// Angular speed cap for rolling bodies (rad/s).
pub const MAX_ANGULAR_SPEED: f32 = 12.0;

// --- Input ---

/// Maximum joystick knob travel from center on each axis (points).
pub const JOYSTICK_KNOB_LIMIT: f32 = 30.0;
