//! Ping Pong - a single-screen paddle-and-ball arcade game
//!
//! Core modules:
//! - `sim`: Deterministic simulation (ball motion, paddle, scoring)
//! - `renderer`: WebGPU rendering pipeline
//! - `app`: winit window, input and frame loop

pub mod app;
pub mod renderer;
pub mod sim;

/// Game configuration constants
pub mod consts {
    /// Fixed simulation timestep (10 ms per update step)
    pub const TICK_DT: f32 = 0.010;

    /// Window title
    pub const WINDOW_TITLE: &str = "Ping Pong Game";
    /// Initial window size in pixels
    pub const WINDOW_WIDTH: u32 = 640;
    pub const WINDOW_HEIGHT: u32 = 480;

    /// Horizontal travel limits of the player bar
    pub const BAR_MAX_RIGHT: f32 = 13.0;
    pub const BAR_MAX_LEFT: f32 = -13.0;
    /// Height the player bar returns to after a lost ball
    pub const BAR_SPAWN_Y: f32 = -11.0;

    /// Arena limits for the ball; the bottom doubles as the paddle line
    pub const BALL_MAX_UP: f32 = 9.5;
    pub const BALL_MAX_DOWN: f32 = -9.5;
    pub const BALL_MAX_RIGHT: f32 = 15.0;
    pub const BALL_MAX_LEFT: f32 = -15.0;

    /// Speed gained per successful paddle hit
    pub const VELOCITY_INCREMENT: f32 = 0.1;
    /// Balls the player starts with
    pub const STARTING_LIVES: u32 = 3;
    /// Score thresholds: two level-ups, then the winning top score
    pub const LEVEL_TWO_SCORE: u32 = 3;
    pub const LEVEL_THREE_SCORE: u32 = 6;
    pub const TOP_SCORE: u32 = 9;

    /// The whole scene sits this far down the -Z axis from the camera
    pub const SCENE_DEPTH: f32 = -30.0;

    /// Perspective projection parameters
    pub const CAMERA_FOV_DEGREES: f32 = 45.0;
    pub const CAMERA_NEAR: f32 = 1.0;
    pub const CAMERA_FAR: f32 = 100.0;
}
