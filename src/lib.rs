//! Roto Wheel - an interactive spin-the-wheel widget core
//!
//! Core modules:
//! - `wheel`: deterministic wheel logic (sector geometry, angle reduction,
//!   terminal-angle selection, rotation state, spin lifecycle)
//! - `render`: instruction contract for the external renderer
//! - `scheduler`: cancellable timer abstraction
//! - `config`: user-facing wheel configuration

pub mod config;
pub mod render;
pub mod scheduler;
pub mod wheel;

pub use config::WheelConfig;
pub use render::{Color, Easing, Renderer};
pub use scheduler::{ManualScheduler, Scheduler, TimerEvent, TimerHandle};
pub use wheel::{
    Command, NudgeDirection, SpinPhase, WheelController, WheelError, WheelGeometry, WheelState,
    coterminal,
};

use glam::Vec2;

/// Widget configuration constants
pub mod consts {
    use glam::Vec2;

    /// Wheel layout defaults (SVG user units)
    pub const DEFAULT_CENTER: Vec2 = Vec2::new(250.0, 250.0);
    pub const DEFAULT_RADIUS: f32 = 200.0;

    /// Sector count policy range; out-of-range input resets to the default
    pub const DEFAULT_SECTOR_COUNT: u32 = 2;
    pub const MIN_SECTOR_COUNT: u32 = 2;
    pub const MAX_SECTOR_COUNT: u32 = 359;

    /// Spin duration policy range in seconds
    pub const DEFAULT_SPIN_DURATION_SECS: f32 = 6.0;
    pub const MIN_SPIN_DURATION_SECS: f32 = 1.0;
    pub const MAX_SPIN_DURATION_SECS: f32 = 60.0;

    /// Manual nudge step in degrees, unbounded above
    pub const DEFAULT_ROTATION_STEP: f32 = 5.0;
    pub const MIN_ROTATION_STEP: f32 = 1.0;

    /// Extra full turns per spin, purely for visual effect
    pub const SHOW_SPINS: u32 = 100;
    /// Duration of the instant nudge reposition replay
    pub const NUDGE_REPLAY_SECS: f32 = 0.5;
    /// Slack after the spin duration before controls re-enable, so the
    /// animation has visually settled
    pub const SPIN_SETTLE_SLACK_SECS: f32 = 1.0;

    /// Rejection-sampling attempt cap for terminal angle selection
    pub const MAX_SELECTOR_ATTEMPTS: u32 = 360;
}

/// Convert degrees to radians
#[inline]
pub fn deg_to_rad(deg: f32) -> f32 {
    deg * std::f32::consts::PI / 180.0
}

/// Point at `angle_deg` on the circle of `radius` around `center`
#[inline]
pub fn point_on_circle(center: Vec2, radius: f32, angle_deg: f32) -> Vec2 {
    let theta = deg_to_rad(angle_deg);
    center + Vec2::new(radius * theta.cos(), radius * theta.sin())
}
