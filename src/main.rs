//! Roto Wheel demo entry point
//!
//! Drives a scripted wheel session on the console: render instructions are
//! printed instead of drawn, and a simulated clock stands in for the event
//! loop's timers. Run with `RUST_LOG=info cargo run -- [seed]`.

use glam::Vec2;
use roto_wheel::consts::{DEFAULT_CENTER, DEFAULT_RADIUS};
use roto_wheel::wheel::{Command, NudgeDirection, WheelController};
use roto_wheel::{Color, Easing, ManualScheduler, Renderer, WheelConfig};

/// Prints every instruction the core emits
struct ConsoleRenderer;

impl Renderer for ConsoleRenderer {
    fn build_sector(&mut self, index: u32, sector_count: u32, path: &str, fill: Color) {
        println!("sector {index}/{sector_count} fill={} d=\"{path}\"", fill.to_hex());
    }

    fn draw_fallback_circle(&mut self, center: Vec2, radius: f32) {
        println!("fallback circle at ({},{}) r={radius}", center.x, center.y);
    }

    fn animate_rotation(
        &mut self,
        sector_index: u32,
        from_deg: f32,
        to_deg: f32,
        duration_secs: f32,
        easing: Easing,
    ) {
        println!(
            "animate sector {sector_index}: {from_deg}° -> {to_deg}° over {duration_secs}s \
             (keySplines \"{}\")",
            easing.key_splines()
        );
    }

    fn set_controls_enabled(&mut self, enabled: bool) {
        println!("controls {}", if enabled { "enabled" } else { "disabled" });
    }

    fn set_color_editing_enabled(&mut self, enabled: bool) {
        println!("color pickers {}", if enabled { "enabled" } else { "disabled" });
    }

    fn set_config_panel_visible(&mut self, visible: bool) {
        println!("config panel {}", if visible { "shown" } else { "hidden" });
    }

    fn update_countdown_label(&mut self, seconds_remaining: Option<u32>) {
        match seconds_remaining {
            Some(secs) => println!("label: Time left: {secs}"),
            None => println!("label: Spin!"),
        }
    }
}

fn main() {
    env_logger::init();

    let seed = std::env::args()
        .nth(1)
        .and_then(|arg| arg.parse().ok())
        .unwrap_or(0xC0FFEE);
    log::info!("Roto Wheel demo starting with seed {seed}");

    let mut config = WheelConfig::default();
    config.set_sector_count(6);
    config.set_spin_duration(4.0);
    config.set_rotation_step(15.0);

    let mut renderer = ConsoleRenderer;
    let mut scheduler = ManualScheduler::new();
    let mut controller = WheelController::new(config, DEFAULT_CENTER, DEFAULT_RADIUS, seed);

    controller.draw(&mut renderer);

    // Pre-rotate a little, then spin.
    let script = [
        Command::Nudge { direction: NudgeDirection::Left },
        Command::Nudge { direction: NudgeDirection::Left },
        Command::Nudge { direction: NudgeDirection::Right },
        Command::Spin,
    ];
    for command in script {
        if let Err(err) = controller.dispatch(command, &mut renderer, &mut scheduler) {
            log::error!("{command:?} failed: {err}");
            return;
        }
    }

    // Step the clock one second at a time until the spin settles.
    while scheduler.pending() > 0 {
        for event in scheduler.advance(1.0) {
            controller.on_timer(event, &mut renderer, &mut scheduler);
        }
    }

    println!(
        "wheel parked at {}° after {}s",
        controller.state().parked_angle(),
        scheduler.now_secs()
    );
}
