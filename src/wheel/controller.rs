//! Spin lifecycle control
//!
//! A single state machine gates every user command. While a spin is in
//! flight, nudges, new spins, and rebuilds are silently ignored; color
//! editing and the configuration surface are disabled at spin entry and
//! re-enabled one second after the animation duration elapses, slack that
//! guarantees the wheel has visually settled first. Only one spin may be in
//! flight at a time; overlapping spins are unsupported by design of the
//! product, not a defect.

use glam::Vec2;
use rand::SeedableRng;
use rand_pcg::Pcg32;

use crate::config::WheelConfig;
use crate::consts::{NUDGE_REPLAY_SECS, SHOW_SPINS, SPIN_SETTLE_SLACK_SECS};
use crate::render::{Color, Easing, Renderer};
use crate::scheduler::{Scheduler, TimerEvent, TimerHandle};

use super::geometry::WheelGeometry;
use super::selector::{WheelError, pick_terminal_offset};
use super::state::{NudgeDirection, SpinPhase, WheelState};

/// A user action, dispatched by the embedding page
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Command {
    /// Manual pre-spin rotation by the configured step
    Nudge { direction: NudgeDirection },
    /// Spin to a random terminal angle
    Spin,
    /// Replace the wheel with a freshly built one
    Rebuild { sector_count: u32 },
}

/// Owns the wheel's rotation state and spin lock, translates commands into
/// renderer instructions, and manages the countdown and completion timers.
pub struct WheelController {
    config: WheelConfig,
    geometry: WheelGeometry,
    state: WheelState,
    phase: SpinPhase,
    rng: Pcg32,
    center: Vec2,
    radius: f32,
    /// Seconds left on the visible countdown for the in-flight spin
    countdown_remaining: u32,
    countdown_timer: Option<TimerHandle>,
    completion_timer: Option<TimerHandle>,
}

impl WheelController {
    /// Build a controller for a wheel of `config.sector_count` sectors
    /// centered at `center`. The config is trusted as already clamped by
    /// the UI layer; raw degenerate values degrade to the fallback circle.
    pub fn new(config: WheelConfig, center: Vec2, radius: f32, seed: u64) -> Self {
        let geometry = WheelGeometry::build(config.sector_count, center, Some(radius));
        let state = WheelState::new(geometry.sector_count());
        Self {
            config,
            geometry,
            state,
            phase: SpinPhase::Idle,
            rng: Pcg32::seed_from_u64(seed),
            center,
            radius,
            countdown_remaining: 0,
            countdown_timer: None,
            completion_timer: None,
        }
    }

    pub fn phase(&self) -> SpinPhase {
        self.phase
    }

    pub fn config(&self) -> &WheelConfig {
        &self.config
    }

    pub fn geometry(&self) -> &WheelGeometry {
        &self.geometry
    }

    pub fn state(&self) -> &WheelState {
        &self.state
    }

    /// Change the spin duration; ignored while a spin is in flight
    pub fn set_spin_duration(&mut self, secs: f32) {
        if self.phase == SpinPhase::Idle {
            self.config.set_spin_duration(secs);
        }
    }

    /// Change the nudge step; ignored while a spin is in flight
    pub fn set_rotation_step(&mut self, step: f32) {
        if self.phase == SpinPhase::Idle {
            self.config.set_rotation_step(step);
        }
    }

    /// Emit build instructions for the current geometry: one wedge per
    /// sector with a random fill, or the undivided fallback circle.
    pub fn draw<R: Renderer>(&mut self, renderer: &mut R) {
        match &self.geometry {
            WheelGeometry::Sectors(sectors) => {
                let count = sectors.len() as u32;
                for sector in sectors {
                    let fill = Color::random(&mut self.rng);
                    renderer.build_sector(sector.index, count, &sector.path, fill);
                }
            }
            WheelGeometry::FallbackCircle { center, radius } => {
                renderer.draw_fallback_circle(*center, *radius);
            }
        }
    }

    /// Dispatch one user command.
    ///
    /// Every command is a silent no-op while a spin is in flight. The only
    /// propagated failure is selector exhaustion, which leaves phase and
    /// orientation untouched.
    pub fn dispatch<R: Renderer, S: Scheduler>(
        &mut self,
        command: Command,
        renderer: &mut R,
        scheduler: &mut S,
    ) -> Result<(), WheelError> {
        if self.phase == SpinPhase::Spinning {
            log::debug!("Command ignored while spinning: {command:?}");
            return Ok(());
        }
        match command {
            Command::Nudge { direction } => {
                self.nudge(direction, renderer);
                Ok(())
            }
            Command::Spin => self.spin(renderer, scheduler),
            Command::Rebuild { sector_count } => {
                self.rebuild(sector_count, renderer, scheduler);
                Ok(())
            }
        }
    }

    /// Timer callback entry point; the scheduler owner routes fired events
    /// here.
    pub fn on_timer<R: Renderer, S: Scheduler>(
        &mut self,
        event: TimerEvent,
        renderer: &mut R,
        scheduler: &mut S,
    ) {
        match event {
            TimerEvent::CountdownTick => self.countdown_tick(renderer, scheduler),
            TimerEvent::SpinComplete => self.complete_spin(renderer, scheduler),
        }
    }

    /// Cancel all pending timers. Must be called when the widget is torn
    /// down mid-spin so no callback touches destroyed state.
    pub fn teardown<S: Scheduler>(&mut self, scheduler: &mut S) {
        self.cancel_timers(scheduler);
        self.phase = SpinPhase::Idle;
    }

    fn nudge<R: Renderer>(&mut self, direction: NudgeDirection, renderer: &mut R) {
        let sectors = match &self.geometry {
            WheelGeometry::Sectors(sectors) => sectors,
            WheelGeometry::FallbackCircle { .. } => return,
        };
        let orientation = self.state.apply_nudge(self.config.rotation_step, direction);
        log::debug!("Nudge {direction:?}: orientation now {orientation}°");
        // Instant reposition: replay the rotation at the new angle.
        for sector in sectors {
            renderer.animate_rotation(
                sector.index,
                orientation,
                orientation,
                NUDGE_REPLAY_SECS,
                Easing::CubicEaseOut,
            );
        }
    }

    fn spin<R: Renderer, S: Scheduler>(
        &mut self,
        renderer: &mut R,
        scheduler: &mut S,
    ) -> Result<(), WheelError> {
        let sectors = match &self.geometry {
            WheelGeometry::Sectors(sectors) => sectors,
            WheelGeometry::FallbackCircle { .. } => return Ok(()),
        };

        // Read the parked orientation before any mutation; the selector
        // must reference the wheel as it stands right now.
        let reference = self.state.parked_angle();
        let offset = pick_terminal_offset(&mut self.rng, self.state.sector_count(), reference)?;

        let (from, to) = self.state.apply_spin(offset, SHOW_SPINS);
        self.phase = SpinPhase::Spinning;

        let duration = self.config.spin_duration_secs;
        log::info!("Spin: {reference}° -> terminal {offset}° over {duration}s");

        renderer.set_color_editing_enabled(false);
        renderer.set_controls_enabled(false);
        renderer.set_config_panel_visible(false);

        self.countdown_remaining = duration.ceil() as u32;
        renderer.update_countdown_label(Some(self.countdown_remaining));

        for sector in sectors {
            renderer.animate_rotation(sector.index, from, to, duration, Easing::CubicEaseOut);
        }

        // Reentrancy guard: at most one countdown chain per spin.
        if self.countdown_timer.is_none() {
            self.countdown_timer = Some(scheduler.schedule(1.0, TimerEvent::CountdownTick));
        }
        self.completion_timer =
            Some(scheduler.schedule(duration + SPIN_SETTLE_SLACK_SECS, TimerEvent::SpinComplete));
        Ok(())
    }

    fn rebuild<R: Renderer, S: Scheduler>(
        &mut self,
        sector_count: u32,
        renderer: &mut R,
        scheduler: &mut S,
    ) {
        self.cancel_timers(scheduler);
        self.config.set_sector_count(sector_count);
        self.geometry = WheelGeometry::build(self.config.sector_count, self.center, Some(self.radius));
        self.state = WheelState::new(self.geometry.sector_count());
        log::info!("Rebuilt wheel with {} sectors", self.geometry.sector_count());
        self.draw(renderer);
    }

    fn countdown_tick<R: Renderer, S: Scheduler>(&mut self, renderer: &mut R, scheduler: &mut S) {
        self.countdown_timer = None;
        if self.phase != SpinPhase::Spinning {
            return;
        }
        self.countdown_remaining = self.countdown_remaining.saturating_sub(1);
        renderer.update_countdown_label(Some(self.countdown_remaining));
        if self.countdown_remaining > 0 {
            self.countdown_timer = Some(scheduler.schedule(1.0, TimerEvent::CountdownTick));
        }
    }

    fn complete_spin<R: Renderer, S: Scheduler>(&mut self, renderer: &mut R, scheduler: &mut S) {
        self.completion_timer = None;
        if let Some(handle) = self.countdown_timer.take() {
            scheduler.cancel(handle);
        }
        self.phase = SpinPhase::Idle;
        renderer.set_color_editing_enabled(true);
        renderer.set_controls_enabled(true);
        renderer.update_countdown_label(None);
        log::info!("Spin settled at {}°", self.state.parked_angle());
    }

    fn cancel_timers<S: Scheduler>(&mut self, scheduler: &mut S) {
        if let Some(handle) = self.countdown_timer.take() {
            scheduler.cancel(handle);
        }
        if let Some(handle) = self.completion_timer.take() {
            scheduler.cancel(handle);
        }
    }
}
