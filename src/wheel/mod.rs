//! Deterministic wheel core
//!
//! All rotation logic lives here and stays deterministic:
//! - Seeded RNG only
//! - No drawing and no real timers; the core emits renderer instructions
//!   and cancellable timer handles through traits the embedding implements

pub mod angle;
pub mod controller;
pub mod geometry;
pub mod selector;
pub mod state;

pub use angle::coterminal;
pub use controller::{Command, WheelController};
pub use geometry::{SectorArc, WheelGeometry, sector_end_angle, sector_path, sector_start_angle};
pub use selector::{WheelError, pick_terminal_offset};
pub use state::{NudgeDirection, SpinPhase, WheelState};
