//! Grid Snake: a single-player game engine with a persisted high score.
//!
//! The engine in [`engine`] owns all game state and is advanced one cell per
//! tick. Persistence, sound and randomness are injected so a session can be
//! driven by the macroquad front end in `main.rs` or by a test harness.

pub mod board;
pub mod engine;
pub mod error;
pub mod input;
pub mod logging;
pub mod render;
pub mod rng;
pub mod scheduler;
pub mod score;
pub mod settings;
pub mod sound;

pub use board::{Board, Cell, Direction};
pub use engine::{Engine, Snapshot, TickEvent, INITIAL_BODY_PARTS};
pub use error::{ScoreError, SettingsError};
pub use input::Command;
pub use rng::{CellRng, SeededRng};
pub use scheduler::{Ticker, TICK_INTERVAL};
pub use score::{FileScoreStore, ScoreStore};
pub use settings::Settings;
pub use sound::{Clip, Muted, SoundPlayer};
