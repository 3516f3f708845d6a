//! typut-im: A typographic input method
//!
//! This crate turns key events into edits of a marked composition and offers
//! styled Unicode renderings of it (bold, script, fraktur, ...) as candidates.
//! It uses typut-engine for the transliteration itself. Host integration goes
//! through the narrow traits in [`host`].

pub mod config;
pub mod core;
pub mod host;

use std::sync::Once;

pub use crate::core::action::{NavigationDirection, UserAction};
pub use crate::core::engine::{EngineAction, EngineConfig, EngineResult, InputController};
pub use crate::core::keycode::{KeyCode, KeyEvent, KeyModifiers};
pub use crate::core::state::{ClientAction, InputState};
pub use host::{CandidateWindow, Session, TextClient};

static INIT_LOGGING: Once = Once::new();

/// Install the global tracing subscriber once, writing to stderr.
///
/// `RUST_LOG` takes precedence over `default_filter`.
pub fn init_logging(default_filter: &str) {
    INIT_LOGGING.call_once(|| {
        tracing_subscriber::fmt()
            .with_env_filter(
                tracing_subscriber::EnvFilter::try_from_default_env()
                    .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(default_filter)),
            )
            .with_writer(std::io::stderr)
            .init();
    });
}
