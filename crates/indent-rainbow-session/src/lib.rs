#![warn(missing_docs)]
//! `indent-rainbow-session` - host-facing layer over the `indent-rainbow` analysis kernel.
//!
//! - [`config`] - lenient TOML configuration with per-key defaults
//! - [`debounce`] - single-slot debounce timer driven by host-supplied instants
//! - [`style`] - style handle description per decoration kind
//! - [`session`] - the idle/decorating state machine that schedules and applies passes
//!
//! ```rust
//! use indent_rainbow::{Decoration, DecorationKind, DecorationSink, IndentSettings, LineIndex};
//! use indent_rainbow_session::{Config, DecorationSession};
//! use std::time::Instant;
//!
//! #[derive(Default)]
//! struct Painter(usize);
//!
//! impl DecorationSink for Painter {
//!     fn set_decorations(&mut self, _kind: DecorationKind, decorations: &[Decoration]) {
//!         self.0 += decorations.len();
//!     }
//! }
//!
//! let config = Config::default();
//! let delay = config.update_delay;
//! let mut session = DecorationSession::new(config);
//! let mut painter = Painter::default();
//! let doc = LineIndex::from_text("if x:\n    y\n");
//!
//! let start = Instant::now();
//! session.focus_editor("python", start, &mut painter);
//! let summary = session
//!     .poll(start + delay, &doc, &IndentSettings::default(), &mut painter)
//!     .expect("pass is due");
//! assert_eq!(summary.decorations, 1);
//! assert_eq!(painter.0, 1);
//! ```

pub mod config;
pub mod debounce;
pub mod session;
pub mod style;

pub use config::{
    CONFIG_FILE_NAME, Config, ConfigError, DEFAULT_UPDATE_DELAY, IndicatorStyle, discover,
    load_from,
};
pub use debounce::Debouncer;
pub use session::{DecorationSession, PassSummary, SessionState};
pub use style::KindStyle;
