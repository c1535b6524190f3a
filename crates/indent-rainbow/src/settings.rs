//! Editor indentation settings.
//!
//! The tab width and indentation style are read from the active editor once per analysis pass;
//! they can change between edits, so they are never cached across passes.

use crate::metrics::IndentStyle;

/// Tab width used when the editor does not report a usable one.
pub const DEFAULT_TAB_WIDTH: usize = 4;

/// Host-side accessor for the active editor's indentation options.
pub trait EditorSettingsSource {
    /// Configured tab width in columns.
    ///
    /// Hosts return `None` when the setting is unavailable or not numeric (e.g. `"auto"`).
    fn tab_width(&self) -> Option<i64>;

    /// `true` when the editor inserts spaces for indentation, `false` for literal tabs.
    fn indentation_is_spaces(&self) -> bool;
}

/// Resolved indentation settings for one analysis pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IndentSettings {
    /// Tab width in columns (always at least 1).
    pub tab_width: usize,
    /// The indentation style the editor expects.
    pub style: IndentStyle,
}

impl IndentSettings {
    /// Create settings from a tab width and style. A zero tab width falls back to
    /// [`DEFAULT_TAB_WIDTH`].
    pub fn new(tab_width: usize, style: IndentStyle) -> Self {
        let tab_width = if tab_width == 0 {
            DEFAULT_TAB_WIDTH
        } else {
            tab_width
        };
        Self { tab_width, style }
    }

    /// Read settings from the host, falling back to [`DEFAULT_TAB_WIDTH`] when the tab width is
    /// missing or not positive.
    pub fn resolve<S>(source: &S) -> Self
    where
        S: EditorSettingsSource + ?Sized,
    {
        let tab_width = source
            .tab_width()
            .and_then(|width| usize::try_from(width).ok())
            .filter(|width| *width > 0)
            .unwrap_or(DEFAULT_TAB_WIDTH);
        Self::new(
            tab_width,
            IndentStyle::from_insert_spaces(source.indentation_is_spaces()),
        )
    }
}

impl Default for IndentSettings {
    fn default() -> Self {
        Self::new(DEFAULT_TAB_WIDTH, IndentStyle::Spaces)
    }
}

impl EditorSettingsSource for IndentSettings {
    fn tab_width(&self) -> Option<i64> {
        i64::try_from(self.tab_width).ok()
    }

    fn indentation_is_spaces(&self) -> bool {
        self.style == IndentStyle::Spaces
    }
}
