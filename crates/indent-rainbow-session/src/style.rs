//! Host style handles per decoration kind.

use crate::config::{Config, IndicatorStyle};
use indent_rainbow::DecorationKind;

/// How the host paints one [`DecorationKind`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum KindStyle {
    /// Fill the range background.
    Background {
        /// CSS color string.
        color: String,
    },
    /// Draw a left border at the start of the range.
    LeftBorder {
        /// CSS color string.
        color: String,
        /// Border width in pixels.
        width: u32,
    },
}

impl KindStyle {
    /// Style for `kind` under `config`.
    ///
    /// `None` for a frame group outside the palette, and for tab-mix when no tab-mix color is
    /// configured.
    pub fn for_kind(config: &Config, kind: DecorationKind) -> Option<Self> {
        match kind {
            DecorationKind::OuterFrame(group) | DecorationKind::InnerFrame(group) => {
                let color = config.colors.get(group)?.clone();
                Some(match config.indicator_style {
                    IndicatorStyle::Classic => Self::Background { color },
                    IndicatorStyle::Light => Self::LeftBorder {
                        color,
                        width: config.light_indicator_line_width,
                    },
                })
            }
            DecorationKind::Error => Some(Self::Background {
                color: config.error_color.clone(),
            }),
            DecorationKind::TabMix => config.detects_tab_mix().then(|| Self::Background {
                color: config.tabmix_color.clone(),
            }),
        }
    }

    /// Styles for every kind of the configured palette, in [`DecorationKind::all`] order.
    pub fn palette(config: &Config) -> Vec<(DecorationKind, Self)> {
        DecorationKind::all(config.group_count())
            .filter_map(|kind| Self::for_kind(config, kind).map(|style| (kind, style)))
            .collect()
    }
}
