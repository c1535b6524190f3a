//! `indent-rainbow` command-line front end.
//!
//! Runs one analysis pass over a file and prints every decoration as
//! `kind line:column-line:column [hover]`, one per line. Positions are one-based.
//! With `--styles`, the style of every kind in the configured palette is printed first.
//!
//! ```bash
//! indent-rainbow --tab-width 2 src/main.py
//! indent-rainbow --styles --config light.toml src/lib.rs
//! RUST_LOG=analysis.pass=debug indent-rainbow --config my.toml --tabs Makefile
//! ```

use anyhow::{Context, Result};
use clap::Parser;
use indent_rainbow::{
    Decoration, DecorationKind, DecorationSink, EditorSettingsSource, IndentSettings, LineIndex,
    TextDocument,
};
use indent_rainbow_session::{Config, DecorationSession, KindStyle, load_from};
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};
use std::time::Instant;
use tracing::{debug, info};

/// CLI arguments.
#[derive(Parser, Debug)]
#[command(
    name = "indent-rainbow",
    version,
    about = "Print indentation frames and errors of a file"
)]
struct Args {
    /// File to analyze (UTF-8 text).
    path: PathBuf,
    /// Configuration file (overrides discovery of `indent-rainbow.toml`).
    #[arg(long = "config")]
    config: Option<PathBuf>,
    /// Tab width of the editor; non-positive values fall back to 4.
    #[arg(long = "tab-width", default_value_t = 4, allow_negative_numbers = true)]
    tab_width: i64,
    /// The editor indents with tabs instead of spaces.
    #[arg(long = "tabs")]
    tabs: bool,
    /// Language identifier; inferred from the file extension when omitted.
    #[arg(long = "language")]
    language: Option<String>,
    /// Print the style of each decoration kind before the decorations.
    #[arg(long = "styles")]
    styles: bool,
}

impl EditorSettingsSource for Args {
    fn tab_width(&self) -> Option<i64> {
        Some(self.tab_width)
    }

    fn indentation_is_spaces(&self) -> bool {
        !self.tabs
    }
}

/// Collects decorations in kind order for printing.
struct PrintingSink<'a, D: ?Sized> {
    document: &'a D,
    lines: Vec<String>,
}

impl<'a, D: TextDocument + ?Sized> PrintingSink<'a, D> {
    fn new(document: &'a D) -> Self {
        Self {
            document,
            lines: Vec::new(),
        }
    }
}

impl<D: TextDocument + ?Sized> DecorationSink for PrintingSink<'_, D> {
    fn set_decorations(&mut self, kind: DecorationKind, decorations: &[Decoration]) {
        for decoration in decorations {
            let start = self.document.position_at(decoration.range.start);
            let end = self.document.position_at(decoration.range.end);
            let mut line = format!(
                "{:<14} {}:{}-{}:{}",
                kind_label(kind),
                start.line + 1,
                start.column + 1,
                end.line + 1,
                end.column + 1,
            );
            if let Some(hover) = &decoration.hover {
                line.push_str("  ");
                line.push_str(hover);
            }
            self.lines.push(line);
        }
    }
}

fn kind_label(kind: DecorationKind) -> String {
    match kind {
        DecorationKind::OuterFrame(group) => format!("outer-frame[{group}]"),
        DecorationKind::InnerFrame(group) => format!("inner-frame[{group}]"),
        DecorationKind::Error => "error".to_string(),
        DecorationKind::TabMix => "tab-mix".to_string(),
    }
}

fn style_lines(config: &Config) -> Vec<String> {
    KindStyle::palette(config)
        .into_iter()
        .map(|(kind, style)| match style {
            KindStyle::Background { color } => {
                format!("{:<14} background {color}", kind_label(kind))
            }
            KindStyle::LeftBorder { color, width } => {
                format!("{:<14} left-border {width}px {color}", kind_label(kind))
            }
        })
        .collect()
}

fn language_for(path: &Path) -> String {
    let extension = path
        .extension()
        .and_then(|ext| ext.to_str())
        .unwrap_or_default();
    let id = match extension {
        "rs" => "rust",
        "py" => "python",
        "js" | "mjs" | "cjs" => "javascript",
        "ts" => "typescript",
        "go" => "go",
        "c" | "h" => "c",
        "cpp" | "cc" | "hpp" => "cpp",
        "md" => "markdown",
        "yml" | "yaml" => "yaml",
        "toml" => "toml",
        "json" => "json",
        "sh" => "shellscript",
        _ => "plaintext",
    };
    match path.file_name().and_then(|name| name.to_str()) {
        Some("Makefile" | "makefile") => "makefile".to_string(),
        _ => id.to_string(),
    }
}

fn main() -> Result<()> {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .try_init();

    let args = Args::parse();
    let config = load_from(args.config.clone()).context("loading configuration")?;
    let text = std::fs::read_to_string(&args.path)
        .with_context(|| format!("reading {}", args.path.display()))?;
    let document = LineIndex::from_text(&text);
    let settings = IndentSettings::resolve(&args);
    let language = args
        .language
        .clone()
        .unwrap_or_else(|| language_for(&args.path));
    info!(
        target: "runtime",
        path = %args.path.display(),
        language = %language,
        tab_width = settings.tab_width,
        "analyze_file"
    );

    let styles = if args.styles {
        style_lines(&config)
    } else {
        Vec::new()
    };
    let delay = config.update_delay;
    let mut session = DecorationSession::new(config);
    let mut sink = PrintingSink::new(&document);
    let now = Instant::now();
    session.focus_editor(&language, now, &mut sink);
    match session.poll(now + delay, &document, &args, &mut sink) {
        Some(summary) => debug!(
            target: "runtime",
            decorations = summary.decorations,
            errors = summary.errors,
            tab_mix = summary.tab_mix,
            "analysis_done"
        ),
        None => info!(target: "runtime", language = %language, "language_not_decorated"),
    }

    let mut out = BufWriter::new(io::stdout().lock());
    for line in styles.iter().chain(&sink.lines) {
        writeln!(out, "{line}")?;
    }
    out.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use indent_rainbow_session::IndicatorStyle;

    #[test]
    fn languages_are_inferred_from_extensions() {
        assert_eq!(language_for(Path::new("src/lib.rs")), "rust");
        assert_eq!(language_for(Path::new("a/b/setup.py")), "python");
        assert_eq!(language_for(Path::new("Makefile")), "makefile");
        assert_eq!(language_for(Path::new("notes")), "plaintext");
    }

    #[test]
    fn sink_prints_one_based_positions_and_hover() {
        let doc = LineIndex::from_text("x\n   y\n");
        let mut sink = PrintingSink::new(&doc);
        sink.set_decorations(
            DecorationKind::Error,
            &[Decoration::new(indent_rainbow::DecorationRange::new(2, 5)).with_hover("bad")],
        );
        assert_eq!(sink.lines, vec!["error          2:1-2:4  bad".to_string()]);
    }

    #[test]
    fn styles_follow_the_indicator_style() {
        let classic = style_lines(&Config::default());
        assert_eq!(classic.len(), 10);
        assert_eq!(
            classic[0],
            "outer-frame[0] background rgba(255,255,64,0.07)"
        );
        assert_eq!(classic[9], "tab-mix        background rgba(128,32,96,0.6)");

        let light = Config {
            indicator_style: IndicatorStyle::Light,
            light_indicator_line_width: 2,
            tabmix_color: String::new(),
            ..Config::default()
        };
        let lines = style_lines(&light);
        assert_eq!(lines.len(), 9);
        assert_eq!(
            lines[0],
            "outer-frame[0] left-border 2px rgba(255,255,64,0.07)"
        );
        assert_eq!(lines[8], "error          background rgba(128,32,32,0.6)");
    }

    #[test]
    fn args_parse_flags() {
        let args = Args::parse_from([
            "indent-rainbow",
            "--tab-width",
            "2",
            "--tabs",
            "--language",
            "go",
            "main.go",
        ]);
        assert_eq!(args.tab_width, 2);
        assert!(args.tabs);
        assert_eq!(args.language.as_deref(), Some("go"));
        assert_eq!(args.path, PathBuf::from("main.go"));
        assert!(!args.styles);

        let args = Args::parse_from(["indent-rainbow", "--styles", "main.go"]);
        assert!(args.styles);
    }
}
