//! Decoration session: the per-editor state machine.
//!
//! ```text
//!            focus / edit (policy: decorate)
//!   ┌──────┐ ─────────────────────────────▶ ┌────────────┐
//!   │ Idle │                                │ Decorating │ ── edit ──▶ re-arm debounce
//!   └──────┘ ◀───────────────────────────── └────────────┘ ── poll (due) ──▶ full pass
//!            focus (policy: do not decorate)
//!            clears every kind once
//! ```
//!
//! The session never touches the clock or a document on its own: the host reports focus and
//! text-change events with the current [`Instant`], then calls [`DecorationSession::poll`] at or
//! after [`DecorationSession::next_deadline`] to run the pending pass.

use crate::config::Config;
use crate::debounce::Debouncer;
use indent_rainbow::{
    AnalysisOptions, DecorationKind, DecorationRangeSet, DecorationSink, EditorSettingsSource,
    IgnorePatterns, IndentSettings, TextDocument, analyze_document,
};
use indent_rainbow_lang::{LanguagePolicy, LanguagePolicyCache};
use std::time::Instant;
use tracing::{debug, trace};

/// Steady states of a [`DecorationSession`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SessionState {
    /// No decorations are applied and no pass is scheduled.
    #[default]
    Idle,
    /// The focused language is decorated; edits schedule passes.
    Decorating,
}

/// Outcome of one applied analysis pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PassSummary {
    /// Tab width the pass ran with.
    pub tab_width: usize,
    /// Whether error classification was skipped for this language.
    pub skip_all_errors: bool,
    /// Total decorations applied across all kinds.
    pub decorations: usize,
    /// Width error ranges.
    pub errors: usize,
    /// Tab-mix ranges.
    pub tab_mix: usize,
}

impl PassSummary {
    fn of(set: &DecorationRangeSet, settings: IndentSettings, skip_all_errors: bool) -> Self {
        Self {
            tab_width: settings.tab_width,
            skip_all_errors,
            decorations: set.decoration_count(),
            errors: set.get(DecorationKind::Error).len(),
            tab_mix: set.get(DecorationKind::TabMix).len(),
        }
    }
}

/// Orchestrates analysis passes for the focused editor.
#[derive(Debug)]
pub struct DecorationSession {
    config: Config,
    patterns: IgnorePatterns,
    policies: LanguagePolicyCache,
    debouncer: Debouncer,
    state: SessionState,
    language: Option<String>,
    policy: LanguagePolicy,
    applied: Option<DecorationRangeSet>,
}

impl DecorationSession {
    /// Create an idle session for `config`.
    pub fn new(config: Config) -> Self {
        let patterns = config.ignore_patterns();
        let policies = LanguagePolicyCache::new(config.language_lists());
        let debouncer = Debouncer::new(config.update_delay);
        Self {
            config,
            patterns,
            policies,
            debouncer,
            state: SessionState::Idle,
            language: None,
            policy: LanguagePolicy::default(),
            applied: None,
        }
    }

    /// Active configuration.
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Current steady state.
    pub fn state(&self) -> SessionState {
        self.state
    }

    /// Language of the focused editor, if any.
    pub fn language(&self) -> Option<&str> {
        self.language.as_deref()
    }

    /// Policy of the focused language.
    pub fn policy(&self) -> LanguagePolicy {
        self.policy
    }

    /// The decoration set currently applied to the sink, if any.
    pub fn last_decorations(&self) -> Option<&DecorationRangeSet> {
        self.applied.as_ref()
    }

    /// When the pending pass becomes due, if one is scheduled.
    pub fn next_deadline(&self) -> Option<Instant> {
        self.debouncer.deadline()
    }

    /// Returns `true` if a pass is scheduled.
    pub fn is_pending(&self) -> bool {
        self.debouncer.is_pending()
    }

    /// Replace the configuration.
    ///
    /// Ignore patterns are recompiled and the language policy cache is rebuilt from scratch.
    /// Decorations applied under the old palette are cleared, then the focused language is
    /// re-evaluated under the new policy.
    pub fn reconfigure<S>(&mut self, config: Config, now: Instant, sink: &mut S)
    where
        S: DecorationSink + ?Sized,
    {
        self.clear_applied(sink);
        self.patterns = config.ignore_patterns();
        self.policies = LanguagePolicyCache::new(config.language_lists());
        self.debouncer = Debouncer::new(config.update_delay);
        self.config = config;
        debug!(
            target: "session.state",
            groups = self.config.group_count(),
            patterns = self.patterns.patterns().len(),
            "session_reconfigured"
        );

        if let Some(language) = self.language.take() {
            self.focus_editor(&language, now, sink);
        } else {
            self.transition(SessionState::Idle);
        }
    }

    /// The host focused an editor (or swapped its document) in `language_id`.
    pub fn focus_editor<S>(&mut self, language_id: &str, now: Instant, sink: &mut S)
    where
        S: DecorationSink + ?Sized,
    {
        self.policy = self.policies.get_for_language(language_id);
        self.language = Some(language_id.to_string());
        self.on_event(now, sink);
    }

    /// The focused document changed.
    pub fn text_changed<S>(&mut self, now: Instant, sink: &mut S)
    where
        S: DecorationSink + ?Sized,
    {
        if self.language.is_none() {
            trace!(target: "session.state", "text_changed_without_editor");
            return;
        }
        self.on_event(now, sink);
    }

    /// Run the scheduled pass if it is due and apply its decorations to `sink`.
    ///
    /// Every kind of the palette is replaced in full. Returns `None` when nothing ran.
    pub fn poll<D, E, S>(
        &mut self,
        now: Instant,
        document: &D,
        settings: &E,
        sink: &mut S,
    ) -> Option<PassSummary>
    where
        D: TextDocument + ?Sized,
        E: EditorSettingsSource + ?Sized,
        S: DecorationSink + ?Sized,
    {
        if self.state != SessionState::Decorating || !self.debouncer.fire(now) {
            return None;
        }

        let settings = IndentSettings::resolve(settings);
        let options = AnalysisOptions::new(settings, self.config.group_count(), &self.patterns)
            .with_skip_all_errors(self.policy.skip_all_errors)
            .with_tab_mix_detection(self.config.detects_tab_mix())
            .with_whitespace_only(self.config.color_on_whitespace_only);

        let decorations = analyze_document(document, &options);
        decorations.apply_to(sink);

        let summary = PassSummary::of(&decorations, settings, self.policy.skip_all_errors);
        debug!(
            target: "session.state",
            language = self.language.as_deref().unwrap_or_default(),
            decorations = summary.decorations,
            errors = summary.errors,
            tab_mix = summary.tab_mix,
            "decorations_applied"
        );
        self.applied = Some(decorations);
        Some(summary)
    }

    /// Drop the scheduled pass without running it. Returns `true` if one was pending.
    pub fn cancel_pending(&mut self) -> bool {
        self.debouncer.cancel()
    }

    fn on_event<S>(&mut self, now: Instant, sink: &mut S)
    where
        S: DecorationSink + ?Sized,
    {
        if self.policy.should_decorate {
            self.transition(SessionState::Decorating);
            self.debouncer.arm(now);
        } else {
            self.debouncer.cancel();
            self.clear_applied(sink);
            self.transition(SessionState::Idle);
        }
    }

    fn clear_applied<S>(&mut self, sink: &mut S)
    where
        S: DecorationSink + ?Sized,
    {
        if let Some(previous) = self.applied.take() {
            DecorationRangeSet::cleared(previous.group_count()).apply_to(sink);
            debug!(target: "session.state", "decorations_cleared");
        }
    }

    fn transition(&mut self, next: SessionState) {
        if self.state == next {
            return;
        }
        debug!(
            target: "session.state",
            from = ?self.state,
            to = ?next,
            language = self.language.as_deref().unwrap_or_default(),
            "session_state_changed"
        );
        self.state = next;
    }
}
