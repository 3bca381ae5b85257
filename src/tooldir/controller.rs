//! # Interaction Controller
//!
//! The [`Controller`] owns the live [`FilterCriteria`] of a directory view and
//! is the only thing that mutates it.
//!
//! Text input is debounced: [`Controller::set_query_text`] updates the pending
//! text right away (so an input field can echo every keystroke) but the
//! committed query only changes once typing has paused for the quiet window.
//! Facet and sort changes are discrete and commit immediately.
//!
//! Nothing is recomputed implicitly. After a commit (any setter or a `poll`
//! that returns `true`) the caller asks for [`Controller::results`] again.
//!
//! ```text
//! keystroke ──▶ pending_text ──▶ Debouncer ──(quiet window)──▶ criteria.query
//! facet/sort ───────────────────────────────────────────────▶ criteria.*
//! ```

use crate::debounce::{Debouncer, DEFAULT_QUIET_WINDOW};
use crate::model::{Category, Facet, FilterCriteria, Pricing, SortBy, Tool};
use crate::query::evaluate;
use std::time::{Duration, Instant};
use tracing::debug;

#[derive(Debug, Clone)]
pub struct Controller {
    defaults: FilterCriteria,
    criteria: FilterCriteria,
    pending_text: String,
    debouncer: Debouncer<String>,
    revision: u64,
}

impl Default for Controller {
    fn default() -> Self {
        Self::new(DEFAULT_QUIET_WINDOW)
    }
}

impl Controller {
    /// A controller starting from the stock defaults (empty query, all
    /// facets, most popular first).
    pub fn new(quiet_window: Duration) -> Self {
        Self::with_defaults(FilterCriteria::default(), quiet_window)
    }

    /// A controller whose starting point, and `reset` target, is `defaults`.
    pub fn with_defaults(defaults: FilterCriteria, quiet_window: Duration) -> Self {
        Self {
            pending_text: defaults.query.clone(),
            criteria: defaults.clone(),
            defaults,
            debouncer: Debouncer::new(quiet_window),
            revision: 0,
        }
    }

    /// The committed criteria, i.e. what results are computed from.
    pub fn criteria(&self) -> &FilterCriteria {
        &self.criteria
    }

    /// What the search field currently shows, committed or not.
    pub fn pending_text(&self) -> &str {
        &self.pending_text
    }

    /// Increments once per committed change.
    pub fn revision(&self) -> u64 {
        self.revision
    }

    /// True while a text commit is waiting for the quiet window.
    pub fn is_settling(&self) -> bool {
        self.debouncer.is_pending()
    }

    pub fn set_query_text(&mut self, text: impl Into<String>) {
        self.set_query_text_at(text, Instant::now());
    }

    /// Records a keystroke at `now`. Any earlier, not yet committed text is
    /// superseded.
    pub fn set_query_text_at(&mut self, text: impl Into<String>, now: Instant) {
        let text = text.into();
        self.pending_text.clone_from(&text);
        self.debouncer.schedule(text, now);
    }

    pub fn poll(&mut self) -> bool {
        self.poll_at(Instant::now())
    }

    /// Commits the pending text if the quiet window has elapsed by `now`.
    /// Returns whether the criteria changed. Text equal to the committed
    /// query is dropped without a commit.
    pub fn poll_at(&mut self, now: Instant) -> bool {
        match self.debouncer.poll(now) {
            Some(text) => self.commit_query(text),
            None => false,
        }
    }

    /// Commits the pending text immediately, skipping the rest of the window.
    pub fn flush(&mut self) -> bool {
        self.debouncer.cancel();
        let text = self.pending_text.clone();
        self.commit_query(text)
    }

    fn commit_query(&mut self, text: String) -> bool {
        if text == self.criteria.query {
            return false;
        }
        self.criteria.query = text;
        self.committed("query")
    }

    pub fn set_category(&mut self, category: Facet<Category>) -> bool {
        if self.criteria.category == category {
            return false;
        }
        self.criteria.category = category;
        self.committed("category")
    }

    pub fn set_pricing(&mut self, pricing: Facet<Pricing>) -> bool {
        if self.criteria.pricing == pricing {
            return false;
        }
        self.criteria.pricing = pricing;
        self.committed("pricing")
    }

    pub fn set_sort_by(&mut self, sort_by: SortBy) -> bool {
        if self.criteria.sort_by == sort_by {
            return false;
        }
        self.criteria.sort_by = sort_by;
        self.committed("sort")
    }

    /// Back to the defaults, synchronously. Pending text is cleared and any
    /// scheduled text commit is cancelled.
    pub fn reset(&mut self) -> bool {
        self.debouncer.cancel();
        self.pending_text.clone_from(&self.defaults.query);
        if self.criteria == self.defaults {
            return false;
        }
        self.criteria = self.defaults.clone();
        self.committed("reset")
    }

    /// Evaluates the committed criteria against `catalog`.
    pub fn results<'a>(&self, catalog: &'a [Tool]) -> Vec<&'a Tool> {
        evaluate(catalog, &self.criteria)
    }

    fn committed(&mut self, field: &str) -> bool {
        self.revision += 1;
        debug!(
            revision = self.revision,
            field,
            query = %self.criteria.query,
            category = %self.criteria.category,
            pricing = %self.criteria.pricing,
            sort = %self.criteria.sort_by,
            "criteria committed"
        );
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::memory::fixtures::scenario_tools;

    const WINDOW: Duration = Duration::from_millis(300);

    fn ms(n: u64) -> Duration {
        Duration::from_millis(n)
    }

    #[test]
    fn starts_from_defaults() {
        let c = Controller::default();
        assert_eq!(c.criteria(), &FilterCriteria::default());
        assert_eq!(c.pending_text(), "");
        assert_eq!(c.revision(), 0);
    }

    #[test]
    fn burst_of_keystrokes_commits_once_with_final_text() {
        let t0 = Instant::now();
        let mut c = Controller::new(WINDOW);
        c.set_query_text_at("w", t0);
        c.set_query_text_at("wr", t0 + ms(100));
        c.set_query_text_at("wri", t0 + ms(200));

        assert!(!c.poll_at(t0 + ms(400)));
        assert!(c.poll_at(t0 + ms(500)));
        assert!(!c.poll_at(t0 + ms(2000)));

        assert_eq!(c.criteria().query, "wri");
        assert_eq!(c.revision(), 1);
    }

    #[test]
    fn pending_text_is_visible_before_commit() {
        let t0 = Instant::now();
        let mut c = Controller::new(WINDOW);
        c.set_query_text_at("beta", t0);
        assert_eq!(c.pending_text(), "beta");
        assert_eq!(c.criteria().query, "");
        assert!(c.is_settling());
    }

    #[test]
    fn unchanged_text_is_not_recommitted() {
        let t0 = Instant::now();
        let mut c = Controller::new(WINDOW);
        c.set_query_text_at("a", t0);
        assert!(c.poll_at(t0 + ms(300)));

        c.set_query_text_at("ab", t0 + ms(400));
        c.set_query_text_at("a", t0 + ms(450));
        assert!(!c.poll_at(t0 + ms(800)));
        assert_eq!(c.revision(), 1);
        assert!(!c.is_settling());
    }

    #[test]
    fn facet_and_sort_setters_commit_immediately() {
        let mut c = Controller::default();
        assert!(c.set_category(Facet::Only(Category::Image)));
        assert!(c.set_pricing(Facet::Only(Pricing::Paid)));
        assert!(c.set_sort_by(SortBy::Newest));
        assert_eq!(c.revision(), 3);
        assert!(!c.set_sort_by(SortBy::Newest));
        assert_eq!(c.revision(), 3);
    }

    #[test]
    fn reset_restores_defaults_and_cancels_pending_text() {
        let t0 = Instant::now();
        let mut c = Controller::new(WINDOW);
        c.set_category(Facet::Only(Category::Code));
        c.set_query_text_at("stack", t0);

        assert!(c.reset());
        assert_eq!(c.criteria(), &FilterCriteria::default());
        assert_eq!(c.pending_text(), "");
        assert!(!c.poll_at(t0 + ms(1000)));
        assert_eq!(c.criteria().query, "");
    }

    #[test]
    fn reset_targets_configured_defaults() {
        let defaults = FilterCriteria::default().with_sort(SortBy::Name);
        let mut c = Controller::with_defaults(defaults.clone(), WINDOW);
        c.set_sort_by(SortBy::Popular);
        c.reset();
        assert_eq!(c.criteria(), &defaults);
    }

    #[test]
    fn flush_commits_without_waiting() {
        let t0 = Instant::now();
        let mut c = Controller::new(WINDOW);
        c.set_query_text_at("vision", t0);
        assert!(c.flush());
        assert_eq!(c.criteria().query, "vision");
        assert!(!c.poll_at(t0 + ms(1000)));
    }

    #[test]
    fn results_follow_committed_criteria_only() {
        let catalog = scenario_tools();
        let t0 = Instant::now();
        let mut c = Controller::new(WINDOW);

        c.set_query_text_at("writ", t0);
        assert_eq!(c.results(&catalog).len(), 2);

        c.poll_at(t0 + WINDOW);
        let ids: Vec<_> = c.results(&catalog).iter().map(|t| t.id.clone()).collect();
        assert_eq!(ids, ["a"]);
    }
}
