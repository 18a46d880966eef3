// crates/skifinder-core/src/view.rs

//! # View projection
//!
//! Pure derivation of the displayed list from the raw results, recomputed
//! from scratch whenever the raw results or the filter state change. The
//! raw container is never reordered or pruned in place.

use crate::model::ResortRecord;
use std::cmp::Ordering;
use std::str::FromStr;

/// Records shown before the first "show more".
pub const PAGE_FIRST: usize = 12;
/// Records added per "show more".
pub const PAGE_STEP: usize = 6;

/// Sort order for the displayed list.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SortBy {
    /// Highest rating first.
    #[default]
    Rating,
    /// Closest first.
    Distance,
}

impl SortBy {
    pub fn as_str(&self) -> &'static str {
        match self {
            SortBy::Rating => "rating",
            SortBy::Distance => "distance",
        }
    }
}

impl FromStr for SortBy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "rating" => Ok(SortBy::Rating),
            "distance" => Ok(SortBy::Distance),
            other => Err(format!("unknown sort order: {other}")),
        }
    }
}

/// User-adjustable filter state.
///
/// Mutated in place by user interaction, never persisted, and retained
/// across searches (see DESIGN.md for the retention decision).
#[derive(Clone, Debug, PartialEq)]
pub struct FilterState {
    /// Minimum rating, clamped to `[0, 5]`.
    pub min_rating: f64,
    /// Maximum distance in kilometers, clamped to `[0, 200]`.
    pub max_distance: f64,
    pub sort_by: SortBy,
}

impl Default for FilterState {
    fn default() -> Self {
        Self {
            min_rating: 0.0,
            max_distance: 100.0,
            sort_by: SortBy::Rating,
        }
    }
}

impl FilterState {
    pub fn with_min_rating(mut self, min_rating: f64) -> Self {
        self.min_rating = min_rating.clamp(0.0, 5.0);
        self
    }

    pub fn with_max_distance(mut self, max_distance: f64) -> Self {
        self.max_distance = max_distance.clamp(0.0, 200.0);
        self
    }

    pub fn with_sort_by(mut self, sort_by: SortBy) -> Self {
        self.sort_by = sort_by;
        self
    }
}

/// Show-more pagination window over the filtered list.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Window {
    shown: usize,
}

impl Default for Window {
    fn default() -> Self {
        Self { shown: PAGE_FIRST }
    }
}

impl Window {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn shown(&self) -> usize {
        self.shown
    }

    /// Grow the window by one page.
    pub fn show_more(&mut self) {
        self.shown += PAGE_STEP;
    }

    /// Back to the first page. Happens on every new search.
    pub fn reset(&mut self) {
        self.shown = PAGE_FIRST;
    }
}

/// The filtered, sorted, windowed projection handed to the renderer.
#[derive(Debug)]
pub struct ProjectedView<'a> {
    /// Records inside the pagination window, in display order.
    pub visible: Vec<&'a ResortRecord>,
    /// Filtered records beyond the window ("show more" reveals them).
    pub hidden: usize,
}

impl ProjectedView<'_> {
    pub fn is_empty(&self) -> bool {
        self.visible.is_empty()
    }
}

/// Filter and sort the raw results.
///
/// Keeps exactly the records with `rating >= min_rating` and
/// `distance <= max_distance`, sorted per `sort_by`. The sort is stable, so
/// ties keep their original order.
pub fn project<'a>(raw: &'a [ResortRecord], filters: &FilterState) -> Vec<&'a ResortRecord> {
    let mut out: Vec<&ResortRecord> = raw
        .iter()
        .filter(|r| r.rating >= filters.min_rating)
        .filter(|r| r.distance <= filters.max_distance)
        .collect();

    match filters.sort_by {
        SortBy::Rating => {
            out.sort_by(|a, b| b.rating.partial_cmp(&a.rating).unwrap_or(Ordering::Equal))
        }
        SortBy::Distance => {
            out.sort_by(|a, b| a.distance.partial_cmp(&b.distance).unwrap_or(Ordering::Equal))
        }
    }
    out
}

/// [`project`] plus the pagination window.
pub fn project_windowed<'a>(
    raw: &'a [ResortRecord],
    filters: &FilterState,
    window: &Window,
) -> ProjectedView<'a> {
    let mut visible = project(raw, filters);
    let hidden = visible.len().saturating_sub(window.shown());
    visible.truncate(window.shown());
    ProjectedView { visible, hidden }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(name: &str, rating: f64, distance: f64) -> ResortRecord {
        serde_json::from_str(&format!(
            r#"{{"name": "{name}", "address": "{name} Rd", "rating": {rating}, "distance": {distance}, "place_id": "id-{name}"}}"#
        ))
        .unwrap()
    }

    fn vermont() -> Vec<ResortRecord> {
        vec![
            record("Killington Resort", 4.6, 5.2),
            record("Stowe Mountain Resort", 4.8, 8.1),
            record("Mount Snow", 4.5, 12.7),
        ]
    }

    fn names(view: &[&ResortRecord]) -> Vec<String> {
        view.iter().map(|r| r.name.clone()).collect()
    }

    #[test]
    fn default_filters_sort_by_rating_descending() {
        let raw = vermont();
        let shown = project(&raw, &FilterState::default());
        assert_eq!(
            names(&shown),
            ["Stowe Mountain Resort", "Killington Resort", "Mount Snow"]
        );
    }

    #[test]
    fn min_rating_filter_keeps_only_matching_records() {
        let raw = vermont();
        let filters = FilterState::default().with_min_rating(4.7);
        assert_eq!(names(&project(&raw, &filters)), ["Stowe Mountain Resort"]);
    }

    #[test]
    fn max_distance_filter_keeps_only_matching_records() {
        let raw = vermont();
        let filters = FilterState::default().with_max_distance(6.0);
        assert_eq!(names(&project(&raw, &filters)), ["Killington Resort"]);
    }

    #[test]
    fn distance_sort_is_ascending() {
        let raw = vermont();
        let filters = FilterState::default().with_sort_by(SortBy::Distance);
        assert_eq!(
            names(&project(&raw, &filters)),
            ["Killington Resort", "Stowe Mountain Resort", "Mount Snow"]
        );
    }

    #[test]
    fn projection_is_pure_and_non_destructive() {
        let raw = vermont();
        let filters = FilterState::default();
        let first = names(&project(&raw, &filters));
        let second = names(&project(&raw, &filters));
        assert_eq!(first, second);
        // The raw container keeps its original order.
        assert_eq!(raw[0].name, "Killington Resort");
        assert_eq!(raw[2].name, "Mount Snow");
    }

    #[test]
    fn ties_keep_original_order() {
        let raw = vec![
            record("A", 4.5, 1.0),
            record("B", 4.5, 2.0),
            record("C", 4.5, 3.0),
        ];
        let shown = project(&raw, &FilterState::default());
        assert_eq!(names(&shown), ["A", "B", "C"]);
    }

    #[test]
    fn no_record_is_duplicated_or_dropped() {
        let raw = vermont();
        let shown = project(&raw, &FilterState::default());
        assert_eq!(shown.len(), raw.len());
        let mut ids: Vec<_> = shown.iter().map(|r| r.place_id.clone()).collect();
        ids.sort();
        ids.dedup();
        assert_eq!(ids.len(), raw.len());
    }

    #[test]
    fn window_grows_and_resets() {
        let raw: Vec<ResortRecord> = (0..20)
            .map(|i| record(&format!("R{i}"), 4.0, 1.0 + i as f64))
            .collect();
        let filters = FilterState::default();
        let mut window = Window::new();

        let view = project_windowed(&raw, &filters, &window);
        assert_eq!(view.visible.len(), PAGE_FIRST);
        assert_eq!(view.hidden, 8);

        window.show_more();
        let view = project_windowed(&raw, &filters, &window);
        assert_eq!(view.visible.len(), PAGE_FIRST + PAGE_STEP);
        assert_eq!(view.hidden, 2);

        window.reset();
        let view = project_windowed(&raw, &filters, &window);
        assert_eq!(view.visible.len(), PAGE_FIRST);
    }

    #[test]
    fn filter_bounds_are_clamped() {
        let filters = FilterState::default()
            .with_min_rating(9.0)
            .with_max_distance(500.0);
        assert_eq!(filters.min_rating, 5.0);
        assert_eq!(filters.max_distance, 200.0);
    }
}
