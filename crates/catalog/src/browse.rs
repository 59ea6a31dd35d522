//! Consumer-side query composition: filtering a listed collection by the
//! search substring rule, sorting for display, and capping mixed-view
//! search previews. The store itself stays order-preserving; everything
//! here operates on records the store already returned.

use chrono::{DateTime, Utc};
use serde::Deserialize;

use crate::movies::Movie;
use crate::series::Series;

/// Sort order for catalog listings.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SortKey {
    #[default]
    Newest,
    Oldest,
    Rating,
    Title,
}

/// Result layout; the mixed-view preview cap depends on it.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Layout {
    #[default]
    Grid,
    List,
}

impl Layout {
    pub fn preview_len(self) -> usize {
        match self {
            Self::Grid => 6,
            Self::List => 3,
        }
    }
}

/// A record the browse composition can filter and sort.
pub trait Browsable {
    fn title(&self) -> &str;
    fn title_ar(&self) -> &str;
    fn description(&self) -> Option<&str>;
    fn description_ar(&self) -> Option<&str>;
    fn rating(&self) -> Option<&str>;
    fn created_at(&self) -> DateTime<Utc>;
}

impl Browsable for Movie {
    fn title(&self) -> &str {
        &self.title
    }
    fn title_ar(&self) -> &str {
        &self.title_ar
    }
    fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }
    fn description_ar(&self) -> Option<&str> {
        self.description_ar.as_deref()
    }
    fn rating(&self) -> Option<&str> {
        self.rating.as_deref()
    }
    fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }
}

impl Browsable for Series {
    fn title(&self) -> &str {
        &self.title
    }
    fn title_ar(&self) -> &str {
        &self.title_ar
    }
    fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }
    fn description_ar(&self) -> Option<&str> {
        self.description_ar.as_deref()
    }
    fn rating(&self) -> Option<&str> {
        self.rating.as_deref()
    }
    fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }
}

/// Drop records that do not contain `query` in any searchable field. Same
/// substring rule as the store's search: case-normalized for the source
/// language, raw containment for Arabic.
pub fn filter_by_query<T: Browsable>(items: &mut Vec<T>, query: &str) {
    let needle = query.to_lowercase();
    items.retain(|item| {
        item.title().to_lowercase().contains(&needle)
            || item.title_ar().contains(&needle)
            || item
                .description()
                .is_some_and(|d| d.to_lowercase().contains(&needle))
            || item.description_ar().is_some_and(|d| d.contains(&needle))
    });
}

/// Sort in place. Ties keep their collection order (stable sort), so equal
/// keys preserve insertion order. `Rating` treats a missing or unparseable
/// rating as 0.
pub fn sort<T: Browsable>(items: &mut [T], key: SortKey) {
    match key {
        SortKey::Newest => items.sort_by(|a, b| b.created_at().cmp(&a.created_at())),
        SortKey::Oldest => items.sort_by(|a, b| a.created_at().cmp(&b.created_at())),
        SortKey::Rating => {
            items.sort_by(|a, b| rating_value(b.rating()).total_cmp(&rating_value(a.rating())))
        }
        SortKey::Title => items.sort_by_cached_key(|item| collation_key(item.title_ar())),
    }
}

/// Apply the mixed-view preview cap: a search combined with the "all types"
/// selection truncates each kind's list; a single-type view never does.
pub fn preview_cap<T>(items: &mut Vec<T>, mixed_view: bool, layout: Layout) {
    if mixed_view {
        items.truncate(layout.preview_len());
    }
}

fn rating_value(rating: Option<&str>) -> f64 {
    rating.and_then(|r| r.trim().parse::<f64>().ok()).unwrap_or(0.0)
}

/// Ordering key approximating Arabic collation: unify alef and hamza
/// carrier variants, drop tatweel and combining harakat, then compare by
/// codepoint (Unicode orders the bare Arabic letters alphabetically).
fn collation_key(s: &str) -> String {
    s.chars()
        .filter_map(|c| match c {
            '\u{0622}' | '\u{0623}' | '\u{0625}' | '\u{0671}' => Some('\u{0627}'),
            '\u{0624}' => Some('\u{0648}'),
            '\u{0626}' => Some('\u{064A}'),
            '\u{0640}' => None,
            '\u{064B}'..='\u{0652}' => None,
            _ => Some(c),
        })
        .collect()
}
