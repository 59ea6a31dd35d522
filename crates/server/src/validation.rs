//! Payload validation for the catalog endpoints. The store accepts any
//! well-typed input; everything rejected here never reaches it.

use std::sync::LazyLock;

use regex::Regex;
use serde_json::{Value, json};

use aflam_catalog::categories::{CategoryPatch, NewCategory};
use aflam_catalog::episodes::{EpisodePatch, NewEpisode};
use aflam_catalog::movies::{MoviePatch, NewMovie};
use aflam_catalog::series::{NewSeries, SeriesPatch};

static RATING_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\d{1,2}(\.\d{1,2})?$").unwrap());

fn check_rating(fields: &mut serde_json::Map<String, Value>, rating: Option<&str>) {
    if let Some(rating) = rating {
        if !RATING_RE.is_match(rating) {
            fields.insert(
                "rating".to_string(),
                json!(["must be a decimal value such as \"8.8\""]),
            );
        }
    }
}

fn check_title_pair(fields: &mut serde_json::Map<String, Value>, title: &str, title_ar: &str) {
    if title.trim().is_empty() {
        fields.insert("title".to_string(), json!(["must not be empty"]));
    }
    if title_ar.trim().is_empty() {
        fields.insert("titleAr".to_string(), json!(["must not be empty"]));
    }
}

fn finish(fields: serde_json::Map<String, Value>) -> Option<Value> {
    if fields.is_empty() {
        None
    } else {
        Some(Value::Object(fields))
    }
}

/// Validate a movie create payload. Returns field errors or None.
pub fn validate_new_movie(movie: &NewMovie) -> Option<Value> {
    let mut fields = serde_json::Map::new();
    check_title_pair(&mut fields, &movie.title, &movie.title_ar);
    check_rating(&mut fields, movie.rating.as_deref());
    if let Some(duration) = movie.duration {
        if duration <= 0 {
            fields.insert("duration".to_string(), json!(["must be positive minutes"]));
        }
    }
    finish(fields)
}

/// Validate a movie update payload: supplied fields must still be valid.
pub fn validate_movie_patch(patch: &MoviePatch) -> Option<Value> {
    let mut fields = serde_json::Map::new();
    if patch.title.as_deref().is_some_and(|t| t.trim().is_empty()) {
        fields.insert("title".to_string(), json!(["must not be empty"]));
    }
    if patch
        .title_ar
        .as_deref()
        .is_some_and(|t| t.trim().is_empty())
    {
        fields.insert("titleAr".to_string(), json!(["must not be empty"]));
    }
    if let Some(Some(rating)) = &patch.rating {
        check_rating(&mut fields, Some(rating));
    }
    finish(fields)
}

pub fn validate_new_series(series: &NewSeries) -> Option<Value> {
    let mut fields = serde_json::Map::new();
    check_title_pair(&mut fields, &series.title, &series.title_ar);
    check_rating(&mut fields, series.rating.as_deref());
    if series.seasons.is_some_and(|s| s <= 0) {
        fields.insert("seasons".to_string(), json!(["must be positive"]));
    }
    if series.episodes.is_some_and(|e| e < 0) {
        fields.insert("episodes".to_string(), json!(["must not be negative"]));
    }
    finish(fields)
}

pub fn validate_series_patch(patch: &SeriesPatch) -> Option<Value> {
    let mut fields = serde_json::Map::new();
    if patch.title.as_deref().is_some_and(|t| t.trim().is_empty()) {
        fields.insert("title".to_string(), json!(["must not be empty"]));
    }
    if patch
        .title_ar
        .as_deref()
        .is_some_and(|t| t.trim().is_empty())
    {
        fields.insert("titleAr".to_string(), json!(["must not be empty"]));
    }
    if let Some(Some(rating)) = &patch.rating {
        check_rating(&mut fields, Some(rating));
    }
    if let Some(Some(seasons)) = patch.seasons {
        if seasons <= 0 {
            fields.insert("seasons".to_string(), json!(["must be positive"]));
        }
    }
    finish(fields)
}

pub fn validate_new_episode(episode: &NewEpisode) -> Option<Value> {
    let mut fields = serde_json::Map::new();
    check_title_pair(&mut fields, &episode.title, &episode.title_ar);
    if episode.season < 1 {
        fields.insert("season".to_string(), json!(["must be at least 1"]));
    }
    if episode.episode < 1 {
        fields.insert("episode".to_string(), json!(["must be at least 1"]));
    }
    finish(fields)
}

pub fn validate_episode_patch(patch: &EpisodePatch) -> Option<Value> {
    let mut fields = serde_json::Map::new();
    if patch.title.as_deref().is_some_and(|t| t.trim().is_empty()) {
        fields.insert("title".to_string(), json!(["must not be empty"]));
    }
    if patch
        .title_ar
        .as_deref()
        .is_some_and(|t| t.trim().is_empty())
    {
        fields.insert("titleAr".to_string(), json!(["must not be empty"]));
    }
    if patch.season.is_some_and(|s| s < 1) {
        fields.insert("season".to_string(), json!(["must be at least 1"]));
    }
    if patch.episode.is_some_and(|e| e < 1) {
        fields.insert("episode".to_string(), json!(["must be at least 1"]));
    }
    finish(fields)
}

pub fn validate_new_category(category: &NewCategory) -> Option<Value> {
    let mut fields = serde_json::Map::new();
    if category.name.trim().is_empty() {
        fields.insert("name".to_string(), json!(["must not be empty"]));
    }
    if category.name_ar.trim().is_empty() {
        fields.insert("nameAr".to_string(), json!(["must not be empty"]));
    }
    finish(fields)
}

pub fn validate_category_patch(patch: &CategoryPatch) -> Option<Value> {
    let mut fields = serde_json::Map::new();
    if patch.name.as_deref().is_some_and(|n| n.trim().is_empty()) {
        fields.insert("name".to_string(), json!(["must not be empty"]));
    }
    if patch
        .name_ar
        .as_deref()
        .is_some_and(|n| n.trim().is_empty())
    {
        fields.insert("nameAr".to_string(), json!(["must not be empty"]));
    }
    finish(fields)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn movie(title: &str, title_ar: &str) -> NewMovie {
        serde_json::from_value(json!({ "title": title, "titleAr": title_ar })).unwrap()
    }

    #[test]
    fn blank_arabic_title_is_rejected_with_field_detail() {
        let errors = validate_new_movie(&movie("Inception", "  ")).unwrap();
        assert!(errors.get("titleAr").is_some());
        assert!(errors.get("title").is_none());
    }

    #[test]
    fn well_formed_movie_passes() {
        assert!(validate_new_movie(&movie("Inception", "البداية")).is_none());
    }

    #[test]
    fn rating_must_look_like_a_decimal() {
        let mut input = movie("Inception", "البداية");
        input.rating = Some("excellent".to_string());
        let errors = validate_new_movie(&input).unwrap();
        assert!(errors.get("rating").is_some());

        input.rating = Some("8.8".to_string());
        assert!(validate_new_movie(&input).is_none());
    }

    #[test]
    fn patch_may_omit_titles_but_not_blank_them() {
        assert!(validate_movie_patch(&MoviePatch::default()).is_none());
        let errors = validate_movie_patch(&MoviePatch {
            title_ar: Some(String::new()),
            ..MoviePatch::default()
        })
        .unwrap();
        assert!(errors.get("titleAr").is_some());
    }
}
