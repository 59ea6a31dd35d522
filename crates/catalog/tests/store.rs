use std::sync::Arc;

use aflam_catalog::CatalogStore;
use aflam_catalog::clock::ManualClock;
use aflam_catalog::episodes::{EpisodePatch, NewEpisode};
use aflam_catalog::movies::{MoviePatch, NewMovie};
use aflam_catalog::series::{NewSeries, SeriesPatch};
use aflam_core::types::SeriesStatus;
use chrono::{DateTime, Duration, TimeZone, Utc};

fn start_time() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 6, 1, 12, 0, 0).unwrap()
}

fn test_store() -> (CatalogStore, Arc<ManualClock>) {
    let clock = Arc::new(ManualClock::new(start_time()));
    (CatalogStore::with_clock(clock.clone()), clock)
}

fn new_movie(title: &str, title_ar: &str) -> NewMovie {
    NewMovie {
        title: title.to_string(),
        title_ar: title_ar.to_string(),
        description: None,
        description_ar: None,
        poster_url: None,
        trailer_url: None,
        year: None,
        rating: None,
        genre: None,
        director: None,
        actors: None,
        duration: None,
        quality: "HD".to_string(),
        language: "Arabic".to_string(),
        subtitles: Vec::new(),
        featured: false,
    }
}

fn new_series(title: &str, title_ar: &str) -> NewSeries {
    NewSeries {
        title: title.to_string(),
        title_ar: title_ar.to_string(),
        description: None,
        description_ar: None,
        poster_url: None,
        year: None,
        rating: None,
        genre: None,
        actors: None,
        seasons: None,
        episodes: None,
        status: SeriesStatus::Ongoing,
        language: "Arabic".to_string(),
        featured: false,
    }
}

fn new_episode(series_id: i64, season: i32, episode: i32) -> NewEpisode {
    NewEpisode {
        series_id,
        title: format!("Episode {episode}"),
        title_ar: format!("الحلقة {episode}"),
        season,
        episode,
        description: None,
        duration: None,
        video_url: None,
        thumbnail_url: None,
        quality: "HD".to_string(),
    }
}

#[test]
fn create_then_get_round_trips() {
    let (store, _) = test_store();
    let mut input = new_movie("Inception", "البداية");
    input.year = Some(2010);
    input.rating = Some("8.8".to_string());
    input.director = Some("Christopher Nolan".to_string());

    let created = store.create_movie(input);
    assert_eq!(created.id, 1);
    assert_eq!(created.created_at, start_time());
    assert_eq!(created.updated_at, start_time());

    let fetched = store.get_movie(created.id).unwrap();
    assert_eq!(fetched.id, created.id);
    assert_eq!(fetched.title, created.title);
    assert_eq!(fetched.title_ar, created.title_ar);
    assert_eq!(fetched.year, created.year);
    assert_eq!(fetched.rating, created.rating);
    assert_eq!(fetched.director, created.director);
    assert_eq!(fetched.created_at, created.created_at);
    assert_eq!(fetched.updated_at, created.updated_at);
}

#[test]
fn ids_are_strictly_increasing_and_never_reused() {
    let (store, _) = test_store();
    let a = store.create_movie(new_movie("A", "أ"));
    let b = store.create_movie(new_movie("B", "ب"));
    assert_eq!((a.id, b.id), (1, 2));

    assert!(store.delete_movie(b.id));
    let c = store.create_movie(new_movie("C", "ت"));
    assert_eq!(c.id, 3);

    // Counters are per kind: series identity starts over at 1.
    let s = store.create_series(new_series("S", "س"));
    assert_eq!(s.id, 1);
}

#[test]
fn list_preserves_insertion_order() {
    let (store, _) = test_store();
    for title in ["first", "second", "third"] {
        store.create_movie(new_movie(title, "عنوان"));
    }
    let listed: Vec<String> = store.list_movies().into_iter().map(|m| m.title).collect();
    assert_eq!(listed, ["first", "second", "third"]);
}

#[test]
fn update_merges_only_supplied_fields() {
    let (store, clock) = test_store();
    let mut input = new_movie("Inception", "البداية");
    input.description = Some("A thief who steals corporate secrets".to_string());
    input.year = Some(2010);
    let created = store.create_movie(input);

    clock.advance(Duration::seconds(30));
    let updated = store
        .update_movie(
            created.id,
            MoviePatch {
                rating: Some(Some("8.8".to_string())),
                featured: Some(true),
                ..MoviePatch::default()
            },
        )
        .unwrap();

    assert_eq!(updated.rating.as_deref(), Some("8.8"));
    assert!(updated.featured);
    // Everything not in the patch is untouched.
    assert_eq!(updated.title, "Inception");
    assert_eq!(updated.title_ar, "البداية");
    assert_eq!(updated.description, created.description);
    assert_eq!(updated.year, Some(2010));
    // Creation stamp is stable, modification stamp refreshed.
    assert_eq!(updated.created_at, start_time());
    assert_eq!(updated.updated_at, start_time() + Duration::seconds(30));
}

#[test]
fn update_distinguishes_absent_from_explicit_clear() {
    let (store, _) = test_store();
    let mut input = new_movie("Parasite", "الطفيلي");
    input.description = Some("A poor family schemes".to_string());
    input.director = Some("Bong Joon-ho".to_string());
    let created = store.create_movie(input);

    let updated = store
        .update_movie(
            created.id,
            MoviePatch {
                director: Some(None),
                ..MoviePatch::default()
            },
        )
        .unwrap();

    assert_eq!(updated.director, None);
    assert_eq!(
        updated.description.as_deref(),
        Some("A poor family schemes")
    );
}

#[test]
fn episode_update_has_no_modification_timestamp() {
    let (store, clock) = test_store();
    let created = store.create_episode(new_episode(1, 1, 1));

    clock.advance(Duration::seconds(60));
    let updated = store
        .update_episode(
            created.id,
            EpisodePatch {
                title: Some("Pilot".to_string()),
                ..EpisodePatch::default()
            },
        )
        .unwrap();

    assert_eq!(updated.title, "Pilot");
    assert_eq!(updated.created_at, start_time());
}

#[test]
fn series_update_refreshes_modification_timestamp() {
    let (store, clock) = test_store();
    let created = store.create_series(new_series("Breaking Bad", "بريكينغ باد"));

    clock.advance(Duration::seconds(45));
    let updated = store
        .update_series(
            created.id,
            SeriesPatch {
                status: Some(SeriesStatus::Completed),
                ..SeriesPatch::default()
            },
        )
        .unwrap();

    assert_eq!(updated.status, SeriesStatus::Completed);
    assert_eq!(updated.created_at, start_time());
    assert_eq!(updated.updated_at, start_time() + Duration::seconds(45));
}

#[test]
fn update_unknown_id_returns_none_and_changes_nothing() {
    let (store, _) = test_store();
    let created = store.create_movie(new_movie("Inception", "البداية"));

    let result = store.update_movie(
        999,
        MoviePatch {
            title: Some("overwritten".to_string()),
            ..MoviePatch::default()
        },
    );
    assert!(result.is_none());

    let untouched = store.get_movie(created.id).unwrap();
    assert_eq!(untouched.title, "Inception");
    assert_eq!(untouched.updated_at, start_time());
}

#[test]
fn delete_is_permanent_and_idempotent_in_effect() {
    let (store, _) = test_store();
    let created = store.create_movie(new_movie("Inception", "البداية"));

    assert!(store.delete_movie(created.id));
    assert!(store.get_movie(created.id).is_none());
    assert!(!store.delete_movie(created.id));
    assert!(store.list_movies().is_empty());
}

#[test]
fn search_covers_all_four_fields_with_case_rules() {
    let (store, _) = test_store();
    let mut inception = new_movie("Inception", "البداية");
    inception.year = Some(2010);
    inception.rating = Some("8.8".to_string());
    inception.description = Some("A thief who steals corporate secrets".to_string());
    inception.description_ar = Some("لص يسرق أسرار الشركات".to_string());
    store.create_movie(inception);

    // Case-insensitive over the source-language title.
    let hits = store.search_movies("incep");
    assert_eq!(hits.len(), 1);
    assert_eq!(hits[0].title, "Inception");

    // Raw substring over the Arabic title.
    assert_eq!(store.search_movies("بداية").len(), 1);
    // Description fields in both languages.
    assert_eq!(store.search_movies("CORPORATE").len(), 1);
    assert_eq!(store.search_movies("أسرار").len(), 1);
    // No match anywhere.
    assert!(store.search_movies("matrix").is_empty());
}

#[test]
fn search_skips_records_with_absent_optional_fields() {
    let (store, _) = test_store();
    store.create_movie(new_movie("Bare", "عاري"));
    let mut described = new_movie("Other", "آخر");
    described.description = Some("hidden keyword".to_string());
    store.create_movie(described);

    let hits = store.search_movies("keyword");
    assert_eq!(hits.len(), 1);
    assert_eq!(hits[0].title, "Other");
}

#[test]
fn featured_returns_exactly_the_flagged_subset_in_order() {
    let (store, _) = test_store();
    for (title, featured) in [("a", true), ("b", false), ("c", true), ("d", false)] {
        let mut input = new_movie(title, "عنوان");
        input.featured = featured;
        store.create_movie(input);
    }
    let featured: Vec<String> = store
        .featured_movies()
        .into_iter()
        .map(|m| m.title)
        .collect();
    assert_eq!(featured, ["a", "c"]);
}

#[test]
fn episodes_by_series_matches_stored_foreign_key_only() {
    let (store, _) = test_store();
    let mut series_input = new_series("Breaking Bad", "بريكينغ باد");
    series_input.seasons = Some(5);
    let series = store.create_series(series_input);

    for episode in 1..=3 {
        store.create_episode(new_episode(series.id, 1, episode));
    }
    store.create_episode(new_episode(777, 1, 1)); // dangling parent id

    assert_eq!(store.list_episodes().len(), 4);
    let episodes = store.episodes_by_series(series.id);
    assert_eq!(episodes.len(), 3);
    let numbers: Vec<i32> = episodes.iter().map(|e| e.episode).collect();
    assert_eq!(numbers, [1, 2, 3]);

    // The relation is a plain value copy: a series id with no series record
    // still answers.
    let dangling = store.episodes_by_series(777);
    assert_eq!(dangling.len(), 1);
    assert!(store.get_series(777).is_none());
}

#[test]
fn returned_records_are_snapshots() {
    let (store, _) = test_store();
    let mut created = store.create_movie(new_movie("Inception", "البداية"));
    created.title = "mutated locally".to_string();

    let stored = store.get_movie(created.id).unwrap();
    assert_eq!(stored.title, "Inception");
}

#[test]
fn category_crud_round_trip() {
    use aflam_catalog::categories::{CategoryPatch, NewCategory};
    use aflam_core::types::ContentKind;

    let (store, _) = test_store();
    let created = store.create_category(NewCategory {
        name: "Action".to_string(),
        name_ar: "أكشن".to_string(),
        kind: ContentKind::Movie,
        icon: Some("🎬".to_string()),
    });
    assert_eq!(created.id, 1);

    let updated = store
        .update_category(
            created.id,
            CategoryPatch {
                kind: Some(ContentKind::Series),
                ..CategoryPatch::default()
            },
        )
        .unwrap();
    assert_eq!(updated.kind, ContentKind::Series);
    assert_eq!(updated.name_ar, "أكشن");

    assert!(store.delete_category(created.id));
    assert!(store.get_category(created.id).is_none());
}

#[test]
fn patch_deserialization_keeps_absent_and_null_distinct() {
    let patch: MoviePatch =
        serde_json::from_str(r#"{ "titleAr": "عنوان", "director": null }"#).unwrap();
    assert_eq!(patch.title_ar.as_deref(), Some("عنوان"));
    assert_eq!(patch.director, Some(None));
    assert_eq!(patch.description, None);
    assert!(patch.title.is_none());
}
