use aflam_core::types::SeriesStatus;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::{CatalogStore, arabic_contains, default_language, latin_contains, read, write};

/// A series record. Unlike movies there is no runtime, director, or trailer.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Series {
    pub id: i64,
    pub title: String,
    pub title_ar: String,
    pub description: Option<String>,
    pub description_ar: Option<String>,
    pub poster_url: Option<String>,
    pub year: Option<i32>,
    pub rating: Option<String>,
    pub genre: Option<Vec<String>>,
    pub actors: Option<Vec<String>>,
    pub seasons: Option<i32>,
    /// Total episode count across all seasons.
    pub episodes: Option<i32>,
    pub status: SeriesStatus,
    pub language: String,
    pub featured: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Series create input.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewSeries {
    pub title: String,
    pub title_ar: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub description_ar: Option<String>,
    #[serde(default)]
    pub poster_url: Option<String>,
    #[serde(default)]
    pub year: Option<i32>,
    #[serde(default)]
    pub rating: Option<String>,
    #[serde(default)]
    pub genre: Option<Vec<String>>,
    #[serde(default)]
    pub actors: Option<Vec<String>>,
    #[serde(default)]
    pub seasons: Option<i32>,
    #[serde(default)]
    pub episodes: Option<i32>,
    #[serde(default)]
    pub status: SeriesStatus,
    #[serde(default = "default_language")]
    pub language: String,
    #[serde(default)]
    pub featured: bool,
}

/// Partial series update; same absent/null dichotomy as `MoviePatch`.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SeriesPatch {
    pub title: Option<String>,
    pub title_ar: Option<String>,
    #[serde(default, deserialize_with = "crate::double_option")]
    pub description: Option<Option<String>>,
    #[serde(default, deserialize_with = "crate::double_option")]
    pub description_ar: Option<Option<String>>,
    #[serde(default, deserialize_with = "crate::double_option")]
    pub poster_url: Option<Option<String>>,
    #[serde(default, deserialize_with = "crate::double_option")]
    pub year: Option<Option<i32>>,
    #[serde(default, deserialize_with = "crate::double_option")]
    pub rating: Option<Option<String>>,
    #[serde(default, deserialize_with = "crate::double_option")]
    pub genre: Option<Option<Vec<String>>>,
    #[serde(default, deserialize_with = "crate::double_option")]
    pub actors: Option<Option<Vec<String>>>,
    #[serde(default, deserialize_with = "crate::double_option")]
    pub seasons: Option<Option<i32>>,
    #[serde(default, deserialize_with = "crate::double_option")]
    pub episodes: Option<Option<i32>>,
    pub status: Option<SeriesStatus>,
    pub language: Option<String>,
    pub featured: Option<bool>,
}

impl Series {
    pub(crate) fn matches(&self, needle: &str) -> bool {
        self.title.to_lowercase().contains(needle)
            || self.title_ar.contains(needle)
            || latin_contains(self.description.as_deref(), needle)
            || arabic_contains(self.description_ar.as_deref(), needle)
    }
}

impl CatalogStore {
    pub fn create_series(&self, new: NewSeries) -> Series {
        let now = self.now();
        let mut table = write(&self.series);
        let series = Series {
            id: table.alloc_id(),
            title: new.title,
            title_ar: new.title_ar,
            description: new.description,
            description_ar: new.description_ar,
            poster_url: new.poster_url,
            year: new.year,
            rating: new.rating,
            genre: new.genre,
            actors: new.actors,
            seasons: new.seasons,
            episodes: new.episodes,
            status: new.status,
            language: new.language,
            featured: new.featured,
            created_at: now,
            updated_at: now,
        };
        table.rows.push(series.clone());
        series
    }

    pub fn get_series(&self, id: i64) -> Option<Series> {
        read(&self.series).rows.iter().find(|s| s.id == id).cloned()
    }

    pub fn list_series(&self) -> Vec<Series> {
        read(&self.series).rows.clone()
    }

    pub fn update_series(&self, id: i64, patch: SeriesPatch) -> Option<Series> {
        let now = self.now();
        let mut table = write(&self.series);
        let series = table.rows.iter_mut().find(|s| s.id == id)?;
        if let Some(title) = patch.title {
            series.title = title;
        }
        if let Some(title_ar) = patch.title_ar {
            series.title_ar = title_ar;
        }
        if let Some(description) = patch.description {
            series.description = description;
        }
        if let Some(description_ar) = patch.description_ar {
            series.description_ar = description_ar;
        }
        if let Some(poster_url) = patch.poster_url {
            series.poster_url = poster_url;
        }
        if let Some(year) = patch.year {
            series.year = year;
        }
        if let Some(rating) = patch.rating {
            series.rating = rating;
        }
        if let Some(genre) = patch.genre {
            series.genre = genre;
        }
        if let Some(actors) = patch.actors {
            series.actors = actors;
        }
        if let Some(seasons) = patch.seasons {
            series.seasons = seasons;
        }
        if let Some(episodes) = patch.episodes {
            series.episodes = episodes;
        }
        if let Some(status) = patch.status {
            series.status = status;
        }
        if let Some(language) = patch.language {
            series.language = language;
        }
        if let Some(featured) = patch.featured {
            series.featured = featured;
        }
        series.updated_at = now;
        Some(series.clone())
    }

    pub fn delete_series(&self, id: i64) -> bool {
        let mut table = write(&self.series);
        let before = table.rows.len();
        table.rows.retain(|s| s.id != id);
        table.rows.len() != before
    }

    pub fn featured_series(&self) -> Vec<Series> {
        read(&self.series)
            .rows
            .iter()
            .filter(|s| s.featured)
            .cloned()
            .collect()
    }

    pub fn search_series(&self, query: &str) -> Vec<Series> {
        let needle = query.to_lowercase();
        read(&self.series)
            .rows
            .iter()
            .filter(|s| s.matches(&needle))
            .cloned()
            .collect()
    }
}
