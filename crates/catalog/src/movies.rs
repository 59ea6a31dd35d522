use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::{
    CatalogStore, arabic_contains, default_language, default_quality, latin_contains, read, write,
};

/// A movie record as stored and served.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Movie {
    pub id: i64,
    pub title: String,
    pub title_ar: String,
    pub description: Option<String>,
    pub description_ar: Option<String>,
    pub poster_url: Option<String>,
    pub trailer_url: Option<String>,
    pub year: Option<i32>,
    /// Decimal value carried as text, e.g. "8.8".
    pub rating: Option<String>,
    pub genre: Option<Vec<String>>,
    pub director: Option<String>,
    pub actors: Option<Vec<String>>,
    /// Runtime in minutes.
    pub duration: Option<i32>,
    pub quality: String,
    pub language: String,
    pub subtitles: Vec<String>,
    pub featured: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Movie create input: everything but identity and timestamps.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewMovie {
    pub title: String,
    pub title_ar: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub description_ar: Option<String>,
    #[serde(default)]
    pub poster_url: Option<String>,
    #[serde(default)]
    pub trailer_url: Option<String>,
    #[serde(default)]
    pub year: Option<i32>,
    #[serde(default)]
    pub rating: Option<String>,
    #[serde(default)]
    pub genre: Option<Vec<String>>,
    #[serde(default)]
    pub director: Option<String>,
    #[serde(default)]
    pub actors: Option<Vec<String>>,
    #[serde(default)]
    pub duration: Option<i32>,
    #[serde(default = "default_quality")]
    pub quality: String,
    #[serde(default = "default_language")]
    pub language: String,
    #[serde(default)]
    pub subtitles: Vec<String>,
    #[serde(default)]
    pub featured: bool,
}

/// Partial movie update. An absent field keeps the stored value; optional
/// fields distinguish "absent" from an explicit null that clears them.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MoviePatch {
    pub title: Option<String>,
    pub title_ar: Option<String>,
    #[serde(default, deserialize_with = "crate::double_option")]
    pub description: Option<Option<String>>,
    #[serde(default, deserialize_with = "crate::double_option")]
    pub description_ar: Option<Option<String>>,
    #[serde(default, deserialize_with = "crate::double_option")]
    pub poster_url: Option<Option<String>>,
    #[serde(default, deserialize_with = "crate::double_option")]
    pub trailer_url: Option<Option<String>>,
    #[serde(default, deserialize_with = "crate::double_option")]
    pub year: Option<Option<i32>>,
    #[serde(default, deserialize_with = "crate::double_option")]
    pub rating: Option<Option<String>>,
    #[serde(default, deserialize_with = "crate::double_option")]
    pub genre: Option<Option<Vec<String>>>,
    #[serde(default, deserialize_with = "crate::double_option")]
    pub director: Option<Option<String>>,
    #[serde(default, deserialize_with = "crate::double_option")]
    pub actors: Option<Option<Vec<String>>>,
    #[serde(default, deserialize_with = "crate::double_option")]
    pub duration: Option<Option<i32>>,
    pub quality: Option<String>,
    pub language: Option<String>,
    pub subtitles: Option<Vec<String>>,
    pub featured: Option<bool>,
}

impl Movie {
    /// Substring match over the searchable fields. `needle` must already be
    /// lowercased; Arabic fields are matched as raw containment.
    pub(crate) fn matches(&self, needle: &str) -> bool {
        self.title.to_lowercase().contains(needle)
            || self.title_ar.contains(needle)
            || latin_contains(self.description.as_deref(), needle)
            || arabic_contains(self.description_ar.as_deref(), needle)
    }
}

impl CatalogStore {
    pub fn create_movie(&self, new: NewMovie) -> Movie {
        let now = self.now();
        let mut table = write(&self.movies);
        let movie = Movie {
            id: table.alloc_id(),
            title: new.title,
            title_ar: new.title_ar,
            description: new.description,
            description_ar: new.description_ar,
            poster_url: new.poster_url,
            trailer_url: new.trailer_url,
            year: new.year,
            rating: new.rating,
            genre: new.genre,
            director: new.director,
            actors: new.actors,
            duration: new.duration,
            quality: new.quality,
            language: new.language,
            subtitles: new.subtitles,
            featured: new.featured,
            created_at: now,
            updated_at: now,
        };
        table.rows.push(movie.clone());
        movie
    }

    pub fn get_movie(&self, id: i64) -> Option<Movie> {
        read(&self.movies).rows.iter().find(|m| m.id == id).cloned()
    }

    /// All movies in insertion order (oldest first).
    pub fn list_movies(&self) -> Vec<Movie> {
        read(&self.movies).rows.clone()
    }

    /// Merge the supplied fields onto the stored record and refresh the
    /// modification timestamp. `None` when no movie has this id.
    pub fn update_movie(&self, id: i64, patch: MoviePatch) -> Option<Movie> {
        let now = self.now();
        let mut table = write(&self.movies);
        let movie = table.rows.iter_mut().find(|m| m.id == id)?;
        if let Some(title) = patch.title {
            movie.title = title;
        }
        if let Some(title_ar) = patch.title_ar {
            movie.title_ar = title_ar;
        }
        if let Some(description) = patch.description {
            movie.description = description;
        }
        if let Some(description_ar) = patch.description_ar {
            movie.description_ar = description_ar;
        }
        if let Some(poster_url) = patch.poster_url {
            movie.poster_url = poster_url;
        }
        if let Some(trailer_url) = patch.trailer_url {
            movie.trailer_url = trailer_url;
        }
        if let Some(year) = patch.year {
            movie.year = year;
        }
        if let Some(rating) = patch.rating {
            movie.rating = rating;
        }
        if let Some(genre) = patch.genre {
            movie.genre = genre;
        }
        if let Some(director) = patch.director {
            movie.director = director;
        }
        if let Some(actors) = patch.actors {
            movie.actors = actors;
        }
        if let Some(duration) = patch.duration {
            movie.duration = duration;
        }
        if let Some(quality) = patch.quality {
            movie.quality = quality;
        }
        if let Some(language) = patch.language {
            movie.language = language;
        }
        if let Some(subtitles) = patch.subtitles {
            movie.subtitles = subtitles;
        }
        if let Some(featured) = patch.featured {
            movie.featured = featured;
        }
        movie.updated_at = now;
        Some(movie.clone())
    }

    /// Remove the movie if present. Repeated calls after the first return
    /// `false`.
    pub fn delete_movie(&self, id: i64) -> bool {
        let mut table = write(&self.movies);
        let before = table.rows.len();
        table.rows.retain(|m| m.id != id);
        table.rows.len() != before
    }

    /// Movies flagged for promotional display, in collection order.
    pub fn featured_movies(&self) -> Vec<Movie> {
        read(&self.movies)
            .rows
            .iter()
            .filter(|m| m.featured)
            .cloned()
            .collect()
    }

    /// Movies whose title or description (either language) contains `query`.
    pub fn search_movies(&self, query: &str) -> Vec<Movie> {
        let needle = query.to_lowercase();
        read(&self.movies)
            .rows
            .iter()
            .filter(|m| m.matches(&needle))
            .cloned()
            .collect()
    }
}
