use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::{CatalogStore, default_quality, read, write};

/// An episode record. `series_id` is a plain value copy: the store accepts
/// any integer and never checks that a matching series exists. Episodes
/// carry a creation timestamp only.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Episode {
    pub id: i64,
    pub series_id: i64,
    pub title: String,
    pub title_ar: String,
    pub season: i32,
    /// Position within the season.
    pub episode: i32,
    pub description: Option<String>,
    pub duration: Option<i32>,
    pub video_url: Option<String>,
    pub thumbnail_url: Option<String>,
    pub quality: String,
    pub created_at: DateTime<Utc>,
}

/// Episode create input.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewEpisode {
    pub series_id: i64,
    pub title: String,
    pub title_ar: String,
    pub season: i32,
    pub episode: i32,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub duration: Option<i32>,
    #[serde(default)]
    pub video_url: Option<String>,
    #[serde(default)]
    pub thumbnail_url: Option<String>,
    #[serde(default = "default_quality")]
    pub quality: String,
}

/// Partial episode update. Updating never touches the creation timestamp;
/// episodes have no modification timestamp to refresh.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EpisodePatch {
    pub series_id: Option<i64>,
    pub title: Option<String>,
    pub title_ar: Option<String>,
    pub season: Option<i32>,
    pub episode: Option<i32>,
    #[serde(default, deserialize_with = "crate::double_option")]
    pub description: Option<Option<String>>,
    #[serde(default, deserialize_with = "crate::double_option")]
    pub duration: Option<Option<i32>>,
    #[serde(default, deserialize_with = "crate::double_option")]
    pub video_url: Option<Option<String>>,
    #[serde(default, deserialize_with = "crate::double_option")]
    pub thumbnail_url: Option<Option<String>>,
    pub quality: Option<String>,
}

impl CatalogStore {
    pub fn create_episode(&self, new: NewEpisode) -> Episode {
        let now = self.now();
        let mut table = write(&self.episodes);
        let episode = Episode {
            id: table.alloc_id(),
            series_id: new.series_id,
            title: new.title,
            title_ar: new.title_ar,
            season: new.season,
            episode: new.episode,
            description: new.description,
            duration: new.duration,
            video_url: new.video_url,
            thumbnail_url: new.thumbnail_url,
            quality: new.quality,
            created_at: now,
        };
        table.rows.push(episode.clone());
        episode
    }

    pub fn get_episode(&self, id: i64) -> Option<Episode> {
        read(&self.episodes)
            .rows
            .iter()
            .find(|e| e.id == id)
            .cloned()
    }

    pub fn list_episodes(&self) -> Vec<Episode> {
        read(&self.episodes).rows.clone()
    }

    pub fn update_episode(&self, id: i64, patch: EpisodePatch) -> Option<Episode> {
        let mut table = write(&self.episodes);
        let episode = table.rows.iter_mut().find(|e| e.id == id)?;
        if let Some(series_id) = patch.series_id {
            episode.series_id = series_id;
        }
        if let Some(title) = patch.title {
            episode.title = title;
        }
        if let Some(title_ar) = patch.title_ar {
            episode.title_ar = title_ar;
        }
        if let Some(season) = patch.season {
            episode.season = season;
        }
        if let Some(ep) = patch.episode {
            episode.episode = ep;
        }
        if let Some(description) = patch.description {
            episode.description = description;
        }
        if let Some(duration) = patch.duration {
            episode.duration = duration;
        }
        if let Some(video_url) = patch.video_url {
            episode.video_url = video_url;
        }
        if let Some(thumbnail_url) = patch.thumbnail_url {
            episode.thumbnail_url = thumbnail_url;
        }
        if let Some(quality) = patch.quality {
            episode.quality = quality;
        }
        Some(episode.clone())
    }

    pub fn delete_episode(&self, id: i64) -> bool {
        let mut table = write(&self.episodes);
        let before = table.rows.len();
        table.rows.retain(|e| e.id != id);
        table.rows.len() != before
    }

    /// Every episode whose stored `series_id` equals the argument, in
    /// insertion order. Answers for ids with no matching series record.
    pub fn episodes_by_series(&self, series_id: i64) -> Vec<Episode> {
        read(&self.episodes)
            .rows
            .iter()
            .filter(|e| e.series_id == series_id)
            .cloned()
            .collect()
    }
}
