use aflam_core::types::ContentKind;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::{CatalogStore, read, write};

/// A category record: a bilingual name pair grouping one content kind.
/// No featured flag, search, or relational lookup.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Category {
    pub id: i64,
    pub name: String,
    pub name_ar: String,
    #[serde(rename = "type")]
    pub kind: ContentKind,
    pub icon: Option<String>,
    pub created_at: DateTime<Utc>,
}

/// Category create input.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewCategory {
    pub name: String,
    pub name_ar: String,
    #[serde(rename = "type")]
    pub kind: ContentKind,
    #[serde(default)]
    pub icon: Option<String>,
}

/// Partial category update.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CategoryPatch {
    pub name: Option<String>,
    pub name_ar: Option<String>,
    #[serde(rename = "type")]
    pub kind: Option<ContentKind>,
    #[serde(default, deserialize_with = "crate::double_option")]
    pub icon: Option<Option<String>>,
}

impl CatalogStore {
    pub fn create_category(&self, new: NewCategory) -> Category {
        let now = self.now();
        let mut table = write(&self.categories);
        let category = Category {
            id: table.alloc_id(),
            name: new.name,
            name_ar: new.name_ar,
            kind: new.kind,
            icon: new.icon,
            created_at: now,
        };
        table.rows.push(category.clone());
        category
    }

    pub fn get_category(&self, id: i64) -> Option<Category> {
        read(&self.categories)
            .rows
            .iter()
            .find(|c| c.id == id)
            .cloned()
    }

    pub fn list_categories(&self) -> Vec<Category> {
        read(&self.categories).rows.clone()
    }

    pub fn update_category(&self, id: i64, patch: CategoryPatch) -> Option<Category> {
        let mut table = write(&self.categories);
        let category = table.rows.iter_mut().find(|c| c.id == id)?;
        if let Some(name) = patch.name {
            category.name = name;
        }
        if let Some(name_ar) = patch.name_ar {
            category.name_ar = name_ar;
        }
        if let Some(kind) = patch.kind {
            category.kind = kind;
        }
        if let Some(icon) = patch.icon {
            category.icon = icon;
        }
        Some(category.clone())
    }

    pub fn delete_category(&self, id: i64) -> bool {
        let mut table = write(&self.categories);
        let before = table.rows.len();
        table.rows.retain(|c| c.id != id);
        table.rows.len() != before
    }
}
