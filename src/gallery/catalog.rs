// SPDX-License-Identifier: MPL-2.0
//! Image records and the catalog they are built from.
//!
//! The catalog is an ordered list of categories, each holding an ordered list
//! of `(id, title)` entries. Record order (category order, then entry order)
//! is the canonical gallery order used by filtering and navigation.

use crate::error::CatalogError;
use serde::Deserialize;
use std::collections::HashSet;
use std::fmt;
use std::path::Path;

/// Key reserved for the "show everything" filter.
pub const ALL_KEY: &str = "all";

/// Stable identifier of an image in the image service.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Deserialize)]
#[serde(transparent)]
pub struct ImageId(pub u32);

impl fmt::Display for ImageId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// One image shown by the gallery. Immutable once built.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageRecord {
    pub id: ImageId,
    /// Thumbnail rendition URL.
    pub src: String,
    pub title: String,
    /// Human readable category, e.g. `Nature`.
    pub category: String,
    /// Category key used for filtering, e.g. `nature`.
    pub category_key: String,
}

/// Builds image URLs from the configured template.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageSource {
    base_url: String,
    thumbnail: (u32, u32),
    viewer: (u32, u32),
}

impl Default for ImageSource {
    fn default() -> Self {
        use crate::config::defaults::*;
        Self::new(
            DEFAULT_IMAGE_BASE_URL,
            (DEFAULT_THUMBNAIL_WIDTH, DEFAULT_THUMBNAIL_HEIGHT),
            (DEFAULT_VIEWER_WIDTH, DEFAULT_VIEWER_HEIGHT),
        )
    }
}

impl ImageSource {
    pub fn new(base_url: &str, thumbnail: (u32, u32), viewer: (u32, u32)) -> Self {
        use crate::config::defaults::{MAX_IMAGE_EDGE, MIN_IMAGE_EDGE};
        let clamp = |(w, h): (u32, u32)| {
            (
                w.clamp(MIN_IMAGE_EDGE, MAX_IMAGE_EDGE),
                h.clamp(MIN_IMAGE_EDGE, MAX_IMAGE_EDGE),
            )
        };
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            thumbnail: clamp(thumbnail),
            viewer: clamp(viewer),
        }
    }

    /// Builds the source from the `[gallery]` config section, filling gaps
    /// with defaults.
    pub fn from_config(gallery: &crate::config::GalleryConfig) -> Self {
        let defaults = Self::default();
        Self::new(
            gallery.image_base_url.as_deref().unwrap_or(&defaults.base_url),
            (
                gallery.thumbnail_width.unwrap_or(defaults.thumbnail.0),
                gallery.thumbnail_height.unwrap_or(defaults.thumbnail.1),
            ),
            (
                gallery.viewer_width.unwrap_or(defaults.viewer.0),
                gallery.viewer_height.unwrap_or(defaults.viewer.1),
            ),
        )
    }

    fn url(&self, id: ImageId, (width, height): (u32, u32)) -> String {
        format!("{}/id/{}/{}/{}", self.base_url, id, width, height)
    }

    pub fn thumbnail_url(&self, id: ImageId) -> String {
        self.url(id, self.thumbnail)
    }

    /// Higher resolution rendition shown by the lightbox.
    pub fn viewer_url(&self, id: ImageId) -> String {
        self.url(id, self.viewer)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct CatalogEntry {
    pub id: ImageId,
    pub title: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct CatalogCategory {
    pub key: String,
    #[serde(default)]
    pub images: Vec<CatalogEntry>,
}

/// Ordered set of categories and their images.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Catalog {
    #[serde(rename = "category", default)]
    categories: Vec<CatalogCategory>,
}

/// Where the catalog comes from.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum CatalogOrigin {
    #[default]
    Builtin,
    File(std::path::PathBuf),
}

impl CatalogOrigin {
    /// Resolves the catalog, validating file-based ones.
    pub fn load(&self) -> Result<Catalog, CatalogError> {
        match self {
            CatalogOrigin::Builtin => Ok(Catalog::builtin()),
            CatalogOrigin::File(path) => Catalog::load_from_path(path),
        }
    }
}

const BUILTIN: &[(&str, &[(u32, &str)])] = &[
    (
        "nature",
        &[
            (1015, "Mountain Lake"),
            (1018, "Forest Path"),
            (1019, "Ocean Waves"),
            (1020, "Waterfall"),
            (1021, "Sunset Valley"),
        ],
    ),
    (
        "city",
        &[
            (1000, "City Skyline"),
            (1001, "Urban Street"),
            (1003, "Metropolis"),
            (1004, "Night Lights"),
            (1005, "Downtown"),
        ],
    ),
    (
        "people",
        &[
            (1006, "Portrait"),
            (1009, "Street Photography"),
            (1011, "Group Photo"),
            (1012, "Candid Moment"),
            (1013, "Fashion Shoot"),
        ],
    ),
    (
        "animals",
        &[
            (1022, "Wild Cat"),
            (1024, "Bird"),
            (1025, "Puppy"),
            (1028, "Elephant"),
            (1031, "Tropical Fish"),
        ],
    ),
];

impl Catalog {
    /// The hard-coded catalog: four categories of five images.
    pub fn builtin() -> Self {
        let categories = BUILTIN
            .iter()
            .map(|(key, images)| CatalogCategory {
                key: (*key).to_string(),
                images: images
                    .iter()
                    .map(|(id, title)| CatalogEntry {
                        id: ImageId(*id),
                        title: (*title).to_string(),
                    })
                    .collect(),
            })
            .collect();
        Self { categories }
    }

    /// Parses a TOML catalog:
    ///
    /// ```toml
    /// [[category]]
    /// key = "nature"
    /// images = [{ id = 1015, title = "Mountain Lake" }]
    /// ```
    pub fn from_toml_str(content: &str) -> Result<Self, CatalogError> {
        let catalog: Catalog =
            toml::from_str(content).map_err(|e| CatalogError::Malformed(e.to_string()))?;
        catalog.validate()?;
        Ok(catalog)
    }

    pub fn load_from_path(path: &Path) -> Result<Self, CatalogError> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| CatalogError::Unreadable(format!("{}: {}", path.display(), e)))?;
        Self::from_toml_str(&content)
    }

    fn validate(&self) -> Result<(), CatalogError> {
        let mut seen = HashSet::new();
        let mut keys = HashSet::new();
        for category in &self.categories {
            let key = category.key.trim();
            if key.is_empty() || key.eq_ignore_ascii_case(ALL_KEY) {
                return Err(CatalogError::InvalidCategory(category.key.clone()));
            }
            // Filters match keys exactly, so a repeated key would merge two chips.
            if !keys.insert(category.key.as_str()) {
                return Err(CatalogError::DuplicateCategory(category.key.clone()));
            }
            for entry in &category.images {
                if !seen.insert(entry.id) {
                    return Err(CatalogError::DuplicateId(entry.id.0));
                }
            }
        }
        if seen.is_empty() {
            return Err(CatalogError::Empty);
        }
        Ok(())
    }

    /// Category keys in catalog order.
    pub fn category_keys(&self) -> Vec<String> {
        self.categories.iter().map(|c| c.key.clone()).collect()
    }

    pub fn len(&self) -> usize {
        self.categories.iter().map(|c| c.images.len()).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Flattens the catalog into records, in canonical order.
    pub fn records(&self, source: &ImageSource) -> Vec<ImageRecord> {
        self.categories
            .iter()
            .flat_map(|category| {
                let label = category_label(&category.key);
                category.images.iter().map(move |entry| ImageRecord {
                    id: entry.id,
                    src: source.thumbnail_url(entry.id),
                    title: entry.title.clone(),
                    category: label.clone(),
                    category_key: category.key.clone(),
                })
            })
            .collect()
    }
}

/// Display label for a category key: first character upper-cased.
pub fn category_label(key: &str) -> String {
    let mut chars = key.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_catalog_has_four_categories_of_five() {
        let catalog = Catalog::builtin();
        assert_eq!(
            catalog.category_keys(),
            vec!["nature", "city", "people", "animals"]
        );
        assert_eq!(catalog.len(), 20);
        assert!(catalog.validate().is_ok());
    }

    #[test]
    fn records_follow_catalog_order() {
        let records = Catalog::builtin().records(&ImageSource::default());
        assert_eq!(records[0].id, ImageId(1015));
        assert_eq!(records[0].title, "Mountain Lake");
        assert_eq!(records[0].category, "Nature");
        assert_eq!(records[0].category_key, "nature");
        assert_eq!(records[5].id, ImageId(1000));
        assert_eq!(records[19].title, "Tropical Fish");
    }

    #[test]
    fn image_urls_use_template() {
        let source = ImageSource::default();
        assert_eq!(
            source.thumbnail_url(ImageId(1015)),
            "https://picsum.photos/id/1015/600/400"
        );
        assert_eq!(
            source.viewer_url(ImageId(1015)),
            "https://picsum.photos/id/1015/1200/800"
        );
    }

    #[test]
    fn image_source_trims_trailing_slash_and_clamps() {
        let source = ImageSource::new("http://localhost:8080/", (1, 99_999), (300, 200));
        assert_eq!(
            source.thumbnail_url(ImageId(7)),
            "http://localhost:8080/id/7/16/5000"
        );
    }

    #[test]
    fn category_label_capitalizes_first_char() {
        assert_eq!(category_label("animals"), "Animals");
        assert_eq!(category_label("éte"), "Éte");
        assert_eq!(category_label(""), "");
    }

    #[test]
    fn toml_catalog_parses() {
        let catalog = Catalog::from_toml_str(
            r#"
            [[category]]
            key = "space"
            images = [{ id = 1, title = "Nebula" }, { id = 2, title = "Moon" }]
            "#,
        )
        .expect("valid catalog");
        assert_eq!(catalog.category_keys(), vec!["space"]);
        assert_eq!(catalog.len(), 2);
    }

    #[test]
    fn toml_catalog_rejects_duplicates_reserved_keys_and_empty() {
        let dup = r#"
            [[category]]
            key = "a"
            images = [{ id = 1, title = "x" }, { id = 1, title = "y" }]
        "#;
        assert_eq!(
            Catalog::from_toml_str(dup),
            Err(CatalogError::DuplicateId(1))
        );

        let repeated = r#"
            [[category]]
            key = "city"
            images = [{ id = 1, title = "x" }]

            [[category]]
            key = "nature"
            images = [{ id = 2, title = "y" }]

            [[category]]
            key = "city"
            images = [{ id = 3, title = "z" }]
        "#;
        assert_eq!(
            Catalog::from_toml_str(repeated),
            Err(CatalogError::DuplicateCategory("city".into()))
        );

        let reserved = r#"
            [[category]]
            key = "All"
            images = [{ id = 1, title = "x" }]
        "#;
        assert!(matches!(
            Catalog::from_toml_str(reserved),
            Err(CatalogError::InvalidCategory(_))
        ));

        assert_eq!(Catalog::from_toml_str(""), Err(CatalogError::Empty));
        assert!(matches!(
            Catalog::from_toml_str("[[category]]\nkey = 3"),
            Err(CatalogError::Malformed(_))
        ));
    }

    #[test]
    fn missing_catalog_file_is_unreadable() {
        let origin = CatalogOrigin::File("/definitely/not/here.toml".into());
        assert!(matches!(origin.load(), Err(CatalogError::Unreadable(_))));
    }
}
