// SPDX-License-Identifier: MPL-2.0
//! Gallery controller: catalog, category filter and lightbox navigation.
//!
//! The controller is a plain state machine. It never touches widgets or the
//! network; the UI renders its view-models ([`Tile`], [`LightboxView`]) and
//! performs the [`Effect`]s it returns.

pub mod catalog;
pub mod filter;
pub mod swipe;
pub mod viewer;

pub use catalog::{Catalog, CatalogOrigin, ImageId, ImageRecord, ImageSource};
pub use filter::CategoryFilter;
pub use viewer::Direction;

use crate::error::CatalogError;
use viewer::Viewer;

/// Catalog load state.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum Status {
    #[default]
    Loading,
    Ready,
    Failed(CatalogError),
}

/// One grid tile, bound to its record.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Tile<'a> {
    pub record: &'a ImageRecord,
    /// Position among the currently shown tiles, used for staggered reveal.
    pub reveal_index: Option<usize>,
}

impl Tile<'_> {
    #[must_use]
    pub fn is_visible(&self) -> bool {
        self.reveal_index.is_some()
    }
}

/// What the lightbox shows.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LightboxView<'a> {
    pub record: &'a ImageRecord,
    /// Enlarged rendition URL.
    pub src: String,
    /// 1-based position within the filtered view.
    pub position: usize,
    pub total: usize,
    /// Previous/next controls are hidden when there is nothing to move to.
    pub show_navigation: bool,
}

/// Messages handled by [`GalleryController::handle`].
#[derive(Debug, Clone, PartialEq)]
pub enum Message {
    FilterSelected(CategoryFilter),
    TileClicked(ImageId),
    Navigate(Direction),
    CloseViewer,
    /// A click or tap released over the lightbox backdrop. Closes like
    /// [`Message::CloseViewer`]; the app holds it back while a touch may
    /// still turn into a swipe.
    BackdropClicked,
}

/// Side effects requested from the UI layer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    None,
    /// Grid contents changed; fetch thumbnails for shown tiles lazily.
    GridChanged,
    /// Lightbox content changed; fetch and fade in the enlarged rendition.
    ViewerChanged { id: ImageId, url: String },
    /// Lightbox closed; restore page scrolling.
    ViewerClosed,
}

#[derive(Debug, Clone, Default)]
pub struct GalleryController {
    source: ImageSource,
    status: Status,
    category_keys: Vec<String>,
    records: Vec<ImageRecord>,
    filter: CategoryFilter,
    /// Indices into `records` for the filtered view, in catalog order.
    filtered: Vec<usize>,
    viewer: Viewer,
}

impl GalleryController {
    #[must_use]
    pub fn new(source: ImageSource) -> Self {
        Self {
            source,
            ..Self::default()
        }
    }

    /// Populates the records from `origin` and shows everything.
    ///
    /// On failure the controller enters [`Status::Failed`] and holds no records.
    pub fn load_catalog(&mut self, origin: &CatalogOrigin) -> Result<usize, CatalogError> {
        match origin.load() {
            Ok(catalog) => {
                self.install(&catalog);
                tracing::info!(images = self.records.len(), ?origin, "catalog loaded");
                Ok(self.records.len())
            }
            Err(err) => {
                tracing::warn!(%err, ?origin, "catalog load failed");
                self.records.clear();
                self.category_keys.clear();
                self.filtered.clear();
                self.viewer = Viewer::default();
                self.status = Status::Failed(err.clone());
                Err(err)
            }
        }
    }

    fn install(&mut self, catalog: &Catalog) {
        self.records = catalog.records(&self.source);
        self.category_keys = catalog.category_keys();
        self.viewer = Viewer::default();
        self.status = Status::Ready;
        self.filter(CategoryFilter::All);
    }

    #[must_use]
    pub fn status(&self) -> &Status {
        &self.status
    }

    #[must_use]
    pub fn source(&self) -> &ImageSource {
        &self.source
    }

    /// Category keys in catalog order, for the filter bar.
    #[must_use]
    pub fn category_keys(&self) -> &[String] {
        &self.category_keys
    }

    #[must_use]
    pub fn active_filter(&self) -> &CategoryFilter {
        &self.filter
    }

    #[must_use]
    pub fn records(&self) -> &[ImageRecord] {
        &self.records
    }

    /// One tile per record, in catalog order, flagged with its visibility.
    pub fn tiles(&self) -> impl Iterator<Item = Tile<'_>> {
        let mut shown = self.filtered.iter().copied().enumerate().peekable();
        self.records.iter().enumerate().map(move |(index, record)| {
            let reveal_index = match shown.peek() {
                Some(&(position, record_index)) if record_index == index => {
                    shown.next();
                    Some(position)
                }
                _ => None,
            };
            Tile {
                record,
                reveal_index,
            }
        })
    }

    /// Records in the filtered view, in catalog order.
    pub fn filtered_view(&self) -> impl Iterator<Item = &ImageRecord> {
        self.filtered.iter().map(|&index| &self.records[index])
    }

    #[must_use]
    pub fn filtered_len(&self) -> usize {
        self.filtered.len()
    }

    #[must_use]
    pub fn cursor(&self) -> usize {
        self.viewer.cursor()
    }

    #[must_use]
    pub fn is_viewer_open(&self) -> bool {
        self.viewer.is_open()
    }

    /// Page scrolling is locked while the lightbox is open.
    #[must_use]
    pub fn scroll_locked(&self) -> bool {
        self.viewer.is_open()
    }

    /// Shows records matching `filter`, rebuilds the filtered view and resets
    /// the cursor to 0.
    pub fn filter(&mut self, filter: CategoryFilter) {
        self.filtered = self
            .records
            .iter()
            .enumerate()
            .filter(|(_, record)| filter.matches(record))
            .map(|(index, _)| index)
            .collect();
        tracing::debug!(filter = filter.key(), shown = self.filtered.len(), "filter applied");
        self.filter = filter;
        self.viewer.reset();
    }

    /// Opens the lightbox on the record with `id`.
    ///
    /// Returns `false` (and changes nothing) when the record is not part of
    /// the filtered view.
    pub fn open_viewer(&mut self, id: ImageId) -> bool {
        let position = self
            .filtered
            .iter()
            .position(|&index| self.records[index].id == id);
        match position {
            Some(position) => self.viewer.open_at(position, self.filtered.len()),
            None => {
                tracing::debug!(%id, "clicked image not in filtered view");
                false
            }
        }
    }

    pub fn next(&mut self) {
        self.viewer.step(Direction::Next, self.filtered.len());
    }

    pub fn previous(&mut self) {
        self.viewer.step(Direction::Previous, self.filtered.len());
    }

    pub fn close_viewer(&mut self) {
        self.viewer.close();
    }

    /// The record at the cursor, if the filtered view is non-empty.
    #[must_use]
    pub fn current(&self) -> Option<&ImageRecord> {
        self.filtered
            .get(self.viewer.cursor())
            .map(|&index| &self.records[index])
    }

    /// Lightbox view-model; `None` while closed or with an empty view.
    #[must_use]
    pub fn lightbox(&self) -> Option<LightboxView<'_>> {
        if !self.viewer.is_open() {
            return None;
        }
        let record = self.current()?;
        let total = self.filtered.len();
        Some(LightboxView {
            record,
            src: self.source.viewer_url(record.id),
            position: self.viewer.cursor() + 1,
            total,
            show_navigation: total > 1,
        })
    }

    fn viewer_changed(&self) -> Effect {
        match self.lightbox() {
            Some(view) => Effect::ViewerChanged {
                id: view.record.id,
                url: view.src,
            },
            None => Effect::None,
        }
    }

    /// Handles a gallery message.
    pub fn handle(&mut self, msg: Message) -> Effect {
        match msg {
            Message::FilterSelected(filter) => {
                self.filter(filter);
                Effect::GridChanged
            }
            Message::TileClicked(id) => {
                if self.open_viewer(id) {
                    self.viewer_changed()
                } else {
                    Effect::None
                }
            }
            Message::Navigate(direction) => {
                if !self.viewer.is_open() {
                    return Effect::None;
                }
                match direction {
                    Direction::Next => self.next(),
                    Direction::Previous => self.previous(),
                }
                self.viewer_changed()
            }
            Message::CloseViewer | Message::BackdropClicked => {
                if self.viewer.is_open() {
                    self.close_viewer();
                    Effect::ViewerClosed
                } else {
                    Effect::None
                }
            }
        }
    }
}
