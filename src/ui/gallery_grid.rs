// SPDX-License-Identifier: MPL-2.0
//! Gallery screen: filter bar and responsive thumbnail grid.

use crate::error::CatalogError;
use crate::gallery::catalog::category_label;
use crate::gallery::{CategoryFilter, GalleryController, Message, Status, Tile};
use crate::i18n::fluent::I18n;
use crate::media::{CacheKey, Entry, ImageCache};
use crate::ui::animation;
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::styles;
use iced::{
    alignment::{Horizontal, Vertical},
    widget::{button, image, Column, Container, Row, Scrollable, Text},
    ContentFit, Element, Length, Theme,
};
use std::time::Duration;

/// Contextual data needed to render the gallery.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub gallery: &'a GalleryController,
    pub cache: &'a ImageCache,
    pub window_width: f32,
    /// Preferred tile width; the actual width stretches to fill each row.
    pub tile_width: f32,
    /// Time since the current reveal started.
    pub reveal_elapsed: Duration,
}

/// Number of grid columns that fit `window_width` with tiles at least
/// `tile_width` wide. Never less than one.
#[must_use]
pub fn columns_for_width(window_width: f32, tile_width: f32) -> usize {
    let available = window_width - 2.0 * spacing::LG + spacing::MD;
    let per_column = tile_width.max(1.0) + spacing::MD;
    if !available.is_finite() || available <= per_column {
        return 1;
    }
    (available / per_column).floor() as usize
}

/// Actual width of each column once the row is filled.
fn column_width(window_width: f32, columns: usize) -> f32 {
    let columns = columns.max(1) as f32;
    let available = (window_width - 2.0 * spacing::LG).max(0.0);
    ((available - spacing::MD * (columns - 1.0)) / columns).max(1.0)
}

pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    let heading = Text::new(ctx.i18n.tr("gallery-heading")).size(typography::TITLE_LG);

    let content: Element<'_, Message> = match ctx.gallery.status() {
        Status::Loading => centered_text(ctx.i18n.tr("gallery-loading")),
        Status::Failed(err) => failed(ctx.i18n, err),
        Status::Ready if ctx.gallery.filtered_len() == 0 => {
            centered_text(ctx.i18n.tr("gallery-empty"))
        }
        Status::Ready => grid(&ctx),
    };

    let mut column = Column::new()
        .spacing(spacing::MD)
        .padding(spacing::LG)
        .width(Length::Fill)
        .push(heading);
    if matches!(ctx.gallery.status(), Status::Ready) {
        column = column.push(filter_bar(&ctx));
    }
    column = column.push(content);

    Scrollable::new(column)
        .width(Length::Fill)
        .height(Length::Fill)
        .into()
}

fn centered_text<'a>(label: String) -> Element<'a, Message> {
    Container::new(Text::new(label).size(typography::TITLE_MD))
        .width(Length::Fill)
        .padding(spacing::XL)
        .align_x(Horizontal::Center)
        .into()
}

fn failed<'a>(i18n: &I18n, err: &CatalogError) -> Element<'a, Message> {
    let detail = Text::new(i18n.tr(err.i18n_key())).size(typography::BODY);
    Container::new(
        Column::new()
            .spacing(spacing::XS)
            .align_x(Horizontal::Center)
            .push(Text::new(i18n.tr("gallery-error")).size(typography::TITLE_MD))
            .push(detail),
    )
    .width(Length::Fill)
    .padding(spacing::XL)
    .align_x(Horizontal::Center)
    .into()
}

fn filter_bar<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let active = ctx.gallery.active_filter();
    let entry = |label: String, filter: CategoryFilter| {
        let style: fn(&Theme, button::Status) -> button::Style = if *active == filter {
            styles::button::selected
        } else {
            styles::button::unselected
        };
        button(Text::new(label))
            .padding([spacing::XS, spacing::MD])
            .style(style)
            .on_press(Message::FilterSelected(filter))
    };

    let mut row = Row::new()
        .spacing(spacing::XS)
        .push(entry(ctx.i18n.tr("filter-all"), CategoryFilter::All));
    for key in ctx.gallery.category_keys() {
        row = row.push(entry(category_label(key), CategoryFilter::from_key(key)));
    }
    row.wrap().into()
}

fn grid<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let columns = columns_for_width(ctx.window_width, ctx.tile_width);
    let width = column_width(ctx.window_width, columns);
    let height = width * sizing::TILE_ASPECT;

    let shown: Vec<Tile<'a>> = ctx.gallery.tiles().filter(Tile::is_visible).collect();
    let mut rows = Column::new().spacing(spacing::MD);
    for chunk in shown.chunks(columns) {
        let mut row = Row::new().spacing(spacing::MD);
        for tile in chunk {
            row = row.push(tile_view(ctx, tile, height));
        }
        // Keep columns aligned on a short last row.
        for _ in chunk.len()..columns {
            row = row.push(Container::new(Column::new()).width(Length::FillPortion(1)));
        }
        rows = rows.push(row);
    }
    rows.into()
}

fn tile_view<'a>(ctx: &ViewContext<'a>, tile: &Tile<'a>, height: f32) -> Element<'a, Message> {
    let record = tile.record;
    let opacity = tile
        .reveal_index
        .map_or(0.0, |index| animation::reveal_opacity(ctx.reveal_elapsed, index));

    let picture: Element<'a, Message> = match ctx.cache.entry(&CacheKey::thumbnail(record.id)) {
        Some(Entry::Ready(handle)) => image(handle.clone())
            .width(Length::Fill)
            .height(Length::Fixed(height))
            .content_fit(ContentFit::Cover)
            .opacity(opacity)
            .into(),
        Some(Entry::Failed) => placeholder(ctx.i18n.tr("tile-image-unavailable"), height),
        Some(Entry::Pending) | None => placeholder(ctx.i18n.tr("tile-image-loading"), height),
    };

    let caption = Column::new()
        .spacing(spacing::XXS)
        .push(Text::new(record.title.as_str()).size(typography::BODY))
        .push(Text::new(record.category.as_str()).size(typography::CAPTION));

    button(
        Column::new()
            .spacing(spacing::XS)
            .push(picture)
            .push(caption),
    )
    .padding(spacing::XXS)
    .width(Length::FillPortion(1))
    .style(styles::button::tile)
    .on_press(Message::TileClicked(record.id))
    .into()
}

fn placeholder<'a>(label: String, height: f32) -> Element<'a, Message> {
    Container::new(Text::new(label).size(typography::CAPTION))
        .width(Length::Fill)
        .height(Length::Fixed(height))
        .align_x(Horizontal::Center)
        .align_y(Vertical::Center)
        .style(styles::container::placeholder)
        .into()
}
