use egui::{
    pos2, Align, Align2, CornerRadius, FontId, Rect, ScrollArea, Sense, Stroke, StrokeKind,
    Ui, UiBuilder, Vec2,
};

use crate::config::ThumbnailPosition;
use crate::core::gallery::GalleryState;
use crate::core::image_loader::{ImageKind, ImageRequest};
use crate::core::item::GalleryItem;
use crate::i18n::en::LABEL_THUMBNAIL;
use crate::ui::image_store::ImageStore;
use crate::ui::slides::paint_image_state;
use crate::ui::style::{color, GalleryStyle};

/// Pointer activity on the strip this frame.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct ThumbnailEvent {
    pub clicked: Option<usize>,
    pub hovered: Option<usize>,
}

/// Width (or height, when vertical) the strip needs.
pub fn strip_extent(style: &GalleryStyle) -> f32 {
    style.thumbnail_size + style.thumbnail_spacing * 2.0
}

/// Splits `rect` into the slide area and the thumbnail strip.
pub fn split_layout(rect: Rect, position: ThumbnailPosition, extent: f32) -> (Rect, Rect) {
    let extent = extent.min(match position {
        ThumbnailPosition::Bottom | ThumbnailPosition::Top => rect.height() / 2.0,
        ThumbnailPosition::Left | ThumbnailPosition::Right => rect.width() / 2.0,
    });
    match position {
        ThumbnailPosition::Bottom => {
            let y = rect.bottom() - extent;
            (
                Rect::from_min_max(rect.min, pos2(rect.right(), y)),
                Rect::from_min_max(pos2(rect.left(), y), rect.max),
            )
        }
        ThumbnailPosition::Top => {
            let y = rect.top() + extent;
            (
                Rect::from_min_max(pos2(rect.left(), y), rect.max),
                Rect::from_min_max(rect.min, pos2(rect.right(), y)),
            )
        }
        ThumbnailPosition::Left => {
            let x = rect.left() + extent;
            (
                Rect::from_min_max(pos2(x, rect.top()), rect.max),
                Rect::from_min_max(rect.min, pos2(x, rect.bottom())),
            )
        }
        ThumbnailPosition::Right => {
            let x = rect.right() - extent;
            (
                Rect::from_min_max(rect.min, pos2(x, rect.bottom())),
                Rect::from_min_max(pos2(x, rect.top()), rect.max),
            )
        }
    }
}

pub struct ThumbnailStrip<'a> {
    pub items: &'a [GalleryItem],
    pub state: &'a GalleryState,
    pub style: &'a GalleryStyle,
    pub position: ThumbnailPosition,
    pub draggable: bool,
    /// Bring the current thumbnail into view this frame.
    pub scroll_to_current: bool,
}

impl ThumbnailStrip<'_> {
    pub fn show(self, ui: &mut Ui, rect: Rect, store: &mut ImageStore) -> ThumbnailEvent {
        let mut event = ThumbnailEvent::default();
        let scroll = if self.position.is_vertical() {
            ScrollArea::vertical()
        } else {
            ScrollArea::horizontal()
        };

        let inner = rect.shrink(self.style.thumbnail_spacing);
        ui.scope_builder(UiBuilder::new().max_rect(inner), |ui| {
            scroll
                .id_salt("gallery-thumbnails")
                .drag_to_scroll(self.draggable)
                .auto_shrink([false, false])
                .show(ui, |ui| {
                    ui.spacing_mut().item_spacing = Vec2::splat(self.style.thumbnail_spacing);
                    if self.position.is_vertical() {
                        ui.vertical(|ui| self.thumbs(ui, store, &mut event));
                    } else {
                        ui.horizontal(|ui| self.thumbs(ui, store, &mut event));
                    }
                });
        });
        event
    }

    fn thumbs(&self, ui: &mut Ui, store: &mut ImageStore, event: &mut ThumbnailEvent) {
        let current = self.state.current_index();
        for (index, item) in self.items.iter().enumerate() {
            let (rect, response) =
                ui.allocate_exact_size(Vec2::splat(self.style.thumbnail_size), Sense::click());
            let class = self.style.class(item.thumbnail_class.as_deref());
            let active = index == current;
            let border = self.style.thumbnail_border_width;
            let inner = rect.shrink(border + class.padding());
            let painter = ui.painter_at(rect);

            if let Some(fill) = class.fill() {
                painter.rect_filled(rect, class.corner_radius(), fill);
            }
            if let Some(render) = &item.render_thumb_inner {
                let mut child = ui.new_child(UiBuilder::new().max_rect(inner));
                child.set_clip_rect(inner);
                render(&mut child, item);
            } else {
                let source = self.state.effective_source(item.thumbnail_source());
                let request = ImageRequest::new(ImageKind::Thumbnail, source);
                store.ensure(request.clone());
                paint_image_state(&painter, store.state(&request), inner, self.style, false);
            }

            if let Some(label) = item.thumbnail_label.as_deref() {
                painter.text(
                    pos2(inner.center().x, inner.bottom() - 4.0),
                    Align2::CENTER_BOTTOM,
                    label,
                    FontId::proportional(12.0),
                    color(self.style.overlay_text),
                );
            }

            let frame = if active || response.hovered() {
                Stroke::new(border, color(self.style.thumbnail_active_border))
            } else {
                class
                    .stroke()
                    .unwrap_or_else(|| Stroke::new(border, color(self.style.thumbnail_border)))
            };
            painter.rect_stroke(rect, CornerRadius::ZERO, frame, StrokeKind::Inside);

            if active && self.scroll_to_current {
                response.scroll_to_me(Some(Align::Center));
            }
            if response.hovered() {
                event.hovered = Some(index);
            }
            let tooltip = item
                .thumbnail_tooltip()
                .map(str::to_string)
                .unwrap_or_else(|| format!("{LABEL_THUMBNAIL} {}", index + 1));
            if response.on_hover_text(tooltip).clicked() {
                event.clicked = Some(index);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use egui::vec2;

    fn area() -> Rect {
        Rect::from_min_size(pos2(0.0, 0.0), vec2(800.0, 600.0))
    }

    #[test]
    fn bottom_strip_takes_the_lower_band() {
        let (slides, thumbs) = split_layout(area(), ThumbnailPosition::Bottom, 100.0);
        assert_eq!(slides, Rect::from_min_max(pos2(0.0, 0.0), pos2(800.0, 500.0)));
        assert_eq!(thumbs, Rect::from_min_max(pos2(0.0, 500.0), pos2(800.0, 600.0)));
    }

    #[test]
    fn side_strips_split_horizontally() {
        let (slides, thumbs) = split_layout(area(), ThumbnailPosition::Left, 100.0);
        assert_eq!(thumbs.width(), 100.0);
        assert_eq!(slides.left(), 100.0);
        let (slides, thumbs) = split_layout(area(), ThumbnailPosition::Right, 100.0);
        assert_eq!(thumbs.left(), 700.0);
        assert_eq!(slides.right(), 700.0);
    }

    #[test]
    fn strip_never_takes_more_than_half() {
        let (slides, thumbs) = split_layout(area(), ThumbnailPosition::Top, 1000.0);
        assert_eq!(thumbs.height(), 300.0);
        assert_eq!(slides.top(), 300.0);
    }
}
