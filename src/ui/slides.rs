use std::time::Instant;

use egui::{pos2, vec2, Align2, Color32, CornerRadius, FontId, Painter, Rect, StrokeKind, Ui, UiBuilder, Vec2};

use crate::core::gallery::GalleryState;
use crate::core::image_loader::{ImageKind, ImageRequest};
use crate::core::item::GalleryItem;
use crate::i18n::en::{TEXT_BROKEN_IMAGE, TEXT_LOADING};
use crate::ui::image_store::{ImageState, ImageStore};
use crate::ui::style::{color, GalleryStyle};

/// Scale that fits `image` inside `bounds` without upscaling.
pub fn fit_scale(image: Vec2, bounds: Vec2) -> f32 {
    if image.x <= 0.0 || image.y <= 0.0 {
        return 1.0;
    }
    (bounds.x / image.x).min(bounds.y / image.y).min(1.0)
}

/// Rectangle of an image of `size` centred in `bounds`.
pub fn contain(size: Vec2, bounds: Rect) -> Rect {
    Rect::from_center_size(bounds.center(), size * fit_scale(size, bounds.size()))
}

pub(crate) fn full_uv() -> Rect {
    Rect::from_min_max(pos2(0.0, 0.0), pos2(1.0, 1.0))
}

pub(crate) fn paint_image_state(
    painter: &Painter,
    state: ImageState,
    bounds: Rect,
    style: &GalleryStyle,
    show_text: bool,
) {
    match state {
        ImageState::Ready(texture) => {
            let rect = contain(texture.size_vec2(), bounds);
            painter.image(texture.id(), rect, full_uv(), Color32::WHITE);
        }
        ImageState::Failed => {
            painter.rect_filled(bounds, CornerRadius::ZERO, color(style.placeholder));
            if show_text {
                painter.text(
                    bounds.center(),
                    Align2::CENTER_CENTER,
                    TEXT_BROKEN_IMAGE,
                    FontId::proportional(16.0),
                    color(style.overlay_text),
                );
            }
        }
        ImageState::Loading => {
            if show_text {
                painter.text(
                    bounds.center(),
                    Align2::CENTER_CENTER,
                    TEXT_LOADING,
                    FontId::proportional(16.0),
                    color(style.overlay_text),
                );
            }
        }
        ImageState::NotRequested => {}
    }
}

fn paint_description(painter: &Painter, slide: Rect, text: &str, style: &GalleryStyle) {
    let padding = vec2(14.0, 8.0);
    let galley = painter.layout(
        text.to_string(),
        FontId::proportional(15.0),
        color(style.overlay_text),
        (slide.width() * 0.6).max(80.0),
    );
    let min = pos2(slide.left(), slide.bottom() - 70.0 - galley.size().y - padding.y * 2.0);
    let rect = Rect::from_min_size(min, galley.size() + padding * 2.0);
    painter.rect_filled(rect, CornerRadius::ZERO, color(style.overlay_background));
    painter.galley(rect.min + padding, galley, color(style.overlay_text));
}

/// Paints every slide overlapping `rect` at its current offset.
pub fn paint_slides(
    ui: &mut Ui,
    rect: Rect,
    items: &[GalleryItem],
    state: &GalleryState,
    store: &mut ImageStore,
    style: &GalleryStyle,
    now: Instant,
) {
    let painter = ui.painter_at(rect);
    let fullscreen = state.is_fullscreen();

    for (index, pos) in state.visible_slides(now) {
        let Some(item) = items.get(index) else {
            continue;
        };
        let slide = rect.translate(vec2(rect.width() * pos / 100.0, 0.0));
        let class = style.class(item.original_class.as_deref());
        if let Some(fill) = class.fill() {
            painter.rect_filled(slide, class.corner_radius(), fill);
        }
        let body = slide.shrink(class.padding());

        if let Some(render) = &item.render_item {
            let mut child = ui.new_child(UiBuilder::new().max_rect(body));
            child.set_clip_rect(rect.intersect(body));
            render(&mut child, item);
        } else if state.should_load_slide(index) {
            let source = state.effective_source(item.slide_source(fullscreen));
            let request = ImageRequest::new(ImageKind::Slide, source);
            store.ensure(request.clone());
            paint_image_state(&painter, store.state(&request), body, style, true);
        }

        if let Some(stroke) = class.stroke() {
            painter.rect_stroke(slide, class.corner_radius(), stroke, StrokeKind::Inside);
        }
        if let Some(text) = item.description.as_deref() {
            paint_description(&painter, slide, text, style);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn large_images_shrink_to_fit() {
        assert_eq!(fit_scale(vec2(2000.0, 1000.0), vec2(1000.0, 1000.0)), 0.5);
        assert_eq!(fit_scale(vec2(500.0, 2000.0), vec2(1000.0, 1000.0)), 0.5);
    }

    #[test]
    fn small_images_keep_their_size() {
        assert_eq!(fit_scale(vec2(200.0, 100.0), vec2(1000.0, 1000.0)), 1.0);
        assert_eq!(fit_scale(Vec2::ZERO, vec2(10.0, 10.0)), 1.0);
    }

    #[test]
    fn contained_rect_is_centered() {
        let bounds = Rect::from_min_size(pos2(0.0, 0.0), vec2(400.0, 200.0));
        let rect = contain(vec2(800.0, 800.0), bounds);
        assert_eq!(rect, Rect::from_center_size(pos2(200.0, 100.0), vec2(200.0, 200.0)));
    }
}
