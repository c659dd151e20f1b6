use egui::{pos2, Rect, Sense, Stroke, Ui};

use crate::core::item::GalleryItem;
use crate::i18n::en::LABEL_GO_TO_SLIDE;
use crate::ui::style::{color, GalleryStyle};

/// Horizontal centres of `count` bullets laid out around `center_x`.
pub fn bullet_centers(count: usize, center_x: f32, radius: f32) -> Vec<f32> {
    let pitch = radius * 3.0;
    let span = pitch * count.saturating_sub(1) as f32;
    (0..count)
        .map(|i| center_x - span / 2.0 + pitch * i as f32)
        .collect()
}

/// One bullet per item along the bottom of `slides`; the current one is
/// filled. Returns the index of a clicked bullet.
pub fn bullets(
    ui: &mut Ui,
    slides: Rect,
    items: &[GalleryItem],
    current: usize,
    style: &GalleryStyle,
) -> Option<usize> {
    let radius = style.bullet_radius;
    let y = slides.bottom() - radius * 4.0;
    let mut clicked = None;

    for (i, x) in bullet_centers(items.len(), slides.center().x, radius)
        .into_iter()
        .enumerate()
    {
        let center = pos2(x, y);
        let hit = Rect::from_center_size(center, egui::Vec2::splat(radius * 2.6));
        let response = ui
            .interact(hit, ui.id().with(("bullet", i)), Sense::click())
            .on_hover_text(format!("{LABEL_GO_TO_SLIDE} {}", i + 1));

        let class = style.class(items[i].bullet_class.as_deref());
        let active = i == current;
        let base = if active || response.hovered() {
            color(style.bullet_active_color)
        } else {
            color(style.control_shadow)
        };
        let fill = class.fill().unwrap_or(base);
        let stroke = class
            .stroke()
            .unwrap_or_else(|| Stroke::new(1.0, color(style.bullet_color)));

        let r = if active { radius * 1.2 } else { radius };
        ui.painter().circle(center, r, fill, stroke);

        if response.clicked() {
            clicked = Some(i);
        }
    }
    clicked
}
