use egui::{vec2, Align2, CornerRadius, FontId, Rect, Response, Sense, Ui};

use crate::i18n::en::*;
use crate::ui::icons::{paint_icon, Icon};
use crate::ui::style::{color, GalleryStyle};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavSide {
    Left,
    Right,
}

fn icon_button(
    ui: &mut Ui,
    rect: Rect,
    id_salt: &str,
    icon: Icon,
    enabled: bool,
    style: &GalleryStyle,
    tooltip: &str,
) -> Response {
    let sense = if enabled { Sense::click() } else { Sense::hover() };
    let response = ui.interact(rect, ui.id().with(id_salt), sense);
    let tint = style.control_tint(enabled, response.hovered());
    paint_icon(ui.painter(), rect, icon, tint, color(style.control_shadow));
    response.on_hover_text(tooltip)
}

/// Arrow at the left or right edge of `slides`. A disabled arrow is drawn
/// dimmed and ignores clicks.
pub fn nav_arrow(
    ui: &mut Ui,
    slides: Rect,
    side: NavSide,
    enabled: bool,
    style: &GalleryStyle,
) -> Response {
    let size = vec2(style.nav_icon_size * 0.6, style.nav_icon_size * 1.6);
    let margin = 8.0;
    let area = slides.shrink2(vec2(margin, 0.0));
    let rect = match side {
        NavSide::Left => Align2::LEFT_CENTER.align_size_within_rect(size, area),
        NavSide::Right => Align2::RIGHT_CENTER.align_size_within_rect(size, area),
    };
    let (salt, icon, tip) = match side {
        NavSide::Left => ("nav-left", Icon::Left, LABEL_PREVIOUS_SLIDE),
        NavSide::Right => ("nav-right", Icon::Right, LABEL_NEXT_SLIDE),
    };
    icon_button(ui, rect, salt, icon, enabled, style, tip)
}

pub fn play_button(ui: &mut Ui, slides: Rect, playing: bool, style: &GalleryStyle) -> Response {
    let rect = Align2::LEFT_BOTTOM.align_size_within_rect(
        vec2(style.control_icon_size, style.control_icon_size),
        slides.shrink(12.0),
    );
    let icon = if playing { Icon::Pause } else { Icon::Play };
    icon_button(ui, rect, "play", icon, true, style, LABEL_PLAY_PAUSE)
}

pub fn fullscreen_button(
    ui: &mut Ui,
    slides: Rect,
    fullscreen: bool,
    style: &GalleryStyle,
) -> Response {
    let rect = Align2::RIGHT_BOTTOM.align_size_within_rect(
        vec2(style.control_icon_size, style.control_icon_size),
        slides.shrink(12.0),
    );
    let (icon, tip) = if fullscreen {
        (Icon::Minimize, LABEL_EXIT_FULLSCREEN)
    } else {
        (Icon::Maximize, LABEL_OPEN_FULLSCREEN)
    };
    icon_button(ui, rect, "fullscreen", icon, true, style, tip)
}

/// `"3 / 10"` counter in the top right corner.
pub fn index_counter(ui: &Ui, slides: Rect, label: &str, style: &GalleryStyle) {
    if label.is_empty() {
        return;
    }
    let font = FontId::proportional(14.0);
    let galley = ui
        .painter()
        .layout_no_wrap(label.to_string(), font, color(style.overlay_text));
    let padding = vec2(10.0, 4.0);
    let rect = Align2::RIGHT_TOP.align_size_within_rect(
        galley.size() + padding * 2.0,
        slides.shrink(10.0),
    );
    ui.painter()
        .rect_filled(rect, CornerRadius::same(4), color(style.overlay_background));
    ui.painter()
        .galley(rect.min + padding, galley, color(style.overlay_text));
}
