//! Colors and sizes for the gallery, plus named per-item overrides.
//!
//! Colors are `[r, g, b, a]` with unmultiplied alpha so they read the same
//! way in a TOML file:
//!
//! ```toml
//! [gallery.style]
//! control-hover-color = [51, 122, 183, 255]
//!
//! [gallery.style.classes.featured]
//! background = [40, 40, 40, 255]
//! border-color = [255, 200, 0, 255]
//! border-width = 3.0
//! ```

use std::collections::BTreeMap;

use egui::{Color32, CornerRadius, Stroke};
use serde::{Deserialize, Serialize};

use crate::config::config::{BULLET_RADIUS, CONTROL_ICON_SIZE, NAV_ICON_SIZE, THUMBNAIL_SIZE};

pub fn color(rgba: [u8; 4]) -> Color32 {
    Color32::from_rgba_unmultiplied(rgba[0], rgba[1], rgba[2], rgba[3])
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default, rename_all = "kebab-case")]
pub struct GalleryStyle {
    pub background: [u8; 4],
    pub modal_background: [u8; 4],
    pub control_color: [u8; 4],
    pub control_hover_color: [u8; 4],
    pub control_disabled_color: [u8; 4],
    pub control_shadow: [u8; 4],
    pub bullet_color: [u8; 4],
    pub bullet_active_color: [u8; 4],
    pub thumbnail_border: [u8; 4],
    pub thumbnail_active_border: [u8; 4],
    pub thumbnail_border_width: f32,
    pub overlay_background: [u8; 4],
    pub overlay_text: [u8; 4],
    pub placeholder: [u8; 4],
    pub thumbnail_size: f32,
    pub thumbnail_spacing: f32,
    pub bullet_radius: f32,
    pub nav_icon_size: f32,
    pub control_icon_size: f32,
    pub classes: BTreeMap<String, ClassStyle>,
}

impl Default for GalleryStyle {
    fn default() -> Self {
        Self {
            background: [0, 0, 0, 255],
            modal_background: [0, 0, 0, 255],
            control_color: [255, 255, 255, 255],
            control_hover_color: [51, 122, 183, 255],
            control_disabled_color: [255, 255, 255, 64],
            control_shadow: [26, 26, 26, 200],
            bullet_color: [255, 255, 255, 255],
            bullet_active_color: [255, 255, 255, 255],
            thumbnail_border: [0, 0, 0, 0],
            thumbnail_active_border: [51, 122, 183, 255],
            thumbnail_border_width: 4.0,
            overlay_background: [0, 0, 0, 102],
            overlay_text: [255, 255, 255, 255],
            placeholder: [40, 40, 40, 255],
            thumbnail_size: THUMBNAIL_SIZE,
            thumbnail_spacing: 6.0,
            bullet_radius: BULLET_RADIUS,
            nav_icon_size: NAV_ICON_SIZE,
            control_icon_size: CONTROL_ICON_SIZE,
            classes: BTreeMap::new(),
        }
    }
}

impl GalleryStyle {
    /// Override registered under `class`; unknown or absent names resolve
    /// to an empty override.
    pub fn class(&self, class: Option<&str>) -> ClassStyle {
        class
            .and_then(|name| self.classes.get(name))
            .cloned()
            .unwrap_or_default()
    }

    /// Color for an icon control in its current interaction state.
    pub fn control_tint(&self, enabled: bool, hovered: bool) -> Color32 {
        match (enabled, hovered) {
            (false, _) => color(self.control_disabled_color),
            (true, true) => color(self.control_hover_color),
            (true, false) => color(self.control_color),
        }
    }
}

/// Per-item visual override referenced by an item's class fields.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default, rename_all = "kebab-case")]
pub struct ClassStyle {
    pub background: Option<[u8; 4]>,
    pub border_color: Option<[u8; 4]>,
    pub border_width: Option<f32>,
    pub corner_radius: Option<u8>,
    pub text_color: Option<[u8; 4]>,
    pub padding: Option<f32>,
}

impl ClassStyle {
    pub fn fill(&self) -> Option<Color32> {
        self.background.map(color)
    }

    pub fn stroke(&self) -> Option<Stroke> {
        let border = self.border_color?;
        Some(Stroke::new(self.border_width.unwrap_or(1.0), color(border)))
    }

    pub fn corner_radius(&self) -> CornerRadius {
        CornerRadius::same(self.corner_radius.unwrap_or(0))
    }

    pub fn padding(&self) -> f32 {
        self.padding.unwrap_or(0.0)
    }
}
