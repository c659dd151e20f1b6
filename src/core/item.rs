use std::fmt;
use std::path::Path;
use std::sync::Arc;

use serde::Deserialize;

use crate::core::image_loader::resolve_source;

/// Draws the body of a slide or thumbnail in place of the default image.
pub type ItemRenderer = Arc<dyn Fn(&mut egui::Ui, &GalleryItem) + Send + Sync>;

/// One entry of the gallery. Items are inputs: the gallery reads them and
/// never changes them.
#[derive(Clone, Default, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct GalleryItem {
    pub original: String,
    pub thumbnail: Option<String>,
    /// Shown instead of `original` while the gallery is fullscreen.
    pub fullscreen: Option<String>,
    pub original_alt: Option<String>,
    pub original_title: Option<String>,
    pub thumbnail_alt: Option<String>,
    pub thumbnail_title: Option<String>,
    pub thumbnail_label: Option<String>,
    pub description: Option<String>,
    pub original_class: Option<String>,
    pub thumbnail_class: Option<String>,
    pub bullet_class: Option<String>,
    #[serde(skip)]
    pub render_item: Option<ItemRenderer>,
    #[serde(skip)]
    pub render_thumb_inner: Option<ItemRenderer>,
}

impl GalleryItem {
    pub fn new(original: impl Into<String>) -> Self {
        Self {
            original: original.into(),
            ..Self::default()
        }
    }

    pub fn with_thumbnail(mut self, thumbnail: impl Into<String>) -> Self {
        self.thumbnail = Some(thumbnail.into());
        self
    }

    pub fn with_fullscreen(mut self, fullscreen: impl Into<String>) -> Self {
        self.fullscreen = Some(fullscreen.into());
        self
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn with_original_class(mut self, class: impl Into<String>) -> Self {
        self.original_class = Some(class.into());
        self
    }

    pub fn with_renderer(
        mut self,
        render: impl Fn(&mut egui::Ui, &GalleryItem) + Send + Sync + 'static,
    ) -> Self {
        self.render_item = Some(Arc::new(render));
        self
    }

    pub fn with_thumb_renderer(
        mut self,
        render: impl Fn(&mut egui::Ui, &GalleryItem) + Send + Sync + 'static,
    ) -> Self {
        self.render_thumb_inner = Some(Arc::new(render));
        self
    }

    /// Source for the slide body, honouring the fullscreen variant.
    pub fn slide_source(&self, fullscreen: bool) -> &str {
        match (&self.fullscreen, fullscreen) {
            (Some(src), true) => src,
            _ => &self.original,
        }
    }

    /// Source for the thumbnail strip; falls back to the original.
    pub fn thumbnail_source(&self) -> &str {
        self.thumbnail.as_deref().unwrap_or(&self.original)
    }

    /// Hover text for the slide: title, else alt text.
    pub fn slide_tooltip(&self) -> Option<&str> {
        self.original_title
            .as_deref()
            .or(self.original_alt.as_deref())
    }

    pub fn thumbnail_tooltip(&self) -> Option<&str> {
        self.thumbnail_title
            .as_deref()
            .or(self.thumbnail_alt.as_deref())
    }

    pub(crate) fn resolve_relative_to(&mut self, base: &Path) {
        self.original = resolve_source(&self.original, base);
        for src in [&mut self.thumbnail, &mut self.fullscreen]
            .into_iter()
            .flatten()
        {
            *src = resolve_source(src, base);
        }
    }
}

impl fmt::Debug for GalleryItem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GalleryItem")
            .field("original", &self.original)
            .field("thumbnail", &self.thumbnail)
            .field("fullscreen", &self.fullscreen)
            .field("description", &self.description)
            .field("original_class", &self.original_class)
            .field("thumbnail_class", &self.thumbnail_class)
            .field("bullet_class", &self.bullet_class)
            .field("render_item", &self.render_item.is_some())
            .field("render_thumb_inner", &self.render_thumb_inner.is_some())
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fullscreen_source_only_used_while_fullscreen() {
        let item = GalleryItem::new("a.jpg").with_fullscreen("a-large.jpg");
        assert_eq!(item.slide_source(false), "a.jpg");
        assert_eq!(item.slide_source(true), "a-large.jpg");

        let plain = GalleryItem::new("b.jpg");
        assert_eq!(plain.slide_source(true), "b.jpg");
    }

    #[test]
    fn thumbnail_falls_back_to_original() {
        assert_eq!(GalleryItem::new("a.jpg").thumbnail_source(), "a.jpg");
        assert_eq!(
            GalleryItem::new("a.jpg")
                .with_thumbnail("t.jpg")
                .thumbnail_source(),
            "t.jpg"
        );
    }

    #[test]
    fn deserializes_kebab_case_fields() {
        let item: GalleryItem = toml::from_str(
            r#"
            original = "a.jpg"
            thumbnail-label = "First"
            original-class = "featured"
            "#,
        )
        .unwrap();
        assert_eq!(item.thumbnail_label.as_deref(), Some("First"));
        assert_eq!(item.original_class.as_deref(), Some("featured"));
        assert!(item.render_item.is_none());
    }
}
