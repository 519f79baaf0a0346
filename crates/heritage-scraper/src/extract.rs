//! Mapping of marker-class containers to [`HeritageSite`] records.
//!
//! The extractor is coupled to the layout of the page it targets: containers
//! are found by an exact `class` value, and the title, description and image
//! come from the first `h3`, `p` and `img` under each container. A layout
//! change on the source page degrades the output to sentinel-filled or empty
//! records rather than raising an error.

use heritage_core::{AppConfig, ContainerFilterKind, HeritageSite, NO_DESCRIPTION, NO_TITLE};

use crate::image_base::ImageBase;
use crate::markup::{Document, Element};

/// Chooses which marker-class matches become records.
///
/// Receives every match in document order and must return the survivors in
/// document order.
pub trait ContainerFilter: Send + Sync {
    fn select<'a>(&self, containers: Vec<Element<'a>>) -> Vec<Element<'a>>;
}

/// Drops `leading` matches from the front and `trailing` from the back.
///
/// The stock source page wraps its navigation/intro and footer in the same
/// marker class as the site cards, two of each.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PositionalTrim {
    pub leading: usize,
    pub trailing: usize,
}

impl ContainerFilter for PositionalTrim {
    fn select<'a>(&self, containers: Vec<Element<'a>>) -> Vec<Element<'a>> {
        let keep = containers
            .len()
            .saturating_sub(self.leading)
            .saturating_sub(self.trailing);
        containers
            .into_iter()
            .skip(self.leading)
            .take(keep)
            .collect()
    }
}

/// Keeps containers that have both an `h3` and a `p` descendant, wherever
/// they sit in the document.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ContentShape;

impl ContainerFilter for ContentShape {
    fn select<'a>(&self, containers: Vec<Element<'a>>) -> Vec<Element<'a>> {
        containers
            .into_iter()
            .filter(|c| c.first_by_tag_name("h3").is_some() && c.first_by_tag_name("p").is_some())
            .collect()
    }
}

impl From<ContainerFilterKind> for Box<dyn ContainerFilter> {
    fn from(kind: ContainerFilterKind) -> Self {
        match kind {
            ContainerFilterKind::Positional { leading, trailing } => {
                Box::new(PositionalTrim { leading, trailing })
            }
            ContainerFilterKind::ContentShape => Box::new(ContentShape),
        }
    }
}

/// Settings for a [`RecordExtractor`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtractorConfig {
    pub marker_class: String,
    pub filter: ContainerFilterKind,
    /// Page the markup came from; image paths resolve against its root.
    pub source_url: String,
}

impl ExtractorConfig {
    #[must_use]
    pub fn from_app_config(config: &AppConfig) -> Self {
        Self {
            marker_class: config.marker_class.clone(),
            filter: config.container_filter,
            source_url: config.source_url.clone(),
        }
    }
}

pub struct RecordExtractor {
    marker_class: String,
    image_base: ImageBase,
    filter: Box<dyn ContainerFilter>,
}

impl RecordExtractor {
    #[must_use]
    pub fn new(config: &ExtractorConfig) -> Self {
        Self::with_filter(&config.marker_class, &config.source_url, config.filter.into())
    }

    /// Builds an extractor with a custom container filter.
    #[must_use]
    pub fn with_filter(
        marker_class: &str,
        source_url: &str,
        filter: Box<dyn ContainerFilter>,
    ) -> Self {
        Self {
            marker_class: marker_class.to_owned(),
            image_base: ImageBase::for_page(source_url),
            filter,
        }
    }

    /// Maps every surviving container to a record, in document order.
    ///
    /// Never fails: a container missing a field yields the sentinel (title,
    /// description) or an empty string (image) for that field only. Calling
    /// this twice on the same document yields identical output.
    #[must_use]
    pub fn extract(&self, doc: &Document) -> Vec<HeritageSite> {
        let matched = doc.elements_by_class_name(&self.marker_class);
        let matched_count = matched.len();
        let containers = self.filter.select(matched);

        tracing::debug!(
            marker_class = %self.marker_class,
            matched = matched_count,
            containers = containers.len(),
            "selected containers"
        );

        containers
            .into_iter()
            .enumerate()
            .map(|(position, container)| self.map_container(position, container))
            .collect()
    }

    fn map_container(&self, position: usize, container: Element<'_>) -> HeritageSite {
        let title = first_text(container, "h3").unwrap_or_else(|| {
            tracing::warn!(position, "container has no title; using sentinel");
            NO_TITLE.to_string()
        });

        let description = first_text(container, "p").unwrap_or_else(|| {
            tracing::warn!(position, %title, "container has no description; using sentinel");
            NO_DESCRIPTION.to_string()
        });

        let image = container
            .first_by_tag_name("img")
            .and_then(|img| img.attribute("src"))
            .and_then(|src| self.image_base.resolve(src))
            .unwrap_or_default();

        HeritageSite {
            position,
            title,
            description,
            image,
        }
    }
}

/// Trimmed text of the first `tag` descendant; `None` when absent or blank.
fn first_text(container: Element<'_>, tag: &str) -> Option<String> {
    container
        .first_by_tag_name(tag)
        .map(|el| el.text_content().trim().to_string())
        .filter(|text| !text.is_empty())
}

#[cfg(test)]
#[path = "extract_test.rs"]
mod tests;
