//! Best-effort HTML document tree with DOM-style lookups.
//!
//! Wraps [`scraper::Html`], which builds a tree from any input the way a
//! browser would. Malformed or empty markup never fails: it just yields fewer
//! (or zero) elements.

use scraper::{ElementRef, Html};

/// A parsed markup document.
pub struct Document {
    html: Html,
}

impl Document {
    /// Parses `markup` into a document tree.
    #[must_use]
    pub fn parse(markup: &str) -> Self {
        let html = Html::parse_document(markup);
        if !html.errors.is_empty() {
            tracing::debug!(
                errors = html.errors.len(),
                "markup parsed with recoverable errors"
            );
        }
        Self { html }
    }

    /// All elements whose `class` attribute equals `class`, in document order.
    ///
    /// The whole attribute value is compared (ignoring surrounding
    /// whitespace), so `class="col-sm-12 hidden"` does not match `col-sm-12`.
    #[must_use]
    pub fn elements_by_class_name(&self, class: &str) -> Vec<Element<'_>> {
        self.elements()
            .filter(|el| {
                el.value()
                    .attr("class")
                    .is_some_and(|value| value.trim() == class)
            })
            .map(Element)
            .collect()
    }

    /// All elements with tag name `tag` (ASCII case-insensitive), in document order.
    #[must_use]
    pub fn elements_by_tag_name(&self, tag: &str) -> Vec<Element<'_>> {
        self.elements()
            .filter(|el| el.value().name().eq_ignore_ascii_case(tag))
            .map(Element)
            .collect()
    }

    fn elements(&self) -> impl Iterator<Item = ElementRef<'_>> {
        self.html.tree.root().descendants().filter_map(ElementRef::wrap)
    }
}

/// An element inside a [`Document`].
#[derive(Debug, Clone, Copy)]
pub struct Element<'a>(ElementRef<'a>);

impl<'a> Element<'a> {
    #[must_use]
    pub fn tag_name(&self) -> &'a str {
        self.0.value().name()
    }

    /// Descendants of this element (not the element itself) with tag name
    /// `tag`, in document order.
    #[must_use]
    pub fn elements_by_tag_name(&self, tag: &str) -> Vec<Element<'a>> {
        self.descendants_by_tag_name(tag).collect()
    }

    /// First descendant with tag name `tag`.
    #[must_use]
    pub fn first_by_tag_name(&self, tag: &str) -> Option<Element<'a>> {
        self.descendants_by_tag_name(tag).next()
    }

    /// Concatenated text of all descendant text nodes, untrimmed.
    #[must_use]
    pub fn text_content(&self) -> String {
        self.0.text().collect()
    }

    #[must_use]
    pub fn attribute(&self, name: &str) -> Option<&'a str> {
        self.0.value().attr(name)
    }

    fn descendants_by_tag_name<'t>(&self, tag: &'t str) -> impl Iterator<Item = Element<'a>> + 't
    where
        'a: 't,
    {
        self.0
            .descendants()
            .skip(1)
            .filter_map(ElementRef::wrap)
            .filter(move |el| el.value().name().eq_ignore_ascii_case(tag))
            .map(Element)
    }
}

#[cfg(test)]
#[path = "markup_test.rs"]
mod tests;
