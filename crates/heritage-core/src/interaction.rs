//! Per-site interaction flags driven by the presenter.

use serde::{Deserialize, Serialize};

/// Mutable UI flags for one site. Every flag starts `false`.
///
/// The flags are independent: a site may be both a favorite and disliked.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct InteractionState {
    pub favorite: bool,
    pub disliked: bool,
    pub expanded: bool,
}

impl InteractionState {
    /// Label for the expand/collapse control.
    #[must_use]
    pub fn expand_label(&self) -> &'static str {
        if self.expanded {
            "Read Less"
        } else {
            "Read More"
        }
    }
}
