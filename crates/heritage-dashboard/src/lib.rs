//! Presenter-facing side of the heritage site list: the loaded records,
//! per-site interaction state, attention events and sharing.

pub mod dashboard;
pub mod share;
pub mod store;

pub use dashboard::{Dashboard, LoadState};
pub use share::{share_link, share_message, ShareError, Sharer};
pub use store::{Attention, InteractionStore, Toggle};
