pub mod client;
pub mod error;
pub mod extract;
pub mod image_base;
pub mod markup;
pub mod pipeline;

pub use client::{DocumentFetcher, PageClient};
pub use error::FetchError;
pub use extract::{ContainerFilter, ContentShape, ExtractorConfig, PositionalTrim, RecordExtractor};
pub use image_base::ImageBase;
pub use markup::{Document, Element};
pub use pipeline::SitePipeline;
