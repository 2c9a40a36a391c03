//! orcid-core: render a researcher's ORCID publication list as HTML
//!
//! The pipeline behind the publications block:
//! - validate the ORCID iD
//! - look it up in a TTL cache
//! - on a miss, fetch the works list from the ORCID public API
//! - normalize the nested API records into flat `PublicationRecord`s
//! - render them according to the block's `DisplayOptions`
//!
//! The network and the cache are injected (`HttpTransport`,
//! `PublicationCache`) so the pipeline can be driven without either.

pub mod block;
pub mod cache;
pub mod config;
pub mod domain;
pub mod error;
pub mod http;
pub mod render;
pub mod resolver;
pub mod sources;

pub use block::{block_metadata, render_block, BlockAttributes, BlockMetadata, BLOCK_NAME};
pub use cache::{cache_key, Clock, ManualClock, MemoryCache, PublicationCache, SystemClock};
pub use config::OrcidConfig;
pub use domain::{DisplayOptions, Layout, PublicationRecord, TitleTag};
pub use error::{ConfigError, ResolveError};
#[cfg(feature = "native")]
pub use http::HttpClient;
pub use http::{HttpError, HttpResponse, HttpTransport};
pub use render::{escape_html, render_publications};
pub use resolver::PublicationResolver;
pub use sources::{OrcidSource, SourceError};

/// Returns the version of orcid-core
pub fn version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}
