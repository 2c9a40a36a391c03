//! Domain models for ORCID publication lists
//!
//! `PublicationRecord` is what normalization produces and what the renderer
//! consumes. `DisplayOptions` carries the block's visual settings.

pub mod options;
pub mod publication;

pub use options::{DisplayOptions, Layout, TitleTag};
pub use publication::PublicationRecord;
