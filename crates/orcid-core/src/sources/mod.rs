//! Source plugins for fetching publications from online registries

pub mod orcid;
pub mod traits;

pub use orcid::*;
pub use traits::*;
