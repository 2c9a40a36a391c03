//! Flat publication record produced from an ORCID work-summary

use serde::{Deserialize, Serialize};

/// A single publication, with every field defaulted to an empty string
/// when the upstream record did not carry it.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PublicationRecord {
    pub title: String,
    pub year: String,
    #[serde(rename = "type")]
    pub work_type: String,
    /// DOI resolver link, empty when the work has no DOI
    pub url: String,
}

impl PublicationRecord {
    pub fn new(
        title: impl Into<String>,
        year: impl Into<String>,
        work_type: impl Into<String>,
        url: impl Into<String>,
    ) -> Self {
        Self {
            title: title.into(),
            year: year.into(),
            work_type: work_type.into(),
            url: url.into(),
        }
    }

    pub fn has_link(&self) -> bool {
        !self.url.is_empty()
    }
}
