//! ORCID public API source plugin
//!
//! API docs: https://info.orcid.org/documentation/api-tutorials/
//! Endpoint: GET {base}/{orcid}/works, read-only, no API key

use std::sync::Arc;

use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer};
use tracing::{debug, info};

use super::traits::{SourceError, SourceMetadata};
use crate::domain::PublicationRecord;
use crate::error::ResolveError;
use crate::http::{HttpError, HttpTransport};

pub const ORCID_API_BASE: &str = "https://pub.orcid.org/v3.0";
pub const DOI_RESOLVER: &str = "https://doi.org/";

#[derive(Debug, Deserialize)]
struct WorksResponse {
    group: Option<Vec<serde_json::Value>>,
}

#[derive(Debug, Default, Deserialize)]
struct WorkGroup {
    #[serde(rename = "work-summary", default, deserialize_with = "lenient")]
    work_summary: Option<Vec<WorkSummary>>,
}

#[derive(Debug, Default, Deserialize)]
struct WorkSummary {
    #[serde(default, deserialize_with = "lenient")]
    title: Option<WorkTitle>,
    #[serde(rename = "publication-date", default, deserialize_with = "lenient")]
    publication_date: Option<PublicationDate>,
    #[serde(rename = "type", default, deserialize_with = "lenient_string")]
    work_type: Option<String>,
    #[serde(rename = "external-ids", default, deserialize_with = "lenient")]
    external_ids: Option<ExternalIds>,
}

#[derive(Debug, Deserialize)]
struct WorkTitle {
    #[serde(default, deserialize_with = "lenient")]
    title: Option<ValueField>,
}

#[derive(Debug, Deserialize)]
struct PublicationDate {
    #[serde(default, deserialize_with = "lenient")]
    year: Option<ValueField>,
}

/// ORCID wraps most leaves as `{"value": ...}`
#[derive(Debug, Deserialize)]
struct ValueField {
    #[serde(default, deserialize_with = "lenient_string")]
    value: Option<String>,
}

#[derive(Debug, Deserialize)]
struct ExternalIds {
    #[serde(rename = "external-id", default, deserialize_with = "lenient")]
    external_id: Option<Vec<ExternalId>>,
}

#[derive(Debug, Deserialize)]
struct ExternalId {
    #[serde(rename = "external-id-type", default, deserialize_with = "lenient_string")]
    id_type: Option<String>,
    #[serde(rename = "external-id-value", default, deserialize_with = "lenient_string")]
    value: Option<String>,
}

/// Deserialize a nested value, turning a shape mismatch into `None`
fn lenient<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    Ok(serde_json::from_value(value).ok())
}

/// Accept strings and numbers as text, anything else as absent
fn lenient_string<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    Ok(match value {
        serde_json::Value::String(s) => Some(s),
        serde_json::Value::Number(n) => Some(n.to_string()),
        _ => None,
    })
}

pub struct OrcidSource {
    transport: Arc<dyn HttpTransport>,
    base_url: String,
}

impl OrcidSource {
    pub fn new(transport: Arc<dyn HttpTransport>) -> Self {
        Self {
            transport,
            base_url: ORCID_API_BASE.to_string(),
        }
    }

    /// Point the source at another API root (sandbox, mirror, test server)
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into().trim_end_matches('/').to_string();
        self
    }

    pub fn metadata() -> SourceMetadata {
        SourceMetadata {
            id: "orcid",
            name: "ORCID",
            description: "Public registry of persistent researcher identifiers and their works",
            base_url: "https://pub.orcid.org",
            requires_api_key: false,
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Works endpoint for an ORCID iD; the iD is encoded as one path segment
    pub fn works_url(&self, orcid: &str) -> String {
        format!("{}/{}/works", self.base_url, urlencoding::encode(orcid))
    }

    /// Fetch and normalize a researcher's works with a single GET
    pub async fn fetch_works(&self, orcid: &str) -> Result<Vec<PublicationRecord>, ResolveError> {
        let url = self.works_url(orcid);
        info!(%url, "Fetching ORCID works");

        let response = self
            .transport
            .get(&url, &[("Accept", "application/json")])
            .await?;

        if !response.is_success() {
            return Err(HttpError::Status {
                status: response.status,
            }
            .into());
        }

        let records = Self::parse_works_response(&response.body)?;
        debug!(orcid, count = records.len(), "Parsed ORCID works");
        Ok(records)
    }

    /// Parse an ORCID works response into flat publication records.
    ///
    /// Fails only when the body is not JSON or has no `group` list. Inside a
    /// group, anything missing or oddly shaped degrades to an empty string.
    pub fn parse_works_response(json: &str) -> Result<Vec<PublicationRecord>, SourceError> {
        let response: WorksResponse = serde_json::from_str(json)
            .map_err(|e| SourceError::Parse(format!("Invalid ORCID JSON: {}", e)))?;

        let groups = response.group.ok_or(SourceError::MissingGroup)?;

        Ok(groups
            .into_iter()
            .map(|group| serde_json::from_value::<WorkGroup>(group).unwrap_or_default())
            .map(|group| {
                let summary = group
                    .work_summary
                    .and_then(|summaries| summaries.into_iter().next());
                normalize_work(summary.unwrap_or_default())
            })
            .collect())
    }
}

fn normalize_work(summary: WorkSummary) -> PublicationRecord {
    let title = summary
        .title
        .and_then(|t| t.title)
        .and_then(|t| t.value)
        .unwrap_or_default();

    let year = summary
        .publication_date
        .and_then(|d| d.year)
        .and_then(|y| y.value)
        .unwrap_or_default();

    let url = summary
        .external_ids
        .and_then(|ids| ids.external_id)
        .map(|ids| doi_url(&ids))
        .unwrap_or_default();

    PublicationRecord {
        title,
        year,
        work_type: summary.work_type.unwrap_or_default(),
        url,
    }
}

/// Link for the first DOI in API order. Only that entry is considered; if
/// it carries no value the work stays unlinked.
fn doi_url(ids: &[ExternalId]) -> String {
    ids.iter()
        .find(|id| id.id_type.as_deref() == Some("doi"))
        .and_then(|id| id.value.as_deref())
        .filter(|doi| !doi.is_empty())
        .map(|doi| format!("{}{}", DOI_RESOLVER, doi))
        .unwrap_or_default()
}
