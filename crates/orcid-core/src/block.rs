//! Publications block: registration metadata, attribute parsing and the
//! render entry point the host page calls.
//!
//! Attributes arrive loosely typed (JSON from the editor, strings from a
//! query string). Anything unusable falls back to the attribute's default,
//! so rendering never fails on bad settings.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::domain::options::{clamp_font_size, DEFAULT_FONT_SIZE, MAX_FONT_SIZE, MIN_FONT_SIZE};
use crate::domain::{DisplayOptions, Layout, TitleTag};
use crate::render::render_publications;
use crate::resolver::PublicationResolver;

pub const BLOCK_NAME: &str = "orcid-publications/publications";

/// Raw block attributes as sent by the editor or a query string
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct BlockAttributes {
    pub orcid: Option<Value>,
    pub title_tag: Option<Value>,
    pub font_size: Option<Value>,
    pub show_year: Option<Value>,
    pub show_type: Option<Value>,
    pub layout: Option<Value>,
}

impl BlockAttributes {
    pub fn with_orcid(orcid: impl Into<String>) -> Self {
        Self {
            orcid: Some(Value::String(orcid.into())),
            ..Self::default()
        }
    }

    /// Resolve into display options, falling back per field
    pub fn display_options(&self) -> DisplayOptions {
        let defaults = DisplayOptions::default();

        DisplayOptions {
            identifier: self
                .orcid
                .as_ref()
                .and_then(as_text)
                .map(|s| s.trim().to_string())
                .unwrap_or(defaults.identifier),
            title_tag: self
                .title_tag
                .as_ref()
                .and_then(as_text)
                .and_then(|s| TitleTag::parse(&s))
                .unwrap_or(defaults.title_tag),
            font_size: self
                .font_size
                .as_ref()
                .and_then(as_integer)
                .map(clamp_font_size)
                .unwrap_or(defaults.font_size),
            show_year: self
                .show_year
                .as_ref()
                .and_then(as_bool)
                .unwrap_or(defaults.show_year),
            show_type: self
                .show_type
                .as_ref()
                .and_then(as_bool)
                .unwrap_or(defaults.show_type),
            layout: self
                .layout
                .as_ref()
                .and_then(as_text)
                .and_then(|s| Layout::parse(&s))
                .unwrap_or(defaults.layout),
        }
    }
}

impl From<&BlockAttributes> for DisplayOptions {
    fn from(attributes: &BlockAttributes) -> Self {
        attributes.display_options()
    }
}

fn as_text(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    }
}

fn as_integer(value: &Value) -> Option<i64> {
    match value {
        Value::Number(n) => n
            .as_i64()
            .or_else(|| n.as_f64().filter(|f| f.is_finite()).map(|f| f.round() as i64)),
        Value::String(s) => {
            let s = s.trim();
            s.parse::<i64>().ok().or_else(|| {
                s.parse::<f64>()
                    .ok()
                    .filter(|f| f.is_finite())
                    .map(|f| f.round() as i64)
            })
        }
        _ => None,
    }
}

fn as_bool(value: &Value) -> Option<bool> {
    match value {
        Value::Bool(b) => Some(*b),
        Value::Number(n) => n.as_i64().map(|n| n != 0),
        Value::String(s) => match s.trim().to_ascii_lowercase().as_str() {
            "true" | "1" | "yes" | "on" => Some(true),
            "false" | "0" | "no" | "off" => Some(false),
            _ => None,
        },
        _ => None,
    }
}

/// Resolve and render a block. Failures become inline placeholders.
pub async fn render_block(resolver: &PublicationResolver, attributes: &BlockAttributes) -> String {
    let options = attributes.display_options();
    match resolver.resolve(&options.identifier).await {
        Ok(records) => render_publications(&records, &options),
        Err(error) => error.placeholder().to_string(),
    }
}

/// Block registration record, as consumed by an editor integration
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BlockMetadata {
    pub name: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    pub category: &'static str,
    pub icon: &'static str,
    pub attributes: serde_json::Map<String, Value>,
    pub controls: Vec<BlockControl>,
}

/// One inspector control offered by the editor
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BlockControl {
    pub attribute: &'static str,
    pub label: &'static str,
    pub kind: &'static str,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub options: Vec<ControlOption>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min: Option<u8>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max: Option<u8>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub help: Option<&'static str>,
}

#[derive(Debug, Clone, Serialize)]
pub struct ControlOption {
    pub label: &'static str,
    pub value: &'static str,
}

impl BlockControl {
    fn new(attribute: &'static str, label: &'static str, kind: &'static str) -> Self {
        Self {
            attribute,
            label,
            kind,
            options: Vec::new(),
            min: None,
            max: None,
            help: None,
        }
    }
}

pub fn block_metadata() -> BlockMetadata {
    let defaults = DisplayOptions::default();

    let mut attributes = serde_json::Map::new();
    let mut attribute = |name: &str, kind: &str, default: Value| {
        attributes.insert(
            name.to_string(),
            serde_json::json!({ "type": kind, "default": default }),
        );
    };
    attribute("orcid", "string", Value::from(defaults.identifier.clone()));
    attribute("titleTag", "string", Value::from(defaults.title_tag.as_str()));
    attribute("fontSize", "number", Value::from(DEFAULT_FONT_SIZE));
    attribute("showYear", "boolean", Value::from(defaults.show_year));
    attribute("showType", "boolean", Value::from(defaults.show_type));
    attribute("layout", "string", Value::from(defaults.layout.as_str()));

    let controls = vec![
        BlockControl {
            options: Layout::ALL
                .iter()
                .map(|l| ControlOption {
                    label: l.label(),
                    value: l.as_str(),
                })
                .collect(),
            ..BlockControl::new("layout", "Layout Style", "select")
        },
        BlockControl {
            options: TitleTag::ALL
                .iter()
                .map(|t| ControlOption {
                    label: t.label(),
                    value: t.as_str(),
                })
                .collect(),
            ..BlockControl::new("titleTag", "Title Tag", "select")
        },
        BlockControl {
            min: Some(MIN_FONT_SIZE),
            max: Some(MAX_FONT_SIZE),
            ..BlockControl::new("fontSize", "Font Size", "range")
        },
        BlockControl::new("showYear", "Show Year", "toggle"),
        BlockControl::new("showType", "Show Type", "toggle"),
        BlockControl {
            help: Some("Enter the ORCID ID (format: 0000-0000-0000-0000)"),
            ..BlockControl::new("orcid", "ORCID ID", "text")
        },
    ];

    BlockMetadata {
        name: BLOCK_NAME,
        title: "ORCID Publications",
        description: "Display publications from ORCID using a block",
        category: "widgets",
        icon: "book-alt",
        attributes,
        controls,
    }
}
