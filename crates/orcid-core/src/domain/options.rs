//! Display options for the publications block

use serde::{Deserialize, Serialize};

/// Smallest font size the block accepts, in pixels
pub const MIN_FONT_SIZE: u8 = 12;
/// Largest font size the block accepts, in pixels
pub const MAX_FONT_SIZE: u8 = 24;
/// Font size used when none is configured
pub const DEFAULT_FONT_SIZE: u8 = 16;

/// Heading element used for each publication title
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TitleTag {
    H2,
    #[default]
    H3,
    H4,
}

impl TitleTag {
    pub const ALL: [TitleTag; 3] = [TitleTag::H2, TitleTag::H3, TitleTag::H4];

    pub fn as_str(&self) -> &'static str {
        match self {
            TitleTag::H2 => "h2",
            TitleTag::H3 => "h3",
            TitleTag::H4 => "h4",
        }
    }

    /// Parse a tag name, case-insensitively. Unknown names yield `None`.
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "h2" => Some(TitleTag::H2),
            "h3" => Some(TitleTag::H3),
            "h4" => Some(TitleTag::H4),
            _ => None,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            TitleTag::H2 => "H2",
            TitleTag::H3 => "H3",
            TitleTag::H4 => "H4",
        }
    }
}

/// Layout style; only changes the wrapper's CSS class
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Layout {
    #[default]
    List,
    Grid,
    Compact,
}

impl Layout {
    pub const ALL: [Layout; 3] = [Layout::List, Layout::Grid, Layout::Compact];

    pub fn as_str(&self) -> &'static str {
        match self {
            Layout::List => "list",
            Layout::Grid => "grid",
            Layout::Compact => "compact",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "list" => Some(Layout::List),
            "grid" => Some(Layout::Grid),
            "compact" => Some(Layout::Compact),
            _ => None,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Layout::List => "List",
            Layout::Grid => "Grid",
            Layout::Compact => "Compact",
        }
    }

    /// CSS class carried by the wrapper element
    pub fn css_class(&self) -> String {
        format!("is-layout-{}", self.as_str())
    }
}

/// Resolved display settings for one render
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct DisplayOptions {
    /// ORCID iD to resolve
    pub identifier: String,
    pub title_tag: TitleTag,
    /// Always within `MIN_FONT_SIZE..=MAX_FONT_SIZE`
    pub font_size: u8,
    pub show_year: bool,
    pub show_type: bool,
    pub layout: Layout,
}

impl Default for DisplayOptions {
    fn default() -> Self {
        Self {
            identifier: String::new(),
            title_tag: TitleTag::default(),
            font_size: DEFAULT_FONT_SIZE,
            show_year: true,
            show_type: true,
            layout: Layout::default(),
        }
    }
}

impl DisplayOptions {
    pub fn new(identifier: impl Into<String>) -> Self {
        Self {
            identifier: identifier.into(),
            ..Self::default()
        }
    }

    pub fn with_title_tag(mut self, title_tag: TitleTag) -> Self {
        self.title_tag = title_tag;
        self
    }

    /// Set the font size, clamped into the accepted range
    pub fn with_font_size(mut self, font_size: i64) -> Self {
        self.font_size = clamp_font_size(font_size);
        self
    }

    pub fn with_show_year(mut self, show_year: bool) -> Self {
        self.show_year = show_year;
        self
    }

    pub fn with_show_type(mut self, show_type: bool) -> Self {
        self.show_type = show_type;
        self
    }

    pub fn with_layout(mut self, layout: Layout) -> Self {
        self.layout = layout;
        self
    }

    /// Whether any metadata field is enabled at all
    pub fn shows_metadata(&self) -> bool {
        self.show_year || self.show_type
    }
}

/// Clamp an arbitrary integer into `MIN_FONT_SIZE..=MAX_FONT_SIZE`
pub fn clamp_font_size(value: i64) -> u8 {
    value.clamp(MIN_FONT_SIZE as i64, MAX_FONT_SIZE as i64) as u8
}
