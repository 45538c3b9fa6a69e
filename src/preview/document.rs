//! Typed model of a form document.
//!
//! Parsed fresh from YAML on every preview refresh and discarded after
//! rendering; nothing here is persisted.

use serde::Deserialize;
use serde_yaml::Value;

/// Top-level document: a single optional `form` mapping.
#[derive(Debug, Clone, Deserialize, Default)]
pub struct FormFile {
    #[serde(default)]
    pub form: Option<Form>,
}

#[derive(Debug, Clone, Deserialize, Default)]
pub struct Form {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub fields: Option<Vec<FieldNode>>,
}

/// A single field node: a one-key mapping from field-type tag to its data.
///
/// Tags outside the known set fall through to `Unknown`, which renders
/// nothing; an unrecognized tag is not an error.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FieldNode {
    Textbox(FieldData),
    Textarea(FieldData),
    Date(FieldData),
    Dropdown(FieldData),
    Checkbox(FieldData),
    Radio(FieldData),
    SectionBreak(FieldData),
    TabBreak(FieldData),
    Card(FieldData),
    Group(FieldData),
    PhotoCapture(FieldData),
    VideoCapture(FieldData),
    Geolocation(FieldData),
    #[serde(untagged)]
    Unknown(Value),
}

/// Field data as authored. Only the properties the renderer consumes are
/// modeled; everything else is ignored on deserialization.
#[derive(Debug, Clone, Deserialize, Default)]
#[serde(rename_all = "camelCase", default)]
pub struct FieldData {
    pub name: Option<String>,
    pub label: Option<String>,
    pub title: Option<String>,
    pub display_type: Option<String>,
    pub data_type: Option<String>,
    pub default_value: Option<Value>,
    pub required: bool,
    pub fields: Option<Vec<FieldNode>>,
}

impl FieldData {
    pub fn name_text(&self) -> &str {
        self.name.as_deref().unwrap_or("")
    }

    /// The visible label: `label` when set and non-empty, else the name.
    pub fn label_or_name(&self) -> &str {
        self.label
            .as_deref()
            .filter(|s| !s.is_empty())
            .unwrap_or_else(|| self.name_text())
    }

    /// The heading text for breaks and containers: `title`, else the name.
    pub fn title_or_name(&self) -> &str {
        self.title
            .as_deref()
            .filter(|s| !s.is_empty())
            .unwrap_or_else(|| self.name_text())
    }

    /// The visible label with a widget-specific fallback (capture fields,
    /// geolocation).
    pub fn label_or(&self, fallback: &'static str) -> &str {
        self.label
            .as_deref()
            .filter(|s| !s.is_empty())
            .unwrap_or(fallback)
    }

    /// Scalar default value as text, when present and non-empty.
    pub fn default_value_text(&self) -> Option<String> {
        match self.default_value.as_ref()? {
            Value::String(s) if !s.is_empty() => Some(s.clone()),
            Value::Number(n) => Some(n.to_string()),
            Value::Bool(b) => Some(b.to_string()),
            _ => None,
        }
    }

    /// A checkbox renders checked only for the literal string `"true"`.
    pub fn checked(&self) -> bool {
        matches!(self.default_value.as_ref(), Some(Value::String(s)) if s == "true")
    }

    /// Row count for textareas, derived from the display type.
    pub fn textarea_rows(&self) -> u8 {
        if self.display_type.as_deref() == Some("textbox.row-8") {
            8
        } else {
            4
        }
    }
}
