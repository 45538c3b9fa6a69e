//! Candidate generation for inferred completion contexts.

use crate::completion::context::{self, CursorContext};
use crate::completion::snippets::{FIELD_SNIPPETS, FORM_SCAFFOLD};
use crate::schema::{self, BOOLEAN_PROPERTIES, DATA_TYPES, DISPLAY_TYPES};

/// How a candidate should be presented by the host.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SuggestionKind {
    Snippet,
    Property,
}

/// One completion candidate: a label, an insertion template in LSP snippet
/// syntax, and optional documentation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Suggestion {
    pub label: String,
    pub insert_text: String,
    pub kind: SuggestionKind,
    pub documentation: Option<String>,
}

/// Main completion entry point: infer the context set at the cursor and
/// union the candidate lists for every context that holds.
pub fn suggestions_at(text: &str, line: u32, character: u32) -> Vec<Suggestion> {
    suggestions_for(&context::infer(text, line, character))
}

/// Candidates for an already-inferred context set, in catalog order.
pub fn suggestions_for(ctx: &CursorContext) -> Vec<Suggestion> {
    let mut items = Vec::new();

    if ctx.at_root {
        items.push(Suggestion {
            label: "form".to_string(),
            insert_text: FORM_SCAFFOLD.to_string(),
            kind: SuggestionKind::Snippet,
            documentation: Some("Create a new form".to_string()),
        });
    }

    if let Some(type_key) = &ctx.property_block {
        items.extend(property_suggestions(type_key));
    }

    if ctx.insertion_point {
        items.extend(FIELD_SNIPPETS.iter().map(|snippet| Suggestion {
            label: snippet.label.to_string(),
            insert_text: snippet.body.to_string(),
            kind: SuggestionKind::Snippet,
            documentation: None,
        }));
    }

    items
}

/// Key/value templates for every property of the given field type. A key
/// outside the registry yields nothing.
pub fn property_suggestions(type_key: &str) -> Vec<Suggestion> {
    let Some(def) = schema::lookup(type_key) else {
        return Vec::new();
    };

    def.properties()
        .into_iter()
        .map(|prop| Suggestion {
            label: prop.to_string(),
            insert_text: property_insert_text(prop),
            kind: SuggestionKind::Property,
            documentation: None,
        })
        .collect()
}

/// Trigger-character (`:`) entry point for the legacy `input`/`email` path.
/// Both identifiers are absent from the registry, so the lookup miss yields
/// an empty list under the standard leniency policy.
pub fn trigger_suggestions_at(text: &str, line: u32, character: u32) -> Vec<Suggestion> {
    match context::trigger_field_type(text, line, character) {
        Some(type_key) => trigger_property_suggestions(&type_key),
        None => Vec::new(),
    }
}

/// Plain property-name candidates, no value template.
fn trigger_property_suggestions(type_key: &str) -> Vec<Suggestion> {
    let Some(def) = schema::lookup(type_key) else {
        return Vec::new();
    };

    def.properties()
        .into_iter()
        .map(|prop| Suggestion {
            label: prop.to_string(),
            insert_text: prop.to_string(),
            kind: SuggestionKind::Property,
            documentation: None,
        })
        .collect()
}

fn property_insert_text(prop: &str) -> String {
    match prop {
        "displayType" => format!("displayType: ${{1|{}|}}", DISPLAY_TYPES.join(",")),
        "dataType" => format!("dataType: ${{1|{}|}}", DATA_TYPES.join(",")),
        p if BOOLEAN_PROPERTIES.contains(&p) => format!("{p}: ${{1|true,false|}}"),
        p => format!("{p}: ${{1}}"),
    }
}
