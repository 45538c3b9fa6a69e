//! HTML preview rendering.
//!
//! A deterministic, pure transform from a parsed form document to a complete
//! HTML page with inline styles and no external resources. Field dispatch is
//! a match over the known tags; unknown tags render nothing. Every
//! interpolated value is escaped for its position (text or double-quoted
//! attribute).

use std::fmt::Write;

use html_escape::{encode_double_quoted_attribute, encode_text};

use crate::preview::document::{FieldData, FieldNode, FormFile};

const STYLESHEET: &str = "\
body { font-family: -apple-system, BlinkMacSystemFont, sans-serif; padding: 20px; }
.form-group { margin-bottom: 15px; }
label { display: block; margin-bottom: 5px; font-weight: 500; }
input, textarea, select { padding: 8px; border: 1px solid #ccc; border-radius: 4px; width: 100%; }
.section-break { margin: 20px 0; padding: 10px; background: #f5f5f5; border-radius: 4px; }
.tab-break { border-bottom: 2px solid #eee; margin: 15px 0; }
.column-break { display: inline-block; vertical-align: top; padding: 0 10px; }
.card { border: 1px solid #ddd; padding: 15px; border-radius: 4px; margin: 10px 0; }
.group { border: 1px dashed #ccc; padding: 15px; margin: 10px 0; }
.info-pane { background: #e8f4f8; padding: 10px; border-radius: 4px; margin: 10px 0; }
.photo-capture, .video-capture { border: 2px dashed #ccc; padding: 20px; text-align: center; }
.radio-group, .checkbox-group { margin: 10px 0; }
.radio-group label, .checkbox-group label { display: inline-block; margin-right: 15px; }
";

/// Render raw document text to preview HTML.
///
/// Text that fails to deserialize renders as an inline error panel carrying
/// the parse error; this function never fails past the render boundary.
pub fn render_preview(source: &str) -> String {
    match serde_yaml::from_str::<Option<FormFile>>(source) {
        Ok(doc) => render_document(doc.as_ref()),
        Err(e) => format!(
            "<div class=\"error\">Invalid YAML: {}</div>",
            encode_text(&e.to_string())
        ),
    }
}

/// Render a parsed document to a complete HTML page.
pub fn render_document(doc: Option<&FormFile>) -> String {
    let mut html = String::new();
    html.push_str("<!DOCTYPE html>\n<html>\n<head>\n<style>\n");
    html.push_str(STYLESHEET);
    html.push_str("</style>\n</head>\n<body>\n<form>\n");

    if let Some(form) = doc.and_then(|d| d.form.as_ref()) {
        let name = form
            .name
            .as_deref()
            .filter(|s| !s.is_empty())
            .unwrap_or("Form Preview");
        let _ = writeln!(html, "<h2>{}</h2>", encode_text(name));

        if let Some(fields) = &form.fields {
            render_fields(fields, &mut html);
        }
    }

    html.push_str("</form>\n</body>\n</html>\n");
    html
}

/// Render a field list depth-first, preserving document order.
pub fn render_fields(fields: &[FieldNode], html: &mut String) {
    for field in fields {
        match field {
            FieldNode::Textbox(data) => render_input(data, "text", html),
            FieldNode::Date(data) => render_input(data, "date", html),
            FieldNode::Textarea(data) => render_textarea(data, html),
            FieldNode::Dropdown(data) => render_dropdown(data, html),
            FieldNode::Checkbox(data) => render_checkbox(data, html),
            FieldNode::Radio(data) => render_radio(data, html),
            FieldNode::SectionBreak(data) => render_break(data, "section-break", html),
            FieldNode::TabBreak(data) => render_break(data, "tab-break", html),
            FieldNode::Card(data) => render_container(data, "card", html),
            FieldNode::Group(data) => render_container(data, "group", html),
            FieldNode::PhotoCapture(data) => {
                render_capture(data, "photo-capture", "image/*", "Take Photo", html)
            }
            FieldNode::VideoCapture(data) => {
                render_capture(data, "video-capture", "video/*", "Record Video", html)
            }
            FieldNode::Geolocation(data) => render_geolocation(data, html),
            FieldNode::Unknown(_) => {}
        }
    }
}

fn render_input(data: &FieldData, input_type: &str, html: &mut String) {
    let id = encode_double_quoted_attribute(data.name_text());
    let _ = write!(
        html,
        "<div class=\"form-group\">\n\
         <label for=\"{id}\">{label}</label>\n\
         <input type=\"{input_type}\" id=\"{id}\" name=\"{id}\"{required}{value}>\n\
         </div>\n",
        label = encode_text(data.label_or_name()),
        required = required_attr(data),
        value = value_attr(data),
    );
}

fn render_textarea(data: &FieldData, html: &mut String) {
    let id = encode_double_quoted_attribute(data.name_text());
    let default_value = data.default_value_text().unwrap_or_default();
    let _ = write!(
        html,
        "<div class=\"form-group\">\n\
         <label for=\"{id}\">{label}</label>\n\
         <textarea id=\"{id}\" name=\"{id}\" rows=\"{rows}\"{required}>{value}</textarea>\n\
         </div>\n",
        label = encode_text(data.label_or_name()),
        rows = data.textarea_rows(),
        required = required_attr(data),
        value = encode_text(&default_value),
    );
}

fn render_dropdown(data: &FieldData, html: &mut String) {
    let id = encode_double_quoted_attribute(data.name_text());
    let _ = write!(
        html,
        "<div class=\"form-group\">\n\
         <label for=\"{id}\">{label}</label>\n\
         <select id=\"{id}\" name=\"{id}\"{required}>\n\
         <option value=\"\">Select...</option>\n\
         </select>\n\
         </div>\n",
        label = encode_text(data.label_or_name()),
        required = required_attr(data),
    );
}

fn render_checkbox(data: &FieldData, html: &mut String) {
    let id = encode_double_quoted_attribute(data.name_text());
    let checked = if data.checked() { " checked" } else { "" };
    let _ = write!(
        html,
        "<div class=\"form-group checkbox-group\">\n\
         <label>\n\
         <input type=\"checkbox\" id=\"{id}\" name=\"{id}\"{required}{checked}>\n\
         {label}\n\
         </label>\n\
         </div>\n",
        required = required_attr(data),
        label = encode_text(data.label_or_name()),
    );
}

fn render_radio(data: &FieldData, html: &mut String) {
    let id = encode_double_quoted_attribute(data.name_text());
    let _ = write!(
        html,
        "<div class=\"form-group radio-group\">\n\
         <label>{label}</label>\n\
         <div>\n\
         <label>\n\
         <input type=\"radio\" name=\"{id}\"{required}> Option 1\n\
         </label>\n\
         </div>\n\
         </div>\n",
        label = encode_text(data.label_or_name()),
        required = required_attr(data),
    );
}

fn render_break(data: &FieldData, class: &str, html: &mut String) {
    let _ = write!(
        html,
        "<div class=\"{class}\">\n<h3>{title}</h3>\n</div>\n",
        title = encode_text(data.title_or_name()),
    );
}

fn render_container(data: &FieldData, class: &str, html: &mut String) {
    let _ = write!(
        html,
        "<div class=\"{class}\">\n<h4>{title}</h4>\n",
        title = encode_text(data.title_or_name()),
    );
    if let Some(fields) = &data.fields {
        render_fields(fields, html);
    }
    html.push_str("</div>\n");
}

fn render_capture(
    data: &FieldData,
    class: &str,
    accept: &str,
    fallback_label: &'static str,
    html: &mut String,
) {
    let id = encode_double_quoted_attribute(data.name_text());
    let _ = write!(
        html,
        "<div class=\"form-group {class}\">\n\
         <label for=\"{id}\">{label}</label>\n\
         <input type=\"file\" id=\"{id}\" name=\"{id}\" accept=\"{accept}\" capture=\"environment\"{required}>\n\
         </div>\n",
        label = encode_text(data.label_or(fallback_label)),
        required = required_attr(data),
    );
}

fn render_geolocation(data: &FieldData, html: &mut String) {
    let name = encode_double_quoted_attribute(data.name_text());
    let _ = write!(
        html,
        "<div class=\"form-group\">\n\
         <label>{label}</label>\n\
         <div>\n\
         <input type=\"text\" readonly placeholder=\"Latitude\" name=\"{name}_lat\">\n\
         <input type=\"text\" readonly placeholder=\"Longitude\" name=\"{name}_long\">\n\
         </div>\n\
         </div>\n",
        label = encode_text(data.label_or("Location")),
    );
}

fn required_attr(data: &FieldData) -> &'static str {
    if data.required {
        " required"
    } else {
        ""
    }
}

fn value_attr(data: &FieldData) -> String {
    match data.default_value_text() {
        Some(v) => format!(" value=\"{}\"", encode_double_quoted_attribute(&v)),
        None => String::new(),
    }
}
