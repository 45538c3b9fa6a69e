//! Preview renderer tests

use formkit::preview::render_preview;

#[test]
fn renders_a_labeled_required_textbox() {
    let doc = r#"
form:
  name: "Test"
  fields:
    - textbox:
        name: "x"
        label: "X"
        required: true
"#;
    let html = render_preview(doc);

    assert!(html.contains("<h2>Test</h2>"));
    assert!(html.contains(r#"<label for="x">X</label>"#));
    assert!(html.contains(r#"<input type="text" id="x" name="x" required>"#));
}

#[test]
fn form_name_defaults_and_label_falls_back_to_name() {
    let doc = "form:\n  fields:\n    - textbox:\n        name: \"age\"\n";
    let html = render_preview(doc);

    assert!(html.contains("<h2>Form Preview</h2>"));
    assert!(html.contains(r#"<label for="age">age</label>"#));
    assert!(html.contains(r#"<input type="text" id="age" name="age">"#));
}

#[test]
fn default_value_becomes_a_value_attribute() {
    let doc = "form:\n  fields:\n    - textbox:\n        name: \"city\"\n        defaultValue: \"Geneva\"\n";
    let html = render_preview(doc);
    assert!(html.contains(r#"<input type="text" id="city" name="city" value="Geneva">"#));
}

#[test]
fn invalid_yaml_renders_an_error_panel() {
    let html = render_preview("form: [unclosed");

    assert!(html.starts_with(r#"<div class="error">Invalid YAML: "#));
    assert!(html.contains("Invalid YAML"));
    // The parse error itself is carried through.
    assert!(html.len() > r#"<div class="error">Invalid YAML: </div>"#.len());
}

#[test]
fn empty_document_renders_the_bare_shell() {
    let html = render_preview("");

    assert!(html.contains("<form>"));
    assert!(!html.contains("<h2>"));
    assert!(!html.contains("Invalid YAML"));
}

#[test]
fn card_embeds_its_nested_fields_in_document_order() {
    let doc = r#"
form:
  name: "Nested"
  fields:
    - card:
        name: "c"
        title: "Card Title"
        fields:
          - textbox:
              name: "inner"
          - date:
              name: "d"
"#;
    let html = render_preview(doc);

    let card = html.find(r#"<div class="card">"#).unwrap();
    let heading = html.find("<h4>Card Title</h4>").unwrap();
    let inner = html.find(r#"id="inner""#).unwrap();
    let date = html.find(r#"<input type="date" id="d""#).unwrap();

    assert!(card < heading);
    assert!(heading < inner);
    assert!(inner < date);
}

#[test]
fn group_wraps_nested_fields() {
    let doc = r#"
form:
  fields:
    - group:
        name: "g"
        title: "Contact"
        fields:
          - textbox:
              name: "phone"
"#;
    let html = render_preview(doc);

    let group = html.find(r#"<div class="group">"#).unwrap();
    let heading = html.find("<h4>Contact</h4>").unwrap();
    let phone = html.find(r#"id="phone""#).unwrap();

    assert!(group < heading);
    assert!(heading < phone);
}

#[test]
fn unknown_tags_are_skipped_without_aborting_siblings() {
    let doc = r#"
form:
  fields:
    - unknown_widget:
        name: "y"
    - textbox:
        name: "x"
"#;
    let html = render_preview(doc);

    assert!(!html.contains(r#"id="y""#));
    assert!(html.contains(r#"<input type="text" id="x" name="x">"#));
}

#[test]
fn markup_significant_values_are_escaped() {
    let doc = r#"
form:
  name: "A & B"
  fields:
    - textbox:
        name: "x"
        label: "<script>alert(1)</script>"
        defaultValue: "say \"hi\""
"#;
    let html = render_preview(doc);

    assert!(!html.contains("<script>alert"));
    assert!(html.contains("&lt;script&gt;"));
    assert!(html.contains("A &amp; B"));
    // The quoted default value cannot break out of its attribute.
    assert!(!html.contains(r#"value="say "hi"""#));
}

#[test]
fn checkbox_checks_only_the_literal_string_true() {
    let doc = "form:\n  fields:\n    - checkbox:\n        name: \"agree\"\n        label: \"Agree\"\n        defaultValue: \"true\"\n";
    let html = render_preview(doc);
    assert!(html.contains(r#"<input type="checkbox" id="agree" name="agree" checked>"#));

    let doc = "form:\n  fields:\n    - checkbox:\n        name: \"agree\"\n        defaultValue: true\n";
    let html = render_preview(doc);
    assert!(html.contains(r#"<input type="checkbox" id="agree" name="agree">"#));
}

#[test]
fn textarea_rows_follow_the_display_type() {
    let doc = "form:\n  fields:\n    - textarea:\n        name: \"notes\"\n        displayType: \"textbox.row-8\"\n";
    let html = render_preview(doc);
    assert!(html.contains(r#"rows="8""#));

    let doc = "form:\n  fields:\n    - textarea:\n        name: \"notes\"\n";
    let html = render_preview(doc);
    assert!(html.contains(r#"rows="4""#));
}

#[test]
fn dropdown_renders_a_select_with_placeholder_option() {
    let doc = "form:\n  fields:\n    - dropdown:\n        name: \"country\"\n        required: true\n";
    let html = render_preview(doc);

    assert!(html.contains(r#"<select id="country" name="country" required>"#));
    assert!(html.contains(r#"<option value="">Select...</option>"#));
}

#[test]
fn layout_breaks_render_headings() {
    let doc = "form:\n  fields:\n    - section_break:\n        name: \"s1\"\n        title: \"Part One\"\n    - tab_break:\n        name: \"t1\"\n";
    let html = render_preview(doc);

    assert!(html.contains(r#"<div class="section-break">"#));
    assert!(html.contains("<h3>Part One</h3>"));
    assert!(html.contains(r#"<div class="tab-break">"#));
    assert!(html.contains("<h3>t1</h3>"));
}

#[test]
fn capture_fields_render_file_inputs_with_fallback_labels() {
    let doc = "form:\n  fields:\n    - photo_capture:\n        name: \"selfie\"\n        required: true\n    - video_capture:\n        name: \"intro\"\n";
    let html = render_preview(doc);

    assert!(html.contains(r#"<div class="form-group photo-capture">"#));
    assert!(html.contains("Take Photo"));
    assert!(html.contains(
        r#"<input type="file" id="selfie" name="selfie" accept="image/*" capture="environment" required>"#
    ));
    assert!(html.contains(r#"<div class="form-group video-capture">"#));
    assert!(html.contains("Record Video"));
}

#[test]
fn geolocation_renders_paired_readonly_inputs() {
    let doc = "form:\n  fields:\n    - geolocation:\n        name: \"loc\"\n";
    let html = render_preview(doc);

    assert!(html.contains("<label>Location</label>"));
    assert!(html.contains(r#"<input type="text" readonly placeholder="Latitude" name="loc_lat">"#));
    assert!(
        html.contains(r#"<input type="text" readonly placeholder="Longitude" name="loc_long">"#)
    );
}

#[test]
fn output_is_a_self_contained_page() {
    let html = render_preview("form:\n  name: \"Shell\"\n");

    assert!(html.starts_with("<!DOCTYPE html>"));
    assert!(html.contains("<style>"));
    assert!(html.contains("</html>"));
    assert!(!html.contains("<script"));
    assert!(!html.contains("http://"));
    assert!(!html.contains("https://"));
}
