//! Field schema registry for the form-definition dialect.
//!
//! A static lookup table from field-type key to its definition, plus the
//! closed vocabularies used to constrain suggested property values. All of
//! it is constant after process start; `lookup` has no error path because an
//! unrecognized key is a normal outcome (authors may be mid-typing a custom
//! or not-yet-known type).

/// Structural classification of a field type.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StructuralKind {
    /// Leaf value.
    Simple,
    /// Container with nested fields, non-repeating.
    Compound,
    /// Container with nested fields, semantically grouped.
    Group,
    /// Non-data-bearing structural break (section, tab, column).
    Layout,
}

/// Definition of a single field type.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldTypeDef {
    pub kind: StructuralKind,
    /// Data type assumed when the author does not set one.
    pub default_data_type: Option<&'static str>,
    /// Widget tag associated with this type.
    pub display_type: &'static str,
}

impl FieldTypeDef {
    /// Container kinds carry a nested `fields` list; simple kinds never do.
    pub fn has_fields(&self) -> bool {
        !matches!(self.kind, StructuralKind::Simple)
    }

    /// Ordered property names applicable to this type.
    pub fn properties(&self) -> Vec<&'static str> {
        let mut props: Vec<&'static str> = BASE_PROPERTIES.to_vec();
        if self.has_fields() {
            props.push("fields");
        }
        props
    }
}

/// Properties shared by every field type, in suggestion order.
pub const BASE_PROPERTIES: [&str; 17] = [
    "name",
    "alias",
    "displayType",
    "dataType",
    "defaultValue",
    "required",
    "description",
    "title",
    "notation",
    "internalOnly",
    "sequence",
    "hidden",
    "editable",
    "parameters",
    "meta",
    "verifyHandler",
    "fileName",
];

/// Properties whose suggested value is a true/false choice.
pub const BOOLEAN_PROPERTIES: [&str; 4] = ["required", "internalOnly", "hidden", "editable"];

/// Widget tags accepted by the `displayType` property.
pub const DISPLAY_TYPES: [&str; 20] = [
    "tab_break",
    "section_break",
    "column_break",
    "textbox",
    "textbox.row-4",
    "textbox.row-8",
    "fileoption",
    "display_field",
    "hidden",
    "dropdown",
    "checkbox",
    "radiobutton",
    "info_pane",
    "groupbox",
    "card",
    "imgcapture",
    "vidcapture",
    "liveness.readout",
    "geoloc",
    "datebox",
];

/// Value-kind tags accepted by the `dataType` property.
pub const DATA_TYPES: [&str; 8] = [
    "PHONE",
    "EMAIL",
    "int",
    "float",
    "str",
    "FILE",
    "datetime.date",
    "list:str",
];

/// Every field-type key known to the registry.
pub const FIELD_TYPE_KEYS: [&str; 20] = [
    "textbox",
    "textarea_small",
    "textarea_big",
    "file_upload",
    "text",
    "date",
    "dropdown",
    "checkbox",
    "radio",
    "info_pane",
    "group",
    "card",
    "photo_capture",
    "video_capture",
    "captcha",
    "geolocation",
    "digilocker",
    "section_break",
    "tab_break",
    "column",
];

/// Look up a field type by key. `None` for anything outside the registry.
pub fn lookup(type_key: &str) -> Option<FieldTypeDef> {
    use StructuralKind::{Compound, Group, Layout, Simple};

    let def = match type_key {
        "textbox" => FieldTypeDef {
            kind: Simple,
            default_data_type: Some("str"),
            display_type: "textbox",
        },
        "textarea_small" => FieldTypeDef {
            kind: Simple,
            default_data_type: Some("str"),
            display_type: "textbox.row-4",
        },
        "textarea_big" => FieldTypeDef {
            kind: Simple,
            default_data_type: Some("str"),
            display_type: "textbox.row-8",
        },
        "file_upload" => FieldTypeDef {
            kind: Simple,
            default_data_type: Some("FILE"),
            display_type: "fileoption",
        },
        "text" => FieldTypeDef {
            kind: Simple,
            default_data_type: Some("str"),
            display_type: "display_field",
        },
        "date" => FieldTypeDef {
            kind: Simple,
            default_data_type: Some("datetime.date"),
            display_type: "datebox",
        },
        "dropdown" => FieldTypeDef {
            kind: Simple,
            default_data_type: None,
            display_type: "dropdown",
        },
        "checkbox" => FieldTypeDef {
            kind: Simple,
            default_data_type: None,
            display_type: "checkbox",
        },
        "radio" => FieldTypeDef {
            kind: Simple,
            default_data_type: None,
            display_type: "radiobutton",
        },
        "info_pane" => FieldTypeDef {
            kind: Compound,
            default_data_type: None,
            display_type: "info_pane",
        },
        "group" => FieldTypeDef {
            kind: Group,
            default_data_type: None,
            display_type: "groupbox",
        },
        "card" => FieldTypeDef {
            kind: Compound,
            default_data_type: None,
            display_type: "card",
        },
        "photo_capture" => FieldTypeDef {
            kind: Simple,
            default_data_type: Some("FILE"),
            display_type: "imgcapture",
        },
        "video_capture" => FieldTypeDef {
            kind: Simple,
            default_data_type: Some("FILE"),
            display_type: "vidcapture",
        },
        "captcha" => FieldTypeDef {
            kind: Simple,
            default_data_type: Some("list:str"),
            display_type: "liveness.readout",
        },
        "geolocation" => FieldTypeDef {
            kind: Compound,
            default_data_type: Some("str"),
            display_type: "geoloc",
        },
        "digilocker" => FieldTypeDef {
            kind: Simple,
            default_data_type: Some("str"),
            display_type: "text",
        },
        "section_break" => FieldTypeDef {
            kind: Layout,
            default_data_type: Some("str"),
            display_type: "section_break",
        },
        "tab_break" => FieldTypeDef {
            kind: Layout,
            default_data_type: Some("str"),
            display_type: "tab_break",
        },
        "column" => FieldTypeDef {
            kind: Layout,
            default_data_type: Some("str"),
            display_type: "column_break",
        },
        _ => return None,
    };

    Some(def)
}
