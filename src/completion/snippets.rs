//! Hand-authored insertion templates.
//!
//! Bodies use LSP snippet syntax: numbered tab-stops (`${1:placeholder}`)
//! and single-choice enumerations (`${1|a,b|}`).

/// Top-level scaffold offered at document root.
pub const FORM_SCAFFOLD: &str = "form:\n  name: \"${1:formName}\"\n  fields:";

/// A named field-insertion template.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldSnippet {
    pub label: &'static str,
    pub body: &'static str,
}

/// Catalog of field-insertion snippets, in authored order.
pub const FIELD_SNIPPETS: [FieldSnippet; 16] = [
    FieldSnippet {
        label: "textbox",
        body: "- textbox:\n    name: \"${1:fieldName}\"\n    displayType: \"textbox\"\n    dataType: \"str\"\n    label: \"${2:label}\"\n    required: ${3|true,false|}",
    },
    FieldSnippet {
        label: "textarea",
        body: "- textarea:\n    name: \"${1:fieldName}\"\n    displayType: \"textbox.row-4\"\n    dataType: \"str\"\n    label: \"${2:label}\"\n    required: ${3|true,false|}",
    },
    FieldSnippet {
        label: "date",
        body: "- date:\n    name: \"${1:fieldName}\"\n    displayType: \"datebox\"\n    dataType: \"datetime.date\"\n    label: \"${2:label}\"\n    required: ${3|true,false|}",
    },
    FieldSnippet {
        label: "file",
        body: "- file:\n    name: \"${1:fieldName}\"\n    displayType: \"fileoption\"\n    dataType: \"FILE\"\n    label: \"${2:label}\"\n    required: ${3|true,false|}",
    },
    FieldSnippet {
        label: "dropdown",
        body: "- dropdown:\n    name: \"${1:fieldName}\"\n    displayType: \"dropdown\"\n    dataType: \"${2|str,int,float|}\"\n    label: \"${3:label}\"\n    required: ${4|true,false|}",
    },
    FieldSnippet {
        label: "checkbox",
        body: "- checkbox:\n    name: \"${1:fieldName}\"\n    displayType: \"checkbox\"\n    dataType: \"${2|str,int,bool|}\"\n    label: \"${3:label}\"\n    required: ${4|true,false|}",
    },
    FieldSnippet {
        label: "radio",
        body: "- radio:\n    name: \"${1:fieldName}\"\n    displayType: \"radiobutton\"\n    dataType: \"${2|str,int|}\"\n    label: \"${3:label}\"\n    required: ${4|true,false|}",
    },
    FieldSnippet {
        label: "section",
        body: "- section_break:\n    name: \"${1:sectionName}\"\n    displayType: \"section_break\"\n    title: \"${2:Section Title}\"",
    },
    FieldSnippet {
        label: "tab",
        body: "- tab_break:\n    name: \"${1:tabName}\"\n    displayType: \"tab_break\"\n    title: \"${2:Tab Title}\"",
    },
    FieldSnippet {
        label: "column",
        body: "- column:\n    name: \"${1:columnName}\"\n    displayType: \"column_break\"\n    fields:\n      - ",
    },
    FieldSnippet {
        label: "card",
        body: "- card:\n    name: \"${1:cardName}\"\n    displayType: \"card\"\n    title: \"${2:Card Title}\"\n    fields:\n      - ",
    },
    FieldSnippet {
        label: "group",
        body: "- group:\n    name: \"${1:groupName}\"\n    displayType: \"groupbox\"\n    title: \"${2:Group Title}\"\n    fields:\n      - ",
    },
    FieldSnippet {
        label: "photo",
        body: "- photo_capture:\n    name: \"${1:photoField}\"\n    displayType: \"imgcapture\"\n    dataType: \"FILE\"\n    label: \"${2:Take Photo}\"\n    required: ${3|true,false|}",
    },
    FieldSnippet {
        label: "video",
        body: "- video_capture:\n    name: \"${1:videoField}\"\n    displayType: \"vidcapture\"\n    dataType: \"FILE\"\n    label: \"${2:Record Video}\"\n    required: ${3|true,false|}",
    },
    FieldSnippet {
        label: "captcha",
        body: "- captcha:\n    name: \"${1:captchaField}\"\n    displayType: \"liveness.readout\"\n    dataType: \"list:str\"\n    label: \"${2:Verify Captcha}\"\n    required: true",
    },
    // Geolocation nests two child text fields inline rather than relying on
    // schema-driven generation.
    FieldSnippet {
        label: "geolocation",
        body: "- geolocation:\n    name: \"${1:locationField}\"\n    displayType: \"geoloc\"\n    dataType: \"str\"\n    label: \"${2:Location}\"\n    fields:\n      - text:\n          name: \"lat\"\n      - text:\n          name: \"long\"",
    },
];
