//! Field schema registry tests

use formkit::schema::{
    self, StructuralKind, BASE_PROPERTIES, DATA_TYPES, DISPLAY_TYPES, FIELD_TYPE_KEYS,
};

#[test]
fn every_registered_type_includes_the_baseline_properties() {
    for key in FIELD_TYPE_KEYS {
        let def = schema::lookup(key).unwrap();
        let props = def.properties();
        for base in BASE_PROPERTIES {
            assert!(props.contains(&base), "{key} is missing property {base}");
        }
    }
}

#[test]
fn only_container_kinds_expose_a_fields_property() {
    for key in FIELD_TYPE_KEYS {
        let def = schema::lookup(key).unwrap();
        let has_fields = def.properties().contains(&"fields");
        match def.kind {
            StructuralKind::Simple => {
                assert!(!has_fields, "{key} is simple but lists fields")
            }
            _ => assert!(has_fields, "{key} is a container kind but lacks fields"),
        }
        assert_eq!(def.has_fields(), has_fields);
    }
}

#[test]
fn unknown_keys_are_absent_not_errors() {
    assert!(schema::lookup("unknown_widget").is_none());
    assert!(schema::lookup("textBox").is_none());
    assert!(schema::lookup("").is_none());
}

#[test]
fn vocabularies_are_closed() {
    assert_eq!(DATA_TYPES.len(), 8);
    assert!(DATA_TYPES.contains(&"datetime.date"));
    assert!(DATA_TYPES.contains(&"list:str"));

    assert!(DISPLAY_TYPES.contains(&"textbox.row-4"));
    assert!(DISPLAY_TYPES.contains(&"liveness.readout"));
    assert!(!DISPLAY_TYPES.contains(&"textarea"));
}

#[test]
fn display_and_default_data_types_follow_the_widget() {
    assert_eq!(
        schema::lookup("textbox").unwrap().default_data_type,
        Some("str")
    );
    assert_eq!(
        schema::lookup("file_upload").unwrap().default_data_type,
        Some("FILE")
    );
    assert_eq!(
        schema::lookup("date").unwrap().default_data_type,
        Some("datetime.date")
    );
    assert_eq!(schema::lookup("dropdown").unwrap().default_data_type, None);

    assert_eq!(schema::lookup("date").unwrap().display_type, "datebox");
    assert_eq!(
        schema::lookup("textarea_big").unwrap().display_type,
        "textbox.row-8"
    );
    assert_eq!(schema::lookup("group").unwrap().display_type, "groupbox");
}

#[test]
fn structural_kinds_cover_the_registry() {
    assert_eq!(
        schema::lookup("textbox").unwrap().kind,
        StructuralKind::Simple
    );
    assert_eq!(
        schema::lookup("card").unwrap().kind,
        StructuralKind::Compound
    );
    assert_eq!(schema::lookup("group").unwrap().kind, StructuralKind::Group);
    assert_eq!(
        schema::lookup("section_break").unwrap().kind,
        StructuralKind::Layout
    );
    assert_eq!(
        schema::lookup("column").unwrap().kind,
        StructuralKind::Layout
    );
}
