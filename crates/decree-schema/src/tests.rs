use super::*;

#[test]
fn test_sql_type_display() {
    assert_eq!(SqlType::Int.to_string(), "INT");
    assert_eq!(SqlType::NVarCharMax.to_string(), "NVARCHAR(MAX)");
}

#[test]
fn test_field_type_mapping() {
    assert_eq!(FieldType::I32.sql_type(), Some(SqlType::Int));
    assert_eq!(FieldType::String.sql_type(), Some(SqlType::NVarCharMax));

    assert_eq!(FieldType::Bool.sql_type(), None);
    assert_eq!(FieldType::I16.sql_type(), None);
    assert_eq!(FieldType::I64.sql_type(), None);
    assert_eq!(FieldType::F32.sql_type(), None);
    assert_eq!(FieldType::F64.sql_type(), None);
}

#[test]
fn test_field_type_names() {
    assert_eq!(FieldType::F32.name(), "f32");
    assert_eq!(FieldType::I32.name(), "i32");
    assert_eq!(FieldType::String.name(), "String");
}

#[test]
fn test_record_def_keeps_field_order() {
    let record = RecordDef::new("Person")
        .field("Id", FieldType::I32)
        .field("Name", FieldType::String)
        .field("Alias", FieldType::String);

    let names: Vec<&str> = record.fields.iter().map(|f| f.name.as_str()).collect();
    assert_eq!(names, ["Id", "Name", "Alias"]);
}

#[test]
fn test_context_keeps_registration_order() {
    let context = Context::builder()
        .table("People", RecordDef::new("Person").field("Id", FieldType::I32))
        .table("Orders", RecordDef::new("Order").field("Id", FieldType::I32))
        .table("Widgets", RecordDef::new("Widget").field("Id", FieldType::I32))
        .build()
        .unwrap();

    let tables: Vec<&str> = context.bindings().map(|b| b.table_name.as_str()).collect();
    assert_eq!(tables, ["People", "Orders", "Widgets"]);
    assert_eq!(context.len(), 3);
}

#[test]
fn test_context_lookup_by_record_type() {
    let context = Context::builder()
        .table("People", RecordDef::new("Person").field("Id", FieldType::I32))
        .build()
        .unwrap();

    assert_eq!(context.get("Person").unwrap().table_name, "People");
    assert!(context.get("Order").is_none());
}

#[test]
fn test_duplicate_record_type_rejected() {
    let err = Context::builder()
        .table("People", RecordDef::new("Person").field("Id", FieldType::I32))
        .table("Employees", RecordDef::new("Person").field("Id", FieldType::I32))
        .build()
        .unwrap_err();

    assert_eq!(
        err,
        SchemaError::DuplicateRecordType {
            type_name: "Person".to_string(),
            existing: "People".to_string(),
            duplicate: "Employees".to_string(),
        }
    );
}

#[test]
fn test_duplicate_table_name_rejected() {
    let err = Context::builder()
        .table("People", RecordDef::new("Person").field("Id", FieldType::I32))
        .table("People", RecordDef::new("Order").field("Id", FieldType::I32))
        .build()
        .unwrap_err();

    assert_eq!(
        err,
        SchemaError::DuplicateTableName {
            table: "People".to_string(),
        }
    );
}

#[test]
fn test_empty_builder_is_empty_context() {
    let context = Context::builder().build().unwrap();
    assert!(context.is_empty());
    assert_eq!(context.bindings().count(), 0);
}
