//! CREATE TABLE generation.
//!
//! Output uses `\r\n` line separators. Each table clause starts with a
//! line break so consecutive clauses stay separated when concatenated
//! into one script.

use crate::{DEFAULT_SCHEMA, Error, Result, qualified_name};
use decree_schema::{Context, Field, RecordDef, SqlType, TableBinding};

/// Extension trait for [`Context`] to add SQL generation.
pub trait ContextCodegen {
    /// Generate DDL to create all bound tables.
    fn to_sql(&self) -> Result<String>;
}

impl ContextCodegen for Context {
    fn to_sql(&self) -> Result<String> {
        context_to_sql(self)
    }
}

/// Generate the DDL script for a context.
///
/// This is the single entry point callers consume: one `CREATE TABLE`
/// statement per binding, in registration order. A context with no
/// bindings yields the empty string. The first field without a column
/// mapping aborts the whole call; no partial script is salvaged.
pub fn generate_schema_sql(context: &Context) -> Result<String> {
    context_to_sql(context)
}

/// Concatenate the table clauses of all bindings, in order.
pub fn context_to_sql(context: &Context) -> Result<String> {
    let mut sql = String::new();

    for binding in context.bindings() {
        sql.push_str(&create_table_sql(binding)?);
    }

    Ok(sql)
}

/// Generate the CREATE TABLE statement for one binding.
pub fn create_table_sql(binding: &TableBinding) -> Result<String> {
    let record = &binding.record;
    if record.fields.is_empty() {
        return Err(Error::EmptyRecord {
            type_name: record.type_name.clone(),
        });
    }

    let mut sql = format!(
        "\r\nCREATE TABLE {} (\r\n",
        qualified_name(DEFAULT_SCHEMA, &binding.table_name)
    );

    let mut first = true;
    for field in &record.fields {
        if first {
            first = false;
        } else {
            sql.push_str(",\r\n");
        }
        sql.push_str(&column_sql(record, field)?);
    }

    sql.push_str("\r\n);");

    Ok(sql)
}

/// Generate the column clause for one field.
///
/// An `INT` column named `id` (any casing) is the inferred identity
/// primary key, starting at 1 and incrementing by 1. Text columns
/// never get the constraint.
fn column_sql(record: &RecordDef, field: &Field) -> Result<String> {
    let Some(sql_type) = field.ty.sql_type() else {
        return Err(Error::UnsupportedFieldType {
            type_name: field.ty.name().to_string(),
            column: field.name.clone(),
            record: record.type_name.clone(),
        });
    };

    let mut def = format!("{} {}", field.name, sql_type);

    if sql_type == SqlType::Int && field.name.eq_ignore_ascii_case("id") {
        def.push_str(" PRIMARY KEY IDENTITY (1, 1)");
    }

    Ok(def)
}
