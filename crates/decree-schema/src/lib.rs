//! Schema model for decree.
//!
//! This crate contains the declarative table registry that `decree`
//! (DDL generation) consumes: the column types the dialect can emit,
//! field and record descriptors, and the [`Context`] that binds record
//! types to table names.
//!
//! ## Naming Convention
//!
//! **Table names use the container's plural form** (e.g., `People`,
//! `Orders`): a table binding reads as "the `People` table holds
//! `Person` records". Record type names stay singular.

use indexmap::{IndexMap, IndexSet};
use std::fmt;
use thiserror::Error;

/// T-SQL column types decree knows how to emit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SqlType {
    /// INT (4 bytes)
    Int,
    /// NVARCHAR(MAX) (unbounded variable-length text)
    NVarCharMax,
}

impl fmt::Display for SqlType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SqlType::Int => write!(f, "INT"),
            SqlType::NVarCharMax => write!(f, "NVARCHAR(MAX)"),
        }
    }
}

/// Scalar types a record field may declare.
///
/// Deliberately wider than what maps to a column type: the mapping in
/// [`FieldType::sql_type`] is the single place that decides which field
/// types are supported, and it returns `None` for the rest so callers
/// choose how to treat an unsupported field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldType {
    Bool,
    I16,
    I32,
    I64,
    F32,
    F64,
    String,
}

impl FieldType {
    /// Map this field type to a T-SQL column type.
    ///
    /// Only `I32` and `String` have a mapping.
    pub fn sql_type(&self) -> Option<SqlType> {
        match self {
            FieldType::I32 => Some(SqlType::Int),
            FieldType::String => Some(SqlType::NVarCharMax),
            FieldType::Bool
            | FieldType::I16
            | FieldType::I64
            | FieldType::F32
            | FieldType::F64 => None,
        }
    }

    /// The Rust spelling of this type, used in error messages.
    pub fn name(&self) -> &'static str {
        match self {
            FieldType::Bool => "bool",
            FieldType::I16 => "i16",
            FieldType::I32 => "i32",
            FieldType::I64 => "i64",
            FieldType::F32 => "f32",
            FieldType::F64 => "f64",
            FieldType::String => "String",
        }
    }
}

/// A field of a record type: name plus declared scalar type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Field {
    /// Field name, emitted verbatim as the column name
    pub name: String,
    /// Declared scalar type
    pub ty: FieldType,
}

/// A record type whose fields become the columns of a table.
///
/// Field order is declaration order and is preserved in the generated
/// column list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordDef {
    /// Record type name, the uniqueness key within a [`Context`]
    pub type_name: String,
    /// Fields in declaration order
    pub fields: Vec<Field>,
}

impl RecordDef {
    /// Create a record definition with no fields.
    pub fn new(type_name: impl Into<String>) -> Self {
        Self {
            type_name: type_name.into(),
            fields: Vec::new(),
        }
    }

    /// Append a field, keeping declaration order.
    pub fn field(mut self, name: impl Into<String>, ty: FieldType) -> Self {
        self.fields.push(Field {
            name: name.into(),
            ty,
        });
        self
    }
}

/// A (record type, table name) pair registered on a context.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableBinding {
    /// The record definition whose fields become columns
    pub record: RecordDef,
    /// The table the record is bound to
    pub table_name: String,
}

/// The context descriptor: the root object describing which record
/// types become tables.
///
/// Bindings are keyed by record type name and iterate in registration
/// order.
#[derive(Debug, Clone, Default)]
pub struct Context {
    bindings: IndexMap<String, TableBinding>,
}

impl Context {
    /// Start building a context.
    pub fn builder() -> ContextBuilder {
        ContextBuilder::default()
    }

    /// Get a binding by record type name.
    pub fn get(&self, type_name: &str) -> Option<&TableBinding> {
        self.bindings.get(type_name)
    }

    /// Iterate over all bindings in registration order.
    pub fn bindings(&self) -> impl Iterator<Item = &TableBinding> {
        self.bindings.values()
    }

    /// Number of registered bindings.
    pub fn len(&self) -> usize {
        self.bindings.len()
    }

    /// Whether the context has no bindings.
    pub fn is_empty(&self) -> bool {
        self.bindings.is_empty()
    }
}

/// Builder for [`Context`].
///
/// Bindings are kept in registration order. [`ContextBuilder::build`]
/// rejects a record type or table name that is bound twice, instead of
/// letting a map keyed by type drop the earlier binding silently.
#[derive(Debug, Default)]
pub struct ContextBuilder {
    bindings: Vec<TableBinding>,
}

impl ContextBuilder {
    /// Bind a record definition to a table name.
    pub fn table(mut self, table_name: impl Into<String>, record: RecordDef) -> Self {
        self.bindings.push(TableBinding {
            record,
            table_name: table_name.into(),
        });
        self
    }

    /// Validate uniqueness and assemble the context.
    pub fn build(self) -> Result<Context, SchemaError> {
        let mut bindings: IndexMap<String, TableBinding> =
            IndexMap::with_capacity(self.bindings.len());
        let mut table_names: IndexSet<String> = IndexSet::with_capacity(self.bindings.len());

        for binding in self.bindings {
            if !table_names.insert(binding.table_name.clone()) {
                return Err(SchemaError::DuplicateTableName {
                    table: binding.table_name,
                });
            }

            if let Some(existing) = bindings.get(&binding.record.type_name) {
                return Err(SchemaError::DuplicateRecordType {
                    type_name: binding.record.type_name.clone(),
                    existing: existing.table_name.clone(),
                    duplicate: binding.table_name,
                });
            }

            bindings.insert(binding.record.type_name.clone(), binding);
        }

        Ok(Context { bindings })
    }
}

/// Errors raised while assembling a [`Context`].
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum SchemaError {
    #[error(
        "record type '{type_name}' is already bound to table '{existing}', cannot bind it to '{duplicate}'"
    )]
    DuplicateRecordType {
        type_name: String,
        existing: String,
        duplicate: String,
    },

    #[error("table name '{table}' is bound more than once")]
    DuplicateTableName { table: String },
}

#[cfg(test)]
mod tests;
