//! T-SQL DDL generation from a declarative table registry.
//!
//! Callers describe their tables with `decree-schema`'s [`Context`]
//! builder, then ask this crate for the `CREATE TABLE` script. The
//! whole translation is a pure function from context to string: no
//! I/O, no shared state, safe to run concurrently from any number of
//! callers.
//!
//! # Example
//!
//! ```
//! use decree::{Context, FieldType, RecordDef, generate_schema_sql};
//!
//! let context = Context::builder()
//!     .table(
//!         "People",
//!         RecordDef::new("Person")
//!             .field("Id", FieldType::I32)
//!             .field("Name", FieldType::String),
//!     )
//!     .build()?;
//!
//! let sql = generate_schema_sql(&context)?;
//! assert!(sql.contains("CREATE TABLE [dbo].[People] ("));
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

mod ddl;
mod error;

pub use ddl::{ContextCodegen, context_to_sql, create_table_sql, generate_schema_sql};
pub use error::Error;

// Re-export the schema model for convenience
pub use decree_schema::{
    Context, ContextBuilder, Field, FieldType, RecordDef, SchemaError, SqlType, TableBinding,
};

/// Result type for decree operations.
pub type Result<T> = std::result::Result<T, Error>;

/// The schema every generated table is qualified with.
pub const DEFAULT_SCHEMA: &str = "dbo";

/// A T-SQL identifier wrapper.
///
/// Display writes the value bracket-quoted, doubling any embedded `]`.
///
/// # Example
/// ```
/// use decree::Ident;
/// assert_eq!(format!("{}", Ident("People")), "[People]");
/// assert_eq!(format!("{}", Ident("odd]name")), "[odd]]name]");
/// ```
pub struct Ident<T: AsRef<str>>(pub T);

impl<T: AsRef<str>> std::fmt::Display for Ident<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[")?;
        for c in self.0.as_ref().chars() {
            if c == ']' {
                write!(f, "]]")?;
            } else {
                write!(f, "{}", c)?;
            }
        }
        write!(f, "]")
    }
}

/// Quote a T-SQL identifier.
///
/// Always quotes identifiers to avoid issues with reserved keywords
/// like `user`, `order`, `table`, `group`, etc.
pub fn quote_ident(name: &str) -> String {
    format!("{}", Ident(name))
}

/// Qualify a table name with a schema.
///
/// # Example
/// ```
/// assert_eq!(decree::qualified_name("dbo", "People"), "[dbo].[People]");
/// ```
pub fn qualified_name(schema: &str, name: &str) -> String {
    format!("{}.{}", Ident(schema), Ident(name))
}
