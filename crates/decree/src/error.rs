use thiserror::Error;

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum Error {
    /// A field's declared type has no column mapping.
    ///
    /// Fatal to the whole generation call: no partial script is
    /// returned.
    #[error("unsupported type '{type_name}' for column '{column}' in record '{record}'")]
    UnsupportedFieldType {
        type_name: String,
        column: String,
        record: String,
    },

    /// A record with no fields would emit an empty, malformed column
    /// list, so it is rejected up front.
    #[error("record type '{type_name}' has no fields to turn into columns")]
    EmptyRecord { type_name: String },
}
