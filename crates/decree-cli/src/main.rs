//! Demo entry point: builds the sample context and prints its DDL
//! script to stdout.

use decree::{Context, FieldType, RecordDef, generate_schema_sql};
use tracing::debug;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    if let Err(e) = run() {
        eprintln!("decree: {e}");
        std::process::exit(1);
    }
}

fn run() -> Result<(), Box<dyn std::error::Error>> {
    let context = Context::builder()
        .table(
            "People",
            RecordDef::new("Person")
                .field("Id", FieldType::I32)
                .field("Name", FieldType::String),
        )
        .build()?;

    debug!(tables = context.len(), "assembled context");

    let sql = generate_schema_sql(&context)?;
    println!("{sql}");

    Ok(())
}
