//! Sort command - sorts the documents of a JSON request.

use std::{io, path::Path};

use semisort::{SortRequest, Value, sort::SortOptions};

use crate::cli::SortArgs;
use crate::output::{OutputFormat, document_table, print_table};

/// Run the sort command
pub fn run(args: &SortArgs, format: OutputFormat) -> Result<(), Box<dyn std::error::Error>> {
    let request = match args.file.as_deref() {
        Some(path) if path != Path::new("-") => SortRequest::from_path(path)?,
        _ => {
            tracing::debug!("Reading sort request from stdin");
            SortRequest::from_reader(io::stdin().lock())?
        }
    };

    let config = args.apply(request.options);
    let mut options = SortOptions::<Value>::from_config(config);
    if args.nested_fields {
        options = options.nested_fields();
    }

    let sorted = request.execute_with(&options)?;
    tracing::info!(documents = sorted.len(), "Sorted request");

    match format {
        OutputFormat::Human => {
            if sorted.is_empty() {
                println!("No documents.");
                return Ok(());
            }
            let (headers, rows) = document_table(&sorted);
            print_table(&headers, &rows);
        }
        OutputFormat::Json => {
            println!("{}", serde_json::to_string(&sorted)?);
        }
    }

    Ok(())
}
