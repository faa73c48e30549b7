//! Generate command - prints a random request of newspaper documents.

use rand::{SeedableRng, rngs::StdRng};
use semisort::{
    SortRequest, Value,
    generate::{newspaper_criteria, random_documents, random_documents_with},
};

use crate::cli::GenerateArgs;
use crate::output::OutputFormat;

/// Run the generate command
///
/// The request is always JSON so it can be piped into `semisort sort`;
/// human format only pretty-prints it.
pub fn run(args: &GenerateArgs, format: OutputFormat) -> Result<(), Box<dyn std::error::Error>> {
    let documents = match args.seed {
        Some(seed) => random_documents_with(&mut StdRng::seed_from_u64(seed), args.count),
        None => random_documents(args.count),
    };
    tracing::debug!(count = documents.len(), seed = ?args.seed, "Generated documents");

    let request = SortRequest {
        documents: Value::from(documents.into_iter().map(Value::from).collect::<Vec<_>>()),
        criteria: serde_json::to_value(newspaper_criteria())?,
        ..SortRequest::default()
    };

    match format {
        OutputFormat::Human => println!("{}", serde_json::to_string_pretty(&request)?),
        OutputFormat::Json => println!("{}", serde_json::to_string(&request)?),
    }

    Ok(())
}
