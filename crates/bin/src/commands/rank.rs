//! Rank command - looks a value up in a priority list.

use semisort::{
    Value,
    doc::Scalar,
    sort::{Rank, match_rank},
};

use crate::cli::RankArgs;
use crate::output::OutputFormat;

/// Parses a command-line argument as a JSON value, falling back to text.
///
/// `10` is a number and `true` a boolean, while `John Smith` stays text.
pub fn parse_value(raw: &str) -> Value {
    serde_json::from_str::<serde_json::Value>(raw)
        .map(Value::from)
        .unwrap_or_else(|_| Value::from(raw))
}

/// Parses a priority argument; anything that is not a flat value is text.
pub fn parse_priority(raw: &str) -> Scalar {
    Scalar::try_from(parse_value(raw)).unwrap_or_else(|_| Scalar::from(raw))
}

/// Run the rank command
pub fn run(args: &RankArgs, format: OutputFormat) -> Result<(), Box<dyn std::error::Error>> {
    let value = parse_value(&args.value);
    let priorities: Vec<Scalar> = args.priorities.iter().map(|p| parse_priority(p)).collect();
    let rank = match_rank(&value, &priorities, args.case_insensitive);

    match format {
        OutputFormat::Human => match rank {
            Rank::Found(index) => println!("{value}: rank {index} ({})", priorities[index]),
            Rank::NotFound => println!("{value}: not found"),
        },
        OutputFormat::Json => {
            let output = serde_json::json!({
                "value": value,
                "rank": rank.index(),
            });
            println!("{}", serde_json::to_string(&output)?);
        }
    }

    Ok(())
}
