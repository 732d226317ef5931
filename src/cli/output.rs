//! Output formatting for CLI commands.

use serde::{Deserialize, Serialize};

use crate::cli::args::{OutputFormat, PolarityArgs};
use crate::error::Result;

/// Result structure for training.
#[derive(Debug, Serialize, Deserialize)]
pub struct TrainResult {
    pub files_processed: usize,
    pub positive_total: u64,
    pub negative_total: u64,
    pub vocabulary_size: usize,
    pub cache_path: String,
}

/// Result structure for classification.
#[derive(Debug, Serialize, Deserialize)]
pub struct ClassifyResult {
    pub label: String,
    pub positive_score: f64,
    pub negative_score: f64,
}

/// Per-class statistics for a trained model.
#[derive(Debug, Serialize, Deserialize)]
pub struct ClassStats {
    pub total_tokens: u64,
    pub unique_tokens: usize,
    pub top_tokens: Vec<(String, u64)>,
}

/// Model statistics.
#[derive(Debug, Serialize, Deserialize)]
pub struct ModelStats {
    pub cache_path: String,
    pub vocabulary_size: usize,
    pub positive: ClassStats,
    pub negative: ClassStats,
}

/// Output a result in the specified format.
pub fn output_result<T: Serialize>(message: &str, result: &T, args: &PolarityArgs) -> Result<()> {
    match args.output_format {
        OutputFormat::Human => output_human(message, result, args),
        OutputFormat::Json => output_json(result, args),
    }
}

/// Output in human-readable format.
fn output_human<T: Serialize>(message: &str, result: &T, args: &PolarityArgs) -> Result<()> {
    if args.verbosity() > 0 {
        println!("{message}");
        println!();
    }

    let value = serde_json::to_value(result)?;
    print_value(&value, 0);
    Ok(())
}

/// Print a JSON value as indented key/value lines.
fn print_value(value: &serde_json::Value, indent: usize) {
    let spaces = "  ".repeat(indent);

    match value {
        serde_json::Value::Object(obj) => {
            for (key, val) in obj {
                match val {
                    serde_json::Value::Object(_) | serde_json::Value::Array(_) => {
                        println!("{spaces}{key}:");
                        print_value(val, indent + 1);
                    }
                    _ => {
                        let formatted = format_value(val);
                        println!("{spaces}{key}: {formatted}");
                    }
                }
            }
        }
        serde_json::Value::Array(arr) => {
            for item in arr {
                let formatted = format_value(item);
                println!("{spaces}- {formatted}");
            }
        }
        _ => {
            let formatted = format_value(value);
            println!("{spaces}{formatted}");
        }
    }
}

/// Output in JSON format.
fn output_json<T: Serialize>(result: &T, args: &PolarityArgs) -> Result<()> {
    let json = if args.pretty {
        serde_json::to_string_pretty(result)?
    } else {
        serde_json::to_string(result)?
    };

    println!("{json}");
    Ok(())
}

/// Format a JSON value for display.
fn format_value(value: &serde_json::Value) -> String {
    match value {
        serde_json::Value::String(s) => s.clone(),
        serde_json::Value::Number(n) => n.to_string(),
        serde_json::Value::Bool(b) => b.to_string(),
        serde_json::Value::Array(arr) => {
            let formatted_values = arr.iter().map(format_value).collect::<Vec<_>>().join(", ");
            format!("[{formatted_values}]")
        }
        serde_json::Value::Object(_) => "[object]".to_string(),
        serde_json::Value::Null => "null".to_string(),
    }
}
