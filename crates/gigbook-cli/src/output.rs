//! Result-line rendering
//!
//! Text output is one record per line; JSON output is a single array.

use gigbook_core::errors::{ExError, ExErrorKind};
use serde::Serialize;
use std::fmt::Display;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Format {
    Text,
    Json,
}

impl Format {
    pub fn from_json_flag(json: bool) -> Self {
        if json {
            Format::Json
        } else {
            Format::Text
        }
    }
}

/// Print a list of records
pub fn print_list<T, F>(format: Format, items: &[T], line: F) -> Result<(), ExError>
where
    T: Serialize,
    F: Fn(&T) -> String,
{
    match format {
        Format::Json => print_json(items)?,
        Format::Text => {
            for item in items {
                println!("{}", line(item));
            }
        }
    }
    Ok(())
}

/// Print a single optional value, `None` when absent
pub fn print_opt<T: Serialize + Display>(format: Format, value: Option<&T>) -> Result<(), ExError> {
    match format {
        Format::Json => print_json(&value)?,
        Format::Text => match value {
            Some(v) => println!("{}", v),
            None => println!("None"),
        },
    }
    Ok(())
}

/// Print any serializable value as JSON
pub fn print_json<T: Serialize + ?Sized>(value: &T) -> Result<(), ExError> {
    println!("{}", to_json(value)?);
    Ok(())
}

fn to_json<T: Serialize + ?Sized>(value: &T) -> Result<String, ExError> {
    serde_json::to_string_pretty(value).map_err(|e| {
        ExError::new(ExErrorKind::Serialization)
            .with_op("render_json")
            .with_message(e.to_string())
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_from_flag() {
        assert_eq!(Format::from_json_flag(true), Format::Json);
        assert_eq!(Format::from_json_flag(false), Format::Text);
    }

    #[test]
    fn test_to_json_option() {
        assert_eq!(to_json(&None::<String>).unwrap(), "null");
        assert_eq!(to_json(&Some("Metallica")).unwrap(), "\"Metallica\"");
    }
}
