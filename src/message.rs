//! Turning caller values into message text.

use std::fmt::{self, Display, Write};

use serde::Serialize;

use crate::error::Result;

/// Text used when the message is absent.
pub const ABSENT: &str = "<none>";

/// Text used when a `Display` impl reports an error.
pub const UNFORMATTABLE: &str = "<unformattable>";

/// Renders through `Display`. Never fails.
pub fn to_text(message: &dyn Display) -> String {
    let mut text = String::new();
    match write!(text, "{message}") {
        Ok(()) => text,
        Err(_) => UNFORMATTABLE.to_string(),
    }
}

/// Renders a structured value as compact JSON.
pub fn to_json_text<T: Serialize + ?Sized>(value: &T) -> Result<String> {
    Ok(serde_json::to_string(value)?)
}

/// An optional message: prints the value, or [`ABSENT`] when there is none.
#[derive(Clone, Debug)]
pub struct OrAbsent<T>(pub Option<T>);

impl<T: Display> Display for OrAbsent<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.0 {
            Some(value) => value.fmt(f),
            None => f.write_str(ABSENT),
        }
    }
}
