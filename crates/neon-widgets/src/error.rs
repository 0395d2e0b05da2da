#![forbid(unsafe_code)]

//! Errors raised when constructing widgets from invalid input.

use core::fmt;

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum WidgetError {
    /// A text area was limited to zero lines.
    ZeroMaxLines,
    /// A progress value below zero.
    NegativeProgress(f64),
    /// A progress value above one.
    ProgressAboveOne(f64),
    /// A NaN progress value.
    ProgressNotANumber,
}

impl fmt::Display for WidgetError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ZeroMaxLines => {
                f.write_str("max_number_of_lines must be a positive integer and not 0!")
            }
            Self::NegativeProgress(p) => {
                write!(f, "progress cannot be negative, but {p} was provided!")
            }
            Self::ProgressAboveOne(p) => {
                write!(f, "progress cannot be greater than 1, but {p} was provided!")
            }
            Self::ProgressNotANumber => f.write_str("progress must be a number"),
        }
    }
}

impl std::error::Error for WidgetError {}
