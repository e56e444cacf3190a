use std::fmt;

#[derive(Debug)]
pub enum ClassifyError {
    /// TOML parse / deserialization error in the override table.
    OverrideParse(String),
    /// Override table validation error (empty name, etc.).
    OverrideValidation(String),
    /// CSV read error in the input data.
    Csv(String),
}

impl fmt::Display for ClassifyError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::OverrideParse(msg) => write!(f, "override table parse error: {msg}"),
            Self::OverrideValidation(msg) => {
                write!(f, "override table validation error: {msg}")
            }
            Self::Csv(msg) => write!(f, "CSV error: {msg}"),
        }
    }
}

impl std::error::Error for ClassifyError {}
