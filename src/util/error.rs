/// Error type for pluscode-rs operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PlusCodeError {
    /// The string is not a syntactically valid Plus Code.
    InvalidCode(String),
    /// The code is valid but short; it needs a reference location to recover.
    NotFullCode(String),
    /// A value could not be serialized.
    Serialization(String),
}

impl std::fmt::Display for PlusCodeError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PlusCodeError::InvalidCode(code) => write!(f, "Invalid Plus Code: {:?}", code),
            PlusCodeError::NotFullCode(code) => {
                write!(f, "Not a full Plus Code: {:?} (recover it first)", code)
            }
            PlusCodeError::Serialization(msg) => write!(f, "Serialization error: {}", msg),
        }
    }
}

impl std::error::Error for PlusCodeError {}

impl From<serde_json::Error> for PlusCodeError {
    fn from(err: serde_json::Error) -> Self {
        PlusCodeError::Serialization(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display() {
        let err = PlusCodeError::InvalidCode("7FG49Q0+0".to_string());
        assert_eq!(err.to_string(), r#"Invalid Plus Code: "7FG49Q0+0""#);

        let err = PlusCodeError::NotFullCode("9QCJ+2VX".to_string());
        assert!(err.to_string().contains("recover"));
    }
}
