use std::fmt::Display;

#[derive(Debug)]
pub enum TodoError {
    /// The service answered with an error status; carries the message from
    /// its `{"error": ...}` body.
    Api { status: u16, message: String },
    HttpError(String),
}

impl Display for TodoError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Api { status, message } => {
                write!(f, "Api error ({}): {}", status, message)
            }
            Self::HttpError(e) => {
                write!(f, "{}", e)
            }
        }
    }
}

impl std::error::Error for TodoError {}

impl From<reqwest::Error> for TodoError {
    fn from(e: reqwest::Error) -> Self {
        TodoError::HttpError(e.to_string())
    }
}

#[cfg(test)]
mod errors_test {
    use super::TodoError;

    #[test]
    fn test_api_error_display() {
        let err = TodoError::Api {
            status: 404,
            message: String::from("Todo Not Found"),
        };

        assert_eq!(err.to_string(), "Api error (404): Todo Not Found");
    }
}
