#[derive(Debug)]
pub enum Error {
    BadPrefix { pattern: String, error: regex::Error },
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::BadPrefix { pattern, error } => {
                write!(f, "invalid prefix pattern '{}': {}", pattern, error)
            }
        }
    }
}

impl std::error::Error for Error {}
