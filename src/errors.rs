use std::fmt;

#[derive(Debug, Clone)]
pub enum TinylinkError {
    /// Transport-level failure: the backend never produced a response.
    Network(String),
    /// The backend rejected a create because the code is taken (409).
    Conflict(String),
    /// The backend knows no link under the requested code (404).
    NotFound(String),
    /// Any other non-2xx response or an undecodable body.
    Request(String),
    Config(String),
}

impl TinylinkError {
    pub fn code(&self) -> &'static str {
        match self {
            TinylinkError::Network(_) => "E001",
            TinylinkError::Conflict(_) => "E002",
            TinylinkError::NotFound(_) => "E003",
            TinylinkError::Request(_) => "E004",
            TinylinkError::Config(_) => "E005",
        }
    }

    pub fn error_type(&self) -> &'static str {
        match self {
            TinylinkError::Network(_) => "Network Error",
            TinylinkError::Conflict(_) => "Code Conflict",
            TinylinkError::NotFound(_) => "Not Found",
            TinylinkError::Request(_) => "Request Failed",
            TinylinkError::Config(_) => "Configuration Error",
        }
    }

    pub fn message(&self) -> &str {
        match self {
            TinylinkError::Network(msg) => msg,
            TinylinkError::Conflict(msg) => msg,
            TinylinkError::NotFound(msg) => msg,
            TinylinkError::Request(msg) => msg,
            TinylinkError::Config(msg) => msg,
        }
    }

    /// One-line rendering for the status bar and logs.
    pub fn format_simple(&self) -> String {
        format!("{}: {}", self.error_type(), self.message())
    }
}

impl fmt::Display for TinylinkError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.format_simple())
    }
}

impl std::error::Error for TinylinkError {}

impl TinylinkError {
    pub fn network<T: Into<String>>(msg: T) -> Self {
        TinylinkError::Network(msg.into())
    }

    pub fn conflict<T: Into<String>>(msg: T) -> Self {
        TinylinkError::Conflict(msg.into())
    }

    pub fn not_found<T: Into<String>>(msg: T) -> Self {
        TinylinkError::NotFound(msg.into())
    }

    pub fn request<T: Into<String>>(msg: T) -> Self {
        TinylinkError::Request(msg.into())
    }

    pub fn config<T: Into<String>>(msg: T) -> Self {
        TinylinkError::Config(msg.into())
    }
}

impl From<reqwest::Error> for TinylinkError {
    fn from(err: reqwest::Error) -> Self {
        // A decode error means the backend answered but the body was not
        // the expected shape; everything else is transport-level.
        if err.is_decode() {
            TinylinkError::Request(format!("invalid response body: {}", err))
        } else {
            TinylinkError::Network(err.to_string())
        }
    }
}

impl From<serde_json::Error> for TinylinkError {
    fn from(err: serde_json::Error) -> Self {
        TinylinkError::Request(err.to_string())
    }
}

impl From<url::ParseError> for TinylinkError {
    fn from(err: url::ParseError) -> Self {
        TinylinkError::Config(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, TinylinkError>;
