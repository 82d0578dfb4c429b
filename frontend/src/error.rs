use thiserror::Error;

/// A form failed presence or number checks. Never reaches the network.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Fill all fields")]
    MissingField { field: &'static str },
    #[error("{label} must be a positive whole number")]
    NotPositive {
        field: &'static str,
        label: &'static str,
    },
}

/// Failure of a call to the backend.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    /// The request never produced a usable answer (offline, DNS, CORS, non-JSON body).
    #[error("Connection error")]
    Transport(String),
    /// The server answered and said no.
    #[error("{message}")]
    Application { status: u16, message: String },
}

impl ApiError {
    /// Text shown to the user in the toast.
    pub fn user_message(&self) -> String {
        self.to_string()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StorageError {
    #[error("local storage is not available")]
    Unavailable,
    #[error("could not write `{0}` to local storage")]
    Write(String),
    #[error("stored `{key}` is not valid JSON: {reason}")]
    Corrupt { key: String, reason: String },
    #[error("could not serialize value for `{key}`: {reason}")]
    Serialize { key: String, reason: String },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toast_text_per_failure_class() {
        assert_eq!(
            ApiError::Transport("TypeError: Failed to fetch".into()).user_message(),
            "Connection error"
        );
        assert_eq!(
            ApiError::Application {
                status: 409,
                message: "Username already exists.".into()
            }
            .user_message(),
            "Username already exists."
        );
        assert_eq!(
            ValidationError::NotPositive {
                field: "qty",
                label: "Quantity"
            }
            .to_string(),
            "Quantity must be a positive whole number"
        );
    }
}
