use thiserror::Error;

#[derive(Error, Debug)]
pub enum BookError {
    #[error("Phone number must have 10 digits and contain only numbers: {0}")]
    InvalidPhoneFormat(String),

    #[error("Incorrect date format, should be DD-MM-YYYY: {0}")]
    InvalidDateFormat(String),

    #[error("Wrong user name: {0}")]
    ContactNotFound(String),

    #[error("Phone number not found: {0}")]
    PhoneNotFound(String),

    #[error("Not enough arguments. Usage: {usage}")]
    InsufficientArguments { usage: String },

    #[error("Unexpected argument: {0}")]
    UnexpectedArgument(String),

    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Store error: {0}")]
    Store(String),
}

impl BookError {
    /// True for errors caused by what the user typed, as opposed to storage failures.
    pub fn is_user_error(&self) -> bool {
        !matches!(
            self,
            BookError::Io(_) | BookError::Serialization(_) | BookError::Store(_)
        )
    }
}

pub type Result<T> = std::result::Result<T, BookError>;
