use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    #[error("{0}: {1}")]
    Context(String, Box<Error>),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON serialization/deserialization error: {0}")]
    SerdeJson(#[from] serde_json::Error),

    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("Url parsing error: {0}")]
    UrlParse(#[from] url::ParseError),

    #[error("Config parsing error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("Lock error: {0}")]
    Lock(String),

    #[error("contact has no id")]
    MissingContactId,

    #[error("failed to fetch contact {0}: {1}")]
    FetchContact(String, Box<Error>),

    #[error("no logged-in user")]
    NoLoggedInUser,

    #[error("contact {0} is not loaded")]
    NotLoaded(String),

    #[error("contact {0} has no avatar")]
    NoAvatar(String),

    #[error("An unexpected error occurred: {0}")]
    Other(String),
}

pub trait Context<T, E> {
    fn context(self, context: &'static str) -> Result<T>;
}

impl<T, E> Context<T, E> for std::result::Result<T, E>
where
    E: Into<Error>,
{
    fn context(self, context: &'static str) -> Result<T> {
        self.map_err(|e| Error::Context(context.to_string(), Box::new(e.into())))
    }
}

impl<T> From<std::sync::PoisonError<T>> for Error {
    fn from(err: std::sync::PoisonError<T>) -> Self {
        Self::Lock(err.to_string())
    }
}
