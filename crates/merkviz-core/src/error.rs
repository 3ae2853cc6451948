pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Invalid config value for `{path}`: {message}")]
    InvalidConfig { path: String, message: String },

    #[error(transparent)]
    Json(#[from] serde_json::Error),
}
