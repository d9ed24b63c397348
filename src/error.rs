#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("unable to load configuration: {0}")]
    Configuration(#[from] config::ConfigError),
    #[error(transparent)]
    Client(#[from] crate::service::client::Error),
    #[error("unable to read from terminal: {0}")]
    Io(#[from] std::io::Error),
}
