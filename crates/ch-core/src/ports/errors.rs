use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppDirsError {
    #[error("local data directory is unavailable")]
    DataLocalDirUnavailable,

    #[error("config directory is unavailable")]
    ConfigDirUnavailable,
}
