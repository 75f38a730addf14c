pub mod codec;
mod file_repo;

pub use file_repo::{FileHistoryRepository, HISTORY_FILE_NAME};
