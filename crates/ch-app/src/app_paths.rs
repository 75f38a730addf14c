use std::path::PathBuf;

use ch_core::app_dirs::AppDirs;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppPaths {
    pub history_path: PathBuf,
    pub config_path: PathBuf,
    pub logs_dir: PathBuf,
}

impl AppPaths {
    pub fn from_app_dirs(dirs: &AppDirs) -> Self {
        Self {
            history_path: dirs.app_data_root.join("clip_history.json"),
            config_path: dirs.app_config_root.join("config.toml"),
            logs_dir: dirs.app_data_root.join("logs"),
        }
    }
}
