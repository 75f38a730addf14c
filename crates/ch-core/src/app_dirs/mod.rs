use std::path::PathBuf;

/// Resolved per-user application roots.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppDirs {
    pub app_data_root: PathBuf,
    pub app_config_root: PathBuf,
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn app_dirs_is_pure_fact_container() {
        let dirs = AppDirs {
            app_data_root: PathBuf::from("/tmp/cliphistory"),
            app_config_root: PathBuf::from("/tmp/config/cliphistory"),
        };
        assert!(dirs.app_data_root.ends_with("cliphistory"));
        assert!(dirs.app_config_root.ends_with("cliphistory"));
    }
}
