use std::path::PathBuf;

use crate::cli::GlobalOptions;
use crate::error::{AppError, AppResult};
use crate::metadata::DEFAULT_DATA_DIR;

/// Default log directive when `RUST_LOG` is not set.
pub const DEFAULT_LOG_FILTER: &str = "warn";
pub const VERBOSE_LOG_FILTER: &str = "magic_quests=debug";

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AppConfig {
    pub data_dir: PathBuf,
}

impl AppConfig {
    /// `--data-dir` / `MAGIC_QUESTS_DATA_DIR` wins; otherwise the data lives
    /// under the home directory.
    pub fn resolve(options: &GlobalOptions) -> AppResult<Self> {
        let data_dir = match &options.data_dir {
            Some(dir) => dir.clone(),
            None => dirs::home_dir()
                .map(|home| home.join(DEFAULT_DATA_DIR))
                .ok_or_else(|| AppError::Config("Cannot find home directory".into()))?,
        };
        Ok(Self { data_dir })
    }
}

pub fn log_filter(verbose: bool) -> &'static str {
    if verbose {
        VERBOSE_LOG_FILTER
    } else {
        DEFAULT_LOG_FILTER
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_explicit_data_dir_wins() {
        let options = GlobalOptions {
            data_dir: Some(PathBuf::from("/tmp/quests")),
            verbose: true,
        };
        let config = AppConfig::resolve(&options).unwrap();
        assert_eq!(config.data_dir, PathBuf::from("/tmp/quests"));
    }

    #[test]
    fn test_default_dir_sits_under_home() {
        let Some(home) = dirs::home_dir() else {
            return;
        };
        let config = AppConfig::resolve(&GlobalOptions::default()).unwrap();
        assert_eq!(config.data_dir, home.join(DEFAULT_DATA_DIR));
    }

    #[test]
    fn test_verbose_switches_log_filter() {
        assert_eq!(log_filter(false), DEFAULT_LOG_FILTER);
        assert_eq!(log_filter(true), VERBOSE_LOG_FILTER);
    }
}
