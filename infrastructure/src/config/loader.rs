//! Configuration file loader with multi-source merging

use super::file_config::FileConfig;
use figment::{
    Figment,
    providers::{Format, Serialized, Toml},
};
use std::path::{Path, PathBuf};

/// Project-level config file names, checked in order
const PROJECT_CONFIG_FILES: [&str; 2] = ["quizify.toml", ".quizify.toml"];

/// Configuration loader that handles file discovery and merging
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load configuration from all sources with proper priority
    ///
    /// Priority (highest to lowest):
    /// 1. Explicit config path (if provided)
    /// 2. Project root: `./quizify.toml` or `./.quizify.toml`
    /// 3. XDG config: `$XDG_CONFIG_HOME/quizify/config.toml`
    /// 4. Default values
    pub fn load(config_path: Option<&PathBuf>) -> Result<FileConfig, Box<figment::Error>> {
        let mut sources = Vec::new();

        if let Some(global_path) = Self::global_config_path()
            && global_path.exists()
        {
            sources.push(global_path);
        }
        if let Some(project_path) = Self::project_config_path() {
            sources.push(project_path);
        }
        // An explicit path must exist; a missing file is an error, not a skip.
        if let Some(path) = config_path {
            if !path.exists() {
                return Err(Box::new(figment::Error::from(format!(
                    "config file not found: {}",
                    path.display()
                ))));
            }
            sources.push(path.clone());
        }

        Self::load_from(&sources)
    }

    /// Merge the given TOML files over the defaults, later files winning.
    pub fn load_from<P: AsRef<Path>>(paths: &[P]) -> Result<FileConfig, Box<figment::Error>> {
        let figment = paths.iter().fold(
            Figment::new().merge(Serialized::defaults(FileConfig::default())),
            |figment, path| figment.merge(Toml::file(path.as_ref())),
        );

        figment.extract().map_err(Box::new)
    }

    /// Load only default configuration (for --no-config)
    pub fn load_defaults() -> FileConfig {
        FileConfig::default()
    }

    /// Get the global config file path
    ///
    /// Returns XDG_CONFIG_HOME/quizify/config.toml if set,
    /// otherwise the platform config directory.
    pub fn global_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|d| d.join("quizify").join("config.toml"))
    }

    /// Get the project-level config file path (if it exists)
    pub fn project_config_path() -> Option<PathBuf> {
        PROJECT_CONFIG_FILES
            .iter()
            .map(PathBuf::from)
            .find(|path| path.exists())
    }

    /// Print the config file locations being used (for debugging)
    pub fn print_config_sources(explicit: Option<&PathBuf>) {
        println!("Configuration sources (in priority order):");

        if let Some(path) = explicit {
            println!("  [FOUND] Explicit: {}", path.display());
        }

        if let Some(path) = Self::project_config_path() {
            println!("  [FOUND] Project: {}", path.display());
        } else {
            println!("  [     ] Project: ./quizify.toml or ./.quizify.toml");
        }

        if let Some(path) = Self::global_config_path() {
            let marker = if path.exists() { "FOUND" } else { "     " };
            println!("  [{}] Global:  {}", marker, path.display());
        }

        println!("  [     ] Default: built-in defaults");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use quizify_domain::{Level, Model};
    use std::fs;

    #[test]
    fn test_load_defaults() {
        let config = ConfigLoader::load_defaults();
        assert_eq!(config.provider.model, Model::Llama33_70bVersatile);
        assert_eq!(config.quiz.default_count, 5);
        assert_eq!(config.quiz.export_path, "quiz.html");
    }

    #[test]
    fn test_global_config_path_returns_some() {
        let path = ConfigLoader::global_config_path();
        assert!(path.is_some());
        assert!(path.unwrap().to_string_lossy().contains("quizify"));
    }

    #[test]
    fn test_later_files_override_earlier() {
        let dir = tempfile::tempdir().unwrap();
        let global = dir.path().join("global.toml");
        let project = dir.path().join("project.toml");
        fs::write(
            &global,
            "[provider]\nmodel = \"mixtral-8x7b-32768\"\ntimeout_seconds = 15\n\n[study]\nlevel = \"advanced\"\n",
        )
        .unwrap();
        fs::write(&project, "[provider]\ntimeout_seconds = 90\n").unwrap();

        let config = ConfigLoader::load_from(&[&global, &project]).unwrap();
        assert_eq!(config.provider.model, Model::Mixtral8x7b);
        assert_eq!(config.provider.timeout_seconds, Some(90));
        assert_eq!(config.study.level, Level::Advanced);
        // Untouched sections keep defaults
        assert_eq!(config.quiz.max_count, 10);
    }

    #[test]
    fn test_invalid_value_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("bad.toml");
        fs::write(&path, "[study]\nlanguage = \"Klingon\"\n").unwrap();

        assert!(ConfigLoader::load_from(&[&path]).is_err());
    }

    #[test]
    fn test_missing_explicit_path_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("nope.toml");
        assert!(ConfigLoader::load(Some(&missing)).is_err());
    }
}
