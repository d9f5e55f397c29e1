use shared::{DSL_DIR_ENV, LEGACY_DEFINITION_FILE};
use std::path::{Path, PathBuf};

/// Where the resolver may look for definitions.
///
/// Passed explicitly to [`crate::resolver::Resolver::new`]; the pipeline
/// itself never consults the process environment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolverConfig {
    /// DSL directory holding the four-document form. `None` disables
    /// directory mode.
    pub dsl_dir: Option<PathBuf>,
    /// Single-file fallback, relative paths resolve against the working
    /// directory.
    pub legacy_path: PathBuf,
}

impl Default for ResolverConfig {
    fn default() -> Self {
        Self {
            dsl_dir: None,
            legacy_path: PathBuf::from(LEGACY_DEFINITION_FILE),
        }
    }
}

impl ResolverConfig {
    /// Builds a config from `LUDIZ_DSL_DIR`, for deployments that still
    /// configure directory mode through the environment.
    pub fn from_env() -> Self {
        Self::from_dsl_dir_var(std::env::var(DSL_DIR_ENV).ok())
    }

    fn from_dsl_dir_var(value: Option<String>) -> Self {
        let config = Self::default();
        match value {
            Some(dir) if !dir.is_empty() => config.with_dsl_dir(dir),
            _ => config,
        }
    }

    pub fn with_dsl_dir(mut self, dir: impl AsRef<Path>) -> Self {
        self.dsl_dir = Some(dir.as_ref().to_path_buf());
        self
    }

    pub fn with_legacy_path(mut self, path: impl AsRef<Path>) -> Self {
        self.legacy_path = path.as_ref().to_path_buf();
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = ResolverConfig::default();
        assert!(config.dsl_dir.is_none());
        assert_eq!(config.legacy_path, PathBuf::from("definition.json"));
    }

    #[test]
    fn test_dsl_dir_var() {
        let config = ResolverConfig::from_dsl_dir_var(Some("/srv/games/dsl".to_string()));
        assert_eq!(config.dsl_dir, Some(PathBuf::from("/srv/games/dsl")));
    }

    #[test]
    fn test_empty_or_missing_dsl_dir_var_is_unset() {
        assert!(ResolverConfig::from_dsl_dir_var(Some(String::new()))
            .dsl_dir
            .is_none());
        assert!(ResolverConfig::from_dsl_dir_var(None).dsl_dir.is_none());
    }

    #[test]
    fn test_builders() {
        let config = ResolverConfig::default()
            .with_dsl_dir("dsl")
            .with_legacy_path("/opt/game/definition.json");

        assert_eq!(config.dsl_dir, Some(PathBuf::from("dsl")));
        assert_eq!(
            config.legacy_path,
            PathBuf::from("/opt/game/definition.json")
        );
    }
}
