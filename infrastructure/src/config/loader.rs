//! Layered configuration loading.
//!
//! Sources merge from lowest to highest priority: built-in defaults, the
//! global file under the platform config directory, a project-local file,
//! an explicit `--config` path, and finally `CONSILIUM_*` environment
//! variables (section and key joined by `__`, e.g.
//! `CONSILIUM_RUNTIME__MAX_FANOUT=8`).

use super::file_config::FileConfig;
use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use std::path::PathBuf;

/// Project-local file names, checked in order.
const PROJECT_FILES: [&str; 2] = ["consilium.toml", ".consilium.toml"];

const ENV_PREFIX: &str = "CONSILIUM_";

/// Merges every configuration source into a [`FileConfig`].
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load and merge all sources, `explicit` being the `--config` path.
    pub fn load(explicit: Option<&PathBuf>) -> Result<FileConfig, Box<figment::Error>> {
        let mut figment = Figment::from(Serialized::defaults(FileConfig::default()));

        for path in [Self::global_path(), Self::project_path()]
            .into_iter()
            .flatten()
        {
            figment = figment.merge(Toml::file(path));
        }
        if let Some(path) = explicit {
            figment = figment.merge(Toml::file(path));
        }

        figment
            .merge(Env::prefixed(ENV_PREFIX).split("__"))
            .extract()
            .map_err(Box::new)
    }

    /// Built-in defaults only, for `--no-config`.
    pub fn load_defaults() -> FileConfig {
        FileConfig::default()
    }

    /// The global config file, when it exists.
    pub fn global_path() -> Option<PathBuf> {
        let path = Self::global_candidate()?;
        path.exists().then_some(path)
    }

    /// The first project-local config file present in the working directory.
    pub fn project_path() -> Option<PathBuf> {
        PROJECT_FILES.iter().map(PathBuf::from).find(|p| p.exists())
    }

    /// Where the global config file would live, present or not.
    fn global_candidate() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("consilium").join("config.toml"))
    }

    /// Renders the source list for `--show-config`, highest priority first.
    pub fn describe_sources() -> String {
        let mut lines = vec![
            "configuration sources, highest priority first:".to_string(),
            format!("  env      {}* variables", ENV_PREFIX),
            "  flag     --config <path>".to_string(),
        ];

        lines.push(match Self::project_path() {
            Some(path) => format!("  project  {} (present)", path.display()),
            None => format!("  project  ./{} (absent)", PROJECT_FILES[0]),
        });

        if let Some(path) = Self::global_candidate() {
            let state = if path.exists() { "present" } else { "absent" };
            lines.push(format!("  global   {} ({})", path.display(), state));
        }

        lines.push("  default  built-in model catalog".to_string());
        lines.join("\n")
    }
}

#[cfg(test)]
mod tests {
    use super::super::file_config::SimilarityKind;
    use super::*;

    #[test]
    fn test_load_defaults_yields_working_catalog() {
        let config = ConfigLoader::load_defaults();
        assert!(!config.models.is_empty());
        assert_eq!(config.runtime.max_fanout, 4);
    }

    #[test]
    fn test_project_file_layers_over_defaults() {
        figment::Jail::expect_with(|jail| {
            jail.create_file(
                ".consilium.toml",
                r#"
                    [consensus]
                    similarity = "exact"
                "#,
            )?;

            let config = ConfigLoader::load(None).map_err(|e| *e)?;
            assert_eq!(config.consensus.similarity, SimilarityKind::Exact);
            // Untouched sections keep their defaults
            assert!(!config.models.is_empty());
            Ok(())
        });
    }

    #[test]
    fn test_env_overrides_project_file() {
        figment::Jail::expect_with(|jail| {
            jail.create_file(
                "consilium.toml",
                r#"
                    [runtime]
                    max_fanout = 2
                "#,
            )?;
            jail.set_env("CONSILIUM_RUNTIME__MAX_FANOUT", "6");

            let config = ConfigLoader::load(None).map_err(|e| *e)?;
            assert_eq!(config.runtime.max_fanout, 6);
            Ok(())
        });
    }

    #[test]
    fn test_explicit_path_beats_project_file() {
        figment::Jail::expect_with(|jail| {
            jail.create_file("consilium.toml", "[gateway]\nendpoint = \"http://project\"\n")?;
            jail.create_file("override.toml", "[gateway]\nendpoint = \"http://explicit\"\n")?;

            let explicit = PathBuf::from("override.toml");
            let config = ConfigLoader::load(Some(&explicit)).map_err(|e| *e)?;
            assert_eq!(config.gateway.endpoint, "http://explicit");
            Ok(())
        });
    }

    #[test]
    fn test_describe_sources_lists_every_layer() {
        let listing = ConfigLoader::describe_sources();
        assert!(listing.contains("CONSILIUM_"));
        assert!(listing.contains("--config"));
        assert!(listing.contains("built-in model catalog"));
    }
}
