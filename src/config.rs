use anyhow::{Context, Result};
use clap::Parser;
use serde::Deserialize;
use std::env;
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Parser, Debug, Default)]
#[command(name = "bookmarks")]
#[command(about = "Runs the bookmarks service", long_about = None)]
pub struct Cli {
    #[arg(short = 'c', long = "config")]
    pub config_path: Option<String>,

    /// Overrides the configured port
    #[arg(short = 'p', long = "port")]
    pub port: Option<u16>,

    /// Start with an empty store instead of the demo bookmarks
    #[arg(long = "no-seed")]
    pub no_seed: bool,
}

pub fn default_config_dir() -> PathBuf {
    dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(".bookmarks")
}

pub fn default_config_path() -> PathBuf {
    default_config_dir().join("config.yaml")
}

#[derive(Debug, Deserialize, Clone, PartialEq, Eq)]
#[serde(default)]
pub struct App {
    pub host: String,
    pub port: u16,
    pub seed: bool,
}

impl Default for App {
    fn default() -> Self {
        App {
            host: "0.0.0.0".to_string(),
            port: 8080,
            seed: true,
        }
    }
}

impl App {
    pub fn address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

#[derive(Debug, Deserialize, Default, Clone, PartialEq, Eq)]
#[serde(default)]
pub struct Config {
    pub app: App,
}

impl Config {
    pub fn new(path: &Path) -> Result<Self> {
        let yaml_str = fs::read_to_string(path)
            .with_context(|| format!("failed to read config file {}", path.display()))?;
        Config::from_yaml(&yaml_str)
    }

    pub fn from_yaml(yaml_str: &str) -> Result<Self> {
        let yaml_with_env = substitute_env_vars(yaml_str);
        // An empty document deserializes to unit, not a mapping.
        if yaml_with_env.trim().is_empty() {
            return Ok(Config::default());
        }
        let config: Config = serde_yaml::from_str(&yaml_with_env)?;
        Ok(config)
    }

    /// Loads the file named on the command line, falling back to the default
    /// location when it exists and to built-in defaults otherwise. Command
    /// line overrides are applied last.
    pub fn resolve(cli: &Cli) -> Result<Self> {
        let mut cfg = match &cli.config_path {
            Some(path) => Config::new(Path::new(path))?,
            None => {
                let path = default_config_path();
                if path.exists() {
                    Config::new(&path)?
                } else {
                    Config::default()
                }
            }
        };

        if let Some(port) = cli.port {
            cfg.app.port = port;
        }
        if cli.no_seed {
            cfg.app.seed = false;
        }
        Ok(cfg)
    }
}

/// Expands `${VAR}` and `${VAR:-default}` from the process environment.
fn substitute_env_vars(yaml_str: &str) -> String {
    let mut result = yaml_str.to_string();
    let mut offset = 0;

    while let Some(start) = result[offset..].find("${") {
        let start = offset + start;
        let Some(len) = result[start..].find('}') else {
            break;
        };
        let expr = &result[start + 2..start + len];

        let value = match expr.split_once(":-") {
            Some((name, default)) => env::var(name).unwrap_or_else(|_| default.to_string()),
            None => env::var(expr).unwrap_or_else(|_| {
                tracing::warn!(variable = expr, "environment variable not found");
                String::new()
            }),
        };

        result.replace_range(start..start + len + 1, &value);
        offset = start + value.len();
    }

    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_defaults() {
        let cfg = Config::default();
        assert_eq!(cfg.app.port, 8080);
        assert!(cfg.app.seed);
        assert_eq!(cfg.app.address(), "0.0.0.0:8080");
    }

    #[test]
    fn test_partial_yaml_keeps_defaults() {
        let cfg = Config::from_yaml("app:\n  port: 9090\n").unwrap();
        assert_eq!(cfg.app.port, 9090);
        assert_eq!(cfg.app.host, "0.0.0.0");
        assert!(cfg.app.seed);
    }

    #[test]
    fn test_empty_yaml_is_default() {
        assert_eq!(Config::from_yaml("").unwrap(), Config::default());
    }

    #[test]
    fn test_env_default_substitution() {
        let cfg = Config::from_yaml(
            "app:\n  host: ${BOOKMARKS_TEST_UNSET_HOST:-127.0.0.1}\n  seed: false\n",
        )
        .unwrap();
        assert_eq!(cfg.app.host, "127.0.0.1");
        assert!(!cfg.app.seed);
    }

    #[test]
    fn test_unterminated_placeholder_is_left_alone() {
        assert_eq!(substitute_env_vars("host: ${OOPS"), "host: ${OOPS");
    }

    #[test]
    fn test_invalid_yaml_is_an_error() {
        assert!(Config::from_yaml("app:\n  port: not-a-port\n").is_err());
    }

    #[test]
    fn test_resolve_applies_cli_overrides() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "app:\n  port: 9000\n  seed: true").unwrap();

        let cli = Cli {
            config_path: Some(file.path().to_string_lossy().into_owned()),
            port: Some(7000),
            no_seed: true,
        };
        let cfg = Config::resolve(&cli).unwrap();
        assert_eq!(cfg.app.port, 7000);
        assert!(!cfg.app.seed);
    }

    #[test]
    fn test_resolve_missing_explicit_file_fails() {
        let dir = tempfile::tempdir().unwrap();
        let cli = Cli {
            config_path: Some(dir.path().join("nope.yaml").to_string_lossy().into_owned()),
            ..Cli::default()
        };
        assert!(Config::resolve(&cli).is_err());
    }
}
