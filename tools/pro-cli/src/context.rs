//! CLI execution context.

use std::path::{Path, PathBuf};

use anyhow::{Context as _, Result};
use pro_core::SiteConfig;

use crate::output::Output;

/// File names searched for, nearest directory first.
pub const CONFIG_NAMES: [&str; 3] = ["pro.toml", ".pro.toml", "pro.json"];

/// Execution context for CLI commands.
pub struct Context {
    /// Site configuration with environment overrides applied.
    pub config: SiteConfig,
    /// File the configuration came from, if any.
    pub config_path: Option<PathBuf>,
    /// Output handler.
    pub output: Output,
    /// Working directory.
    pub cwd: PathBuf,
}

impl Context {
    /// Load context from an explicit config file or the nearest one found.
    pub fn load(config_path: Option<&str>, output: Output) -> Result<Self> {
        let cwd = std::env::current_dir().context("Failed to get current directory")?;

        let (config, config_path) = match config_path {
            Some(path) => {
                let path = resolve(&cwd, path);
                (load_config(&path)?, Some(path))
            }
            None => match find_config(&cwd) {
                Some(path) => (load_config(&path)?, Some(path)),
                None => (SiteConfig::default(), None),
            },
        };

        if let Some(path) = &config_path {
            output.debug(&format!("Using config {}", path.display()));
        }

        let config = config.with_env_overrides(|name| std::env::var(name).ok());

        Ok(Self {
            config,
            config_path,
            output,
            cwd,
        })
    }

    /// Path `config init` writes to.
    pub fn default_config_path(&self) -> PathBuf {
        self.cwd.join(CONFIG_NAMES[0])
    }
}

/// Parse a config file, choosing the format by extension.
pub fn load_config(path: &Path) -> Result<SiteConfig> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read {}", path.display()))?;

    let parsed = if path.extension().is_some_and(|ext| ext == "json") {
        SiteConfig::from_json_str(&content)
    } else {
        SiteConfig::from_toml_str(&content)
    };

    parsed.with_context(|| format!("Failed to parse {}", path.display()))
}

/// Find the nearest config file walking up from `start`.
pub fn find_config(start: &Path) -> Option<PathBuf> {
    let mut current = start.to_path_buf();
    loop {
        for name in CONFIG_NAMES {
            let candidate = current.join(name);
            if candidate.is_file() {
                return Some(candidate);
            }
        }

        if !current.pop() {
            return None;
        }
    }
}

fn resolve(cwd: &Path, path: &str) -> PathBuf {
    let path = PathBuf::from(path);
    if path.is_absolute() {
        path
    } else {
        cwd.join(path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scratch_dir(name: &str) -> PathBuf {
        let dir = std::env::temp_dir().join(format!("pro-cli-{}-{}", name, std::process::id()));
        let _ = std::fs::remove_dir_all(&dir);
        std::fs::create_dir_all(&dir).unwrap();
        dir
    }

    #[test]
    fn test_find_config_walks_up() {
        let root = scratch_dir("walk");
        let nested = root.join("a").join("b");
        std::fs::create_dir_all(&nested).unwrap();
        std::fs::write(root.join("pro.toml"), pro_core::generate_default_config()).unwrap();

        assert_eq!(find_config(&nested), Some(root.join("pro.toml")));

        std::fs::remove_dir_all(&root).unwrap();
    }

    #[test]
    fn test_load_json_config() {
        let root = scratch_dir("json");
        let path = root.join("pro.json");
        std::fs::write(&path, r#"{"leads": {"table": "leads"}}"#).unwrap();

        let config = load_config(&path).unwrap();
        assert_eq!(config.leads.table, "leads");

        std::fs::remove_dir_all(&root).unwrap();
    }

    #[test]
    fn test_load_config_reports_path() {
        let root = scratch_dir("broken");
        let path = root.join("pro.toml");
        std::fs::write(&path, "[leads\n").unwrap();

        let err = format!("{:#}", load_config(&path).unwrap_err());
        assert!(err.contains("pro.toml"));

        std::fs::remove_dir_all(&root).unwrap();
    }

    #[test]
    fn test_resolve_relative() {
        let cwd = PathBuf::from("/work");
        assert_eq!(resolve(&cwd, "pro.toml"), PathBuf::from("/work/pro.toml"));
        assert_eq!(resolve(&cwd, "/etc/pro.toml"), PathBuf::from("/etc/pro.toml"));
    }
}
