//! `init` command: write a commented `seo.toml`.

use anyhow::{Context, Result, bail};
use std::{fs, path::Path};

use crate::config::SeoConfig;
use crate::log;

/// Generate seo.toml content with comments
pub fn generate_config_template() -> String {
    let mut out = format!(
        "# bibliokit-seo configuration file (v{})\n\n",
        env!("CARGO_PKG_VERSION")
    );
    out.push_str(&SeoConfig::template());
    out
}

/// Write the template to `path`, refusing to replace a file unless `force`.
pub fn write_config(path: &Path, force: bool) -> Result<()> {
    if path.exists() && !force {
        bail!(
            "`{}` already exists, pass --force to overwrite it",
            path.display()
        );
    }

    fs::write(path, generate_config_template())
        .with_context(|| format!("Failed to write config file '{}'", path.display()))?;

    log!("init"; "wrote {}", path.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::test_parse_config;
    use tempfile::TempDir;

    #[test]
    fn test_template_parses_to_defaults() {
        let config = test_parse_config(&generate_config_template());
        assert_eq!(config.site.name, "BiblioKit");
        assert_eq!(config.limits.title, 60);
        assert_eq!(config.robots.missing, "noindex, follow");
    }

    #[test]
    fn test_write_and_refuse_overwrite() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("seo.toml");

        write_config(&path, false).unwrap();
        assert!(fs::read_to_string(&path).unwrap().contains("[site]"));

        fs::write(&path, "# edited").unwrap();
        let err = write_config(&path, false).unwrap_err();
        assert!(err.to_string().contains("--force"));
        assert_eq!(fs::read_to_string(&path).unwrap(), "# edited");

        write_config(&path, true).unwrap();
        assert!(fs::read_to_string(&path).unwrap().contains("[limits]"));
    }
}
