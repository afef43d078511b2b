//! `render` command: print the head fragment for one route.

use std::io::{Write, stdout};

use anyhow::{Context, Result};

use super::args::RenderArgs;
use super::common::Source;
use crate::config::SeoConfig;
use crate::content::PostCatalog;
use crate::debug;
use crate::seo::{Resolver, SeoMetadata, render_head};

pub fn render_route(args: &RenderArgs, config: &SeoConfig) -> Result<()> {
    let source = Source::load(&args.source, config)?;
    let meta = Resolver::new(config, PostCatalog::builtin()).resolve(
        &args.path,
        source.content.as_ref(),
        &source.base_url,
    );
    debug!("render"; "`{}` -> {}", args.path, meta.canonical.as_deref().unwrap_or_default());

    let output = format_output(&meta, args.json)?;
    let mut out = stdout().lock();
    out.write_all(output.as_bytes())
        .context("Failed to write to stdout")?;
    Ok(())
}

fn format_output(meta: &SeoMetadata, json: bool) -> Result<String> {
    if json {
        let mut output = serde_json::to_string_pretty(meta)?;
        output.push('\n');
        Ok(output)
    } else {
        Ok(render_head(meta))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::Value;

    fn meta() -> SeoMetadata {
        let config = SeoConfig::default();
        Resolver::new(&config, PostCatalog::builtin()).resolve("/about", None, "https://bibliokit.com")
    }

    #[test]
    fn test_json_output_is_camel_case() {
        let output = format_output(&meta(), true).unwrap();
        let value: Value = serde_json::from_str(&output).unwrap();
        assert_eq!(value["canonical"], "https://bibliokit.com/about");
        assert_eq!(value["webPageType"], "AboutPage");
        assert!(value["structuredData"].is_array());
    }

    #[test]
    fn test_html_output() {
        let output = format_output(&meta(), false).unwrap();
        assert!(output.starts_with("<title>About BiblioKit"));
        assert!(output.contains("application/ld+json"));
    }
}
