//! Command-line interface definitions.

use clap::{ColorChoice, Parser, Subcommand};
use std::path::PathBuf;

/// BiblioKit SEO metadata and JSON-LD resolver
#[derive(Parser, Debug, Clone)]
#[command(version, about, long_about = None, arg_required_else_help = true)]
pub struct Cli {
    /// Control colored output (auto, always, never)
    #[arg(long, global = true, default_value = "auto")]
    pub color: ColorChoice,

    /// Config file path, searched upward from the current directory
    #[arg(short = 'C', long, global = true, default_value = "seo.toml", value_hint = clap::ValueHint::FilePath)]
    pub config: PathBuf,

    /// Enable verbose output for debugging
    #[arg(short = 'v', long, global = true)]
    pub verbose: bool,

    /// subcommands
    #[command(subcommand)]
    pub command: Commands,
}

/// Available subcommands
#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    /// Print the resolved head fragment for one route
    #[command(visible_alias = "r")]
    Render {
        #[command(flatten)]
        args: RenderArgs,
    },

    /// Resolve routes and report metadata invariant violations
    #[command(visible_alias = "c")]
    Check {
        #[command(flatten)]
        args: CheckArgs,
    },

    /// Write a commented seo.toml template
    #[command(visible_alias = "i")]
    Init {
        /// Overwrite an existing config file
        #[arg(short, long)]
        force: bool,
    },
}

/// Content and origin shared by `render` and `check`.
#[derive(clap::Args, Debug, Clone)]
pub struct SourceArgs {
    /// CMS content blob (JSON) to resolve against
    #[arg(long, value_hint = clap::ValueHint::FilePath)]
    pub content: Option<PathBuf>,

    /// Request origin; defaults to the configured site URL
    #[arg(short = 'U', long = "base-url", value_hint = clap::ValueHint::Url)]
    pub base_url: Option<String>,
}

/// Render command arguments.
#[derive(clap::Args, Debug, Clone)]
pub struct RenderArgs {
    /// Request path, e.g. `/blog/my-post`
    #[arg(value_name = "PATH")]
    pub path: String,

    #[command(flatten)]
    pub source: SourceArgs,

    /// Print the resolved metadata as JSON instead of HTML
    #[arg(short, long)]
    pub json: bool,
}

/// Check command arguments.
#[derive(clap::Args, Debug, Clone)]
pub struct CheckArgs {
    /// Request paths to check. If omitted, checks every known route.
    #[arg(value_name = "PATH")]
    pub paths: Vec<String>,

    #[command(flatten)]
    pub source: SourceArgs,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_args() {
        let cli = Cli::try_parse_from([
            "bibliokit-seo",
            "render",
            "/blog/post",
            "--content",
            "content.json",
            "-U",
            "https://staging.bibliokit.com",
            "--json",
        ])
        .unwrap();
        let Commands::Render { args } = cli.command else {
            panic!("expected render");
        };
        assert_eq!(args.path, "/blog/post");
        assert!(args.json);
        assert_eq!(args.source.base_url.as_deref(), Some("https://staging.bibliokit.com"));
        assert_eq!(cli.config, PathBuf::from("seo.toml"));
    }

    #[test]
    fn test_global_flags_after_subcommand() {
        let cli = Cli::try_parse_from(["bibliokit-seo", "check", "/", "/about", "-v", "-C", "site/seo.toml"])
            .unwrap();
        assert!(cli.verbose);
        assert_eq!(cli.config, PathBuf::from("site/seo.toml"));
        let Commands::Check { args } = cli.command else {
            panic!("expected check");
        };
        assert_eq!(args.paths, ["/", "/about"]);
    }

    #[test]
    fn test_init_force() {
        let cli = Cli::try_parse_from(["bibliokit-seo", "init", "--force"]).unwrap();
        assert!(matches!(cli.command, Commands::Init { force: true }));
    }
}
