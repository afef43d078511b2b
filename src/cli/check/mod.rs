//! Metadata check command.
//!
//! Resolves every route in parallel and audits the result against the
//! length limits, graph identity keys and `@id` references.

mod report;

use anyhow::{Result, bail};
use rayon::prelude::*;

use super::args::CheckArgs;
use super::common::{Source, collect_routes};
use crate::config::SeoConfig;
use crate::content::{ContentData, PostCatalog};
use crate::logger::ProgressLine;
use crate::seo::{Resolver, audit};
use crate::utils::plural_count;
use crate::{debug, log};

use report::CheckReport;

/// Check resolved metadata for the requested (or all known) routes.
pub fn check_routes(args: &CheckArgs, config: &SeoConfig) -> Result<()> {
    let source = Source::load(&args.source, config)?;
    let posts = PostCatalog::builtin();
    let routes = collect_routes(&args.paths, source.content.as_ref(), posts)?;

    if routes.is_empty() {
        log!("check"; "no routes to check");
        return Ok(());
    }

    log!("check"; "resolving {} against {}", plural_count(routes.len(), "route"), source.base_url);

    let resolver = Resolver::new(config, posts);
    let report = run_checks(&resolver, &routes, source.content.as_ref(), &source.base_url, config);

    report.print();
    log!("check"; "{}", report);

    if report.has_errors() {
        bail!(
            "metadata check failed for {}",
            plural_count(report.route_count(), "route")
        );
    }
    Ok(())
}

fn run_checks(
    resolver: &Resolver<'_>,
    routes: &[String],
    content: Option<&ContentData>,
    base_url: &str,
    config: &SeoConfig,
) -> CheckReport {
    let progress = ProgressLine::new(&[("routes", routes.len())]);

    let results: Vec<_> = routes
        .par_iter()
        .map(|route| {
            let meta = resolver.resolve(route, content, base_url);
            let violations = audit(&meta, &config.limits);
            debug!("check"; "`{}`: {} node(s)", route, meta.structured_data.len());
            progress.inc("routes");
            (route.clone(), violations)
        })
        .collect();

    progress.finish();

    let mut report = CheckReport::default();
    for (route, violations) in results {
        report.add(route, violations);
    }
    report
}
