use anyhow::{Context, Result};
use chrono::Local;
use folio::components::ViewContext;
use folio::site::SiteData;
use folio::{
    BuildArgs, BuildOptions, Command, Config, LinkResolver, PreviewArgs, build_site,
    load_site_articles, pages,
};
use std::fs;
use std::io::{self, Read};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    let config = Config::parse();
    init_tracing(config.verbose);

    match &config.command {
        Command::Build(args) => build(args),
        Command::Preview(args) => preview(args),
    }
}

/// Logs to stderr, so `preview --json` keeps stdout for the tree.
///
/// `RUST_LOG` wins over `--verbose`.
fn init_tracing(verbose: bool) {
    let level = if verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level)))
        .with_target(false)
        .with_writer(io::stderr)
        .init();
}

fn build(args: &BuildArgs) -> Result<()> {
    args.validate().context("Invalid configuration")?;

    let options = BuildOptions {
        contents: args.contents.clone(),
        output: args.output.clone(),
        base_path: args.base_path.clone(),
        mode: args.mode,
        now: Local::now().naive_local(),
    };
    let report = build_site(&options).context("Failed to build site")?;

    tracing::info!(
        output = %options.output.display(),
        pages = report.pages(),
        articles = report.articles,
        scheduled = report.scheduled,
        tags = report.tag_pages,
        static_files = report.static_files,
        "Site generated"
    );
    Ok(())
}

fn preview(args: &PreviewArgs) -> Result<()> {
    args.validate().context("Invalid configuration")?;

    let source = read_source(args)?;
    let site = SiteData::load(&args.contents).context("Failed to load site data")?;
    let articles = load_site_articles(&site)?;
    let links = LinkResolver::new("", site.config.domain.clone());
    let view = ViewContext::new(&site.config, &links, args.mode);

    let preview = pages::preview::generate(&source, args.page_type, &site, &articles, &view);

    if args.json {
        let json = serde_json::to_string_pretty(&preview.tree)
            .context("Failed to serialize rendered tree")?;
        println!("{}", json);
        return Ok(());
    }

    fs::write(&args.output, preview.page.into_string())
        .with_context(|| format!("Failed to write preview to {}", args.output.display()))?;
    tracing::info!(path = %args.output.display(), "Generated preview");

    if !args.no_open
        && let Err(e) = open::that(&args.output)
    {
        tracing::warn!(path = %args.output.display(), "Failed to open preview: {}", e);
    }
    Ok(())
}

fn read_source(args: &PreviewArgs) -> Result<String> {
    if args.reads_stdin() {
        let mut source = String::new();
        io::stdin()
            .read_to_string(&mut source)
            .context("Failed to read document from stdin")?;
        return Ok(source);
    }
    fs::read_to_string(&args.input)
        .with_context(|| format!("Failed to read {}", args.input.display()))
}
