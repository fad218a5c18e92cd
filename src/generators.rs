//! Site generation: loads contents and writes every page.

use anyhow::{Context, Result};
use chrono::NaiveDateTime;
use maud::Markup;
use std::fs;
use std::path::{Path, PathBuf};

use crate::assets::write_css_assets;
use crate::components::ViewContext;
use crate::config::DisplayMode;
use crate::content::{
    Article, PostIndex, PostSummary, extract_article_links, load_articles, tag_counts,
};
use crate::markdown::{LinkResolver, MarkdownRenderer, RenderContext};
use crate::pages::{self, articles::Listing, index::IndexPageData};
use crate::routes;
use crate::site::SiteData;
use crate::util::{POSTS_PER_PAGE, page_count};

/// Settings of one site build.
#[derive(Debug, Clone)]
pub struct BuildOptions {
    /// Content directory holding `config.json`, `articles/`, `fixed/` and `static/`.
    pub contents: PathBuf,
    /// Output directory.
    pub output: PathBuf,
    /// URL prefix the site is served under.
    pub base_path: String,
    pub mode: DisplayMode,
    /// Build time; articles posted later are not published.
    pub now: NaiveDateTime,
}

/// Counts of what a build produced.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BuildReport {
    pub articles: usize,
    /// Articles held back because they are posted after the build time.
    pub scheduled: usize,
    pub list_pages: usize,
    pub tag_pages: usize,
    pub static_files: usize,
}

impl BuildReport {
    /// Total number of HTML pages written.
    pub fn pages(&self) -> usize {
        // index page plus the tags index
        self.articles + self.list_pages + self.tag_pages + 2
    }
}

/// Builds the whole site
///
/// Loads the site data and articles, then writes the index, article,
/// article list and tag pages, the CSS bundle and the static files.
///
/// # Arguments
///
/// * `options`: Content and output locations, base path, mode and build time
///
/// # Returns
///
/// Counts of generated pages and files
///
/// # Errors
///
/// Returns error if:
/// - `config.json` is missing or a data file is invalid
/// - The articles directory cannot be read
/// - Any output file cannot be written
pub fn build_site(options: &BuildOptions) -> Result<BuildReport> {
    let site = SiteData::load(&options.contents).context("Failed to load site data")?;
    let articles = load_site_articles(&site)?;
    let total = articles.len();

    let published: Vec<Article> = articles
        .into_iter()
        .filter(|article| article.is_published(options.now))
        .collect();
    let mut report = BuildReport {
        articles: published.len(),
        scheduled: total - published.len(),
        ..BuildReport::default()
    };
    if report.scheduled > 0 {
        tracing::info!(count = report.scheduled, "Skipping scheduled articles");
    }

    fs::create_dir_all(&options.output).with_context(|| {
        format!("Failed to create output directory {}", options.output.display())
    })?;

    let links = LinkResolver::new(&options.base_path, site.config.domain.clone());
    let view = ViewContext::new(&site.config, &links, options.mode);
    let renderer = MarkdownRenderer::new();
    let summaries: Vec<PostSummary> = published.iter().map(Article::summary).collect();
    let all_posts: PostIndex = summaries.iter().cloned().collect();

    for article in &published {
        write_article(options, &site, &view, &renderer, &all_posts, article)?;
    }
    tracing::info!(count = published.len(), "Generated article pages");

    report.list_pages = write_listings(options, &view, &published, &summaries)?;
    report.tag_pages = write_tag_pages(options, &view, &summaries)?;
    write_index(options, &site, &view, &renderer, &all_posts, &summaries)?;

    write_css_assets(&options.output.join("assets"))?;
    report.static_files = copy_dir(&site.static_dir(), &options.output.join("static"))?;

    Ok(report)
}

/// Loads every article of the site, none when the directory is missing.
pub fn load_site_articles(site: &SiteData) -> Result<Vec<Article>> {
    let dir = site.articles_dir();
    if !dir.is_dir() {
        tracing::warn!(path = %dir.display(), "No articles directory");
        return Ok(Vec::new());
    }
    load_articles(&dir, &site.tags)
}

fn write_article(
    options: &BuildOptions,
    site: &SiteData,
    view: &ViewContext,
    renderer: &MarkdownRenderer,
    all_posts: &PostIndex,
    article: &Article,
) -> Result<()> {
    let linked = extract_article_links(&article.content);
    let related = site.related.for_slug(&article.slug);
    let posts = all_posts.restricted_to(
        linked
            .iter()
            .chain(related.iter())
            .map(String::as_str),
    );

    let context = RenderContext::new(&posts)
        .with_metadata(&site.metadata)
        .with_links(view.links.clone());
    let content = renderer.render(&article.content, &context);
    let related_posts: Vec<PostSummary> = related
        .iter()
        .filter_map(|slug| all_posts.get(slug).cloned())
        .collect();

    tracing::debug!(
        slug = %article.slug,
        linked = linked.len(),
        related = related_posts.len(),
        "Rendering article"
    );
    let page = pages::article::generate(article, &content, &related_posts, view);
    write_page(&options.output, &routes::article(&article.slug), page)
}

/// Writes the all-articles listing and one listing per year.
///
/// Returns the number of pages written.
fn write_listings(
    options: &BuildOptions,
    view: &ViewContext,
    published: &[Article],
    summaries: &[PostSummary],
) -> Result<usize> {
    let years = years_of(published);
    let mut written = write_listing(options, view, summaries, &years, None)?;

    for year in &years {
        let posts: Vec<PostSummary> = published
            .iter()
            .filter(|article| article.year() == Some(*year))
            .map(Article::summary)
            .collect();
        written += write_listing(options, view, &posts, &years, Some(*year))?;
    }

    tracing::info!(pages = written, years = years.len(), "Generated article lists");
    Ok(written)
}

fn write_listing(
    options: &BuildOptions,
    view: &ViewContext,
    posts: &[PostSummary],
    years: &[i32],
    year: Option<i32>,
) -> Result<usize> {
    let total = page_count(posts.len(), POSTS_PER_PAGE).max(1);
    for page in 1..=total {
        let listing = Listing {
            posts,
            years,
            year,
            page,
        };
        let markup = pages::articles::generate(&listing, view);
        write_page(&options.output, &routes::articles(year, page), markup)?;
    }
    Ok(total)
}

/// Years with published posts, newest first.
pub fn years_of(articles: &[Article]) -> Vec<i32> {
    let mut years: Vec<i32> = articles.iter().filter_map(Article::year).collect();
    years.sort_unstable_by(|a, b| b.cmp(a));
    years.dedup();
    years
}

/// Writes the tag index and one page per tag.
///
/// Returns the number of tag detail pages.
fn write_tag_pages(
    options: &BuildOptions,
    view: &ViewContext,
    summaries: &[PostSummary],
) -> Result<usize> {
    let counts = tag_counts(summaries);
    write_page(
        &options.output,
        &routes::tags(),
        pages::tags::generate_list(&counts, view),
    )?;

    for (tag, _) in &counts {
        let posts = pages::tags::posts_with_tag(summaries, &tag.name);
        let markup = pages::tags::generate_detail(tag, &posts, view);
        write_page(&options.output, &routes::tag(&tag.name), markup)?;
    }

    tracing::info!(count = counts.len(), "Generated tag pages");
    Ok(counts.len())
}

fn write_index(
    options: &BuildOptions,
    site: &SiteData,
    view: &ViewContext,
    renderer: &MarkdownRenderer,
    all_posts: &PostIndex,
    summaries: &[PostSummary],
) -> Result<()> {
    let context = RenderContext::new(all_posts)
        .with_metadata(&site.metadata)
        .with_links(view.links.clone());
    let description = renderer.render(&site.index.site_description, &context);
    let skills: Vec<_> = site
        .profile
        .skills
        .iter()
        .map(|skill| (skill, renderer.render(&skill.description, &context)))
        .collect();
    let skill_tags = site.profile.skill_tags();

    let data = IndexPageData {
        index: &site.index,
        description: &description,
        skills: &skills,
        skill_tags: &skill_tags,
        posts: summaries,
    };
    write_page(&options.output, routes::HOME, pages::index::generate(&data, view))
}

/// Writes a page to the output file of its route.
pub fn write_page(output: &Path, route: &str, page: Markup) -> Result<()> {
    let path = output.join(routes::output_path(route));
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create directory {}", parent.display()))?;
    }
    fs::write(&path, page.into_string())
        .with_context(|| format!("Failed to write page {}", path.display()))?;
    tracing::debug!(path = %path.display(), "Generated page");
    Ok(())
}

/// Recursively copies a directory, returning the number of files copied.
///
/// A missing source directory copies nothing.
fn copy_dir(from: &Path, to: &Path) -> Result<usize> {
    if !from.is_dir() {
        return Ok(0);
    }
    fs::create_dir_all(to).with_context(|| format!("Failed to create {}", to.display()))?;

    let mut copied = 0;
    let entries =
        fs::read_dir(from).with_context(|| format!("Failed to read {}", from.display()))?;
    for entry in entries {
        let entry = entry.with_context(|| format!("Failed to list {}", from.display()))?;
        let source = entry.path();
        let target = to.join(entry.file_name());
        if source.is_dir() {
            copied += copy_dir(&source, &target)?;
        } else {
            fs::copy(&source, &target).with_context(|| {
                format!("Failed to copy {} to {}", source.display(), target.display())
            })?;
            copied += 1;
        }
    }
    Ok(copied)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::Tag;
    use tempfile::TempDir;

    fn article(slug: &str, posted_at: &str) -> Article {
        Article {
            slug: slug.to_string(),
            title: format!("Post {}", slug),
            posted_at: posted_at.to_string(),
            updated_at: None,
            tags: vec![Tag::new("rust", "dea584", "")],
            description: String::new(),
            content: String::new(),
        }
    }

    #[test]
    fn test_years_of() {
        let articles = vec![
            article("3", "2024-01-01"),
            article("2", "2022-05-01"),
            article("1", "2024-06-01"),
            article("0", "someday"),
        ];
        assert_eq!(years_of(&articles), vec![2024, 2022]);
    }

    #[test]
    fn test_write_page_creates_directories() {
        // Arrange
        let temp = TempDir::new().expect("Failed to create temp dir");

        // Act
        write_page(temp.path(), "/articles/2023/page-2.html", maud::html! { p { "x" } })
            .expect("Should write page");

        // Assert
        let written = fs::read_to_string(temp.path().join("articles/2023/page-2.html"))
            .expect("Page exists");
        assert_eq!(written, "<p>x</p>");
    }

    #[test]
    fn test_copy_dir() {
        // Arrange
        let temp = TempDir::new().expect("Failed to create temp dir");
        let from = temp.path().join("static");
        fs::create_dir_all(from.join("images")).expect("mkdir");
        fs::write(from.join("favicon.ico"), b"ico").expect("write");
        fs::write(from.join("images/a.png"), b"png").expect("write");

        // Act
        let copied = copy_dir(&from, &temp.path().join("out/static")).expect("Should copy");

        // Assert
        assert_eq!(copied, 2);
        assert!(temp.path().join("out/static/images/a.png").is_file());
    }

    #[test]
    fn test_copy_missing_dir() {
        let temp = TempDir::new().expect("Failed to create temp dir");
        let copied = copy_dir(&temp.path().join("none"), &temp.path().join("out"))
            .expect("Missing directory is not an error");
        assert_eq!(copied, 0);
        assert!(!temp.path().join("out").exists());
    }

    #[test]
    fn test_report_pages() {
        let report = BuildReport {
            articles: 3,
            scheduled: 1,
            list_pages: 2,
            tag_pages: 1,
            static_files: 0,
        };
        assert_eq!(report.pages(), 8);
    }
}
