//! Site build orchestration.
//!
//! A build is a fixed sequence of steps. Each step turns the configuration
//! and the loaded data into artifacts without touching the filesystem; the
//! executor then carries the artifacts out in order.
//!
//! # Architecture
//!
//! ```text
//! build_site()
//!     │
//!     ├── BuildPlan::from_config()   ──► steps enabled by [publish]
//!     │
//!     └── for each step
//!             │
//!             ├── Step::artifacts()  ──► Write { path, contents }
//!             │                          Patch { path, blocks }
//!             │
//!             └── execute()          ──► minify + write, or read + inject + write
//! ```
//!
//! There is no rollback: a failing step leaves earlier writes in place.

use crate::{
    config::SiteConfig,
    data::{SiteData, for_html},
    generator::sitemap::generate_sitemap,
    inject::{extract_block, inject_block},
    log,
    pages::{BLOG_INDEX_PATH, generate_blog_index_page, generate_pub_page, pub_page_path},
    render::{
        ResumeLinks, jsonld::person_jsonld, render_about_section, render_blog_section,
        render_contact_section, render_experience_section, render_featured_pubs_section,
        render_pub_list, render_software_section,
    },
    utils::minify::{MinifyType, minify},
};
use anyhow::{Context, Result};
use chrono::{Local, NaiveDate};
use std::{
    fs,
    path::{Path, PathBuf},
};

/// Nav entry patched into the shared script when the blog is published.
///
/// `${basePath}` is resolved by the script at runtime.
const BLOG_NAV_ITEM: &str = r#"<li><a href="${basePath}blog/index.html">Blog</a></li>"#;

// ============================================================================
// Plan
// ============================================================================

/// One unit of build work.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    /// One detail page per publication.
    PublicationPages,
    /// Every region of the home document.
    HomePage,
    /// The blog landing page.
    BlogIndex,
    /// The blog entry of the shared navigation script.
    NavScript,
    /// The full list on the publications page.
    PublicationList,
    /// `sitemap.xml`.
    Sitemap,
}

/// Ordered steps of one build.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BuildPlan {
    steps: Vec<Step>,
}

impl BuildPlan {
    pub fn from_config(config: &SiteConfig) -> Self {
        let mut steps = vec![Step::PublicationPages, Step::HomePage];
        if config.publish.blog {
            steps.push(Step::BlogIndex);
        }
        steps.extend([Step::NavScript, Step::PublicationList, Step::Sitemap]);
        Self { steps }
    }

    pub fn steps(&self) -> &[Step] {
        &self.steps
    }
}

// ============================================================================
// Artifacts
// ============================================================================

/// Format of a generated document, for minification.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Format {
    Html,
    Xml,
}

/// Filesystem effect of a step.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Artifact {
    /// Generate a document from scratch, creating parent directories.
    Write {
        path: PathBuf,
        contents: String,
        format: Format,
    },
    /// Replace named regions of an existing document, in order.
    Patch {
        path: PathBuf,
        blocks: Vec<(&'static str, String)>,
    },
}

impl Step {
    /// Artifacts of this step. Pure: nothing is read or written here.
    pub fn artifacts(self, config: &SiteConfig, data: &SiteData, today: NaiveDate) -> Vec<Artifact> {
        let root = config.get_root();
        match self {
            Self::PublicationPages => data
                .publications
                .iter()
                .map(|pub_| Artifact::Write {
                    path: root.join(pub_page_path(pub_)),
                    contents: generate_pub_page(pub_, config),
                    format: Format::Html,
                })
                .collect(),
            Self::HomePage => vec![Artifact::Patch {
                path: config.build.home.clone(),
                blocks: home_blocks(config, data),
            }],
            Self::BlogIndex => data
                .blog
                .iter()
                .map(|blog| Artifact::Write {
                    path: root.join(BLOG_INDEX_PATH),
                    contents: generate_blog_index_page(blog, config),
                    format: Format::Html,
                })
                .collect(),
            Self::NavScript => {
                let item = if config.publish.blog { BLOG_NAV_ITEM } else { "" };
                vec![Artifact::Patch {
                    path: config.build.script.clone(),
                    blocks: vec![("blog-nav", item.to_owned())],
                }]
            }
            Self::PublicationList => {
                let pubs = for_html(&data.publications, config.build.escape_html);
                vec![Artifact::Patch {
                    path: config.build.publications.clone(),
                    blocks: vec![("publist", render_pub_list(&pubs))],
                }]
            }
            Self::Sitemap => vec![Artifact::Write {
                path: config.build.sitemap.clone(),
                contents: generate_sitemap(
                    &data.publications,
                    config.publish.blog,
                    config.base.url(),
                    today,
                ),
                format: Format::Xml,
            }],
        }
    }
}

/// Home document regions, in injection order.
///
/// JSON-LD is built from the raw records; every other region from their
/// HTML form.
fn home_blocks(config: &SiteConfig, raw: &SiteData) -> Vec<(&'static str, String)> {
    let data = for_html(raw, config.build.escape_html);
    let resume = config.publish.resume.then(|| ResumeLinks {
        resume_pdf: &config.publish.resume_pdf,
        cv_pdf: &config.publish.cv_pdf,
    });
    let blog = match (&data.blog, config.publish.blog) {
        (Some(blog), true) => render_blog_section(&blog.posts),
        _ => String::new(),
    };

    vec![
        ("jsonld", person_jsonld(&raw.profile, &raw.education, config.base.url())),
        (
            "about",
            render_about_section(&data.profile, &data.education, &data.interests, resume),
        ),
        ("experience", render_experience_section(&data.experience)),
        ("featured-pubs", render_featured_pubs_section(&data.publications)),
        ("software", render_software_section(&data.projects)),
        ("blog", blog),
        ("contact", render_contact_section(&data.profile)),
    ]
}

// ============================================================================
// Execution
// ============================================================================

/// Build the whole site for today's date.
pub fn build_site(config: &SiteConfig, data: &SiteData) -> Result<()> {
    run_plan(&BuildPlan::from_config(config), config, data, Local::now().date_naive())
}

/// Execute every step of `plan`, stopping at the first failure.
pub fn run_plan(plan: &BuildPlan, config: &SiteConfig, data: &SiteData, today: NaiveDate) -> Result<()> {
    log!(
        "build";
        "blog publishing {}, resume publishing {}",
        on_off(config.publish.blog),
        on_off(config.publish.resume)
    );

    for &step in plan.steps() {
        for artifact in step.artifacts(config, data, today) {
            execute(&artifact, config)?;
        }
    }

    log!("done"; "{} publications", data.publications.len());
    Ok(())
}

fn execute(artifact: &Artifact, config: &SiteConfig) -> Result<()> {
    match artifact {
        Artifact::Write {
            path,
            contents,
            format,
        } => write_document(path, contents, *format, config),
        Artifact::Patch { path, blocks } => patch_document(path, blocks, config),
    }
}

fn write_document(path: &Path, contents: &str, format: Format, config: &SiteConfig) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create directory {}", parent.display()))?;
    }

    let bytes = match format {
        Format::Html => minify(MinifyType::Html(contents.as_bytes()), config),
        Format::Xml => minify(MinifyType::Xml(contents.as_bytes()), config),
    };
    fs::write(path, &*bytes).with_context(|| format!("Failed to write {}", path.display()))?;

    log!("write"; "{}", display_path(path, config));
    Ok(())
}

/// Inject `blocks` into the document at `path`, one after another.
///
/// Regions that are missing only produce a warning; the document is always
/// written back.
fn patch_document(path: &Path, blocks: &[(&str, String)], config: &SiteConfig) -> Result<()> {
    let mut doc =
        fs::read_to_string(path).with_context(|| format!("Failed to read {}", path.display()))?;

    let mut changed = Vec::new();
    for (name, content) in blocks {
        let stale = extract_block(&doc, name).is_some_and(|body| body != content.as_str());
        doc = inject_block(&doc, name, content);
        if stale {
            changed.push(*name);
        }
    }

    fs::write(path, &doc).with_context(|| format!("Failed to write {}", path.display()))?;

    if changed.is_empty() {
        log!("patch"; "{} unchanged", display_path(path, config));
    } else {
        log!("patch"; "{} [{}]", display_path(path, config), changed.join(", "));
    }
    Ok(())
}

/// `path` relative to the site root, for log lines.
fn display_path(path: &Path, config: &SiteConfig) -> String {
    path.strip_prefix(config.get_root())
        .unwrap_or(path)
        .display()
        .to_string()
}

const fn on_off(flag: bool) -> &'static str {
    if flag { "on" } else { "off" }
}

// ============================================================================
// Tests
// ============================================================================
