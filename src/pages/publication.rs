//! Per-publication detail page.

use super::search_href;
use crate::{
    config::SiteConfig,
    data::{Publication, for_html},
    render::jsonld::scholarly_article_jsonld,
};
use std::path::PathBuf;

/// Abstract shown when a publication has none.
const NO_ABSTRACT: &str = "No abstract available.";

/// Output path of a publication page, relative to the site root.
pub fn pub_page_path(pub_: &Publication) -> PathBuf {
    PathBuf::from("publications").join(&pub_.id).join("index.html")
}

/// Generate the complete detail page of one publication.
///
/// Authors and tags link back to the listing's search; the links row has
/// one button per link map entry, in map order. Search links and JSON-LD
/// use the raw record, the markup its HTML form.
pub fn generate_pub_page(pub_: &Publication, site: &SiteConfig) -> String {
    let escape = site.build.escape_html;
    let base_url = site.base.url();
    let shown = for_html(pub_, escape);
    let author = for_html(&site.base.author, escape);
    let description = shown.abstract_text.as_deref().unwrap_or_default();

    let authors_html = pub_
        .authors
        .iter()
        .zip(&shown.authors)
        .map(|(raw, name)| format!(r#"<a href="{}">{name}</a>"#, search_href(raw)))
        .collect::<Vec<_>>()
        .join(", ");
    let links_html: String = shown
        .links
        .iter()
        .map(|(label, url)| {
            format!(
                r#"<a href="{url}" class="btn btn-sm btn-outline" style="margin-right:0.5rem">{label}</a>"#
            )
        })
        .collect();
    let tags_html = if pub_.tags.is_empty() {
        String::new()
    } else {
        let badges = pub_
            .tags
            .iter()
            .zip(&shown.tags)
            .map(|(raw, tag)| format!(r#"<a href="{}" class="badge">{tag}</a>"#, search_href(raw)))
            .collect::<Vec<_>>()
            .join(" ");
        format!(
            r#"
        <div class="pub-tags">
            <strong>Tags:</strong> {badges}
        </div>"#
        )
    };
    let abstract_text = shown
        .abstract_text
        .as_deref()
        .filter(|s| !s.is_empty())
        .unwrap_or(NO_ABSTRACT);
    let jsonld = scholarly_article_jsonld(pub_, base_url);

    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>{title} - Publications</title>
    <meta name="description" content="{description}">
    <meta property="og:type" content="article">
    <meta property="og:url" content="{base_url}/publications/{id}/">
    <meta property="og:title" content="{title} - {author}">
    <meta property="og:description" content="{description}">
    <link rel="stylesheet" href="../../assets/css/base.css">
    <link rel="stylesheet" href="../../assets/css/components.css">
    <link rel="stylesheet" href="https://cdn.jsdelivr.net/npm/bootstrap-icons@1.8.0/font/bootstrap-icons.css">
    {jsonld}
</head>
<body>
    <div id="site-header"></div>

    <main class="container">
        <div id="pub-detail" data-pub-id="{id}" style="padding-top: 2rem;">
            <h1>{title}</h1>
            <div class="pub-meta" style="font-size: 1.1rem; margin-bottom: 1rem;">
                {venue} {year} <span class="badge badge-primary">{kind}</span>
            </div>

            <div class="pub-authors" style="font-size: 1.1rem; margin-bottom: 1rem;">
                <strong>Authors:</strong> {authors_html}
            </div>

            <div class="pub-links" style="margin-bottom: 2rem;">
                {links_html}
            </div>

            <div class="pub-abstract card" style="margin-bottom: 2rem;">
                <h3>Abstract</h3>
                <p>{abstract_text}</p>
            </div>
{tags_html}
            <div style="margin-top: 3rem;">
                <a href="/publications/">&larr; Back to Publications</a>
            </div>
        </div>
    </main>

    <div id="site-footer"></div>

    <script src="../../assets/js/render.js"></script>
    <script src="../../assets/js/publication.js"></script>
</body>
</html>"#,
        title = shown.title,
        id = shown.id,
        venue = shown.venue,
        year = shown.year,
        kind = shown.kind,
    )
}
