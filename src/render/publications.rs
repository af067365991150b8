//! Publication renderers: the home page highlight list and the full listing.

use super::non_empty;
use crate::data::Publication;

/// Maximum number of featured publications on the home page.
pub const FEATURED_LIMIT: usize = 5;

/// Flagged publications, first [`FEATURED_LIMIT`] in source order.
pub fn featured_publications(pubs: &[Publication]) -> impl Iterator<Item = &Publication> {
    pubs.iter().filter(|p| p.featured).take(FEATURED_LIMIT)
}

/// Publications by descending year; equal years keep their source order.
pub fn publications_by_year(pubs: &[Publication]) -> Vec<&Publication> {
    let mut sorted: Vec<_> = pubs.iter().collect();
    sorted.sort_by(|a, b| b.year.cmp(&a.year));
    sorted
}

// ============================================================================
// Featured (home page)
// ============================================================================

/// Render the `featured-pubs` section of the home page.
pub fn render_featured_pubs_section(pubs: &[Publication]) -> String {
    let items = featured_publications(pubs)
        .map(render_featured_item)
        .collect::<Vec<_>>()
        .join("\n");

    format!(
        r#"<section id="featured-pubs">
        <div class="section-header">
            <h2>Featured Publications</h2>
            <a href="publications/index.html" class="btn btn-sm btn-outline">View All</a>
        </div>
{items}
    </section>"#
    )
}

fn render_featured_item(p: &Publication) -> String {
    let links: String = p
        .links
        .iter()
        .map(|(label, url)| format!(r#"<a href="{url}" class="badge">{label}</a>"#))
        .collect();

    format!(
        r#"        <div class="pub-item">
            <a href="publications/{id}/" class="pub-title">{title}</a>
            <div class="pub-authors">{authors}</div>
            <div class="pub-meta">
                {venue} {year}
                <span class="badge badge-primary">{kind}</span>
            </div>
            <div class="pub-links">
                {links}
            </div>
        </div>"#,
        id = p.id,
        title = p.title,
        authors = p.authors.join(", "),
        venue = p.venue,
        year = p.year,
        kind = p.kind,
    )
}

// ============================================================================
// Full listing (publications/index.html)
// ============================================================================

/// Render the `publist` region of the publications listing page.
pub fn render_pub_list(pubs: &[Publication]) -> String {
    let items = publications_by_year(pubs)
        .into_iter()
        .map(render_list_item)
        .collect::<Vec<_>>()
        .join("\n");

    format!(
        r#"<div id="pub-list">
{items}
        </div>"#
    )
}

fn render_list_item(p: &Publication) -> String {
    let paper_btn = p
        .links
        .get("paper")
        .map(|url| {
            format!(
                r#"<a href="{url}" class="btn btn-sm btn-outline" target="_blank" style="margin-right: 0.5rem;">Paper</a>"#
            )
        })
        .unwrap_or_default();
    let code_btn = p
        .links
        .get("code")
        .map(|url| format!(r#"<a href="{url}" class="btn btn-sm btn-outline" target="_blank">Code</a>"#))
        .unwrap_or_default();

    format!(
        r#"        <div class="pub-item">
            <a href="{id}/" class="pub-title">{title}</a>
            <div class="pub-authors">{authors}</div>
            <div class="pub-meta">
                {venue} {year}
            </div>
            <div class="pub-abstract" style="margin-bottom: 0.5rem; color: var(--text-color);">
                {abstract_text}
            </div>
            <div class="pub-links" style="margin-top:0.5rem">
                {paper_btn}{code_btn}
            </div>
        </div>"#,
        id = p.id,
        title = p.title,
        authors = p.authors.join(", "),
        venue = p.venue,
        year = p.year,
        abstract_text = non_empty(p.abstract_text.as_ref()).unwrap_or_default(),
    )
}

// ============================================================================
// Tests
// ============================================================================
