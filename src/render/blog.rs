//! `blog` section of the home page.

use super::non_empty;
use crate::data::BlogPost;

/// Posts by descending ISO date; equal dates keep their source order.
pub fn posts_by_date(posts: &[BlogPost]) -> Vec<&BlogPost> {
    let mut sorted: Vec<_> = posts.iter().collect();
    sorted.sort_by(|a, b| b.date.cmp(&a.date));
    sorted
}

/// Where a post lives: its external url, or its slot `<id>/` under `dir`.
pub(crate) fn post_href(post: &BlogPost, dir: &str) -> String {
    non_empty(post.url.as_ref())
        .map(str::to_owned)
        .unwrap_or_else(|| format!("{dir}{}/", post.id))
}

/// Render the home page blog section, posts in source order.
pub fn render_blog_section(posts: &[BlogPost]) -> String {
    let items = posts
        .iter()
        .map(|post| {
            let tags_html: String = post
                .tags
                .iter()
                .map(|t| format!(r#"<span class="badge">{t}</span>"#))
                .collect();
            format!(
                r#"        <div class="pub-item">
            <a href="{href}" class="pub-title">{title}</a>
            <div class="pub-meta">{date}</div>
            <p style="color: var(--text-muted); font-size: 0.95rem; margin: 0.5rem 0;">{summary}</p>
            <div style="margin-top: 0.5rem;">{tags_html}</div>
        </div>"#,
                href = post_href(post, "blog/"),
                title = post.title,
                date = post.date,
                summary = post.summary,
            )
        })
        .collect::<Vec<_>>()
        .join("\n");

    format!(
        r#"<section id="blog">
        <div class="section-header">
            <h2>Blog</h2>
        </div>
{items}
    </section>"#
    )
}
