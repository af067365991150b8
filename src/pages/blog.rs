//! Blog landing page.

use crate::{
    config::SiteConfig,
    data::{Blog, BlogPlatform, for_html},
    render::{post_href, posts_by_date},
};

/// Output path of the blog index, relative to the site root.
pub const BLOG_INDEX_PATH: &str = "blog/index.html";

/// Video embedded on the blog page: the first platform carrying one.
pub fn featured_video(platforms: &[BlogPlatform]) -> Option<&str> {
    platforms
        .iter()
        .filter_map(|p| p.featured_video_id.as_deref())
        .find(|id| !id.is_empty())
}

/// Generate the blog index: platform links, an optional featured video and
/// the post list (omitted when there are no posts).
pub fn generate_blog_index_page(blog: &Blog, site: &SiteConfig) -> String {
    let escape = site.build.escape_html;
    let blog = for_html(blog, escape);
    let author = for_html(&site.base.author, escape);

    let platform_links: String = blog
        .platforms
        .iter()
        .map(|p| {
            format!(
                r#"<a href="{url}" target="_blank" style="display: inline-flex; align-items: center; gap: 0.4rem; color: var(--text-muted); font-size: 0.875rem; font-family: var(--font-mono);"><i class="{icon}"></i> {name} &nearr;</a>
            "#,
                url = p.url,
                icon = p.icon,
                name = p.name,
            )
        })
        .collect();

    let featured_embed = featured_video(&blog.platforms)
        .map(|video_id| {
            format!(
                r#"        <div style="margin-top: 2.5rem;">
            <div style="font-family: var(--font-mono); font-size: 0.7rem; color: var(--text-muted); letter-spacing: 0.06em; margin-bottom: 0.75rem;">featured</div>
            <div style="position: relative; padding-bottom: 56.25%; height: 0; overflow: hidden; border-radius: var(--border-radius); border: 1px solid var(--border-color);">
                <iframe src="https://www.youtube.com/embed/{video_id}" title="Featured video" frameborder="0" allow="accelerometer; autoplay; clipboard-write; encrypted-media; gyroscope; picture-in-picture" allowfullscreen style="position: absolute; top: 0; left: 0; width: 100%; height: 100%;"></iframe>
            </div>
        </div>
"#
            )
        })
        .unwrap_or_default();

    let posts_section = if blog.posts.is_empty() {
        String::new()
    } else {
        let rows: String = posts_by_date(&blog.posts)
            .into_iter()
            .map(|post| {
                format!(
                    r#"        <div style="display: flex; align-items: baseline; gap: 1.5rem; padding: 0.6rem 0; border-bottom: 1px solid var(--border-color);">
            <span style="font-family: var(--font-mono); font-size: 0.75rem; color: var(--text-muted); white-space: nowrap;">{date}</span>
            <a href="{href}" target="_blank" style="color: var(--text-color); font-size: 0.95rem;">{title} &nearr;</a>
        </div>
"#,
                    date = post.date,
                    href = post_href(post, ""),
                    title = post.title,
                )
            })
            .collect();
        format!(
            r#"        <div style="margin-top: 2.5rem;">
            <div style="font-family: var(--font-mono); font-size: 0.7rem; color: var(--text-muted); letter-spacing: 0.06em; margin-bottom: 0.75rem;">posts</div>
{rows}        </div>
"#
        )
    };

    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>{name} - {author}</title>
    <meta name="description" content="{tagline}">
    <meta property="og:type" content="website">
    <meta property="og:url" content="{base_url}/blog/">
    <meta property="og:title" content="{name} - {author}">
    <meta property="og:description" content="{tagline}">
    <link rel="stylesheet" href="../assets/css/base.css">
    <link rel="stylesheet" href="../assets/css/components.css">
    <link rel="stylesheet" href="https://cdn.jsdelivr.net/npm/bootstrap-icons@1.8.0/font/bootstrap-icons.css">
</head>
<body>
    <div id="site-header"></div>

    <main class="container">
        <div style="padding-top: 2rem; max-width: 700px;">
            <h1>{name}</h1>
            <p style="color: var(--text-muted); margin-bottom: 1.5rem;">{tagline}</p>
            <div style="display: flex; gap: 1.5rem; flex-wrap: wrap;">
            {platform_links}</div>
{featured_embed}{posts_section}        </div>
    </main>

    <div id="site-footer"></div>

    <script src="../assets/js/render.js"></script>
</body>
</html>"#,
        name = blog.name,
        tagline = blog.tagline,
        base_url = site.base.url(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::BlogPost;

    fn site() -> SiteConfig {
        let mut site = SiteConfig::default();
        site.base.url = "https://ada.github.io".into();
        site.base.author = "Ada Quill".into();
        site
    }

    fn platform(name: &str, video: Option<&str>) -> BlogPlatform {
        BlogPlatform {
            name: name.into(),
            url: format!("https://{}.example/ada", name.to_lowercase()),
            icon: format!("bi bi-{}", name.to_lowercase()),
            featured_video_id: video.map(Into::into),
        }
    }

    fn post(id: &str, date: &str) -> BlogPost {
        BlogPost {
            id: id.into(),
            title: format!("Post {id}"),
            date: date.into(),
            ..Default::default()
        }
    }

    #[test]
    fn test_featured_video_first_wins() {
        let platforms = vec![
            platform("Medium", None),
            platform("YouTube", Some("abc123")),
            platform("Vimeo", Some("zzz")),
        ];
        assert_eq!(featured_video(&platforms), Some("abc123"));
        assert_eq!(featured_video(&platforms[..1]), None);
        assert_eq!(featured_video(&[platform("Empty", Some(""))]), None);
    }

    #[test]
    fn test_blog_index_head() {
        let blog = Blog {
            name: "Notes".into(),
            tagline: "Things I learned".into(),
            ..Default::default()
        };
        let html = generate_blog_index_page(&blog, &site());

        assert!(html.contains("<title>Notes - Ada Quill</title>"));
        assert!(html.contains(r#"<meta property="og:url" content="https://ada.github.io/blog/">"#));
        assert!(html.contains(r#"<meta name="description" content="Things I learned">"#));
        assert!(html.contains("<h1>Notes</h1>"));
    }

    #[test]
    fn test_blog_index_platforms_and_embed() {
        let blog = Blog {
            platforms: vec![platform("Medium", None), platform("YouTube", Some("abc123"))],
            ..Default::default()
        };
        let html = generate_blog_index_page(&blog, &site());

        assert!(html.contains(r#"<i class="bi bi-medium"></i> Medium &nearr;</a>"#));
        assert!(html.contains(r#"href="https://youtube.example/ada""#));
        assert_eq!(html.matches("<iframe").count(), 1);
        assert!(html.contains("https://www.youtube.com/embed/abc123"));
    }

    #[test]
    fn test_blog_index_without_posts_or_video() {
        let html = generate_blog_index_page(&Blog::default(), &site());

        assert!(html.contains("<title>Blog - Ada Quill</title>"));
        assert!(!html.contains(">posts</div>"));
        assert!(!html.contains("<iframe"));
    }

    #[test]
    fn test_blog_index_escapes_when_configured() {
        let mut site = site();
        site.build.escape_html = true;
        let blog = Blog {
            name: "Bits & Bobs".into(),
            posts: vec![post("<b>", "2024-01-01")],
            ..Default::default()
        };
        let html = generate_blog_index_page(&blog, &site);

        assert!(html.contains("<title>Bits &amp; Bobs - Ada Quill</title>"));
        assert!(html.contains("Post &lt;b&gt; &nearr;"));
        assert!(!html.contains("<b>"));
    }

    #[test]
    fn test_blog_index_posts_newest_first() {
        let mut remote = post("remote", "2024-05-01");
        remote.url = Some("https://medium.com/@ada/remote".into());
        let blog = Blog {
            posts: vec![post("old", "2023-01-01"), remote],
            ..Default::default()
        };
        let html = generate_blog_index_page(&blog, &site());

        assert!(html.contains(">posts</div>"));
        assert!(html.contains(r#"<a href="https://medium.com/@ada/remote" target="_blank""#));
        assert!(html.contains(r#"<a href="old/" target="_blank""#));
        assert!(html.find("Post remote").unwrap() < html.find("Post old").unwrap());
    }
}
