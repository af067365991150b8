//! Standalone documents generated from scratch on every build.
//!
//! | Generator | Output |
//! |-----------|--------|
//! | [`generate_pub_page`] | `publications/<id>/index.html` |
//! | [`generate_blog_index_page`] | `blog/index.html` |

mod blog;
mod publication;

pub use blog::{BLOG_INDEX_PATH, featured_video, generate_blog_index_page};
pub use publication::{generate_pub_page, pub_page_path};

/// Search link into the publications listing (`/publications/?q=...`).
fn search_href(query: &str) -> String {
    format!("/publications/?q={}", urlencoding::encode(query))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_search_href_encodes_query() {
        assert_eq!(search_href("Bee"), "/publications/?q=Bee");
        assert_eq!(search_href("A. Bee"), "/publications/?q=A.%20Bee");
        assert_eq!(search_href("graph & nets"), "/publications/?q=graph%20%26%20nets");
        assert_eq!(search_href("Müller"), "/publications/?q=M%C3%BCller");
    }
}
