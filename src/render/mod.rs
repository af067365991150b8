//! Home and listing page section renderers.
//!
//! Each renderer is a pure function from records to an HTML fragment, meant
//! to be injected into a template region. Record fields are interpolated
//! verbatim: the data directory is trusted, or already escaped at load time
//! when `[build] escape_html` is on.
//!
//! | Renderer | Region |
//! |----------|--------|
//! | [`render_about_section`] | `about` |
//! | [`render_experience_section`] | `experience` |
//! | [`render_featured_pubs_section`] | `featured-pubs` |
//! | [`render_software_section`] | `software` |
//! | [`render_blog_section`] | `blog` |
//! | [`render_contact_section`] | `contact` |
//! | [`render_pub_list`] | `publist` |
//!
//! Structured data for crawlers lives in [`jsonld`].

mod about;
mod blog;
mod contact;
mod experience;
pub mod jsonld;
mod publications;
mod software;

pub use about::{ResumeLinks, render_about_section};
pub(crate) use blog::post_href;
pub use blog::{posts_by_date, render_blog_section};
pub use contact::render_contact_section;
pub use experience::render_experience_section;
pub use publications::{
    FEATURED_LIMIT, featured_publications, publications_by_year, render_featured_pubs_section,
    render_pub_list,
};
pub use software::render_software_section;

/// Optional text field, with an empty string treated as absent.
pub(crate) fn non_empty(value: Option<&String>) -> Option<&str> {
    value.map(String::as_str).filter(|s| !s.is_empty())
}
