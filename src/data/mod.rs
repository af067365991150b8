//! Site records read from the data directory.
//!
//! Every record is loaded once per run and never mutated afterwards. HTML
//! escaping, when configured, works on copies (see [`for_html`]).
//!
//! # Data Files
//!
//! | File | Record |
//! |------|--------|
//! | `profile.json` | [`Profile`] |
//! | `education.json` | list of [`EducationEntry`] |
//! | `interests.json` | list of [`InterestCategory`] |
//! | `experience.json` | list of [`ExperienceEntry`] |
//! | `publications.json` | list of [`Publication`] |
//! | `projects.json` | list of [`Project`] |
//! | `blog.json` | [`Blog`], read only when blog publishing is on |

mod error;
mod escape;
mod load;
mod types;

pub use error::DataError;
pub use escape::for_html;
pub use load::{load_json, validate_publications};
pub use types::{
    Blog, BlogPlatform, BlogPost, EducationEntry, ExperienceEntry, InterestCategory, LinkMap,
    Profile, ProfileLink, Project, Publication,
};

/// Everything a build needs, loaded in one go.
#[derive(Debug, Clone, Default)]
pub struct SiteData {
    pub profile: Profile,
    pub education: Vec<EducationEntry>,
    pub interests: Vec<InterestCategory>,
    pub experience: Vec<ExperienceEntry>,
    pub publications: Vec<Publication>,
    pub projects: Vec<Project>,
    pub blog: Option<Blog>,
}
