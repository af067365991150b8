//! Loading and validating the data directory.

use super::{DataError, Publication, SiteData};
use crate::{config::SiteConfig, log};
use anyhow::Result;
use regex::Regex;
use serde::de::DeserializeOwned;
use std::{collections::HashSet, fs, path::Path, sync::LazyLock};

/// Publication ids become directory names, so keep them to a portable set.
static RE_PUBLICATION_ID: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Za-z0-9][A-Za-z0-9._-]*$").unwrap());

impl SiteData {
    /// Read every data file the configured build needs.
    ///
    /// `blog.json` is only read when blog publishing is on; a missing file is
    /// then an error like any other missing document.
    pub fn load(config: &SiteConfig) -> Result<Self> {
        let dir = config.build.data.as_path();
        log!("data"; "loading {}", dir.display());

        let data = Self {
            profile: load_json(&dir.join("profile.json"))?,
            education: load_json(&dir.join("education.json"))?,
            interests: load_json(&dir.join("interests.json"))?,
            experience: load_json(&dir.join("experience.json"))?,
            publications: load_json(&dir.join("publications.json"))?,
            projects: load_json(&dir.join("projects.json"))?,
            blog: if config.publish.blog {
                Some(load_json(&dir.join("blog.json"))?)
            } else {
                None
            },
        };

        validate_publications(&data.publications)?;

        log!(
            "data";
            "{} publications, {} projects, {} positions",
            data.publications.len(),
            data.projects.len(),
            data.experience.len()
        );
        Ok(data)
    }
}

/// Read and deserialize one JSON document.
pub fn load_json<T: DeserializeOwned>(path: &Path) -> Result<T, DataError> {
    let content =
        fs::read_to_string(path).map_err(|err| DataError::Io(path.to_path_buf(), err))?;
    serde_json::from_str(&content).map_err(|err| DataError::Json(path.to_path_buf(), err))
}

/// Check that publication ids are unique and usable as directory names.
pub fn validate_publications(pubs: &[Publication]) -> Result<(), DataError> {
    let mut seen = HashSet::with_capacity(pubs.len());
    for pub_ in pubs {
        if !RE_PUBLICATION_ID.is_match(&pub_.id) {
            return Err(DataError::InvalidId(pub_.id.clone()));
        }
        if !seen.insert(pub_.id.as_str()) {
            return Err(DataError::DuplicateId(pub_.id.clone()));
        }
    }
    Ok(())
}

// ============================================================================
// Tests
// ============================================================================
