//! Marker-delimited block injection.
//!
//! Template documents (HTML pages, the shared nav script) carry named
//! regions delimited by sentinel comments. Each build replaces the whole
//! region, sentinels included, with freshly emitted sentinels around the new
//! content:
//!
//! ```text
//! <!-- BUILD:about -->          <!-- BEGIN:about -->
//! ...any lines...               ...any lines...
//! <!-- /BUILD:about -->         <!-- END:about -->
//! ```
//!
//! Both spellings are understood. A document sticks to one spelling per
//! name; the spelling of the earliest region is the one re-emitted.
//!
//! Matching is non-greedy: a region ends at the first closing sentinel after
//! its opening one. An opening sentinel with no closing sentinel after it is
//! not a region.

use crate::log;
use std::ops::Range;

/// Sentinel spelling.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MarkerStyle {
    /// `<!-- BUILD:name -->` … `<!-- /BUILD:name -->`
    Build,
    /// `<!-- BEGIN:name -->` … `<!-- END:name -->`
    BeginEnd,
}

impl MarkerStyle {
    const ALL: [Self; 2] = [Self::Build, Self::BeginEnd];

    pub fn open(self, name: &str) -> String {
        match self {
            Self::Build => format!("<!-- BUILD:{name} -->"),
            Self::BeginEnd => format!("<!-- BEGIN:{name} -->"),
        }
    }

    pub fn close(self, name: &str) -> String {
        match self {
            Self::Build => format!("<!-- /BUILD:{name} -->"),
            Self::BeginEnd => format!("<!-- END:{name} -->"),
        }
    }

    /// Full block as emitted by the injector.
    pub fn block(self, name: &str, content: &str) -> String {
        format!("{}\n{content}\n{}", self.open(name), self.close(name))
    }
}

/// Outcome of a replacement pass.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Injection {
    /// Patched document (unchanged when `count == 0`).
    pub text: String,
    /// Number of regions replaced.
    pub count: usize,
}

// ============================================================================
// Public API
// ============================================================================

/// Replace every `name` region in `doc` and warn when there is none.
///
/// A missing marker never fails the build: the document comes back as is.
pub fn inject_block(doc: &str, name: &str, content: &str) -> String {
    let Injection { text, count } = replace_block(doc, name, content);
    if count == 0 {
        log!("warn"; "BUILD:{name} marker not found");
    }
    text
}

/// Replace every `name` region in `doc` with `content`.
pub fn replace_block(doc: &str, name: &str, content: &str) -> Injection {
    let Some((style, regions)) = locate(doc, name) else {
        return Injection {
            text: doc.to_owned(),
            count: 0,
        };
    };

    let block = style.block(name, content);
    let mut text = String::with_capacity(doc.len() + block.len());
    let mut cursor = 0;
    for region in &regions {
        text.push_str(&doc[cursor..region.start]);
        text.push_str(&block);
        cursor = region.end;
    }
    text.push_str(&doc[cursor..]);

    Injection {
        text,
        count: regions.len(),
    }
}

/// Current body of the first `name` region, without the framing newlines
/// the injector emits.
pub fn extract_block<'a>(doc: &'a str, name: &str) -> Option<&'a str> {
    let (style, regions) = locate(doc, name)?;
    let region = regions.first()?;
    let body = &doc[region.start + style.open(name).len()..region.end - style.close(name).len()];
    let body = body.strip_prefix('\n').unwrap_or(body);
    Some(body.strip_suffix('\n').unwrap_or(body))
}

// ============================================================================
// Scanner
// ============================================================================

/// Pick the spelling whose first region starts earliest, with all its regions.
fn locate(doc: &str, name: &str) -> Option<(MarkerStyle, Vec<Range<usize>>)> {
    MarkerStyle::ALL
        .into_iter()
        .map(|style| (style, find_regions(doc, &style.open(name), &style.close(name))))
        .filter(|(_, regions)| !regions.is_empty())
        .min_by_key(|(_, regions)| regions[0].start)
}

/// Byte ranges of all `open … close` regions, sentinels included.
fn find_regions(doc: &str, open: &str, close: &str) -> Vec<Range<usize>> {
    let mut regions = Vec::new();
    let mut pos = 0;

    while let Some(offset) = doc[pos..].find(open) {
        let start = pos + offset;
        let body_start = start + open.len();
        let Some(close_offset) = doc[body_start..].find(close) else {
            break;
        };
        let end = body_start + close_offset + close.len();
        regions.push(start..end);
        pos = end;
    }

    regions
}

// ============================================================================
// Tests
// ============================================================================
