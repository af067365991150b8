//! `about` section: photo, identity, links, education and interests.

use super::non_empty;
use crate::data::{EducationEntry, InterestCategory, Profile, ProfileLink};

/// Resume/CV download targets, shown only when resume publishing is on.
#[derive(Debug, Clone, Copy)]
pub struct ResumeLinks<'a> {
    pub resume_pdf: &'a str,
    pub cv_pdf: &'a str,
}

/// Render the about section.
///
/// `resume` is `None` when resume publishing is off; the section then
/// carries `data-publish-resume="false"` and no download links.
pub fn render_about_section(
    profile: &Profile,
    education: &[EducationEntry],
    interests: &[InterestCategory],
    resume: Option<ResumeLinks>,
) -> String {
    let links_html = profile
        .links
        .iter()
        .map(render_icon_link)
        .collect::<Vec<_>>()
        .join("\n");
    let edu_html = education
        .iter()
        .map(render_education)
        .collect::<Vec<_>>()
        .join("\n");
    let interests_html = interests
        .iter()
        .map(render_interests)
        .collect::<Vec<_>>()
        .join("\n");
    let resume_html = resume.map(render_resume_links).unwrap_or_default();

    format!(
        r#"<section id="about" data-publish-resume="{publish_resume}">
        <div class="about-content">
            <div class="about-photo">
                 <img src="assets/img/me.jpg" alt="{name}">
                 <h1 style="font-size: 2rem; margin: 1rem 0 0.5rem;">{name}</h1>
                 <p style="font-size: 1.1rem; color: var(--text-muted); margin-bottom: 1rem;">{role}<br>at {org}</p>
                 <div class="about-links">
{links_html}
                 </div>
                 {resume_html}
            </div>
            <div class="about-details">
                <h2 style="border-bottom: none; margin-bottom: 1rem; margin-top: 0; display: block; line-height: 1;">About Me</h2>
                <p class="lead">{bio}</p>
                <p><i class="bi bi-geo-alt"></i> {location}</p>
                <div class="info-grid" style="margin-top: 3rem; margin-bottom: 0; padding-top: 0;">
                    <div>
                        <div style="font-family: var(--font-mono); font-size: 0.7rem; color: var(--text-muted); letter-spacing: 0.06em; margin-bottom: 1rem;">education</div>
{edu_html}
                    </div>
                    <div>
                        <div style="font-family: var(--font-mono); font-size: 0.7rem; color: var(--text-muted); letter-spacing: 0.06em; margin-bottom: 1rem;">interests</div>
{interests_html}
                    </div>
                </div>
            </div>
        </div>
    </section>"#,
        publish_resume = resume.is_some(),
        name = profile.name,
        role = profile.role,
        org = profile.organization,
        bio = profile.bio,
        location = profile.location,
    )
}

fn render_icon_link(link: &ProfileLink) -> String {
    let icon = non_empty(link.icon.as_ref()).unwrap_or_default();
    format!(
        r#"                <a href="{href}" target="_blank" title="{label}" style="color: var(--accent-color); font-size: 1.5rem; text-decoration: none; transition: transform 0.2s; display: inline-flex; justify-content: center; align-items: center; width: 40px; height: 40px; border-radius: 50%; background: #f8f9fa;">
                    <i class="{icon}"></i>
                </a>"#,
        href = link.href,
        label = link.label,
    )
}

fn render_resume_links(resume: ResumeLinks) -> String {
    format!(
        r#"<div><a href="{resume}" target="_blank" class="resume-link"><i class="bi bi-file-earmark-text"></i> resume.pdf</a><span style="color: var(--border-color); margin: 0 0.35rem;">/</span><a href="{cv}" target="_blank" class="resume-link">cv.pdf</a></div>"#,
        resume = resume.resume_pdf,
        cv = resume.cv_pdf,
    )
}

fn render_education(edu: &EducationEntry) -> String {
    let details_html = non_empty(edu.details.as_ref())
        .map(|details| {
            format!(
                r#" &middot; <span style="font-family: var(--font-mono); color: var(--code-accent); font-size: 0.7rem;">{details}</span>"#
            )
        })
        .unwrap_or_default();

    format!(
        r#"        <div style="margin-bottom: 0.875rem; border-left: 1px solid var(--border-color); padding-left: 0.75rem;">
            <div style="font-size: 0.875rem; font-weight: 500; color: var(--text-color); line-height: 1.35;">{degree}</div>
            <div style="font-size: 0.8rem; color: var(--text-muted);">{school}{details_html}</div>
            <div style="font-family: var(--font-mono); font-size: 0.7rem; color: var(--text-muted); margin-top: 0.1rem;">{year}</div>
        </div>"#,
        degree = edu.degree,
        school = edu.school,
        year = edu.year,
    )
}

fn render_interests(category: &InterestCategory) -> String {
    let badges: String = category
        .items
        .iter()
        .map(|item| format!(r#"<span class="badge">{item}</span>"#))
        .collect();
    format!(
        r#"        <div style="margin-bottom: 0.875rem;">
            <div class="interests-container">{badges}</div>
        </div>"#
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_profile() -> Profile {
        Profile {
            name: "Ada Quill".into(),
            role: "Research Scientist".into(),
            organization: "Northwind Labs".into(),
            bio: "Works on graph learning.".into(),
            location: "Boulder, CO".into(),
            links: vec![
                ProfileLink {
                    href: "https://scholar.example/ada".into(),
                    label: "Scholar".into(),
                    icon: Some("ai ai-google-scholar".into()),
                },
                ProfileLink {
                    href: "mailto:ada@quill.dev".into(),
                    label: "Email".into(),
                    icon: None,
                },
            ],
        }
    }

    fn sample_education() -> Vec<EducationEntry> {
        vec![
            EducationEntry {
                degree: "PhD Computer Science".into(),
                school: "Mountain University".into(),
                year: "2019 - 2024".into(),
                details: Some("NSF Fellow".into()),
            },
            EducationEntry {
                degree: "BS Physics".into(),
                school: "Coastal College".into(),
                year: "2015".into(),
                details: None,
            },
        ]
    }

    fn sample_interests() -> Vec<InterestCategory> {
        vec![
            InterestCategory {
                category: "research".into(),
                items: vec!["Graph Neural Nets".into(), "Genomics".into()],
            },
            InterestCategory {
                category: "hobbies".into(),
                items: vec!["Bouldering".into()],
            },
        ]
    }

    #[test]
    fn test_about_contains_every_field_once() {
        let html = render_about_section(
            &sample_profile(),
            &sample_education(),
            &sample_interests(),
            None,
        );

        for link in &sample_profile().links {
            assert_eq!(html.matches(link.href.as_str()).count(), 1, "{}", link.href);
            assert_eq!(html.matches(link.label.as_str()).count(), 1, "{}", link.label);
        }
        for edu in sample_education() {
            assert_eq!(html.matches(edu.degree.as_str()).count(), 1, "{}", edu.degree);
            assert_eq!(html.matches(edu.school.as_str()).count(), 1, "{}", edu.school);
            assert_eq!(html.matches(edu.year.as_str()).count(), 1, "{}", edu.year);
        }
        for item in sample_interests().iter().flat_map(|c| c.items.iter()) {
            assert_eq!(html.matches(item.as_str()).count(), 1, "{item}");
        }
    }

    #[test]
    fn test_about_identity() {
        let html = render_about_section(&sample_profile(), &[], &[], None);

        assert!(html.starts_with(r#"<section id="about" data-publish-resume="false">"#));
        assert!(html.contains("Research Scientist<br>at Northwind Labs"));
        assert!(html.contains(r#"<p class="lead">Works on graph learning.</p>"#));
        assert!(html.contains("Boulder, CO"));
        assert!(html.ends_with("</section>"));
    }

    #[test]
    fn test_about_link_without_icon_renders_empty_class() {
        let html = render_about_section(&sample_profile(), &[], &[], None);
        assert!(html.contains(r#"<i class="ai ai-google-scholar"></i>"#));
        assert!(html.contains(r#"<i class=""></i>"#));
    }

    #[test]
    fn test_about_education_details_optional() {
        let html = render_about_section(&sample_profile(), &sample_education(), &[], None);
        assert!(html.contains("Mountain University &middot; <span"));
        assert!(html.contains("NSF Fellow"));
        assert!(html.contains(r#"Coastal College</div>"#));
    }

    #[test]
    fn test_about_interest_badges_in_order() {
        let html = render_about_section(&sample_profile(), &[], &sample_interests(), None);
        assert!(html.contains(
            r#"<div class="interests-container"><span class="badge">Graph Neural Nets</span><span class="badge">Genomics</span></div>"#
        ));
    }

    #[test]
    fn test_about_resume_links() {
        let resume = ResumeLinks {
            resume_pdf: "assets/pdf/ada_resume.pdf",
            cv_pdf: "assets/pdf/ada_cv.pdf",
        };
        let html = render_about_section(&sample_profile(), &[], &[], Some(resume));

        assert!(html.contains(r#"data-publish-resume="true""#));
        assert!(html.contains(r#"href="assets/pdf/ada_resume.pdf""#));
        assert!(html.contains(r#"href="assets/pdf/ada_cv.pdf""#));

        let html = render_about_section(&sample_profile(), &[], &[], None);
        assert!(!html.contains("resume-link"));
    }
}
