//! `experience` section: one collapsible card per position.

use super::non_empty;
use crate::data::ExperienceEntry;

/// Render the work experience section, positions in source order.
///
/// Current positions (period mentions "present") get the `current` class.
pub fn render_experience_section(experience: &[ExperienceEntry]) -> String {
    let items = experience
        .iter()
        .map(render_experience_item)
        .collect::<Vec<_>>()
        .join("\n");

    format!(
        r#"<section id="experience">
        <h2>Work Experience</h2>
        <div class="experience-list">
{items}
        </div>
    </section>"#
    )
}

fn render_experience_item(exp: &ExperienceEntry) -> String {
    let current_class = if exp.is_current() { " current" } else { "" };
    let level = non_empty(exp.level.as_ref())
        .map(|level| format!(" &middot; {level}"))
        .unwrap_or_default();
    let details = exp
        .details
        .iter()
        .map(|d| format!("                    <li>{d}</li>"))
        .collect::<Vec<_>>()
        .join("\n");

    format!(
        r#"        <div class="experience-item{current_class}">
            <div class="experience-card">
                <div style="display: flex; justify-content: space-between; flex-wrap: wrap; margin-bottom: 0.5rem;">
                    <h3 style="margin: 0; font-size: 1.4rem;">{role}</h3>
                    <span style="color: var(--text-muted); font-weight: 600;">{period}</span>
                </div>
                <div style="margin-bottom: 1rem; color: var(--accent-color); font-weight: 500;">
                    {company} &middot; {location}{level}
                </div>
                <ul class="experience-details">
{details}
                </ul>
                <button class="experience-toggle" onclick="toggleExperience(this)">Show Details</button>
            </div>
        </div>"#,
        role = exp.role,
        period = exp.period,
        company = exp.company,
        location = exp.location,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(role: &str, period: &str) -> ExperienceEntry {
        ExperienceEntry {
            role: role.into(),
            company: "Acme".into(),
            location: "Remote".into(),
            period: period.into(),
            level: None,
            details: vec![],
        }
    }

    #[test]
    fn test_current_class_per_item() {
        let html = render_experience_section(&[
            entry("Staff Engineer", "2023 - Present"),
            entry("Intern", "2019 - 2020"),
        ]);

        assert_eq!(html.matches(r#"class="experience-item current""#).count(), 1);
        assert_eq!(html.matches(r#"class="experience-item""#).count(), 1);
        let current = html.find("experience-item current").unwrap();
        let past = html.find(r#"experience-item""#).unwrap();
        assert!(current < past);
    }

    #[test]
    fn test_current_detection_is_case_insensitive() {
        let html = render_experience_section(&[entry("Lead", "2021 - PRESENT")]);
        assert!(html.contains("experience-item current"));
    }

    #[test]
    fn test_level_optional() {
        let mut exp = entry("Engineer", "2020 - 2022");
        let html = render_experience_section(std::slice::from_ref(&exp));
        assert!(html.contains("Acme &middot; Remote\n"));

        exp.level = Some("L5".into());
        let html = render_experience_section(&[exp]);
        assert!(html.contains("Acme &middot; Remote &middot; L5\n"));
    }

    #[test]
    fn test_details_in_order() {
        let mut exp = entry("Engineer", "2020 - 2022");
        exp.details = vec!["Built the pipeline".into(), "Mentored interns".into()];
        let html = render_experience_section(&[exp]);

        assert!(html.contains(
            "                    <li>Built the pipeline</li>\n                    <li>Mentored interns</li>"
        ));
    }

    #[test]
    fn test_empty_experience() {
        let html = render_experience_section(&[]);
        assert!(html.starts_with(r#"<section id="experience">"#));
        assert!(!html.contains("experience-item"));
    }
}
