//! `software` section: project cards.

use super::non_empty;
use crate::data::Project;

/// Render the software/projects grid, projects in source order.
pub fn render_software_section(projects: &[Project]) -> String {
    let items = projects
        .iter()
        .map(render_project_card)
        .collect::<Vec<_>>()
        .join("\n");

    format!(
        r#"<section id="software">
        <h2>Software / Projects</h2>
        <div class="grid">
{items}
        </div>
    </section>"#
    )
}

fn render_project_card(p: &Project) -> String {
    let img = non_empty(p.image.as_ref())
        .map(|src| format!(r#"<img src="{src}" alt="{name}" loading="lazy">"#, name = p.name))
        .unwrap_or_default();

    format!(
        r#"            <div class="card">
                {img}
                <div style="flex-grow: 1;">
                    <h3><a href="{href}" target="_blank">{name}</a></h3>
                    <p>{description}</p>
                    <small class="text-muted" style="display: block; margin-top: auto;">{stack}</small>
                </div>
            </div>"#,
        href = p.href,
        name = p.name,
        description = p.description,
        stack = p.stack,
    )
}
