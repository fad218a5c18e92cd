//! Skill cards for the index page

use maud::{Markup, PreEscaped, html};

use super::ViewContext;
use super::markdown_view::markdown_view;
use crate::markdown::RenderedTree;
use crate::site::Skill;

/// Selector value showing every skill.
const ALL: &str = "all";

/// Filters skill cards by tag in the browser.
const FILTER_SCRIPT: &str = r#"function filterSkills(tag) {
  document.querySelectorAll(".skill-card").forEach(function (card) {
    var tags = card.dataset.tags.split(" ");
    card.hidden = tag !== "all" && tags.indexOf(tag) < 0;
  });
}"#;

/// Renders one skill card
///
/// # Arguments
///
/// * `skill`: Skill entry from the profile
/// * `description`: Rendered Markdown description
/// * `view`: Page context
///
/// # Returns
///
/// Card with image, title and a scrollable description
pub fn skill_card(skill: &Skill, description: &RenderedTree, view: &ViewContext) -> Markup {
    html! {
        article.skill-card data-tags=(skill.tags.join(" ")) {
            @if !skill.image_url.path.is_empty() {
                img.skill-image src=(view.asset(&skill.image_url.path)) alt=(skill.title) loading="lazy";
            }
            h3.skill-title { (skill.title) }
            div.skill-description style="overflow-y: auto; max-height: 150px" {
                (markdown_view(description, view))
            }
        }
    }
}

/// Tag selector that narrows the skill cards to one tag.
pub fn skill_tag_selector(tags: &[&str]) -> Markup {
    html! {
        div.skill-selector {
            select aria-label="Skill tag" onchange="filterSkills(this.value)" {
                option value=(ALL) selected { (ALL) }
                @for tag in tags {
                    option value=(tag) { (tag) }
                }
            }
        }
    }
}

/// Renders the skills section
///
/// Nothing is rendered when there are no skills.
///
/// # Arguments
///
/// * `skills`: Skills paired with their rendered descriptions
/// * `tags`: Distinct skill tags for the selector
/// * `view`: Page context
///
/// # Returns
///
/// Section markup
pub fn skill_section(skills: &[(&Skill, RenderedTree)], tags: &[&str], view: &ViewContext) -> Markup {
    if skills.is_empty() {
        return html! {};
    }

    html! {
        section.skills {
            (skill_tag_selector(tags))
            div.skill-cards {
                @for (skill, description) in skills {
                    (skill_card(skill, description, view))
                }
            }
            script { (PreEscaped(FILTER_SCRIPT)) }
        }
    }
}
