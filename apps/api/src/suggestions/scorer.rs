//! Suggestion scoring: ranks catalog templates against a skill list and a
//! list of research interests.
//!
//! Algorithm:
//! 1. Collect candidate domains from the skill and interest lookup tables,
//!    in first-seen order (skills first, then interests).
//! 2. Expand each domain's templates, filling `{domain}` and `{framework}`
//!    (the template's first tag).
//! 3. relevance = 2 × (tags contained in some skill, case-insensitive)
//!    + 1 if some interest is contained in the description.
//! 4. Stable sort by relevance, highest first, and keep the top `limit`.

use serde::{Deserialize, Serialize};

use crate::suggestions::catalog::{
    lookup_domains, templates_for, ProjectTemplate, INTEREST_DOMAINS, SKILL_DOMAINS,
};

pub const DEFAULT_SUGGESTION_LIMIT: usize = 5;

const TAG_WEIGHT: u32 = 2;
const INTEREST_WEIGHT: u32 = 1;

/// Only `Skill` templates exist in the catalog today.
#[allow(dead_code)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SuggestionType {
    Publication,
    Skill,
    Education,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProjectSuggestion {
    #[serde(rename = "type")]
    pub kind: SuggestionType,
    pub title: String,
    pub description: String,
    pub relevance: u32,
    pub category: String,
    pub tags: Vec<String>,
}

pub fn generate_suggestions(
    skills: &[String],
    interests: &[String],
    limit: usize,
) -> Vec<ProjectSuggestion> {
    let skills_lower: Vec<String> = skills.iter().map(|s| s.to_lowercase()).collect();
    let interests_lower: Vec<String> = interests.iter().map(|i| i.to_lowercase()).collect();

    let mut suggestions: Vec<ProjectSuggestion> = candidate_domains(skills, interests)
        .into_iter()
        .flat_map(|domain| {
            templates_for(domain)
                .iter()
                .map(move |template| render_template(domain, template))
        })
        .map(|mut suggestion| {
            suggestion.relevance = relevance(&suggestion, &skills_lower, &interests_lower);
            suggestion
        })
        .collect();

    suggestions.sort_by(|a, b| b.relevance.cmp(&a.relevance));
    suggestions.truncate(limit);
    suggestions
}

fn candidate_domains(skills: &[String], interests: &[String]) -> Vec<&'static str> {
    let from_skills = skills
        .iter()
        .flat_map(|skill| lookup_domains(SKILL_DOMAINS, skill));
    let from_interests = interests
        .iter()
        .flat_map(|interest| lookup_domains(INTEREST_DOMAINS, interest));

    let mut domains: Vec<&'static str> = Vec::new();
    for domain in from_skills.chain(from_interests) {
        if !domains.contains(domain) {
            domains.push(*domain);
        }
    }
    domains
}

fn render_template(domain: &str, template: &ProjectTemplate) -> ProjectSuggestion {
    let framework = template.tags.first().copied().unwrap_or_default();
    let fill = |text: &str| {
        text.replace("{domain}", domain)
            .replace("{framework}", framework)
    };

    ProjectSuggestion {
        kind: SuggestionType::Skill,
        title: fill(template.title),
        description: fill(template.description),
        relevance: 0,
        category: domain.to_string(),
        tags: template.tags.iter().map(|t| t.to_string()).collect(),
    }
}

fn relevance(
    suggestion: &ProjectSuggestion,
    skills_lower: &[String],
    interests_lower: &[String],
) -> u32 {
    let tag_hits = suggestion
        .tags
        .iter()
        .map(|tag| tag.to_lowercase())
        .filter(|tag| skills_lower.iter().any(|skill| skill.contains(tag.as_str())))
        .count() as u32;

    let description = suggestion.description.to_lowercase();
    let interest_hit = interests_lower
        .iter()
        .any(|interest| description.contains(interest.as_str()));

    tag_hits * TAG_WEIGHT + if interest_hit { INTEREST_WEIGHT } else { 0 }
}
