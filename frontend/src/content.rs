use serde::{Deserialize, Serialize};

use crate::error::Result;

const SKILLS_JSON: &str = include_str!("../assets/skills.json");
const PROJECTS_JSON: &str = include_str!("../assets/projects.json");

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Skill {
    pub name: String,
    pub category: String,
}

impl Skill {
    pub fn new(name: &str, category: &str) -> Self {
        Self {
            name: name.to_string(),
            category: category.to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Project {
    pub title: String,
    pub description: String,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub href: Option<String>,
}

pub fn load_skills() -> Result<Vec<Skill>> {
    parse_skills(SKILLS_JSON)
}

pub fn load_projects() -> Result<Vec<Project>> {
    parse_projects(PROJECTS_JSON)
}

fn parse_skills(raw: &str) -> Result<Vec<Skill>> {
    Ok(serde_json::from_str(raw)?)
}

fn parse_projects(raw: &str) -> Result<Vec<Project>> {
    Ok(serde_json::from_str(raw)?)
}
