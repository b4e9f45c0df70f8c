use yew::prelude::*;

use crate::components::fade_in::FadeIn;
use crate::components::typography::{Heading, HeadingLevel};
use crate::content::Skill;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkillGroup<'a> {
    pub category: &'a str,
    pub skills: Vec<&'a Skill>,
}

/// Groups skills by category, keeping the order in which categories first appear.
pub fn group_by_category(skills: &[Skill]) -> Vec<SkillGroup<'_>> {
    let mut groups: Vec<SkillGroup<'_>> = Vec::new();
    for skill in skills {
        match groups.iter_mut().find(|g| g.category == skill.category) {
            Some(group) => group.skills.push(skill),
            None => groups.push(SkillGroup {
                category: &skill.category,
                skills: vec![skill],
            }),
        }
    }
    groups
}

#[derive(Properties, PartialEq)]
pub struct SkillsProps {
    pub skills: Vec<Skill>,
}

#[function_component(Skills)]
pub fn skills(props: &SkillsProps) -> Html {
    let groups = group_by_category(&props.skills);

    html! {
        <div class="grid gap-6 sm:grid-cols-2 lg:grid-cols-4">
            { for groups.iter().enumerate().map(|(i, group)| html! {
                <FadeIn key={group.category.to_string()} delay_ms={(i as u32) * 100}>
                    <div class="h-full rounded-2xl border border-slate-200 bg-white p-6">
                        <Heading level={HeadingLevel::H4} class="mb-4">{ group.category }</Heading>
                        <ul class="flex flex-wrap gap-2">
                            { for group.skills.iter().map(|skill| html! {
                                <li class="rounded-md bg-slate-100 px-2.5 py-1 text-sm text-slate-800">{ &skill.name }</li>
                            }) }
                        </ul>
                    </div>
                </FadeIn>
            }) }
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn groups_keep_first_seen_order() {
        let skills = vec![
            Skill::new("Rust", "Langages"),
            Skill::new("Yew", "Front-end"),
            Skill::new("TypeScript", "Langages"),
            Skill::new("Docker", "DevOps"),
            Skill::new("React", "Front-end"),
        ];
        let groups = group_by_category(&skills);
        let categories: Vec<_> = groups.iter().map(|g| g.category).collect();
        assert_eq!(categories, vec!["Langages", "Front-end", "DevOps"]);

        let languages: Vec<_> = groups[0].skills.iter().map(|s| s.name.as_str()).collect();
        assert_eq!(languages, vec!["Rust", "TypeScript"]);
        assert_eq!(groups[1].skills.len(), 2);
    }

    #[test]
    fn empty_input() {
        assert!(group_by_category(&[]).is_empty());
    }

    #[test]
    fn same_name_in_two_categories() {
        let skills = vec![Skill::new("SQL", "Langages"), Skill::new("SQL", "Back-end")];
        let groups = group_by_category(&skills);
        assert_eq!(groups.len(), 2);
        assert_eq!(groups[1].skills[0].category, "Back-end");
    }
}
