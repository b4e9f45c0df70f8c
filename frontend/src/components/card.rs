use yew::prelude::*;

use crate::components::typography::{Heading, HeadingLevel, Text, TextVariant};
use crate::utils::class_names::cn;
use crate::utils::validation::sanitize_url;

#[derive(Properties, PartialEq)]
pub struct CardProps {
    #[prop_or_default]
    pub title: Option<String>,
    #[prop_or_default]
    pub description: Option<String>,
    #[prop_or_default]
    pub tags: Vec<String>,
    #[prop_or_default]
    pub href: Option<String>,
    #[prop_or(String::from("Voir le projet"))]
    pub link_label: String,
    #[prop_or(true)]
    pub hoverable: bool,
    #[prop_or_default]
    pub class: String,
    #[prop_or_default]
    pub children: Children,
}

pub fn card_classes(hoverable: bool, extra: &str) -> String {
    cn!(
        "flex flex-col gap-4 rounded-2xl border border-slate-200 bg-white p-6 shadow-sm",
        hoverable.then(|| "transition-shadow duration-300 hover:shadow-lg"),
        extra
    )
}

#[function_component(Card)]
pub fn card(props: &CardProps) -> Html {
    html! {
        <article class={card_classes(props.hoverable, &props.class)}>
            if let Some(title) = &props.title {
                <Heading level={HeadingLevel::H3}>{ title }</Heading>
            }
            if let Some(description) = &props.description {
                <Text variant={TextVariant::Body}>{ description }</Text>
            }
            { for props.children.iter() }
            if !props.tags.is_empty() {
                <ul class="flex flex-wrap gap-2">
                    { for props.tags.iter().map(|tag| html! {
                        <li class="rounded-full bg-sky-50 px-3 py-1 text-xs font-medium text-sky-700">{ tag }</li>
                    }) }
                </ul>
            }
            if let Some(href) = &props.href {
                <a
                    href={sanitize_url(href)}
                    target="_blank"
                    rel="noopener noreferrer"
                    class="mt-auto inline-flex items-center gap-1 text-sm font-semibold text-sky-700 hover:text-sky-500"
                >
                    { &props.link_label }
                    <span aria-hidden="true">{"→"}</span>
                </a>
            }
        </article>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hoverable_cards_get_transition() {
        assert!(card_classes(true, "").contains("hover:shadow-lg"));
        assert!(!card_classes(false, "").contains("hover:shadow-lg"));
    }

    #[test]
    fn caller_padding_wins() {
        let class = card_classes(false, "p-10 bg-slate-50");
        assert!(class.contains("p-10"));
        assert!(!class.contains("p-6"));
        assert!(!class.contains("bg-white"));
    }
}
