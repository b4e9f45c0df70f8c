use yew::prelude::*;

use crate::components::button::{Button, ButtonSize, ButtonVariant};
use crate::components::typography::{Heading, HeadingLevel, Text, TextVariant};
use crate::hooks::in_view::{use_in_view, InViewOptions};
use crate::utils::class_names::cn;

/// Call-to-action link.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Cta {
    pub label: String,
    pub href: String,
}

impl Cta {
    pub fn new(label: &str, href: &str) -> Self {
        Self {
            label: label.to_string(),
            href: href.to_string(),
        }
    }

    pub fn default_primary() -> Self {
        Self::new("Me contacter", "#contact")
    }

    pub fn default_secondary() -> Self {
        Self::new("Voir mes projets", "#projects")
    }
}

#[derive(Properties, PartialEq)]
pub struct HeroProps {
    pub title: String,
    #[prop_or_default]
    pub subtitle: Option<String>,
    #[prop_or_else(Cta::default_primary)]
    pub primary_cta: Cta,
    #[prop_or_else(Cta::default_secondary)]
    pub secondary_cta: Cta,
    #[prop_or_default]
    pub class: String,
}

#[function_component(Hero)]
pub fn hero(props: &HeroProps) -> Html {
    let view = use_in_view(InViewOptions::default().threshold(0.2));
    let content_class = cn!(
        "mx-auto flex max-w-3xl flex-col items-center gap-6 text-center transition-all duration-1000 ease-out",
        if view.is_in_view { "opacity-100 translate-y-0" } else { "opacity-0 translate-y-6" }
    );

    html! {
        <section
            id="hero"
            class={cn!("relative overflow-hidden bg-gradient-to-b from-sky-50 to-white px-6 pt-32 pb-24", &props.class)}
        >
            <div ref={view.node.clone()} class={content_class}>
                <Heading level={HeadingLevel::H1}>{ &props.title }</Heading>
                if let Some(subtitle) = &props.subtitle {
                    <Text variant={TextVariant::Lead}>{ subtitle }</Text>
                }
                <div class="flex flex-col gap-3 sm:flex-row">
                    <Button size={ButtonSize::Lg} href={props.primary_cta.href.clone()}>
                        { &props.primary_cta.label }
                    </Button>
                    <Button
                        size={ButtonSize::Lg}
                        variant={ButtonVariant::Outline}
                        href={props.secondary_cta.href.clone()}
                    >
                        { &props.secondary_cta.label }
                    </Button>
                </div>
            </div>
        </section>
    }
}
