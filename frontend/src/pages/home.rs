use chrono::Datelike;
use log::error;
use yew::prelude::*;

use crate::components::card::Card;
use crate::components::fade_in::FadeIn;
use crate::components::form::ContactForm;
use crate::components::hero::Hero;
use crate::components::privacy_notice::PrivacyNotice;
use crate::components::skills::Skills;
use crate::components::typography::{Heading, HeadingLevel, Text, TextVariant};
use crate::config::SITE;
use crate::content::{load_projects, load_skills};
use crate::utils::validation::sanitize_url;

#[derive(Properties, PartialEq)]
struct SectionProps {
    id: &'static str,
    title: &'static str,
    #[prop_or_default]
    intro: Option<&'static str>,
    #[prop_or_default]
    muted: bool,
    children: Children,
}

#[function_component(Section)]
fn section(props: &SectionProps) -> Html {
    let background = if props.muted { "bg-slate-50" } else { "bg-white" };
    html! {
        <section id={props.id} class={classes!("scroll-mt-20", "px-6", "py-24", background)}>
            <div class="mx-auto max-w-6xl">
                <FadeIn class="mb-12 max-w-2xl">
                    <Heading level={HeadingLevel::H2}>{ props.title }</Heading>
                    if let Some(intro) = props.intro {
                        <Text variant={TextVariant::Lead} class="mt-4">{ intro }</Text>
                    }
                </FadeIn>
                { for props.children.iter() }
            </div>
        </section>
    }
}

#[function_component(Home)]
pub fn home() -> Html {
    let skills = use_memo(
        |_| {
            load_skills().unwrap_or_else(|e| {
                error!("Skills unavailable: {}", e);
                Vec::new()
            })
        },
        (),
    );
    let projects = use_memo(
        |_| {
            load_projects().unwrap_or_else(|e| {
                error!("Projects unavailable: {}", e);
                Vec::new()
            })
        },
        (),
    );
    let year = chrono::Local::now().year();

    html! {
        <main>
            <Hero
                title={format!("Bonjour, je suis {}.", SITE.owner)}
                subtitle={SITE.tagline.to_string()}
            />

            <Section id="about" title="À propos">
                <div class="grid gap-8 md:grid-cols-2">
                    <FadeIn>
                        <Text>
                            {"Depuis huit ans, je conçois des applications web rapides et fiables pour des startups, des PME et des indépendants. J'interviens de la conception technique jusqu'à la mise en production."}
                        </Text>
                    </FadeIn>
                    <FadeIn delay_ms={150}>
                        <Text>
                            {"J'aime les outils simples, le code lisible et les livraisons fréquentes. Chaque mission commence par un échange pour comprendre vos utilisateurs et vos contraintes."}
                        </Text>
                    </FadeIn>
                </div>
            </Section>

            <Section id="skills" title="Compétences" intro={"Les technologies que j'utilise au quotidien."} muted={true}>
                <Skills skills={(*skills).clone()} />
            </Section>

            <Section id="projects" title="Projets" intro={"Quelques réalisations récentes."}>
                <div class="grid gap-6 md:grid-cols-2 lg:grid-cols-3">
                    { for projects.iter().enumerate().map(|(i, project)| html! {
                        <FadeIn key={project.title.clone()} delay_ms={(i as u32) * 120} class="h-full">
                            <Card
                                class="h-full"
                                title={project.title.clone()}
                                description={project.description.clone()}
                                tags={project.tags.clone()}
                                href={project.href.clone()}
                            />
                        </FadeIn>
                    }) }
                </div>
            </Section>

            <Section id="contact" title="Contact" intro={"Un projet, une question ? Écrivez-moi, je réponds rapidement."} muted={true}>
                <div class="grid gap-10 md:grid-cols-3">
                    <FadeIn class="md:col-span-2">
                        <ContactForm />
                    </FadeIn>
                    <FadeIn delay_ms={150}>
                        <ul class="space-y-3 text-sm text-slate-700">
                            <li>
                                <a class="hover:text-sky-600" href={sanitize_url(&format!("mailto:{}", SITE.email))}>{ SITE.email }</a>
                            </li>
                            <li>
                                <a class="hover:text-sky-600" href={sanitize_url(&format!("tel:{}", SITE.phone.replace(' ', "")))}>{ SITE.phone }</a>
                            </li>
                            { for SITE.socials.iter().map(|social| html! {
                                <li>
                                    <a class="hover:text-sky-600" href={sanitize_url(social.href)} target="_blank" rel="noopener noreferrer">
                                        { social.label }
                                    </a>
                                </li>
                            }) }
                        </ul>
                    </FadeIn>
                </div>
            </Section>

            <footer class="border-t border-slate-200 px-6 py-8 text-center text-sm text-slate-500">
                { format!("© {} {}. Tous droits réservés.", year, SITE.owner) }
            </footer>

            <PrivacyNotice />
        </main>
    }
}
