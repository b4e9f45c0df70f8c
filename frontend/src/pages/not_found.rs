use yew::prelude::*;

use crate::components::button::Button;
use crate::components::typography::{Heading, HeadingLevel, Text, TextVariant};

#[function_component(NotFound)]
pub fn not_found() -> Html {
    html! {
        <main class="flex min-h-screen flex-col items-center justify-center gap-6 px-6 text-center">
            <Heading level={HeadingLevel::H1}>{"404"}</Heading>
            <Text variant={TextVariant::Lead}>{"Cette page n'existe pas ou a été déplacée."}</Text>
            <Button href={"/".to_string()}>{"Retour à l'accueil"}</Button>
        </main>
    }
}
