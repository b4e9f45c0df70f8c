use log::info;
use serde::{Deserialize, Serialize};
use yew::prelude::*;
use yew_hooks::prelude::*;

use crate::components::button::{Button, ButtonSize, ButtonVariant};
use crate::components::modal::Modal;
use crate::config::SITE;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Consent {
    Accepted,
    Declined,
}

pub fn should_show_notice(consent: Option<Consent>) -> bool {
    consent.is_none()
}

#[function_component(PrivacyNotice)]
pub fn privacy_notice() -> Html {
    let consent = use_local_storage::<Consent>(SITE.consent_storage_key.to_string());
    let details_open = use_state(|| false);

    if !should_show_notice(*consent) {
        return html! {};
    }

    let decide = |choice: Consent| {
        let consent = consent.clone();
        Callback::from(move |_: MouseEvent| {
            info!("Privacy notice answered: {:?}", choice);
            consent.set(choice);
        })
    };
    let open_details = {
        let details_open = details_open.clone();
        Callback::from(move |_: MouseEvent| details_open.set(true))
    };
    let close_details = {
        let details_open = details_open.clone();
        Callback::from(move |_: ()| details_open.set(false))
    };

    html! {
        <>
            <div
                class="fixed inset-x-4 bottom-4 z-40 mx-auto max-w-3xl rounded-2xl border border-slate-200 bg-white p-5 shadow-xl md:flex md:items-center md:gap-6"
                role="region"
                aria-label="Confidentialité"
            >
                <p class="text-sm text-slate-700">
                    {"Ce site utilise uniquement une mesure d'audience anonyme, sans cookie publicitaire. "}
                    <button class="font-medium text-sky-700 underline" onclick={open_details}>
                        {"En savoir plus"}
                    </button>
                </p>
                <div class="mt-4 flex shrink-0 gap-2 md:mt-0">
                    <Button size={ButtonSize::Sm} variant={ButtonVariant::Ghost} onclick={decide(Consent::Declined)}>
                        {"Refuser"}
                    </Button>
                    <Button size={ButtonSize::Sm} onclick={decide(Consent::Accepted)}>
                        {"Accepter"}
                    </Button>
                </div>
            </div>
            <Modal open={*details_open} title="Vos données" on_close={close_details}>
                <p>
                    {"Les informations transmises via le formulaire de contact servent uniquement à répondre à votre demande. Elles ne sont ni revendues ni utilisées à des fins commerciales."}
                </p>
                <p>
                    {"La mesure d'audience est anonymisée et ne dépose aucun cookie sans votre accord. Votre choix est conservé dans le stockage local de votre navigateur."}
                </p>
                <p>
                    {"Pour toute question ou demande de suppression : "}
                    <a class="text-sky-700 underline" href={format!("mailto:{}", SITE.email)}>{ SITE.email }</a>
                </p>
            </Modal>
        </>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn shown_only_without_decision() {
        assert!(should_show_notice(None));
        assert!(!should_show_notice(Some(Consent::Accepted)));
        assert!(!should_show_notice(Some(Consent::Declined)));
    }

    #[test]
    fn consent_is_stored_as_lowercase_json() {
        assert_eq!(serde_json::to_string(&Consent::Accepted).unwrap(), "\"accepted\"");
        let parsed: Consent = serde_json::from_str("\"declined\"").unwrap();
        assert_eq!(parsed, Consent::Declined);
    }
}
