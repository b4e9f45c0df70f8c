//! Contact form.
//!
//! Values are sanitized and validated in the browser before anything is sent. There is no
//! submission endpoint yet, so a successful submit only waits and shows a confirmation.

use gloo_timers::future::TimeoutFuture;
use log::{debug, info};
use wasm_bindgen_futures::spawn_local;
use web_sys::{HtmlInputElement, HtmlTextAreaElement};
use yew::prelude::*;

use crate::components::button::{Button, ButtonSize};
use crate::config;
use crate::utils::class_names::cn;
use crate::utils::csrf::{generate_csrf_token, CsrfToken, TokenStrength};
use crate::utils::validation::{format_name, is_valid_email, is_valid_phone_number, sanitize_input};

const MIN_MESSAGE_LEN: usize = 10;
const MAX_MESSAGE_LEN: usize = 2000;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactDraft {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub message: String,
}

impl ContactDraft {
    pub fn sanitized(&self) -> Self {
        Self {
            name: format_name(&sanitize_input(&self.name)),
            email: sanitize_input(&self.email).to_lowercase(),
            phone: sanitize_input(&self.phone),
            message: sanitize_input(&self.message),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactErrors {
    pub name: Option<&'static str>,
    pub email: Option<&'static str>,
    pub phone: Option<&'static str>,
    pub message: Option<&'static str>,
}

impl ContactErrors {
    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.email.is_none() && self.phone.is_none() && self.message.is_none()
    }
}

/// Checks every field and reports all problems at once.
pub fn validate_contact(draft: &ContactDraft) -> Result<(), ContactErrors> {
    let mut errors = ContactErrors::default();

    if draft.name.chars().count() < 2 {
        errors.name = Some("Merci d'indiquer votre nom.");
    }
    if !is_valid_email(&draft.email) {
        errors.email = Some("Adresse e-mail invalide.");
    }
    if !draft.phone.is_empty() && !is_valid_phone_number(&draft.phone) {
        errors.phone = Some("Numéro de téléphone invalide.");
    }
    let message_len = draft.message.chars().count();
    if message_len < MIN_MESSAGE_LEN {
        errors.message = Some("Votre message est un peu court.");
    } else if message_len > MAX_MESSAGE_LEN {
        errors.message = Some("Votre message est trop long (2000 caractères maximum).");
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

/// Log line for a submitted request. Carries no personal data.
fn submission_summary(draft: &ContactDraft) -> String {
    format!(
        "Contact request submitted (message: {} chars, phone given: {})",
        draft.message.chars().count(),
        !draft.phone.is_empty()
    )
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum FormStatus {
    Idle,
    Submitting,
    Sent,
}

fn field_classes(error: Option<&str>) -> String {
    cn!(
        "w-full rounded-lg border border-slate-300 bg-white px-4 py-2.5 text-slate-900 focus:border-sky-500 focus:outline-none",
        error.map(|_| "border-rose-500 focus:border-rose-500")
    )
}

#[derive(Properties, PartialEq)]
struct FieldProps {
    id: &'static str,
    label: &'static str,
    error: Option<&'static str>,
    children: Children,
}

#[function_component(Field)]
fn field(props: &FieldProps) -> Html {
    html! {
        <div class="flex flex-col gap-1.5">
            <label for={props.id} class="text-sm font-medium text-slate-700">{ props.label }</label>
            { for props.children.iter() }
            if let Some(error) = props.error {
                <p id={format!("{}-error", props.id)} class="text-sm text-rose-600">{ error }</p>
            }
        </div>
    }
}

#[function_component(ContactForm)]
pub fn contact_form() -> Html {
    let draft = use_state(ContactDraft::default);
    let errors = use_state(ContactErrors::default);
    let status = use_state(|| FormStatus::Idle);
    let token = use_state(generate_csrf_token);

    let on_input = |apply: fn(&mut ContactDraft, String)| {
        let draft = draft.clone();
        Callback::from(move |e: InputEvent| {
            let value = match e.target_dyn_into::<HtmlTextAreaElement>() {
                Some(area) => area.value(),
                None => e.target_unchecked_into::<HtmlInputElement>().value(),
            };
            let mut next = (*draft).clone();
            apply(&mut next, value);
            draft.set(next);
        })
    };
    let on_name = on_input(|d, v| d.name = v);
    let on_email = on_input(|d, v| d.email = v);
    let on_phone = on_input(|d, v| d.phone = v);
    let on_message = on_input(|d, v| d.message = v);

    let on_submit = {
        let draft = draft.clone();
        let errors = errors.clone();
        let status = status.clone();
        let token = token.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            if *status == FormStatus::Submitting {
                return;
            }
            let cleaned = draft.sanitized();
            match validate_contact(&cleaned) {
                Err(found) => {
                    debug!("Contact form rejected: {:?}", found);
                    errors.set(found);
                }
                Ok(()) => {
                    errors.set(ContactErrors::default());
                    status.set(FormStatus::Submitting);
                    if token.strength() == TokenStrength::Weak {
                        debug!("Submitting with a weak CSRF token");
                    }
                    let draft = draft.clone();
                    let status = status.clone();
                    let token = token.clone();
                    spawn_local(async move {
                        TimeoutFuture::new(config::submit_delay_ms()).await;
                        info!("{}", submission_summary(&cleaned));
                        draft.set(ContactDraft::default());
                        token.set(generate_csrf_token());
                        status.set(FormStatus::Sent);
                    });
                }
            }
        })
    };

    if *status == FormStatus::Sent {
        let reset = {
            let status = status.clone();
            Callback::from(move |_: MouseEvent| status.set(FormStatus::Idle))
        };
        return html! {
            <div class="rounded-2xl border border-emerald-200 bg-emerald-50 p-8 text-center" role="status">
                <p class="text-lg font-semibold text-emerald-800">{"Merci, votre message a bien été envoyé !"}</p>
                <p class="mt-2 text-sm text-emerald-700">{"Je vous réponds sous 48 heures ouvrées."}</p>
                <Button class="mt-6" size={ButtonSize::Sm} onclick={reset}>{"Envoyer un autre message"}</Button>
            </div>
        };
    }

    let submitting = *status == FormStatus::Submitting;
    let token_value: &CsrfToken = &token;

    html! {
        <form class="flex flex-col gap-5" onsubmit={on_submit} novalidate={true}>
            <input type="hidden" name="csrf_token" value={token_value.to_string()} />
            <div class="grid gap-5 md:grid-cols-2">
                <Field id="contact-name" label="Nom" error={errors.name}>
                    <input
                        id="contact-name"
                        name="name"
                        type="text"
                        autocomplete="name"
                        class={field_classes(errors.name)}
                        value={draft.name.clone()}
                        oninput={on_name}
                    />
                </Field>
                <Field id="contact-email" label="E-mail" error={errors.email}>
                    <input
                        id="contact-email"
                        name="email"
                        type="email"
                        autocomplete="email"
                        class={field_classes(errors.email)}
                        value={draft.email.clone()}
                        oninput={on_email}
                    />
                </Field>
            </div>
            <Field id="contact-phone" label="Téléphone (facultatif)" error={errors.phone}>
                <input
                    id="contact-phone"
                    name="phone"
                    type="tel"
                    autocomplete="tel"
                    class={field_classes(errors.phone)}
                    value={draft.phone.clone()}
                    oninput={on_phone}
                />
            </Field>
            <Field id="contact-message" label="Votre projet" error={errors.message}>
                <textarea
                    id="contact-message"
                    name="message"
                    rows="6"
                    class={field_classes(errors.message)}
                    value={draft.message.clone()}
                    oninput={on_message}
                />
            </Field>
            <Button button_type="submit" size={ButtonSize::Lg} disabled={submitting}>
                { if submitting { "Envoi en cours…" } else { "Envoyer" } }
            </Button>
        </form>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_draft() -> ContactDraft {
        ContactDraft {
            name: "jean pierre".to_string(),
            email: "Jean@Example.com".to_string(),
            phone: "06 12 34 56 78".to_string(),
            message: "Bonjour, j'ai un projet de site vitrine.".to_string(),
        }
    }

    #[test]
    fn sanitized_draft_is_normalised() {
        let mut draft = valid_draft();
        draft.name = "  <b>jean PIERRE</b> ".to_string();
        let cleaned = draft.sanitized();
        assert_eq!(cleaned.name, "Bjean Pierre/b");
        assert_eq!(cleaned.email, "jean@example.com");
    }

    #[test]
    fn valid_draft_passes() {
        assert_eq!(validate_contact(&valid_draft().sanitized()), Ok(()));
    }

    #[test]
    fn phone_is_optional() {
        let mut draft = valid_draft();
        draft.phone.clear();
        assert!(validate_contact(&draft).is_ok());
    }

    #[test]
    fn reports_every_invalid_field() {
        let draft = ContactDraft {
            name: "J".to_string(),
            email: "test@domain".to_string(),
            phone: "123456".to_string(),
            message: "Salut".to_string(),
        };
        let errors = validate_contact(&draft).unwrap_err();
        assert!(errors.name.is_some());
        assert!(errors.email.is_some());
        assert!(errors.phone.is_some());
        assert!(errors.message.is_some());
    }

    #[test]
    fn overly_long_message() {
        let mut draft = valid_draft();
        draft.message = "a".repeat(MAX_MESSAGE_LEN + 1);
        let errors = validate_contact(&draft).unwrap_err();
        assert!(errors.message.unwrap().contains("trop long"));
        assert!(errors.name.is_none());
    }

    #[test]
    fn submission_summary_omits_personal_data() {
        let draft = valid_draft().sanitized();
        let line = submission_summary(&draft);
        assert!(!line.contains("Jean"));
        assert!(!line.contains("jean@example.com"));
        assert!(!line.contains("06 12"));
        assert!(line.contains("phone given: true"));
    }

    #[test]
    fn error_fields_are_highlighted() {
        assert!(field_classes(Some("x")).contains("border-rose-500"));
        assert!(!field_classes(Some("x")).contains("border-slate-300"));
        assert!(field_classes(None).contains("border-slate-300"));
    }
}
