use log::warn;
use web_sys::KeyboardEvent;
use yew::prelude::*;
use yew_hooks::prelude::*;

use crate::components::typography::{Heading, HeadingLevel};
use crate::error::SiteError;

#[derive(Properties, PartialEq)]
pub struct ModalProps {
    pub open: bool,
    pub title: String,
    pub on_close: Callback<()>,
    #[prop_or_default]
    pub children: Children,
}

pub fn is_close_key(key: &str) -> bool {
    matches!(key, "Escape" | "Esc")
}

fn set_body_overflow(value: &str) -> Result<(), SiteError> {
    let body = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.body())
        .ok_or_else(|| SiteError::Browser("document.body".to_string()))?;
    body.style()
        .set_property("overflow", value)
        .map_err(|e| SiteError::browser("body.style", e))
}

#[function_component(Modal)]
pub fn modal(props: &ModalProps) -> Html {
    {
        let open = props.open;
        let on_close = props.on_close.clone();
        use_event_with_window("keydown", move |e: KeyboardEvent| {
            if open && is_close_key(&e.key()) {
                on_close.emit(());
            }
        });
    }

    // Lock page scroll while the dialog is open.
    use_effect_with_deps(
        |open| {
            if *open {
                if let Err(e) = set_body_overflow("hidden") {
                    warn!("Could not lock scroll: {}", e);
                }
            }
            let was_open = *open;
            move || {
                if was_open {
                    if let Err(e) = set_body_overflow("") {
                        warn!("Could not unlock scroll: {}", e);
                    }
                }
            }
        },
        props.open,
    );

    if !props.open {
        return html! {};
    }

    let close_from_backdrop = {
        let on_close = props.on_close.clone();
        Callback::from(move |_: MouseEvent| on_close.emit(()))
    };
    let close_from_button = close_from_backdrop.clone();
    let keep_open = Callback::from(|e: MouseEvent| e.stop_propagation());

    html! {
        <div
            class="fixed inset-0 z-50 flex items-center justify-center bg-slate-900/60 p-4"
            onclick={close_from_backdrop}
        >
            <div
                role="dialog"
                aria-modal="true"
                aria-label={props.title.clone()}
                class="relative w-full max-w-lg rounded-2xl bg-white p-8 shadow-2xl"
                onclick={keep_open}
            >
                <button
                    class="absolute right-4 top-4 rounded-md p-1 text-slate-500 hover:bg-slate-100"
                    aria-label="Fermer"
                    onclick={close_from_button}
                >
                    {"✕"}
                </button>
                <Heading level={HeadingLevel::H3} class="mb-4 pr-8">{ &props.title }</Heading>
                <div class="space-y-3 text-sm leading-relaxed text-slate-700">
                    { for props.children.iter() }
                </div>
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn escape_closes() {
        assert!(is_close_key("Escape"));
        assert!(is_close_key("Esc"));
        assert!(!is_close_key("Enter"));
        assert!(!is_close_key("e"));
    }
}
