use yew::prelude::*;

use crate::utils::class_names::cn;
use crate::utils::validation::sanitize_url;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ButtonVariant {
    #[default]
    Primary,
    Secondary,
    Outline,
    Ghost,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ButtonSize {
    Sm,
    #[default]
    Md,
    Lg,
}

#[derive(Properties, PartialEq)]
pub struct ButtonProps {
    #[prop_or_default]
    pub variant: ButtonVariant,
    #[prop_or_default]
    pub size: ButtonSize,
    /// Renders an `<a>` instead of a `<button>` when set.
    #[prop_or_default]
    pub href: Option<String>,
    #[prop_or_default]
    pub disabled: bool,
    #[prop_or_default]
    pub full_width: bool,
    #[prop_or_default]
    pub class: String,
    #[prop_or_default]
    pub onclick: Option<Callback<MouseEvent>>,
    #[prop_or(String::from("button"))]
    pub button_type: String,
    #[prop_or_default]
    pub children: Children,
}

pub fn button_classes(
    variant: ButtonVariant,
    size: ButtonSize,
    full_width: bool,
    disabled: bool,
    extra: &str,
) -> String {
    let base = "inline-flex items-center justify-center gap-2 rounded-lg font-semibold \
                transition-colors duration-200 focus-visible:outline-none focus-visible:ring-2 \
                focus-visible:ring-sky-400 focus-visible:ring-offset-2";
    let variant_classes = match variant {
        ButtonVariant::Primary => "bg-sky-600 text-white hover:bg-sky-500",
        ButtonVariant::Secondary => "bg-slate-800 text-white hover:bg-slate-700",
        ButtonVariant::Outline => "border border-slate-300 bg-transparent text-slate-900 hover:bg-slate-100",
        ButtonVariant::Ghost => "bg-transparent text-slate-700 hover:bg-slate-100",
    };
    let size_classes = match size {
        ButtonSize::Sm => "px-3 py-1.5 text-sm",
        ButtonSize::Md => "px-5 py-2.5 text-base",
        ButtonSize::Lg => "px-7 py-3.5 text-lg",
    };
    cn!(
        base,
        variant_classes,
        size_classes,
        full_width.then(|| "w-full"),
        disabled.then(|| "opacity-50 cursor-not-allowed pointer-events-none"),
        extra
    )
}

fn is_external(href: &str) -> bool {
    href.starts_with("http://") || href.starts_with("https://")
}

#[function_component(Button)]
pub fn button(props: &ButtonProps) -> Html {
    let class = button_classes(
        props.variant,
        props.size,
        props.full_width,
        props.disabled,
        &props.class,
    );

    match &props.href {
        Some(href) => {
            let href = sanitize_url(href);
            let external = is_external(&href);
            html! {
                <a
                    href={href}
                    class={class}
                    target={external.then(|| "_blank")}
                    rel={external.then(|| "noopener noreferrer")}
                    aria-disabled={props.disabled.then(|| "true")}
                    onclick={props.onclick.clone()}
                >
                    { for props.children.iter() }
                </a>
            }
        }
        None => html! {
            <button
                type={props.button_type.clone()}
                class={class}
                disabled={props.disabled}
                onclick={props.onclick.clone()}
            >
                { for props.children.iter() }
            </button>
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn primary_medium_defaults() {
        let class = button_classes(ButtonVariant::default(), ButtonSize::default(), false, false, "");
        assert!(class.contains("bg-sky-600"));
        assert!(class.contains("px-5 py-2.5"));
        assert!(!class.contains("w-full"));
    }

    #[test]
    fn caller_classes_override_variant() {
        let class = button_classes(ButtonVariant::Primary, ButtonSize::Md, false, false, "bg-rose-600 px-8");
        assert!(class.contains("bg-rose-600"));
        assert!(!class.contains("bg-sky-600 "));
        assert!(class.contains("px-8"));
        assert!(!class.contains("px-5"));
        assert!(class.contains("hover:bg-sky-500"));
    }

    #[test]
    fn disabled_and_full_width() {
        let class = button_classes(ButtonVariant::Ghost, ButtonSize::Sm, true, true, "");
        assert!(class.contains("w-full"));
        assert!(class.contains("opacity-50"));
        assert!(class.contains("pointer-events-none"));
    }

    #[test]
    fn external_links() {
        assert!(is_external("https://github.com"));
        assert!(!is_external("#contact"));
        assert!(!is_external("/"));
    }
}
