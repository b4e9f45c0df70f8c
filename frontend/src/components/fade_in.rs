use yew::prelude::*;

use crate::hooks::in_view::{use_in_view, InViewOptions};
use crate::utils::class_names::cn;

#[derive(Properties, PartialEq)]
pub struct FadeInProps {
    #[prop_or_default]
    pub delay_ms: u32,
    #[prop_or(0.1)]
    pub threshold: f64,
    #[prop_or(true)]
    pub trigger_once: bool,
    #[prop_or_default]
    pub class: String,
    #[prop_or_default]
    pub children: Children,
}

pub fn fade_in_classes(visible: bool, extra: &str) -> String {
    cn!(
        "transition-all duration-700 ease-out motion-reduce:transition-none",
        if visible { "opacity-100 translate-y-0" } else { "opacity-0 translate-y-8" },
        extra
    )
}

#[function_component(FadeIn)]
pub fn fade_in(props: &FadeInProps) -> Html {
    let view = use_in_view(
        InViewOptions::default()
            .threshold(props.threshold)
            .trigger_once(props.trigger_once),
    );
    let style = (props.delay_ms > 0).then(|| format!("transition-delay: {}ms;", props.delay_ms));

    html! {
        <div ref={view.node.clone()} class={fade_in_classes(view.is_in_view, &props.class)} style={style}>
            { for props.children.iter() }
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hidden_until_visible() {
        assert!(fade_in_classes(false, "").contains("opacity-0"));
        let shown = fade_in_classes(true, "");
        assert!(shown.contains("opacity-100"));
        assert!(!shown.contains("opacity-0"));
    }

    #[test]
    fn caller_duration_overrides_default() {
        let class = fade_in_classes(true, "duration-300");
        assert!(class.contains("duration-300"));
        assert!(!class.contains("duration-700"));
    }
}
