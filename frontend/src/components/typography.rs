use yew::prelude::*;

use crate::utils::class_names::cn;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum HeadingLevel {
    H1,
    #[default]
    H2,
    H3,
    H4,
    H5,
    H6,
}

impl HeadingLevel {
    pub fn tag(self) -> &'static str {
        match self {
            HeadingLevel::H1 => "h1",
            HeadingLevel::H2 => "h2",
            HeadingLevel::H3 => "h3",
            HeadingLevel::H4 => "h4",
            HeadingLevel::H5 => "h5",
            HeadingLevel::H6 => "h6",
        }
    }

    fn classes(self) -> &'static str {
        match self {
            HeadingLevel::H1 => "text-4xl md:text-6xl font-extrabold tracking-tight",
            HeadingLevel::H2 => "text-3xl md:text-4xl font-bold tracking-tight",
            HeadingLevel::H3 => "text-2xl font-semibold",
            HeadingLevel::H4 => "text-xl font-semibold",
            HeadingLevel::H5 => "text-lg font-medium",
            HeadingLevel::H6 => "text-base font-medium uppercase tracking-wide",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TextVariant {
    Lead,
    #[default]
    Body,
    Small,
    Muted,
}

impl TextVariant {
    fn classes(self) -> &'static str {
        match self {
            TextVariant::Lead => "text-xl leading-relaxed text-slate-600",
            TextVariant::Body => "text-base leading-relaxed text-slate-700",
            TextVariant::Small => "text-sm text-slate-700",
            TextVariant::Muted => "text-sm text-slate-500",
        }
    }
}

pub fn heading_classes(level: HeadingLevel, extra: &str) -> String {
    cn!("text-slate-900", level.classes(), extra)
}

pub fn text_classes(variant: TextVariant, extra: &str) -> String {
    cn!(variant.classes(), extra)
}

#[derive(Properties, PartialEq)]
pub struct HeadingProps {
    #[prop_or_default]
    pub level: HeadingLevel,
    #[prop_or_default]
    pub id: Option<String>,
    #[prop_or_default]
    pub class: String,
    #[prop_or_default]
    pub children: Children,
}

#[function_component(Heading)]
pub fn heading(props: &HeadingProps) -> Html {
    let tag = props.level.tag();
    html! {
        <@{tag} id={props.id.clone()} class={heading_classes(props.level, &props.class)}>
            { for props.children.iter() }
        </@>
    }
}

#[derive(Properties, PartialEq)]
pub struct TextProps {
    #[prop_or_default]
    pub variant: TextVariant,
    #[prop_or_default]
    pub class: String,
    #[prop_or_default]
    pub children: Children,
}

#[function_component(Text)]
pub fn text(props: &TextProps) -> Html {
    html! {
        <p class={text_classes(props.variant, &props.class)}>
            { for props.children.iter() }
        </p>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn heading_tags() {
        assert_eq!(HeadingLevel::H1.tag(), "h1");
        assert_eq!(HeadingLevel::default().tag(), "h2");
        assert_eq!(HeadingLevel::H6.tag(), "h6");
    }

    #[test]
    fn heading_color_can_be_overridden() {
        let class = heading_classes(HeadingLevel::H1, "text-white");
        assert!(class.starts_with("text-4xl"));
        assert!(class.ends_with("text-white"));
        assert!(!class.contains("text-slate-900"));
    }

    #[test]
    fn responsive_sizes_survive_override() {
        let class = heading_classes(HeadingLevel::H1, "text-5xl");
        assert!(class.contains("md:text-6xl"));
        assert!(class.contains("text-5xl"));
        assert!(!class.contains(" text-4xl"));
        assert!(!class.starts_with("text-4xl"));
    }

    #[test]
    fn text_variants() {
        assert!(text_classes(TextVariant::Lead, "").contains("text-xl"));
        assert_eq!(text_classes(TextVariant::Muted, "mt-2"), "text-sm text-slate-500 mt-2");
    }
}
