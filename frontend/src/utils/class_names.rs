//! Utility-class merging.
//!
//! `cn!` joins class fragments and resolves conflicting utilities the way a later
//! stylesheet rule would: within one variant scope (`md:`, `hover:`...) the last class
//! of a group wins. Arbitrary values (`text-[14px]`, `bg-[url(..)]`) join the group their
//! utility implies. Classes we do not recognise are kept as-is, deduplicated, and never
//! merged with anything else.

pub trait ClassFragment {
    fn append_to(self, out: &mut Vec<String>);
}

impl ClassFragment for &str {
    fn append_to(self, out: &mut Vec<String>) {
        out.extend(self.split_whitespace().map(str::to_string));
    }
}

impl ClassFragment for String {
    fn append_to(self, out: &mut Vec<String>) {
        self.as_str().append_to(out);
    }
}

impl ClassFragment for &String {
    fn append_to(self, out: &mut Vec<String>) {
        self.as_str().append_to(out);
    }
}

impl<T: ClassFragment> ClassFragment for Option<T> {
    fn append_to(self, out: &mut Vec<String>) {
        if let Some(fragment) = self {
            fragment.append_to(out);
        }
    }
}

macro_rules! cn {
    ($($fragment:expr),* $(,)?) => {{
        let mut fragments: Vec<String> = Vec::new();
        $( $crate::utils::class_names::ClassFragment::append_to($fragment, &mut fragments); )*
        $crate::utils::class_names::merge_classes(fragments.iter().map(String::as_str))
    }};
}

pub(crate) use cn;

const PALETTE: &[&str] = &[
    "slate", "gray", "zinc", "neutral", "stone", "red", "orange", "amber", "yellow", "lime",
    "green", "emerald", "teal", "cyan", "sky", "blue", "indigo", "violet", "purple", "fuchsia",
    "pink", "rose",
];
const TEXT_SIZES: &[&str] = &[
    "xs", "sm", "base", "lg", "xl", "2xl", "3xl", "4xl", "5xl", "6xl", "7xl", "8xl", "9xl",
];
const TEXT_ALIGN: &[&str] = &["left", "center", "right", "justify", "start", "end"];
const FONT_WEIGHTS: &[&str] = &[
    "thin", "extralight", "light", "normal", "medium", "semibold", "bold", "extrabold", "black",
];
const RADII: &[&str] = &["", "none", "sm", "md", "lg", "xl", "2xl", "3xl", "full"];
const SHADOWS: &[&str] = &["", "sm", "md", "lg", "xl", "2xl", "inner", "none"];
const DISPLAY: &[&str] = &[
    "block", "inline-block", "inline", "flex", "inline-flex", "grid", "inline-grid", "hidden",
    "contents", "table",
];
const POSITION: &[&str] = &["static", "fixed", "absolute", "relative", "sticky"];

/// Groups that also clear the listed, more specific groups when they come later.
const OVERRIDES: &[(&str, &[&str])] = &[
    ("p", &["px", "py", "pt", "pr", "pb", "pl"]),
    ("px", &["pr", "pl"]),
    ("py", &["pt", "pb"]),
    ("m", &["mx", "my", "mt", "mr", "mb", "ml"]),
    ("mx", &["mr", "ml"]),
    ("my", &["mt", "mb"]),
    ("gap", &["gap-x", "gap-y"]),
    (
        "rounded",
        &["rounded-t", "rounded-r", "rounded-b", "rounded-l", "rounded-tl", "rounded-tr", "rounded-br", "rounded-bl"],
    ),
    ("rounded-t", &["rounded-tl", "rounded-tr"]),
    ("rounded-r", &["rounded-tr", "rounded-br"]),
    ("rounded-b", &["rounded-br", "rounded-bl"]),
    ("rounded-l", &["rounded-tl", "rounded-bl"]),
];

#[derive(Debug, Clone, PartialEq)]
struct ClassKey<'a> {
    variants: &'a str,
    important: bool,
    group: &'static str,
}

pub fn merge_classes<'a, I>(classes: I) -> String
where
    I: IntoIterator<Item = &'a str>,
{
    let mut kept: Vec<(&'a str, Option<ClassKey<'a>>)> = Vec::new();

    for class in classes {
        let key = class_key(class);
        kept.retain(|(existing, existing_key)| {
            if *existing == class {
                return false;
            }
            match (&key, existing_key) {
                (Some(new), Some(old)) => !conflicts(new, old),
                _ => true,
            }
        });
        kept.push((class, key));
    }

    kept.iter().map(|(class, _)| *class).collect::<Vec<_>>().join(" ")
}

fn conflicts(new: &ClassKey<'_>, old: &ClassKey<'_>) -> bool {
    if new.variants != old.variants || new.important != old.important {
        return false;
    }
    if new.group == old.group {
        return true;
    }
    OVERRIDES
        .iter()
        .any(|(group, cleared)| *group == new.group && cleared.contains(&old.group))
}

fn class_key(class: &str) -> Option<ClassKey<'_>> {
    let (variants, base) = split_variants(class);
    let (important, base) = match base.strip_prefix('!') {
        Some(rest) => (true, rest),
        None => (false, base),
    };
    utility_group(base).map(|group| ClassKey { variants, important, group })
}

/// Splits `md:hover:bg-red-500` into (`md:hover`, `bg-red-500`), ignoring colons inside `[...]`.
fn split_variants(class: &str) -> (&str, &str) {
    let mut depth = 0i32;
    let mut split_at = None;
    for (i, c) in class.char_indices() {
        match c {
            '[' => depth += 1,
            ']' => depth -= 1,
            ':' if depth == 0 => split_at = Some(i),
            _ => {}
        }
    }
    match split_at {
        Some(i) => (&class[..i], &class[i + 1..]),
        None => ("", class),
    }
}

fn utility_group(base: &str) -> Option<&'static str> {
    if DISPLAY.contains(&base) {
        return Some("display");
    }
    if POSITION.contains(&base) {
        return Some("position");
    }
    if matches!(base, "flex-row" | "flex-row-reverse" | "flex-col" | "flex-col-reverse") {
        return Some("flex-direction");
    }
    match base {
        "rounded" => return Some("rounded"),
        "shadow" => return Some("shadow"),
        "border" => return Some("border-width"),
        _ => {}
    }

    let unsigned = base.strip_prefix('-').unwrap_or(base);
    let prefixed: &[(&str, &'static str)] = &[
        ("justify-items-", "justify-items"),
        ("justify-self-", "justify-self"),
        ("justify-", "justify"),
        ("items-", "items"),
        ("gap-x-", "gap-x"),
        ("gap-y-", "gap-y"),
        ("gap-", "gap"),
        ("min-w-", "min-width"),
        ("max-w-", "max-width"),
        ("min-h-", "min-height"),
        ("max-h-", "max-height"),
        ("w-", "width"),
        ("h-", "height"),
        ("opacity-", "opacity"),
        ("z-", "z"),
        ("leading-", "leading"),
        ("tracking-", "tracking"),
        ("duration-", "duration"),
        ("ease-", "ease"),
    ];
    for &(prefix, group) in prefixed {
        if unsigned.starts_with(prefix) {
            return Some(group);
        }
    }

    let (head, value) = unsigned.split_once('-')?;
    match head {
        "p" | "px" | "py" | "pt" | "pr" | "pb" | "pl" => spacing_group(head),
        "m" | "mx" | "my" | "mt" | "mr" | "mb" | "ml" => spacing_group(head),
        "bg" => background_group(value),
        "text" => text_group(value),
        "font" => font_group(value),
        "rounded" => rounded_group(value),
        "shadow" if SHADOWS.contains(&value) => Some("shadow"),
        "shadow" if is_color(value) => Some("shadow-color"),
        "border" if matches!(value, "0" | "2" | "4" | "8") => Some("border-width"),
        "border" if is_color(value) => Some("border-color"),
        _ => None,
    }
}

fn spacing_group(head: &str) -> Option<&'static str> {
    let groups: &[&'static str] = &[
        "p", "px", "py", "pt", "pr", "pb", "pl", "m", "mx", "my", "mt", "mr", "mb", "ml",
    ];
    groups.iter().find(|g| **g == head).copied()
}

fn rounded_group(value: &str) -> Option<&'static str> {
    if RADII.contains(&value) {
        return Some("rounded");
    }
    let (side, size) = value.split_once('-').unwrap_or((value, ""));
    if !RADII.contains(&size) && !is_arbitrary(size) {
        return None;
    }
    match side {
        "t" => Some("rounded-t"),
        "r" => Some("rounded-r"),
        "b" => Some("rounded-b"),
        "l" => Some("rounded-l"),
        "tl" => Some("rounded-tl"),
        "tr" => Some("rounded-tr"),
        "br" => Some("rounded-br"),
        "bl" => Some("rounded-bl"),
        _ if is_arbitrary(value) => Some("rounded"),
        _ => None,
    }
}

fn is_arbitrary(value: &str) -> bool {
    value.starts_with('[') && value.ends_with(']')
}

fn background_group(value: &str) -> Option<&'static str> {
    match value {
        "cover" | "contain" | "auto" => Some("bg-size"),
        v if v.starts_with("[url(") => Some("bg-image"),
        "fixed" | "local" | "scroll" => Some("bg-attachment"),
        v if v.starts_with("gradient-") || v == "none" => Some("bg-image"),
        v if is_color(v) => Some("bg-color"),
        _ => None,
    }
}

fn text_group(value: &str) -> Option<&'static str> {
    if TEXT_SIZES.contains(&value) {
        Some("text-size")
    } else if TEXT_ALIGN.contains(&value) {
        Some("text-align")
    } else if is_color(value) {
        Some("text-color")
    } else if is_arbitrary(value) {
        // `text-[14px]`, `text-[1.1rem]`, `text-[length:var(--x)]`
        Some("text-size")
    } else {
        None
    }
}

fn font_group(value: &str) -> Option<&'static str> {
    if FONT_WEIGHTS.contains(&value) {
        Some("font-weight")
    } else if matches!(value, "sans" | "serif" | "mono") {
        Some("font-family")
    } else {
        None
    }
}

fn is_color(value: &str) -> bool {
    if let Some(arbitrary) = value.strip_prefix('[') {
        return arbitrary.starts_with('#')
            || arbitrary.starts_with("rgb")
            || arbitrary.starts_with("hsl");
    }
    let value = value.split('/').next().unwrap_or(value);
    if matches!(value, "transparent" | "current" | "inherit" | "black" | "white") {
        return true;
    }
    match value.split_once('-') {
        Some((hue, shade)) => {
            PALETTE.contains(&hue) && !shade.is_empty() && shade.chars().all(|c| c.is_ascii_digit())
        }
        None => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn later_background_color_wins() {
        assert_eq!(cn!("bg-red-500", "bg-blue-500"), "bg-blue-500");
    }

    #[test]
    fn unrelated_classes_are_kept_in_order() {
        assert_eq!(
            cn!("flex items-center", "gap-4 text-white"),
            "flex items-center gap-4 text-white"
        );
    }

    #[test]
    fn optional_fragments() {
        let active = true;
        let disabled = false;
        assert_eq!(
            cn!("px-4", active.then(|| "bg-sky-600"), disabled.then(|| "opacity-50")),
            "px-4 bg-sky-600"
        );
        assert_eq!(cn!(None::<&str>, String::from("rounded-lg")), "rounded-lg");
    }

    #[test]
    fn padding_shorthand_overrides_axes() {
        assert_eq!(cn!("px-2 py-1", "p-4"), "p-4");
        assert_eq!(cn!("p-4", "px-2"), "p-4 px-2");
        assert_eq!(cn!("pt-2", "py-6"), "py-6");
    }

    #[test]
    fn text_size_and_color_do_not_conflict() {
        assert_eq!(cn!("text-lg", "text-red-500"), "text-lg text-red-500");
        assert_eq!(cn!("text-lg text-red-500", "text-sm"), "text-red-500 text-sm");
        assert_eq!(cn!("text-left", "text-center"), "text-center");
    }

    #[test]
    fn variants_scope_conflicts() {
        assert_eq!(cn!("hover:bg-red-500", "bg-blue-500"), "hover:bg-red-500 bg-blue-500");
        assert_eq!(cn!("md:px-2", "md:px-8"), "md:px-8");
        assert_eq!(cn!("md:hover:text-white", "md:hover:text-slate-900"), "md:hover:text-slate-900");
    }

    #[test]
    fn display_and_position_groups() {
        assert_eq!(cn!("flex", "hidden"), "hidden");
        assert_eq!(cn!("relative", "sticky top-0"), "sticky top-0");
    }

    #[test]
    fn duplicates_collapse_to_last_position() {
        assert_eq!(cn!("shadow a b", "a"), "shadow b a");
    }

    #[test]
    fn border_width_and_color_are_separate() {
        assert_eq!(cn!("border border-slate-200", "border-2"), "border-slate-200 border-2");
        assert_eq!(cn!("border-slate-200", "border-sky-500/50"), "border-sky-500/50");
    }

    #[test]
    fn arbitrary_values() {
        assert_eq!(cn!("bg-[#111]", "bg-white"), "bg-white");
        assert_eq!(split_variants("bg-[url(a:b)]"), ("", "bg-[url(a:b)]"));
        assert_eq!(cn!("-mt-2", "mt-4"), "mt-4");
    }

    #[test]
    fn arbitrary_text_size_merges_with_scale() {
        assert_eq!(cn!("text-[14px]", "text-sm"), "text-sm");
        assert_eq!(cn!("text-lg", "text-[1.1rem]"), "text-[1.1rem]");
        assert_eq!(cn!("text-[14px]", "text-[#333]"), "text-[14px] text-[#333]");
    }

    #[test]
    fn arbitrary_background_image() {
        assert_eq!(cn!("bg-[url(/a.png)]", "bg-none"), "bg-none");
        assert_eq!(cn!("bg-[url(/a.png)]", "bg-white"), "bg-[url(/a.png)] bg-white");
    }

    #[test]
    fn side_radii() {
        assert_eq!(cn!("rounded-t-lg", "rounded-t-none"), "rounded-t-none");
        assert_eq!(cn!("rounded-t-lg rounded-bl", "rounded-md"), "rounded-md");
        assert_eq!(cn!("rounded-md", "rounded-t-lg"), "rounded-md rounded-t-lg");
        assert_eq!(cn!("rounded-tl-sm", "rounded-t-xl"), "rounded-t-xl");
        assert_eq!(cn!("rounded-[10px]", "rounded-lg"), "rounded-lg");
    }

    #[test]
    fn important_modifier_is_its_own_scope() {
        assert_eq!(cn!("!p-2", "p-4"), "!p-2 p-4");
    }

    #[test]
    fn unknown_classes_pass_through() {
        assert_eq!(cn!("fade-in", "card", "fade-in-visible"), "fade-in card fade-in-visible");
        assert_eq!(cn!(""), "");
    }
}
