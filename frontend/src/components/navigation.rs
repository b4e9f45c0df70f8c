use yew::prelude::*;
use yew_hooks::prelude::*;

use crate::utils::class_names::cn;
use crate::utils::validation::sanitize_url;

const SCROLLED_AFTER_PX: f64 = 50.0;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavLink {
    pub label: String,
    pub href: String,
}

impl NavLink {
    pub fn new(label: &str, href: &str) -> Self {
        Self {
            label: label.to_string(),
            href: href.to_string(),
        }
    }
}

#[derive(Properties, PartialEq)]
pub struct NavigationProps {
    pub brand: String,
    pub links: Vec<NavLink>,
}

pub fn is_scrolled(scroll_y: f64) -> bool {
    scroll_y > SCROLLED_AFTER_PX
}

pub fn nav_classes(scrolled: bool) -> String {
    cn!(
        "fixed inset-x-0 top-0 z-40 bg-transparent transition-all duration-300",
        scrolled.then(|| "bg-white/90 shadow-md backdrop-blur")
    )
}

pub fn menu_classes(open: bool) -> String {
    cn!(
        "absolute inset-x-0 top-full flex-col gap-1 bg-white px-6 pb-6 shadow-lg md:static md:flex md:flex-row md:gap-6 md:bg-transparent md:p-0 md:shadow-none",
        if open { "flex" } else { "hidden" }
    )
}

#[function_component(Navigation)]
pub fn navigation(props: &NavigationProps) -> Html {
    let (_, scroll_y) = use_window_scroll();
    let menu_open = use_state(|| false);
    let scrolled = is_scrolled(scroll_y);

    let toggle_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            menu_open.set(!*menu_open);
        })
    };

    let close_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |_: MouseEvent| menu_open.set(false))
    };

    html! {
        <nav class={nav_classes(scrolled)} aria-label="Navigation principale">
            <div class="relative mx-auto flex max-w-6xl items-center justify-between px-6 py-4">
                <a href="/" class="text-lg font-bold text-slate-900">{ &props.brand }</a>
                <button
                    class="inline-flex flex-col gap-1.5 p-2 md:hidden"
                    aria-label="Ouvrir le menu"
                    aria-expanded={if *menu_open { "true" } else { "false" }}
                    onclick={toggle_menu}
                >
                    <span class="block h-0.5 w-6 bg-slate-900"></span>
                    <span class="block h-0.5 w-6 bg-slate-900"></span>
                    <span class="block h-0.5 w-6 bg-slate-900"></span>
                </button>
                <ul class={menu_classes(*menu_open)}>
                    { for props.links.iter().map(|link| html! {
                        <li>
                            <a
                                href={sanitize_url(&link.href)}
                                class="block py-2 text-sm font-medium text-slate-700 hover:text-sky-600"
                                onclick={close_menu.clone()}
                            >
                                { &link.label }
                            </a>
                        </li>
                    }) }
                </ul>
            </div>
        </nav>
    }
}
