use yew::prelude::*;
use yew_router::prelude::*;
use log::info;

mod config;
mod content;
mod error;
mod utils {
    pub mod class_names;
    pub mod csrf;
    pub mod validation;
}
mod hooks {
    pub mod in_view;
}
mod components {
    pub mod button;
    pub mod card;
    pub mod fade_in;
    pub mod form;
    pub mod hero;
    pub mod modal;
    pub mod navigation;
    pub mod privacy_notice;
    pub mod skills;
    pub mod typography;
}
mod pages {
    pub mod home;
    pub mod not_found;
}

use components::navigation::{NavLink, Navigation};
use config::SITE;
use pages::{home::Home, not_found::NotFound};

#[derive(Clone, Routable, PartialEq)]
pub enum Route {
    #[at("/")]
    Home,
    #[not_found]
    #[at("/404")]
    NotFound,
}

fn switch(routes: Route) -> Html {
    match routes {
        Route::Home => {
            info!("Rendering Home page");
            html! { <Home /> }
        },
        Route::NotFound => {
            info!("Rendering NotFound page");
            html! { <NotFound /> }
        },
    }
}

fn nav_links() -> Vec<NavLink> {
    vec![
        NavLink::new("À propos", "/#about"),
        NavLink::new("Compétences", "/#skills"),
        NavLink::new("Projets", "/#projects"),
        NavLink::new("Contact", "/#contact"),
    ]
}

#[function_component]
fn App() -> Html {
    html! {
        <BrowserRouter>
            <Navigation brand={SITE.owner.to_string()} links={nav_links()} />
            <Switch<Route> render={switch} />
        </BrowserRouter>
    }
}

fn main() {
    // Initialize console error panic hook for better error messages
    console_error_panic_hook::set_once();

    // Initialize logging
    if let Err(e) = console_log::init_with_level(config::log_level()) {
        gloo_console::error!(format!("error initializing log: {}", e));
    }

    info!("Starting portfolio");
    yew::Renderer::<App>::new().render();
}
