use log::Level;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SocialLink {
    pub label: &'static str,
    pub href: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SiteConfig {
    pub owner: &'static str,
    pub tagline: &'static str,
    pub email: &'static str,
    pub phone: &'static str,
    pub socials: &'static [SocialLink],
    pub consent_storage_key: &'static str,
}

pub const SITE: SiteConfig = SiteConfig {
    owner: "Alex Martin",
    tagline: "Développeur freelance full-stack, Rust & web",
    email: "contact@alexmartin.dev",
    phone: "+33 6 12 34 56 78",
    socials: &[
        SocialLink { label: "GitHub", href: "https://github.com/alexmartin" },
        SocialLink { label: "LinkedIn", href: "https://www.linkedin.com/in/alexmartin" },
        SocialLink { label: "Malt", href: "https://www.malt.fr/profile/alexmartin" },
    ],
    consent_storage_key: "privacy-consent",
};

#[cfg(debug_assertions)]
pub fn log_level() -> Level {
    Level::Debug // verbose while running trunk serve locally
}

#[cfg(not(debug_assertions))]
pub fn log_level() -> Level {
    Level::Info
}

/// Simulated latency of the contact submission, in milliseconds.
#[cfg(debug_assertions)]
pub fn submit_delay_ms() -> u32 {
    300
}

#[cfg(not(debug_assertions))]
pub fn submit_delay_ms() -> u32 {
    800
}
