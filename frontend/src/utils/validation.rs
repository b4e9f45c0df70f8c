//! String clean-up and validation for values that end up in markup.
//!
//! `sanitize_input` is a denylist filter, not an HTML parser. It strips the obvious injection
//! vectors and also alters harmless text that contains `<` or `>`. Rendering through Yew
//! already escapes text nodes; this is a second layer for values echoed back to the visitor.

use once_cell::sync::Lazy;
use regex::Regex;

const MAX_EMAIL_LEN: usize = 254;

static ANGLE_BRACKETS: Lazy<Regex> = Lazy::new(|| Regex::new(r"[<>]").unwrap());
static JAVASCRIPT_SCHEME: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?i)javascript:").unwrap());
static EVENT_HANDLER: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?i)on\w+=").unwrap());
static EMAIL: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").unwrap());
static FRENCH_PHONE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^(?:(?:\+|00)33[ .-]*(?:\(0\)[ .-]*)?|0)[1-9](?:[ .-]*[0-9]{2}){4}$").unwrap()
});

pub fn sanitize_input(input: &str) -> String {
    let cleaned = ANGLE_BRACKETS.replace_all(input, "");
    let cleaned = JAVASCRIPT_SCHEME.replace_all(&cleaned, "");
    let cleaned = EVENT_HANDLER.replace_all(&cleaned, "");
    cleaned.trim().to_string()
}

pub fn is_valid_email(email: &str) -> bool {
    email.chars().count() <= MAX_EMAIL_LEN && EMAIL.is_match(email)
}

/// Accepts `06 12 34 56 78`, `06.12.34.56.78`, `+33 6 12 34 56 78`, `0033612345678`...
pub fn is_valid_phone_number(phone: &str) -> bool {
    FRENCH_PHONE.is_match(phone.trim())
}

pub fn format_name(name: &str) -> String {
    name.to_lowercase()
        .split(' ')
        .map(capitalize)
        .collect::<Vec<_>>()
        .join(" ")
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Only schemes that cannot execute script survive; anything else becomes `#`.
pub fn sanitize_url(url: &str) -> String {
    let trimmed = url.trim();
    if trimmed.is_empty() {
        return "#".to_string();
    }
    if trimmed.starts_with('#') || (trimmed.starts_with('/') && !trimmed.starts_with("//")) {
        return trimmed.to_string();
    }
    let lower = trimmed.to_ascii_lowercase();
    let allowed = ["https://", "http://", "mailto:", "tel:"];
    if allowed.iter().any(|scheme| lower.starts_with(scheme)) {
        trimmed.to_string()
    } else {
        "#".to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sanitize_strips_script_tags() {
        assert_eq!(
            sanitize_input("<script>alert(1)</script>Hello"),
            "scriptalert(1)/scriptHello"
        );
    }

    #[test]
    fn sanitize_strips_javascript_scheme_any_case() {
        assert_eq!(sanitize_input("JavaScript:alert(1)"), "alert(1)");
        assert_eq!(sanitize_input("  javascript:void(0)  "), "void(0)");
    }

    #[test]
    fn sanitize_strips_event_handlers() {
        assert_eq!(sanitize_input("<img src=x onerror=alert(1)>"), "img src=x alert(1)");
        assert_eq!(sanitize_input("ONCLICK=steal()"), "steal()");
    }

    #[test]
    fn sanitize_alters_benign_brackets() {
        assert_eq!(sanitize_input("2 < 3 > 1"), "2  3  1");
    }

    #[test]
    fn sanitize_keeps_plain_text() {
        assert_eq!(sanitize_input("  Bonjour, je suis intéressé.  "), "Bonjour, je suis intéressé.");
    }

    #[test]
    fn email_shapes() {
        assert!(is_valid_email("test@example.com"));
        assert!(is_valid_email("jean.pierre+devis@sub.example.fr"));
        assert!(!is_valid_email("test@domain"));
        assert!(!is_valid_email("no-at-sign.com"));
        assert!(!is_valid_email("with space@example.com"));
        assert!(!is_valid_email(""));
    }

    #[test]
    fn email_length_limit() {
        let local = "a".repeat(64);
        let domain = format!("{}.com", "b".repeat(MAX_EMAIL_LEN - 64 - 1 - 4));
        let exact = format!("{}@{}", local, domain);
        assert_eq!(exact.len(), MAX_EMAIL_LEN);
        assert!(is_valid_email(&exact));
        let too_long = format!("a{}", exact);
        assert!(!is_valid_email(&too_long));
    }

    #[test]
    fn email_limit_counts_characters_not_bytes() {
        let accented = format!("{}@exemple.fr", "é".repeat(200));
        assert_eq!(accented.chars().count(), 211);
        assert!(accented.len() > MAX_EMAIL_LEN);
        assert!(is_valid_email(&accented));

        let too_long = format!("{}@exemple.fr", "é".repeat(244));
        assert_eq!(too_long.chars().count(), 255);
        assert!(!is_valid_email(&too_long));
    }

    #[test]
    fn french_phone_numbers() {
        assert!(is_valid_phone_number("06 12 34 56 78"));
        assert!(is_valid_phone_number("0612345678"));
        assert!(is_valid_phone_number("01.23.45.67.89"));
        assert!(is_valid_phone_number("07-12-34-56-78"));
        assert!(is_valid_phone_number("+33 6 12 34 56 78"));
        assert!(is_valid_phone_number("+33612345678"));
        assert!(is_valid_phone_number("0033 6 12 34 56 78"));
    }

    #[test]
    fn rejects_other_numbers() {
        assert!(!is_valid_phone_number("123456"));
        assert!(!is_valid_phone_number("06 ١٢ ٣٤ ٥٦ ٧٨"));
        assert!(!is_valid_phone_number("０６１２３４５６７８"));
        assert!(!is_valid_phone_number("06\u{2003}12\u{2003}34\u{2003}56\u{2003}78"));
        assert!(!is_valid_phone_number("00 12 34 56 78"));
        assert!(!is_valid_phone_number("+44 20 7946 0958"));
        assert!(!is_valid_phone_number("06 12 34 56 7"));
        assert!(!is_valid_phone_number(""));
    }

    #[test]
    fn formats_names() {
        assert_eq!(format_name("jean pierre"), "Jean Pierre");
        assert_eq!(format_name("MARIE-CLAIRE dupont"), "Marie-claire Dupont");
        assert_eq!(format_name("élodie"), "Élodie");
        assert_eq!(format_name(""), "");
    }

    #[test]
    fn format_name_keeps_spacing() {
        assert_eq!(format_name("anne  marie"), "Anne  Marie");
    }

    #[test]
    fn sanitize_url_allows_safe_targets() {
        assert_eq!(sanitize_url("https://github.com/x"), "https://github.com/x");
        assert_eq!(sanitize_url("mailto:a@b.fr"), "mailto:a@b.fr");
        assert_eq!(sanitize_url("tel:+33612345678"), "tel:+33612345678");
        assert_eq!(sanitize_url("/mentions"), "/mentions");
        assert_eq!(sanitize_url("#contact"), "#contact");
    }

    #[test]
    fn sanitize_url_blocks_script_schemes() {
        assert_eq!(sanitize_url("javascript:alert(1)"), "#");
        assert_eq!(sanitize_url("  JAVASCRIPT:alert(1)"), "#");
        assert_eq!(sanitize_url("data:text/html;base64,AAAA"), "#");
        assert_eq!(sanitize_url("//evil.example"), "#");
        assert_eq!(sanitize_url(""), "#");
    }
}
