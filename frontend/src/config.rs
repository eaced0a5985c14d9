
const DEFAULT_FORM_ID: &str = "xzzgkqwe";

/// Formspree form id, overridable at build time with `ZONDA_FORM_ID`.
pub fn form_id() -> &'static str {
    option_env!("ZONDA_FORM_ID").unwrap_or(DEFAULT_FORM_ID)
}

#[cfg(debug_assertions)]
pub fn form_endpoint() -> String {
    // a local mock can stand in for the form service during development
    option_env!("ZONDA_FORM_ENDPOINT")
        .map(str::to_string)
        .unwrap_or_else(|| format!("https://formspree.io/f/{}", form_id()))
}

#[cfg(not(debug_assertions))]
pub fn form_endpoint() -> String {
    format!("https://formspree.io/f/{}", form_id())
}

pub const PIXELPERFECT_APP_URL: &str = "https://pixelperfect.zonda.com";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pixelperfect_app_lives_on_the_company_domain() {
        assert_eq!(PIXELPERFECT_APP_URL, "https://pixelperfect.zonda.com");
    }
}
