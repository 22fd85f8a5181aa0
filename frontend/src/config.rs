use shared::SiteConfig;
use web_sys::Element;

use crate::dom;

/// Id of the optional `<script type="application/toml">` block a page uses
/// to override defaults.
const CONFIG_ELEMENT_ID: &str = "site-config";

pub fn load() -> SiteConfig {
    let Ok(element) = dom::element_by_id::<Element>(CONFIG_ELEMENT_ID) else {
        return SiteConfig::default();
    };
    let source = element.text_content().unwrap_or_default();
    match SiteConfig::from_toml_str(&source) {
        Ok(config) => {
            zoon::println!("Site config loaded from #{CONFIG_ELEMENT_ID}");
            config
        }
        Err(error) => {
            zoon::eprintln!("{error}; using defaults");
            SiteConfig::default()
        }
    }
}
