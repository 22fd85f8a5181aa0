use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

// ===== SITE CONFIG =====

/// Page-level settings. Every field has a default, so a host page only
/// writes the values it wants to change.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
#[serde(default)]
pub struct SiteConfig {
    pub gallery: GallerySection,
    pub contact: ContactSection,
    pub reveal: RevealSection,
}

impl SiteConfig {
    pub fn from_toml_str(source: &str) -> Result<Self, ConfigError> {
        let config: SiteConfig = toml::from_str(source)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        self.gallery.validate()?;
        self.contact.validate()?;
        self.reveal.validate()
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct GallerySection {
    /// Slides the page is expected to carry. The deck found in the page
    /// wins; a mismatch is only reported.
    pub total_slides: usize,
    pub auto_slide_delay_ms: u32,
    pub swipe_threshold_px: f64,
    pub fade_in_delay_ms: u32,
    pub fade_out_ms: u32,
    pub cross_fade_ms: u32,
    pub cross_fade_dim_opacity: f32,
}

impl GallerySection {
    pub const DEFAULT_TOTAL_SLIDES: usize = 10;

    fn validate(&self) -> Result<(), ConfigError> {
        if self.total_slides == 0 {
            return Err(invalid("gallery.total_slides", "must be at least 1"));
        }
        if self.auto_slide_delay_ms == 0 {
            return Err(invalid("gallery.auto_slide_delay_ms", "must be positive"));
        }
        if !self.swipe_threshold_px.is_finite() || self.swipe_threshold_px < 0.0 {
            return Err(invalid(
                "gallery.swipe_threshold_px",
                "must be a non-negative number",
            ));
        }
        if !(0.0..=1.0).contains(&self.cross_fade_dim_opacity) {
            return Err(invalid(
                "gallery.cross_fade_dim_opacity",
                "must be between 0 and 1",
            ));
        }
        Ok(())
    }
}

impl Default for GallerySection {
    fn default() -> Self {
        Self {
            total_slides: Self::DEFAULT_TOTAL_SLIDES,
            auto_slide_delay_ms: 5000,
            swipe_threshold_px: 50.0,
            fade_in_delay_ms: 10,
            fade_out_ms: 300,
            cross_fade_ms: 150,
            cross_fade_dim_opacity: 0.3,
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct ContactSection {
    /// International number, digits only, as wa.me expects it.
    pub whatsapp_number: String,
    pub message: String,
}

impl ContactSection {
    fn validate(&self) -> Result<(), ConfigError> {
        if self.whatsapp_number.is_empty()
            || !self.whatsapp_number.chars().all(|c| c.is_ascii_digit())
        {
            return Err(invalid("contact.whatsapp_number", "must be digits only"));
        }
        Ok(())
    }
}

impl Default for ContactSection {
    fn default() -> Self {
        Self {
            whatsapp_number: "5521973585882".to_string(),
            message: "Olá! Gostaria de saber mais informações sobre os artistas e shows."
                .to_string(),
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct RevealSection {
    pub threshold: f64,
    pub root_margin: String,
}

impl RevealSection {
    fn validate(&self) -> Result<(), ConfigError> {
        if !(0.0..=1.0).contains(&self.threshold) {
            return Err(invalid("reveal.threshold", "must be between 0 and 1"));
        }
        Ok(())
    }
}

impl Default for RevealSection {
    fn default() -> Self {
        Self {
            threshold: 0.1,
            root_margin: "0px 0px -50px 0px".to_string(),
        }
    }
}

fn invalid(field: &'static str, reason: &str) -> ConfigError {
    ConfigError::Invalid {
        field,
        reason: reason.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_source_yields_defaults() {
        let config = SiteConfig::from_toml_str("").unwrap();
        assert_eq!(config, SiteConfig::default());
        assert_eq!(config.gallery.total_slides, 10);
        assert_eq!(config.gallery.auto_slide_delay_ms, 5000);
        assert_eq!(config.gallery.swipe_threshold_px, 50.0);
        assert_eq!(
            (
                config.gallery.fade_in_delay_ms,
                config.gallery.cross_fade_ms,
                config.gallery.fade_out_ms
            ),
            (10, 150, 300)
        );
    }

    #[test]
    fn partial_section_keeps_other_defaults() {
        let config = SiteConfig::from_toml_str(
            r#"
            [gallery]
            auto_slide_delay_ms = 8000

            [contact]
            message = "Oi!"
            "#,
        )
        .unwrap();
        assert_eq!(config.gallery.auto_slide_delay_ms, 8000);
        assert_eq!(config.gallery.fade_out_ms, 300);
        assert_eq!(config.contact.message, "Oi!");
        assert_eq!(config.contact.whatsapp_number, "5521973585882");
        assert_eq!(config.reveal, RevealSection::default());
    }

    #[test]
    fn malformed_toml_is_a_parse_error() {
        let err = SiteConfig::from_toml_str("[gallery\n").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn rejects_out_of_range_values() {
        let zero_slides = SiteConfig::from_toml_str("[gallery]\ntotal_slides = 0\n").unwrap_err();
        assert!(matches!(
            zero_slides,
            ConfigError::Invalid { field: "gallery.total_slides", .. }
        ));

        let dim = SiteConfig::from_toml_str("[gallery]\ncross_fade_dim_opacity = 1.5\n")
            .unwrap_err();
        assert!(matches!(
            dim,
            ConfigError::Invalid { field: "gallery.cross_fade_dim_opacity", .. }
        ));

        let number = SiteConfig::from_toml_str("[contact]\nwhatsapp_number = \"+55 21\"\n")
            .unwrap_err();
        assert!(matches!(
            number,
            ConfigError::Invalid { field: "contact.whatsapp_number", .. }
        ));
    }
}
