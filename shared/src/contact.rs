use crate::config::ContactSection;

const WHATSAPP_BASE: &str = "https://wa.me";

/// Chat link that opens WhatsApp on `number` with `message` pre-filled.
pub fn whatsapp_url(number: &str, message: &str) -> String {
    format!(
        "{WHATSAPP_BASE}/{number}?text={}",
        urlencoding::encode(message)
    )
}

impl ContactSection {
    pub fn whatsapp_url(&self) -> String {
        whatsapp_url(&self.whatsapp_number, &self.message)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn encodes_message_into_query() {
        assert_eq!(
            whatsapp_url("5521900000000", "Oi, tudo bem?"),
            "https://wa.me/5521900000000?text=Oi%2C%20tudo%20bem%3F"
        );
    }

    #[test]
    fn encodes_non_ascii_as_utf8() {
        assert_eq!(
            whatsapp_url("1", "Olá"),
            "https://wa.me/1?text=Ol%C3%A1"
        );
    }

    #[test]
    fn default_contact_points_at_studio_number() {
        let url = ContactSection::default().whatsapp_url();
        assert!(url.starts_with("https://wa.me/5521973585882?text=Ol%C3%A1%21%20Gostaria"));
        assert!(!url.contains(' '));
    }
}
