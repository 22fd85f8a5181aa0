use shared::ContactSection;
use web_sys::Element;

use crate::dom::{self, DomError};

const BUTTON_ID: &str = "whatsappBtn";

/// Opens a WhatsApp chat with the studio, message pre-filled, when the
/// contact button is clicked.
pub fn setup(contact: &ContactSection) -> Result<(), DomError> {
    let button: Element = dom::element_by_id(BUTTON_ID)?;
    let url = contact.whatsapp_url();
    dom::listen(&button, "click", move |_event| {
        if let Err(error) = open_in_new_tab(&url) {
            zoon::eprintln!("Failed to open WhatsApp chat: {error}");
        }
    })
}

fn open_in_new_tab(url: &str) -> Result<(), DomError> {
    dom::window()?.open_with_url_and_target(url, "_blank")?;
    Ok(())
}
