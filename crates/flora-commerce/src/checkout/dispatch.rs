//! Dispatch link construction.
//!
//! Checkout's only external side effect is navigating to a prefilled chat
//! link. Building that link is all this module does; the navigation itself
//! is fire-and-forget and belongs to the caller, which clears the cart
//! without waiting on the channel.

/// Build the `wa.me` link carrying the order message.
pub fn whatsapp_link(phone: &str, message: &str) -> String {
    format!("https://wa.me/{}?text={}", phone, urlencoding::encode(message))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_link_shape() {
        let link = whatsapp_link("5358702873", "hola mundo");
        assert_eq!(link, "https://wa.me/5358702873?text=hola%20mundo");
    }

    #[test]
    fn test_message_is_fully_encoded() {
        let link = whatsapp_link("5358702873", "*Pedido*\ntotal: $1.00 \u{1f490}");
        let (_, query) = link.split_once("?text=").unwrap();
        assert!(!query.contains('\n'));
        assert!(!query.contains('$'));
        assert!(!query.contains('*'));
        assert!(query.contains("%0A"));
    }
}
