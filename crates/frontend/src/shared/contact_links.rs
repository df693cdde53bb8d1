//! Outbound contact link builders
//!
//! Pure string interpolation; these URLs are opaque to the rest of the app.

/// `tel:` link for the configured phone number.
pub fn tel_link(phone: &str) -> String {
    format!("tel:{}", phone)
}

/// `mailto:` link, optionally with a subject built from an item title.
pub fn mailto_link(email: &str, subject: Option<&str>) -> String {
    match subject {
        Some(subject) => format!("mailto:{}?subject={}", email, urlencoding::encode(subject)),
        None => format!("mailto:{}", email),
    }
}

/// WhatsApp deep link. The configured number is reduced to its digits;
/// an optional prefilled message is percent-encoded into `?text=`.
pub fn whatsapp_link(number: &str, text: Option<&str>) -> String {
    let digits: String = number.chars().filter(|c| c.is_ascii_digit()).collect();
    match text {
        Some(text) => format!("https://wa.me/{}?text={}", digits, urlencoding::encode(text)),
        None => format!("https://wa.me/{}", digits),
    }
}

/// Email subject for an item-specific inquiry.
pub fn item_inquiry_subject(title: &str) -> String {
    format!("استفسار عن {}", title)
}

/// Prefilled WhatsApp message for an item-specific inquiry.
pub fn item_inquiry_text(title: &str) -> String {
    format!("مرحباً، أود الاستفسار عن: {}", title)
}
