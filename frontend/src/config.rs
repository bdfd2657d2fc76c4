use log::Level;

pub const COMPANY_NAME: &str = "POULWEY";
pub const LEGAL_NAME: &str = "Poulwey Abschlepp- und Bergedienst GmbH";
pub const REGION: &str = "Rhein-Erft-Kreis";

/// Scroll offset in px at which the navigation bar turns opaque (inclusive).
pub const SCROLL_THRESHOLD: f64 = 50.0;

/// Below this viewport width the link row is replaced by the menu toggle.
/// Mirrored in the nav stylesheet media queries.
pub const MOBILE_BREAKPOINT: u32 = 768;

pub const EMERGENCY_PHONE: &str = "02272 - 91 98 00";
pub const EMERGENCY_HREF: &str = "tel:02272919800";
pub const CONTACT_MAIL: &str = "dispo@poulwey.de";

pub const HEAD_OFFICE_STREET: &str = "Kölner Str. 123";
pub const HEAD_OFFICE_CITY: &str = "50126 Bergheim";

pub const HERO_IMAGE: &str =
    "https://images.unsplash.com/photo-1580273916550-e323be2ae537?auto=format&fit=crop&q=80&w=2000";
pub const ABOUT_IMAGE: &str =
    "https://images.unsplash.com/photo-1562141989-c5c79ac8f576?auto=format&fit=crop&q=80&w=1000";

pub fn mailto_href() -> String {
    format!("mailto:{}", CONTACT_MAIL)
}

#[cfg(debug_assertions)]
pub fn log_level() -> Level {
    Level::Debug // Verbose output when running locally
}

#[cfg(not(debug_assertions))]
pub fn log_level() -> Level {
    Level::Info
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::dial_href;

    #[test]
    fn emergency_href_matches_display_number() {
        let digits: String = EMERGENCY_PHONE.chars().filter(|c| c.is_ascii_digit()).collect();
        assert_eq!(EMERGENCY_HREF, format!("tel:{}", digits));
        assert!(dial_href(EMERGENCY_PHONE).starts_with("tel:02272"));
    }

    #[test]
    fn mailto_uses_contact_address() {
        assert_eq!(mailto_href(), "mailto:dispo@poulwey.de");
    }
}
