//! Literal page content. Everything here is fixed at build time and rendered
//! in the order it is authored.

use crate::components::icons::Icon;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ServiceEntry {
    pub title: &'static str,
    pub description: &'static str,
    pub icon: Icon,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LocationEntry {
    pub city: &'static str,
    pub address: &'static str,
    pub phone: &'static str,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Highlight {
    pub title: &'static str,
    pub description: &'static str,
    pub icon: Icon,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Stat {
    pub value: &'static str,
    pub label: &'static str,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Testimonial {
    pub badge: &'static str,
    pub quote: &'static str,
    pub author: &'static str,
}

/// Footer entry; `anchor` is set when the label has a section on the page.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FooterLink {
    pub label: &'static str,
    pub anchor: Option<&'static str>,
}

pub const NAV_ITEMS: [&str; 4] = ["Leistungen", "Standorte", "Über uns", "Kontakt"];

pub const SERVICES_ANCHOR: &str = "leistungen";
pub const ABOUT_ANCHOR: &str = "über-uns";
pub const LOCATIONS_ANCHOR: &str = "standorte";
pub const CONTACT_ANCHOR: &str = "kontakt";

pub const SERVICES: [ServiceEntry; 6] = [
    ServiceEntry {
        title: "Abschleppdienst",
        description: "Professionelles Abschleppen von PKW, LKW und Motorrädern – rund um die Uhr.",
        icon: Icon::Truck,
    },
    ServiceEntry {
        title: "Pannenhilfe",
        description: "Schnelle Hilfe vor Ort bei Reifenpannen, Batterieversagen oder anderen Defekten.",
        icon: Icon::Wrench,
    },
    ServiceEntry {
        title: "Bergungsdienst",
        description: "Spezialisierte Bergung von Fahrzeugen aus schwierigem Gelände oder nach Unfällen.",
        icon: Icon::AlertTriangle,
    },
    ServiceEntry {
        title: "ADAC Mobilitätspartner",
        description: "Als offizieller ADAC Partner garantieren wir höchste Qualitätsstandards.",
        icon: Icon::ShieldCheck,
    },
    ServiceEntry {
        title: "Fahrzeugtransporte",
        description: "Sicherer Transport Ihres Fahrzeugs an jeden gewünschten Ort in Europa.",
        icon: Icon::Car,
    },
    ServiceEntry {
        title: "ADAC Autovermietung",
        description: "Bleiben Sie mobil mit unseren Ersatzwagen direkt an unseren Standorten.",
        icon: Icon::Clock,
    },
];

pub const LOCATIONS: [LocationEntry; 3] = [
    LocationEntry {
        city: "Bergheim",
        address: "Kölner Str. 123, 50126 Bergheim",
        phone: "02271 - 123456",
    },
    LocationEntry {
        city: "Elsdorf",
        address: "Gewerbestraße 5, 50189 Elsdorf",
        phone: "02274 - 987654",
    },
    LocationEntry {
        city: "Kerpen",
        address: "Industriepark 10, 50171 Kerpen",
        phone: "02237 - 456789",
    },
];

pub const HIGHLIGHTS: [Highlight; 3] = [
    Highlight {
        title: "Schnelligkeit",
        description: "Durch unsere drei Standorte sind wir in kürzester Zeit bei Ihnen vor Ort.",
        icon: Icon::Clock,
    },
    Highlight {
        title: "Kompetenz",
        description: "Unsere Mitarbeiter werden regelmäßig geschult und verfügen über jahrelange Erfahrung.",
        icon: Icon::ShieldCheck,
    },
    Highlight {
        title: "Modernster Fuhrpark",
        description: "Wir verfügen über Spezialfahrzeuge für jede Art von Bergung und Transport.",
        icon: Icon::Truck,
    },
];

pub const STATS: [Stat; 3] = [
    Stat { value: "24/7", label: "Service" },
    Stat { value: "20+", label: "Fahrzeuge" },
    Stat { value: "40J.", label: "Erfahrung" },
];

pub const TESTIMONIAL: Testimonial = Testimonial {
    badge: "ADAC Geprüft",
    quote: "Hervorragender Service und extrem schnelle Reaktionszeit. Poulwey hat mir in einer schwierigen Situation sofort geholfen.",
    author: "Thomas M., Bergheim",
};

pub const FOOTER_SERVICES: [FooterLink; 5] = [
    FooterLink { label: "Abschleppdienst", anchor: Some(SERVICES_ANCHOR) },
    FooterLink { label: "Pannenhilfe", anchor: Some(SERVICES_ANCHOR) },
    FooterLink { label: "Bergungsdienst", anchor: Some(SERVICES_ANCHOR) },
    FooterLink { label: "Fahrzeugtransporte", anchor: Some(SERVICES_ANCHOR) },
    FooterLink { label: "Autovermietung", anchor: Some(SERVICES_ANCHOR) },
];

pub const FOOTER_COMPANY: [FooterLink; 5] = [
    FooterLink { label: "Über uns", anchor: Some(ABOUT_ANCHOR) },
    FooterLink { label: "Geschichte", anchor: None },
    FooterLink { label: "Standorte", anchor: Some(LOCATIONS_ANCHOR) },
    FooterLink { label: "Karriere", anchor: None },
    FooterLink { label: "Kontakt", anchor: Some(CONTACT_ANCHOR) },
];

/// Anchor id for a navigation label: lower-cased, whitespace runs joined by `-`.
pub fn section_anchor(label: &str) -> String {
    label
        .to_lowercase()
        .split_whitespace()
        .collect::<Vec<_>>()
        .join("-")
}

/// Dialable `tel:` link for a phone number as it is displayed.
pub fn dial_href(phone: &str) -> String {
    let digits: String = phone.chars().filter(|c| !c.is_whitespace()).collect();
    format!("tel:{}", digits)
}

/// Directions link to `address` on Google Maps.
pub fn route_href(address: &str) -> String {
    format!(
        "https://www.google.com/maps/dir/?api=1&destination={}",
        urlencoding::encode(address)
    )
}

/// Map search covering every office.
pub fn all_locations_href() -> String {
    format!(
        "https://www.google.com/maps/search/?api=1&query={}",
        urlencoding::encode("Poulwey Abschleppdienst Rhein-Erft-Kreis")
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    const SECTION_IDS: [&str; 4] = [SERVICES_ANCHOR, ABOUT_ANCHOR, LOCATIONS_ANCHOR, CONTACT_ANCHOR];

    #[test]
    fn nav_labels_map_to_section_ids() {
        let anchors: Vec<String> = NAV_ITEMS.iter().map(|label| section_anchor(label)).collect();
        assert_eq!(anchors, vec!["leistungen", "standorte", "über-uns", "kontakt"]);
        for anchor in &anchors {
            assert!(SECTION_IDS.contains(&anchor.as_str()), "no section for {}", anchor);
        }
    }

    #[test]
    fn section_anchor_collapses_whitespace() {
        assert_eq!(section_anchor("  Über   Uns "), "über-uns");
        assert_eq!(section_anchor("Kontakt"), "kontakt");
    }

    #[test]
    fn dial_href_strips_whitespace_only() {
        assert_eq!(dial_href("02271 - 123456"), "tel:02271-123456");
        assert_eq!(dial_href("02272 91\t98 00"), "tel:02272919800");
    }

    #[test]
    fn route_href_encodes_address() {
        assert_eq!(
            route_href("Kölner Str. 123, 50126 Bergheim"),
            "https://www.google.com/maps/dir/?api=1&destination=K%C3%B6lner%20Str.%20123%2C%2050126%20Bergheim"
        );
        assert!(all_locations_href().ends_with("Poulwey%20Abschleppdienst%20Rhein-Erft-Kreis"));
    }

    #[test]
    fn services_keep_authored_order() {
        let titles: Vec<&str> = SERVICES.iter().map(|s| s.title).collect();
        assert_eq!(
            titles,
            vec![
                "Abschleppdienst",
                "Pannenhilfe",
                "Bergungsdienst",
                "ADAC Mobilitätspartner",
                "Fahrzeugtransporte",
                "ADAC Autovermietung",
            ]
        );
        assert_eq!(SERVICES[2].icon, Icon::AlertTriangle);
    }

    #[test]
    fn locations_keep_authored_order() {
        let cities: Vec<&str> = LOCATIONS.iter().map(|l| l.city).collect();
        assert_eq!(cities, vec!["Bergheim", "Elsdorf", "Kerpen"]);
        assert!(LOCATIONS.iter().all(|l| l.address.ends_with(l.city)));
    }

    #[test]
    fn footer_anchors_point_at_sections() {
        for link in FOOTER_SERVICES.iter().chain(FOOTER_COMPANY.iter()) {
            if let Some(anchor) = link.anchor {
                assert!(SECTION_IDS.contains(&anchor));
            }
        }
        assert_eq!(FOOTER_COMPANY.iter().filter(|l| l.anchor.is_none()).count(), 2);
    }
}
