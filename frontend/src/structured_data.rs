//! schema.org description of the business, embedded in the landing page as
//! JSON-LD so search engines can show phone numbers and offices.

use serde::Serialize;

use crate::config::{
    CONTACT_MAIL, EMERGENCY_HREF, HEAD_OFFICE_CITY, HEAD_OFFICE_STREET, LEGAL_NAME, REGION,
};
use crate::content::{dial_href, LocationEntry, LOCATIONS, SERVICES};

#[derive(Debug, PartialEq, Serialize)]
pub struct PostalAddress<'a> {
    #[serde(rename = "@type")]
    kind: &'static str,
    #[serde(rename = "streetAddress")]
    street: &'a str,
    #[serde(rename = "postalCode")]
    postal_code: &'a str,
    #[serde(rename = "addressLocality")]
    locality: &'a str,
    #[serde(rename = "addressCountry")]
    country: &'static str,
}

impl<'a> PostalAddress<'a> {
    /// Splits "Street 1, 12345 City" into its parts. Text that does not
    /// follow that shape ends up in `street`.
    pub fn parse(address: &'a str) -> Self {
        let (street, rest) = address.split_once(", ").unwrap_or((address, ""));
        Self::from_parts(street, rest)
    }

    fn from_parts(street: &'a str, postal_and_city: &'a str) -> Self {
        let (postal_code, locality) = postal_and_city
            .split_once(' ')
            .unwrap_or(("", postal_and_city));
        PostalAddress {
            kind: "PostalAddress",
            street,
            postal_code,
            locality,
            country: "DE",
        }
    }
}

#[derive(Debug, Serialize)]
struct Department<'a> {
    #[serde(rename = "@type")]
    kind: &'static str,
    name: String,
    telephone: String,
    address: PostalAddress<'a>,
}

#[derive(Debug, Serialize)]
struct Business<'a> {
    #[serde(rename = "@context")]
    context: &'static str,
    #[serde(rename = "@type")]
    kind: &'static str,
    name: &'static str,
    telephone: &'static str,
    email: &'static str,
    #[serde(rename = "openingHours")]
    opening_hours: &'static str,
    #[serde(rename = "areaServed")]
    area_served: &'static str,
    #[serde(rename = "knowsAbout")]
    knows_about: Vec<&'static str>,
    address: PostalAddress<'a>,
    department: Vec<Department<'a>>,
}

fn department(location: &LocationEntry) -> Department<'static> {
    Department {
        kind: "AutomotiveBusiness",
        name: format!("{} {}", LEGAL_NAME, location.city),
        telephone: strip_scheme(&dial_href(location.phone)).to_string(),
        address: PostalAddress::parse(location.address),
    }
}

fn strip_scheme(href: &str) -> &str {
    href.strip_prefix("tel:").unwrap_or(href)
}

/// JSON-LD document for the landing page `<script type="application/ld+json">`.
pub fn business_json_ld() -> serde_json::Result<String> {
    let business = Business {
        context: "https://schema.org",
        kind: "AutomotiveBusiness",
        name: LEGAL_NAME,
        telephone: strip_scheme(EMERGENCY_HREF),
        email: CONTACT_MAIL,
        opening_hours: "Mo-Su 00:00-23:59",
        area_served: REGION,
        knows_about: SERVICES.iter().map(|s| s.title).collect(),
        address: PostalAddress::from_parts(HEAD_OFFICE_STREET, HEAD_OFFICE_CITY),
        department: LOCATIONS.iter().map(department).collect(),
    };
    serde_json::to_string(&business)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::Value;

    #[test]
    fn parses_street_postal_code_and_city() {
        let address = PostalAddress::parse("Gewerbestraße 5, 50189 Elsdorf");
        assert_eq!(address.street, "Gewerbestraße 5");
        assert_eq!(address.postal_code, "50189");
        assert_eq!(address.locality, "Elsdorf");
    }

    #[test]
    fn unstructured_address_stays_in_street() {
        let address = PostalAddress::parse("Am Hafen");
        assert_eq!(address.street, "Am Hafen");
        assert_eq!(address.postal_code, "");
    }

    #[test]
    fn json_ld_lists_every_office() {
        let json: Value = serde_json::from_str(&business_json_ld().unwrap()).unwrap();
        assert_eq!(json["@context"], "https://schema.org");
        assert_eq!(json["telephone"], "02272919800");
        assert_eq!(json["address"]["addressLocality"], "Bergheim");

        let departments = json["department"].as_array().unwrap();
        assert_eq!(departments.len(), 3);
        assert_eq!(departments[1]["telephone"], "02274-987654");
        assert_eq!(departments[2]["address"]["postalCode"], "50171");
        assert_eq!(json["knowsAbout"].as_array().unwrap().len(), 6);
    }
}
