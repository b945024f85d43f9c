//! Editorial content for every section, loaded from `content/site.json`.

use serde::Deserialize;

use crate::error::ContentError;

const SITE_JSON: &str = include_str!("../content/site.json");

#[derive(Clone, Debug, Deserialize, PartialEq)]
pub struct SiteContent {
    pub nav: Vec<NavLink>,
    pub hero: Hero,
    pub quotes: Vec<Quote>,
    pub gallery: Vec<GalleryImage>,
    pub about: About,
    pub services: Vec<Service>,
    pub plans: Vec<Plan>,
    pub testimonials: Vec<Testimonial>,
    pub credentials: Vec<String>,
    pub contact: Contact,
}

#[derive(Clone, Debug, Deserialize, PartialEq)]
pub struct NavLink {
    pub name: String,
    /// Id of the section the link scrolls to.
    pub target: String,
}

#[derive(Clone, Debug, Deserialize, PartialEq)]
pub struct Hero {
    pub headline: String,
    /// Index of the first headline word drawn in the primary color.
    pub accent_from: usize,
    pub subtitle: Vec<String>,
    pub cta: String,
    pub video: String,
}

#[derive(Clone, Debug, Deserialize, PartialEq)]
pub struct Quote {
    pub text: String,
    pub highlight: Vec<String>,
}

#[derive(Clone, Debug, Deserialize, PartialEq)]
pub struct GalleryImage {
    pub src: String,
    pub alt: String,
}

#[derive(Clone, Debug, Deserialize, PartialEq)]
pub struct About {
    pub heading: String,
    pub paragraphs: Vec<String>,
    pub image: String,
    pub stats: Vec<Stat>,
}

#[derive(Clone, Debug, Deserialize, PartialEq)]
pub struct Stat {
    pub value: u32,
    pub suffix: String,
    pub label: String,
}

#[derive(Clone, Debug, Deserialize, PartialEq)]
pub struct Service {
    pub number: String,
    pub icon: String,
    pub title: String,
    pub description: String,
    pub features: Vec<String>,
}

#[derive(Clone, Debug, Deserialize, PartialEq)]
pub struct Plan {
    pub name: String,
    pub description: String,
    pub price: String,
    pub period: String,
    #[serde(default)]
    pub popular: bool,
    pub features: Vec<String>,
    pub cta: String,
}

#[derive(Clone, Debug, Deserialize, PartialEq)]
pub struct Testimonial {
    pub name: String,
    pub text: String,
    pub role: String,
}

#[derive(Clone, Debug, Deserialize, PartialEq)]
pub struct Contact {
    pub location: String,
    pub methods: Vec<ContactMethod>,
    pub booking: Booking,
    pub brand: String,
    pub tagline: String,
}

#[derive(Clone, Debug, Deserialize, PartialEq)]
pub struct ContactMethod {
    pub label: String,
    pub value: String,
    pub href: String,
    pub color: String,
    pub icon: String,
}

#[derive(Clone, Debug, Deserialize, PartialEq)]
pub struct Booking {
    pub phone: String,
    pub message: String,
}

impl Booking {
    /// WhatsApp chat link with the message prefilled.
    pub fn whatsapp_url(&self) -> String {
        format!(
            "https://wa.me/{}?text={}",
            self.phone,
            urlencoding::encode(&self.message)
        )
    }
}

impl SiteContent {
    pub fn parse(json: &str) -> Result<Self, ContentError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn embedded() -> Result<Self, ContentError> {
        Self::parse(SITE_JSON)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn site() -> SiteContent {
        SiteContent::embedded().unwrap()
    }

    #[test]
    fn embedded_content_parses() {
        let site = site();
        assert_eq!(site.nav.len(), 6);
        assert_eq!(site.quotes.len(), 2);
        assert_eq!(site.gallery.len(), 5);
    }

    #[test]
    fn cards_have_display_fields() {
        let site = site();
        for service in &site.services {
            assert!(!service.title.is_empty());
            assert!(!service.description.is_empty());
            assert!(!service.features.is_empty());
        }
        for plan in &site.plans {
            assert!(!plan.name.is_empty());
            assert!(!plan.price.is_empty());
            assert!(!plan.features.is_empty());
        }
        for image in &site.gallery {
            assert!(!image.src.is_empty());
        }
    }

    #[test]
    fn popular_defaults_to_false() {
        let popular: Vec<_> = site()
            .plans
            .iter()
            .filter(|plan| plan.popular)
            .map(|plan| plan.name.clone())
            .collect();
        assert_eq!(popular, vec!["Pro".to_string()]);
    }

    #[test]
    fn nav_targets_are_section_ids() {
        let site = site();
        assert_eq!(site.nav[0].target, "home");
        assert_eq!(site.nav.last().map(|link| link.target.as_str()), Some("contact"));
    }

    #[test]
    fn missing_field_is_a_parse_error() {
        let err = SiteContent::parse(r#"{ "nav": [] }"#).unwrap_err();
        assert!(matches!(err, ContentError::Parse(_)));
    }

    #[test]
    fn booking_message_is_url_encoded() {
        let url = site().contact.booking.whatsapp_url();
        assert!(url.starts_with("https://wa.me/96179177371?text=Hi%20Omar%21%20I%27m"));
        assert!(!url.contains(' '));
    }
}
