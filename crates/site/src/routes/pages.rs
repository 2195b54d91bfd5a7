//! Static marketing pages: services and contact, plus the 404 page.

use askama::Template;
use askama_web::WebTemplate;
use axum::http::StatusCode;
use axum::response::IntoResponse;

use crate::filters;

/// A service offering listed on the services page.
pub struct ServiceItem {
    pub title: &'static str,
    pub description: &'static str,
}

const SERVICES: [ServiceItem; 4] = [
    ServiceItem {
        title: "Repair and maintenance",
        description: "Workshop and on-site repair for all major scale brands, \
                      from shop counter scales to 60-tonne weighbridges.",
    },
    ServiceItem {
        title: "Calibration",
        description: "Traceable calibration with certified test weights, \
                      documented with a calibration certificate.",
    },
    ServiceItem {
        title: "Trade verification",
        description: "We prepare equipment for legal-for-trade verification \
                      and attend the inspection with you.",
    },
    ServiceItem {
        title: "Installation",
        description: "Site survey, foundations advice and commissioning for \
                      platform scales and weighbridges.",
    },
];

/// Services page template.
#[derive(Template, WebTemplate)]
#[template(path = "services.html")]
pub struct ServicesTemplate {
    pub services: &'static [ServiceItem],
}

/// Display the services page.
pub async fn services() -> impl IntoResponse {
    ServicesTemplate {
        services: &SERVICES,
    }
}

/// Contact page template.
#[derive(Template, WebTemplate)]
#[template(path = "contact.html")]
pub struct ContactTemplate {
    pub phone: &'static str,
    pub whatsapp_url: &'static str,
    pub email: &'static str,
    pub address_lines: &'static [&'static str],
    pub opening_hours: &'static [(&'static str, &'static str)],
}

const ADDRESS_LINES: [&str; 3] = ["ScaleHouse Weighing", "14 Foundry Road", "Unit 3, Millbrook Industrial Estate"];

const OPENING_HOURS: [(&str, &str); 3] = [
    ("Monday - Friday", "08:00 - 17:00"),
    ("Saturday", "09:00 - 13:00"),
    ("Sunday", "Closed"),
];

/// Display the contact page.
pub async fn contact() -> impl IntoResponse {
    ContactTemplate {
        phone: "+27 21 555 0142",
        whatsapp_url: "https://wa.me/27215550142",
        email: "sales@scalehouse.example",
        address_lines: &ADDRESS_LINES,
        opening_hours: &OPENING_HOURS,
    }
}

/// Not-found page template.
#[derive(Template, WebTemplate)]
#[template(path = "404.html")]
pub struct NotFoundTemplate;

/// Render the 404 page. Also used as the router fallback.
pub async fn not_found() -> impl IntoResponse {
    (StatusCode::NOT_FOUND, NotFoundTemplate)
}
