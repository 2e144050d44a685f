use log::Level;

pub const PRACTICE_NAME: &str = "Bright Harbour Dental";
pub const PRACTICE_EMAIL: &str = "hello@brightharbourdental.com";
pub const PRACTICE_PHONE: &str = "+44 20 7946 0321";
pub const PRACTICE_ADDRESS: &str = "14 Quayside Row, Harbourside, London SE1 2AB";

pub const OPENING_HOURS: &[(&str, &str)] = &[
    ("Monday – Thursday", "8:00 – 18:00"),
    ("Friday", "8:00 – 16:00"),
    ("Saturday", "9:00 – 13:00 (by appointment)"),
];

/// Topics offered in the contact form. The empty first entry means "no topic".
pub const CONTACT_TOPICS: &[&str] = &[
    "",
    "New patient consultation",
    "Teeth whitening",
    "Composite bonding",
    "Check-up & hygiene",
    "Something else",
];

/// How long the "Sent" indicator stays visible after handing off the draft.
pub const SENT_INDICATOR_MS: u32 = 5_000;

#[cfg(debug_assertions)]
pub fn log_level() -> Level {
    Level::Debug // Verbose console output during local development
}

#[cfg(not(debug_assertions))]
pub fn log_level() -> Level {
    Level::Info
}

pub fn page_title(section: &str) -> String {
    if section.is_empty() {
        PRACTICE_NAME.to_string()
    } else {
        format!("{} | {}", section, PRACTICE_NAME)
    }
}
