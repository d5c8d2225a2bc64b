use log::Level;

pub const SITE_NAME: &str = "AI Engineering Consulting";
pub const PAGE_TITLE: &str = "AI Engineering Consulting - Expert AI Solutions";

// How long the shipped delivery collaborator pretends to talk to a backend.
pub const SIMULATED_DELIVERY_MS: u32 = 1_000;

#[cfg(debug_assertions)]
pub fn log_level() -> Level {
    Level::Debug  // Chattier logs when running locally
}

#[cfg(not(debug_assertions))]
pub fn log_level() -> Level {
    Level::Info
}
