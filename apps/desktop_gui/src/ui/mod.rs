//! Screens and widgets for the movie browser.

pub mod app;
pub mod card;
pub mod details;
pub mod home;
pub mod theme;
pub mod toast;

#[cfg(test)]
pub mod test_support;
