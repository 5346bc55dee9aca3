//! Frame-level glue between the screens and the shell: events out of
//! rendering, typed routes for navigation.

pub mod events;
pub mod routing;
