//! Domain models for the consult-notes system.

mod consultation;
mod status;

pub use consultation::*;
pub use status::*;
