//! Interaction logic for the Listenbourg department map: region lookups,
//! pan/zoom viewport, and hover/tooltip coordination over a [`surface::RenderSurface`].

pub mod color;
pub mod config;
pub mod error;
pub mod hover;
pub mod labels;
pub mod models;
pub mod regions;
pub mod session;
pub mod surface;
pub mod tooltip;
pub mod viewport;

pub use error::{MapError, Result};
pub use session::MapSession;
