//! Reusable UI components
//!
//! Mobile-first card layout: rounded surfaces, large touch targets and a
//! single accent colour.

mod button;
mod input;
mod modal;
mod toggle;

pub use button::*;
pub use input::*;
pub use modal::*;
pub use toggle::*;
