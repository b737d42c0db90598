//! Theme for Profile Desk.

mod styles;

pub use styles::GLOBAL_STYLES;
