//! Profile Desk UI Components
//!
//! Dioxus primitives shared by the desktop shell: buttons, labelled inputs,
//! the toggle switch and the modal shell. Styling comes from class names
//! defined in the shell's global stylesheet.
//!
//! ## Palette
//!
//! - **Teal (#0f766e)**: primary actions, active toggles
//! - **Slate (#1e293b)**: text and card borders
//! - **Rose (#e11d48)**: destructive actions and errors

pub mod components;

pub use components::*;
