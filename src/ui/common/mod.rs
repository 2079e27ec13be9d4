//! Common reusable UI components
//!
//! Shared by the login and registration pages.

pub mod button;
pub mod form;

pub use button::SubmitButton;
pub use form::FormField;
