//! Application pages module
//!
//! - Landing page (home)
//! - Login page
//! - Register page
//! - Not found page

mod landing;
mod login;
mod not_found;
mod register;

pub use landing::LandingPage;
pub use login::LoginPage;
pub use not_found::NotFoundPage;
pub use register::RegisterPage;
