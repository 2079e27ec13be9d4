//! Form state, auth API client and submission logic shared by the pages

pub mod api;
pub mod config;
pub mod forms;
pub mod session;
pub mod storage;

pub use api::{AuthApi, AuthError, AuthResponse, HttpAuthApi};
pub use config::ApiConfig;
pub use forms::{Credentials, LoginForm, RegisterForm, ValidationError};
pub use session::{Route, submit_login, submit_register};
pub use storage::{LocalStorageTokenStore, MemoryTokenStore, StorageError, TokenStore};
