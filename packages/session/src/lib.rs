pub mod credentials;
pub mod error;
pub mod manager;
pub mod models;

mod memory;
pub use memory::MemoryStorage;

#[cfg(all(target_arch = "wasm32", feature = "web"))]
mod local;
#[cfg(all(target_arch = "wasm32", feature = "web"))]
pub use local::LocalStorage;

pub use credentials::{CredentialStore, KeyValueStorage};
pub use error::SessionError;
pub use manager::{AuthTransport, SessionManager};
pub use models::{LoginResponse, LoginUser, Role, Session, User};
