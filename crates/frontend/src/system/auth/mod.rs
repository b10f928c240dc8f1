pub mod api;
pub mod context;
pub mod error;
pub mod guard;
pub mod session;
pub mod storage;

pub use context::{use_auth, AuthContext, AuthProvider};
pub use error::AuthError;
pub use guard::{RequireAuth, RequirePermission};
