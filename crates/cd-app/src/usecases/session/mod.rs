//! Session use cases
//!
//! Login stores the bearer token, logout forgets it, and the guard performs
//! the global forced logout when the API reports an expired session.

mod guard;
mod login;
mod logout;

pub use guard::SessionGuard;
pub use login::Login;
pub use logout::Logout;
