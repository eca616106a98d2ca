//! # taskdeck-session
//!
//! Client-side authentication session layer for the Taskdeck task manager.
//! Owns the signed-in user state, the signup/login protocol against the
//! backend API, and the persisted session record that survives restarts.
//!
//! Presentation code holds a [`state::session::SessionManager`], reads its
//! `user`/`loading` state, and calls the three operations. Navigation and
//! rendering stay in the presentation layer; this crate never does either.

pub mod config;
pub mod net;
pub mod state;
pub mod storage;

pub use config::ApiConfig;
pub use net::auth::AuthError;
pub use net::types::{AuthSuccess, User};
pub use state::session::{SessionManager, SessionState};
pub use storage::SessionStore;
