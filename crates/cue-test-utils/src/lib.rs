//! Shared test utilities for the cueme workspace.
//!
//! Dev-dependency only, never published.
//!
//! - [`home`]: [`TestHome`], a throwaway home + working directory pair with
//!   config and file helpers

pub mod home;

pub use home::TestHome;
