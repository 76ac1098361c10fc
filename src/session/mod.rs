//! Session layer bridging storage, the API client, and the flow controller.
//!
//! # Modules
//!
//! - `manager`: The [`SessionManager`] owning token and user state

pub mod manager;

pub use manager::SessionManager;
