//! API request layer for the remote inspection service.
//!
//! This module owns everything about talking to the backend: building
//! authenticated requests, decoding responses, and classifying failures into
//! the domain's error kinds. The rest of the crate only sees typed results.
//!
//! # Modules
//!
//! - `client`: Reqwest-backed client and the [`InspectionApi`] seam
//! - `dto`: Request/response wire types

pub mod client;
pub mod dto;

pub use client::{ApiClient, InspectionApi};
pub use dto::AuthResponse;
