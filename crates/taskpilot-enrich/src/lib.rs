//! Natural-language enrichment: free text in, validated todo draft out.
//!
//! The flow is one outbound call to a hosted completion API configured for
//! strict JSON output, followed by parsing and field validation. The
//! [`ChatModel`] trait is the seam between the two, so tests can substitute a
//! canned model.

pub mod chat;
pub mod client;
pub mod enricher;
pub mod error;
pub mod prompt;

/// Chat-model seam and request shape.
pub use chat::{ChatModel, ChatRequest};
/// Real client for the hosted completion endpoint.
pub use client::GroqClient;
/// Enrichment entry point and reply parsing.
pub use enricher::{Enricher, parse_reply};
/// Enrichment error taxonomy.
pub use error::EnrichError;
