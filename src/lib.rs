//! Resume Scoring Gateway Library
//!
//! This library provides the core functionality for the Resume Scoring
//! Gateway: a single-endpoint HTTP service that forwards a resume and a job
//! description to a chat-completion API and relays a structured match-score
//! report (or a zeroed fallback) to the caller.
//!
//! # Modules
//!
//! - `completion_client`: Long-lived chat-completion API client.
//! - `config`: Configuration management.
//! - `errors`: Error handling types.
//! - `handlers`: HTTP request handlers.
//! - `models`: Request/response data models.
//! - `scoring`: Prompt construction, response parsing, and fallback policy.

// Re-export primary modules for shared use in tests and other binaries
pub mod completion_client;
pub mod config;
pub mod errors;
pub mod handlers;
pub mod models;
pub mod scoring;
