//! SkinScan Core - onboarding workflow, AI skin analysis and saved results
//!
//! The crate is laid out in hexagonal layers:
//! - `domain` - pure state machines and value types
//! - `ports` - traits for the inference service, key-value store and image sources
//! - `adapters` - Gemini, mock, filesystem and in-memory implementations
//! - `application` - analysis client, result store and the session coordinators
//! - `config` - environment-driven configuration and tracing setup

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
