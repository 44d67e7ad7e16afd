//! Core use-case services.
//!
//! # Responsibility
//! - Orchestrate parser and editor calls into session-level APIs.
//! - Keep rendering and CLI layers decoupled from command plumbing.

pub mod session_service;
