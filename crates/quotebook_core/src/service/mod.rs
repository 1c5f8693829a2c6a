//! Core use-case services.
//!
//! # Responsibility
//! - Orchestrate repository calls into use-case level APIs.
//! - Keep the menu and table front ends decoupled from storage details.

pub mod quote_service;
pub mod seed_service;
