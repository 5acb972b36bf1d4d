//! Completion service client and the AI-mode enhancement gateway.
//!
//! Provides the OpenAI-compatible REST client, its wire types, the
//! [`provider::CompletionProvider`] seam and [`gateway::EnhancementGateway`],
//! which turns a description and parameter selection into a prompt.

pub mod api;
pub mod config;
pub mod gateway;
pub mod messages;
pub mod provider;
