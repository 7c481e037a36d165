//! Artifact generation for Launchpad.
//!
//! Handlers talk to a [`Generator`]. [`MockGenerator`] waits a fixed delay
//! and returns canned, partly randomized artifacts; [`LiveGenerator`] sends
//! blueprint and pitch-deck prompts to an OpenAI-compatible chat-completion
//! endpoint and falls back to the mock for everything else.

pub mod client;
pub mod error;
pub mod generator;
pub mod live;
pub mod mock;
pub mod prompts;

pub use client::ChatClient;
pub use error::GenerationError;
pub use generator::Generator;
pub use live::LiveGenerator;
pub use mock::MockGenerator;
