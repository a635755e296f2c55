//! Clients for the external services behind the core's provider traits.

pub mod thesaurus;
pub mod translate;
pub mod upstash;
