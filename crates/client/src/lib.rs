//! Client-side flow drivers for Prompt Architect Pro.
//!
//! Implements the two interactive flows against the HTTP API:
//!
//! - [`registration::RegistrationFlow`] -- the two-phase
//!   create-then-authenticate registration, with the partial-success state
//!   (account created, session not established) as a named outcome.
//! - [`showcase::ShowcaseForm`] -- the showcase submission form state
//!   machine, including catalog loading, star-rating selection, null
//!   normalization of blank optional fields, and the fixed-delay
//!   post-success redirect.

pub mod error;
pub mod registration;
pub mod session;
pub mod showcase;
