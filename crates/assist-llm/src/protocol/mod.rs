//! Wire format types for provider-specific API protocols
//!
//! Pure serde structs matching each provider's JSON shapes; used only at the
//! serialization boundary.

pub mod gemini;
pub mod solar;
