//! Codequest - progression engine for a gamified coding-education platform

pub mod content;
pub mod core;
pub mod notify;
pub mod persistence;
pub mod progression;
