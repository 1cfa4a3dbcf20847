//! Utility helpers shared across pages and components.
//!
//! SYSTEM CONTEXT
//! ==============
//! Utility modules isolate browser/environment concerns (storage,
//! geolocation) and pure decision logic (route gating) from page
//! rendering.

pub mod geolocation;
pub mod guard;
pub mod storage;
