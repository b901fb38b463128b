//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Pages own route-scoped orchestration and delegate rendering details to
//! `components`.

pub mod compose;
