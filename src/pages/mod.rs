//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Each page owns route-scoped orchestration and delegates rendering
//! details to `components`. Access control is declared here by wrapping
//! content in `RequireRole`.

pub mod dashboard;
pub mod employees;
pub mod login;
pub mod signup;
