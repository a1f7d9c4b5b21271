//! Mock authentication feature
//!
//! Login trusts the client-supplied name/email/role and records it as a user.
//! There are no tokens and no server-side authorization; the role is an
//! untrusted claim and nothing in the backend grants permissions from it.
//!
//! ## Endpoints
//!
//! | Method | Endpoint | Description |
//! |--------|----------|-------------|
//! | POST | `/api/auth/login` | Mock login, echoes the recorded user |

pub mod dtos;
pub mod handlers;
pub mod models;
pub mod routes;
pub mod services;

pub use routes::routes;
pub use services::AuthService;
