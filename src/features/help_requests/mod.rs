//! Help requests feature
//!
//! CRUD for community help requests plus the volunteer flow.
//!
//! ## Endpoints
//!
//! | Method | Endpoint | Description |
//! |--------|----------|-------------|
//! | GET | `/api/help-requests` | List all requests |
//! | POST | `/api/help-requests` | Create a request |
//! | GET | `/api/help-requests/{id}` | Get one request |
//! | PUT | `/api/help-requests/{id}` | Partially update a request |
//! | DELETE | `/api/help-requests/{id}` | Delete a request |
//! | POST | `/api/help-requests/{id}/volunteer` | Volunteer for a request |

pub mod dtos;
pub mod handlers;
pub mod models;
pub mod routes;
pub mod services;

pub use routes::routes;
pub use services::HelpRequestService;
