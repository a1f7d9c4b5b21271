//! Statistics feature
//!
//! Aggregates the help-request collection into dashboard statistics. The
//! aggregation itself is a pure function over a store snapshot and an
//! injected "now"; the service and handlers are thin glue around it.
//!
//! ## Endpoints
//!
//! | Method | Endpoint | Description |
//! |--------|----------|-------------|
//! | GET | `/api/stats/overview` | Lightweight header counters |
//! | GET | `/api/stats/summary` | Full statistics summary |
//! | GET | `/api/stats/chart-colors` | Hex palette for the dashboard charts |

pub mod dtos;
pub mod handlers;
pub mod routes;
pub mod services;

pub use routes::routes;
pub use services::StatsService;
