//! Survey submissions.
//!
//! Collects the survey form payload, gates it through the field rules and
//! appends it as one row to the spreadsheet.
//!
//! ## Endpoints
//!
//! | Method | Endpoint | Auth | Description |
//! |--------|----------|------|-------------|
//! | POST | `/api/submit` | No | Submit a survey response |

pub mod clients;
pub mod dtos;
pub mod form_state;
pub mod handlers;
pub mod models;
pub mod routes;
pub mod services;
pub mod validation;

pub use services::SubmissionService;
