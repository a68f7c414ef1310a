//! Quiz rounds: one random, not yet asked question per call.
//!
//! The client carries the round state (the ids already asked); the server
//! keeps none.
//!
//! ## Endpoints
//!
//! | Method | Endpoint | Description |
//! |--------|----------|-------------|
//! | POST | `/quizzes` | Next question of a round |

pub mod dtos;
pub mod handlers;
pub mod routes;
pub mod services;

pub use services::QuizService;
