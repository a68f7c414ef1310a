//! Trivia questions: paginated listing, search, creation and deletion.
//!
//! ## Endpoints
//!
//! | Method | Endpoint | Description |
//! |--------|----------|-------------|
//! | GET | `/questions?page=N` | Paginated questions with the category mapping |
//! | POST | `/questions` | Create a question, or search with `searchTerm` |
//! | DELETE | `/questions/{id}` | Delete a question |
//! | GET | `/categories/{id}/questions` | Paginated questions of one category |

pub mod dtos;
pub mod handlers;
pub mod models;
pub mod routes;
pub mod services;

pub use services::QuestionService;
