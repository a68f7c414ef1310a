pub mod quiz_handler;

pub use quiz_handler::{__path_next_question, next_question};
