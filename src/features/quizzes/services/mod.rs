mod quiz_service;
mod selector;

pub use quiz_service::{QuizRound, QuizService};
