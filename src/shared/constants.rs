/// Default number of questions per page
pub const DEFAULT_QUESTIONS_PER_PAGE: usize = 10;

/// Quiz category id that selects every question
pub const ALL_CATEGORIES_ID: i64 = 0;

/// Categories the in-memory store starts with; mirrors the seed migration.
pub const DEFAULT_CATEGORIES: [&str; 6] = [
    "Science",
    "Art",
    "Geography",
    "History",
    "Entertainment",
    "Sports",
];

/// Bounds for question difficulty
pub const MIN_DIFFICULTY: i32 = 1;
pub const MAX_DIFFICULTY: i32 = 5;
