mod question_dto;

pub use question_dto::{
    CategoryQuestionsResponseDto, CreateQuestionDto, CreatedQuestionResponseDto,
    QuestionListResponseDto, QuestionResponseDto, QuestionsPostDto, QuestionsPostResponseDto,
    SearchQuestionsDto, SearchQuestionsResponseDto,
};
