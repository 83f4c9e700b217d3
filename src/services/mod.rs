pub mod question_service;
pub mod sample_data;

pub use question_service::QuestionService;
