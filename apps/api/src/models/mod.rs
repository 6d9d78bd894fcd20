pub mod evaluation;
pub mod evaluation_raw;
pub mod questionnaire;
