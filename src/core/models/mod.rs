//! Data models for `study_cost`

pub mod answers;
pub mod cost;

pub use answers::{
    Accommodation, CourseType, FoodHabits, Intake, Leisure, Mobile, Question, QuestionId,
    QuestionnaireAnswers, Transport, QUESTIONS,
};
pub use cost::{AdjustedCosts, CostRange, CostShape, CountryCosts, ExpenseBreakdown};
