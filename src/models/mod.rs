pub mod submission;

pub use submission::{AnswerValue, Question, Submission, SubmissionPage};
