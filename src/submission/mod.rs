pub mod evaluate;
pub mod filter;
pub mod filters;
pub mod normalize;
pub mod pipeline;

pub use evaluate::evaluate;
pub use filter::filter_submissions;
pub use filters::{parse_filters, ClauseValue, Condition, FilterClause};
pub use normalize::{normalize_answer, normalize_clause_value, normalize_text, Normalized};
