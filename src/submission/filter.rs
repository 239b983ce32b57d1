use crate::models::{Submission, SubmissionPage};

use super::evaluate::evaluate;
use super::filters::FilterClause;

/// Keep the submissions that satisfy every clause.
///
/// A submission without the question a clause targets fails that clause.
/// Only `responses` and `total_responses` change. `total_responses` drops
/// by the number of submissions removed from this page; submissions outside
/// the fetched page are not accounted for, so the total is approximate
/// whenever the form has more than one page.
pub fn filter_submissions(page: SubmissionPage, clauses: &[FilterClause]) -> SubmissionPage {
    let SubmissionPage {
        responses,
        total_responses,
        page_count,
        extra,
    } = page;

    let fetched = responses.len();
    let mut remaining = responses;

    for clause in clauses {
        if remaining.is_empty() {
            break;
        }
        remaining.retain(|submission| matches_clause(submission, clause));
    }

    let removed = (fetched - remaining.len()) as i64;

    SubmissionPage {
        responses: remaining,
        total_responses: total_responses - removed,
        page_count,
        extra,
    }
}

fn matches_clause(submission: &Submission, clause: &FilterClause) -> bool {
    submission
        .question(&clause.id)
        .is_some_and(|question| evaluate(question.value.as_ref(), clause))
}
