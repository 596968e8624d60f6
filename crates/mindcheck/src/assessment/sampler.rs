use rand::seq::index;
use rand::Rng;

use super::catalog::Catalog;
use super::domain::{AssessmentError, Question};

/// Number of questions served when the caller does not ask for a specific count.
pub const DEFAULT_SAMPLE_COUNT: usize = 10;

/// Draws `count` distinct questions uniformly without replacement, in random order.
pub fn sample<R>(
    catalog: &Catalog,
    count: usize,
    rng: &mut R,
) -> Result<Vec<Question>, AssessmentError>
where
    R: Rng + ?Sized,
{
    let available = catalog.len();
    if count > available {
        return Err(AssessmentError::InvalidArgument {
            requested: count,
            available,
        });
    }

    let questions = catalog.all_questions();
    Ok(index::sample(rng, available, count)
        .into_iter()
        .map(|position| questions[position].clone())
        .collect())
}
