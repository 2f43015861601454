use rand::Rng;
use rand::seq::IndexedRandom;
use std::collections::HashSet;

use quiz_core::model::{Question, QuestionId, QuestionPool};

/// Picks an unused question uniformly at random from the pool.
///
/// Pure with respect to `used`: the caller retires questions, not the
/// selector. Returns `None` once every question has been used — the
/// session's exhaustion signal.
pub fn pick<'a, R: Rng + ?Sized>(
    pool: &'a QuestionPool,
    used: &HashSet<QuestionId>,
    rng: &mut R,
) -> Option<(QuestionId, &'a Question)> {
    let remaining: Vec<QuestionId> = pool
        .iter()
        .map(|(id, _)| id)
        .filter(|id| !used.contains(id))
        .collect();

    let id = *remaining.choose(rng)?;
    pool.get(id).map(|question| (id, question))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    use quiz_core::model::AnswerOption;

    fn pool(size: usize) -> QuestionPool {
        let questions = (0..size)
            .map(|i| {
                Question::new(
                    format!("question {i}"),
                    vec![
                        AnswerOption::new("A", "yes"),
                        AnswerOption::new("B", "no"),
                    ],
                    "A",
                )
                .unwrap()
            })
            .collect();
        QuestionPool::new(questions)
    }

    #[test]
    fn never_returns_a_used_question() {
        let pool = pool(5);
        let mut rng = StdRng::seed_from_u64(7);
        let mut used = HashSet::new();

        for _ in 0..pool.len() {
            let (id, _) = pick(&pool, &used, &mut rng).unwrap();
            assert!(!used.contains(&id));
            used.insert(id);
        }
        assert_eq!(used.len(), pool.len());
    }

    #[test]
    fn exhausted_pool_yields_none() {
        let pool = pool(3);
        let mut rng = StdRng::seed_from_u64(7);
        let used: HashSet<QuestionId> = pool.iter().map(|(id, _)| id).collect();

        assert!(pick(&pool, &used, &mut rng).is_none());
    }

    #[test]
    fn empty_pool_yields_none() {
        let pool = QuestionPool::new(Vec::new());
        let mut rng = StdRng::seed_from_u64(7);

        assert!(pick(&pool, &HashSet::new(), &mut rng).is_none());
    }

    #[test]
    fn fixed_seed_is_reproducible() {
        let pool = pool(10);
        let used = HashSet::new();

        let first = pick(&pool, &used, &mut StdRng::seed_from_u64(42)).unwrap().0;
        let second = pick(&pool, &used, &mut StdRng::seed_from_u64(42)).unwrap().0;
        assert_eq!(first, second);
    }

    #[test]
    fn single_remaining_question_is_always_drawn() {
        let pool = pool(4);
        let mut rng = StdRng::seed_from_u64(1);
        let target = QuestionId::new(2);
        let used: HashSet<QuestionId> = pool
            .iter()
            .map(|(id, _)| id)
            .filter(|id| *id != target)
            .collect();

        for _ in 0..20 {
            let (id, _) = pick(&pool, &used, &mut rng).unwrap();
            assert_eq!(id, target);
        }
    }
}
