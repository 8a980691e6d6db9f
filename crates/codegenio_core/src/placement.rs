//! crates/codegenio_core/src/placement.rs
//!
//! Placement-test scoring and the score-to-level recommendation.

use std::collections::HashMap;

use crate::catalog;
use crate::domain::PlacementQuestion;

/// Score at or above which the advanced level is recommended.
pub const ADVANCED_THRESHOLD: u32 = 4;
/// Score at or above which the intermediate level is recommended.
pub const INTERMEDIATE_THRESHOLD: u32 = 2;

/// Counts correct answers against the fixed question bank. `answers` maps
/// question id to the selected option index; missing or out-of-range
/// selections count as incorrect.
pub fn score(answers: &HashMap<String, usize>) -> u32 {
    score_against(catalog::placement_questions(), answers)
}

/// Same as [`score`], against an explicit question bank.
pub fn score_against(questions: &[PlacementQuestion], answers: &HashMap<String, usize>) -> u32 {
    questions
        .iter()
        .filter(|q| answers.get(&q.id) == Some(&q.correct_index))
        .count() as u32
}

/// Maps a test score to the recommended curriculum level.
pub fn recommended_level(score: u32) -> &'static str {
    if score >= ADVANCED_THRESHOLD {
        catalog::LEVEL_AVANZADO
    } else if score >= INTERMEDIATE_THRESHOLD {
        catalog::LEVEL_INTERMEDIO
    } else {
        catalog::LEVEL_INICIAL
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn answers(pairs: &[(&str, usize)]) -> HashMap<String, usize> {
        pairs
            .iter()
            .map(|(id, index)| (id.to_string(), *index))
            .collect()
    }

    #[test]
    fn all_correct_scores_full_marks() {
        let all = answers(&[("q1", 1), ("q2", 2), ("q3", 2), ("q4", 2), ("q5", 0)]);
        assert_eq!(score(&all), 5);
    }

    #[test]
    fn missing_answers_count_as_incorrect() {
        let partial = answers(&[("q1", 1), ("q3", 2)]);
        assert_eq!(score(&partial), 2);
        assert_eq!(score(&HashMap::new()), 0);
    }

    #[test]
    fn out_of_range_selection_never_matches() {
        let wild = answers(&[("q1", 99), ("q2", 2)]);
        assert_eq!(score(&wild), 1);
    }

    #[test]
    fn score_is_bounded_by_question_count() {
        let questions = catalog::placement_questions();
        let all = answers(&[("q1", 1), ("q2", 2), ("q3", 2), ("q4", 2), ("q5", 0)]);
        assert!(score(&all) as usize <= questions.len());
    }

    #[test]
    fn thresholds_split_the_score_range() {
        assert_eq!(recommended_level(0), catalog::LEVEL_INICIAL);
        assert_eq!(recommended_level(1), catalog::LEVEL_INICIAL);
        assert_eq!(recommended_level(2), catalog::LEVEL_INTERMEDIO);
        assert_eq!(recommended_level(3), catalog::LEVEL_INTERMEDIO);
        assert_eq!(recommended_level(4), catalog::LEVEL_AVANZADO);
        assert_eq!(recommended_level(5), catalog::LEVEL_AVANZADO);
    }
}
