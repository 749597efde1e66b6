//! Fixed-length, single-pass multiple-choice quiz.
//!
//! The session is a small synchronous state machine: it never does I/O, and
//! the only failure mode is a precondition violation, surfaced as a typed
//! [`QuizError`] rather than swallowed. Answers persist across backward and
//! forward navigation; revisiting a question re-displays the committed
//! choice, not a cleared slate.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Number of options every question carries.
pub const OPTION_COUNT: usize = 4;

/// Immutable quiz question. The full question set is fixed at session start
/// and never mutated or reshuffled.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Question {
    pub id: String,
    pub prompt: String,
    pub options: [String; OPTION_COUNT],
    pub correct_option: usize,
    pub explanation: String,
}

impl Question {
    pub fn new(
        id: &str,
        prompt: &str,
        options: [&str; OPTION_COUNT],
        correct_option: usize,
        explanation: &str,
    ) -> Self {
        Self {
            id: id.to_string(),
            prompt: prompt.to_string(),
            options: options.map(str::to_string),
            correct_option,
            explanation: explanation.to_string(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuizPhase {
    Answering,
    Finished,
}

/// Rejection for quiz operations whose preconditions do not hold. These are
/// programming errors (the UI disables the controls that would trigger
/// them), but they are reported to the caller instead of silently ignored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum QuizError {
    #[error("invalid quiz transition")]
    InvalidTransition,
}

/// Mutable quiz state. Created when the quiz view mounts, discarded when the
/// user navigates away; nothing is persisted.
///
/// The score is never stored: it is recomputed from the committed answers on
/// every call, so it can never go stale.
#[derive(Debug, Clone, PartialEq)]
pub struct QuizSession {
    questions: Vec<Question>,
    current_index: usize,
    pending: Option<usize>,
    answers: Vec<Option<usize>>,
    phase: QuizPhase,
}

impl QuizSession {
    pub fn new(questions: Vec<Question>) -> Self {
        let answers = vec![None; questions.len()];
        Self {
            questions,
            current_index: 0,
            pending: None,
            answers,
            phase: QuizPhase::Answering,
        }
    }

    pub fn phase(&self) -> QuizPhase {
        self.phase
    }

    pub fn current_index(&self) -> usize {
        self.current_index
    }

    pub fn len(&self) -> usize {
        self.questions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }

    pub fn questions(&self) -> &[Question] {
        &self.questions
    }

    pub fn current_question(&self) -> Option<&Question> {
        self.questions.get(self.current_index)
    }

    /// Answer chosen for the current question but not yet committed.
    pub fn pending_selection(&self) -> Option<usize> {
        self.pending
    }

    /// Committed answers, index-aligned with the question sequence.
    pub fn answers(&self) -> &[Option<usize>] {
        &self.answers
    }

    pub fn is_last_question(&self) -> bool {
        self.current_index + 1 == self.questions.len()
    }

    /// Record `option_index` as the pending answer for the current question.
    /// Repeated calls overwrite the pending choice; nothing is committed
    /// until [`advance`](Self::advance).
    pub fn select_option(&mut self, option_index: usize) -> Result<(), QuizError> {
        if self.phase != QuizPhase::Answering || option_index >= OPTION_COUNT {
            return Err(QuizError::InvalidTransition);
        }
        self.pending = Some(option_index);
        Ok(())
    }

    /// Commit the pending answer and move forward. On the last question the
    /// session transitions to `Finished`; otherwise the pending selection is
    /// pre-loaded from any previously committed answer at the new index, so
    /// revisited questions keep their answers.
    ///
    /// Rejected (leaving `current_index` untouched) when the session is
    /// finished or no pending selection exists.
    pub fn advance(&mut self) -> Result<QuizPhase, QuizError> {
        if self.phase != QuizPhase::Answering {
            return Err(QuizError::InvalidTransition);
        }
        let pending = self.pending.ok_or(QuizError::InvalidTransition)?;
        self.answers[self.current_index] = Some(pending);

        if self.is_last_question() {
            self.phase = QuizPhase::Finished;
            self.pending = None;
        } else {
            self.current_index += 1;
            self.pending = self.answers[self.current_index];
        }
        Ok(self.phase)
    }

    /// Step back to the previous question. Its committed choice becomes the
    /// pending selection again, editable until the next `advance`.
    pub fn retreat(&mut self) -> Result<(), QuizError> {
        if self.phase != QuizPhase::Answering || self.current_index == 0 {
            return Err(QuizError::InvalidTransition);
        }
        self.current_index -= 1;
        self.pending = self.answers[self.current_index];
        Ok(())
    }

    /// Count of committed answers matching the question's correct option.
    /// Valid in any state; unanswered questions never count as correct.
    pub fn score(&self) -> usize {
        self.questions
            .iter()
            .zip(&self.answers)
            .filter(|(question, answer)| **answer == Some(question.correct_option))
            .count()
    }

    /// Re-initialize over the same fixed question sequence.
    pub fn reset(&mut self) {
        self.current_index = 0;
        self.pending = None;
        self.answers = vec![None; self.questions.len()];
        self.phase = QuizPhase::Answering;
    }

    /// Completion percentage for the progress bar while answering.
    pub fn progress_percent(&self) -> f64 {
        if self.questions.is_empty() {
            return 0.0;
        }
        (self.current_index + 1) as f64 / self.questions.len() as f64 * 100.0
    }
}

/// The fitness knowledge question set shipped with the app.
pub fn fitness_questions() -> Vec<Question> {
    vec![
        Question::new(
            "1",
            "How often is cardiovascular exercise recommended per week?",
            ["1-2 times", "3-5 times", "Every day", "Never"],
            1,
            "The general recommendation is 3-5 cardiovascular sessions per \
             week, lasting 30-60 minutes each.",
        ),
        Question::new(
            "2",
            "Which macronutrient is essential for building and repairing muscle?",
            ["Carbohydrates", "Protein", "Fats", "Vitamins"],
            1,
            "Protein supplies the amino acids needed for muscle protein \
             synthesis and recovery after exercise.",
        ),
        Question::new(
            "3",
            "How much sleep is recommended for healthy adults?",
            ["4-5 hours", "6-7 hours", "7-9 hours", "10+ hours"],
            2,
            "Adults should sleep 7-9 hours per night for proper recovery, \
             mental health and physical performance.",
        ),
        Question::new(
            "4",
            "What is the main benefit of proper hydration during exercise?",
            [
                "Increases strength",
                "Prevents cramps and fatigue",
                "Burns more calories",
                "Improves mood",
            ],
            1,
            "Proper hydration helps regulate body temperature, transport \
             nutrients and prevent muscle cramps.",
        ),
        Question::new(
            "5",
            "Which exercise is most effective for strengthening the core?",
            ["Push-up", "Squat", "Plank", "Running"],
            2,
            "The plank works every core muscle isometrically, making it \
             excellent for strength and stability.",
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    fn three_questions() -> Vec<Question> {
        vec![
            Question::new("q1", "First?", ["a", "b", "c", "d"], 1, "b is right"),
            Question::new("q2", "Second?", ["a", "b", "c", "d"], 2, "c is right"),
            Question::new("q3", "Third?", ["a", "b", "c", "d"], 0, "a is right"),
        ]
    }

    #[test]
    fn test_new_session_is_unanswered() {
        let session = QuizSession::new(three_questions());

        assert_eq!(session.phase(), QuizPhase::Answering);
        assert_eq!(session.current_index(), 0);
        assert_eq!(session.pending_selection(), None);
        assert!(session.answers().iter().all(Option::is_none));
        assert_eq!(session.score(), 0);
    }

    #[test]
    fn test_select_overwrites_pending_without_committing() {
        let mut session = QuizSession::new(three_questions());

        session.select_option(0).unwrap();
        session.select_option(3).unwrap();

        assert_eq!(session.pending_selection(), Some(3));
        // Nothing committed until advance.
        assert_eq!(session.answers()[0], None);
    }

    #[test]
    fn test_select_out_of_range_rejected() {
        let mut session = QuizSession::new(three_questions());

        assert_eq!(
            session.select_option(OPTION_COUNT),
            Err(QuizError::InvalidTransition)
        );
        assert_eq!(session.pending_selection(), None);
    }

    #[test]
    fn test_advance_without_pending_rejected() {
        let mut session = QuizSession::new(three_questions());

        assert_eq!(session.advance(), Err(QuizError::InvalidTransition));
        // The rejected call must not move the cursor.
        assert_eq!(session.current_index(), 0);
        assert_eq!(session.phase(), QuizPhase::Answering);
    }

    #[test]
    fn test_advance_commits_and_moves_forward() {
        let mut session = QuizSession::new(three_questions());

        session.select_option(1).unwrap();
        assert_eq!(session.advance().unwrap(), QuizPhase::Answering);

        assert_eq!(session.current_index(), 1);
        assert_eq!(session.answers()[0], Some(1));
        // Fresh question, no previously committed answer to pre-load.
        assert_eq!(session.pending_selection(), None);
    }

    #[test]
    fn test_last_advance_finishes_and_freezes() {
        let mut session = QuizSession::new(three_questions());
        for option in [1, 2, 0] {
            session.select_option(option).unwrap();
            session.advance().unwrap();
        }

        assert_eq!(session.phase(), QuizPhase::Finished);
        let frozen_index = session.current_index();

        assert_eq!(session.select_option(0), Err(QuizError::InvalidTransition));
        assert_eq!(session.advance(), Err(QuizError::InvalidTransition));
        assert_eq!(session.retreat(), Err(QuizError::InvalidTransition));
        assert_eq!(session.current_index(), frozen_index);
    }

    #[test]
    fn test_retreat_preloads_committed_answer() {
        let mut session = QuizSession::new(three_questions());
        session.select_option(3).unwrap();
        session.advance().unwrap();

        session.retreat().unwrap();

        assert_eq!(session.current_index(), 0);
        // The committed choice is shown again, not a cleared slate.
        assert_eq!(session.pending_selection(), Some(3));
        assert_eq!(session.answers()[0], Some(3));
    }

    #[test]
    fn test_retreat_at_first_question_rejected() {
        let mut session = QuizSession::new(three_questions());

        assert_eq!(session.retreat(), Err(QuizError::InvalidTransition));
        assert_eq!(session.current_index(), 0);
    }

    #[test]
    fn test_retreat_then_advance_round_trip_is_idempotent() {
        let mut session = QuizSession::new(three_questions());
        session.select_option(1).unwrap();
        session.advance().unwrap();
        session.select_option(2).unwrap();
        session.advance().unwrap();
        let answers_before = session.answers().to_vec();

        // Walk back and forward without touching the selections.
        session.retreat().unwrap();
        session.retreat().unwrap();
        session.advance().unwrap();
        session.advance().unwrap();

        assert_eq!(session.answers(), answers_before.as_slice());
        assert_eq!(session.current_index(), 2);
    }

    #[test]
    fn test_changed_answer_after_retreat_counts_toward_score() {
        let mut session = QuizSession::new(three_questions());
        // Wrong answer to question 1 (correct is 1).
        session.select_option(0).unwrap();
        session.advance().unwrap();

        session.retreat().unwrap();
        session.select_option(1).unwrap();
        session.advance().unwrap();

        assert_eq!(session.answers()[0], Some(1));
        assert_eq!(session.score(), 1);
    }

    #[test]
    fn test_score_ignores_unanswered() {
        let mut session = QuizSession::new(three_questions());
        session.select_option(1).unwrap();
        session.advance().unwrap();

        // Abandoned mid-flow: only the answered-and-correct one counts.
        assert_eq!(session.score(), 1);
        assert!(session.score() <= session.len());
    }

    #[test]
    fn test_perfect_run_on_fitness_set() {
        let mut session = QuizSession::new(fitness_questions());
        assert_eq!(session.len(), 5);

        for option in [1, 1, 2, 1, 2] {
            session.select_option(option).unwrap();
            session.advance().unwrap();
        }

        assert_eq!(session.score(), 5);
        assert_eq!(session.phase(), QuizPhase::Finished);
    }

    #[test]
    fn test_reset_matches_fresh_session() {
        let mut session = QuizSession::new(three_questions());
        session.select_option(2).unwrap();
        session.advance().unwrap();
        session.select_option(0).unwrap();

        session.reset();

        assert_eq!(session, QuizSession::new(three_questions()));
    }

    #[test]
    fn test_reset_after_finish() {
        let mut session = QuizSession::new(three_questions());
        for option in [1, 2, 0] {
            session.select_option(option).unwrap();
            session.advance().unwrap();
        }
        assert_eq!(session.score(), 3);

        session.reset();

        assert_eq!(session.phase(), QuizPhase::Answering);
        assert_eq!(session.score(), 0);
        // Same fixed sequence, no reshuffling.
        assert_eq!(session.questions(), three_questions().as_slice());
    }

    #[test]
    fn test_progress_percent() {
        let mut session = QuizSession::new(fitness_questions());
        assert_eq!(session.progress_percent(), 1.0 / 5.0 * 100.0);

        session.select_option(1).unwrap();
        session.advance().unwrap();
        assert_eq!(session.progress_percent(), 2.0 / 5.0 * 100.0);
    }

    #[test]
    fn test_fitness_questions_are_well_formed() {
        let questions = fitness_questions();
        assert_eq!(questions.len(), 5);
        for question in &questions {
            assert!(question.correct_option < OPTION_COUNT);
            assert!(!question.explanation.is_empty());
        }
    }
}
