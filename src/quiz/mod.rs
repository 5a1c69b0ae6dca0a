//! Space quiz engine: one pass through a question list with a running
//! score. The answer reveal and timing belong to the UI; this tracks
//! only the state transitions.

use rand::seq::SliceRandom;
use rand::Rng;
use serde::Serialize;

use crate::models::QuizQuestion;

#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct AnswerOutcome {
    pub correct: bool,
    pub correct_index: usize,
    pub finished: bool,
}

#[derive(Debug, Clone)]
pub struct QuizSession {
    questions: Vec<QuizQuestion>,
    current: usize,
    score: u32,
}

impl QuizSession {
    pub fn new(questions: Vec<QuizQuestion>) -> Self {
        Self {
            questions,
            current: 0,
            score: 0,
        }
    }

    /// Session over the same questions in a shuffled order.
    pub fn shuffled<R: Rng + ?Sized>(mut questions: Vec<QuizQuestion>, rng: &mut R) -> Self {
        questions.shuffle(rng);
        Self::new(questions)
    }

    /// The question awaiting an answer, or None once the quiz is done.
    pub fn current_question(&self) -> Option<&QuizQuestion> {
        self.questions.get(self.current)
    }

    /// Answer the current question with the chosen option index and
    /// advance. Returns None if the quiz is already finished.
    pub fn answer(&mut self, option: usize) -> Option<AnswerOutcome> {
        let question = self.questions.get(self.current)?;
        let correct = option == question.correct;
        let correct_index = question.correct;
        if correct {
            self.score += 1;
        }
        self.current += 1;
        Some(AnswerOutcome {
            correct,
            correct_index,
            finished: self.current >= self.questions.len(),
        })
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    /// (answered, total) for the progress indicator.
    pub fn progress(&self) -> (usize, usize) {
        (self.current.min(self.questions.len()), self.questions.len())
    }

    pub fn is_finished(&self) -> bool {
        self.current >= self.questions.len()
    }

    /// Back to the first question with a zero score, keeping the order.
    pub fn reset(&mut self) {
        self.current = 0;
        self.score = 0;
    }
}
