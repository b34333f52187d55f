use std::collections::HashMap;

use crate::models::candidate::{Answer, AnswersRequest, Question};

/// One candidate's walk through a vacancy's questions, in the order the
/// backend returned them.
#[derive(Debug, Clone, PartialEq)]
pub struct InterviewSession {
    application_id: String,
    questions: Vec<Question>,
    current_index: usize,
    answers: HashMap<String, String>,
}

impl InterviewSession {
    pub fn new(application_id: impl Into<String>, questions: Vec<Question>) -> Self {
        Self {
            application_id: application_id.into(),
            questions,
            current_index: 0,
            answers: HashMap::new(),
        }
    }

    pub fn application_id(&self) -> &str {
        &self.application_id
    }

    pub fn questions(&self) -> &[Question] {
        &self.questions
    }

    pub fn current_index(&self) -> usize {
        self.current_index
    }

    pub fn current(&self) -> Option<&Question> {
        self.questions.get(self.current_index)
    }

    pub fn is_last(&self) -> bool {
        self.current_index + 1 >= self.questions.len()
    }

    pub fn answer(&self, question_id: &str) -> Option<&str> {
        self.answers.get(question_id).map(String::as_str)
    }

    /// Stores `text` as the answer to the current question, replacing any
    /// earlier answer to it.
    pub fn record(&mut self, text: &str) -> Option<&Question> {
        let question = self.questions.get(self.current_index)?;
        self.answers
            .insert(question.question_id.clone(), text.to_string());
        Some(question)
    }

    /// Moves to the next question, if there is one.
    pub fn advance(&mut self) -> Option<&Question> {
        if self.is_last() {
            return None;
        }
        self.current_index += 1;
        self.questions.get(self.current_index)
    }

    /// Every question in order with its answer. `typed` stands in for the
    /// current question when nothing was recorded for it.
    pub fn answers_request(&self, typed: Option<&str>) -> AnswersRequest {
        let current_id = self.current().map(|q| q.question_id.as_str());

        let answers = self
            .questions
            .iter()
            .map(|question| {
                let answer = self
                    .answer(&question.question_id)
                    .filter(|answer| !answer.is_empty())
                    .or_else(|| {
                        typed.filter(|_| current_id == Some(question.question_id.as_str()))
                    })
                    .unwrap_or_default();

                Answer {
                    question_id: question.question_id.clone(),
                    answer: answer.to_string(),
                }
            })
            .collect();

        AnswersRequest {
            application_id: self.application_id.clone(),
            answers,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn questions(n: usize) -> Vec<Question> {
        (1..=n)
            .map(|i| Question {
                question_id: format!("q{i}"),
                text: format!("Pregunta {i}"),
                kind: None,
            })
            .collect()
    }

    #[test]
    fn walks_questions_in_order() {
        let mut session = InterviewSession::new("A1", questions(3));
        assert_eq!(session.current().unwrap().question_id, "q1");
        assert!(!session.is_last());

        assert_eq!(session.advance().unwrap().question_id, "q2");
        assert_eq!(session.advance().unwrap().question_id, "q3");
        assert!(session.is_last());
        assert!(session.advance().is_none());
        assert_eq!(session.current_index(), 2);
    }

    #[test]
    fn answers_keep_question_order() {
        let mut session = InterviewSession::new("A1", questions(3));
        session.record("uno");
        session.advance();
        session.record("dos");
        session.advance();
        session.record("tres");

        let request = session.answers_request(Some("tres"));
        assert_eq!(request.application_id, "A1");
        let ids: Vec<&str> = request.answers.iter().map(|a| a.question_id.as_str()).collect();
        assert_eq!(ids, ["q1", "q2", "q3"]);
        let texts: Vec<&str> = request.answers.iter().map(|a| a.answer.as_str()).collect();
        assert_eq!(texts, ["uno", "dos", "tres"]);
    }

    #[test]
    fn typed_text_fills_a_missing_current_answer() {
        let mut session = InterviewSession::new("A1", questions(2));
        session.record("uno");
        session.advance();

        let request = session.answers_request(Some("dos"));
        assert_eq!(request.answers[1].answer, "dos");

        let without = session.answers_request(None);
        assert_eq!(without.answers[1].answer, "");
    }

    #[test]
    fn recording_again_replaces_the_answer() {
        let mut session = InterviewSession::new("A1", questions(1));
        session.record("primera");
        session.record("segunda");
        assert_eq!(session.answer("q1"), Some("segunda"));
    }

    #[test]
    fn empty_session_has_no_current_question() {
        let mut session = InterviewSession::new("A1", Vec::new());
        assert!(session.current().is_none());
        assert!(session.is_last());
        assert!(session.record("nada").is_none());
        assert!(session.answers_request(None).answers.is_empty());
    }
}
