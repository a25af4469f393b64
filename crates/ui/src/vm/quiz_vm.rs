use quiz_core::model::{QuestionRecord, choice_label};
use quiz_core::{QuestionStatus, QuizSession};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ChoiceState {
    Idle,
    Selected,
    Correct,
    Wrong,
}

impl ChoiceState {
    #[must_use]
    pub fn css_class(self) -> &'static str {
        match self {
            ChoiceState::Idle => "choice",
            ChoiceState::Selected => "choice choice--selected",
            ChoiceState::Correct => "choice choice--correct",
            ChoiceState::Wrong => "choice choice--wrong",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ChoiceVm {
    pub text: String,
    pub state: ChoiceState,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct QuestionVm {
    pub index: usize,
    pub heading: String,
    pub prompt: String,
    pub choices: Vec<ChoiceVm>,
    pub explanation: Option<String>,
    pub locked: bool,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NavDotVm {
    pub index: usize,
    pub label: String,
    pub status: QuestionStatus,
    pub is_current: bool,
}

impl NavDotVm {
    #[must_use]
    pub fn css_class(&self) -> String {
        let status = match self.status {
            QuestionStatus::Unanswered => "nav-dot",
            QuestionStatus::Answered => "nav-dot nav-dot--answered",
            QuestionStatus::Correct => "nav-dot nav-dot--correct",
            QuestionStatus::Incorrect => "nav-dot nav-dot--wrong",
        };
        if self.is_current {
            format!("{status} nav-dot--current")
        } else {
            status.to_string()
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ScoreVm {
    pub correct: usize,
    pub total: usize,
    pub percentage: u32,
    pub label: String,
    pub headline: &'static str,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct QuizVm {
    pub question: Option<QuestionVm>,
    pub dots: Vec<NavDotVm>,
    pub position_label: String,
    pub can_prev: bool,
    pub can_next: bool,
    pub reveal_label: String,
    pub can_reveal: bool,
    pub score: Option<ScoreVm>,
}

/// Map a session to display data. Returns `None` while no quiz is loaded.
#[must_use]
pub fn map_quiz(session: &QuizSession) -> Option<QuizVm> {
    if session.is_empty() {
        return None;
    }

    let total = session.len();
    let current = session.current_index();
    let revealed = session.results_revealed();

    let question = session
        .current_question()
        .map(|question| map_question(session, current, question));

    let dots = (0..total)
        .map(|index| NavDotVm {
            index,
            label: (index + 1).to_string(),
            status: session.question_status(index),
            is_current: index == current,
        })
        .collect();

    let score = revealed.then(|| map_score(session));

    Some(QuizVm {
        question,
        dots,
        position_label: format!("{} / {total}", current + 1),
        can_prev: session.has_prev(),
        can_next: session.has_next(),
        reveal_label: format!("See results ({}/{total})", session.answered_count()),
        can_reveal: !revealed && session.is_complete(),
        score,
    })
}

fn map_question(session: &QuizSession, index: usize, question: &QuestionRecord) -> QuestionVm {
    let revealed = session.results_revealed();
    let picked = session.answer(index);

    let choices = question
        .choices
        .iter()
        .map(|choice| {
            let is_picked = picked == Some(choice.as_str());
            let is_answer = question.correct_label.is_some()
                && choice_label(choice) == question.correct_label;
            let state = match (revealed, is_picked, is_answer) {
                (true, _, true) => ChoiceState::Correct,
                (true, true, false) => ChoiceState::Wrong,
                (false, true, _) => ChoiceState::Selected,
                _ => ChoiceState::Idle,
            };
            ChoiceVm {
                text: choice.clone(),
                state,
            }
        })
        .collect();

    QuestionVm {
        index,
        heading: format!("Question {} of {}", index + 1, session.len()),
        prompt: question.prompt.clone(),
        choices,
        explanation: if revealed {
            question.explanation.clone()
        } else {
            None
        },
        locked: revealed,
    }
}

fn map_score(session: &QuizSession) -> ScoreVm {
    let correct = session.correct_count();
    let total = session.len();
    let percentage = session.score_percentage();
    let headline = match percentage {
        90..=100 => "Excellent!",
        70..=89 => "Well done!",
        50..=69 => "Not bad.",
        _ => "Keep practicing.",
    };
    ScoreVm {
        correct,
        total,
        percentage,
        label: format!("Score: {correct}/{total} ({percentage}%)"),
        headline,
    }
}
