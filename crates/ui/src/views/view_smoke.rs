use quiz_core::QuizSession;
use quiz_core::model::{QuestionRecord, Theme};

use super::test_harness::{HarnessOptions, ViewKind, setup_view_harness};

fn two_questions() -> QuizSession {
    QuizSession::with_questions(vec![
        QuestionRecord::new(
            "Which keyword moves ownership into a closure?",
            vec!["A) ref".into(), "B) move".into()],
            Some('B'),
            Some("`move` captures by value.".into()),
        ),
        QuestionRecord::new(
            "What does `Vec::with_capacity` avoid?",
            vec!["A) Reallocation".into(), "B) Bounds checks".into()],
            Some('A'),
            None,
        ),
    ])
}

#[tokio::test(flavor = "current_thread")]
async fn quiz_view_starts_on_generation_form() {
    let mut harness = setup_view_harness(ViewKind::Quiz, HarnessOptions::default());
    harness.rebuild();
    let html = harness.render();

    assert!(html.contains("generation-form"), "missing form in {html}");
    assert!(html.contains("Generate questions"), "missing submit label in {html}");
    assert!(html.contains("Medium"), "missing difficulty option in {html}");
    assert!(!html.contains("quiz-panel"), "quiz should be hidden in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn panel_renders_first_question_and_progress() {
    let mut session = two_questions();
    session.select_answer(0, "B) move");
    let mut harness = setup_view_harness(
        ViewKind::Panel,
        HarnessOptions {
            session,
            ..HarnessOptions::default()
        },
    );
    harness.rebuild();
    let html = harness.render();

    assert!(html.contains("Question 1 of 2"), "missing heading in {html}");
    assert!(html.contains("Which keyword moves ownership"), "missing prompt in {html}");
    assert!(html.contains("choice--selected"), "missing selection in {html}");
    assert!(html.contains("1 / 2"), "missing position in {html}");
    assert!(html.contains("See results (1/2)"), "missing reveal label in {html}");
    assert!(html.contains("Generate new questions"), "missing restart in {html}");
    assert!(!html.contains("Explanation:"), "explanation leaked in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn panel_shows_score_after_reveal() {
    let mut session = two_questions();
    session.select_answer(0, "B) move");
    session.select_answer(1, "B) Bounds checks");
    session.reveal().unwrap();
    let mut harness = setup_view_harness(
        ViewKind::Panel,
        HarnessOptions {
            session,
            ..HarnessOptions::default()
        },
    );
    harness.rebuild();
    let html = harness.render();

    assert!(html.contains("Score: 1/2 (50%)"), "missing score in {html}");
    assert!(html.contains("choice--correct"), "missing correct marker in {html}");
    assert!(html.contains("Explanation:"), "missing explanation in {html}");
    assert!(html.contains("Try again"), "missing retry in {html}");
    assert!(!html.contains("See results"), "reveal still offered in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn theme_toggle_offers_opposite_mode() {
    let mut harness = setup_view_harness(
        ViewKind::ThemeToggle,
        HarnessOptions {
            theme: Theme::Dark,
            ..HarnessOptions::default()
        },
    );
    harness.rebuild();
    let html = harness.render();
    assert!(html.contains("Light mode"), "missing toggle label in {html}");
}
