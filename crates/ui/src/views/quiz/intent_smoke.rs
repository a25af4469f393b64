use std::cell::RefCell;
use std::rc::Rc;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use async_trait::async_trait;
use dioxus::core::NoOpMutations;
use dioxus::prelude::*;
use quiz_core::model::{GenerationRequest, Theme};
use serde_json::{Value, json};
use services::{GenerationError, QuestionSource};

use super::{QuizActions, QuizBody, QuizState, use_quiz_actions, use_quiz_state};
use crate::context::AppContext;
use crate::views::ViewError;
use crate::views::test_harness::test_context;

/// Serves a fixed payload until switched to an unusable one.
struct SwitchSource {
    payload: Value,
    failing: AtomicBool,
}

#[async_trait]
impl QuestionSource for SwitchSource {
    async fn fetch(&self, _request: &GenerationRequest) -> Result<Value, GenerationError> {
        if self.failing.load(Ordering::SeqCst) {
            return Ok(json!({ "error": "model overloaded" }));
        }
        Ok(self.payload.clone())
    }
}

#[derive(Clone, Default)]
struct HarnessHandles {
    state: Rc<RefCell<Option<QuizState>>>,
    actions: Rc<RefCell<Option<QuizActions>>>,
}

impl HarnessHandles {
    fn state(&self) -> QuizState {
        (*self.state.borrow()).expect("state registered")
    }

    fn actions(&self) -> QuizActions {
        (*self.actions.borrow()).expect("actions registered")
    }
}

#[derive(Props, Clone)]
struct HarnessProps {
    ctx: AppContext,
    handles: HarnessHandles,
}

impl PartialEq for HarnessProps {
    fn eq(&self, _other: &Self) -> bool {
        true
    }
}

#[component]
fn QuizIntentHarness(props: HarnessProps) -> Element {
    let ctx = use_context_provider(|| props.ctx.clone());
    let state = use_quiz_state();
    let actions = use_quiz_actions(state, ctx.quiz_loop());
    let mut registered = use_signal(|| false);
    if !registered() {
        registered.set(true);
        *props.handles.state.borrow_mut() = Some(state);
        *props.handles.actions.borrow_mut() = Some(actions);
    }
    rsx! { QuizBody { state, actions } }
}

fn drive_dom(dom: &mut VirtualDom) {
    dom.process_events();
    dom.render_immediate(&mut NoOpMutations);
    dom.process_events();
}

async fn drive_async(dom: &mut VirtualDom) {
    for _ in 0..3 {
        let _ = tokio::time::timeout(std::time::Duration::from_millis(50), dom.wait_for_work())
            .await;
        drive_dom(dom);
    }
}

fn payload() -> Value {
    json!({
        "questions": [
            {
                "pergunta": "Which smart pointer is reference counted?",
                "alternativas": ["A) Box", "B) Rc"],
                "gabarito": "B"
            },
            {
                "pergunta": "Which trait formats with `{}`?",
                "alternativas": ["A) Display", "B) Debug"],
                "gabarito": "A"
            }
        ]
    })
}

#[tokio::test(flavor = "current_thread")]
async fn quiz_intents_generate_fail_then_restart() {
    let source = Arc::new(SwitchSource {
        payload: payload(),
        failing: AtomicBool::new(false),
    });
    let handles = HarnessHandles::default();
    let mut dom = VirtualDom::new_with_props(
        QuizIntentHarness,
        HarnessProps {
            ctx: test_context(Theme::Light, source.clone()),
            handles: handles.clone(),
        },
    );
    dom.rebuild_in_place();
    drive_dom(&mut dom);

    let state = handles.state();
    let actions = handles.actions();

    // Submit a draft and let the spawned request land.
    dom.in_runtime(|| {
        let mut draft = state.draft;
        draft.write().topic = "Rust".to_string();
        actions.generate.call(());
    });
    drive_async(&mut dom).await;

    dom.in_runtime(|| {
        assert_eq!(state.session.read().len(), 2);
        assert!(!(state.loading)());
        assert_eq!((state.notice)(), None);
    });
    let html = dioxus_ssr::render(&dom);
    assert!(html.contains("quiz-panel"), "missing panel in {html}");
    assert!(html.contains("Question 1 of 2"), "missing heading in {html}");

    // A failed request keeps the loaded quiz and its answers.
    dom.in_runtime(|| {
        let mut session = state.session;
        session.write().select_answer(0, "B) Rc");
    });
    source.failing.store(true, Ordering::SeqCst);
    dom.in_runtime(|| actions.generate.call(()));
    drive_async(&mut dom).await;

    dom.in_runtime(|| {
        let session = state.session.read();
        assert_eq!(session.len(), 2);
        assert_eq!(session.answer(0), Some("B) Rc"));
        assert!(!(state.loading)());
        assert_eq!((state.notice)(), Some(ViewError::NoQuestions));
    });
    let html = dioxus_ssr::render(&dom);
    assert!(html.contains("quiz-panel"), "quiz lost after failure in {html}");
    assert!(
        html.contains(ViewError::NoQuestions.message()),
        "missing notice in {html}"
    );

    // Starting over drops the quiz and the topic.
    dom.in_runtime(|| actions.restart.call(()));
    drive_dom(&mut dom);

    dom.in_runtime(|| {
        assert!(state.session.read().is_empty());
        assert!(state.draft.read().topic.is_empty());
        assert_eq!((state.notice)(), None);
    });
    let html = dioxus_ssr::render(&dom);
    assert!(html.contains("generation-form"), "missing form in {html}");
    assert!(!html.contains("quiz-panel"), "panel still shown in {html}");
}
