mod components;

use std::sync::Arc;

use dioxus::prelude::*;
use quiz_core::QuizSession;
use quiz_core::model::GenerationDraft;
use services::QuizLoopService;

use crate::context::AppContext;
use crate::views::ViewError;
use crate::vm::map_quiz;

pub use components::{GenerationForm, QuestionCard, QuestionNavigator, ResultsBanner};

#[cfg(test)]
mod intent_smoke;

/// Signals backing the quiz page.
#[derive(Clone, Copy, PartialEq)]
pub struct QuizState {
    pub session: Signal<QuizSession>,
    pub draft: Signal<GenerationDraft>,
    pub loading: Signal<bool>,
    pub notice: Signal<Option<ViewError>>,
}

pub fn use_quiz_state() -> QuizState {
    QuizState {
        session: use_signal(QuizSession::new),
        draft: use_signal(GenerationDraft::default),
        loading: use_signal(|| false),
        notice: use_signal(|| None::<ViewError>),
    }
}

#[derive(Clone, Copy, PartialEq)]
pub struct QuizActions {
    pub generate: Callback<()>,
    pub restart: Callback<()>,
}

pub fn use_quiz_actions(state: QuizState, quiz_loop: Arc<QuizLoopService>) -> QuizActions {
    let QuizState {
        session,
        draft,
        mut loading,
        mut notice,
    } = state;

    let generate = use_callback(move |()| {
        if loading() {
            return;
        }
        let request = draft();
        if !request.is_submittable() {
            return;
        }
        let quiz_loop = quiz_loop.clone();
        let mut session = session;
        loading.set(true);
        notice.set(None);
        spawn(async move {
            // The session is only replaced once questions are in hand.
            match quiz_loop.generate(request).await {
                Ok(questions) => session.write().load(questions),
                Err(err) => notice.set(Some(ViewError::from_generation(&err))),
            }
            loading.set(false);
        });
    });

    let restart = use_callback(move |()| {
        let mut session = session;
        let mut draft = draft;
        session.write().clear();
        draft.write().topic.clear();
        notice.set(None);
    });

    QuizActions { generate, restart }
}

#[component]
pub fn QuizView() -> Element {
    let ctx = use_context::<AppContext>();
    let state = use_quiz_state();
    let actions = use_quiz_actions(state, ctx.quiz_loop());
    rsx! { QuizBody { state, actions } }
}

#[component]
pub fn QuizBody(state: QuizState, actions: QuizActions) -> Element {
    let QuizState {
        session,
        mut draft,
        loading,
        notice,
    } = state;
    let has_quiz = !session.read().is_empty();

    rsx! {
        div { class: "page quiz-page",
            header { class: "view-header",
                h2 { class: "view-title", "Quiz" }
                p { class: "view-subtitle", "Pick a topic and get a fresh set of questions." }
            }
            div { class: "view-divider" }
            if let Some(err) = notice() {
                p { class: "notice notice--error", role: "alert", "{err.message()}" }
            }
            if has_quiz {
                QuizPanel { session, on_restart: actions.restart }
            } else {
                GenerationForm {
                    draft: draft(),
                    loading: loading(),
                    on_change: move |next| draft.set(next),
                    on_submit: actions.generate,
                }
            }
        }
    }
}

/// Question card, navigation and results for a loaded session.
#[component]
pub fn QuizPanel(session: Signal<QuizSession>, on_restart: EventHandler<()>) -> Element {
    let Some(vm) = map_quiz(&session.read()) else {
        return rsx! {};
    };
    let mut session = session;
    let current = session.read().current_index();
    let revealed = vm.score.is_some();

    rsx! {
        section { class: "quiz-panel",
            QuestionNavigator {
                dots: vm.dots.clone(),
                on_select: move |index| {
                    session.write().go_to(index);
                },
            }
            if let Some(question) = vm.question.clone() {
                QuestionCard {
                    question,
                    on_select: move |choice: String| {
                        session.write().select_answer(current, choice);
                    },
                }
            }
            div { class: "quiz-controls",
                button {
                    class: "btn btn-secondary",
                    r#type: "button",
                    disabled: !vm.can_prev,
                    onclick: move |_| {
                        session.write().prev();
                    },
                    "Previous"
                }
                span { class: "quiz-position", "{vm.position_label}" }
                button {
                    class: "btn btn-secondary",
                    r#type: "button",
                    disabled: !vm.can_next,
                    onclick: move |_| {
                        session.write().next();
                    },
                    "Next"
                }
            }
            if let Some(score) = vm.score.clone() {
                ResultsBanner { score }
            }
            div { class: "quiz-actions",
                if revealed {
                    button {
                        class: "btn btn-secondary",
                        r#type: "button",
                        onclick: move |_| session.write().reset_answers(),
                        "Try again"
                    }
                } else {
                    button {
                        class: "btn btn-primary",
                        r#type: "button",
                        disabled: !vm.can_reveal,
                        onclick: move |_| {
                            if let Err(err) = session.write().reveal() {
                                tracing::debug!(error = %err, "results not revealed");
                            }
                        },
                        "{vm.reveal_label}"
                    }
                }
                button {
                    class: "btn btn-ghost",
                    r#type: "button",
                    onclick: move |_| on_restart.call(()),
                    "Generate new questions"
                }
            }
        }
    }
}
