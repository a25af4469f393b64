use dioxus::prelude::*;
use quiz_core::model::{Difficulty, GenerationDraft};

use crate::vm::{
    NavDotVm, QuestionVm, ScoreVm, can_submit, count_options, difficulty_options, submit_label,
};

#[component]
pub fn GenerationForm(
    draft: GenerationDraft,
    loading: bool,
    on_change: EventHandler<GenerationDraft>,
    on_submit: EventHandler<()>,
) -> Element {
    let enabled = can_submit(&draft, loading);
    let label = submit_label(loading);
    let topic = draft.topic.clone();
    let count = draft.count;
    let options = difficulty_options(draft.difficulty);
    let difficulty_items = options.iter().map(|option| {
        rsx! {
            option { key: "{option.value}", value: "{option.value}", selected: option.selected, "{option.label}" }
        }
    });
    let count_items = count_options().map(|value| {
        rsx! {
            option { key: "{value}", value: "{value}", selected: value == count, "{value}" }
        }
    });
    let draft_for_topic = draft.clone();
    let draft_for_difficulty = draft.clone();
    let draft_for_count = draft;

    rsx! {
        form {
            class: "generation-form",
            onsubmit: move |evt: FormEvent| {
                evt.prevent_default();
                if enabled {
                    on_submit.call(());
                }
            },
            div { class: "field",
                label { r#for: "quiz-topic", "Topic" }
                input {
                    id: "quiz-topic",
                    class: "input",
                    r#type: "text",
                    placeholder: "e.g. Photosynthesis",
                    value: "{topic}",
                    disabled: loading,
                    oninput: move |evt| {
                        let mut next = draft_for_topic.clone();
                        next.topic = evt.value();
                        on_change.call(next);
                    },
                }
            }
            div { class: "field-row",
                div { class: "field",
                    label { r#for: "quiz-difficulty", "Difficulty" }
                    select {
                        id: "quiz-difficulty",
                        class: "input",
                        disabled: loading,
                        onchange: move |evt| {
                            let Ok(difficulty) = Difficulty::from_wire(&evt.value()) else {
                                return;
                            };
                            let mut next = draft_for_difficulty.clone();
                            next.difficulty = difficulty;
                            on_change.call(next);
                        },
                        {difficulty_items}
                    }
                }
                div { class: "field",
                    label { r#for: "quiz-count", "Questions" }
                    select {
                        id: "quiz-count",
                        class: "input",
                        disabled: loading,
                        onchange: move |evt| {
                            let Ok(count) = evt.value().parse::<u32>() else {
                                return;
                            };
                            let mut next = draft_for_count.clone();
                            next.count = count;
                            on_change.call(next);
                        },
                        {count_items}
                    }
                }
            }
            button {
                class: "btn btn-primary",
                r#type: "submit",
                disabled: !enabled,
                "{label}"
            }
        }
    }
}

#[component]
pub fn QuestionCard(question: QuestionVm, on_select: EventHandler<String>) -> Element {
    let locked = question.locked;
    let choices = question.choices.iter().enumerate().map(|(position, choice)| {
        let text = choice.text.clone();
        let class = choice.state.css_class();
        rsx! {
            button {
                key: "{position}",
                class: "{class}",
                r#type: "button",
                disabled: locked,
                onclick: move |_| on_select.call(text.clone()),
                "{choice.text}"
            }
        }
    });

    rsx! {
        article { class: "question-card",
            p { class: "question-heading", "{question.heading}" }
            h3 { class: "question-prompt", "{question.prompt}" }
            div { class: "choices", {choices} }
            if let Some(explanation) = question.explanation.as_ref() {
                div { class: "explanation",
                    strong { "Explanation: " }
                    "{explanation}"
                }
            }
        }
    }
}

#[component]
pub fn QuestionNavigator(dots: Vec<NavDotVm>, on_select: EventHandler<usize>) -> Element {
    let items = dots.iter().map(|dot| {
        let index = dot.index;
        let class = dot.css_class();
        rsx! {
            button {
                key: "{index}",
                class: "{class}",
                r#type: "button",
                onclick: move |_| on_select.call(index),
                "{dot.label}"
            }
        }
    });

    rsx! {
        nav { class: "question-nav", {items} }
    }
}

#[component]
pub fn ResultsBanner(score: ScoreVm) -> Element {
    rsx! {
        section { class: "results-banner",
            h3 { class: "results-headline", "{score.headline}" }
            p { class: "results-score", "{score.label}" }
        }
    }
}
