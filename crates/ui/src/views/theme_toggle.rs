use dioxus::prelude::*;
use quiz_core::model::Theme;

use crate::context::AppContext;

/// Flips the theme immediately and persists the choice in the background.
#[component]
pub fn ThemeToggle() -> Element {
    let ctx = use_context::<AppContext>();
    let theme_service = ctx.theme_service();
    let mut theme = use_context::<Signal<Theme>>();
    let label = if theme().is_dark() {
        "Light mode"
    } else {
        "Dark mode"
    };

    rsx! {
        button {
            class: "btn btn-ghost theme-toggle",
            r#type: "button",
            onclick: move |_| {
                let theme_service = theme_service.clone();
                let next = theme().toggled();
                theme.set(next);
                spawn(async move {
                    if let Err(err) = theme_service.save(next).await {
                        tracing::warn!(error = %err, "failed to persist theme preference");
                    }
                });
            },
            "{label}"
        }
    }
}
