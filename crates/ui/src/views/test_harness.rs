use std::sync::Arc;

use async_trait::async_trait;
use dioxus::core::NoOpMutations;
use dioxus::prelude::*;
use quiz_core::QuizSession;
use quiz_core::model::{GenerationRequest, Theme};
use quiz_core::time::fixed_clock;
use serde_json::Value;
use services::{AppServices, GenerationError, QuestionSource, QuizLoopService, ThemeService};

use crate::context::{AppContext, UiApp, build_app_context};
use crate::views::{QuizPanel, QuizView, ThemeToggle};

struct StaticSource(Value);

#[async_trait]
impl QuestionSource for StaticSource {
    async fn fetch(&self, _request: &GenerationRequest) -> Result<Value, GenerationError> {
        Ok(self.0.clone())
    }
}

#[derive(Clone)]
struct TestApp {
    theme: Theme,
    services: AppServices,
}

impl UiApp for TestApp {
    fn initial_theme(&self) -> Theme {
        self.theme
    }

    fn quiz_loop(&self) -> Arc<QuizLoopService> {
        self.services.quiz_loop()
    }

    fn theme_service(&self) -> Arc<ThemeService> {
        self.services.theme()
    }
}

#[derive(Clone, Copy, PartialEq, Eq)]
pub enum ViewKind {
    Quiz,
    Panel,
    ThemeToggle,
}

/// Build the UI context over in-memory storage and `source`.
pub fn test_context(theme: Theme, source: Arc<dyn QuestionSource>) -> AppContext {
    let app: Arc<dyn UiApp> = Arc::new(TestApp {
        theme,
        services: AppServices::in_memory(fixed_clock(), source),
    });
    build_app_context(&app)
}

#[derive(Props, Clone)]
struct ViewHarnessProps {
    ctx: AppContext,
    view: ViewKind,
    session: QuizSession,
}

impl PartialEq for ViewHarnessProps {
    fn eq(&self, _other: &Self) -> bool {
        true
    }
}

#[component]
fn ViewHarnessRoot(props: ViewHarnessProps) -> Element {
    let ctx = use_context_provider(|| props.ctx.clone());
    use_context_provider(|| Signal::new(ctx.initial_theme()));
    let seeded = props.session.clone();
    let session = use_signal(move || seeded);

    match props.view {
        ViewKind::Quiz => rsx! { QuizView {} },
        ViewKind::Panel => rsx! { QuizPanel { session, on_restart: move |()| {} } },
        ViewKind::ThemeToggle => rsx! { ThemeToggle {} },
    }
}

pub struct ViewHarness {
    pub dom: VirtualDom,
}

impl ViewHarness {
    pub fn rebuild(&mut self) {
        self.dom.rebuild_in_place();
        drive_dom(&mut self.dom);
    }

    pub fn render(&self) -> String {
        dioxus_ssr::render(&self.dom)
    }
}

pub fn drive_dom(dom: &mut VirtualDom) {
    dom.process_events();
    dom.render_immediate(&mut NoOpMutations);
    dom.process_events();
}

pub struct HarnessOptions {
    pub theme: Theme,
    pub payload: Value,
    pub session: QuizSession,
}

impl Default for HarnessOptions {
    fn default() -> Self {
        Self {
            theme: Theme::Light,
            payload: Value::Null,
            session: QuizSession::new(),
        }
    }
}

pub fn setup_view_harness(view: ViewKind, options: HarnessOptions) -> ViewHarness {
    let ctx = test_context(options.theme, Arc::new(StaticSource(options.payload)));

    let dom = VirtualDom::new_with_props(
        ViewHarnessRoot,
        ViewHarnessProps {
            ctx,
            view,
            session: options.session,
        },
    );

    ViewHarness { dom }
}
