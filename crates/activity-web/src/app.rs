//! Main App Component

use std::rc::Rc;

use activity_core::{ActivityBoard, BANNER_TIMEOUT, BoardRenderer, BoardView, HttpActivityApi};
use gloo_timers::callback::Timeout;
use leptos::prelude::*;

use crate::api;
use crate::components::{ActivityList, MessageBanner, SignupForm};

/// Pushes every board snapshot into a signal the components read
#[derive(Clone, Copy)]
pub struct SignalRenderer(pub RwSignal<BoardView>);

impl BoardRenderer for SignalRenderer {
    fn render(&self, view: &BoardView) {
        self.0.set(view.clone());
    }
}

pub type WebBoard = ActivityBoard<HttpActivityApi, SignalRenderer>;

/// Copyable handle to the page's single board
pub type BoardHandle = StoredValue<Rc<WebBoard>, LocalStorage>;

/// Root application component
#[component]
pub fn App() -> impl IntoView {
    let board_view = RwSignal::new(BoardView::default());

    let api = match api::same_origin_api() {
        Ok(api) => api,
        Err(e) => return view! { <p class="error">{e.to_string()}</p> }.into_any(),
    };
    let board: BoardHandle =
        StoredValue::new_local(Rc::new(ActivityBoard::setup(api, SignalRenderer(board_view))));

    // Hide each banner BANNER_TIMEOUT after it appears
    let banner_ticket =
        Memo::new(move |_| board_view.with(|v| v.visible_banner().map(|b| b.ticket)));
    Effect::new(move |_| {
        if let Some(ticket) = banner_ticket.get() {
            let board = board.get_value();
            let millis = u32::try_from(BANNER_TIMEOUT.as_millis()).unwrap_or(u32::MAX);
            Timeout::new(millis, move || {
                board.dismiss_banner(ticket);
            })
            .forget();
        }
    });

    let initial = board.get_value();
    leptos::task::spawn_local(async move {
        initial.load_activities().await;
    });

    view! {
        <main class="app">
            <header>
                <h1>"Mergington High School"</h1>
                <h2>"Extracurricular Activities"</h2>
            </header>

            <section id="activities-container">
                <h3>"Available Activities"</h3>
                <ActivityList board_view=board_view />
            </section>

            <section id="signup-container">
                <h3>"Sign Up for an Activity"</h3>
                <SignupForm board_view=board_view board=board />
                <MessageBanner board_view=board_view />
            </section>
        </main>
    }
    .into_any()
}
