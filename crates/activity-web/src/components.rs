//! UI Components

use activity_core::view::{LOADING_TEXT, SELECT_PLACEHOLDER};
use activity_core::{ActivityCard, BoardView, ListView};
use leptos::prelude::*;

use crate::app::BoardHandle;

/// Cards for every activity, or the loading/error text in their place
#[component]
pub fn ActivityList(board_view: RwSignal<BoardView>) -> impl IntoView {
    view! {
        <div id="activities-list">
            {move || match board_view.with(|v| v.list.clone()) {
                ListView::Idle => ().into_any(),
                ListView::Loading => view! { <p>{LOADING_TEXT}</p> }.into_any(),
                ListView::Error(text) => view! { <p class="error">{text}</p> }.into_any(),
                ListView::Cards(cards) => cards
                    .into_iter()
                    .map(|card| view! { <ActivityCardView card=card /> })
                    .collect_view()
                    .into_any(),
            }}
        </div>
    }
}

#[component]
pub fn ActivityCardView(card: ActivityCard) -> impl IntoView {
    view! {
        <div class="activity-card">
            <h4 class="activity-title">{card.title}</h4>
            {card.description.map(|d| view! { <p class="activity-meta">{d}</p> })}
            {card.schedule.map(|s| view! { <p class="activity-meta">{s}</p> })}
            <div class="participants-section">
                <div class="participants-title">{card.participants_title}</div>
                <ul class="participants-list">
                    {card
                        .rows
                        .into_iter()
                        .map(|row| {
                            let class = if row.placeholder { "no-participant" } else { "" };
                            view! { <li class=class>{row.text}</li> }
                        })
                        .collect_view()}
                </ul>
            </div>
        </div>
    }
}

/// Email + activity form; submission goes through the board
#[component]
pub fn SignupForm(board_view: RwSignal<BoardView>, board: BoardHandle) -> impl IntoView {
    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let board = board.get_value();
        leptos::task::spawn_local(async move {
            // outcome is reported on the banner
            let _ = board.submit_form().await;
        });
    };

    view! {
        <form id="signup-form" on:submit=on_submit>
            <div class="form-group">
                <label for="email">"Student Email:"</label>
                <input
                    type="email"
                    id="email"
                    placeholder="your-email@mergington.edu"
                    prop:value=move || board_view.with(|v| v.form.email.clone())
                    on:input=move |ev| board.get_value().set_email(event_target_value(&ev))
                />
            </div>
            <div class="form-group">
                <label for="activity">"Select Activity:"</label>
                <select
                    id="activity"
                    prop:value=move || board_view.with(|v| v.form.activity.clone())
                    on:change=move |ev| board.get_value().select_activity(event_target_value(&ev))
                >
                    <option value="">{SELECT_PLACEHOLDER}</option>
                    {move || {
                        board_view
                            .with(|v| v.options.clone())
                            .into_iter()
                            .map(|option| {
                                view! { <option value=option.value>{option.label}</option> }
                            })
                            .collect_view()
                    }}
                </select>
            </div>
            <button type="submit">"Sign Up"</button>
        </form>
    }
}

/// Status banner; hidden once dismissed
#[component]
pub fn MessageBanner(board_view: RwSignal<BoardView>) -> impl IntoView {
    let class = move || {
        board_view.with(|v| match v.visible_banner() {
            Some(banner) => format!("message {}", banner.kind.as_str()),
            None => "hidden".to_string(),
        })
    };
    let text = move || {
        board_view.with(|v| v.banner.as_ref().map(|b| b.text.clone()).unwrap_or_default())
    };

    view! { <div id="message" class=class>{text}</div> }
}
