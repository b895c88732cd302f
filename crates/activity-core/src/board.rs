//! Activity Board
//!
//! View controller behind the activities page: loads the catalog, renders
//! cards and selector options, submits signups and shows status banners.
//!
//! ```text
//!   Idle ──load──▶ Loading ──ok──▶ Rendered
//!                     │
//!                     └──err──▶ Error
//! ```
//!
//! Every load takes a fresh ticket. When loads overlap, only the most
//! recently issued one may write the view; earlier completions are dropped.

use std::cell::{Cell, RefCell};
use std::time::Duration;

use tracing::{debug, info, warn};

use crate::api::ActivityApi;
use crate::error::Result;
use crate::model::{ActivityCatalog, SignupRequest};
use crate::view::{
    Banner, BannerKind, BannerTicket, BoardView, LOAD_ERROR_PREFIX, ListView, render_catalog,
};

/// How long a banner stays on screen
pub const BANNER_TIMEOUT: Duration = Duration::from_millis(4000);

/// Rendering context handed to the board at setup
pub trait BoardRenderer {
    /// Called with a fresh snapshot after every view change
    fn render(&self, view: &BoardView);
}

impl<F: Fn(&BoardView)> BoardRenderer for F {
    fn render(&self, view: &BoardView) {
        self(view);
    }
}

/// How a call to [`ActivityBoard::load_activities`] ended
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LoadOutcome {
    /// Cards rendered for this many activities
    Rendered(usize),
    /// Inline error rendered
    Failed,
    /// A newer load was issued before this one finished; nothing rendered
    Superseded,
}

/// Activities page controller
pub struct ActivityBoard<A, R> {
    api: A,
    renderer: R,
    view: RefCell<BoardView>,
    load_seq: Cell<u64>,
    banner_seq: Cell<u64>,
}

impl<A: ActivityApi, R: BoardRenderer> ActivityBoard<A, R> {
    /// Build the board and render its initial (idle) view
    pub fn setup(api: A, renderer: R) -> Self {
        let board = Self {
            api,
            renderer,
            view: RefCell::new(BoardView::default()),
            load_seq: Cell::new(0),
            banner_seq: Cell::new(0),
        };
        board.publish();
        board
    }

    pub fn api(&self) -> &A {
        &self.api
    }

    /// Snapshot of the current view
    pub fn view(&self) -> BoardView {
        self.view.borrow().clone()
    }

    fn publish(&self) {
        let snapshot = self.view();
        self.renderer.render(&snapshot);
    }

    fn update(&self, change: impl FnOnce(&mut BoardView)) {
        change(&mut *self.view.borrow_mut());
        self.publish();
    }

    /// Fetch the catalog and re-render the list and selector from scratch
    pub async fn load_activities(&self) -> LoadOutcome {
        let ticket = self.load_seq.get() + 1;
        self.load_seq.set(ticket);

        debug!(ticket, "Loading activities");
        self.update(|view| view.list = ListView::Loading);

        let result = self.api.fetch_catalog().await;

        if ticket != self.load_seq.get() {
            debug!(ticket, latest = self.load_seq.get(), "Dropping superseded activities response");
            return LoadOutcome::Superseded;
        }

        match result {
            Ok(catalog) => {
                debug!(ticket, activities = catalog.len(), "Activities loaded");
                self.render_activities(&catalog);
                LoadOutcome::Rendered(catalog.len())
            }
            Err(e) => {
                warn!(ticket, status = ?e.status(), "Failed to load activities: {}", e);
                self.update(|view| view.list = ListView::Error(format!("{LOAD_ERROR_PREFIX} {e}")));
                LoadOutcome::Failed
            }
        }
    }

    /// Replace cards and selector options with `catalog`.
    ///
    /// The selection survives when its activity is still listed.
    pub fn render_activities(&self, catalog: &ActivityCatalog) {
        let (cards, options) = render_catalog(catalog);
        self.update(|view| {
            if !options.iter().any(|o| o.value == view.form.activity) {
                view.form.activity.clear();
            }
            view.list = ListView::Cards(cards);
            view.options = options;
        });
    }

    /// Validate and submit a signup, then reload the catalog on success.
    ///
    /// Returns the banner text shown on success.
    pub async fn submit_signup(&self, activity: &str, email: &str) -> Result<String> {
        let request = match SignupRequest::new(activity, email) {
            Ok(request) => request,
            Err(e) => {
                debug!("Signup rejected locally: {}", e);
                self.show_message(BannerKind::Error, e.to_string());
                return Err(e);
            }
        };

        match self.api.signup(&request).await {
            Ok(response) => {
                let message = response.message_or_default();
                info!(activity = %request.activity, "Signup accepted");
                self.show_message(BannerKind::Success, message.clone());

                self.load_activities().await;
                self.update(|view| view.form.email.clear());
                Ok(message)
            }
            Err(e) => {
                warn!(activity = %request.activity, status = ?e.status(), "Signup failed: {}", e);
                self.show_message(BannerKind::Error, e.user_message());
                Err(e)
            }
        }
    }

    /// Submit whatever the form inputs currently hold
    pub async fn submit_form(&self) -> Result<String> {
        let form = self.view.borrow().form.clone();
        self.submit_signup(&form.activity, &form.email).await
    }

    /// Show a banner, replacing any banner already on screen
    pub fn show_message(&self, kind: BannerKind, text: impl Into<String>) -> BannerTicket {
        let ticket = BannerTicket(self.banner_seq.get() + 1);
        self.banner_seq.set(ticket.0);

        let text = text.into();
        self.update(|view| {
            view.banner = Some(Banner {
                kind,
                text,
                ticket,
                visible: true,
            });
        });
        ticket
    }

    /// Hide the banner identified by `ticket`.
    ///
    /// Returns `false` when a newer banner has replaced it in the meantime.
    pub fn dismiss_banner(&self, ticket: BannerTicket) -> bool {
        let current = self
            .view
            .borrow()
            .visible_banner()
            .is_some_and(|b| b.ticket == ticket);
        if current {
            self.update(|view| {
                if let Some(banner) = view.banner.as_mut() {
                    banner.visible = false;
                }
            });
        }
        current
    }

    pub fn select_activity(&self, name: impl Into<String>) {
        let name = name.into();
        self.update(|view| view.form.activity = name);
    }

    pub fn set_email(&self, email: impl Into<String>) {
        let email = email.into();
        self.update(|view| view.form.email = email);
    }
}

#[cfg(test)]
mod tests {
    use std::collections::VecDeque;
    use std::rc::Rc;

    use async_trait::async_trait;
    use tokio::sync::oneshot;

    use super::*;
    use crate::api::{MockActivityApi, MockReply};
    use crate::error::BoardError;
    use crate::model::{Activity, SignupResponse};

    fn catalog() -> ActivityCatalog {
        [
            Activity::new("Chess Club")
                .description("Learn strategies and compete in chess tournaments")
                .schedule("Fridays, 3:30 PM - 5:00 PM")
                .participants(["michael@mergington.edu", "daniel@mergington.edu"]),
            Activity::new("Programming Class").participants(["emma@mergington.edu"]),
            Activity::new("Art Studio"),
        ]
        .into_iter()
        .collect()
    }

    fn board(api: MockActivityApi) -> ActivityBoard<MockActivityApi, impl BoardRenderer> {
        ActivityBoard::setup(api, |_: &BoardView| {})
    }

    #[tokio::test]
    async fn test_load_renders_cards_and_options() {
        let board = board(MockActivityApi::with_catalog(&catalog()));

        assert_eq!(board.load_activities().await, LoadOutcome::Rendered(3));

        let view = board.view();
        let titles: Vec<_> = view.list.cards().iter().map(|c| c.title.clone()).collect();
        let options: Vec<_> = view.options.iter().map(|o| o.value.clone()).collect();
        assert_eq!(titles, ["Chess Club", "Programming Class", "Art Studio"]);
        assert_eq!(options, titles);

        let art = view.card("Art Studio").unwrap();
        assert_eq!(art.participant_count, 0);
        assert_eq!(art.rows[0].text, "No participants yet");
    }

    #[tokio::test]
    async fn test_odd_capacity_still_renders_every_card() {
        let api = MockActivityApi::new();
        api.set_catalog_reply(MockReply::ok(
            r#"{
                "Chess Club": {"participants": ["emma@mergington.edu"], "max_participants": 12.0},
                "Gym Class": {"participants": [], "max_participants": -1},
                "Art Studio": {"participants": [], "max_participants": "12"}
            }"#,
        ));
        let board = board(api);

        assert_eq!(board.load_activities().await, LoadOutcome::Rendered(3));

        let view = board.view();
        assert_eq!(view.list.cards().len(), 3);
        assert_eq!(view.options.len(), 3);
        assert_eq!(view.card("Chess Club").unwrap().participant_count, 1);
    }

    #[tokio::test]
    async fn test_load_failure_renders_inline_error_and_keeps_options() {
        let api = MockActivityApi::with_catalog(&catalog());
        let board = board(api);
        board.load_activities().await;

        board.api().set_catalog_reply(MockReply::status(503, ""));
        assert_eq!(board.load_activities().await, LoadOutcome::Failed);

        let view = board.view();
        assert_eq!(
            view.list,
            ListView::Error("Unable to load activities. Failed to load activities".into())
        );
        assert_eq!(view.options.len(), 3);
    }

    #[tokio::test]
    async fn test_network_failure_message_is_appended() {
        let api = MockActivityApi::new();
        api.set_catalog_reply(MockReply::NetworkError("connection refused".into()));
        let board = board(api);

        board.load_activities().await;
        assert_eq!(
            board.view().list,
            ListView::Error("Unable to load activities. connection refused".into())
        );
    }

    #[tokio::test]
    async fn test_renderer_sees_loading_state() {
        let seen = Rc::new(RefCell::new(Vec::new()));
        let log = seen.clone();
        let api = MockActivityApi::with_catalog(&catalog());
        let board = ActivityBoard::setup(api, move |view: &BoardView| {
            log.borrow_mut().push(view.list.clone());
        });

        board.load_activities().await;

        let seen = seen.borrow();
        assert_eq!(seen[0], ListView::Idle);
        assert_eq!(seen[1], ListView::Loading);
        assert!(matches!(seen.last(), Some(ListView::Cards(cards)) if cards.len() == 3));
    }

    #[tokio::test]
    async fn test_missing_input_makes_no_request() {
        let board = board(MockActivityApi::with_catalog(&catalog()));

        let inputs = [("Chess Club", ""), ("Chess Club", "   "), ("", "a@mergington.edu")];
        for (activity, email) in inputs {
            let err = board.submit_signup(activity, email).await.unwrap_err();
            assert!(matches!(err, BoardError::Validation(_)));

            let banner = board.view().visible_banner().cloned().unwrap();
            assert_eq!(banner.kind, BannerKind::Error);
            assert_eq!(banner.text, "Please provide an email and select an activity.");
        }
        assert_eq!(board.api().request_count(), 0);
    }

    #[tokio::test]
    async fn test_successful_signup_reloads_once_and_clears_email() {
        let api = MockActivityApi::with_catalog(&catalog());
        api.set_signup_reply(MockReply::json(&serde_json::json!({
            "message": "Signed up emma@mergington.edu for Chess Club"
        })));
        let board = board(api);
        board.load_activities().await;
        board.select_activity("Chess Club");
        board.set_email("emma@mergington.edu");

        let fetches_before = board.api().catalog_fetches();
        let message = board.submit_form().await.unwrap();

        assert_eq!(message, "Signed up emma@mergington.edu for Chess Club");
        assert_eq!(board.api().catalog_fetches(), fetches_before + 1);
        assert_eq!(board.api().signups()[0].activity, "Chess Club");

        let view = board.view();
        assert_eq!(view.form.email, "");
        assert_eq!(view.form.activity, "Chess Club");
        let banner = view.visible_banner().unwrap();
        assert_eq!(banner.kind, BannerKind::Success);
        assert_eq!(banner.text, message);
    }

    #[tokio::test]
    async fn test_success_without_message_uses_default() {
        let api = MockActivityApi::with_catalog(&catalog());
        api.set_signup_reply(MockReply::ok("not json"));
        let board = board(api);

        let message = board.submit_signup("Chess Club", "a@mergington.edu").await.unwrap();
        assert_eq!(message, SignupResponse::DEFAULT_MESSAGE);
    }

    #[tokio::test]
    async fn test_server_detail_is_shown() {
        let api = MockActivityApi::with_catalog(&catalog());
        api.set_signup_reply(MockReply::status(400, r#"{"detail":"Activity full"}"#));
        let board = board(api);
        board.set_email("a@mergington.edu");

        board.submit_signup("Chess Club", "a@mergington.edu").await.unwrap_err();

        let view = board.view();
        assert_eq!(view.visible_banner().unwrap().text, "Activity full");
        // no reload, input kept
        assert_eq!(board.api().catalog_fetches(), 0);
        assert_eq!(view.form.email, "a@mergington.edu");
    }

    #[tokio::test]
    async fn test_unparseable_error_body_shows_status() {
        let api = MockActivityApi::new();
        api.set_signup_reply(MockReply::status(404, "Not Found"));
        let board = board(api);

        board.submit_signup("Chess Club", "a@mergington.edu").await.unwrap_err();
        assert_eq!(board.view().visible_banner().unwrap().text, "Signup failed (404)");
    }

    #[tokio::test]
    async fn test_network_error_on_signup() {
        let api = MockActivityApi::new();
        api.set_signup_reply(MockReply::NetworkError(String::new()));
        let board = board(api);

        board.submit_signup("Chess Club", "a@mergington.edu").await.unwrap_err();
        let banner = board.view().visible_banner().cloned().unwrap();
        assert_eq!(banner.kind, BannerKind::Error);
        assert_eq!(banner.text, "Signup failed");
    }

    #[tokio::test]
    async fn test_selection_reset_when_activity_disappears() {
        let api = MockActivityApi::with_catalog(&catalog());
        let board = board(api);
        board.load_activities().await;
        board.select_activity("Art Studio");

        let smaller: ActivityCatalog = [Activity::new("Chess Club")].into_iter().collect();
        board.api().set_catalog(&smaller);
        board.load_activities().await;

        assert_eq!(board.view().form.activity, "");
    }

    #[test]
    fn test_later_banner_overwrites_text() {
        let board = board(MockActivityApi::new());
        board.show_message(BannerKind::Success, "first");
        board.show_message(BannerKind::Error, "second");

        let banner = board.view().visible_banner().cloned().unwrap();
        assert_eq!(banner.text, "second");
        assert_eq!(banner.kind, BannerKind::Error);
    }

    #[test]
    fn test_stale_dismissal_keeps_newer_banner() {
        let board = board(MockActivityApi::new());
        let first = board.show_message(BannerKind::Success, "first");
        let second = board.show_message(BannerKind::Success, "second");

        assert!(!board.dismiss_banner(first));
        assert_eq!(board.view().visible_banner().unwrap().text, "second");

        assert!(board.dismiss_banner(second));
        assert!(board.view().visible_banner().is_none());
    }

    /// Transport whose catalog responses are released by the test
    struct GatedApi {
        gates: RefCell<VecDeque<oneshot::Receiver<ActivityCatalog>>>,
    }

    #[async_trait(?Send)]
    impl ActivityApi for GatedApi {
        async fn fetch_catalog(&self) -> Result<ActivityCatalog> {
            let gate = self.gates.borrow_mut().pop_front();
            match gate {
                Some(gate) => gate.await.map_err(|e| BoardError::Network(e.to_string())),
                None => Err(BoardError::Network("no response scripted".into())),
            }
        }

        async fn signup(&self, _request: &SignupRequest) -> Result<SignupResponse> {
            Ok(SignupResponse::default())
        }
    }

    #[tokio::test]
    async fn test_last_issued_load_wins() {
        let (first_tx, first_rx) = oneshot::channel();
        let (second_tx, second_rx) = oneshot::channel();
        let api = GatedApi {
            gates: RefCell::new(VecDeque::from([first_rx, second_rx])),
        };
        let board = ActivityBoard::setup(api, |_: &BoardView| {});

        let old: ActivityCatalog = [Activity::new("Old Club")].into_iter().collect();
        let new: ActivityCatalog = [Activity::new("New Club"), Activity::new("Other Club")]
            .into_iter()
            .collect();

        let release = async {
            tokio::task::yield_now().await;
            second_tx.send(new).unwrap();
            tokio::task::yield_now().await;
            first_tx.send(old).unwrap();
        };
        let (first, second, ()) =
            tokio::join!(board.load_activities(), board.load_activities(), release);

        assert_eq!(first, LoadOutcome::Superseded);
        assert_eq!(second, LoadOutcome::Rendered(2));
        let titles: Vec<_> = board.view().list.cards().iter().map(|c| c.title.clone()).collect();
        assert_eq!(titles, ["New Club", "Other Club"]);
    }
}
