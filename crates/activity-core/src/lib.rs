//! # activity-core
//!
//! Activity catalog model and the view controller behind the activities page.
//!
//! ## Architecture
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────────┐
//! │                      ActivityBoard                           │
//! │  ┌──────────────┐   ┌──────────────┐   ┌──────────────────┐  │
//! │  │ ActivityApi  │──▶│  BoardView   │──▶│  BoardRenderer   │  │
//! │  │ (HTTP/Mock)  │   │ (plain data) │   │ (DOM, tests, ..) │  │
//! │  └──────────────┘   └──────────────┘   └──────────────────┘  │
//! └──────────────────────────────────────────────────────────────┘
//! ```
//!
//! The board never touches the DOM. It rebuilds a [`BoardView`] and hands a
//! snapshot to whatever renderer it was set up with, which keeps the whole
//! load/submit/banner cycle testable without a browser.

pub mod api;
pub mod board;
pub mod error;
pub mod model;
pub mod view;

pub use api::{ActivityApi, HttpActivityApi, MockActivityApi};
pub use board::{ActivityBoard, BANNER_TIMEOUT, BoardRenderer, LoadOutcome};
pub use error::{BoardError, Result};
pub use model::{
    Activity, ActivityCatalog, ActivityDetails, ErrorBody, Participants, SignupRequest,
    SignupResponse,
};
pub use view::{ActivityCard, Banner, BannerKind, BannerTicket, BoardView, ListView};
