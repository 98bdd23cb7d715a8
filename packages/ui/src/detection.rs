//! # Detection view
//!
//! Submitting an advertisement runs through [`submit_detection`]:
//!
//! 1. [`HomeState::begin_detection`] validates and enters processing, which
//!    locks the panel and inserts the loading placeholder.
//! 2. `POST /madetect` goes out.
//! 3. The answer either appends a result pair, a divider and a fresh input
//!    ([`HomeState::complete_detection`]) or hands the input back
//!    ([`HomeState::fail_detection`]) with an alert from [`failure_alert`].
//!
//! [`DetectionPanelView`] renders the resulting [`DetectionPanel`] blocks.

use api::{ApiError, Backend};
use dioxus::prelude::*;

use crate::effects::{Effect, Page};
use crate::escape::result_markup;
use crate::state::{BlockId, HomeState, StateCell, SubmitRejection};
use crate::{icons, Icon};

pub use crate::state::{Block, DetectionPanel};

pub const EMPTY_INPUT: &str = "Please enter the advertisement text";
pub const NO_PROJECT: &str = "Please select or create a project first";
pub const SESSION_EXPIRED: &str = "Your session has expired, please log in again";
pub const REQUEST_FAILED: &str = "Request failed";
pub const BAD_REQUEST: &str = "Request failed, please check that a project is selected";
pub const SERVER_ERROR: &str = "Server error, please try again later";
pub const TRY_LATER: &str = "Request failed, please try again later";
pub const TRANSPORT_FAILED: &str = "Request failed, please report the issue";

/// Suffix appended to rate-limit messages.
pub fn daily_limit_notice(limit: u32) -> String {
    format!("\n\nThe free tier is limited to {limit} requests per day, please try again later.")
}

/// Alert text for a failed detection request.
pub fn failure_alert(error: &ApiError, daily_limit: u32) -> String {
    let or = |fallback: &str| message_or(error, fallback);
    match error {
        ApiError::Transport(_) => TRANSPORT_FAILED.to_string(),
        ApiError::Rejected { .. } => or(REQUEST_FAILED),
        ApiError::Status { status: 401, .. } => SESSION_EXPIRED.to_string(),
        ApiError::Status { status: 429, .. } => {
            format!("{}{}", or(REQUEST_FAILED), daily_limit_notice(daily_limit))
        }
        ApiError::Status { status: 400, .. } => or(BAD_REQUEST),
        ApiError::Status { status: 500, .. } => or(SERVER_ERROR),
        ApiError::Status { .. } | ApiError::Decode(_) | ApiError::InvalidUrl(_) => or(TRY_LATER),
    }
}

fn message_or(error: &ApiError, fallback: &str) -> String {
    error.server_message().unwrap_or(fallback).to_string()
}

/// Submit input block `block_id` for analysis.
///
/// `url_project` is the `project_id` of the current URL, used when the page
/// has no selected project yet.
pub async fn submit_detection<B: Backend>(
    backend: &B,
    state: &mut impl StateCell,
    block_id: BlockId,
    url_project: Option<&str>,
    daily_limit: u32,
) -> Vec<Effect> {
    let pending = match state.update(|s| s.begin_detection(block_id, url_project)) {
        Ok(pending) => pending,
        Err(SubmitRejection::Busy) => {
            tracing::debug!("Detection already in flight, ignoring submit");
            return Vec::new();
        }
        Err(SubmitRejection::EmptyInput) => return vec![Effect::alert(EMPTY_INPUT)],
        Err(SubmitRejection::NoProject) => return vec![Effect::alert(NO_PROJECT)],
        Err(SubmitRejection::UnknownBlock) => {
            tracing::warn!("Submit for unknown input block {block_id}");
            return Vec::new();
        }
    };

    match backend.detect(&pending.request).await {
        Ok(result) => {
            state.update(|s| s.complete_detection(&pending, result));
            Vec::new()
        }
        Err(e) => {
            tracing::error!("Detection failed: {e}");
            state.update(|s| s.fail_detection(&pending));
            let mut effects = vec![Effect::Alert(failure_alert(&e, daily_limit))];
            if e.status() == Some(401) {
                backend.tokens().clear();
                effects.push(Effect::EndSession);
                effects.push(Effect::Navigate(Page::Login));
            }
            effects
        }
    }
}

/// Renders the detection panel and wires its submit controls.
#[component]
pub fn DetectionPanelView(
    state: Signal<HomeState>,
    url_project: Option<String>,
    on_navigate: EventHandler<Page>,
) -> Element {
    let mut state = state;
    let backend = crate::session::use_backend();
    let daily_limit = crate::session::use_config().detection.free_tier_daily_limit;
    let (processing, blocks) = {
        let current = state.read();
        (current.is_processing(), current.panel().blocks().to_vec())
    };

    let submit = move |block_id: BlockId| {
        let backend = backend.clone();
        let url_project = url_project.clone();
        spawn(async move {
            let mut state = state;
            let effects =
                submit_detection(&backend, &mut state, block_id, url_project.as_deref(), daily_limit).await;
            crate::effects::run_effects(effects, on_navigate, || {});
        });
    };

    rsx! {
        div {
            class: "detection-panel",
            for (index, block) in blocks.into_iter().enumerate() {
                {match block {
                    Block::Input { id, text, editable } => rsx! {
                        InputBlock {
                            key: "input-{id}",
                            text,
                            locked: !editable || processing,
                            on_input: move |value: String| state.write().panel_mut().set_input_text(id, value),
                            on_submit: {
                                let submit = submit.clone();
                                move |_| submit(id)
                            },
                        }
                    },
                    Block::Loading => rsx! {
                        div {
                            key: "loading-{index}",
                            class: "result-pair loading",
                            div { class: "result-law", Icon { icon: icons::FaSpinner, width: 16, height: 16 } span { "Analyzing..." } }
                            div { class: "result-advice", Icon { icon: icons::FaSpinner, width: 16, height: 16 } span { "Generating suggestions..." } }
                        }
                    },
                    Block::Result { law, advice } => rsx! {
                        div {
                            key: "result-{index}",
                            class: "result-pair",
                            div {
                                class: "result-law",
                                h4 { "Legal analysis" }
                                div { dangerous_inner_html: result_markup(&law) }
                            }
                            div {
                                class: "result-advice",
                                h4 { "Suggested wording" }
                                div { dangerous_inner_html: result_markup(&advice) }
                            }
                        }
                    },
                    Block::Divider => rsx! {
                        hr { key: "divider-{index}", class: "result-divider" }
                    },
                }}
            }
        }
    }
}

/// One advertisement textarea with its submit control.
#[component]
fn InputBlock(
    text: String,
    locked: bool,
    on_input: EventHandler<String>,
    on_submit: EventHandler<()>,
) -> Element {
    rsx! {
        div {
            class: "input-block",
            textarea {
                class: "ad-input",
                placeholder: "Paste the advertisement text here",
                readonly: locked,
                value: "{text}",
                oninput: move |evt: FormEvent| on_input.call(evt.value()),
            }
            button {
                class: "submit-btn",
                disabled: locked,
                title: "Check advertisement",
                onclick: move |_| on_submit.call(()),
                Icon { icon: icons::FaPaperPlane, width: 16, height: 16 }
            }
        }
    }
}
