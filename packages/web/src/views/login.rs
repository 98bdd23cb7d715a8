use dioxus::prelude::*;
use ui::{use_session, Page};
use ui::views::LoginView;

use super::{target_for, use_page_navigator};

#[component]
pub fn Login() -> Element {
    let session = use_session();
    let nav = use_navigator();
    let on_navigate = use_page_navigator();

    // Already logged in: go straight to the workspace
    if !session().checking && session().verified {
        nav.replace(target_for(&Page::Home(None)));
    }

    rsx! {
        LoginView { on_navigate }
    }
}

#[component]
pub fn AdminLogin() -> Element {
    let on_navigate = use_page_navigator();

    rsx! {
        LoginView { admin: true, on_navigate }
    }
}
