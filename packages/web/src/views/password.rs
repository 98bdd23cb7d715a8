use dioxus::prelude::*;
use ui::views::{ForgotPasswordView, ResetPasswordView};

use super::use_page_navigator;

#[component]
pub fn ForgotPassword() -> Element {
    let on_navigate = use_page_navigator();

    rsx! {
        ForgotPasswordView { on_navigate }
    }
}

#[component]
pub fn Reset() -> Element {
    let on_navigate = use_page_navigator();

    rsx! {
        ResetPasswordView { on_navigate }
    }
}
