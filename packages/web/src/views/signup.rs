use dioxus::prelude::*;
use ui::views::SignupView;

use super::use_page_navigator;

#[component]
pub fn Signup() -> Element {
    let on_navigate = use_page_navigator();

    rsx! {
        SignupView { on_navigate }
    }
}
