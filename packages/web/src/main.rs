use dioxus::prelude::*;

use store::ClientConfig;
use ui::{Page, SessionProvider};
use views::{target_for, AdminLogin, ForgotPassword, Home, Login, ProjectQuery, Reset, Signup};

mod views;

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum Route {
    #[route("/")]
    Root {},
    #[route("/login")]
    Login {},
    #[route("/adminlogin")]
    AdminLogin {},
    #[route("/signup")]
    Signup {},
    #[route("/forgetpsw")]
    ForgotPassword {},
    #[route("/reset")]
    Reset {},
    #[route("/home?:..query")]
    Home { query: ProjectQuery },
}

const MAIN_CSS: Asset = asset!("/assets/main.css");

/// Client configuration, see `madetect.toml`.
const CONFIG_TOML: &str = include_str!("../madetect.toml");

fn main() {
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    let config = use_hook(|| {
        let config = ClientConfig::load(CONFIG_TOML);
        tracing::info!("Loaded client configuration from {}", ClientConfig::filename());
        config
    });

    rsx! {
        // Global app resources
        document::Link { rel: "stylesheet", href: MAIN_CSS }

        SessionProvider {
            config,
            Router::<Route> {}
        }
    }
}

/// Redirect `/` to `/home`
#[component]
fn Root() -> Element {
    let nav = use_navigator();
    nav.replace(target_for(&Page::Home(None)));
    rsx! {}
}
