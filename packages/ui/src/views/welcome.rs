use dioxus::prelude::*;

/// Getting-started page shown when the account has no project selected.
#[component]
pub fn WelcomePage(on_create_project: EventHandler<()>) -> Element {
    rsx! {
        div {
            class: "welcome-page",
            h1 { class: "welcome-title", "Welcome to MADetect" }
            div {
                class: "welcome-content",
                h2 { "Getting started" }
                p {
                    "MADetect checks medical advertisements against Taiwan's medical advertising regulations."
                }

                h3 { "How to use it" }
                ul {
                    li { "Create a project with the + button in the sidebar" }
                    li { "Select or create a project to start checking advertisements" }
                    li { "Paste your advertisement text and the system analyzes whether it complies" }
                    li { "You get a legal analysis and a suggested rewrite" }
                }

                h3 { "Features" }
                ul {
                    li { strong { "Legal analysis: " } "whether the text breaks the rules, with the relevant articles" }
                    li { strong { "Suggested wording: " } "a compliant version of the advertisement" }
                    li { strong { "Projects: " } "keep detection records for different campaigns apart" }
                }

                button {
                    class: "btn btn-primary",
                    onclick: move |_| on_create_project.call(()),
                    "New project"
                }
            }
        }
    }
}
