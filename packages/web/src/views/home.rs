use std::fmt;

use dioxus::prelude::*;
use ui::use_session;
use ui::views::HomeView;

use super::use_page_navigator;
use crate::Route;

const PROJECT_ID: &str = "project_id=";

/// Query of `/home`. The router decodes the whole query string before handing
/// it over, so the id is everything after `project_id=`.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ProjectQuery(pub Option<String>);

impl From<&str> for ProjectQuery {
    fn from(query: &str) -> Self {
        Self(
            query
                .strip_prefix(PROJECT_ID)
                .filter(|id| !id.is_empty())
                .map(str::to_string),
        )
    }
}

impl fmt::Display for ProjectQuery {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.0 {
            Some(id) => write!(f, "{PROJECT_ID}{}", urlencoding::encode(id)),
            None => Ok(()),
        }
    }
}

#[component]
pub fn Home(query: ProjectQuery) -> Element {
    let session = use_session();
    let nav = use_navigator();
    let on_navigate = use_page_navigator();

    if !session().checking && !session().verified {
        tracing::info!("No valid session, redirecting to login");
        nav.replace(Route::Login {});
    }

    let project_id = query.0;

    rsx! {
        HomeView { project_id, on_navigate }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_project_query_from_decoded_query() {
        assert_eq!(ProjectQuery::from(""), ProjectQuery(None));
        assert_eq!(ProjectQuery::from("project_id="), ProjectQuery(None));
        assert_eq!(ProjectQuery::from("project_id=a b&c"), ProjectQuery(Some("a b&c".into())));
    }

    #[test]
    fn test_project_query_display_escapes_id() {
        assert_eq!(ProjectQuery(None).to_string(), "");
        assert_eq!(ProjectQuery(Some("a&b".into())).to_string(), "project_id=a%26b");
    }
}
