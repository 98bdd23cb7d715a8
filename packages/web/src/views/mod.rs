//! Route components: each one wires a `ui` view to the router.

use dioxus::prelude::*;
use ui::Page;

mod login;
pub use login::{AdminLogin, Login};

mod signup;
pub use signup::Signup;

mod password;
pub use password::{ForgotPassword, Reset};

mod home;
pub use home::{Home, ProjectQuery};

/// Router target for `page`. The path is pushed verbatim, so `/home` carries
/// no empty query and project ids keep their escaping.
pub(crate) fn target_for(page: &Page) -> NavigationTarget {
    NavigationTarget::Internal(page.path())
}

/// Navigation callback handed to `ui` views.
pub(crate) fn use_page_navigator() -> EventHandler<Page> {
    let nav = use_navigator();
    use_callback(move |page: Page| {
        if page.is_external() {
            ui::browser::redirect(&page.path());
        } else {
            nav.push(target_for(&page));
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Route;

    fn home(id: Option<&str>) -> Route {
        Route::Home {
            query: ProjectQuery(id.map(str::to_string)),
        }
    }

    #[test]
    fn test_page_paths_parse_to_routes() {
        let cases = [
            (Page::Root, Route::Root {}),
            (Page::Login, Route::Login {}),
            (Page::Signup, Route::Signup {}),
            (Page::ForgotPassword, Route::ForgotPassword {}),
            (Page::ResetPassword, Route::Reset {}),
            (Page::Home(None), home(None)),
            (Page::Home(Some("65f0a1".into())), home(Some("65f0a1"))),
            (Page::Home(Some("a b&c".into())), home(Some("a b&c"))),
        ];
        for (page, route) in cases {
            assert_eq!(target_for(&page), NavigationTarget::Internal(page.path()));
            assert_eq!(page.path().parse::<Route>().ok(), Some(route));
        }
    }

    #[test]
    fn test_home_without_project_has_no_query() {
        assert_eq!(target_for(&Page::Home(None)), NavigationTarget::Internal("/home".to_string()));
    }

    #[test]
    fn test_admin_console_is_external() {
        assert!(Page::AdminHome.is_external());
    }
}
