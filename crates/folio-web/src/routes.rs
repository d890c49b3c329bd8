//! URL routes. Every page renders inside the [`Shell`] chrome.

use dioxus::prelude::*;

use crate::components::Shell;
use crate::pages::{About, Blog, Contact, Home, Journey, NotFound, Projects, Skills};

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
pub enum Route {
    #[layout(Shell)]
        #[route("/")]
        Home {},
        #[route("/about")]
        About {},
        #[route("/projects")]
        Projects {},
        #[route("/contact")]
        Contact {},
        #[route("/blog")]
        Blog {},
        #[route("/skills")]
        Skills {},
        #[route("/journey")]
        Journey {},
        #[route("/:..segments")]
        NotFound { segments: Vec<String> },
}

/// Header navigation, in display order.
pub fn nav_links() -> Vec<(Route, &'static str)> {
    vec![
        (Route::Home {}, "Home"),
        (Route::About {}, "About"),
        (Route::Projects {}, "Projects"),
        (Route::Skills {}, "Skills"),
        (Route::Journey {}, "Journey"),
        (Route::Blog {}, "Blog"),
        (Route::Contact {}, "Contact"),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_paths_map_to_pages() {
        let cases = [
            ("/", Route::Home {}),
            ("/about", Route::About {}),
            ("/projects", Route::Projects {}),
            ("/contact", Route::Contact {}),
            ("/blog", Route::Blog {}),
            ("/skills", Route::Skills {}),
            ("/journey", Route::Journey {}),
        ];
        for (path, expected) in cases {
            assert_eq!(path.parse::<Route>().ok(), Some(expected), "{path}");
        }
    }

    #[test]
    fn test_unknown_path_is_not_found() {
        let route = "/nowhere/at/all".parse::<Route>().ok();
        assert!(matches!(route, Some(Route::NotFound { .. })));
    }

    #[test]
    fn test_nav_links_round_trip() {
        for (route, _) in nav_links() {
            let path = route.to_string();
            assert_eq!(path.parse::<Route>().ok(), Some(route));
        }
    }
}
