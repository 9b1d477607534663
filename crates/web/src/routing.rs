//! Hash routing
//!
//! Pages live behind the URL fragment (`#/courses/3`) so the app can be served
//! as static files.

use keepstudy::routes::Route;
use leptos::logging::warn;

/// Resolve a `location.hash` value.
pub(crate) fn route_from_hash(hash: &str) -> Route {
    Route::parse(hash.strip_prefix('#').unwrap_or(hash))
}

/// Link target for `route`.
pub(crate) fn href(route: &Route) -> String {
    format!("#{}", route.path())
}

/// Route of the current location.
pub(crate) fn current_route() -> Route {
    web_sys::window()
        .and_then(|window| window.location().hash().ok())
        .map_or(Route::Home, |hash| route_from_hash(&hash))
}

/// Go to `route`. The `hashchange` listener picks the change up.
pub(crate) fn navigate(route: &Route) {
    let Some(window) = web_sys::window() else {
        return;
    };

    if let Err(error) = window.location().set_hash(&route.path()) {
        warn!("navigation to {route} failed: {error:?}");
    }
}

#[cfg(test)]
mod tests {
    use keepstudy::{orders::OrderId, routes::WorkspaceRoute};

    use super::*;

    #[test]
    fn empty_hash_is_home() {
        assert_eq!(route_from_hash(""), Route::Home);
        assert_eq!(route_from_hash("#"), Route::Home);
        assert_eq!(route_from_hash("#/"), Route::Home);
    }

    #[test]
    fn hash_is_parsed_as_a_path() {
        assert_eq!(route_from_hash("#/courses/4"), Route::Course(4));
        assert_eq!(
            route_from_hash("#/orders/KS1700000000000042"),
            Route::Order(OrderId::from("KS1700000000000042"))
        );
        assert_eq!(
            route_from_hash("#/workspace/practice/1?openAI=true"),
            Route::Workspace(WorkspaceRoute::Practice {
                course: 1,
                open_assistant: true,
            })
        );
    }

    #[test]
    fn href_round_trips() {
        let route = Route::Workspace(WorkspaceRoute::Practice {
            course: 2,
            open_assistant: true,
        });

        assert_eq!(href(&route), "#/workspace/practice/2?openAI=true");
        assert_eq!(route_from_hash(&href(&route)), route);
    }
}
