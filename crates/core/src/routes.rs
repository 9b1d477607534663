//! Routes
//!
//! Path table of the storefront. Unknown paths under `/workspace` resolve to
//! the default workspace; any other unknown path is [`Route::NotFound`].

use std::fmt::{Display, Formatter, Result as FmtResult};

use crate::{assessments::AssessmentKind, orders::OrderId};

/// Query flag that opens the assistant panel on the practice workspace.
const OPEN_ASSISTANT_QUERY: &str = "openAI=true";

/// Path prefixes rendered without the navigation bar and footer.
const CHROMELESS_PREFIXES: [&str; 4] = ["/community", "/workspace", "/login", "/register"];

/// A page of the storefront.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Route {
    /// `/`
    Home,

    /// `/courses`
    Courses,

    /// `/courses/:id`
    Course(u32),

    /// `/cart`
    Cart,

    /// `/checkout`
    Checkout,

    /// `/orders`
    Orders,

    /// `/orders/:id`
    Order(OrderId),

    /// `/community`
    Community,

    /// `/ai-assessment`
    Assessments,

    /// `/ai-assessment/:kind`
    Assessment(AssessmentKind),

    /// `/workspace/*`
    Workspace(WorkspaceRoute),

    /// `/login`
    Login,

    /// `/register`
    Register,

    /// Anything else.
    NotFound,
}

/// A view of the learning workspace.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WorkspaceRoute {
    /// `/workspace`
    Default,

    /// `/workspace/course/:id`
    Course(u32),

    /// `/workspace/plan/:id`
    Plan(u32),

    /// `/workspace/practice/:id`, optionally with the assistant panel open.
    Practice {
        /// Course being practised.
        course: u32,

        /// Whether the assistant panel starts open.
        open_assistant: bool,
    },
}

impl Route {
    /// Resolve a location path, optionally carrying a query string.
    pub fn parse(location: &str) -> Self {
        let (path, query) = location.split_once('?').unwrap_or((location, ""));
        let segments: Vec<&str> = path.split('/').filter(|segment| !segment.is_empty()).collect();

        match segments.as_slice() {
            [] => Self::Home,
            ["courses"] => Self::Courses,
            ["courses", id] => id.parse().map_or(Self::NotFound, Self::Course),
            ["cart"] => Self::Cart,
            ["checkout"] => Self::Checkout,
            ["orders"] => Self::Orders,
            ["orders", id] => Self::Order(OrderId::from(*id)),
            ["community"] => Self::Community,
            ["ai-assessment"] | ["ai-assessment", "start"] => Self::Assessments,
            ["ai-assessment", kind] => {
                AssessmentKind::from_slug(kind).map_or(Self::NotFound, Self::Assessment)
            }
            ["workspace", rest @ ..] => Self::Workspace(WorkspaceRoute::parse(rest, query)),
            ["login"] => Self::Login,
            ["register"] => Self::Register,
            _ => Self::NotFound,
        }
    }

    /// Canonical path of this route. [`Route::NotFound`] maps to `/`.
    pub fn path(&self) -> String {
        match self {
            Self::Home | Self::NotFound => "/".to_string(),
            Self::Courses => "/courses".to_string(),
            Self::Course(id) => format!("/courses/{id}"),
            Self::Cart => "/cart".to_string(),
            Self::Checkout => "/checkout".to_string(),
            Self::Orders => "/orders".to_string(),
            Self::Order(id) => format!("/orders/{id}"),
            Self::Community => "/community".to_string(),
            Self::Assessments => "/ai-assessment".to_string(),
            Self::Assessment(kind) => format!("/ai-assessment/{}", kind.slug()),
            Self::Workspace(workspace) => workspace.path(),
            Self::Login => "/login".to_string(),
            Self::Register => "/register".to_string(),
        }
    }

    /// Whether the navigation bar and footer are shown.
    pub fn shows_chrome(&self) -> bool {
        let path = self.path();

        !CHROMELESS_PREFIXES
            .iter()
            .any(|prefix| path.starts_with(prefix))
    }
}

impl Display for Route {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.write_str(&self.path())
    }
}

impl WorkspaceRoute {
    fn parse(segments: &[&str], query: &str) -> Self {
        match segments {
            ["course", id] => id.parse().map_or(Self::Default, Self::Course),
            ["plan", id] => id.parse().map_or(Self::Default, Self::Plan),
            ["practice", id] => id.parse().map_or(Self::Default, |course| Self::Practice {
                course,
                open_assistant: query.split('&').any(|pair| pair == OPEN_ASSISTANT_QUERY),
            }),
            _ => Self::Default,
        }
    }

    /// Canonical path of this view.
    pub fn path(self) -> String {
        match self {
            Self::Default => "/workspace".to_string(),
            Self::Course(id) => format!("/workspace/course/{id}"),
            Self::Plan(id) => format!("/workspace/plan/{id}"),
            Self::Practice {
                course,
                open_assistant: false,
            } => format!("/workspace/practice/{course}"),
            Self::Practice {
                course,
                open_assistant: true,
            } => format!("/workspace/practice/{course}?{OPEN_ASSISTANT_QUERY}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_every_page() {
        let cases = [
            ("/", Route::Home),
            ("/courses", Route::Courses),
            ("/courses/3", Route::Course(3)),
            ("/cart", Route::Cart),
            ("/checkout", Route::Checkout),
            ("/orders", Route::Orders),
            ("/orders/KS17000000000001234", Route::Order(OrderId::from("KS17000000000001234"))),
            ("/community", Route::Community),
            ("/ai-assessment", Route::Assessments),
            ("/ai-assessment/oj", Route::Assessment(AssessmentKind::Oj)),
            ("/ai-assessment/project", Route::Assessment(AssessmentKind::Project)),
            ("/ai-assessment/interview", Route::Assessment(AssessmentKind::Interview)),
            ("/workspace", Route::Workspace(WorkspaceRoute::Default)),
            ("/workspace/course/2", Route::Workspace(WorkspaceRoute::Course(2))),
            ("/workspace/plan/1", Route::Workspace(WorkspaceRoute::Plan(1))),
            (
                "/workspace/practice/1?openAI=true",
                Route::Workspace(WorkspaceRoute::Practice {
                    course: 1,
                    open_assistant: true,
                }),
            ),
            ("/login", Route::Login),
            ("/register", Route::Register),
        ];

        for (path, route) in cases {
            assert_eq!(Route::parse(path), route, "parsing {path}");
            assert_eq!(route.path(), path, "path of {route:?}");
        }
    }

    #[test]
    fn trailing_slashes_are_ignored() {
        assert_eq!(Route::parse("/courses/"), Route::Courses);
        assert_eq!(Route::parse(""), Route::Home);
    }

    #[test]
    fn unknown_workspace_paths_fall_back_to_default() {
        for path in [
            "/workspace/history",
            "/workspace/course/abc",
            "/workspace/plan/java",
            "/workspace/a/b/c",
        ] {
            assert_eq!(
                Route::parse(path),
                Route::Workspace(WorkspaceRoute::Default),
                "parsing {path}"
            );
        }
    }

    #[test]
    fn unknown_paths_are_not_found() {
        assert_eq!(Route::parse("/profile"), Route::NotFound);
        assert_eq!(Route::parse("/courses/python"), Route::NotFound);
        assert_eq!(Route::parse("/ai-assessment/quiz"), Route::NotFound);
        assert_eq!(Route::NotFound.path(), "/");
    }

    #[test]
    fn assessment_start_opens_the_hub() {
        assert_eq!(Route::parse("/ai-assessment/start"), Route::Assessments);
    }

    #[test]
    fn practice_without_flag_keeps_assistant_closed() {
        assert_eq!(
            Route::parse("/workspace/practice/4"),
            Route::Workspace(WorkspaceRoute::Practice {
                course: 4,
                open_assistant: false,
            })
        );
    }

    #[test]
    fn chrome_is_hidden_on_immersive_pages() {
        assert!(Route::Home.shows_chrome());
        assert!(Route::Orders.shows_chrome());
        assert!(Route::Course(1).shows_chrome());
        assert!(Route::Assessments.shows_chrome());
        assert!(Route::Assessment(AssessmentKind::Oj).shows_chrome());
        assert!(!Route::Community.shows_chrome());
        assert!(!Route::Workspace(WorkspaceRoute::Course(1)).shows_chrome());
        assert!(!Route::Workspace(WorkspaceRoute::Plan(2)).shows_chrome());
        assert!(!Route::Login.shows_chrome());
        assert!(!Route::Register.shows_chrome());
    }
}
