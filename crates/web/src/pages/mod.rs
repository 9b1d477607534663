//! Pages, one per [`Route`].

use keepstudy::{orders::Order, prices::format_amount, routes::Route};
use leptos::prelude::*;

use crate::state::AppState;

mod assessments;
mod auth;
mod cart;
mod checkout;
mod community;
mod course;
mod courses;
mod home;
mod not_found;
mod order;
mod orders;
mod workspace;

/// The page for `route`.
pub(crate) fn page(route: Route, state: AppState) -> AnyView {
    match route {
        Route::Home => view! { <home::HomePage state=state /> }.into_any(),
        Route::Courses => view! { <courses::CoursesPage state=state /> }.into_any(),
        Route::Course(id) => view! { <course::CourseDetailPage state=state id=id /> }.into_any(),
        Route::Cart => view! { <cart::CartPage state=state /> }.into_any(),
        Route::Checkout => view! { <checkout::CheckoutPage state=state /> }.into_any(),
        Route::Orders => view! { <orders::OrdersPage state=state /> }.into_any(),
        Route::Order(id) => view! { <order::OrderDetailPage state=state id=id /> }.into_any(),
        Route::Community => view! { <community::CommunityPage /> }.into_any(),
        Route::Assessments => view! { <assessments::AssessmentsPage state=state /> }.into_any(),
        Route::Assessment(kind) => {
            view! { <assessments::AssessmentPage state=state kind=kind /> }.into_any()
        }
        Route::Workspace(workspace) => {
            view! { <workspace::WorkspacePage state=state workspace=workspace /> }.into_any()
        }
        Route::Login => view! { <auth::LoginPage state=state /> }.into_any(),
        Route::Register => view! { <auth::RegisterPage state=state /> }.into_any(),
        Route::NotFound => view! { <not_found::NotFoundPage /> }.into_any(),
    }
}

/// Amount paid for `order`, e.g. `¥498` or `¥150.50`.
pub(crate) fn order_total(order: &Order) -> String {
    format_amount(order.total)
}

/// When `order` was placed, to the minute.
pub(crate) fn order_date(order: &Order) -> String {
    order.date.strftime("%Y-%m-%d %H:%M").to_string()
}
