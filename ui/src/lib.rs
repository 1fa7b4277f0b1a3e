use payloads::{APIClient, UserId};
use yew::prelude::*;
use yew_router::prelude::*;

pub mod components;
pub mod hooks;
mod logs;
pub mod pages;
mod state;
pub mod utils;

pub use state::{AuthState, State};

use components::layout::MainLayout;
use pages::{
    AddIdeaPage, HomePage, IdeasPage, LoginPage, LogoutPage, MyIdeasPage,
    NotFoundPage, ProfileEditPage, ProfilePage, RegisterPage, UserAddPage,
    UserDetailPage, UserEditPage, UserIdeasPage, UsersPage,
};

// Global API client - configurable via environment or same-origin fallback
pub fn get_api_client() -> APIClient {
    // Try environment variable first (set at build time)
    let address = option_env!("BACKEND_URL")
        .map(|url| url.to_string())
        .unwrap_or_else(|| {
            // Fallback to same origin (current setup)
            let window = web_sys::window().unwrap();
            let location = window.location();
            location.origin().unwrap()
        });

    APIClient {
        address,
        inner_client: reqwest::Client::new(),
    }
}

#[function_component]
pub fn App() -> Html {
    logs::init_logging();
    html! {
        <BrowserRouter>
            <MainLayout>
                <Switch<Route> render={switch} />
            </MainLayout>
        </BrowserRouter>
    }
}

/// The route table. Paginated lists have a canonical address per page
/// (`…/page/{one_based}`) so that direct links and browser back/forward
/// reproduce the same view.
#[derive(Debug, Clone, PartialEq, Routable)]
pub enum Route {
    #[at("/")]
    Home,
    #[at("/ideas")]
    Ideas,
    #[at("/ideas/page/:page")]
    IdeasPaged { page: i64 },
    #[at("/ideas/add")]
    AddIdea,
    #[at("/login")]
    Login,
    #[at("/register")]
    Register,
    #[at("/logout")]
    Logout,
    #[at("/me")]
    Profile,
    #[at("/me/edit")]
    ProfileEdit,
    #[at("/me/ideas")]
    MyIdeas,
    #[at("/me/ideas/page/:page")]
    MyIdeasPaged { page: i64 },
    #[at("/users")]
    Users,
    #[at("/users/page/:page")]
    UsersPaged { page: i64 },
    #[at("/users/add")]
    UserAdd,
    #[at("/users/:id")]
    UserDetail { id: UserId },
    #[at("/users/:id/edit")]
    UserEdit { id: UserId },
    #[at("/users/:id/ideas")]
    UserIdeas { id: UserId },
    #[at("/users/:id/ideas/page/:page")]
    UserIdeasPaged { id: UserId, page: i64 },
    #[not_found]
    #[at("/404")]
    NotFound,
}

fn switch(routes: Route) -> Html {
    use payloads::Page;

    match routes {
        Route::Home => html! { <HomePage /> },
        Route::Ideas => html! { <IdeasPage page={Page::FIRST} /> },
        Route::IdeasPaged { page } => html! {
            <IdeasPage page={Page::from_one_based(page)} />
        },
        Route::AddIdea => html! { <AddIdeaPage /> },
        Route::Login => html! { <LoginPage /> },
        Route::Register => html! { <RegisterPage /> },
        Route::Logout => html! { <LogoutPage /> },
        Route::Profile => html! { <ProfilePage /> },
        Route::ProfileEdit => html! { <ProfileEditPage /> },
        Route::MyIdeas => html! { <MyIdeasPage page={Page::FIRST} /> },
        Route::MyIdeasPaged { page } => html! {
            <MyIdeasPage page={Page::from_one_based(page)} />
        },
        Route::Users => html! { <UsersPage page={Page::FIRST} /> },
        Route::UsersPaged { page } => html! {
            <UsersPage page={Page::from_one_based(page)} />
        },
        Route::UserAdd => html! { <UserAddPage /> },
        Route::UserDetail { id } => html! { <UserDetailPage {id} /> },
        Route::UserEdit { id } => html! { <UserEditPage {id} /> },
        Route::UserIdeas { id } => html! {
            <UserIdeasPage {id} page={Page::FIRST} />
        },
        Route::UserIdeasPaged { id, page } => html! {
            <UserIdeasPage {id} page={Page::from_one_based(page)} />
        },
        Route::NotFound => html! { <NotFoundPage /> },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;
    use uuid::Uuid;

    #[test]
    fn test_page_addresses_round_trip() {
        for n in [1, 2, 17] {
            let route = Route::IdeasPaged { page: n };
            assert_eq!(route.to_path(), format!("/ideas/page/{n}"));
            assert_eq!(
                Route::recognize(&format!("/ideas/page/{n}")),
                Some(route)
            );
        }
    }

    #[test]
    fn test_base_address_is_distinct_from_page_addresses() {
        assert_eq!(Route::recognize("/ideas"), Some(Route::Ideas));
        assert_eq!(
            Route::recognize("/ideas/page/2"),
            Some(Route::IdeasPaged { page: 2 })
        );
    }

    #[test]
    fn test_static_segments_win_over_user_id() {
        assert_eq!(Route::recognize("/users/add"), Some(Route::UserAdd));

        let id = UserId(
            Uuid::from_str("44f51c90-13b2-4a49-8c0e-111111111111").unwrap(),
        );
        assert_eq!(
            Route::recognize(&format!("/users/{id}")),
            Some(Route::UserDetail { id })
        );
        assert_eq!(
            Route::recognize(&format!("/users/{id}/ideas/page/3")),
            Some(Route::UserIdeasPaged { id, page: 3 })
        );
    }

    #[test]
    fn test_unknown_addresses_fall_through_to_not_found() {
        assert_eq!(
            Route::recognize("/users/not-a-uuid"),
            Some(Route::NotFound)
        );
    }
}
