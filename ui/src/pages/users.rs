use payloads::{Page, responses};
use yew::prelude::*;
use yew_router::prelude::*;

use crate::components::{PaginationControls, RequireAuth, Spinner};
use crate::hooks::{use_paginated_list, use_title};
use crate::{Route, get_api_client};

const USERS_PER_PAGE: i64 = 20;

#[derive(Properties, PartialEq)]
pub struct Props {
    pub page: Page,
}

#[function_component]
pub fn UsersPage(props: &Props) -> Html {
    use_title("Manage Users - IdeaForge");
    let page = props.page;

    html! {
        <RequireAuth admin_only={true} render={Callback::from(move |_admin| html! {
            <UsersContent page={page} />
        })} />
    }
}

#[function_component]
fn UsersContent(props: &Props) -> Html {
    let list = use_paginated_list(
        (),
        USERS_PER_PAGE,
        None,
        props.page,
        |query| async move { get_api_client().list_users(&query).await },
        |page| Route::UsersPaged {
            page: page.display_number(),
        },
    );

    let rows = list
        .entries
        .iter()
        .map(|user: &responses::UserMe| {
            html! {
                <tr
                    key={user.id.to_string()}
                    class="border-b border-neutral-200 \
                           dark:border-neutral-700 last:border-b-0"
                >
                    <td class="py-3 pr-4">
                        <Link<Route>
                            to={Route::UserDetail { id: user.id }}
                            classes="font-medium underline \
                                     text-neutral-900 dark:text-neutral-100"
                        >
                            {&user.username}
                        </Link<Route>>
                    </td>
                    <td class="py-3 pr-4 text-neutral-700 \
                               dark:text-neutral-300">
                        {&user.name}
                    </td>
                    <td class="py-3 pr-4">
                        {if user.is_active { "Active" } else { "Deactivated" }}
                    </td>
                    <td class="py-3">
                        {if user.is_admin { "Admin" } else { "" }}
                    </td>
                </tr>
            }
        })
        .collect::<Html>();

    html! {
        <section class="bg-white dark:bg-neutral-800 rounded-lg shadow p-6">
            <div class="flex items-center justify-between mb-4">
                <h1 class="text-lg font-semibold text-neutral-900 \
                           dark:text-neutral-100">
                    {"All Users"}
                </h1>
                <Link<Route>
                    to={Route::UserAdd}
                    classes="px-3 py-1.5 rounded-md text-sm font-medium \
                             text-white bg-neutral-900 hover:bg-neutral-800 \
                             dark:bg-neutral-100 dark:text-neutral-900 \
                             dark:hover:bg-neutral-200"
                >
                    {"Add user"}
                </Link<Route>>
            </div>

            if let Some(error) = &list.error {
                <div class="p-4 rounded-md bg-red-50 dark:bg-red-900/20 \
                            border border-red-200 dark:border-red-800 mb-4">
                    <p class="text-sm text-red-700 dark:text-red-400">
                        {format!("Error loading users: {error}")}
                    </p>
                </div>
            }

            if list.is_initial_loading() {
                <Spinner />
            } else if list.is_empty() {
                <p class="text-neutral-600 dark:text-neutral-400 \
                          text-center py-8">
                    {"No users found."}
                </p>
            } else {
                <table class="w-full text-left text-sm">
                    <thead>
                        <tr class="text-neutral-500 dark:text-neutral-400 \
                                   border-b border-neutral-200 \
                                   dark:border-neutral-700">
                            <th class="py-2 pr-4 font-medium">
                                {"Username"}
                            </th>
                            <th class="py-2 pr-4 font-medium">{"Name"}</th>
                            <th class="py-2 pr-4 font-medium">{"Status"}</th>
                            <th class="py-2 font-medium">{"Role"}</th>
                        </tr>
                    </thead>
                    <tbody>
                        {rows}
                    </tbody>
                </table>
            }

            <PaginationControls
                page={list.page}
                total_pages={list.total_pages}
                on_navigate={list.go_to_page.clone()}
                is_loading={list.is_loading}
            />
        </section>
    }
}
