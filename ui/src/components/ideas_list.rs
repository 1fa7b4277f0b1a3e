use payloads::{
    ClientError, IdeaSort, ListQuery, Page, UserId, responses,
};
use yew::prelude::*;
use yew_router::prelude::*;

use crate::components::{IdeaListItem, PaginationControls, Spinner};
use crate::hooks::use_paginated_list;
use crate::{Route, get_api_client};

/// Which list endpoint an [`IdeasList`] is bound to. The source determines
/// both the fetch call and the canonical page addresses the list pushes
/// while paginating.
#[derive(Clone, PartialEq)]
pub enum IdeaSource {
    /// All ideas (`/ideas`).
    All,
    /// The current user's own ideas (`/me/ideas`).
    Mine,
    /// Ideas created by the given user (`/users/{id}/ideas`).
    ByUser(UserId),
}

impl IdeaSource {
    pub fn route_for(&self, page: Page) -> Route {
        let page = page.display_number();
        match self {
            IdeaSource::All => Route::IdeasPaged { page },
            IdeaSource::Mine => Route::MyIdeasPaged { page },
            IdeaSource::ByUser(id) => {
                Route::UserIdeasPaged { id: *id, page }
            }
        }
    }

    async fn fetch(
        self,
        query: ListQuery,
    ) -> Result<responses::IdeasPage, ClientError> {
        let api_client = get_api_client();
        match self {
            IdeaSource::All => api_client.list_ideas(&query).await,
            IdeaSource::Mine => api_client.my_ideas(&query).await,
            IdeaSource::ByUser(id) => {
                api_client.list_user_ideas(&id, &query).await
            }
        }
    }
}

#[derive(Properties, PartialEq)]
pub struct Props {
    pub source: IdeaSource,
    #[prop_or(AttrValue::Static("Vote on Current Ideas"))]
    pub header: AttrValue,
    #[prop_or(AttrValue::Static("There are no ideas yet!"))]
    pub empty_text: AttrValue,
    /// Items per page
    #[prop_or(10)]
    pub limit: i64,
    #[prop_or_default]
    pub sort: Option<IdeaSort>,
    /// Starting page, usually parsed from the address by the router
    #[prop_or_default]
    pub page: Page,
    /// Whether to show pagination controls and sync pages to the address bar
    #[prop_or(false)]
    pub paginate: bool,
    /// Offer an "Add idea" link in the empty state
    #[prop_or(true)]
    pub show_add_button: bool,
    /// Link to the full list below the items
    #[prop_or(false)]
    pub show_explore_button: bool,
}

#[function_component]
pub fn IdeasList(props: &Props) -> Html {
    let list = use_paginated_list(
        props.source.clone(),
        props.limit,
        props.sort,
        props.page,
        {
            let source = props.source.clone();
            move |query| source.clone().fetch(query)
        },
        {
            let source = props.source.clone();
            move |page| source.route_for(page)
        },
    );

    let items = list
        .entries
        .iter()
        .map(|idea| {
            html! {
                <IdeaListItem
                    key={idea.id.to_string()}
                    idea={idea.clone()}
                    on_changed={list.refetch.clone()}
                />
            }
        })
        .collect::<Html>();

    html! {
        <section class="bg-white dark:bg-neutral-800 rounded-lg shadow p-6">
            <h3 class="text-lg font-semibold text-neutral-900 \
                       dark:text-neutral-100 mb-4">
                {&props.header}
            </h3>

            if let Some(error) = &list.error {
                <div class="p-4 rounded-md bg-red-50 dark:bg-red-900/20 \
                            border border-red-200 dark:border-red-800 mb-4">
                    <p class="text-sm text-red-700 dark:text-red-400">
                        {format!("Error loading ideas: {error}")}
                    </p>
                </div>
            }

            if list.is_initial_loading() {
                <Spinner />
            } else if list.is_empty() {
                <div class="text-center py-8">
                    <p class="text-neutral-600 dark:text-neutral-400">
                        {&props.empty_text}
                    </p>
                    if props.show_add_button {
                        <Link<Route>
                            to={Route::AddIdea}
                            classes="inline-block mt-4 px-4 py-2 rounded-md \
                                     text-sm font-medium text-white \
                                     bg-neutral-900 hover:bg-neutral-800 \
                                     dark:bg-neutral-100 dark:text-neutral-900 \
                                     dark:hover:bg-neutral-200"
                        >
                            {"Add idea"}
                        </Link<Route>>
                    }
                </div>
            } else {
                <ul>
                    {items}
                </ul>
            }

            if props.paginate {
                <PaginationControls
                    page={list.page}
                    total_pages={list.total_pages}
                    on_navigate={list.go_to_page.clone()}
                    is_loading={list.is_loading}
                />
            }

            if props.show_explore_button {
                <div class="text-center mt-4">
                    <Link<Route>
                        to={Route::Ideas}
                        classes="text-sm font-medium underline \
                                 text-neutral-900 dark:text-neutral-100 \
                                 hover:text-neutral-700 \
                                 dark:hover:text-neutral-300"
                    >
                        {"Explore all ideas →"}
                    </Link<Route>>
                </div>
            }
        </section>
    }
}
