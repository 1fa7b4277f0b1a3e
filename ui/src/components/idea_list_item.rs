use payloads::responses;
use yew::prelude::*;
use yewdux::prelude::*;

use crate::utils::time::format_date;
use crate::{State, get_api_client};

#[derive(Clone, Copy, PartialEq)]
enum VoteKind {
    Up,
    Down,
}

#[derive(Properties, PartialEq)]
pub struct Props {
    pub idea: responses::Idea,
    /// Emitted after a vote settles successfully so the owning list can
    /// refresh itself.
    pub on_changed: Callback<()>,
}

#[function_component]
pub fn IdeaListItem(props: &Props) -> Html {
    let (state, _) = use_store::<State>();
    let is_voting = use_state(|| false);
    let vote_error = use_state(|| None::<String>);

    let user_id = state.current_user_id();
    let idea = &props.idea;

    let cast_vote = {
        let idea_id = idea.id;
        let is_voting = is_voting.clone();
        let vote_error = vote_error.clone();
        let on_changed = props.on_changed.clone();

        Callback::from(move |kind: VoteKind| {
            let is_voting = is_voting.clone();
            let vote_error = vote_error.clone();
            let on_changed = on_changed.clone();

            yew::platform::spawn_local(async move {
                is_voting.set(true);
                vote_error.set(None);

                let api_client = get_api_client();
                let result = match kind {
                    VoteKind::Up => api_client.upvote_idea(&idea_id).await,
                    VoteKind::Down => api_client.downvote_idea(&idea_id).await,
                };

                match result {
                    Ok(_) => on_changed.emit(()),
                    Err(e) => vote_error.set(Some(e.to_string())),
                }

                is_voting.set(false);
            });
        })
    };

    let on_upvote = {
        let cast_vote = cast_vote.clone();
        Callback::from(move |_: MouseEvent| cast_vote.emit(VoteKind::Up))
    };
    let on_downvote = {
        let cast_vote = cast_vote.clone();
        Callback::from(move |_: MouseEvent| cast_vote.emit(VoteKind::Down))
    };

    let can_vote = user_id.is_some() && !*is_voting;
    let has_upvoted =
        user_id.is_some_and(|id| idea.is_upvoted_by(id));
    let has_downvoted =
        user_id.is_some_and(|id| idea.is_downvoted_by(id));

    let vote_class = |active: bool| {
        if active {
            "px-2 py-1 rounded text-sm font-semibold \
             text-neutral-900 dark:text-neutral-100 \
             bg-neutral-200 dark:bg-neutral-600"
        } else {
            "px-2 py-1 rounded text-sm \
             text-neutral-600 dark:text-neutral-400 \
             hover:bg-neutral-100 dark:hover:bg-neutral-700 \
             disabled:opacity-50 disabled:cursor-not-allowed"
        }
    };

    html! {
        <li class="py-4 border-b border-neutral-200 dark:border-neutral-700 \
                   last:border-b-0">
            <div class="flex items-start justify-between gap-4">
                <div class="min-w-0">
                    <h4 class="font-semibold text-neutral-900 \
                               dark:text-neutral-100">
                        {&idea.name}
                    </h4>
                    <p class="text-sm text-neutral-600 dark:text-neutral-400 \
                              mt-1">
                        {&idea.description}
                    </p>
                    <p class="text-xs text-neutral-400 dark:text-neutral-500 \
                              mt-2">
                        {format_date(idea.created_at)}
                    </p>
                </div>

                <div class="flex items-center gap-1 shrink-0">
                    <button
                        onclick={on_upvote}
                        disabled={!can_vote}
                        class={vote_class(has_upvoted)}
                        title={if user_id.is_some() { "Upvote" } else { "Sign in to vote" }}
                    >
                        {format!("▲ {}", idea.upvotes())}
                    </button>
                    <button
                        onclick={on_downvote}
                        disabled={!can_vote}
                        class={vote_class(has_downvoted)}
                        title={if user_id.is_some() { "Downvote" } else { "Sign in to vote" }}
                    >
                        {format!("▼ {}", idea.downvotes())}
                    </button>
                </div>
            </div>

            if let Some(error) = &*vote_error {
                <p class="text-sm text-red-600 dark:text-red-400 mt-2">
                    {error}
                </p>
            }
        </li>
    }
}
