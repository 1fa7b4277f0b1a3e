use payloads::Page;
use yew::prelude::*;

use crate::components::{IdeaSource, IdeasList, RequireAuth};
use crate::hooks::use_title;

#[derive(Properties, PartialEq)]
pub struct Props {
    pub page: Page,
}

#[function_component]
pub fn MyIdeasPage(props: &Props) -> Html {
    use_title("My Ideas - IdeaForge");
    let page = props.page;

    html! {
        <RequireAuth render={Callback::from(move |_user| html! {
            <IdeasList
                source={IdeaSource::Mine}
                header="My Ideas"
                empty_text="You haven't posted any ideas yet."
                page={page}
                paginate={true}
            />
        })} />
    }
}
