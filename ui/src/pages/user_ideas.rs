use payloads::{Page, UserId};
use yew::prelude::*;

use crate::components::{IdeaSource, IdeasList, RequireAuth};
use crate::hooks::use_title;

#[derive(Properties, PartialEq)]
pub struct Props {
    pub id: UserId,
    pub page: Page,
}

#[function_component]
pub fn UserIdeasPage(props: &Props) -> Html {
    use_title("User Ideas - IdeaForge");
    let id = props.id;
    let page = props.page;

    html! {
        <RequireAuth admin_only={true} render={Callback::from(move |_admin| html! {
            <IdeasList
                source={IdeaSource::ByUser(id)}
                header={format!("Ideas by user {id}")}
                empty_text="This user hasn't posted any ideas."
                show_add_button={false}
                page={page}
                paginate={true}
            />
        })} />
    }
}
