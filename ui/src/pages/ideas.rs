use payloads::{IdeaSort, Page};
use yew::prelude::*;

use crate::components::{IdeaSource, IdeasList};
use crate::hooks::use_title;

#[derive(Properties, PartialEq)]
pub struct Props {
    /// Starting page, parsed from the address by the router.
    pub page: Page,
}

#[function_component]
pub fn IdeasPage(props: &Props) -> Html {
    use_title("Explore Ideas - IdeaForge");

    html! {
        <IdeasList
            source={IdeaSource::All}
            header="All Ideas"
            sort={Some(IdeaSort::Recent)}
            page={props.page}
            paginate={true}
        />
    }
}
