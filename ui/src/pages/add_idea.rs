use yew::prelude::*;

use crate::components::{IdeaSubmissionForm, RequireAuth};
use crate::hooks::use_title;

#[function_component]
pub fn AddIdeaPage() -> Html {
    use_title("Post an Idea - IdeaForge");

    html! {
        <RequireAuth render={Callback::from(|_user| html! {
            <div class="max-w-2xl mx-auto">
                <IdeaSubmissionForm />
            </div>
        })} />
    }
}
