use yew::prelude::*;

use crate::components::layout::{Footer, Header};
use crate::hooks::use_authentication;

#[derive(Properties, PartialEq)]
pub struct MainLayoutProps {
    pub children: Children,
}

#[function_component]
pub fn MainLayout(props: &MainLayoutProps) -> Html {
    // Resolve the session once for the whole app
    use_authentication();

    html! {
        <div class="min-h-screen flex flex-col bg-neutral-50 \
                    dark:bg-neutral-900 text-neutral-900 \
                    dark:text-neutral-100 transition-colors">
            <Header />
            <main class="flex-1 max-w-7xl w-full mx-auto px-4 sm:px-6 \
                         lg:px-8 py-8">
                {for props.children.iter()}
            </main>
            <Footer />
        </div>
    }
}
