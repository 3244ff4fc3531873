use yew::prelude::*;

#[function_component(Footer)]
pub fn footer() -> Html {
    html! {
        <footer class="site-footer">{ "© Skyfare Airways. Demo booking site, no real payments are taken." }</footer>
    }
}
