use crate::paths::view_href;
use crate::router::Route;
use skyfare_core::View;
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct Props {
    pub current: Route,
}

#[function_component(Header)]
pub fn header(p: &Props) -> Html {
    let active = p.current.to_view();
    let links = View::ALL.iter().map(|&view| {
        let is_active = active == Some(view);
        html! {
            <li>
                <a
                    class={classes!("nav-link", is_active.then_some("active"))}
                    href={view_href(view)}
                    aria-current={is_active.then_some("page")}
                >
                    { view.title() }
                </a>
            </li>
        }
    });
    html! {
        <header role="banner" class="site-header">
            <a href="#main" class="sr-only">{ "Skip to content" }</a>
            <div class="header-content">
                <a class="brand" href={view_href(View::Home)}>{ "Skyfare" }</a>
                <nav aria-label="Primary">
                    <ul class="nav-links">{ for links }</ul>
                </nav>
            </div>
        </header>
    }
}
