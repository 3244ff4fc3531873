use skyfare_core::constants::PROCESSING_LABEL;
use yew::prelude::*;

/// Button that disables itself and swaps its label while work is pending.
#[derive(Properties, PartialEq, Clone)]
pub struct Props {
    pub label: AttrValue,
    #[prop_or(AttrValue::Static(PROCESSING_LABEL))]
    pub busy_label: AttrValue,
    #[prop_or_default]
    pub busy: bool,
    #[prop_or_default]
    pub id: Option<AttrValue>,
    #[prop_or(classes!("neon-button"))]
    pub class: Classes,
    #[prop_or_default]
    pub onclick: Callback<MouseEvent>,
}

#[function_component(BusyButton)]
pub fn busy_button(p: &Props) -> Html {
    let onclick = p.onclick.clone();
    let label = if p.busy {
        p.busy_label.clone()
    } else {
        p.label.clone()
    };
    html! {
        <button
            type="button"
            id={p.id.clone()}
            class={p.class.clone()}
            disabled={p.busy}
            aria-busy={p.busy.to_string()}
            {onclick}
        >
            <span>{ label }</span>
        </button>
    }
}
