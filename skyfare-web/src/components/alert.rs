use yew::prelude::*;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AlertKind {
    Warning,
    Success,
}

impl AlertKind {
    const fn class(self) -> &'static str {
        match self {
            Self::Warning => "alert-warning",
            Self::Success => "alert-success",
        }
    }
}

/// Inline notice. Renders nothing without a message.
#[derive(Properties, PartialEq, Clone)]
pub struct AlertProps {
    #[prop_or_default]
    pub message: Option<AttrValue>,
    #[prop_or(AlertKind::Warning)]
    pub kind: AlertKind,
}

#[function_component(Alert)]
pub fn alert(props: &AlertProps) -> Html {
    let Some(message) = props.message.clone() else {
        return Html::default();
    };
    let role = match props.kind {
        AlertKind::Warning => "alert",
        AlertKind::Success => "status",
    };
    html! {
        <div class={classes!("alert", props.kind.class())} {role}>
            <p>{ message }</p>
        </div>
    }
}
