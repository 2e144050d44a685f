use yew::prelude::*;
use yew_router::components::Link;

use crate::router::View;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum ButtonVariant {
    #[default]
    Primary,
    Ghost,
}

impl ButtonVariant {
    fn class(self) -> &'static str {
        match self {
            ButtonVariant::Primary => "btn btn-primary",
            ButtonVariant::Ghost => "btn btn-ghost",
        }
    }
}

#[derive(Properties, PartialEq)]
pub struct ButtonProps {
    #[prop_or_default]
    pub variant: ButtonVariant,
    #[prop_or_default]
    pub disabled: bool,
    #[prop_or_default]
    pub onclick: Option<Callback<MouseEvent>>,
    #[prop_or("button")]
    pub button_type: &'static str,
    pub children: Children,
}

#[function_component(Button)]
pub fn button(props: &ButtonProps) -> Html {
    html! {
        <>
            <button
                type={props.button_type}
                class={props.variant.class()}
                disabled={props.disabled}
                onclick={props.onclick.clone()}
            >
                { for props.children.iter() }
            </button>
            <ButtonStyles />
        </>
    }
}

#[derive(Properties, PartialEq)]
pub struct ButtonLinkProps {
    pub to: View,
    #[prop_or_default]
    pub variant: ButtonVariant,
    pub children: Children,
}

/// A router link that looks like a [`Button`].
#[function_component(ButtonLink)]
pub fn button_link(props: &ButtonLinkProps) -> Html {
    html! {
        <>
            <Link<View> to={props.to.clone()} classes={props.variant.class()}>
                { for props.children.iter() }
            </Link<View>>
            <ButtonStyles />
        </>
    }
}

#[function_component(ButtonStyles)]
fn button_styles() -> Html {
    html! {
        <style>
            {r#"
            .btn {
                display: inline-flex;
                align-items: center;
                justify-content: center;
                gap: 0.5rem;
                padding: 0.85rem 1.8rem;
                border-radius: 999px;
                font-size: 1rem;
                font-weight: 600;
                text-decoration: none;
                cursor: pointer;
                border: 1px solid transparent;
                transition: all 0.25s ease;
            }
            .btn-primary {
                background: linear-gradient(135deg, #26a69a, #0f4c5c);
                color: #ffffff;
                box-shadow: 0 6px 18px rgba(15, 76, 92, 0.25);
            }
            .btn-primary:hover:not(:disabled) {
                transform: translateY(-2px);
                box-shadow: 0 10px 24px rgba(15, 76, 92, 0.3);
            }
            .btn-ghost {
                background: rgba(255, 255, 255, 0.4);
                color: #0f4c5c;
                border-color: rgba(15, 76, 92, 0.25);
                backdrop-filter: blur(8px);
            }
            .btn-ghost:hover:not(:disabled) {
                background: rgba(255, 255, 255, 0.7);
            }
            .btn:disabled {
                opacity: 0.45;
                cursor: not-allowed;
                box-shadow: none;
            }
            "#}
        </style>
    }
}
