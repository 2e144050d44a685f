use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct GlassCardProps {
    #[prop_or_default]
    pub class: Classes,
    /// Lifts the card slightly on hover; used for clickable cards.
    #[prop_or_default]
    pub hoverable: bool,
    pub children: Children,
}

#[function_component(GlassCard)]
pub fn glass_card(props: &GlassCardProps) -> Html {
    let classes = classes!(
        "glass-card",
        props.hoverable.then(|| "glass-card-hoverable"),
        props.class.clone()
    );

    html! {
        <div class={classes}>
            { for props.children.iter() }
            <style>
                {r#"
                .glass-card {
                    background: rgba(255, 255, 255, 0.55);
                    backdrop-filter: blur(14px);
                    -webkit-backdrop-filter: blur(14px);
                    border: 1px solid rgba(255, 255, 255, 0.7);
                    border-radius: 20px;
                    box-shadow: 0 8px 32px rgba(15, 76, 92, 0.12);
                    padding: 2rem;
                    transition: all 0.3s ease;
                }
                .glass-card-hoverable:hover {
                    transform: translateY(-5px);
                    border-color: rgba(38, 166, 154, 0.45);
                    box-shadow: 0 14px 40px rgba(15, 76, 92, 0.18);
                }
                @media (max-width: 768px) {
                    .glass-card {
                        padding: 1.5rem;
                        border-radius: 16px;
                    }
                }
                "#}
            </style>
        </div>
    }
}
