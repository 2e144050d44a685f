use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct SectionHeadingProps {
    pub title: String,
    #[prop_or_default]
    pub eyebrow: Option<String>,
    #[prop_or_default]
    pub subtitle: Option<String>,
    #[prop_or(true)]
    pub centered: bool,
}

#[function_component(SectionHeading)]
pub fn section_heading(props: &SectionHeadingProps) -> Html {
    html! {
        <header class={classes!("section-heading", props.centered.then(|| "centered"))}>
            if let Some(eyebrow) = &props.eyebrow {
                <span class="section-eyebrow">{eyebrow}</span>
            }
            <h2>{&props.title}</h2>
            if let Some(subtitle) = &props.subtitle {
                <p class="section-subtitle">{subtitle}</p>
            }
            <style>
                {r#"
                .section-heading {
                    margin-bottom: 2.5rem;
                }
                .section-heading.centered {
                    text-align: center;
                }
                .section-eyebrow {
                    display: inline-block;
                    font-size: 0.8rem;
                    letter-spacing: 0.12em;
                    text-transform: uppercase;
                    color: #26a69a;
                    margin-bottom: 0.75rem;
                }
                .section-heading h2 {
                    font-size: 2.4rem;
                    margin: 0 0 1rem;
                    color: #0f4c5c;
                }
                .section-subtitle {
                    font-size: 1.1rem;
                    color: #4a6670;
                    max-width: 640px;
                    line-height: 1.6;
                }
                .section-heading.centered .section-subtitle {
                    margin: 0 auto;
                }
                @media (max-width: 768px) {
                    .section-heading h2 {
                        font-size: 1.9rem;
                    }
                }
                "#}
            </style>
        </header>
    }
}
