use yew::prelude::*;

use crate::components::button::{ButtonLink, ButtonVariant};
use crate::components::glass_card::GlassCard;
use crate::components::section_heading::SectionHeading;
use crate::content::POSTS;
use crate::filter::{filter, ALL_TAGS};
use crate::pages::blog::PostCard;
use crate::router::View;

const SERVICES: &[(&str, &str, &str)] = &[
    ("🦷", "Preventive care", "Thorough check-ups, hygiene visits and early detection, unhurried and explained."),
    ("✨", "Whitening", "Custom-tray and in-chair whitening planned around your natural shade."),
    ("💎", "Composite bonding", "Additive repairs for chips, gaps and uneven edges with no drilling of healthy enamel."),
    ("📐", "Smile design", "Digital planning and trial mock-ups so you see the result before committing."),
];

const LATEST_POSTS: usize = 2;

#[function_component(Home)]
pub fn home() -> Html {
    let latest = filter(&POSTS, "", ALL_TAGS);

    html! {
        <div class="home-page">
            <section class="hero">
                <span class="hero-eyebrow">{"Private dental practice · Harbourside"}</span>
                <h1>{"Calm, careful dentistry for smiles that last"}</h1>
                <p class="hero-subtitle">
                    {"Conservative cosmetic and general dentistry, planned with you and delivered without the rush."}
                </p>
                <div class="hero-actions">
                    <ButtonLink to={View::Contact}>{"Book a consultation"}</ButtonLink>
                    <ButtonLink to={View::BlogList} variant={ButtonVariant::Ghost}>{"Read our journal"}</ButtonLink>
                </div>
            </section>

            <section class="home-section">
                <SectionHeading
                    eyebrow="What we do"
                    title="Treatments"
                    subtitle="Everything we offer starts with a conversation and the least invasive option that will work."
                />
                <div class="services-grid">
                    { for SERVICES.iter().map(|(icon, title, text)| html! {
                        <GlassCard hoverable=true class="service-card">
                            <span class="service-icon">{*icon}</span>
                            <h3>{*title}</h3>
                            <p>{*text}</p>
                        </GlassCard>
                    }) }
                </div>
            </section>

            <section class="home-section">
                <SectionHeading eyebrow="Journal" title="Latest from the blog" />
                <div class="latest-posts">
                    { for latest.into_iter().take(LATEST_POSTS).map(|post| html! { <PostCard post={post} /> }) }
                </div>
                <div class="home-more">
                    <ButtonLink to={View::BlogList} variant={ButtonVariant::Ghost}>{"All posts"}</ButtonLink>
                </div>
            </section>

            <style>
                {r#"
                .home-page {
                    max-width: 1100px;
                    margin: 0 auto;
                    padding: 0 2rem 4rem;
                }
                .hero {
                    min-height: 80vh;
                    display: flex;
                    flex-direction: column;
                    justify-content: center;
                    align-items: center;
                    text-align: center;
                    padding-top: 74px;
                }
                .hero-eyebrow {
                    font-size: 0.85rem;
                    letter-spacing: 0.12em;
                    text-transform: uppercase;
                    color: #26a69a;
                    margin-bottom: 1.5rem;
                }
                .hero h1 {
                    font-size: 3.6rem;
                    max-width: 820px;
                    line-height: 1.15;
                    margin: 0 0 1.5rem;
                    background: linear-gradient(45deg, #0f4c5c, #26a69a);
                    -webkit-background-clip: text;
                    -webkit-text-fill-color: transparent;
                }
                .hero-subtitle {
                    font-size: 1.25rem;
                    color: #4a6670;
                    max-width: 600px;
                    margin: 0 auto 2.5rem;
                }
                .hero-actions {
                    display: flex;
                    gap: 1rem;
                    flex-wrap: wrap;
                    justify-content: center;
                }
                .home-section {
                    padding: 4rem 0;
                }
                .services-grid {
                    display: grid;
                    grid-template-columns: repeat(auto-fit, minmax(230px, 1fr));
                    gap: 1.5rem;
                }
                .service-icon {
                    font-size: 2rem;
                }
                .service-card h3 {
                    color: #0f4c5c;
                    margin: 1rem 0 0.5rem;
                }
                .service-card p {
                    color: #4a6670;
                    line-height: 1.6;
                }
                .latest-posts {
                    display: grid;
                    grid-template-columns: repeat(auto-fit, minmax(320px, 1fr));
                    gap: 1.5rem;
                }
                .home-more {
                    text-align: center;
                    margin-top: 2rem;
                }
                @media (max-width: 768px) {
                    .hero h1 {
                        font-size: 2.4rem;
                    }
                    .home-page {
                        padding: 0 1rem 3rem;
                    }
                }
                "#}
            </style>
        </div>
    }
}
