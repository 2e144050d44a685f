use yew::prelude::*;

use crate::components::button::ButtonLink;
use crate::components::glass_card::GlassCard;
use crate::components::section_heading::SectionHeading;
use crate::config;
use crate::router::View;

struct TeamMember {
    name: &'static str,
    role: &'static str,
    bio: &'static str,
}

const TEAM: &[TeamMember] = &[
    TeamMember {
        name: "Dr. Amara Okafor",
        role: "Principal dentist",
        bio: "Founded the practice in 2014. Special interest in smile design and minimally invasive cosmetic work.",
    },
    TeamMember {
        name: "Dr. James Whitfield",
        role: "Associate dentist",
        bio: "Restorative and bonding cases. Known for explaining every step before he takes it.",
    },
    TeamMember {
        name: "Sofia Marin",
        role: "Dental hygienist",
        bio: "Runs our hygiene and aftercare programme, and keeps bonded work looking new.",
    },
];

const VALUES: &[(&str, &str)] = &[
    ("Least invasive first", "We keep as much natural tooth as we can, and say so when the answer is to do nothing."),
    ("Time to talk", "Consultations are booked long enough to ask every question you have."),
    ("Clear pricing", "A written plan with costs before treatment starts, with no surprises on the day."),
];

#[function_component(About)]
pub fn about() -> Html {
    html! {
        <div class="about-page">
            <section class="about-intro">
                <SectionHeading
                    eyebrow="About us"
                    title={format!("The story of {}", config::PRACTICE_NAME)}
                    subtitle="A small, independent practice by the water, built around longer appointments and honest advice."
                />
                <GlassCard class="about-story">
                    <p>{"We opened our doors with two surgeries and a simple idea: people look after their teeth better when they understand them. Ten years on, that still shapes how we work."}</p>
                    <p>{"Every treatment plan is written down, talked through and never rushed. Many of our patients came for a check-up and stayed for the conversation."}</p>
                </GlassCard>
            </section>

            <section class="about-section">
                <SectionHeading title="Meet the team" />
                <div class="team-grid">
                    { for TEAM.iter().map(|member| html! {
                        <GlassCard hoverable=true class="team-card">
                            <h3>{member.name}</h3>
                            <span class="team-role">{member.role}</span>
                            <p>{member.bio}</p>
                        </GlassCard>
                    }) }
                </div>
            </section>

            <section class="about-section">
                <SectionHeading title="How we work" />
                <div class="values-grid">
                    { for VALUES.iter().map(|(title, text)| html! {
                        <GlassCard class="value-card">
                            <h3>{*title}</h3>
                            <p>{*text}</p>
                        </GlassCard>
                    }) }
                </div>
                <div class="about-cta">
                    <ButtonLink to={View::Contact}>{"Get in touch"}</ButtonLink>
                </div>
            </section>

            <style>
                {r#"
                .about-page {
                    max-width: 1000px;
                    margin: 0 auto;
                    padding: 8rem 2rem 4rem;
                }
                .about-story p {
                    color: #35535c;
                    line-height: 1.8;
                    font-size: 1.1rem;
                }
                .about-section {
                    padding-top: 4rem;
                }
                .team-grid,
                .values-grid {
                    display: grid;
                    grid-template-columns: repeat(auto-fit, minmax(260px, 1fr));
                    gap: 1.5rem;
                }
                .team-card h3,
                .value-card h3 {
                    color: #0f4c5c;
                    margin: 0 0 0.25rem;
                }
                .team-role {
                    font-size: 0.85rem;
                    color: #26a69a;
                    text-transform: uppercase;
                    letter-spacing: 0.08em;
                }
                .team-card p,
                .value-card p {
                    color: #4a6670;
                    line-height: 1.6;
                }
                .about-cta {
                    text-align: center;
                    margin-top: 3rem;
                }
                @media (max-width: 768px) {
                    .about-page {
                        padding: 6rem 1rem 3rem;
                    }
                }
                "#}
            </style>
        </div>
    }
}
