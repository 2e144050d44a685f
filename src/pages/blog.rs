use std::rc::Rc;

use log::debug;
use web_sys::{HtmlInputElement, HtmlSelectElement};
use yew::prelude::*;
use yew_router::components::Link;

use crate::components::button::{Button, ButtonVariant};
use crate::components::glass_card::GlassCard;
use crate::components::section_heading::SectionHeading;
use crate::content::{ContentItem, POSTS};
use crate::filter::{available_tags, FilterState, ALL_TAGS};
use crate::router::View;

pub enum FilterAction {
    Query(String),
    Tag(String),
    Clear,
}

impl Reducible for FilterState {
    type Action = FilterAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut next = (*self).clone();
        match action {
            FilterAction::Query(query) => next.query = query,
            FilterAction::Tag(tag) => next.tag = tag,
            FilterAction::Clear => next = FilterState::default(),
        }
        debug!("blog filter: query={:?} tag={:?}", next.query, next.tag);
        Rc::new(next)
    }
}

#[derive(Properties, PartialEq)]
pub struct PostCardProps {
    pub post: &'static ContentItem,
}

#[function_component(PostCard)]
pub fn post_card(props: &PostCardProps) -> Html {
    let post = props.post;
    html! {
        <Link<View> to={View::BlogPost { id: post.id.to_string() }} classes="post-card-link">
            <GlassCard hoverable=true class="post-card">
                <div class="post-meta">
                    <span>{post.display_date()}</span>
                    <span>{format!("{} min read", post.reading_minutes)}</span>
                </div>
                <h3>{post.title}</h3>
                <p>{post.summary}</p>
                <ul class="post-tags">
                    { for post.tags.iter().map(|tag| html! { <li>{*tag}</li> }) }
                </ul>
            </GlassCard>
        </Link<View>>
    }
}

#[function_component(Blog)]
pub fn blog() -> Html {
    let state = use_reducer(FilterState::default);
    let results = state.apply(&POSTS);
    let tags = available_tags(&POSTS);

    let on_query = {
        let state = state.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            state.dispatch(FilterAction::Query(input.value()));
        })
    };

    let on_tag = {
        let state = state.clone();
        Callback::from(move |e: Event| {
            let select: HtmlSelectElement = e.target_unchecked_into();
            state.dispatch(FilterAction::Tag(select.value()));
        })
    };

    let on_clear = {
        let state = state.clone();
        Callback::from(move |_: MouseEvent| state.dispatch(FilterAction::Clear))
    };

    html! {
        <div class="blog-list-page">
            <section class="blog-list-hero">
                <SectionHeading
                    eyebrow="Journal"
                    title="Notes from the chair"
                    subtitle="Treatment guides, aftercare advice and the thinking behind our cosmetic work."
                />
            </section>
            <section class="blog-controls">
                <input
                    type="search"
                    class="blog-search"
                    placeholder="Search posts..."
                    value={state.query.clone()}
                    oninput={on_query}
                />
                <select class="blog-tag-select" onchange={on_tag}>
                    { for tags.iter().map(|tag| html! {
                        <option value={tag.to_string()} selected={*tag == state.tag.as_str()}>
                            { if *tag == ALL_TAGS { "All topics" } else { *tag } }
                        </option>
                    }) }
                </select>
            </section>
            <p class="blog-count">{format!("{} of {} posts", results.len(), POSTS.len())}</p>
            <section class="blog-list-section">
                if results.is_empty() {
                    <GlassCard class="blog-empty">
                        <h3>{"No posts match"}</h3>
                        <p>{"Try a different search term or topic."}</p>
                        if state.is_active() {
                            <Button variant={ButtonVariant::Ghost} onclick={on_clear}>
                                {"Clear filters"}
                            </Button>
                        }
                    </GlassCard>
                } else {
                    { for results.iter().map(|post| html! { <PostCard post={*post} /> }) }
                }
            </section>
            <style>
                {r#"
                .blog-list-page {
                    max-width: 860px;
                    margin: 0 auto;
                    padding: 8rem 2rem 4rem;
                }
                .blog-controls {
                    display: flex;
                    gap: 1rem;
                    margin-bottom: 1rem;
                }
                .blog-search,
                .blog-tag-select {
                    padding: 0.8rem 1.2rem;
                    border-radius: 999px;
                    border: 1px solid rgba(15, 76, 92, 0.2);
                    background: rgba(255, 255, 255, 0.7);
                    font-size: 1rem;
                    color: #0f4c5c;
                }
                .blog-search {
                    flex: 1;
                }
                .blog-count {
                    color: #6b8790;
                    font-size: 0.9rem;
                    margin-bottom: 1.5rem;
                }
                .blog-list-section {
                    display: flex;
                    flex-direction: column;
                    gap: 1.5rem;
                }
                .post-card-link {
                    text-decoration: none;
                    color: inherit;
                    display: block;
                }
                .post-card h3 {
                    font-size: 1.6rem;
                    color: #0f4c5c;
                    margin: 0.5rem 0;
                }
                .post-card p {
                    color: #4a6670;
                    line-height: 1.6;
                }
                .post-meta {
                    display: flex;
                    gap: 1.5rem;
                    font-size: 0.85rem;
                    color: #6b8790;
                }
                .post-tags {
                    display: flex;
                    flex-wrap: wrap;
                    gap: 0.5rem;
                    list-style: none;
                    padding: 0;
                    margin: 1rem 0 0;
                }
                .post-tags li {
                    font-size: 0.8rem;
                    padding: 0.25rem 0.75rem;
                    border-radius: 999px;
                    background: rgba(38, 166, 154, 0.12);
                    color: #1d7f75;
                }
                .blog-empty {
                    text-align: center;
                }
                @media (max-width: 768px) {
                    .blog-list-page {
                        padding: 6rem 1rem 3rem;
                    }
                    .blog-controls {
                        flex-direction: column;
                    }
                }
                "#}
            </style>
        </div>
    }
}
