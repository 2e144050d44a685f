use log::warn;
use yew::prelude::*;

use crate::components::button::{ButtonLink, ButtonVariant};
use crate::components::glass_card::GlassCard;
use crate::content::{find_post, POSTS};
use crate::router::View;

#[derive(Properties, PartialEq)]
pub struct BlogPostProps {
    pub id: String,
}

#[function_component(BlogPost)]
pub fn blog_post(props: &BlogPostProps) -> Html {
    let Some(post) = find_post(&props.id, &POSTS) else {
        warn!("no blog post with id {:?}", props.id);
        return html! {
            <div class="blog-page">
                <GlassCard class="post-missing">
                    <h1>{"Post not found"}</h1>
                    <p>{"We couldn't find that article. It may have been renamed or removed."}</p>
                    <ButtonLink to={View::BlogList}>{"Back to all posts"}</ButtonLink>
                </GlassCard>
                <BlogPostStyles />
            </div>
        };
    };

    html! {
        <div class="blog-page">
            <article>
                <GlassCard class="post-article">
                    <div class="post-meta">
                        <span>{post.display_date()}</span>
                        <span>{post.author}</span>
                        <span>{format!("{} min read", post.reading_minutes)}</span>
                    </div>
                    <h1>{post.title}</h1>
                    <p class="post-lead">{post.summary}</p>
                    <ul class="post-tags">
                        { for post.tags.iter().map(|tag| html! { <li>{*tag}</li> }) }
                    </ul>
                    { for post.body.iter().map(|paragraph| html! { <p>{*paragraph}</p> }) }
                </GlassCard>
            </article>
            <div class="post-footer">
                <ButtonLink to={View::BlogList} variant={ButtonVariant::Ghost}>{"← Back to all posts"}</ButtonLink>
                <ButtonLink to={View::Contact}>{"Book a consultation"}</ButtonLink>
            </div>
            <BlogPostStyles />
        </div>
    }
}

#[function_component(BlogPostStyles)]
fn blog_post_styles() -> Html {
    html! {
        <style>
            {r#"
            .blog-page {
                max-width: 780px;
                margin: 0 auto;
                padding: 8rem 2rem 4rem;
            }
            .post-article h1,
            .post-missing h1 {
                font-size: 2.6rem;
                color: #0f4c5c;
                margin: 0.75rem 0 1rem;
            }
            .post-lead {
                font-size: 1.2rem;
                color: #26a69a;
            }
            .post-article p,
            .post-missing p {
                color: #35535c;
                line-height: 1.8;
                margin-bottom: 1.25rem;
            }
            .post-missing {
                text-align: center;
            }
            .post-footer {
                display: flex;
                justify-content: space-between;
                flex-wrap: wrap;
                gap: 1rem;
                margin-top: 2rem;
            }
            @media (max-width: 768px) {
                .blog-page {
                    padding: 6rem 1rem 3rem;
                }
                .post-article h1 {
                    font-size: 2rem;
                }
            }
            "#}
        </style>
    }
}
