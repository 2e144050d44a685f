use chrono::Datelike;
use log::{info, warn};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::MouseEvent;
use yew::prelude::*;
use yew_hooks::use_title;
use yew_router::prelude::*;

mod config;
mod contact;
mod content;
mod filter;
mod router;
mod components {
    pub mod button;
    pub mod glass_card;
    pub mod section_heading;
}
mod pages {
    pub mod about;
    pub mod blog;
    pub mod blog_post;
    pub mod contact;
    pub mod home;
}

use pages::{
    about::About,
    blog::Blog,
    blog_post::BlogPost,
    contact::Contact,
    home::Home,
};
use router::View;

fn switch(view: View) -> Html {
    match view {
        View::Home => {
            info!("Rendering Home page");
            html! { <Home /> }
        }
        View::About => {
            info!("Rendering About page");
            html! { <About /> }
        }
        View::Contact => {
            info!("Rendering Contact page");
            html! { <Contact /> }
        }
        View::BlogList => {
            info!("Rendering Blog page");
            html! { <Blog /> }
        }
        View::BlogPost { id } => {
            info!("Rendering Blog post {}", id);
            html! { <BlogPost {id} /> }
        }
    }
}

/// Current view, re-resolved on every hash change the router reports.
#[hook]
fn use_current_view() -> View {
    let location = use_location();
    let token = location.as_ref().map(|l| l.path()).unwrap_or_default();
    router::resolve(token)
}

#[function_component(Outlet)]
fn outlet() -> Html {
    let view = use_current_view();
    use_title(view.title());

    // Each navigation starts at the top of the page
    use_effect_with_deps(
        move |_| {
            match web_sys::window() {
                Some(window) => window.scroll_to_with_x_and_y(0.0, 0.0),
                None => warn!("no window to reset scroll position"),
            }
            || ()
        },
        view.clone(),
    );

    html! {
        <main>{ switch(view) }</main>
    }
}

fn nav_links() -> [(&'static str, View); 4] {
    [
        ("Home", View::Home),
        ("About", View::About),
        ("Blog", View::BlogList),
        ("Contact", View::Contact),
    ]
}

#[function_component(Nav)]
pub fn nav() -> Html {
    let current = use_current_view().nav_section();
    let menu_open = use_state(|| false);
    let is_scrolled = use_state(|| false);

    {
        let is_scrolled = is_scrolled.clone();
        use_effect_with_deps(
            move |_| {
                let destructor: Box<dyn FnOnce()> = if let Some(window) = web_sys::window() {
                    let callback = Closure::<dyn Fn()>::new({
                        let is_scrolled = is_scrolled.clone();
                        move || {
                            if let Some(win) = web_sys::window() {
                                if let Ok(scroll_y) = win.scroll_y() {
                                    is_scrolled.set(scroll_y > 40.0);
                                }
                            }
                        }
                    });
                    if let Err(err) = window
                        .add_event_listener_with_callback("scroll", callback.as_ref().unchecked_ref())
                    {
                        warn!("could not attach scroll listener: {:?}", err);
                    }
                    Box::new(move || {
                        if let Some(win) = web_sys::window() {
                            let _ = win.remove_event_listener_with_callback(
                                "scroll",
                                callback.as_ref().unchecked_ref(),
                            );
                        }
                    })
                } else {
                    Box::new(|| ())
                };
                move || destructor()
            },
            (),
        );
    }

    let toggle_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            menu_open.set(!*menu_open);
        })
    };

    let close_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |_: MouseEvent| menu_open.set(false))
    };

    let menu_class = if *menu_open {
        "nav-right mobile-menu-open"
    } else {
        "nav-right"
    };

    html! {
        <nav class={classes!("top-nav", (*is_scrolled).then(|| "scrolled"))}>
            <div class="nav-content">
                <Link<View> to={View::Home} classes="nav-logo">
                    {config::PRACTICE_NAME}
                </Link<View>>

                <button class="burger-menu" onclick={toggle_menu}>
                    <span></span>
                    <span></span>
                    <span></span>
                </button>
                <div class={menu_class}>
                    { for nav_links().iter().map(|(label, target)| html! {
                        <div onclick={close_menu.clone()}>
                            <Link<View>
                                to={target.clone()}
                                classes={classes!("nav-link", (current == *target).then(|| "active"))}
                            >
                                {*label}
                            </Link<View>>
                        </div>
                    }) }
                </div>
            </div>
            <style>
                {r#"
                .top-nav {
                    position: fixed;
                    top: 0;
                    left: 0;
                    right: 0;
                    z-index: 100;
                    padding: 1rem 2rem;
                    transition: all 0.3s ease;
                }
                .top-nav.scrolled {
                    background: rgba(255, 255, 255, 0.65);
                    backdrop-filter: blur(12px);
                    box-shadow: 0 4px 20px rgba(15, 76, 92, 0.08);
                }
                .nav-content {
                    max-width: 1100px;
                    margin: 0 auto;
                    display: flex;
                    justify-content: space-between;
                    align-items: center;
                }
                .nav-logo {
                    font-size: 1.3rem;
                    font-weight: 700;
                    color: #0f4c5c;
                    text-decoration: none;
                }
                .nav-right {
                    display: flex;
                    gap: 2rem;
                }
                .nav-link {
                    color: #35535c;
                    text-decoration: none;
                    font-weight: 500;
                    padding-bottom: 0.2rem;
                    border-bottom: 2px solid transparent;
                }
                .nav-link.active,
                .nav-link:hover {
                    color: #0f4c5c;
                    border-bottom-color: #26a69a;
                }
                .burger-menu {
                    display: none;
                    flex-direction: column;
                    gap: 5px;
                    background: none;
                    border: none;
                    cursor: pointer;
                }
                .burger-menu span {
                    width: 24px;
                    height: 2px;
                    background: #0f4c5c;
                }
                @media (max-width: 768px) {
                    .burger-menu {
                        display: flex;
                    }
                    .nav-right {
                        display: none;
                        position: absolute;
                        top: 100%;
                        left: 0;
                        right: 0;
                        flex-direction: column;
                        gap: 1.2rem;
                        padding: 1.5rem 2rem;
                        background: rgba(255, 255, 255, 0.92);
                        backdrop-filter: blur(12px);
                    }
                    .nav-right.mobile-menu-open {
                        display: flex;
                    }
                }
                "#}
            </style>
        </nav>
    }
}

#[function_component(Footer)]
fn footer() -> Html {
    let year = chrono::Local::now().year();
    html! {
        <footer class="site-footer">
            <p>{format!("© {} {}", year, config::PRACTICE_NAME)}</p>
            <p>{config::PRACTICE_ADDRESS}</p>
            <style>
                {r#"
                .site-footer {
                    text-align: center;
                    padding: 3rem 2rem;
                    color: #6b8790;
                    font-size: 0.9rem;
                    border-top: 1px solid rgba(15, 76, 92, 0.08);
                }
                .site-footer p {
                    margin: 0.25rem 0;
                }
                "#}
            </style>
        </footer>
    }
}

#[function_component]
fn App() -> Html {
    html! {
        <HashRouter>
            <Nav />
            <Outlet />
            <Footer />
            <style>
                {r#"
                * {
                    box-sizing: border-box;
                }
                body {
                    margin: 0;
                    min-height: 100vh;
                    font-family: "Inter", "Segoe UI", system-ui, sans-serif;
                    color: #1e3a42;
                    background: radial-gradient(circle at 15% 20%, #e0f4f1 0%, transparent 45%),
                        radial-gradient(circle at 85% 10%, #dbeafe 0%, transparent 40%),
                        linear-gradient(180deg, #f4fbfa 0%, #eef5f8 100%);
                    background-attachment: fixed;
                }
                "#}
            </style>
        </HashRouter>
    }
}

fn main() {
    // Initialize console error panic hook for better error messages
    console_error_panic_hook::set_once();

    // A second init (e.g. hot reload) fails harmlessly
    let _ = console_log::init_with_level(config::log_level());

    info!("Starting {}", config::PRACTICE_NAME);
    yew::Renderer::<App>::new().render();
}
