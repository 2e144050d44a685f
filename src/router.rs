use yew_router::prelude::*;

use crate::config;
use crate::content::{self, POSTS};

/// Every page the site can show. Paths are the hash fragments links point to.
#[derive(Clone, Debug, PartialEq, Eq, Routable)]
pub enum View {
    #[at("/")]
    Home,
    #[at("/about")]
    About,
    #[at("/contact")]
    Contact,
    #[at("/blog")]
    BlogList,
    #[at("/blog/:id")]
    BlogPost { id: String },
}

/// Splits a navigation token like `#/blog/some-post` into its non-empty segments.
pub fn segments(token: &str) -> Vec<&str> {
    let path = token.strip_prefix('#').unwrap_or(token);
    path.split('/').filter(|s| !s.is_empty()).collect()
}

/// Resolves a navigation token to the view it selects.
///
/// Total over all inputs: anything unrecognised falls back to [`View::Home`].
/// A missing blog post is not decided here; the post page handles that.
pub fn resolve(token: &str) -> View {
    match segments(token).as_slice() {
        [] => View::Home,
        ["about", ..] => View::About,
        ["contact", ..] => View::Contact,
        ["blog", id, ..] => View::BlogPost { id: id.to_string() },
        ["blog"] => View::BlogList,
        _ => View::Home,
    }
}

impl View {
    /// The nav entry that should be highlighted while this view is shown.
    pub fn nav_section(&self) -> View {
        match self {
            View::BlogPost { .. } => View::BlogList,
            other => other.clone(),
        }
    }

    pub fn title(&self) -> String {
        match self {
            View::Home => config::page_title(""),
            View::About => config::page_title("About us"),
            View::Contact => config::page_title("Contact"),
            View::BlogList => config::page_title("Blog"),
            View::BlogPost { id } => match content::find_post(id, &POSTS) {
                Some(post) => config::page_title(post.title),
                None => config::page_title("Post not found"),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_root_and_empty_resolve_home() {
        assert_eq!(resolve("#/"), View::Home);
        assert_eq!(resolve(""), View::Home);
        assert_eq!(resolve("#"), View::Home);
        assert_eq!(resolve("/"), View::Home);
    }

    #[test]
    fn test_unknown_falls_back_to_home() {
        assert_eq!(resolve("#/unknown"), View::Home);
        assert_eq!(resolve("#/services/implants"), View::Home);
        assert_eq!(resolve("#/About"), View::Home);
    }

    #[test]
    fn test_static_pages() {
        assert_eq!(resolve("#/about"), View::About);
        assert_eq!(resolve("#/contact"), View::Contact);
        assert_eq!(resolve("#/about/team"), View::About);
        assert_eq!(resolve("/contact"), View::Contact);
    }

    #[test]
    fn test_blog_list_and_post() {
        assert_eq!(resolve("#/blog"), View::BlogList);
        assert_eq!(resolve("#/blog/"), View::BlogList);
        assert_eq!(
            resolve("#/blog/smile-design-first-principles"),
            View::BlogPost {
                id: "smile-design-first-principles".to_string()
            }
        );
        assert_eq!(
            resolve("#//blog//conservative-makeover/"),
            View::BlogPost {
                id: "conservative-makeover".to_string()
            }
        );
    }

    #[test]
    fn test_resolve_is_deterministic() {
        for token in ["", "#/", "#/blog/x", "#/contact", "garbage///", "#/blog"] {
            assert_eq!(resolve(token), resolve(token));
        }
    }

    #[test]
    fn test_link_paths_resolve_back() {
        let views = [
            View::Home,
            View::About,
            View::Contact,
            View::BlogList,
            View::BlogPost {
                id: "composite-bonding-aftercare".to_string(),
            },
        ];
        for view in views {
            assert_eq!(resolve(&view.to_path()), view);
        }
    }

    #[test]
    fn test_nav_section_and_titles() {
        let post = View::BlogPost {
            id: "composite-bonding-aftercare".to_string(),
        };
        assert_eq!(post.nav_section(), View::BlogList);
        assert_eq!(View::About.nav_section(), View::About);
        assert_eq!(
            post.title(),
            "Composite Bonding Aftercare | Bright Harbour Dental"
        );
        assert_eq!(
            View::BlogPost { id: "nope".into() }.title(),
            "Post not found | Bright Harbour Dental"
        );
        assert_eq!(View::Home.title(), "Bright Harbour Dental");
    }
}
