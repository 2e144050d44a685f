use chrono::NaiveDate;

/// One blog post. The whole list is fixed at compile time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContentItem {
    pub id: &'static str,
    pub title: &'static str,
    /// ISO `YYYY-MM-DD`, so string order is date order.
    pub published_at: &'static str,
    pub summary: &'static str,
    pub tags: &'static [&'static str],
    pub body: &'static [&'static str],
    pub author: &'static str,
    pub reading_minutes: u32,
}

impl ContentItem {
    pub fn published_date(&self) -> Option<NaiveDate> {
        NaiveDate::parse_from_str(self.published_at, "%Y-%m-%d").ok()
    }

    /// Date as shown on cards, e.g. "14 March 2025". Falls back to the raw string.
    pub fn display_date(&self) -> String {
        match self.published_date() {
            Some(date) => date.format("%-d %B %Y").to_string(),
            None => self.published_at.to_string(),
        }
    }

    pub fn has_tag(&self, tag: &str) -> bool {
        self.tags.iter().any(|t| *t == tag)
    }
}

pub static POSTS: [ContentItem; 3] = [
    ContentItem {
        id: "smile-design-first-principles",
        title: "Smile Design: First Principles",
        published_at: "2025-03-14",
        summary: "How we plan proportion, shade and gum line on paper before a single tooth is touched.",
        tags: &["Cosmetic", "Planning"],
        body: &[
            "Every cosmetic case at the practice starts the same way: photographs, a scan and a long conversation. Before we talk about materials we talk about faces.",
            "We look at the midline, the curve of the upper edges against the lower lip and how much gum shows when you smile. Small asymmetries are normal and often worth keeping.",
            "Only once the proportions are agreed do we mock the design up in temporary material, so you can see and feel the result in your own mouth before anything is permanent.",
        ],
        author: "Dr. Amara Okafor",
        reading_minutes: 4,
    },
    ContentItem {
        id: "composite-bonding-aftercare",
        title: "Composite Bonding Aftercare",
        published_at: "2025-05-02",
        summary: "Simple habits that keep bonded edges polished and stain-free for years.",
        tags: &["Bonding", "Aftercare"],
        body: &[
            "Composite resin is strong but it is not enamel. It picks up surface stain faster and its edges can chip if used as a tool.",
            "For the first 48 hours avoid coffee, red wine, curry and smoking. After that, rinse with water after dark drinks and keep up twice-daily brushing with a non-abrasive paste.",
            "Book a polish with the hygienist every six months. A quick refinish restores the lustre and lets us catch small chips before they grow.",
        ],
        author: "Dr. James Whitfield",
        reading_minutes: 3,
    },
    ContentItem {
        id: "conservative-makeover",
        title: "A Conservative Makeover",
        published_at: "2025-01-20",
        summary: "Whitening followed by minimal bonding transformed this smile without a single crown.",
        tags: &["Whitening", "Bonding", "Case Study"],
        body: &[
            "Our patient came in asking about veneers. She disliked the colour of her teeth and two small chips on her front incisors.",
            "We began with three weeks of custom-tray whitening, then let the shade settle for a fortnight before matching composite to the new colour.",
            "Two sessions of additive bonding closed the chips and evened the edges. No enamel was removed, and every step can be revisited in the future.",
        ],
        author: "Dr. Amara Okafor",
        reading_minutes: 5,
    },
];

/// Finds a post by exact id. `None` means the post page shows its not-found state.
pub fn find_post<'a>(id: &str, items: &'a [ContentItem]) -> Option<&'a ContentItem> {
    items.iter().find(|item| item.id == id)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_find_post() {
        assert_eq!(find_post(POSTS[0].id, &POSTS), Some(&POSTS[0]));
        assert_eq!(
            find_post("conservative-makeover", &POSTS).map(|p| p.title),
            Some("A Conservative Makeover")
        );
    }

    #[test]
    fn test_find_post_not_found() {
        assert_eq!(find_post("does-not-exist", &POSTS), None);
        assert_eq!(find_post("Composite-Bonding-Aftercare", &POSTS), None);
        assert_eq!(find_post("anything", &[]), None);
    }

    #[test]
    fn test_ids_are_unique() {
        for (i, a) in POSTS.iter().enumerate() {
            for b in &POSTS[i + 1..] {
                assert_ne!(a.id, b.id);
            }
        }
    }

    #[test]
    fn test_dates_parse_and_format() {
        for post in &POSTS {
            assert!(post.published_date().is_some(), "bad date on {}", post.id);
        }
        assert_eq!(POSTS[0].display_date(), "14 March 2025");
        assert_eq!(POSTS[1].display_date(), "2 May 2025");
    }

    #[test]
    fn test_has_tag_is_exact() {
        assert!(POSTS[2].has_tag("Whitening"));
        assert!(!POSTS[2].has_tag("whitening"));
        assert!(!POSTS[0].has_tag("Bonding"));
    }
}
