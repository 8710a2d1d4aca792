/// Feed module
///
/// This module is the heart of the infinite scroll, including:
/// - Pagination state: collection, cursor, fetch guard (controller.rs)
/// - The three-column masonry partition (columns.rs)
/// - The sentinel visibility check that drives loading (sentinel.rs)

pub mod columns;
pub mod controller;
pub mod sentinel;

pub use columns::split_columns;
pub use controller::Feed;
pub use sentinel::SentinelView;

#[cfg(test)]
mod tests {
    //! End-to-end feed scenarios: a synthetic scroll trigger drives the
    //! controller the same way the application's update loop does.

    use super::*;
    use crate::api::ImageRecord;

    const SENTINEL_HEIGHT: f32 = 64.0;

    fn page_of(size: usize, page: u32) -> Vec<ImageRecord> {
        (0..size)
            .map(|i| ImageRecord {
                id: format!("{}", (page as usize - 1) * size + i),
                author: "Author".to_string(),
                width: 640,
                height: 480,
                url: String::new(),
                download_url: String::new(),
            })
            .collect()
    }

    fn at_bottom(content_height: f32) -> SentinelView {
        SentinelView {
            scroll_top: (content_height - 900.0).max(0.0),
            viewport_height: 900.0,
            content_height,
            sentinel_height: SENTINEL_HEIGHT,
        }
    }

    fn mid_scroll(content_height: f32) -> SentinelView {
        SentinelView {
            scroll_top: content_height / 2.0,
            viewport_height: 900.0,
            content_height,
            sentinel_height: SENTINEL_HEIGHT,
        }
    }

    /// What the update loop does on every scroll event.
    fn on_scroll(feed: &mut Feed, view: SentinelView) -> Option<u32> {
        if view.fully_visible() {
            feed.request_next()
        } else {
            None
        }
    }

    #[test]
    fn initial_page_then_one_trigger() {
        let mut feed = Feed::new();
        assert_eq!(feed.request_next(), Some(1));
        feed.absorb(page_of(30, 1));

        // Mount state: 30 records in a 10/10/10 split, cursor at 2
        let [a, b, c] = split_columns(feed.records());
        assert_eq!((a.len(), b.len(), c.len()), (10, 10, 10));
        assert_eq!(feed.next_page(), 2);

        // Sentinel scrolls into full view once
        let requested = on_scroll(&mut feed, at_bottom(5000.0));
        assert_eq!(requested, Some(2));
        feed.absorb(page_of(30, 2));

        let [a, b, c] = split_columns(feed.records());
        assert_eq!((a.len(), b.len(), c.len()), (20, 20, 20));
        assert_eq!(feed.next_page(), 3);
    }

    #[test]
    fn rapid_double_trigger_issues_one_fetch() {
        let mut feed = Feed::new();
        feed.request_next();
        feed.absorb(page_of(30, 1));

        let first = on_scroll(&mut feed, at_bottom(5000.0));
        let second = on_scroll(&mut feed, at_bottom(5000.0));

        assert_eq!(first, Some(2));
        assert_eq!(second, None);

        feed.absorb(page_of(30, 2));
        assert_eq!(feed.next_page(), 3);
        assert_eq!(feed.len(), 60);
    }

    #[test]
    fn no_trigger_away_from_the_sentinel() {
        let mut feed = Feed::new();
        feed.request_next();
        feed.absorb(page_of(30, 1));

        assert_eq!(on_scroll(&mut feed, mid_scroll(5000.0)), None);
        assert!(!feed.is_fetching());
    }

    #[test]
    fn failed_page_is_retried_on_the_next_trigger() {
        let mut feed = Feed::new();
        feed.request_next();
        feed.absorb(page_of(30, 1));

        assert_eq!(on_scroll(&mut feed, at_bottom(5000.0)), Some(2));
        feed.abort();

        assert_eq!(feed.len(), 30);
        assert_eq!(feed.next_page(), 2);

        // The sentinel is still on screen; the same page is requested again
        assert_eq!(on_scroll(&mut feed, at_bottom(5000.0)), Some(2));
    }

    #[test]
    fn underfilled_first_page_loads_immediately() {
        let mut feed = Feed::new();
        feed.request_next();
        feed.absorb(page_of(5, 1));

        // Content shorter than the viewport: the next page loads unprompted
        let short = SentinelView {
            scroll_top: 0.0,
            viewport_height: 900.0,
            content_height: 600.0,
            sentinel_height: SENTINEL_HEIGHT,
        };
        assert_eq!(on_scroll(&mut feed, short), Some(2));
    }
}
