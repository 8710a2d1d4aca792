use crate::api::ImageRecord;

/// Pagination controller for the photo feed.
///
/// Owns the accumulated record collection, the next-page cursor, and the
/// in-flight fetch guard. The guard is a plain bool: every mutation happens
/// on the application's update loop, so there is no preemption between the
/// check and the set. Callers on a multi-threaded runtime would need an
/// atomic or a mutex instead.
#[derive(Debug)]
pub struct Feed {
    records: Vec<ImageRecord>,
    next_page: u32,
    in_flight: bool,
}

impl Feed {
    /// An empty feed. The first call to [`request_next`](Self::request_next)
    /// yields page 1 (the bootstrap fetch).
    pub fn new() -> Self {
        Self {
            records: Vec::new(),
            next_page: 1,
            in_flight: false,
        }
    }

    /// Ask for the next page to fetch.
    ///
    /// Returns `Some(page)` and marks a fetch as in flight, or `None` if a
    /// fetch is already outstanding. The `None` case is a silent no-op;
    /// dropping the overlapping trigger is the sole duplicate-fetch
    /// suppression.
    pub fn request_next(&mut self) -> Option<u32> {
        if self.in_flight {
            return None;
        }
        self.in_flight = true;
        Some(self.next_page)
    }

    /// Absorb a successfully fetched page: append its records in order,
    /// advance the cursor by one, clear the guard.
    pub fn absorb(&mut self, page: Vec<ImageRecord>) {
        self.records.extend(page);
        self.next_page += 1;
        self.in_flight = false;
    }

    /// A fetch failed: clear the guard without advancing the cursor, so the
    /// next trigger retries the same page. The collection is untouched.
    pub fn abort(&mut self) {
        self.in_flight = false;
    }

    /// All records fetched so far, in arrival order.
    pub fn records(&self) -> &[ImageRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// True strictly while a page fetch is outstanding.
    pub fn is_fetching(&self) -> bool {
        self.in_flight
    }

    /// The page the next successful `request_next` will hand out.
    pub fn next_page(&self) -> u32 {
        self.next_page
    }
}

impl Default for Feed {
    fn default() -> Self {
        Self::new()
    }
}
