use std::collections::HashMap;

use iced::widget::image::Handle;
use iced::widget::{column, container, row, scrollable, stack, text, Column};
use iced::{Alignment, Element, Length, Task, Theme};

// Declare the application modules
mod api;
mod downloads;
mod feed;
mod ui;

use api::types::PAGE_SIZE;
use api::{ApiError, ImageRecord, PicsumClient};
use downloads::Downloads;
use feed::{split_columns, Feed, SentinelView};

/// Pixel width of the resized thumbnail variants requested for the grid.
const THUMB_WIDTH: u32 = 480;

/// Height of the load-more sentinel row at the bottom of the feed.
const SENTINEL_HEIGHT: f32 = 64.0;

/// Spacing between grid columns and cards.
const GRID_SPACING: u16 = 16;

/// State of one grid thumbnail.
#[derive(Debug, Clone)]
enum Thumb {
    /// Fetch/decode task is running; the card shows a placeholder.
    Loading,
    /// Decoded and ready to draw.
    Ready(Handle),
}

/// Main application state
struct PhotoWall {
    /// Shared HTTP client for all fetches
    client: PicsumClient,
    /// Pagination state: records, cursor, fetch guard
    feed: Feed,
    /// Grid thumbnails keyed by record id
    thumbs: HashMap<String, Thumb>,
    /// Full-size handles from hover prefetches, for the lightbox
    previews: HashMap<String, Handle>,
    /// Hover-prefetched image bytes for the save action
    downloads: Downloads,
    /// Collection index of the card currently under the cursor
    hovered: Option<usize>,
    /// Collection index of the photo open in the lightbox
    lightbox: Option<usize>,
    /// Status message to display to the user
    status: String,
}

/// Application messages (events)
#[derive(Debug, Clone)]
enum Message {
    /// The feed scrollable moved; carries the new viewport geometry
    Scrolled(scrollable::Viewport),
    /// A page fetch settled
    PageLoaded(Result<Vec<ImageRecord>, ApiError>),
    /// A thumbnail fetch/decode settled for the given record id
    ThumbLoaded(String, Result<Handle, ApiError>),
    /// The cursor entered a card
    CardHovered(usize),
    /// The cursor left a card
    CardUnhovered(usize),
    /// A card was clicked: open the lightbox
    CardPressed(usize),
    /// The lightbox backdrop was clicked
    LightboxClosed,
    /// A hover-triggered full-size download settled for the given record id
    BlobFetched(String, Result<Vec<u8>, ApiError>),
    /// The save button on a card was pressed
    SaveRequested(usize),
    /// The async disk write settled
    Saved(String, Result<std::path::PathBuf, String>),
}

impl PhotoWall {
    /// Create a new instance of the application
    fn new() -> (Self, Task<Message>) {
        let client = PicsumClient::new();
        let mut feed = Feed::new();

        // Bootstrap: page 1 goes through the same fetch path as every
        // later page, so the guard and cursor semantics are uniform.
        let bootstrap = match feed.request_next() {
            Some(page) => fetch_page(client.clone(), page),
            None => Task::none(),
        };

        (
            PhotoWall {
                client,
                feed,
                thumbs: HashMap::new(),
                previews: HashMap::new(),
                downloads: Downloads::new(),
                hovered: None,
                lightbox: None,
                status: String::from("Loading photos…"),
            },
            bootstrap,
        )
    }

    /// Handle application messages and update state
    fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::Scrolled(viewport) => {
                let view = SentinelView::from_viewport(&viewport, SENTINEL_HEIGHT);
                if view.fully_visible() {
                    if let Some(page) = self.feed.request_next() {
                        log::debug!("sentinel visible, fetching page {page}");
                        return fetch_page(self.client.clone(), page);
                    }
                }
                Task::none()
            }

            Message::PageLoaded(Ok(records)) => {
                if records.len() < PAGE_SIZE {
                    log::debug!(
                        "short page ({} of {PAGE_SIZE} records), listing may be near its end",
                        records.len()
                    );
                }

                // Schedule thumbnails for records we haven't seen yet.
                // Repeated ids reuse the existing thumbnail.
                let mut thumb_tasks = Vec::new();
                for record in &records {
                    if self.thumbs.contains_key(&record.id) {
                        continue;
                    }
                    self.thumbs.insert(record.id.clone(), Thumb::Loading);
                    thumb_tasks.push(fetch_thumbnail(self.client.clone(), record.clone()));
                }

                self.feed.absorb(records);
                self.status = format!("{} photos", self.feed.len());
                log::info!(
                    "feed holds {} records, next page {}",
                    self.feed.len(),
                    self.feed.next_page()
                );

                Task::batch(thumb_tasks)
            }

            Message::PageLoaded(Err(error)) => {
                // Guard cleared, cursor untouched: the next scroll trigger
                // retries the same page. No user-visible error.
                self.feed.abort();
                log::warn!("page fetch failed, will retry on next trigger: {error}");
                Task::none()
            }

            Message::ThumbLoaded(id, Ok(handle)) => {
                self.thumbs.insert(id, Thumb::Ready(handle));
                Task::none()
            }

            Message::ThumbLoaded(id, Err(error)) => {
                log::warn!("thumbnail for {id} failed: {error}");
                // Dropping the entry lets a repeated id trigger a refetch
                self.thumbs.remove(&id);
                Task::none()
            }

            Message::CardHovered(index) => {
                self.hovered = Some(index);

                // First hover prefetches the full-size bytes for saving
                if let Some(record) = self.feed.records().get(index) {
                    if self.downloads.begin(&record.id) {
                        let client = self.client.clone();
                        let id = record.id.clone();
                        let url = record.download_url.clone();
                        return Task::perform(
                            async move { client.fetch_bytes(&url).await },
                            move |result| Message::BlobFetched(id.clone(), result),
                        );
                    }
                }
                Task::none()
            }

            Message::CardUnhovered(index) => {
                if self.hovered == Some(index) {
                    self.hovered = None;
                }
                Task::none()
            }

            Message::CardPressed(index) => {
                self.lightbox = Some(index);
                Task::none()
            }

            Message::LightboxClosed => {
                self.lightbox = None;
                Task::none()
            }

            Message::BlobFetched(id, Ok(bytes)) => {
                self.previews
                    .insert(id.clone(), Handle::from_bytes(bytes.clone()));
                self.downloads.complete(&id, bytes);
                Task::none()
            }

            Message::BlobFetched(id, Err(error)) => {
                // Forget the attempt so a later hover retries
                self.downloads.fail(&id);
                log::warn!("image download for {id} failed: {error}");
                Task::none()
            }

            Message::SaveRequested(index) => {
                let Some(record) = self.feed.records().get(index) else {
                    return Task::none();
                };
                let Some(bytes) = self.downloads.get(&record.id) else {
                    // Still in flight or failed; the button stays inert
                    return Task::none();
                };

                // Show the native save dialog
                let mut dialog = rfd::FileDialog::new()
                    .set_title("Save Photo")
                    .set_file_name(format!("{}.jpg", record.id));
                if let Some(dir) = dirs::download_dir() {
                    dialog = dialog.set_directory(dir);
                }

                if let Some(path) = dialog.save_file() {
                    let bytes = bytes.to_vec();
                    let id = record.id.clone();
                    return Task::perform(
                        async move {
                            tokio::fs::write(&path, bytes)
                                .await
                                .map(|()| path)
                                .map_err(|e| e.to_string())
                        },
                        move |result| Message::Saved(id.clone(), result),
                    );
                }
                Task::none()
            }

            Message::Saved(id, Ok(path)) => {
                self.status = format!("Saved {} to {}", id, path.display());
                log::info!("saved {id} to {}", path.display());
                Task::none()
            }

            Message::Saved(id, Err(error)) => {
                log::warn!("saving {id} failed: {error}");
                Task::none()
            }
        }
    }

    /// Build the user interface
    fn view(&self) -> Element<Message> {
        let records = self.feed.records();

        let grid: Element<Message> = if self.feed.is_empty() {
            container(text("Fetching the first page…").size(16))
                .padding(48)
                .center_x(Length::Fill)
                .into()
        } else {
            row(split_columns(records)
                .into_iter()
                .map(|entries| self.column_view(entries)))
            .spacing(GRID_SPACING)
            .into()
        };

        let sentinel = container(
            text(if self.feed.is_fetching() {
                "Loading more photos…"
            } else {
                ""
            })
            .size(14),
        )
        .height(Length::Fixed(SENTINEL_HEIGHT))
        .center_x(Length::Fill);

        let content = column![
            text("Photo Wall").size(40),
            text(&self.status).size(14),
            grid,
            sentinel,
        ]
        .spacing(24)
        .padding(24)
        .max_width(1440)
        .align_x(Alignment::Center);

        let page = scrollable(container(content).center_x(Length::Fill))
            .width(Length::Fill)
            .height(Length::Fill)
            .on_scroll(Message::Scrolled);

        // The lightbox is a pure overlay toggle: no fetch happens on open
        match self.lightbox.and_then(|index| records.get(index)) {
            Some(record) => {
                let handle =
                    self.previews
                        .get(&record.id)
                        .or_else(|| match self.thumbs.get(&record.id) {
                            Some(Thumb::Ready(handle)) => Some(handle),
                            _ => None,
                        });
                stack![page, ui::lightbox(record, handle)].into()
            }
            None => page.into(),
        }
    }

    /// One masonry column of image cards
    fn column_view<'a>(&'a self, entries: Vec<(usize, &'a ImageRecord)>) -> Element<'a, Message> {
        Column::with_children(entries.into_iter().map(|(index, record)| {
            let thumbnail = match self.thumbs.get(&record.id) {
                Some(Thumb::Ready(handle)) => Some(handle),
                _ => None,
            };

            ui::image_card(
                index,
                record,
                thumbnail,
                self.hovered == Some(index),
                self.downloads.is_ready(&record.id),
            )
        }))
        .spacing(GRID_SPACING)
        .width(Length::FillPortion(1))
        .into()
    }

    /// Set the application theme
    fn theme(&self) -> Theme {
        Theme::Dark
    }
}

fn main() -> iced::Result {
    // RUST_LOG controls verbosity, e.g. RUST_LOG=photo_wall=debug
    env_logger::init();

    iced::application("Photo Wall", PhotoWall::update, PhotoWall::view)
        .theme(PhotoWall::theme)
        .window_size((1280.0, 900.0))
        .centered()
        .run_with(PhotoWall::new)
}

/// Kick off an async fetch of one listing page
fn fetch_page(client: PicsumClient, page: u32) -> Task<Message> {
    Task::perform(
        async move { client.list_page(page).await },
        Message::PageLoaded,
    )
}

/// Kick off an async thumbnail fetch/decode for one record
fn fetch_thumbnail(client: PicsumClient, record: ImageRecord) -> Task<Message> {
    Task::perform(load_thumbnail(client, record), |(id, result)| {
        Message::ThumbLoaded(id, result)
    })
}

/// Fetch a resized thumbnail variant and decode it into a drawable handle
async fn load_thumbnail(
    client: PicsumClient,
    record: ImageRecord,
) -> (String, Result<Handle, ApiError>) {
    let id = record.id.clone();
    let result = fetch_and_decode(client, record).await;
    (id, result)
}

async fn fetch_and_decode(client: PicsumClient, record: ImageRecord) -> Result<Handle, ApiError> {
    let bytes = client.fetch_bytes(&record.thumb_url(THUMB_WIDTH)).await?;

    // Decode on a blocking thread because image decoding is CPU-intensive
    tokio::task::spawn_blocking(move || decode_to_handle(&bytes))
        .await
        .map_err(|e| ApiError::Decode(format!("decode task failed: {e}")))?
}

/// Decode image bytes into an RGBA handle the renderer can upload directly
fn decode_to_handle(bytes: &[u8]) -> Result<Handle, ApiError> {
    let decoded = image::load_from_memory(bytes).map_err(|e| ApiError::Decode(e.to_string()))?;
    let rgba = decoded.to_rgba8();
    let (width, height) = rgba.dimensions();

    Ok(Handle::from_rgba(width, height, rgba.into_raw()))
}
