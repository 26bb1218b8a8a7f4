//! HingeView Gallery Sample
//!
//! Photo gallery with a responsive dual-pane layout:
//! - Narrow window: the scrollable photo list fills the window
//! - Spanned window: list and detail sit side by side, equal width
//! - Detail pane crossfades between successive selections

use std::time::{Duration, Instant};

use iced::widget::image::Handle;
use iced::widget::{container, row};
use iced::{window, Element, Length, Size, Subscription, Task, Theme};

use log::{debug, error, info};

use hingeview::constants::{fade, gallery, layout, window as win};
use hingeview::models::{provider, GalleryItem};
use hingeview::ui::{self, theme};
use hingeview::{AppState, PaneLayout, Posture, Settings, VisiblePanes};

// ============================================================================
// Messages
// ============================================================================

#[derive(Debug, Clone)]
enum Message {
    /// A list row was tapped
    Select(usize),
    SelectNext,
    SelectPrevious,

    WindowResized(Size),

    /// Crossfade animation tick
    Tick,
}

// ============================================================================
// Application State
// ============================================================================

struct Gallery {
    items: Vec<GalleryItem>,
    images: Vec<Handle>,

    state: AppState,
    settings: Settings,
    posture: Posture,
}

impl Gallery {
    fn new() -> (Self, Task<Message>) {
        let posture = Posture::from_env();
        let settings = Settings::load();
        let items = provider::sample_items();

        // One handle per item; the widgets scale it to row or pane size
        let images = items
            .iter()
            .map(|item| {
                Handle::from_rgba(
                    gallery::IMAGE_WIDTH,
                    gallery::IMAGE_HEIGHT,
                    provider::placeholder_rgba(item.image, gallery::IMAGE_WIDTH, gallery::IMAGE_HEIGHT),
                )
            })
            .collect();

        let mut state =
            AppState::new(items.len()).with_initial_selection(settings.initial_selection(items.len()));
        state.set_layout(posture.layout_for_width(win::DEFAULT_WIDTH, settings.span_breakpoint));

        info!(
            "Gallery starting with {} items, {:?} layout",
            items.len(),
            state.layout()
        );

        (
            Self {
                items,
                images,
                state,
                settings,
                posture,
            },
            Task::none(),
        )
    }

    fn title(&self) -> String {
        match self.state.layout() {
            PaneLayout::Dual => "HingeView Gallery - spanned".to_string(),
            PaneLayout::Single => "HingeView Gallery".to_string(),
        }
    }

    // ========================================================================
    // Update
    // ========================================================================

    fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::Select(index) => {
                if self.state.select(index, Instant::now()) {
                    self.persist_selection();
                }
            }

            Message::SelectNext => {
                if self.state.select_next(Instant::now()) {
                    self.persist_selection();
                }
            }

            Message::SelectPrevious => {
                if self.state.select_previous(Instant::now()) {
                    self.persist_selection();
                }
            }

            Message::WindowResized(size) => {
                let resolved = self
                    .posture
                    .layout_for_width(size.width, self.settings.span_breakpoint);
                if self.state.set_layout(resolved) {
                    debug!("Layout switched to {:?} at width {}", resolved, size.width);
                }
            }

            Message::Tick => self.state.tick(Instant::now()),
        }

        Task::none()
    }

    fn persist_selection(&mut self) {
        let Some(index) = self.state.selected() else {
            return;
        };
        debug!("Selected item {}", index);
        if self.settings.remember_selection {
            self.settings.last_selected = index;
            if let Err(e) = self.settings.save() {
                error!("Failed to save settings: {:#}", e);
            }
        }
    }

    // ========================================================================
    // Views
    // ========================================================================

    fn view(&self) -> Element<'_, Message> {
        let content: Element<'_, Message> = match self.state.visible_panes() {
            VisiblePanes::Split => self.view_split(),
            // The gallery never navigates, so single-pane mode is always the list
            VisiblePanes::ListOnly | VisiblePanes::DetailOnly => self.view_list(),
        };

        container(content)
            .width(Length::Fill)
            .height(Length::Fill)
            .padding(8)
            .style(theme::surface)
            .into()
    }

    fn view_list(&self) -> Element<'_, Message> {
        ui::list_view(
            &self.items,
            &self.images,
            self.state.selected(),
            Message::Select,
        )
    }

    fn view_split(&self) -> Element<'_, Message> {
        row![
            container(self.view_list()).width(Length::FillPortion(1)),
            container(self.view_detail()).width(Length::FillPortion(1)),
        ]
        .spacing(layout::PANE_SPACING)
        .height(Length::Fill)
        .into()
    }

    fn view_detail(&self) -> Element<'_, Message> {
        let Some(index) = self.state.selected() else {
            return ui::empty_view();
        };
        let current = ui::DetailContent {
            item: &self.items[index],
            handle: &self.images[index],
        };
        let outgoing = self.state.fade().and_then(|fade| {
            Some((
                ui::DetailContent {
                    item: self.items.get(fade.from)?,
                    handle: self.images.get(fade.from)?,
                },
                fade.progress(Instant::now()),
            ))
        });
        ui::detail_view(current, outgoing)
    }

    // ========================================================================
    // Subscriptions
    // ========================================================================

    fn subscription(&self) -> Subscription<Message> {
        let mut subs = vec![];

        if self.state.is_fading() {
            subs.push(iced::time::every(Duration::from_millis(fade::TICK_MS)).map(|_| Message::Tick));
        }

        subs.push(window::resize_events().map(|(_id, size)| Message::WindowResized(size)));

        subs.push(iced::keyboard::on_key_press(|key, _modifiers| {
            match key.as_ref() {
                iced::keyboard::Key::Named(iced::keyboard::key::Named::ArrowDown) => {
                    Some(Message::SelectNext)
                }
                iced::keyboard::Key::Named(iced::keyboard::key::Named::ArrowUp) => {
                    Some(Message::SelectPrevious)
                }
                _ => None,
            }
        }));

        Subscription::batch(subs)
    }

    fn theme(&self) -> Theme {
        Theme::Dark
    }
}

// ============================================================================
// Main
// ============================================================================

fn main() -> iced::Result {
    // Initialize logger with wgpu warnings filtered out
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .filter_module("wgpu_hal", log::LevelFilter::Error)
        .filter_module("wgpu_core", log::LevelFilter::Error)
        .filter_module("naga", log::LevelFilter::Error)
        .init();
    info!("HingeView Gallery starting...");

    iced::application(Gallery::title, Gallery::update, Gallery::view)
        .subscription(Gallery::subscription)
        .theme(Gallery::theme)
        .window(window::Settings {
            size: Size::new(win::DEFAULT_WIDTH, win::DEFAULT_HEIGHT),
            min_size: Some(Size::new(win::MIN_WIDTH, win::MIN_HEIGHT)),
            icon: ui::app_icon(),
            ..Default::default()
        })
        .run_with(Gallery::new)
}
