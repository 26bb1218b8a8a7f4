//! HingeView List-Detail Sample
//!
//! List/detail pair with a two-screen navigation model:
//! - Narrow window: the list fills the window; tapping a row pushes the
//!   detail screen, back (button or Escape) pops it
//! - Spanned window: both screens become panes side by side and the
//!   navigation stack collapses
//! - A top app bar spans the window in every state

use std::time::{Duration, Instant};

use iced::widget::image::Handle;
use iced::widget::{button, column, container, row, text};
use iced::{window, Alignment, Color, Element, Length, Padding, Size, Subscription, Task, Theme};

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
    /// A list row was tapped; in single-pane mode this also pushes detail
    Select(usize),
    SelectNext,
    SelectPrevious,

    /// Push the detail screen for the current selection
    OpenDetail,
    /// Pop back to the list screen
    Back,

    WindowResized(Size),

    /// Crossfade animation tick
    Tick,
}

// ============================================================================
// Application State
// ============================================================================

struct ListDetail {
    items: Vec<GalleryItem>,
    images: Vec<Handle>,

    state: AppState,
    settings: Settings,
    posture: Posture,
}

impl ListDetail {
    fn new() -> (Self, Task<Message>) {
        let posture = Posture::from_env();
        let settings = Settings::load();
        let items = provider::sample_items();

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
            "ListDetail starting with {} items, {:?} layout",
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
            PaneLayout::Dual => "HingeView List-Detail - spanned".to_string(),
            PaneLayout::Single => "HingeView List-Detail".to_string(),
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
                // Single-pane mode: a row tap also navigates to the detail
                if self.state.open_detail() {
                    debug!("Pushed detail screen for item {}", index);
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

            Message::OpenDetail => {
                if self.state.open_detail() {
                    debug!("Pushed detail screen");
                }
            }

            Message::Back => {
                if self.state.go_back() {
                    debug!("Popped back to list screen");
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
        let panes = self.state.visible_panes();

        let content: Element<'_, Message> = match panes {
            VisiblePanes::ListOnly => self.view_list(),
            VisiblePanes::DetailOnly => self.view_detail(),
            VisiblePanes::Split => row![
                container(self.view_list()).width(Length::FillPortion(1)),
                container(self.view_detail()).width(Length::FillPortion(1)),
            ]
            .spacing(layout::PANE_SPACING)
            .height(Length::Fill)
            .into(),
        };

        let body = container(content)
            .width(Length::Fill)
            .height(Length::Fill)
            .padding(8);

        container(column![self.view_top_bar(panes), body])
            .width(Length::Fill)
            .height(Length::Fill)
            .style(theme::surface)
            .into()
    }

    fn view_top_bar(&self, panes: VisiblePanes) -> Element<'_, Message> {
        let mut bar = row![]
            .spacing(12)
            .height(Length::Fill)
            .align_y(Alignment::Center);

        // Back control only makes sense on the pushed detail screen
        if panes == VisiblePanes::DetailOnly {
            bar = bar.push(
                button(text("< Back").size(14))
                    .padding(Padding::from([4, 10]))
                    .style(theme::bar_button_style)
                    .on_press(Message::Back),
            );
        }

        bar = bar.push(
            text("List Detail")
                .size(18)
                .font(theme::bold())
                .color(Color::WHITE),
        );

        container(bar)
            .width(Length::Fill)
            .height(Length::Fixed(layout::TOP_BAR_HEIGHT))
            .padding(Padding::from([0, 12]))
            .style(theme::top_bar)
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
                iced::keyboard::Key::Named(iced::keyboard::key::Named::Enter) => {
                    Some(Message::OpenDetail)
                }
                iced::keyboard::Key::Named(iced::keyboard::key::Named::Escape) => {
                    Some(Message::Back)
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
    info!("HingeView ListDetail starting...");

    iced::application(ListDetail::title, ListDetail::update, ListDetail::view)
        .subscription(ListDetail::subscription)
        .theme(ListDetail::theme)
        .window(window::Settings {
            size: Size::new(win::DEFAULT_WIDTH, win::DEFAULT_HEIGHT),
            min_size: Some(Size::new(win::MIN_WIDTH, win::MIN_HEIGHT)),
            icon: ui::app_icon(),
            ..Default::default()
        })
        .run_with(ListDetail::new)
}
