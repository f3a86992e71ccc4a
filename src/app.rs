use std::path::PathBuf;

use chrono::{DateTime, Local};
use iced::widget::container::Style;
use iced::widget::{button, center, column, container, mouse_area, opaque, row, space, stack, text};
use iced::{Background, Border, Color, Element, Length, Task, Theme};

use crate::collection::{self, DocSet, LoadedDocs};
use crate::platform::Platform;
use crate::ui::docs::{self, DocsPanel};
use crate::ui::picker::ResponsePicker;
use crate::ui::sidebar::{self, SidebarLayout, SidebarPanel};
use crate::ui::snippet::{self, SnippetModal};
use crate::ui::{IconName, icon};

pub struct App {
    docs: Option<DocSet>,
    origin: String,
    environment: Option<String>,
    load_error: Option<String>,
    loaded_at: Option<DateTime<Local>>,
    selected_api: Option<usize>,
    sidebar: SidebarPanel,
    snippet: SnippetModal,
    picker: ResponsePicker,
    docs_panel: DocsPanel,
    platform: Platform,
}

#[derive(Debug, Clone)]
pub enum Message {
    Loaded(Result<LoadedDocs, String>),
    Sidebar(sidebar::Message),
    Snippet(snippet::Message),
    Docs(docs::Message),
}

impl App {
    pub fn new(
        collection: Option<PathBuf>,
        environment: Option<PathBuf>,
    ) -> (Self, Task<Message>) {
        let source = collection::source::for_run(collection, environment);
        let load = Task::perform(
            async move { source.load().await.map_err(|err| err.to_string()) },
            Message::Loaded,
        );

        let app = Self {
            docs: None,
            origin: String::new(),
            environment: None,
            load_error: None,
            loaded_at: None,
            selected_api: None,
            sidebar: SidebarPanel::new(),
            snippet: SnippetModal::new(),
            picker: ResponsePicker::new(),
            docs_panel: DocsPanel::new(),
            platform: Platform::current(),
        };
        (app, load)
    }

    pub fn title(&self) -> String {
        match &self.docs {
            Some(docs) => format!("{} - Vellum", docs.collection.name),
            None => String::from("Vellum"),
        }
    }

    pub fn theme(&self) -> Theme {
        Theme::Light
    }

    pub fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::Loaded(Ok(loaded)) => {
                log::info!(
                    "loaded {} ({} documented requests)",
                    loaded.origin,
                    loaded.set.apis.len()
                );
                self.docs = Some(loaded.set);
                self.origin = loaded.origin;
                self.environment = loaded.environment;
                self.loaded_at = Some(Local::now());
                self.load_error = None;
                Task::none()
            }
            Message::Loaded(Err(error)) => {
                log::error!("failed to load collection: {error}");
                self.load_error = Some(error);
                Task::none()
            }
            Message::Sidebar(message) => {
                match self.sidebar.update(message) {
                    sidebar::Action::ApiSelected(id) => self.selected_api = Some(id),
                    sidebar::Action::None => {}
                }
                Task::none()
            }
            Message::Snippet(message) => {
                self.snippet.update(message);
                Task::none()
            }
            Message::Docs(docs::Message::SnippetPressed(snippet)) => {
                self.snippet.open(snippet);
                Task::none()
            }
            Message::Docs(docs::Message::CopyPressed(payload)) => {
                log::debug!("copying {} bytes to the clipboard", payload.len());
                iced::clipboard::write(payload)
            }
            Message::Docs(docs::Message::Picker(message)) => {
                self.picker.update(message);
                Task::none()
            }
        }
    }

    pub fn view(&self) -> Element<'_, Message> {
        let mut layers = stack![self.base_view()];

        // The floating sidebar sits over a dismiss scrim; dismissing goes
        // through the same handler as the header toggle.
        if self.sidebar.layout() == SidebarLayout::Floating {
            let scrim = mouse_area(
                container(space())
                    .width(Length::Fill)
                    .height(Length::Fill)
                    .style(|_theme| Style {
                        background: Some(Background::Color(Color::from_rgba(0.0, 0.0, 0.0, 0.25))),
                        ..Style::default()
                    }),
            )
            .on_press(Message::Sidebar(sidebar::Message::OverlayPressed));
            layers = layers.push(opaque(scrim));
            layers = layers.push(opaque(
                container(self.sidebar_view()).height(Length::Fill),
            ));
        }

        // The snippet scrim blocks the page but does not dismiss; only the
        // close button does.
        if self.snippet.is_open() {
            let modal = center(opaque(self.snippet.view(self.platform).map(Message::Snippet)))
                .padding(40)
                .style(|_theme| Style {
                    background: Some(Background::Color(Color::from_rgba(0.0, 0.0, 0.0, 0.35))),
                    ..Style::default()
                });
            layers = layers.push(opaque(modal));
        }

        layers.into()
    }

    fn base_view(&self) -> Element<'_, Message> {
        let content: Element<'_, Message> = match (&self.docs, &self.load_error) {
            (Some(docs), _) => self
                .docs_panel
                .view(docs, self.selected_api, &self.picker, self.platform)
                .map(Message::Docs),
            (None, Some(error)) => error_view(error),
            (None, None) => center(
                text("Loading collection...")
                    .size(14)
                    .color(Color::from_rgb(0.5, 0.5, 0.5)),
            )
            .into(),
        };

        let mut body = row![];
        if matches!(
            self.sidebar.layout(),
            SidebarLayout::Rail | SidebarLayout::RailExpanded
        ) {
            body = body.push(self.sidebar_view());
        }
        body = body.push(content);

        column![self.header(), body].into()
    }

    fn sidebar_view(&self) -> Element<'_, Message> {
        let tree = self
            .docs
            .as_ref()
            .map(|docs| docs.tree.as_slice())
            .unwrap_or(&[]);
        self.sidebar
            .view(tree, self.selected_api, self.platform)
            .map(Message::Sidebar)
    }

    fn header(&self) -> Element<'_, Message> {
        let menu = button(icon(IconName::Menu).size(16.0).color(Color::from_rgb(0.3, 0.3, 0.3)))
            .padding(6)
            .on_press(Message::Sidebar(sidebar::Message::ToggleOpen))
            .style(header_button_style);

        let title = match &self.docs {
            Some(docs) => docs.collection.name.as_str(),
            None => "Vellum",
        };

        let mut bar = row![menu, space().width(12), text(title).size(16)]
            .align_y(iced::Alignment::Center);
        bar = bar.push(space().width(Length::Fill));

        if let Some(environment) = &self.environment {
            bar = bar.push(
                container(
                    text(environment)
                        .size(11)
                        .color(Color::from_rgb(0.0, 0.5, 0.3)),
                )
                .padding([3, 8])
                .style(|_theme| Style {
                    background: Some(Background::Color(Color::from_rgba(0.0, 0.7, 0.4, 0.12))),
                    border: Border {
                        radius: 10.0.into(),
                        ..Border::default()
                    },
                    ..Style::default()
                }),
            );
            bar = bar.push(space().width(10));
        }

        if !self.origin.is_empty() {
            bar = bar.push(
                text(&self.origin)
                    .size(11)
                    .color(Color::from_rgb(0.55, 0.55, 0.55)),
            );
            bar = bar.push(space().width(10));
        }

        if let Some(loaded_at) = self.loaded_at {
            bar = bar.push(
                text(format!("loaded {}", loaded_at.format("%H:%M:%S")))
                    .size(11)
                    .color(Color::from_rgb(0.55, 0.55, 0.55)),
            );
        }

        container(bar.padding([8, 12]))
            .width(Length::Fill)
            .style(|_theme| Style {
                background: Some(Background::Color(Color::from_rgb(0.985, 0.985, 0.985))),
                border: Border {
                    color: Color::from_rgb(0.9, 0.9, 0.9),
                    width: 1.0,
                    ..Border::default()
                },
                ..Style::default()
            })
            .into()
    }
}

fn error_view<'a>(error: &'a str) -> Element<'a, Message> {
    center(
        column![
            text("Could not load the collection").size(18),
            text(error)
                .size(13)
                .color(Color::from_rgb(0.8, 0.0, 0.0)),
        ]
        .spacing(8)
        .align_x(iced::Alignment::Center),
    )
    .into()
}

fn header_button_style(
    _theme: &Theme,
    status: iced::widget::button::Status,
) -> iced::widget::button::Style {
    let base = iced::widget::button::Style {
        border: Border {
            radius: 4.0.into(),
            ..Border::default()
        },
        ..iced::widget::button::Style::default()
    };
    match status {
        iced::widget::button::Status::Hovered => iced::widget::button::Style {
            background: Some(Background::Color(Color::from_rgb(0.92, 0.92, 0.92))),
            ..base
        },
        _ => base,
    }
}
