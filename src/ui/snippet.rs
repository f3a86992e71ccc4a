use iced::widget::button::Status;
use iced::widget::{button, column, container, row, space, text};
use iced::{Background, Border, Color, Element, Font, Length, Shadow, Vector};

use crate::platform::Platform;
use crate::ui::scroll::{ScrollTuning, smooth_scroll};
use crate::ui::{IconName, icon};

#[derive(Debug, Clone)]
pub enum Action {
    None,
}

#[derive(Debug, Clone)]
pub enum Message {
    ClosePressed,
}

/// A code block lifted out of the document for full-screen reading.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Snippet {
    pub title: String,
    pub text: String,
}

/// Modal that shows one snippet at a time. The text is rendered exactly as
/// stored; markup inside a body stays visible characters.
#[derive(Debug, Clone, Default)]
pub struct SnippetModal {
    open: bool,
    title: String,
    body: String,
}

impl SnippetModal {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn body(&self) -> &str {
        &self.body
    }

    /// Opening replaces whatever the modal held before.
    pub fn open(&mut self, snippet: Snippet) {
        self.open = true;
        self.title = snippet.title;
        self.body = snippet.text;
    }

    /// Closing clears the text so nothing lingers for the next open.
    /// Safe to call when already closed.
    pub fn close(&mut self) {
        self.open = false;
        self.title.clear();
        self.body.clear();
    }

    pub fn update(&mut self, message: Message) -> Action {
        match message {
            Message::ClosePressed => {
                self.close();
                Action::None
            }
        }
    }

    pub fn view(&self, platform: Platform) -> Element<'_, Message> {
        let header = row![
            text(&self.title).size(16),
            space().width(Length::Fill),
            button(icon(IconName::Close).size(14.0).color(Color::from_rgb(0.4, 0.4, 0.4)))
                .padding(6)
                .on_press(Message::ClosePressed)
                .style(close_button_style),
        ]
        .align_y(iced::Alignment::Center);

        let code = container(text(&self.body).size(13).font(Font::MONOSPACE))
            .width(Length::Fill)
            .padding(12)
            .style(|_theme| container::Style {
                background: Some(Background::Color(Color::from_rgb(0.96, 0.96, 0.96))),
                border: Border {
                    color: Color::from_rgb(0.88, 0.88, 0.88),
                    width: 1.0,
                    radius: 6.0.into(),
                },
                ..container::Style::default()
            });

        container(
            column![
                header,
                space().height(12),
                smooth_scroll(code, ScrollTuning::MODAL, platform),
            ]
            .padding(20),
        )
        .width(Length::Fixed(640.0))
        .height(Length::Fixed(520.0))
        .style(|_theme| container::Style {
            background: Some(Background::Color(Color::WHITE)),
            border: Border {
                color: Color::from_rgb(0.85, 0.85, 0.85),
                width: 1.0,
                radius: 8.0.into(),
            },
            shadow: Shadow {
                color: Color::from_rgba(0.0, 0.0, 0.0, 0.25),
                offset: Vector::new(0.0, 4.0),
                blur_radius: 24.0,
            },
            ..container::Style::default()
        })
        .into()
    }
}

fn close_button_style(_theme: &iced::Theme, status: Status) -> button::Style {
    let base = button::Style {
        border: Border {
            radius: 4.0.into(),
            ..Border::default()
        },
        ..button::Style::default()
    };
    match status {
        Status::Hovered => button::Style {
            background: Some(Background::Color(Color::from_rgb(0.92, 0.92, 0.92))),
            ..base
        },
        _ => base,
    }
}
