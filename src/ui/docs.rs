use iced::widget::container::Style;
use iced::widget::{button, column, container, mouse_area, row, text};
use iced::{Background, Border, Color, Element, Font, Length, Shadow, Vector};
use iced_aw::ContextMenu;

use crate::collection::{ApiDoc, ApiExample, DocSet};
use crate::export;
use crate::platform::Platform;
use crate::ui::method_badge;
use crate::ui::picker::{self, ResponsePicker};
use crate::ui::scroll::{ScrollTuning, smooth_scroll};
use crate::ui::snippet::Snippet;

#[derive(Debug, Clone)]
pub enum Message {
    /// A code block was clicked; the app lifts it into the modal.
    SnippetPressed(Snippet),
    /// Text headed for the system clipboard.
    CopyPressed(String),
    Picker(picker::Message),
}

pub struct DocsPanel {}

impl DocsPanel {
    pub fn new() -> Self {
        Self {}
    }

    pub fn view<'a>(
        &self,
        docs: &'a DocSet,
        selected: Option<usize>,
        picker: &ResponsePicker,
        platform: Platform,
    ) -> Element<'a, Message> {
        let content: Element<'a, Message> = match selected.and_then(|id| docs.api(id)) {
            Some(api) => api_section(api, picker),
            None => overview(docs),
        };

        smooth_scroll(
            container(content).padding(24).width(Length::Fill),
            ScrollTuning::CONTENT,
            platform,
        )
    }
}

fn overview<'a>(docs: &'a DocSet) -> Element<'a, Message> {
    let collection = &docs.collection;
    let mut section = column![text(&collection.name).size(28)].spacing(12);

    if !collection.description.is_empty() {
        section = section.push(text(&collection.description).size(14));
    }

    let summary = if docs.apis.is_empty() {
        "This collection has no documented requests.".to_string()
    } else {
        format!(
            "{} documented requests. Pick one from the sidebar.",
            docs.apis.len()
        )
    };
    section = section.push(
        text(summary)
            .size(13)
            .color(Color::from_rgb(0.5, 0.5, 0.5)),
    );

    section.into()
}

fn api_section<'a>(api: &'a ApiDoc, picker: &ResponsePicker) -> Element<'a, Message> {
    let mut section = column![].spacing(14);

    let mut header = row![].spacing(10).align_y(iced::Alignment::Center);
    if let Some(method) = &api.method {
        header = header.push(method_badge(method));
    }
    header = header.push(text(&api.name).size(22));
    section = section.push(header);

    if let Some(url) = &api.url {
        section = section.push(
            text(url)
                .size(13)
                .font(Font::MONOSPACE)
                .color(Color::from_rgb(0.45, 0.45, 0.45)),
        );
    }

    if let Some(description) = &api.description {
        section = section.push(text(description).size(14));
    }

    if let Some(body) = &api.body {
        section = section.push(heading("REQUEST BODY"));
        section = section.push(snippet_block(
            format!("{} · Request body", api.name),
            body.clone(),
            export::curl_for_api(api),
        ));
    }

    section = section.push(heading("EXAMPLES"));
    let request_id = api.id.to_string();
    if api.examples.len() > 1 {
        section = section.push(
            picker
                .pills(&request_id, &api.examples)
                .map(Message::Picker),
        );
    }
    if let Some(example) = picker.visible_example(&request_id, &api.examples) {
        section = section.push(example_card(example));
    }

    section.into()
}

fn example_card<'a>(example: &'a ApiExample) -> Element<'a, Message> {
    let mut card = column![].spacing(10);

    let mut header = row![text(&example.name).size(15)]
        .spacing(10)
        .align_y(iced::Alignment::Center);
    if let (Some(status), Some(code)) = (&example.status, example.code) {
        header = header.push(status_badge(code, status));
    }
    card = card.push(header);

    if let Some(preview) = example.request_preview() {
        card = card.push(heading("REQUEST"));
        card = card.push(snippet_block(
            format!("{} · Request", example.name),
            preview,
            export::curl_for_example(example),
        ));
    }

    if !example.response_body.is_empty() {
        card = card.push(heading("RESPONSE"));
        card = card.push(snippet_block(
            format!("{} · Response", example.name),
            example.response_body.clone(),
            None,
        ));
    }

    container(card)
        .padding(16)
        .width(Length::Fill)
        .style(|_theme| Style {
            background: Some(Background::Color(Color::from_rgb(0.99, 0.99, 0.99))),
            border: Border {
                color: Color::from_rgb(0.9, 0.9, 0.9),
                width: 1.0,
                radius: 8.0.into(),
            },
            ..Style::default()
        })
        .into()
}

fn heading<'a>(label: &'a str) -> Element<'a, Message> {
    text(label)
        .size(11)
        .color(Color::from_rgb(0.45, 0.45, 0.45))
        .into()
}

fn status_badge<'a>(code: u16, status: &str) -> Element<'a, Message> {
    let status_color = if (200..300).contains(&code) {
        Color::from_rgb(0.0, 0.8, 0.0)
    } else if code >= 400 {
        Color::from_rgb(0.8, 0.0, 0.0)
    } else {
        Color::from_rgb(1.0, 0.6, 0.0)
    };

    container(text(format!("{code} {status}")).color(status_color).size(13))
        .style(move |_theme| Style {
            background: Some(Background::Color(Color::from_rgba(
                status_color.r,
                status_color.g,
                status_color.b,
                0.1,
            ))),
            border: Border {
                radius: 4.0.into(),
                ..Border::default()
            },
            ..Style::default()
        })
        .padding([4, 8])
        .into()
}

/// A code block that opens the full-screen modal on click and offers copy
/// operations through its context menu.
fn snippet_block<'a>(title: String, body: String, curl: Option<String>) -> Element<'a, Message> {
    let snippet = Snippet {
        title,
        text: body.clone(),
    };

    let block = mouse_area(
        container(text(body.clone()).size(13).font(Font::MONOSPACE))
            .width(Length::Fill)
            .padding(12)
            .style(|_theme| Style {
                background: Some(Background::Color(Color::from_rgb(0.96, 0.96, 0.96))),
                border: Border {
                    color: Color::from_rgb(0.88, 0.88, 0.88),
                    width: 1.0,
                    radius: 6.0.into(),
                },
                ..Style::default()
            }),
    )
    .on_press(Message::SnippetPressed(snippet.clone()));

    ContextMenu::new(block, move || {
        let mut entries = column![
            menu_entry("Expand", Message::SnippetPressed(snippet.clone())),
            menu_entry("Copy", Message::CopyPressed(body.clone())),
        ]
        .spacing(2);
        if let Some(curl) = curl.clone() {
            entries = entries.push(menu_entry("Copy as cURL", Message::CopyPressed(curl)));
        }
        container(entries)
            .width(Length::Fixed(150.0))
            .padding(4)
            .style(|_theme| Style {
                background: Some(Background::Color(Color::WHITE)),
                border: Border {
                    color: Color::from_rgb(0.8, 0.8, 0.8),
                    width: 1.0,
                    radius: 6.0.into(),
                },
                shadow: Shadow {
                    color: Color::from_rgba(0.0, 0.0, 0.0, 0.15),
                    offset: Vector::new(0.0, 2.0),
                    blur_radius: 8.0,
                },
                ..Style::default()
            })
            .into()
    })
    .into()
}

fn menu_entry<'a>(label: &'a str, message: Message) -> Element<'a, Message> {
    button(text(label).size(12))
        .width(Length::Fill)
        .padding([4, 8])
        .on_press(message)
        .style(|_theme, status| {
            let base = iced::widget::button::Style {
                border: Border {
                    radius: 4.0.into(),
                    ..Border::default()
                },
                ..iced::widget::button::Style::default()
            };
            match status {
                iced::widget::button::Status::Hovered => iced::widget::button::Style {
                    background: Some(Background::Color(Color::from_rgb(0.93, 0.93, 0.93))),
                    ..base
                },
                _ => base,
            }
        })
        .into()
}
