use std::collections::HashMap;

use iced::widget::button::Status;
use iced::widget::{button, row, text};
use iced::{Background, Border, Color, Element};

use crate::collection::ApiExample;

#[derive(Debug, Clone)]
pub enum Action {
    None,
}

#[derive(Debug, Clone)]
pub enum Message {
    ExamplePicked {
        request_id: String,
        example_id: String,
    },
}

/// Remembers which example is on display for each request. Requests the
/// user never touched show their first example.
#[derive(Debug, Clone, Default)]
pub struct ResponsePicker {
    picks: HashMap<String, String>,
}

impl ResponsePicker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn update(&mut self, message: Message) -> Action {
        match message {
            Message::ExamplePicked {
                request_id,
                example_id,
            } => {
                self.picks.insert(request_id, example_id);
                Action::None
            }
        }
    }

    /// The single example shown for `request_id`. A pick that no longer
    /// resolves (the document was rebuilt) falls back to the first entry.
    pub fn visible_example<'a>(
        &self,
        request_id: &str,
        examples: &'a [ApiExample],
    ) -> Option<&'a ApiExample> {
        if let Some(picked) = self.picks.get(request_id)
            && let Some(example) = examples.iter().find(|example| &example.id == picked)
        {
            return Some(example);
        }
        examples.first()
    }

    /// One pill per example, the visible one highlighted.
    pub fn pills<'a>(
        &self,
        request_id: &str,
        examples: &'a [ApiExample],
    ) -> Element<'a, Message> {
        let visible = self
            .visible_example(request_id, examples)
            .map(|example| example.id.as_str());

        let mut pills = row![].spacing(6);
        for example in examples {
            let is_visible = visible == Some(example.id.as_str());
            pills = pills.push(
                button(text(&example.name).size(12))
                    .padding([4, 10])
                    .on_press(Message::ExamplePicked {
                        request_id: request_id.to_string(),
                        example_id: example.id.clone(),
                    })
                    .style(pill_style(is_visible)),
            );
        }
        pills.into()
    }
}

fn pill_style(is_visible: bool) -> impl Fn(&iced::Theme, Status) -> button::Style {
    move |_theme, status| {
        let base = if is_visible {
            button::Style {
                background: Some(Background::Color(Color::from_rgb(0.3, 0.4, 0.9))),
                text_color: Color::WHITE,
                border: Border {
                    radius: 12.0.into(),
                    ..Border::default()
                },
                ..button::Style::default()
            }
        } else {
            button::Style {
                background: Some(Background::Color(Color::from_rgb(0.93, 0.93, 0.93))),
                text_color: Color::from_rgb(0.25, 0.25, 0.25),
                border: Border {
                    radius: 12.0.into(),
                    ..Border::default()
                },
                ..button::Style::default()
            }
        };
        match status {
            Status::Hovered if !is_visible => button::Style {
                background: Some(Background::Color(Color::from_rgb(0.88, 0.88, 0.88))),
                ..base
            },
            _ => base,
        }
    }
}
