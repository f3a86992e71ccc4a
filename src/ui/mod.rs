pub mod docs;
pub mod icon;
pub mod picker;
pub mod scroll;
pub mod sidebar;
pub mod snippet;

pub use icon::*;

use iced::widget::{container, text};
use iced::{Border, Color, Element, Length};

/// Compact colored method tag shared by the navigation tree and the
/// document headers. Unknown methods get a neutral gray.
pub fn method_badge<'a, Message: 'a>(method: &str) -> Element<'a, Message> {
    let normalized = method.to_uppercase();
    let color = match normalized.as_str() {
        "GET" => Color::from_rgb(0.0, 0.8, 0.0),
        "POST" => Color::from_rgb(1.0, 0.6, 0.0),
        "PUT" => Color::from_rgb(0.0, 0.4, 0.8),
        "DELETE" => Color::from_rgb(0.8, 0.0, 0.0),
        "PATCH" => Color::from_rgb(0.6, 0.0, 0.8),
        "HEAD" => Color::from_rgb(0.5, 0.5, 0.5),
        "OPTIONS" => Color::from_rgb(0.3, 0.3, 0.3),
        _ => Color::from_rgb(0.45, 0.45, 0.45),
    };

    container(text(badge_label(&normalized)).size(10).color(color))
        .width(Length::Fixed(32.0))
        .align_x(iced::alignment::Horizontal::Right)
        .style(|_theme| container::Style {
            border: Border {
                radius: 3.0.into(),
                ..Border::default()
            },
            ..container::Style::default()
        })
        .padding([2, 3])
        .into()
}

/// Four characters keep the badges a fixed width in the tree.
fn badge_label(method: &str) -> String {
    match method {
        "DELETE" => "DELE".to_string(),
        "OPTIONS" => "OPTN".to_string(),
        "PATCH" => "PACH".to_string(),
        other => {
            let mut label = other.to_string();
            label.truncate(4);
            label
        }
    }
}
