use crate::icons;
use iced::widget::svg;
use iced::{Color, Element, Length};

/// Icons shipped with the viewer.
#[derive(Debug, Clone, Copy)]
pub enum IconName {
    Menu,
    Pin,
    Close,
    ChevronDown,
    ChevronRight,
    Copy,
    Expand,
}

impl IconName {
    fn filename(&self) -> &'static str {
        match self {
            IconName::Menu => "menu.svg",
            IconName::Pin => "pin.svg",
            IconName::Close => "close.svg",
            IconName::ChevronDown => "chevron-down.svg",
            IconName::ChevronRight => "chevron-right.svg",
            IconName::Copy => "copy.svg",
            IconName::Expand => "expand.svg",
        }
    }
}

/// SVG icon with a fixed square size and an optional tint.
pub fn icon<'a, Message>(name: IconName) -> Icon<'a, Message> {
    Icon::new(name)
}

pub struct Icon<'a, Message> {
    name: IconName,
    size: f32,
    color: Option<Color>,
    _phantom: std::marker::PhantomData<&'a Message>,
}

impl<'a, Message> Icon<'a, Message> {
    pub fn new(name: IconName) -> Self {
        Self {
            name,
            size: 16.0,
            color: None,
            _phantom: std::marker::PhantomData,
        }
    }

    pub fn size(mut self, size: f32) -> Self {
        self.size = size;
        self
    }

    pub fn color(mut self, color: Color) -> Self {
        self.color = Some(color);
        self
    }
}

impl<'a, Message: 'a> From<Icon<'a, Message>> for Element<'a, Message> {
    fn from(icon: Icon<'a, Message>) -> Self {
        let handle =
            icons::Assets::get_svg_handle(icon.name.filename()).expect("Failed to load SVG icon");

        let mut svg_widget = svg(handle)
            .width(Length::Fixed(icon.size))
            .height(Length::Fixed(icon.size));

        if let Some(color) = icon.color {
            svg_widget = svg_widget.style(move |_theme, _status| svg::Style { color: Some(color) });
        }

        svg_widget.into()
    }
}
