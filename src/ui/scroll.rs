use iced::widget::scrollable;
use iced::{Color, Element, Length::Fill, Theme};

use crate::platform::Platform;

/// Scroll axis of the decorated container.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis {
    Vertical,
    Horizontal,
}

/// Tuning accepted by the smooth-scroll decorator.
#[derive(Debug, Clone, Copy)]
pub struct ScrollTuning {
    pub axis: Axis,
    pub auto_hide_scrollbar: bool,
    /// Accepted for interface completeness; scroll physics stay with the
    /// platform scroller.
    #[allow(dead_code)]
    pub scroll_inertia: u32,
}

impl ScrollTuning {
    pub const SIDEBAR: Self = Self {
        axis: Axis::Vertical,
        auto_hide_scrollbar: true,
        scroll_inertia: 300,
    };

    pub const CONTENT: Self = Self {
        axis: Axis::Vertical,
        auto_hide_scrollbar: true,
        scroll_inertia: 300,
    };

    pub const MODAL: Self = Self {
        axis: Axis::Vertical,
        auto_hide_scrollbar: true,
        scroll_inertia: 300,
    };
}

/// Wraps `content` in the decorated scrollable on desktop platforms. On
/// touch-first platforms the content scrolls with the stock scroller and
/// receives no decoration at all.
pub fn smooth_scroll<'a, Message: 'a>(
    content: impl Into<Element<'a, Message>>,
    tuning: ScrollTuning,
    platform: Platform,
) -> Element<'a, Message> {
    if !platform.is_desktop() {
        return scrollable(content).width(Fill).height(Fill).into();
    }

    let scrollbar = scrollable::Scrollbar::new().width(6).scroller_width(4);
    let direction = match tuning.axis {
        Axis::Vertical => scrollable::Direction::Vertical(scrollbar),
        Axis::Horizontal => scrollable::Direction::Horizontal(scrollbar),
    };

    let mut decorated = scrollable(content)
        .width(Fill)
        .height(Fill)
        .direction(direction);
    if tuning.auto_hide_scrollbar {
        decorated = decorated.style(auto_hide_rail);
    }
    decorated.into()
}

/// Rail and scroller stay invisible until the pointer engages the
/// scrollbar, which is as close as the toolkit gets to an auto-hiding bar.
fn auto_hide_rail(theme: &Theme, status: scrollable::Status) -> scrollable::Style {
    let mut style = scrollable::default(theme, status);
    let engaged = matches!(
        status,
        scrollable::Status::Hovered { .. } | scrollable::Status::Dragged { .. }
    );
    if !engaged {
        style.vertical_rail.background = None;
        style.vertical_rail.scroller.background = Color::TRANSPARENT.into();
        style.horizontal_rail.background = None;
        style.horizontal_rail.scroller.background = Color::TRANSPARENT.into();
    }
    style
}
