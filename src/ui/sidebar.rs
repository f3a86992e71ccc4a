use std::collections::HashSet;

use iced::widget::button::Status;
use iced::widget::container::Style;
use iced::widget::{button, column, container, mouse_area, row, space, text, text_input};
use iced::{Background, Border, Color, Element, Length, Shadow, Vector};

use crate::collection::TreeNode;
use crate::platform::Platform;
use crate::ui::scroll::{ScrollTuning, smooth_scroll};
use crate::ui::{IconName, icon, method_badge};

const PANEL_WIDTH: f32 = 260.0;
const RAIL_WIDTH: f32 = 56.0;

#[derive(Debug, Clone)]
pub enum Action {
    None,
    ApiSelected(usize),
}

#[derive(Debug, Clone)]
pub enum Message {
    ToggleOpen,
    TogglePin,
    OverlayPressed,
    HoverEntered,
    HoverExited,
    FolderToggled(usize),
    ApiSelected(usize),
    FilterChanged(String),
}

/// What the render pass shows for a given (open, pinned, hovered) state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SidebarLayout {
    Hidden,
    /// Open and unpinned: the full panel floats over a dismiss scrim.
    Floating,
    /// Open and pinned: docked as a narrow rail.
    Rail,
    /// Open, pinned and hovered: the rail widens to the full panel.
    RailExpanded,
}

/// Navigation panel state. `hovered` is only tracked while `pinned` is true;
/// unpinning drops the hover subscription together with the flag.
#[derive(Debug, Clone)]
pub struct SidebarPanel {
    open: bool,
    pinned: bool,
    hovered: bool,
    collapsed: HashSet<usize>,
    filter: String,
}

impl SidebarPanel {
    pub fn new() -> Self {
        Self {
            open: false,
            pinned: false,
            hovered: false,
            collapsed: HashSet::new(),
            filter: String::new(),
        }
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn is_pinned(&self) -> bool {
        self.pinned
    }

    pub fn is_hovered(&self) -> bool {
        self.hovered
    }

    pub fn toggle_open(&mut self) {
        self.open = !self.open;
    }

    pub fn toggle_pin(&mut self) {
        if self.pinned {
            self.pinned = false;
            // Hover tracking is scoped to the pinned interval.
            self.hovered = false;
        } else {
            self.pinned = true;
        }
    }

    /// The one place presentation is derived from state.
    pub fn layout(&self) -> SidebarLayout {
        match (self.open, self.pinned, self.hovered) {
            (false, _, _) => SidebarLayout::Hidden,
            (true, false, _) => SidebarLayout::Floating,
            (true, true, false) => SidebarLayout::Rail,
            (true, true, true) => SidebarLayout::RailExpanded,
        }
    }

    pub fn width(&self) -> f32 {
        match self.layout() {
            SidebarLayout::Hidden => 0.0,
            SidebarLayout::Rail => RAIL_WIDTH,
            SidebarLayout::Floating | SidebarLayout::RailExpanded => PANEL_WIDTH,
        }
    }

    pub fn update(&mut self, message: Message) -> Action {
        match message {
            Message::ToggleOpen | Message::OverlayPressed => {
                self.toggle_open();
                Action::None
            }
            Message::TogglePin => {
                self.toggle_pin();
                Action::None
            }
            Message::HoverEntered => {
                if self.pinned && !self.hovered {
                    log::trace!("sidebar hover enter");
                    self.hovered = true;
                }
                Action::None
            }
            Message::HoverExited => {
                if self.pinned && self.hovered {
                    log::trace!("sidebar hover leave");
                    self.hovered = false;
                }
                Action::None
            }
            Message::FolderToggled(id) => {
                if !self.collapsed.remove(&id) {
                    self.collapsed.insert(id);
                }
                Action::None
            }
            Message::ApiSelected(id) => Action::ApiSelected(id),
            Message::FilterChanged(filter) => {
                self.filter = filter;
                Action::None
            }
        }
    }

    pub fn view<'a>(
        &'a self,
        tree: &'a [TreeNode],
        selected: Option<usize>,
        platform: Platform,
    ) -> Element<'a, Message> {
        let panel: Element<'a, Message> = match self.layout() {
            SidebarLayout::Hidden => space().width(0).into(),
            SidebarLayout::Rail => self.rail(),
            SidebarLayout::Floating | SidebarLayout::RailExpanded => {
                self.full_panel(tree, selected, platform)
            }
        };

        // The hover subscription only exists while pinned; the runtime
        // attaches and detaches it on the pin transitions.
        if self.pinned {
            mouse_area(panel)
                .on_enter(Message::HoverEntered)
                .on_exit(Message::HoverExited)
                .into()
        } else {
            panel
        }
    }

    fn rail(&self) -> Element<'_, Message> {
        container(column![self.pin_button()].align_x(iced::Alignment::Center))
            .width(Length::Fixed(RAIL_WIDTH))
            .height(Length::Fill)
            .padding(10)
            .align_x(iced::alignment::Horizontal::Center)
            .style(panel_surface)
            .into()
    }

    fn full_panel<'a>(
        &'a self,
        tree: &'a [TreeNode],
        selected: Option<usize>,
        platform: Platform,
    ) -> Element<'a, Message> {
        let header = row![
            text("CONTENTS").size(11).color(Color::from_rgb(0.45, 0.45, 0.45)),
            space().width(Length::Fill),
            self.pin_button(),
        ]
        .align_y(iced::Alignment::Center);

        let filter = text_input("Filter APIs", &self.filter)
            .on_input(Message::FilterChanged)
            .size(13)
            .padding([6, 8]);

        let needle = self.filter.to_lowercase();
        let mut entries = column![];
        for element in self.tree_rows(tree, selected, &needle, 0) {
            entries = entries.push(element);
        }

        let highlighted = self.layout() == SidebarLayout::RailExpanded;
        container(
            column![
                header,
                space().height(8),
                filter,
                space().height(8),
                smooth_scroll(entries.spacing(2), ScrollTuning::SIDEBAR, platform),
            ]
            .padding(10),
        )
        .width(Length::Fixed(PANEL_WIDTH))
        .height(Length::Fill)
        .style(move |theme| {
            let mut style = panel_surface(theme);
            if highlighted {
                style.border = Border {
                    color: Color::from_rgb(0.55, 0.62, 0.95),
                    width: 1.0,
                    ..Border::default()
                };
            }
            style
        })
        .into()
    }

    fn pin_button(&self) -> Element<'_, Message> {
        let tint = if self.pinned {
            Color::from_rgb(0.3, 0.4, 0.9)
        } else {
            Color::from_rgb(0.5, 0.5, 0.5)
        };
        button(icon(IconName::Pin).size(14.0).color(tint))
            .padding(6)
            .on_press(Message::TogglePin)
            .style(tool_button_style(self.pinned))
            .into()
    }

    fn tree_rows<'a>(
        &'a self,
        nodes: &'a [TreeNode],
        selected: Option<usize>,
        needle: &str,
        depth: u32,
    ) -> Vec<Element<'a, Message>> {
        let mut rows = Vec::new();
        for node in nodes {
            match node {
                TreeNode::Folder { id, name, children } => {
                    if !node_matches(node, needle) {
                        continue;
                    }
                    let expanded = self.folder_expanded(*id, needle);
                    let header = button(
                        row![
                            space().width(16 * depth),
                            icon(if expanded {
                                IconName::ChevronDown
                            } else {
                                IconName::ChevronRight
                            })
                            .size(12.0),
                            space().width(5),
                            text(name.as_str()).size(14)
                        ]
                        .align_y(iced::Alignment::Center),
                    )
                    .on_press(Message::FolderToggled(*id))
                    .style(tree_row_style(false))
                    .width(Length::Fill);
                    rows.push(header.into());

                    if expanded {
                        rows.extend(self.tree_rows(children, selected, needle, depth + 1));
                    }
                }
                TreeNode::Api { id, name, method } => {
                    if !node_matches(node, needle) {
                        continue;
                    }
                    let is_selected = selected == Some(*id);
                    let mut entry = row![space().width(16 * depth + 4)];
                    if let Some(method) = method {
                        entry = entry.push(method_badge(method)).push(space().width(8));
                    }
                    entry = entry.push(text(name.as_str()).size(12));

                    rows.push(
                        button(entry.align_y(iced::Alignment::Center))
                            .on_press(Message::ApiSelected(*id))
                            .style(tree_row_style(is_selected))
                            .width(Length::Fill)
                            .into(),
                    );
                }
            }
        }
        rows
    }

    fn folder_expanded(&self, id: usize, needle: &str) -> bool {
        // Filtering expands everything so matches stay reachable.
        !needle.is_empty() || !self.collapsed.contains(&id)
    }
}

/// True when the node (or any API beneath it) should stay visible for the
/// given lowercased filter text.
fn node_matches(node: &TreeNode, needle: &str) -> bool {
    if needle.is_empty() {
        return true;
    }
    match node {
        TreeNode::Api { name, .. } => name.to_lowercase().contains(needle),
        TreeNode::Folder { children, .. } => {
            children.iter().any(|child| node_matches(child, needle))
        }
    }
}

fn panel_surface(_theme: &iced::Theme) -> Style {
    Style {
        background: Some(Background::Color(Color::from_rgb(0.97, 0.97, 0.97))),
        border: Border {
            color: Color::from_rgb(0.88, 0.88, 0.88),
            width: 1.0,
            ..Border::default()
        },
        shadow: Shadow {
            color: Color::from_rgba(0.0, 0.0, 0.0, 0.08),
            offset: Vector::new(2.0, 0.0),
            blur_radius: 6.0,
        },
        ..Style::default()
    }
}

fn tool_button_style(active: bool) -> impl Fn(&iced::Theme, Status) -> button::Style {
    move |_theme, status| {
        let base = button::Style {
            background: Some(Background::Color(if active {
                Color::from_rgb(0.88, 0.9, 0.98)
            } else {
                Color::TRANSPARENT
            })),
            border: Border {
                radius: 4.0.into(),
                ..Border::default()
            },
            ..button::Style::default()
        };
        match status {
            Status::Hovered => button::Style {
                background: Some(Background::Color(Color::from_rgb(0.9, 0.9, 0.9))),
                ..base
            },
            _ => base,
        }
    }
}

fn tree_row_style(is_selected: bool) -> impl Fn(&iced::Theme, Status) -> button::Style {
    move |_theme, status| {
        let base = button::Style::default();
        match status {
            Status::Pressed => button::Style {
                background: Some(Background::Color(Color::from_rgb(0.9, 0.9, 0.9))),
                ..base
            },
            Status::Hovered => button::Style {
                background: Some(Background::Color(if is_selected {
                    Color::from_rgb(0.78, 0.82, 0.996)
                } else {
                    Color::from_rgb(0.95, 0.95, 0.95)
                })),
                ..base
            },
            _ => {
                if is_selected {
                    button::Style {
                        background: Some(Background::Color(Color::from_rgb(0.78, 0.82, 0.996))),
                        ..base
                    }
                } else {
                    base
                }
            }
        }
    }
}
