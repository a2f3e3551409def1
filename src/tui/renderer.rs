use ratatui::{
    buffer::Buffer,
    layout::{Constraint as RatatuiConstraint, Direction, Layout as RatatuiLayout, Rect},
};

use super::component::{Constraint, ContainerLayout, Element};
use crate::config::DisplayConfig;

/// Renders a virtual element tree into a ratatui buffer
///
/// Every frame is drawn in full; ratatui's own buffer diff keeps terminal
/// writes small.
#[derive(Debug, Default)]
pub struct Renderer;

impl Renderer {
    pub fn new() -> Self {
        Self
    }

    pub fn render(&mut self, element: Element, area: Rect, buf: &mut Buffer, config: &DisplayConfig) {
        Self::render_element(&element, area, buf, config);
    }

    fn calculate_layout(layout: &ContainerLayout, area: Rect) -> Vec<Rect> {
        let (direction, constraints) = match layout {
            ContainerLayout::Vertical(constraints) => (Direction::Vertical, constraints),
            ContainerLayout::Horizontal(constraints) => (Direction::Horizontal, constraints),
        };

        RatatuiLayout::default()
            .direction(direction)
            .constraints(constraints.iter().map(|c| Self::convert_constraint(*c)).collect::<Vec<_>>())
            .split(area)
            .to_vec()
    }

    fn convert_constraint(constraint: Constraint) -> RatatuiConstraint {
        match constraint {
            Constraint::Length(n) => RatatuiConstraint::Length(n),
            Constraint::Min(n) => RatatuiConstraint::Min(n),
            Constraint::Max(n) => RatatuiConstraint::Max(n),
            Constraint::Percentage(n) => RatatuiConstraint::Percentage(n),
            Constraint::Ratio(a, b) => RatatuiConstraint::Ratio(a, b),
        }
    }

    fn render_element(element: &Element, area: Rect, buf: &mut Buffer, config: &DisplayConfig) {
        match element {
            Element::Widget(widget) => widget.render(area, buf, config),

            Element::Container { children, layout } => {
                let chunks = Self::calculate_layout(layout, area);
                for (child, chunk) in children.iter().zip(chunks.iter()) {
                    Self::render_element(child, *chunk, buf, config);
                }
            }

            Element::Fragment(children) => {
                for child in children {
                    Self::render_element(child, area, buf, config);
                }
            }

            Element::Overlay { base, overlay } => {
                Self::render_element(base, area, buf, config);
                Self::render_element(overlay, area, buf, config);
            }

            Element::None => {}
        }
    }
}
