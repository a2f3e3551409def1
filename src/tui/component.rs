use ratatui::{buffer::Buffer, layout::Rect};
use std::future::Future;
use std::pin::Pin;

use super::action::Action;
use super::state::MountId;
use crate::config::DisplayConfig;

/// Core component trait
///
/// Components turn a slice of application state (their props) into an
/// `Element` tree. Views are pure functions of their props; all mutable
/// state lives in `AppState` and changes through the reducer.
pub trait Component: Send {
    type Props;

    fn view(&self, props: &Self::Props) -> Element;
}

/// Element in the virtual component tree
#[derive(Clone)]
pub enum Element {
    /// A widget rendered straight into the ratatui buffer
    Widget(Box<dyn ElementWidget>),

    Container {
        children: Vec<Element>,
        layout: ContainerLayout,
    },

    /// Groups children in the same area, drawn in order
    Fragment(Vec<Element>),

    /// Renders `overlay` on top of `base` (lightbox)
    Overlay {
        base: Box<Element>,
        overlay: Box<Element>,
    },

    None,
}

#[derive(Clone)]
pub enum ContainerLayout {
    Vertical(Vec<Constraint>),
    Horizontal(Vec<Constraint>),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Constraint {
    Length(u16),
    Min(u16),
    Max(u16),
    Percentage(u16),
    Ratio(u32, u32),
}

/// Side effects returned by the reducer
pub enum Effect {
    None,
    Batch(Vec<Effect>),
    Async(Pin<Box<dyn Future<Output = Action> + Send>>),
    /// Fetch a lottie payload for the player `key` of page `mount`
    FetchLottie {
        mount: MountId,
        key: String,
        path: String,
    },
}

impl std::fmt::Debug for Effect {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Effect::None => write!(f, "None"),
            Effect::Batch(effects) => f.debug_tuple("Batch").field(effects).finish(),
            Effect::Async(_) => write!(f, "Async(..)"),
            Effect::FetchLottie { mount, key, path } => f
                .debug_struct("FetchLottie")
                .field("mount", mount)
                .field("key", key)
                .field("path", path)
                .finish(),
        }
    }
}

/// Widgets that can sit in the `Element` tree
pub trait ElementWidget: Send + Sync {
    fn render(&self, area: Rect, buf: &mut Buffer, config: &DisplayConfig);

    fn clone_box(&self) -> Box<dyn ElementWidget>;

    /// Fixed height, if the widget has one
    fn preferred_height(&self) -> Option<u16> {
        None
    }
}

impl Clone for Box<dyn ElementWidget> {
    fn clone(&self) -> Self {
        self.clone_box()
    }
}

/// Helper to create a container with vertical layout
pub fn vertical<const N: usize>(constraints: [Constraint; N], children: Vec<Element>) -> Element {
    Element::Container {
        children,
        layout: ContainerLayout::Vertical(constraints.to_vec()),
    }
}

/// Helper to create a container with horizontal layout
pub fn horizontal<const N: usize>(constraints: [Constraint; N], children: Vec<Element>) -> Element {
    Element::Container {
        children,
        layout: ContainerLayout::Horizontal(constraints.to_vec()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Label;

    impl Component for Label {
        type Props = Option<&'static str>;

        fn view(&self, props: &Self::Props) -> Element {
            match props {
                Some(_) => Element::Fragment(Vec::new()),
                None => Element::None,
            }
        }
    }

    #[derive(Clone)]
    struct Blank;

    impl ElementWidget for Blank {
        fn render(&self, _area: Rect, _buf: &mut Buffer, _config: &DisplayConfig) {}

        fn clone_box(&self) -> Box<dyn ElementWidget> {
            Box::new(self.clone())
        }
    }

    #[test]
    fn test_view_depends_only_on_props() {
        assert!(matches!(Label.view(&None), Element::None));
        assert!(matches!(Label.view(&Some("x")), Element::Fragment(_)));
    }

    #[test]
    fn test_widget_defaults_and_clone() {
        let widget: Box<dyn ElementWidget> = Box::new(Blank);
        assert_eq!(widget.preferred_height(), None);
        let _cloned = widget.clone();
    }

    #[test]
    fn test_layout_helpers() {
        match vertical([Constraint::Length(2), Constraint::Min(0)], vec![Element::None, Element::None]) {
            Element::Container {
                children,
                layout: ContainerLayout::Vertical(constraints),
            } => {
                assert_eq!(children.len(), 2);
                assert_eq!(constraints, vec![Constraint::Length(2), Constraint::Min(0)]);
            }
            _ => panic!("Expected vertical container"),
        }

        assert!(matches!(
            horizontal([Constraint::Percentage(50)], vec![Element::None]),
            Element::Container {
                layout: ContainerLayout::Horizontal(_),
                ..
            }
        ));
    }

    #[test]
    fn test_effect_debug() {
        let effect = Effect::FetchLottie {
            mount: MountId(3),
            key: "s#1".to_string(),
            path: "/a.json".to_string(),
        };
        let text = format!("{:?}", effect);
        assert!(text.contains("FetchLottie"));
        assert!(text.contains("/a.json"));
    }
}
