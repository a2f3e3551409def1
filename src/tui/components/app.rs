use crate::layout_constants::{
    BACK_TO_TOP_THRESHOLD, NAVBAR_HEIGHT, SIDE_NAV_WIDTH, STATUS_BAR_HEIGHT, STICKY_TABS_HEIGHT,
};
use crate::tui::component::{horizontal, vertical, Component, Constraint, Element};
use crate::tui::pages::{project::section_tabs, work::visible_media};
use crate::tui::state::{AppState, PageKind};

use super::{
    LightboxView, LightboxViewProps, Navbar, NavbarProps, PageOverlay, PageView, PageViewProps,
    SideNav, SideNavEntry, SideNavProps, StatusBar, StatusBarProps, TabBar, TabBarProps,
};

/// Root App component
///
/// Uses the global AppState as props and delegates rendering to child
/// components: navbar, sticky tabs (detail routes), page body with the
/// optional side nav, footer, and the lightbox on top when it is open.
pub struct App;

impl Component for App {
    type Props = AppState;

    fn view(&self, props: &Self::Props) -> Element {
        let tabs_height = if props.route.is_detail() { STICKY_TABS_HEIGHT } else { 0 };

        let root = vertical(
            [
                Constraint::Length(NAVBAR_HEIGHT),
                Constraint::Length(tabs_height),
                Constraint::Min(0),
                Constraint::Length(STATUS_BAR_HEIGHT),
            ],
            vec![
                Navbar.view(&NavbarProps {
                    handle: props.content.profile.handle.clone(),
                    route: props.route.clone(),
                }),
                if props.route.is_detail() {
                    TabBar.view(&tab_bar_props(props))
                } else {
                    Element::None
                },
                self.render_body(props),
                StatusBar.view(&StatusBarProps {
                    year: props.year,
                    name: props.content.profile.name.clone(),
                    show_back_to_top: props.page.scroll.viewport.offset() > BACK_TO_TOP_THRESHOLD,
                    message: props.status_message.clone(),
                }),
            ],
        );

        let lightbox = &props.page.lightbox;
        if !lightbox.is_open() {
            return root;
        }
        Element::Overlay {
            base: Box::new(root),
            overlay: Box::new(LightboxView.view(&LightboxViewProps {
                media: lightbox.media().to_vec(),
                current: lightbox.current(),
                asset_base: props.config.asset_base_url.clone(),
            })),
        }
    }
}

impl App {
    fn render_body(&self, state: &AppState) -> Element {
        let page = PageView.view(&page_view_props(state));
        if !state.shows_side_nav() {
            return page;
        }
        horizontal(
            [Constraint::Min(0), Constraint::Length(SIDE_NAV_WIDTH)],
            vec![page, SideNav.view(&side_nav_props(state))],
        )
    }
}

/// Visible document lines plus the frames of lottie players in view
pub fn page_view_props(state: &AppState) -> PageViewProps {
    let page = &state.page;
    let viewport = &page.scroll.viewport;
    let offset = i32::from(viewport.offset());

    let overlays = page
        .document
        .lottie_slots
        .iter()
        .filter(|slot| viewport.is_range_visible(slot.top, slot.height))
        .filter_map(|slot| {
            let player = page.lotties.get(&slot.key)?;
            Some(PageOverlay {
                row: i32::from(slot.top) - offset,
                left: slot.left,
                lines: player.frame_lines(slot.width, slot.height, None, &state.display),
            })
        })
        .collect();

    PageViewProps {
        lines: page.document.visible_lines(viewport),
        overlays,
        width: page.document.width,
    }
}

fn tab_bar_props(state: &AppState) -> TabBarProps {
    match &state.page.kind {
        PageKind::Work { nav, .. } => {
            let tabs = nav.tabs();
            let active = nav.active_tab().and_then(|t| tabs.iter().position(|tab| *tab == t));
            TabBarProps {
                labels: tabs.iter().map(|tab| tab.tag().to_string()).collect(),
                active,
            }
        }
        PageKind::Project {
            project_id,
            sections,
        } => {
            let tabs = state
                .content
                .project(project_id)
                .map(section_tabs)
                .unwrap_or_default();
            let active = sections
                .active()
                .and_then(|id| tabs.iter().position(|(anchor, _)| anchor == id));
            TabBarProps {
                labels: tabs.into_iter().map(|(_, title)| title).collect(),
                active,
            }
        }
        _ => TabBarProps::default(),
    }
}

fn side_nav_props(state: &AppState) -> SideNavProps {
    let PageKind::Work { company_id, nav } = &state.page.kind else {
        return SideNavProps::default();
    };
    let (Some(company), Some(tab)) = (state.content.company_or_first(company_id), nav.active_tab())
    else {
        return SideNavProps::default();
    };

    SideNavProps {
        heading: tab.tag().to_string(),
        entries: company
            .projects_for(tab)
            .iter()
            .map(|project| SideNavEntry {
                title: project.title.clone(),
                media_count: visible_media(tab, project).len(),
                active: nav.active_project() == Some(project.id.as_str()),
            })
            .collect(),
    }
}
