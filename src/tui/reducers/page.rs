//! Mounting routes and laying pages out

use tracing::debug;

use crate::content::Project;
use crate::route::Route;
use crate::tui::blocks::lottie::LottiePlayer;
use crate::tui::document::{AnchorKind, Viewport};
use crate::tui::navigator::{NavigationController, SectionNavigator};
use crate::tui::pages::{self, LayoutContext, PageLayout};
use crate::tui::state::{AppState, MountId, PageKind, PageState};

/// Replace the mounted page with a fresh one for `route`
///
/// Unknown projects fall back to the home route and unknown companies to the
/// first company. The previous page is dropped here, which releases its
/// observer registrations and any scroll lock its lightbox held.
pub fn mount_route(state: &mut AppState, route: Route) {
    let content = state.content.clone();
    let window = state.config.navigation.suppression_window();
    state.status_message = None;

    let (route, kind) = match route {
        Route::Project(id) => match content.project(&id) {
            Some(project) => {
                let sections = section_ids(project);
                (
                    Route::Project(id.clone()),
                    PageKind::Project {
                        project_id: id,
                        sections: SectionNavigator::new(sections).with_window(window),
                    },
                )
            }
            None => {
                debug!("ROUTE: unknown project {}, showing home", id);
                state.status_message = Some(format!("No project named \"{}\"", id));
                home_kind(state)
            }
        },
        Route::Work(id) => match content.company_or_first(&id) {
            Some(company) => {
                if company.company_id != id {
                    debug!("ROUTE: unknown company {}, showing {}", id, company.company_id);
                }
                (
                    Route::Work(company.company_id.clone()),
                    PageKind::Work {
                        company_id: company.company_id.clone(),
                        nav: NavigationController::new(company).with_window(window),
                    },
                )
            }
            None => home_kind(state),
        },
        Route::Home => home_kind(state),
        Route::About => (Route::About, PageKind::About),
        Route::Resume => (Route::Resume, PageKind::Resume),
        Route::Redesigns => (Route::Redesigns, PageKind::Redesigns),
    };

    state.next_mount += 1;
    let mount = MountId(state.next_mount);
    debug!("ROUTE: mounting {} as {:?}", route, mount);

    let mut page = PageState::new(mount, kind, state.band(), state.scroll_lock.clone());
    observe_anchors(&mut page);

    state.route = route;
    state.page = page;
    relayout(state);
}

fn home_kind(state: &AppState) -> (Route, PageKind) {
    (
        Route::Home,
        PageKind::Home {
            cards: state.content.home_cards(),
            selected: 0,
        },
    )
}

fn section_ids(project: &Project) -> Vec<String> {
    project.sections().iter().map(|s| s.anchor_id()).collect()
}

/// Register every anchor the page's navigator arbitrates over
fn observe_anchors(page: &mut PageState) {
    let targets: Vec<(String, AnchorKind)> = match &page.kind {
        PageKind::Project { sections, .. } => sections
            .sections()
            .iter()
            .map(|id| (id.clone(), AnchorKind::Section))
            .collect(),
        PageKind::Work { nav, .. } => nav
            .tabs()
            .into_iter()
            .flat_map(|tab| {
                std::iter::once((tab.anchor_id(), AnchorKind::Platform)).chain(
                    nav.projects_of(tab)
                        .iter()
                        .map(|id| (id.clone(), AnchorKind::Project)),
                )
            })
            .collect(),
        _ => Vec::new(),
    };
    for (id, kind) in targets {
        let subscription = page.observer.observe(id, kind);
        page.subscriptions.push(subscription);
    }
}

/// Lay the mounted page out for the current size, theme and selection
pub fn layout_for(state: &AppState) -> PageLayout {
    let content = &state.content;
    let ctx = LayoutContext {
        width: state.content_width(),
        asset_base: &state.config.asset_base_url,
        display: &state.display,
    };

    match &state.page.kind {
        PageKind::Home { cards, selected } => pages::home::layout(cards, *selected, &ctx),
        PageKind::About => pages::profile::about(&content.profile, &ctx),
        PageKind::Resume => pages::profile::resume(&content.profile, &ctx),
        PageKind::Redesigns => pages::redesigns::layout(&content.redesigns(), &ctx),
        PageKind::Project { project_id, .. } => content
            .project(project_id)
            .map(|p| pages::project::layout(p, &ctx))
            .unwrap_or_default(),
        PageKind::Work { company_id, .. } => content
            .company_or_first(company_id)
            .map(|c| pages::work::layout(c, &ctx))
            .unwrap_or_default(),
    }
}

/// Rebuild the document and keep the scroll position and players
pub fn relayout(state: &mut AppState) {
    let layout = layout_for(state);
    let speed = state.config.lottie.effective_speed();
    let height = state.viewport_height();
    let page = &mut state.page;

    for spec in layout.lotties {
        page.lotties
            .entry(spec.key)
            .or_insert_with(|| LottiePlayer::new(spec.source, speed));
    }
    page.scroll.viewport = Viewport::new(
        page.scroll.viewport.offset(),
        height,
        layout.document.height(),
    );
    page.document = layout.document;
}
