//! Scroll-synchronized navigation state
//!
//! Two sources move the active tab/project: passive visibility changes from
//! the observer, and explicit jumps from the keyboard. A jump wins for the
//! length of the suppression window; visibility changes that arrive inside
//! it are received and dropped.

use std::time::{Duration, Instant};
use tracing::debug;

use super::document::AnchorKind;
use super::observer::VisibilityChange;
use crate::content::{CompanyWork, Platform};

/// Default suppression window after a jump
pub const SUPPRESSION_WINDOW: Duration = Duration::from_millis(800);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Suppression {
    #[default]
    Passive,
    Suppressed { expires_at: Instant },
}

impl Suppression {
    pub fn until(now: Instant, window: Duration) -> Self {
        Suppression::Suppressed {
            expires_at: now + window,
        }
    }

    /// Lapse the window if it is due; returns whether updates are still ignored
    pub fn check(&mut self, now: Instant) -> bool {
        match *self {
            Suppression::Passive => false,
            Suppression::Suppressed { expires_at } if now >= expires_at => {
                debug!("NAV: suppression lapsed");
                *self = Suppression::Passive;
                false
            }
            Suppression::Suppressed { .. } => true,
        }
    }

    pub fn is_suppressed(&self, now: Instant) -> bool {
        matches!(*self, Suppression::Suppressed { expires_at } if now < expires_at)
    }
}

/// Where a jump wants the page to scroll
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JumpTarget {
    pub anchor_id: String,
}

/// Active (tab, project) pair of a company work page
#[derive(Debug, Clone)]
pub struct NavigationController {
    groups: Vec<(Platform, Vec<String>)>,
    active_tab: Option<Platform>,
    active_project: Option<String>,
    suppression: Suppression,
    window: Duration,
}

impl NavigationController {
    /// First tab with projects, first project of it
    pub fn new(company: &CompanyWork) -> Self {
        let mut controller = Self {
            groups: Vec::new(),
            active_tab: None,
            active_project: None,
            suppression: Suppression::Passive,
            window: SUPPRESSION_WINDOW,
        };
        controller.load_groups(company);
        controller.active_tab = controller.tabs().first().copied();
        controller.active_project = controller
            .active_tab
            .and_then(|tab| controller.first_project_of(tab));
        controller
    }

    pub fn with_window(mut self, window: Duration) -> Self {
        self.window = window;
        self
    }

    fn load_groups(&mut self, company: &CompanyWork) {
        self.groups = company
            .tabs()
            .into_iter()
            .map(|tab| {
                let ids = company
                    .projects_for(tab)
                    .iter()
                    .map(|p| p.id.clone())
                    .collect();
                (tab, ids)
            })
            .collect();
    }

    pub fn tabs(&self) -> Vec<Platform> {
        self.groups.iter().map(|(tab, _)| *tab).collect()
    }

    pub fn active_tab(&self) -> Option<Platform> {
        self.active_tab
    }

    pub fn active_project(&self) -> Option<&str> {
        self.active_project.as_deref()
    }

    pub fn suppression(&self) -> Suppression {
        self.suppression
    }

    pub fn projects_of(&self, tab: Platform) -> &[String] {
        self.groups
            .iter()
            .find(|(t, _)| *t == tab)
            .map(|(_, ids)| ids.as_slice())
            .unwrap_or(&[])
    }

    fn first_project_of(&self, tab: Platform) -> Option<String> {
        self.projects_of(tab).first().cloned()
    }

    fn owner_of(&self, project_id: &str) -> Option<Platform> {
        self.groups
            .iter()
            .find(|(_, ids)| ids.iter().any(|id| id == project_id))
            .map(|(tab, _)| *tab)
    }

    fn tab_for_anchor(&self, anchor_id: &str) -> Option<Platform> {
        self.tabs().into_iter().find(|t| t.anchor_id() == anchor_id)
    }

    /// Jump to a project anywhere on the page
    pub fn jump_to_project(&mut self, id: &str, now: Instant) -> Option<JumpTarget> {
        let Some(owner) = self.owner_of(id) else {
            debug!("NAV: jump to unknown project {} ignored", id);
            return None;
        };
        debug!("NAV: jump to project {} ({})", id, owner.tag());
        self.suppression = Suppression::until(now, self.window);
        self.active_tab = Some(owner);
        self.active_project = Some(id.to_string());
        Some(JumpTarget {
            anchor_id: id.to_string(),
        })
    }

    /// Jump to a platform group; its first project becomes active
    pub fn jump_to_tab(&mut self, tab: Platform, now: Instant) -> Option<JumpTarget> {
        let first = self.first_project_of(tab)?;
        debug!("NAV: jump to tab {}", tab.tag());
        self.suppression = Suppression::until(now, self.window);
        self.active_tab = Some(tab);
        self.active_project = Some(first);
        Some(JumpTarget {
            anchor_id: tab.anchor_id(),
        })
    }

    /// Apply a batch of observer changes; returns whether the state moved
    pub fn on_visibility(&mut self, changes: &[VisibilityChange], now: Instant) -> bool {
        if self.suppression.check(now) {
            if !changes.is_empty() {
                debug!("NAV: {} visibility change(s) discarded while suppressed", changes.len());
            }
            return false;
        }

        let before = (self.active_tab, self.active_project.clone());
        for change in changes.iter().filter(|c| c.visible) {
            match change.kind {
                AnchorKind::Platform => {
                    if let Some(tab) = self.tab_for_anchor(&change.id) {
                        self.active_tab = Some(tab);
                        let owned = self
                            .active_project
                            .as_deref()
                            .is_some_and(|p| self.projects_of(tab).iter().any(|id| id == p));
                        if !owned {
                            self.active_project = self.first_project_of(tab);
                        }
                    }
                }
                AnchorKind::Project => {
                    if let Some(owner) = self.owner_of(&change.id) {
                        self.active_tab = Some(owner);
                        self.active_project = Some(change.id.clone());
                    }
                }
                AnchorKind::Section => {}
            }
        }
        (self.active_tab, self.active_project.clone()) != before
    }

    /// Restore the invariants against (possibly changed) company data
    pub fn reconcile(&mut self, company: &CompanyWork, now: Instant) {
        self.load_groups(company);
        let tabs = self.tabs();

        match self.active_tab {
            Some(tab) if tabs.contains(&tab) => {}
            _ => {
                self.active_tab = tabs.first().copied();
                self.active_project = self.active_tab.and_then(|t| self.first_project_of(t));
            }
        }

        let Some(tab) = self.active_tab else {
            self.active_project = None;
            return;
        };
        if self.projects_of(tab).is_empty() {
            self.active_project = None;
            return;
        }

        // A jump may leave the pair inconsistent for the length of the window
        if self.suppression.is_suppressed(now) {
            return;
        }
        let in_tab = self
            .active_project
            .as_deref()
            .is_some_and(|p| self.projects_of(tab).iter().any(|id| id == p));
        if !in_tab {
            match self.active_project.as_deref().and_then(|p| self.owner_of(p)) {
                Some(owner) => self.active_tab = Some(owner),
                None => self.active_project = self.first_project_of(tab),
            }
        }
    }

    /// Tab after (or before) the active one, wrapping
    pub fn adjacent_tab(&self, forward: bool) -> Option<Platform> {
        let tabs = self.tabs();
        let current = self
            .active_tab
            .and_then(|t| tabs.iter().position(|x| *x == t))?;
        let len = tabs.len();
        let next = if forward { (current + 1) % len } else { (current + len - 1) % len };
        tabs.get(next).copied()
    }

    /// Project after (or before) the active one in page order, clamped at the ends
    pub fn adjacent_project(&self, forward: bool) -> Option<String> {
        let all: Vec<&String> = self.groups.iter().flat_map(|(_, ids)| ids).collect();
        let current = self
            .active_project
            .as_deref()
            .and_then(|p| all.iter().position(|id| id.as_str() == p));
        let index = match (current, forward) {
            (None, _) => 0,
            (Some(i), true) => (i + 1).min(all.len().saturating_sub(1)),
            (Some(i), false) => i.saturating_sub(1),
        };
        all.get(index).map(|id| id.to_string())
    }
}

/// The same arbitration over the sections of a case-study page
#[derive(Debug, Clone)]
pub struct SectionNavigator {
    sections: Vec<String>,
    active: Option<String>,
    suppression: Suppression,
    window: Duration,
}

impl SectionNavigator {
    pub fn new(sections: Vec<String>) -> Self {
        let active = sections.first().cloned();
        Self {
            sections,
            active,
            suppression: Suppression::Passive,
            window: SUPPRESSION_WINDOW,
        }
    }

    pub fn with_window(mut self, window: Duration) -> Self {
        self.window = window;
        self
    }

    pub fn sections(&self) -> &[String] {
        &self.sections
    }

    pub fn active(&self) -> Option<&str> {
        self.active.as_deref()
    }

    pub fn jump_to(&mut self, id: &str, now: Instant) -> Option<JumpTarget> {
        if !self.sections.iter().any(|s| s == id) {
            return None;
        }
        debug!("NAV: jump to section {}", id);
        self.suppression = Suppression::until(now, self.window);
        self.active = Some(id.to_string());
        Some(JumpTarget {
            anchor_id: id.to_string(),
        })
    }

    pub fn on_visibility(&mut self, changes: &[VisibilityChange], now: Instant) -> bool {
        if self.suppression.check(now) {
            return false;
        }
        let before = self.active.clone();
        for change in changes {
            if change.visible
                && change.kind == AnchorKind::Section
                && self.sections.contains(&change.id)
            {
                self.active = Some(change.id.clone());
            }
        }
        self.active != before
    }

    /// Section after (or before) the active one, wrapping
    pub fn adjacent(&self, forward: bool) -> Option<String> {
        let len = self.sections.len();
        if len == 0 {
            return None;
        }
        let current = self
            .active
            .as_deref()
            .and_then(|a| self.sections.iter().position(|s| s == a))
            .unwrap_or(0);
        let next = if forward { (current + 1) % len } else { (current + len - 1) % len };
        self.sections.get(next).cloned()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::WorkProject;
    use std::collections::HashMap;

    fn work_project(id: &str) -> WorkProject {
        WorkProject {
            id: id.to_string(),
            title: id.to_uppercase(),
            problem_statement: None,
            solution: None,
            achievements: None,
            task: None,
            media: Vec::new(),
        }
    }

    fn company(platforms: &[(&str, &[&str])]) -> CompanyWork {
        let projects: HashMap<String, Vec<WorkProject>> = platforms
            .iter()
            .map(|(tag, ids)| (tag.to_string(), ids.iter().map(|id| work_project(id)).collect()))
            .collect();
        CompanyWork {
            company_id: "acme".to_string(),
            company_name: "Acme".to_string(),
            company_description: None,
            company_type: None,
            role: None,
            time_period: None,
            company_logo: None,
            company_favicon: None,
            projects,
        }
    }

    fn ios_only() -> CompanyWork {
        company(&[("iOS", &["i1", "i2", "i3"])])
    }

    #[test]
    fn test_initial_state_is_first_tab_and_project() {
        let nav = NavigationController::new(&company(&[("Android", &["a1"]), ("Web", &["w1", "w2"])]));
        assert_eq!(nav.tabs(), vec![Platform::Web, Platform::Android]);
        assert_eq!(nav.active_tab(), Some(Platform::Web));
        assert_eq!(nav.active_project(), Some("w1"));
    }

    #[test]
    fn test_initial_state_without_projects() {
        let nav = NavigationController::new(&company(&[]));
        assert_eq!(nav.active_tab(), None);
        assert_eq!(nav.active_project(), None);
    }

    #[test]
    fn test_jump_holds_through_suppression_window() {
        let start = Instant::now();
        let mut nav = NavigationController::new(&ios_only());
        assert_eq!(nav.active_tab(), Some(Platform::Ios));
        assert_eq!(nav.active_project(), Some("i1"));

        let target = nav.jump_to_project("i3", start).unwrap();
        assert_eq!(target.anchor_id, "i3");
        assert_eq!(nav.active_project(), Some("i3"));

        // Observer still reports the first project mid-scroll
        let stale = vec![VisibilityChange::entered("i1", AnchorKind::Project)];
        for ms in [0, 100, 400, 799] {
            assert!(!nav.on_visibility(&stale, start + Duration::from_millis(ms)));
            assert_eq!(nav.active_project(), Some("i3"));
        }

        let after = start + Duration::from_millis(800);
        nav.on_visibility(&[], after);
        assert_eq!(nav.active_project(), Some("i3"));
        assert_eq!(nav.suppression(), Suppression::Passive);
    }

    #[test]
    fn test_observer_resumes_after_window() {
        let start = Instant::now();
        let mut nav = NavigationController::new(&ios_only());
        nav.jump_to_project("i3", start);

        let change = vec![VisibilityChange::entered("i2", AnchorKind::Project)];
        assert!(nav.on_visibility(&change, start + Duration::from_millis(801)));
        assert_eq!(nav.active_project(), Some("i2"));
    }

    #[test]
    fn test_jump_to_tab_selects_its_first_project() {
        let now = Instant::now();
        let mut nav = NavigationController::new(&company(&[("Web", &["w1"]), ("Android", &["a1", "a2"])]));

        let target = nav.jump_to_tab(Platform::Android, now).unwrap();
        assert_eq!(target.anchor_id, "platform-android");
        assert_eq!(nav.active_tab(), Some(Platform::Android));
        assert_eq!(nav.active_project(), Some("a1"));
    }

    #[test]
    fn test_jumps_to_unknown_targets_are_noops() {
        let now = Instant::now();
        let mut nav = NavigationController::new(&ios_only());

        assert!(nav.jump_to_project("nope", now).is_none());
        assert!(nav.jump_to_tab(Platform::Web, now).is_none());
        assert_eq!(nav.active_project(), Some("i1"));
        assert_eq!(nav.suppression(), Suppression::Passive);
    }

    #[test]
    fn test_passive_platform_and_project_in_one_batch() {
        let now = Instant::now();
        let mut nav = NavigationController::new(&company(&[("Web", &["w1"]), ("iOS", &["i1", "i2"])]));

        let batch = vec![
            VisibilityChange::entered("platform-ios", AnchorKind::Platform),
            VisibilityChange::entered("i2", AnchorKind::Project),
        ];
        assert!(nav.on_visibility(&batch, now));
        assert_eq!(nav.active_tab(), Some(Platform::Ios));
        assert_eq!(nav.active_project(), Some("i2"));
    }

    #[test]
    fn test_platform_entry_keeps_project_invariant() {
        let now = Instant::now();
        let mut nav = NavigationController::new(&company(&[("Web", &["w1"]), ("iOS", &["i1"])]));

        nav.on_visibility(&[VisibilityChange::entered("platform-ios", AnchorKind::Platform)], now);
        assert_eq!(nav.active_tab(), Some(Platform::Ios));
        assert_eq!(nav.active_project(), Some("i1"));
    }

    #[test]
    fn test_leaving_changes_are_ignored() {
        let now = Instant::now();
        let mut nav = NavigationController::new(&ios_only());
        let leaving = VisibilityChange {
            id: "i1".to_string(),
            kind: AnchorKind::Project,
            visible: false,
        };
        assert!(!nav.on_visibility(&[leaving], now));
    }

    #[test]
    fn test_reconcile_falls_back_to_first_valid_tab() {
        let now = Instant::now();
        let mut nav = NavigationController::new(&company(&[("Web", &["w1"]), ("iOS", &["i1"])]));
        nav.jump_to_tab(Platform::Ios, now);

        nav.reconcile(&company(&[("Web", &["w1"]), ("iOS", &[])]), now);
        assert_eq!(nav.active_tab(), Some(Platform::Web));
        assert_eq!(nav.active_project(), Some("w1"));
    }

    #[test]
    fn test_reconcile_with_no_tabs_clears_state() {
        let now = Instant::now();
        let mut nav = NavigationController::new(&ios_only());
        nav.reconcile(&company(&[]), now);
        assert_eq!(nav.active_tab(), None);
        assert_eq!(nav.active_project(), None);
    }

    #[test]
    fn test_reconcile_drops_vanished_project() {
        let now = Instant::now();
        let mut nav = NavigationController::new(&company(&[("Web", &["w1", "w2"])]));
        nav.jump_to_project("w2", now);

        let later = now + Duration::from_secs(1);
        nav.reconcile(&company(&[("Web", &["w1"])]), later);
        assert_eq!(nav.active_project(), Some("w1"));
    }

    #[test]
    fn test_adjacent_tab_wraps() {
        let nav = NavigationController::new(&company(&[("Web", &["w1"]), ("Website", &["s1"])]));
        assert_eq!(nav.adjacent_tab(true), Some(Platform::Website));
        assert_eq!(nav.adjacent_tab(false), Some(Platform::Website));
    }

    #[test]
    fn test_adjacent_project_crosses_groups() {
        let now = Instant::now();
        let mut nav = NavigationController::new(&company(&[("Web", &["w1"]), ("iOS", &["i1"])]));
        assert_eq!(nav.adjacent_project(true).as_deref(), Some("i1"));
        nav.jump_to_project("i1", now);
        assert_eq!(nav.adjacent_project(true).as_deref(), Some("i1"));
        assert_eq!(nav.adjacent_project(false).as_deref(), Some("w1"));
    }

    #[test]
    fn test_section_navigator_arbitration() {
        let start = Instant::now();
        let mut sections = SectionNavigator::new(vec!["intro".into(), "research".into(), "outcome".into()]);
        assert_eq!(sections.active(), Some("intro"));

        sections.jump_to("outcome", start);
        let stale = vec![VisibilityChange::entered("research", AnchorKind::Section)];
        assert!(!sections.on_visibility(&stale, start + Duration::from_millis(500)));
        assert_eq!(sections.active(), Some("outcome"));

        assert!(sections.on_visibility(&stale, start + Duration::from_millis(900)));
        assert_eq!(sections.active(), Some("research"));
        assert!(sections.jump_to("missing", start).is_none());
    }

    #[test]
    fn test_section_adjacent_wraps() {
        let sections = SectionNavigator::new(vec!["a".into(), "b".into()]);
        assert_eq!(sections.adjacent(false).as_deref(), Some("b"));
        assert_eq!(SectionNavigator::new(Vec::new()).adjacent(true), None);
    }

    #[test]
    fn test_custom_window() {
        let start = Instant::now();
        let mut nav = NavigationController::new(&ios_only()).with_window(Duration::from_millis(100));
        nav.jump_to_project("i2", start);
        let change = vec![VisibilityChange::entered("i1", AnchorKind::Project)];
        assert!(nav.on_visibility(&change, start + Duration::from_millis(100)));
    }
}
