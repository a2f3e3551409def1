use std::fs;
use std::path::Path;

use serde::de::DeserializeOwned;
use tracing::debug;

use super::model::{CompanyWork, Profile, Project};
use crate::error::ContentError;
use crate::route::Route;

const PROJECTS_FILE: &str = "projects.json";
const COMPANY_WORK_FILE: &str = "company_work.json";
const PROFILE_FILE: &str = "profile.json";

const BUNDLED_PROJECTS: &str = include_str!("../../content/projects.json");
const BUNDLED_COMPANY_WORK: &str = include_str!("../../content/company_work.json");
const BUNDLED_PROFILE: &str = include_str!("../../content/profile.json");

/// Number of columns the home grid distributes cards into
pub const HOME_COLUMNS: usize = 3;

/// All static content, loaded once at startup
#[derive(Debug, Clone, Default)]
pub struct ContentStore {
    pub projects: Vec<Project>,
    pub companies: Vec<CompanyWork>,
    pub profile: Profile,
}

/// A card on the home grid
#[derive(Debug, Clone, PartialEq)]
pub struct HomeCard {
    pub route: Route,
    pub title: String,
    /// Reveal tags: company, type for projects; company, role, period for companies
    pub tags: Vec<String>,
    pub cover: Option<String>,
}

fn parse<T: DeserializeOwned>(file: &str, json: &str) -> Result<T, ContentError> {
    serde_json::from_str(json).map_err(|source| ContentError::Json {
        file: file.to_string(),
        source,
    })
}

impl ContentStore {
    /// Content compiled into the binary
    pub fn bundled() -> Result<Self, ContentError> {
        Self::from_json(BUNDLED_PROJECTS, BUNDLED_COMPANY_WORK, Some(BUNDLED_PROFILE))
    }

    pub fn from_json(
        projects: &str,
        company_work: &str,
        profile: Option<&str>,
    ) -> Result<Self, ContentError> {
        let store = ContentStore {
            projects: parse(PROJECTS_FILE, projects)?,
            companies: parse(COMPANY_WORK_FILE, company_work)?,
            profile: match profile {
                Some(json) => parse(PROFILE_FILE, json)?,
                None => Profile::default(),
            },
        };
        debug!(
            "CONTENT: loaded {} projects, {} companies",
            store.projects.len(),
            store.companies.len()
        );
        Ok(store)
    }

    /// Load `projects.json`, `company_work.json` and an optional
    /// `profile.json` from a directory
    pub fn from_dir(dir: &Path) -> Result<Self, ContentError> {
        let read = |name: &str| {
            let path = dir.join(name);
            fs::read_to_string(&path).map_err(|source| ContentError::Io { path, source })
        };

        let projects = read(PROJECTS_FILE)?;
        let company_work = read(COMPANY_WORK_FILE)?;
        let profile = if dir.join(PROFILE_FILE).exists() {
            Some(read(PROFILE_FILE)?)
        } else {
            None
        };

        Self::from_json(&projects, &company_work, profile.as_deref())
    }

    pub fn project(&self, id: &str) -> Option<&Project> {
        self.projects.iter().find(|p| p.id == id)
    }

    /// Company by id, falling back to the first company
    pub fn company_or_first(&self, id: &str) -> Option<&CompanyWork> {
        self.companies
            .iter()
            .find(|c| c.company_id == id)
            .or_else(|| self.companies.first())
    }

    /// Projects that still carry an enabled legacy redesign
    pub fn redesigns(&self) -> Vec<&Project> {
        self.projects
            .iter()
            .filter(|p| p.legacy_redesign().is_some())
            .collect()
    }

    /// Company cards first, then project cards
    pub fn home_cards(&self) -> Vec<HomeCard> {
        let companies = self.companies.iter().map(|c| HomeCard {
            route: Route::Work(c.company_id.clone()),
            title: c.company_name.clone(),
            tags: [Some(&c.company_name), c.role.as_ref(), c.time_period.as_ref()]
                .into_iter()
                .flatten()
                .cloned()
                .collect(),
            cover: c.company_logo.clone(),
        });
        let projects = self.projects.iter().map(|p| HomeCard {
            route: Route::Project(p.id.clone()),
            title: p.title.clone(),
            tags: [Some(&p.title), p.company.as_ref(), p.kind.as_ref()]
                .into_iter()
                .flatten()
                .cloned()
                .collect(),
            cover: p.cover_image.clone(),
        });
        companies.chain(projects).collect()
    }
}

/// Distribute items round-robin into `columns` columns, keeping each item's
/// original index so the first items land at the top of every column
pub fn distribute_columns<T: Clone>(items: &[T], columns: usize) -> Vec<Vec<(usize, T)>> {
    let columns = columns.max(1);
    let mut out: Vec<Vec<(usize, T)>> = vec![Vec::new(); columns];
    for (index, item) in items.iter().enumerate() {
        out[index % columns].push((index, item.clone()));
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_bundled_content_loads() {
        let store = ContentStore::bundled().unwrap();
        assert!(!store.projects.is_empty());
        assert!(!store.companies.is_empty());
        assert!(!store.profile.name.is_empty());
    }

    #[test]
    fn test_company_lookup_falls_back_to_first() {
        let store = ContentStore::bundled().unwrap();
        let first = store.companies[0].company_id.clone();
        let found = store.company_or_first("no-such-company").unwrap();
        assert_eq!(found.company_id, first);
    }

    #[test]
    fn test_company_lookup_on_empty_store() {
        let store = ContentStore::default();
        assert!(store.company_or_first("anything").is_none());
    }

    #[test]
    fn test_home_cards_put_companies_first() {
        let store = ContentStore::bundled().unwrap();
        let cards = store.home_cards();
        assert_eq!(cards.len(), store.companies.len() + store.projects.len());
        assert!(matches!(cards[0].route, Route::Work(_)));
        assert!(matches!(cards.last().unwrap().route, Route::Project(_)));
    }

    #[test]
    fn test_distribute_columns_round_robin() {
        let items = vec!["a", "b", "c", "d", "e"];
        let columns = distribute_columns(&items, 3);

        assert_eq!(columns[0], vec![(0, "a"), (3, "d")]);
        assert_eq!(columns[1], vec![(1, "b"), (4, "e")]);
        assert_eq!(columns[2], vec![(2, "c")]);
    }

    #[test]
    fn test_malformed_json_reports_file() {
        let err = ContentStore::from_json("[", "[]", None).unwrap_err();
        assert!(err.to_string().contains("projects.json"));
    }

    #[test]
    fn test_from_dir_without_profile_uses_default() {
        let dir = tempfile::tempdir().unwrap();
        let mut projects = fs::File::create(dir.path().join(PROJECTS_FILE)).unwrap();
        write!(projects, r#"[{{"id": "p1", "title": "One", "sections": []}}]"#).unwrap();
        fs::write(dir.path().join(COMPANY_WORK_FILE), "[]").unwrap();

        let store = ContentStore::from_dir(dir.path()).unwrap();
        assert_eq!(store.projects.len(), 1);
        assert_eq!(store.profile, Profile::default());
    }

    #[test]
    fn test_from_dir_missing_file_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = ContentStore::from_dir(dir.path()).unwrap_err();
        assert!(matches!(err, ContentError::Io { .. }));
    }
}
