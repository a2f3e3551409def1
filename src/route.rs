use std::fmt;
use std::str::FromStr;

use crate::error::RouteError;

/// Addressable views of the portfolio
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Route {
    #[default]
    Home,
    About,
    Resume,
    Redesigns,
    /// Case-study project by id
    Project(String),
    /// Company work history by company id
    Work(String),
}

impl Route {
    /// Navbar entries, in display order
    pub const NAVBAR: [(&'static str, Route); 3] = [
        ("Work", Route::Home),
        ("About", Route::About),
        ("Resume", Route::Resume),
    ];

    /// Detail routes get no spacer under the navbar
    pub fn is_detail(&self) -> bool {
        matches!(self, Route::Project(_) | Route::Work(_))
    }
}

impl FromStr for Route {
    type Err = RouteError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let path = s.trim().trim_matches('/');
        let (head, tail) = match path.split_once('/') {
            Some((head, tail)) => (head, Some(tail.trim_matches('/'))),
            None => (path, None),
        };

        match (head, tail) {
            ("" | "home", None) => Ok(Route::Home),
            ("about", None) => Ok(Route::About),
            ("resume", None) => Ok(Route::Resume),
            ("redesigns", None) => Ok(Route::Redesigns),
            ("project", Some(id)) if !id.is_empty() => Ok(Route::Project(id.to_string())),
            ("work", Some(id)) if !id.is_empty() => Ok(Route::Work(id.to_string())),
            ("project" | "work", _) => Err(RouteError::MissingId(head.to_string())),
            _ => Err(RouteError::Unknown(s.to_string())),
        }
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Route::Home => write!(f, "/"),
            Route::About => write!(f, "/about"),
            Route::Resume => write!(f, "/resume"),
            Route::Redesigns => write!(f, "/redesigns"),
            Route::Project(id) => write!(f, "/project/{}", id),
            Route::Work(id) => write!(f, "/work/{}", id),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_static_routes() {
        assert_eq!("".parse::<Route>(), Ok(Route::Home));
        assert_eq!("/".parse::<Route>(), Ok(Route::Home));
        assert_eq!("home".parse::<Route>(), Ok(Route::Home));
        assert_eq!("/about".parse::<Route>(), Ok(Route::About));
        assert_eq!("resume/".parse::<Route>(), Ok(Route::Resume));
        assert_eq!("redesigns".parse::<Route>(), Ok(Route::Redesigns));
    }

    #[test]
    fn test_parse_detail_routes() {
        assert_eq!(
            "project/atlas".parse::<Route>(),
            Ok(Route::Project("atlas".to_string()))
        );
        assert_eq!(
            "/work/northwind/".parse::<Route>(),
            Ok(Route::Work("northwind".to_string()))
        );
    }

    #[test]
    fn test_parse_errors() {
        assert_eq!(
            "work".parse::<Route>(),
            Err(RouteError::MissingId("work".to_string()))
        );
        assert_eq!(
            "admin".parse::<Route>(),
            Err(RouteError::Unknown("admin".to_string()))
        );
    }

    #[test]
    fn test_display_matches_parse() {
        for route in [
            Route::Home,
            Route::About,
            Route::Project("p1".to_string()),
            Route::Work("c1".to_string()),
        ] {
            assert_eq!(route.to_string().parse::<Route>(), Ok(route));
        }
    }
}
