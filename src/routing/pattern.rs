use std::fmt::{self, Display, Formatter};
use std::str::FromStr;

use thiserror::Error;

use super::params::{decode, encode};
use super::{LinkError, Params, Path};

/// Constraints accepted after a parameter name that turn it into a wildcard.
const WILDCARD_SUFFIXES: [&str; 2] = ["(.*)*", "(.*)"];

#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum PatternError {
    #[error("pattern must start with '/'")]
    MissingLeadingSlash,
    #[error("invalid parameter name {0:?}")]
    InvalidParamName(String),
    #[error("duplicate parameter {0:?}")]
    DuplicateParam(String),
    #[error("wildcard parameter {0:?} must be the last segment")]
    WildcardNotLast(String),
    #[error("unsupported parameter constraint {0:?}")]
    UnsupportedConstraint(String),
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Segment {
    /// A literal segment.
    Static(String),
    /// `:name`, binding exactly one segment.
    Param(String),
    /// `:name(.*)`, binding the rest of the path.
    Wildcard(String),
}

impl Segment {
    fn parse(s: &str) -> Result<Self, PatternError> {
        let name = match s.strip_prefix(':') {
            Some(name) => name,
            None => return Ok(Self::Static(s.to_owned())),
        };

        for suffix in WILDCARD_SUFFIXES {
            if let Some(name) = name.strip_suffix(suffix) {
                return Ok(Self::Wildcard(param_name(name)?));
            }
        }

        if let Some(pos) = name.find('(') {
            return Err(PatternError::UnsupportedConstraint(name[pos..].to_owned()));
        }

        Ok(Self::Param(param_name(name)?))
    }
}

fn param_name(name: &str) -> Result<String, PatternError> {
    if name.is_empty() || !name.chars().all(|c| c.is_ascii_alphanumeric() || c == '_') {
        Err(PatternError::InvalidParamName(name.to_owned()))
    } else {
        Ok(name.to_owned())
    }
}

/// A parsed path pattern, e.g. `/competition/:competition_id`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Pattern {
    source: String,
    segments: Vec<Segment>,
}

impl Pattern {
    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    /// Returns `true` if this pattern matches every path.
    pub fn is_catch_all(&self) -> bool {
        matches!(self.segments.as_slice(), [Segment::Wildcard(_)])
    }

    /// Matches `path` against the pattern, returning the bound parameters on success.
    pub fn matches(&self, path: &Path) -> Option<Params> {
        let parts = path.segments();
        let mut params = Params::new();

        for (index, segment) in self.segments.iter().enumerate() {
            match segment {
                Segment::Static(lit) => {
                    if !parts.get(index)?.eq_ignore_ascii_case(lit) {
                        return None;
                    }
                }
                Segment::Param(name) => {
                    let part = parts.get(index)?;
                    params.insert(name, decode(part));
                }
                Segment::Wildcard(name) => {
                    let rest: Vec<_> = parts
                        .get(index..)
                        .unwrap_or_default()
                        .iter()
                        .map(|part| decode(part))
                        .collect();

                    params.insert(name, rest.join("/"));
                    return Some(params);
                }
            }
        }

        if parts.len() == self.segments.len() {
            Some(params)
        } else {
            None
        }
    }

    /// Renders the pattern into a concrete path using `params`.
    pub(super) fn render(&self, route: &str, params: &Params) -> Result<String, LinkError> {
        let mut path = String::new();

        for segment in &self.segments {
            let lookup = |name: &str| {
                params.get(name).ok_or_else(|| LinkError::MissingParam {
                    route: route.to_owned(),
                    param: name.to_owned(),
                })
            };

            match segment {
                Segment::Static(lit) => {
                    path.push('/');
                    path.push_str(lit);
                }
                Segment::Param(name) => {
                    path.push('/');
                    path.push_str(&encode(lookup(name)?));
                }
                Segment::Wildcard(name) => {
                    for part in lookup(name)?.split('/').filter(|s| !s.is_empty()) {
                        path.push('/');
                        path.push_str(&encode(part));
                    }
                }
            }
        }

        if path.is_empty() {
            path.push('/');
        }

        Ok(path)
    }
}

impl FromStr for Pattern {
    type Err = PatternError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if !s.starts_with('/') {
            return Err(PatternError::MissingLeadingSlash);
        }

        let mut segments: Vec<Segment> = Vec::new();
        for part in s.split('/').filter(|s| !s.is_empty()) {
            if let Some(Segment::Wildcard(name)) = segments.last() {
                return Err(PatternError::WildcardNotLast(name.clone()));
            }

            let segment = Segment::parse(part)?;

            if let Segment::Param(name) | Segment::Wildcard(name) = &segment {
                let duplicate = segments.iter().any(|s| {
                    matches!(s, Segment::Param(other) | Segment::Wildcard(other) if other == name)
                });

                if duplicate {
                    return Err(PatternError::DuplicateParam(name.clone()));
                }
            }

            segments.push(segment);
        }

        Ok(Self {
            source: s.to_owned(),
            segments,
        })
    }
}

impl Display for Pattern {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(&self.source)
    }
}

#[cfg(test)]
mod tests {
    use super::{Pattern, PatternError, Segment};
    use crate::routing::{LinkError, Params, Path};

    fn pattern(s: &str) -> Pattern {
        s.parse().unwrap()
    }

    #[test]
    fn test_pattern_parse() {
        assert!(pattern("/").segments().is_empty());

        assert_eq!(
            pattern("/competition/:competition_id").segments(),
            [
                Segment::Static(String::from("competition")),
                Segment::Param(String::from("competition_id")),
            ]
        );

        assert_eq!(
            pattern("/:catchall(.*)").segments(),
            [Segment::Wildcard(String::from("catchall"))]
        );
        assert_eq!(
            pattern("/docs/:rest(.*)*").segments(),
            [
                Segment::Static(String::from("docs")),
                Segment::Wildcard(String::from("rest")),
            ]
        );

        assert!(pattern("/:catchall(.*)").is_catch_all());
        assert!(!pattern("/docs/:rest(.*)").is_catch_all());
        assert!(!pattern("/:id").is_catch_all());
    }

    #[test]
    fn test_pattern_parse_errors() {
        assert_eq!(
            "mypage".parse::<Pattern>(),
            Err(PatternError::MissingLeadingSlash)
        );
        assert_eq!(
            "/player/:".parse::<Pattern>(),
            Err(PatternError::InvalidParamName(String::new()))
        );
        assert_eq!(
            "/player/:player-id".parse::<Pattern>(),
            Err(PatternError::InvalidParamName(String::from("player-id")))
        );
        assert_eq!(
            "/:id/:id".parse::<Pattern>(),
            Err(PatternError::DuplicateParam(String::from("id")))
        );
        assert_eq!(
            "/:rest(.*)/tail".parse::<Pattern>(),
            Err(PatternError::WildcardNotLast(String::from("rest")))
        );
        assert_eq!(
            "/player/:id(\\d+)".parse::<Pattern>(),
            Err(PatternError::UnsupportedConstraint(String::from("(\\d+)")))
        );
    }

    #[test]
    fn test_pattern_matches_static() {
        let p = pattern("/organizer/players");

        assert_eq!(p.matches(&Path::new("/organizer/players")), Some(Params::new()));
        assert_eq!(p.matches(&Path::new("/Organizer/PLAYERS/")), Some(Params::new()));
        assert_eq!(p.matches(&Path::new("/organizer")), None);
        assert_eq!(p.matches(&Path::new("/organizer/players/1")), None);

        let root = pattern("/");
        assert_eq!(root.matches(&Path::new("/")), Some(Params::new()));
        assert_eq!(root.matches(&Path::new("/mypage")), None);
    }

    #[test]
    fn test_pattern_matches_param() {
        let p = pattern("/player/:player_id");

        let params = p.matches(&Path::new("/player/7")).unwrap();
        assert_eq!(params.get("player_id"), Some("7"));

        let params = p.matches(&Path::new("/player/a%20b?tab=score")).unwrap();
        assert_eq!(params.get("player_id"), Some("a b"));

        assert_eq!(p.matches(&Path::new("/player")), None);
        assert_eq!(p.matches(&Path::new("/player/7/score")), None);
    }

    #[test]
    fn test_pattern_matches_wildcard() {
        let p = pattern("/:catchall(.*)");

        let params = p.matches(&Path::new("/")).unwrap();
        assert_eq!(params.get("catchall"), Some(""));

        let params = p.matches(&Path::new("/no/such/page")).unwrap();
        assert_eq!(params.get("catchall"), Some("no/such/page"));

        let p = pattern("/docs/:rest(.*)");
        let params = p.matches(&Path::new("/docs/a/b")).unwrap();
        assert_eq!(params.get("rest"), Some("a/b"));
        assert_eq!(p.matches(&Path::new("/other/a")), None);
    }

    #[test]
    fn test_pattern_render() {
        let p = pattern("/competition/:competition_id");
        let params = Params::new().with("competition_id", "a b");
        assert_eq!(p.render("competition", &params).unwrap(), "/competition/a%20b");

        assert_eq!(
            p.render("competition", &Params::new()),
            Err(LinkError::MissingParam {
                route: String::from("competition"),
                param: String::from("competition_id"),
            })
        );

        assert_eq!(pattern("/").render("lp", &Params::new()).unwrap(), "/");

        let p = pattern("/:catchall(.*)");
        let params = Params::new().with("catchall", "a/b c");
        assert_eq!(p.render("notfound", &params).unwrap(), "/a/b%20c");
    }
}
