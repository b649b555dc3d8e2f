use std::collections::HashSet;

use thiserror::Error;

use super::{Params, Path, Pattern, PatternError};

/// The maximum number of redirects followed while resolving a redirect target.
pub const MAX_REDIRECTS: usize = 8;

#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum TableError {
    #[error("route {name:?} has an invalid pattern {pattern:?}: {source}")]
    InvalidPattern {
        name: String,
        pattern: String,
        source: PatternError,
    },
    #[error("duplicate route name {0:?}")]
    DuplicateName(String),
    #[error("no catch-all route")]
    MissingCatchAll,
    #[error("catch-all route {0:?} must be the last route")]
    CatchAllNotLast(String),
    #[error("redirect {name:?} to {to:?} never reaches a view")]
    RedirectLoop { name: String, to: String },
}

#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum LinkError {
    #[error("no route named {0:?}")]
    UnknownRoute(String),
    #[error("route {route:?} requires parameter {param:?}")]
    MissingParam { route: String, param: String },
}

/// The result of resolving a location.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RouteMatch<V> {
    /// Name of the route that was finally matched.
    pub name: String,
    pub view: V,
    pub params: Params,
    /// The normalized path of the match. For redirected requests this is the redirect path.
    pub path: String,
    /// The normalized requested path, if the request was redirected.
    pub redirected_from: Option<String>,
}

impl<V> RouteMatch<V> {
    #[inline]
    pub fn is_redirect(&self) -> bool {
        self.redirected_from.is_some()
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Target<V> {
    View(V),
    Redirect(Redirect<V>),
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Redirect<V> {
    to: String,
    landing: RouteMatch<V>,
}

impl<V> Redirect<V> {
    /// The path this redirect points to.
    pub fn to(&self) -> &str {
        &self.to
    }

    /// The match the redirect path resolves to.
    pub fn landing(&self) -> &RouteMatch<V> {
        &self.landing
    }
}

#[derive(Clone, Debug)]
pub struct RouteEntry<V> {
    name: String,
    pattern: Pattern,
    target: Target<V>,
}

impl<V> RouteEntry<V> {
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn pattern(&self) -> &Pattern {
        &self.pattern
    }

    pub fn target(&self) -> &Target<V> {
        &self.target
    }
}

/// An immutable, ordered list of routes.
///
/// A `RouteTable` always ends with exactly one catch-all route, so every location resolves to
/// some route. All redirect targets are resolved when the table is built.
#[derive(Clone, Debug)]
pub struct RouteTable<V> {
    entries: Vec<RouteEntry<V>>,
}

impl<V> RouteTable<V> {
    pub fn builder() -> Builder<V> {
        Builder::default()
    }

    pub fn entries(&self) -> &[RouteEntry<V>] {
        &self.entries
    }

    pub fn get(&self, name: &str) -> Option<&RouteEntry<V>> {
        self.entries.iter().find(|entry| entry.name == name)
    }

    /// Resolves `location` to the first matching route, following a redirect if the matched
    /// route is one.
    pub fn resolve(&self, location: &str) -> RouteMatch<V>
    where
        V: Clone,
    {
        let path = Path::new(location);
        let (index, params) = first_match(self.entries.iter().map(|e| &e.pattern), &path);
        let entry = &self.entries[index];

        match &entry.target {
            Target::View(view) => {
                log::debug!("Resolved {} to route {:?}", path, entry.name);

                RouteMatch {
                    name: entry.name.clone(),
                    view: view.clone(),
                    params,
                    path: path.to_string(),
                    redirected_from: None,
                }
            }
            Target::Redirect(redirect) => {
                log::debug!(
                    "Redirecting {} ({:?}) to {} ({:?})",
                    path,
                    entry.name,
                    redirect.to,
                    redirect.landing.name
                );

                RouteMatch {
                    redirected_from: Some(path.to_string()),
                    ..redirect.landing.clone()
                }
            }
        }
    }

    /// Returns the app-relative path of the route `name` with `params` filled in.
    pub fn href(&self, name: &str, params: &Params) -> Result<String, LinkError> {
        let entry = self
            .get(name)
            .ok_or_else(|| LinkError::UnknownRoute(name.to_owned()))?;

        entry.pattern.render(name, params)
    }
}

/// Returns the index of the first pattern matching `path` together with the bound parameters.
///
/// The last pattern is expected to be a catch-all and is assumed to match when no other
/// pattern does.
fn first_match<'a, I>(patterns: I, path: &Path) -> (usize, Params)
where
    I: ExactSizeIterator<Item = &'a Pattern>,
{
    let last = patterns.len().saturating_sub(1);

    patterns
        .enumerate()
        .find_map(|(index, pattern)| pattern.matches(path).map(|params| (index, params)))
        .unwrap_or((last, Params::new()))
}

#[derive(Clone, Debug)]
enum Pending<V> {
    View(V),
    Redirect(String),
}

#[derive(Clone, Debug)]
struct PendingEntry<V> {
    name: String,
    pattern: String,
    target: Pending<V>,
}

/// Builder for a [`RouteTable`]. Routes are matched in the order they are added.
#[derive(Clone, Debug)]
pub struct Builder<V> {
    entries: Vec<PendingEntry<V>>,
}

impl<V> Default for Builder<V> {
    fn default() -> Self {
        Self {
            entries: Vec::new(),
        }
    }
}

impl<V> Builder<V> {
    /// Adds a route rendering `view`.
    pub fn view(mut self, pattern: &str, name: &str, view: V) -> Self {
        self.entries.push(PendingEntry {
            name: name.to_owned(),
            pattern: pattern.to_owned(),
            target: Pending::View(view),
        });

        self
    }

    /// Adds a route redirecting to the path `to`.
    pub fn redirect(mut self, pattern: &str, name: &str, to: &str) -> Self {
        self.entries.push(PendingEntry {
            name: name.to_owned(),
            pattern: pattern.to_owned(),
            target: Pending::Redirect(to.to_owned()),
        });

        self
    }

    pub fn build(self) -> Result<RouteTable<V>, TableError>
    where
        V: Clone,
    {
        let mut names = HashSet::new();
        let mut patterns = Vec::with_capacity(self.entries.len());

        for entry in &self.entries {
            if !names.insert(entry.name.as_str()) {
                return Err(TableError::DuplicateName(entry.name.clone()));
            }

            let pattern: Pattern = entry.pattern.parse().map_err(|source| {
                TableError::InvalidPattern {
                    name: entry.name.clone(),
                    pattern: entry.pattern.clone(),
                    source,
                }
            })?;

            patterns.push(pattern);
        }

        match patterns.iter().position(Pattern::is_catch_all) {
            None => return Err(TableError::MissingCatchAll),
            Some(index) if index != patterns.len() - 1 => {
                return Err(TableError::CatchAllNotLast(self.entries[index].name.clone()));
            }
            Some(_) => (),
        }

        let mut entries = Vec::with_capacity(self.entries.len());
        for (entry, pattern) in self.entries.iter().zip(&patterns) {
            let target = match &entry.target {
                Pending::View(view) => Target::View(view.clone()),
                Pending::Redirect(to) => Target::Redirect(Redirect {
                    to: to.clone(),
                    landing: self.landing(&entry.name, to, &patterns)?,
                }),
            };

            entries.push(RouteEntry {
                name: entry.name.clone(),
                pattern: pattern.clone(),
                target,
            });
        }

        log::debug!("Built route table with {} routes", entries.len());

        Ok(RouteTable { entries })
    }

    /// Follows a redirect to `to` until a view is reached.
    fn landing(
        &self,
        name: &str,
        to: &str,
        patterns: &[Pattern],
    ) -> Result<RouteMatch<V>, TableError>
    where
        V: Clone,
    {
        let mut visited = Vec::new();
        let mut path = Path::new(to);

        loop {
            let (index, params) = first_match(patterns.iter(), &path);
            let entry = &self.entries[index];

            match &entry.target {
                Pending::View(view) => {
                    return Ok(RouteMatch {
                        name: entry.name.clone(),
                        view: view.clone(),
                        params,
                        path: path.to_string(),
                        redirected_from: None,
                    });
                }
                Pending::Redirect(next) => {
                    // The starting redirect counts as the first hop.
                    if visited.contains(&index) || visited.len() + 1 >= MAX_REDIRECTS {
                        return Err(TableError::RedirectLoop {
                            name: name.to_owned(),
                            to: to.to_owned(),
                        });
                    }

                    visited.push(index);
                    path = Path::new(next);
                }
            }
        }
    }
}
