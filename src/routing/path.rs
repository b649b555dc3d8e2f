use std::fmt::{self, Debug, Display, Formatter};

/// A normalized, app-relative path split into its segments.
///
/// The query and fragment of the location are dropped, as are empty segments. This makes
/// `/organizer/`, `//organizer` and `/organizer?tab=1` all the same path.
#[derive(Clone, PartialEq, Eq)]
pub struct Path {
    segments: Vec<String>,
}

impl Path {
    pub fn new(location: &str) -> Self {
        let end = location.find(['?', '#']).unwrap_or(location.len());

        let segments = location[..end]
            .split('/')
            .filter(|s| !s.is_empty())
            .map(|s| s.to_string())
            .collect();

        Self { segments }
    }

    #[inline]
    pub fn segments(&self) -> &[String] {
        &self.segments
    }

    #[inline]
    pub fn is_root(&self) -> bool {
        self.segments.is_empty()
    }
}

impl Display for Path {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "/{}", self.segments.join("/"))
    }
}

impl Debug for Path {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "\"{}\"", self)
    }
}

/// The prefix all app-relative paths live under in the browser.
///
/// A `Base` is stored without a trailing slash; the root base is the empty string.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Base(Box<str>);

impl Base {
    pub fn new(base: &str) -> Self {
        let base = base.trim().trim_end_matches('/');

        if base.is_empty() {
            Self::default()
        } else if base.starts_with('/') {
            Self(base.into())
        } else {
            Self(format!("/{}", base).into_boxed_str())
        }
    }

    #[inline]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Removes the base from a browser location, ignoring ASCII case. Locations outside of the
    /// base are returned unchanged. The returned path always starts with a `/`.
    pub fn strip(&self, location: &str) -> String {
        let len = self.0.len();
        let rest = match location.get(..len) {
            Some(prefix) if prefix.eq_ignore_ascii_case(&self.0) => {
                let rest = &location[len..];
                if rest.is_empty() || rest.starts_with(['/', '?', '#']) {
                    rest
                } else {
                    location
                }
            }
            _ => location,
        };

        if rest.starts_with('/') {
            rest.to_owned()
        } else {
            format!("/{}", rest)
        }
    }

    /// Prefixes an app-relative `path` with the base.
    pub fn join(&self, path: &str) -> String {
        let path = path.strip_prefix('/').unwrap_or(path);

        format!("{}/{}", self.0, path)
    }
}

impl Display for Base {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        if self.0.is_empty() {
            f.write_str("/")
        } else {
            f.write_str(&self.0)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{Base, Path};

    #[test]
    fn test_path_new() {
        let path = Path::new("");
        assert!(path.is_root());

        let path = Path::new("/");
        assert!(path.is_root());

        let path = Path::new("/a/b");
        assert_eq!(path.segments(), ["a", "b"]);

        let path = Path::new("//a///b/");
        assert_eq!(path.segments(), ["a", "b"]);
        assert_eq!(path.to_string(), "/a/b");
    }

    #[test]
    fn test_path_query_and_fragment() {
        let path = Path::new("/organizer/billing?month=2022-05#top");
        assert_eq!(path.segments(), ["organizer", "billing"]);

        let path = Path::new("/#/competition/1");
        assert!(path.is_root());

        let path = Path::new("?a=/b");
        assert!(path.is_root());
    }

    #[test]
    fn test_base_new() {
        assert_eq!(Base::new("").as_str(), "");
        assert_eq!(Base::new("/").as_str(), "");
        assert_eq!(Base::new("  / ").as_str(), "");
        assert_eq!(Base::new("/app/").as_str(), "/app");
        assert_eq!(Base::new("app").as_str(), "/app");
        assert_eq!(Base::new("/tenant/web//").as_str(), "/tenant/web");

        assert_eq!(Base::new("/").to_string(), "/");
        assert_eq!(Base::new("/app").to_string(), "/app");
    }

    #[test]
    fn test_base_strip() {
        let base = Base::new("/");
        assert_eq!(base.strip("/mypage"), "/mypage");
        assert_eq!(base.strip(""), "/");

        let base = Base::new("/app");
        assert_eq!(base.strip("/app"), "/");
        assert_eq!(base.strip("/app/"), "/");
        assert_eq!(base.strip("/app/player/7"), "/player/7");
        assert_eq!(base.strip("/app?x=1"), "/?x=1");
        assert_eq!(base.strip("/application"), "/application");
        assert_eq!(base.strip("/other/app"), "/other/app");
    }

    #[test]
    fn test_base_strip_ignores_case() {
        let base = Base::new("/app");
        assert_eq!(base.strip("/APP/mypage"), "/mypage");
        assert_eq!(base.strip("/App"), "/");
        assert_eq!(base.strip("/APPLICATION"), "/APPLICATION");

        let base = Base::new("/Tenant");
        assert_eq!(base.strip("/tenant/player/7"), "/player/7");
    }

    #[test]
    fn test_base_join() {
        let base = Base::new("/");
        assert_eq!(base.join("/"), "/");
        assert_eq!(base.join("/mypage"), "/mypage");
        assert_eq!(base.join("mypage"), "/mypage");

        let base = Base::new("/app/");
        assert_eq!(base.join("/"), "/app/");
        assert_eq!(base.join("/organizer/players"), "/app/organizer/players");
    }
}
