use log::LevelFilter;
use serde::{Deserialize, Serialize};

use crate::routing::Base;

/// The configuration passed to the app by the embedding page.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// The path the app is served under.
    #[serde(default = "Config::default_base")]
    pub base: Box<str>,
    /// The id of the element to mount the app in. The app is mounted in `<body>` if this is
    /// `None`.
    #[serde(default)]
    pub mountpoint: Option<Box<str>>,
    #[serde(default = "Config::default_log_level")]
    pub log_level: LevelFilter,
}

impl Config {
    fn default_base() -> Box<str> {
        "/".into()
    }

    fn default_log_level() -> LevelFilter {
        LevelFilter::Info
    }

    #[inline]
    pub fn base(&self) -> Base {
        Base::new(&self.base)
    }

    pub fn mountpoint(&self) -> Mountpoint<'_> {
        match &self.mountpoint {
            Some(id) => Mountpoint::Element(id),
            None => Mountpoint::Body,
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            base: Self::default_base(),
            mountpoint: None,
            log_level: Self::default_log_level(),
        }
    }
}

/// The mountpoint of the application. [`Mountpoint::Body`] will start the application at the
/// `<body>` html tag. [`Mountpoint::Element`] will start the application at the html tag with
/// the given id.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Mountpoint<'a> {
    Body,
    Element(&'a str),
}

#[cfg(test)]
mod tests {
    use log::LevelFilter;

    use super::{Config, Mountpoint};

    #[test]
    fn test_config_defaults() {
        let config: Config = serde_json::from_str("{}").unwrap();

        assert_eq!(config, Config::default());
        assert_eq!(config.base().as_str(), "");
        assert_eq!(config.mountpoint(), Mountpoint::Body);
        assert_eq!(config.log_level, LevelFilter::Info);
    }

    #[test]
    fn test_config_full() {
        let config: Config = serde_json::from_str(
            r#"{ "base": "/tenant/", "mountpoint": "app", "log_level": "DEBUG" }"#,
        )
        .unwrap();

        assert_eq!(config.base().as_str(), "/tenant");
        assert_eq!(config.base().join("/mypage"), "/tenant/mypage");
        assert_eq!(config.mountpoint(), Mountpoint::Element("app"));
        assert_eq!(config.log_level, LevelFilter::Debug);
    }

    #[test]
    fn test_config_invalid_log_level() {
        let res = serde_json::from_str::<Config>(r#"{ "log_level": "verbose" }"#);
        assert!(res.is_err());
    }
}
