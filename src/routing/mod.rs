//! Target independent route matching.
//!
//! A [`RouteTable`] is an ordered list of routes, each binding a [`Pattern`] to either a view
//! or a redirect. Locations are resolved against the routes in declaration order and the first
//! match wins.
mod params;
mod path;
mod pattern;
mod table;

pub use params::Params;
pub use path::{Base, Path};
pub use pattern::{Pattern, PatternError, Segment};
pub use table::{
    Builder, LinkError, Redirect, RouteEntry, RouteMatch, RouteTable, TableError, Target,
    MAX_REDIRECTS,
};
