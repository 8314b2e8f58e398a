//! Navigation and sidebar resolution for lkdoc.
//!
//! This crate provides:
//! - [`NavItem`] / [`ActiveMatch`]: top navigation entries and their highlight rules
//! - [`SidebarMap`]: path-prefix keyed sidebar groups, with aliasing
//! - [`SiteNavigation`]: validated bundle resolving a page path into a [`PageShell`]
//!
//! All types are validated on construction and immutable afterwards, so a
//! [`SiteNavigation`] can be shared across render threads by reference.
//!
//! # Quick Start
//!
//! ```
//! # fn main() -> Result<(), lk_nav::NavError> {
//! use lk_nav::{NavItem, NavLink, SidebarGroup, SidebarMap, SiteNavigation};
//!
//! let nav = vec![NavItem::new("Hooks", "/hooks/connection/use-connect", Some("/hooks/"))?];
//!
//! let mut sidebar = SidebarMap::new();
//! sidebar.insert(
//!     "/hooks/",
//!     vec![SidebarGroup::new(
//!         "Connection",
//!         vec![NavLink::new("useConnect", "/hooks/connection/use-connect")?],
//!     )?],
//! )?;
//!
//! let site = SiteNavigation::new(nav, sidebar, None)?;
//! let shell = site.resolve("/hooks/connection/use-connect");
//!
//! assert_eq!(shell.active_nav.map(lk_nav::NavItem::label), Some("Hooks"));
//! assert_eq!(shell.sidebar.len(), 1);
//! # Ok(())
//! # }
//! ```

mod error;
mod nav;
mod path;
mod sidebar;
mod site;

pub use error::NavError;
pub use nav::{ActiveMatch, NavItem, resolve_active_nav};
pub use path::{is_external, normalize_path, normalize_prefix};
pub use sidebar::{NavLink, SidebarGroup, SidebarMap, resolve_sidebar};
pub use site::{EditLink, PageShell, SiteNavigation, uncovered_sidebar_prefixes};
