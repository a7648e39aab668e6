//! Page components for the portfolio site.

pub mod layout;
pub mod navbar;
pub mod sections;

pub use layout::Layout;
pub use navbar::NavBar;
pub use sections::Sections;
