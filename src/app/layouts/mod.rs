pub mod global_sidebar;
pub mod navbar;

pub use global_sidebar::GlobalSidebar;
pub use navbar::Navbar;
