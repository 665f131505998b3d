//! Layout components shared across routes.

mod app_shell;
mod sidebar;

pub(crate) use app_shell::AppShell;
use sidebar::Sidebar;
