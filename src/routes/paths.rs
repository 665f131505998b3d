pub const OVERVIEW: &str = "/";
pub const RESOURCES: &str = "/resources";
pub const USERS: &str = "/users";
pub const SECURITY: &str = "/security";
pub const AUDIT: &str = "/admin/audit";
pub const SYSTEM: &str = "/admin/system";
pub const POLICIES: &str = "/admin/policies";
