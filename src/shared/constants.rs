// =============================================================================
// ROLE CONSTANTS
// =============================================================================

/// Volunteer role - wants to help others in the community
#[allow(dead_code)]
pub const ROLE_VOLUNTEER: &str = "volunteer";

/// NGO role - represents an organization providing community services
#[allow(dead_code)]
pub const ROLE_NGO: &str = "ngo";

/// Needs-help role - a community member asking for assistance
#[allow(dead_code)]
pub const ROLE_NEEDS_HELP: &str = "needsHelp";

/// Roles accepted by the mock login endpoint
pub const KNOWN_ROLES: [&str; 3] = [ROLE_VOLUNTEER, ROLE_NGO, ROLE_NEEDS_HELP];
