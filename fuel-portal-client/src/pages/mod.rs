pub mod admin;
pub mod login;
pub mod profile;
pub mod register;
pub mod travels;

use fuel_portal_common::user::Role;

/// Routing table of the portal
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Page {
    Login,
    Register,
    Dashboard,
    Profile,
    Admin,
}

impl Page {
    pub const fn path(&self) -> &'static str {
        match self {
            Self::Login => "/",
            Self::Register => "/register",
            Self::Dashboard => "/dashboard",
            Self::Profile => "/profile",
            Self::Admin => "/admin",
        }
    }

    /// Landing page after a successful login. Admins are taken to the user
    /// management table, everyone else to their personal travel log.
    pub const fn for_role(role: Role) -> Self {
        match role {
            Role::Admin => Self::Admin,
            Role::Employee => Self::Dashboard,
        }
    }
}

#[cfg(test)]
mod test {
    use fuel_portal_common::user::Role;
    use rstest::rstest;

    use super::Page;

    #[rstest]
    #[case::admin(Role::Admin, Page::Admin)]
    #[case::employee(Role::Employee, Page::Dashboard)]
    fn for_role_should_pick_landing_page(#[case] role: Role, #[case] expected: Page) {
        assert_eq!(Page::for_role(role), expected);
    }

    #[rstest]
    #[case::admin(Role::Admin, "/admin")]
    #[case::employee(Role::Employee, "/dashboard")]
    fn landing_page_should_route_to_expected_path(#[case] role: Role, #[case] expected: &str) {
        assert_eq!(Page::for_role(role).path(), expected);
    }
}
