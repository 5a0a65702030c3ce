//! Role-permission engine.
//!
//! Answers "may this role do X" and "may this role open this dashboard
//! route" from a static table. Pure lookups, no I/O; route handlers call in
//! here before touching the store or the review state machine.

use std::collections::HashMap;

use once_cell::sync::Lazy;

use crate::models::{Permission, Role};

use crate::models::Permission::*;

// Grants per role. Everything not listed is an explicit false in the table.
//
// ADMIN deliberately lacks the owner-side keys (manageOwn*, create*): admins
// review and manage content, they do not own listings. MODERATOR keeps
// createBusiness/createAgency/createTours so staff can register listings on
// behalf of owners, while still lacking manageOwn* and all user management.
const ADMIN_GRANTS: &[Permission] = &[
    ViewAllBusinesses,
    EditAnyBusiness,
    ApproveBusinesses,
    DeleteBusinesses,
    ViewAllAgencies,
    EditAnyAgency,
    ApproveAgencies,
    DeleteAgencies,
    ViewAllBeaches,
    CreateBeaches,
    EditBeaches,
    DeleteBeaches,
    ViewTags,
    CreateTags,
    EditTags,
    DeleteTags,
    ViewAllTours,
    ApproveTours,
    DeleteTours,
    ViewAllUsers,
    CreateUsers,
    EditUsers,
    DeleteUsers,
    ChangeUserRoles,
];

const MODERATOR_GRANTS: &[Permission] = &[
    CreateBusiness,
    ViewAllBusinesses,
    EditAnyBusiness,
    ApproveBusinesses,
    DeleteBusinesses,
    CreateAgency,
    ViewAllAgencies,
    EditAnyAgency,
    ApproveAgencies,
    DeleteAgencies,
    ViewAllBeaches,
    CreateBeaches,
    EditBeaches,
    ViewTags,
    ViewAllTours,
    CreateTours,
    ApproveTours,
    DeleteTours,
];

const BUSINESS_GRANTS: &[Permission] = &[ManageOwnBusiness, CreateBusiness, ViewTags];

const GUIDE_GRANTS: &[Permission] = &[
    ManageOwnAgency,
    CreateAgency,
    ManageOwnTours,
    CreateTours,
    ViewTags,
];

fn grants_for(role: Role) -> &'static [Permission] {
    match role {
        Role::Admin => ADMIN_GRANTS,
        Role::Moderator => MODERATOR_GRANTS,
        Role::BusinessFood | Role::BusinessAccommodation => BUSINESS_GRANTS,
        Role::Guide => GUIDE_GRANTS,
    }
}

/// The full (role, permission) -> bool table, materialized once at first use.
/// Every role carries an entry for every key; a missing entry is a bug caught
/// by the completeness test below.
static PERMISSION_TABLE: Lazy<HashMap<Role, HashMap<Permission, bool>>> = Lazy::new(|| {
    Role::ALL
        .iter()
        .map(|role| {
            let grants = grants_for(*role);
            let entries = Permission::ALL
                .iter()
                .map(|perm| (*perm, grants.contains(perm)))
                .collect();
            (*role, entries)
        })
        .collect()
});

/// Dashboard route gating. A path with no entry here is ALLOWED (fail-open);
/// that matches the shipped behavior the frontend relies on, so changing it
/// would silently alter authorization semantics. Asserted by test.
const ROUTE_TABLE: &[(&str, &[Permission])] = &[
    ("/dash/businesses", &[ViewAllBusinesses, ManageOwnBusiness]),
    ("/dash/agencies", &[ViewAllAgencies, ManageOwnAgency]),
    ("/dash/beaches", &[ViewAllBeaches, CreateBeaches, EditBeaches]),
    ("/dash/tags", &[ViewTags, CreateTags, EditTags]),
    (
        "/dash/tours",
        &[ViewAllTours, ManageOwnTours, CreateTours, ApproveTours],
    ),
    ("/dash/users", &[ViewAllUsers]),
];

/// Whether `role` holds `permission`. Total over both enums; a table gap
/// (impossible unless the table construction regresses) denies.
pub fn has_permission(role: Role, permission: Permission) -> bool {
    PERMISSION_TABLE
        .get(&role)
        .and_then(|perms| perms.get(&permission))
        .copied()
        .unwrap_or(false)
}

/// True iff every listed permission holds. Vacuously true for an empty list.
pub fn has_all_permissions(role: Role, permissions: &[Permission]) -> bool {
    permissions.iter().all(|p| has_permission(role, *p))
}

/// True iff at least one listed permission holds. Vacuously false for an
/// empty list.
pub fn has_any_permission(role: Role, permissions: &[Permission]) -> bool {
    permissions.iter().any(|p| has_permission(role, *p))
}

pub fn is_staff(role: Role) -> bool {
    matches!(role, Role::Admin | Role::Moderator)
}

pub fn is_admin(role: Role) -> bool {
    role == Role::Admin
}

pub fn can_manage_businesses(role: Role) -> bool {
    has_any_permission(role, &[ViewAllBusinesses, ManageOwnBusiness])
}

pub fn can_manage_agencies(role: Role) -> bool {
    has_any_permission(role, &[ViewAllAgencies, ManageOwnAgency])
}

pub fn can_manage_beaches(role: Role) -> bool {
    has_any_permission(role, &[ViewAllBeaches, CreateBeaches, EditBeaches])
}

pub fn can_manage_tags(role: Role) -> bool {
    has_any_permission(role, &[ViewTags, CreateTags, EditTags])
}

pub fn can_manage_tours(role: Role) -> bool {
    has_any_permission(role, &[ViewAllTours, ManageOwnTours, CreateTours, ApproveTours])
}

/// Whether `role` may open the dashboard route at `path`.
///
/// Tag routes demand ALL listed permissions (tag management is admin-only by
/// business rule); every other listed route is satisfied by ANY one
/// permission. Unlisted paths are allowed.
pub fn can_access_route(role: Role, path: &str) -> bool {
    let entry = ROUTE_TABLE
        .iter()
        .find(|(prefix, _)| path.starts_with(prefix));

    let Some((_, required)) = entry else {
        return true;
    };

    if path.contains("/tags") {
        has_all_permissions(role, required)
    } else {
        has_any_permission(role, required)
    }
}
