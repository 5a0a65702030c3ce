//! Permission keys consulted by the permission engine.

use serde::{Deserialize, Serialize};

/// Named boolean capability in the role-permission table.
///
/// Wire form is the camelCase key used by the dashboard frontend
/// (e.g. `approveBusinesses`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Permission {
    // Businesses
    ManageOwnBusiness,
    CreateBusiness,
    ViewAllBusinesses,
    EditAnyBusiness,
    ApproveBusinesses,
    DeleteBusinesses,
    // Agencies
    ManageOwnAgency,
    CreateAgency,
    ViewAllAgencies,
    EditAnyAgency,
    ApproveAgencies,
    DeleteAgencies,
    // Beaches
    ViewAllBeaches,
    CreateBeaches,
    EditBeaches,
    DeleteBeaches,
    // Tags
    ViewTags,
    CreateTags,
    EditTags,
    DeleteTags,
    // Tours
    ViewAllTours,
    ManageOwnTours,
    CreateTours,
    ApproveTours,
    DeleteTours,
    // Users
    ViewAllUsers,
    CreateUsers,
    EditUsers,
    DeleteUsers,
    ChangeUserRoles,
}

impl Permission {
    /// Every permission key, for table-completeness checks.
    pub const ALL: [Permission; 30] = [
        Permission::ManageOwnBusiness,
        Permission::CreateBusiness,
        Permission::ViewAllBusinesses,
        Permission::EditAnyBusiness,
        Permission::ApproveBusinesses,
        Permission::DeleteBusinesses,
        Permission::ManageOwnAgency,
        Permission::CreateAgency,
        Permission::ViewAllAgencies,
        Permission::EditAnyAgency,
        Permission::ApproveAgencies,
        Permission::DeleteAgencies,
        Permission::ViewAllBeaches,
        Permission::CreateBeaches,
        Permission::EditBeaches,
        Permission::DeleteBeaches,
        Permission::ViewTags,
        Permission::CreateTags,
        Permission::EditTags,
        Permission::DeleteTags,
        Permission::ViewAllTours,
        Permission::ManageOwnTours,
        Permission::CreateTours,
        Permission::ApproveTours,
        Permission::DeleteTours,
        Permission::ViewAllUsers,
        Permission::CreateUsers,
        Permission::EditUsers,
        Permission::DeleteUsers,
        Permission::ChangeUserRoles,
    ];
}
