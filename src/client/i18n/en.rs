use super::Key;

pub(super) fn translate(key: Key) -> &'static str {
    match key {
        Key::Home => "Home",
        Key::Administrators => "Administrators",
        Key::Role => "Role",
        Key::Roles => "Roles",
        Key::Admin => "Admin",
        Key::Admins => "Admins",
        Key::CreateRole => "Create role",
        Key::CreateAdmin => "Create admin",
        Key::CreateAdministrator => "Create administrator",
        Key::Edit => "Edit",
        Key::Delete => "Delete",
        Key::Email => "Email",
        Key::Actions => "Actions",
        Key::UpdateRole => "Update role",
        Key::UpdateAdmin => "Update administrator",
        Key::Password => "Password",
        Key::NewPassword => "New password",
        Key::GeneratePassword => "Generate",
        Key::Name => "Name",
        Key::Success => "Success",
        Key::AdminSuccessfullyCreated => "Admin successfully created",
        Key::AdminSuccessfullyUpdated => "Admin successfully updated",
        Key::AdminSuccessfullyDeleted => "Admin successfully deleted",
        Key::Error => "Error",
        Key::AdminCreationError => "Admin creation error",
        Key::AdminUpdateError => "Admin update error",
        Key::AdminDeletionError => "Admin deletion error",
        Key::ListOfRoles => "List of roles",
        Key::AddRole => "Add role",
        Key::NoPrivileges => "No privileges",
        Key::Privileges => "Privileges",
        Key::SuperAdmin => "Super admin",
        Key::All => "All",
        Key::RoleSuccessfullyCreated => "Role successfully created",
        Key::RoleSuccessfullyUpdated => "Role successfully updated",
        Key::RoleSuccessfullyDeleted => "Role successfully deleted",
        Key::RoleCreationError => "Role creation error",
        Key::RoleUpdateError => "Role update error",
        Key::RoleDeletionError => "Role deletion error",
        Key::AdminList => "Admin list",
        Key::AdminForm => "Admin form",
        Key::RoleList => "Role list",
        Key::RoleForm => "Role form",
        Key::AndMorePrivilege => "and {{count}} more privileges...",
        Key::You => "You",
        Key::Save => "Save",
        Key::Cancel => "Cancel",
        Key::Deleting => "Deleting...",
        Key::Saving => "Saving...",
        Key::ConfirmDeleteRole => "Are you sure you want to delete role \"{{name}}\"?",
        Key::ConfirmDeleteAdmin => "Are you sure you want to delete admin \"{{name}}\"?",
        Key::NoItems => "Nothing here yet",
        Key::NoMatches => "No matches found",
        Key::Search => "Search...",
        Key::NoParams => "No parameters",
        Key::TabsGeneral => "General",
        Key::TabsParams => "Parameters",
    }
}
