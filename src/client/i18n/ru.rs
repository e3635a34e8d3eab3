use super::Key;

pub(super) fn translate(key: Key) -> &'static str {
    match key {
        Key::Home => "Главная",
        Key::Administrators => "Администраторы",
        Key::Role => "Роль",
        Key::Roles => "Роли",
        Key::Admin => "Админ",
        Key::Admins => "Админы",
        Key::CreateRole => "Создать роль",
        Key::CreateAdmin => "Создать админа",
        Key::CreateAdministrator => "Создать администратора",
        Key::Edit => "Редактировать",
        Key::Delete => "Удалить",
        Key::Email => "Электронная почта",
        Key::Actions => "Действия",
        Key::UpdateRole => "Обновить роль",
        Key::UpdateAdmin => "Обновить администратора",
        Key::Password => "Пароль",
        Key::NewPassword => "Новый пароль",
        Key::GeneratePassword => "Сгенерировать",
        Key::Name => "Имя",
        Key::Success => "Успех",
        Key::AdminSuccessfullyCreated => "Админ успешно создан",
        Key::AdminSuccessfullyUpdated => "Админ успешно обновлен",
        Key::AdminSuccessfullyDeleted => "Админ успешно удален",
        Key::Error => "Ошибка",
        Key::AdminCreationError => "Ошибка создания администратора",
        Key::AdminUpdateError => "Ошибка обновления администратора",
        Key::AdminDeletionError => "Ошибка удаления администратора",
        Key::ListOfRoles => "Список ролей",
        Key::AddRole => "Добавить роль",
        Key::NoPrivileges => "Без привилегий",
        Key::Privileges => "Привилегии",
        Key::SuperAdmin => "Суперадмин",
        Key::All => "Все",
        Key::RoleSuccessfullyCreated => "Роль успешно создана",
        Key::RoleSuccessfullyUpdated => "Роль успешно обновлена",
        Key::RoleSuccessfullyDeleted => "Роль успешно удалена",
        Key::RoleCreationError => "Ошибка создания роли",
        Key::RoleUpdateError => "Ошибка обновления роли",
        Key::RoleDeletionError => "Ошибка удаления роли",
        Key::AdminList => "Список администраторов",
        Key::AdminForm => "Форма администратора",
        Key::RoleList => "Список ролей",
        Key::RoleForm => "Форма роли",
        Key::AndMorePrivilege => "и еще {{count}} привилегий...",
        Key::You => "Вы",
        Key::Save => "Сохранить",
        Key::Cancel => "Отмена",
        Key::Deleting => "Удаление...",
        Key::Saving => "Сохранение...",
        Key::ConfirmDeleteRole => "Вы уверены, что хотите удалить роль «{{name}}»?",
        Key::ConfirmDeleteAdmin => "Вы уверены, что хотите удалить администратора «{{name}}»?",
        Key::NoItems => "Здесь пока пусто",
        Key::NoMatches => "Ничего не найдено",
        Key::Search => "Поиск...",
        Key::NoParams => "Нет параметров",
        Key::TabsGeneral => "Основное",
        Key::TabsParams => "Параметры",
    }
}
