use crate::{
    client::i18n::{I18n, Key},
    model::role::RoleDto,
};

/// What the privileges column of the role list shows.
#[derive(Debug, Clone, PartialEq)]
pub enum PrivilegesSummary {
    All,
    Nothing,
    Listed { labels: Vec<String>, remaining: usize },
}

/// Super admins show as "all"; otherwise the first `visible` scope labels are
/// listed and the rest counted.
pub fn summarize_privileges(role: &RoleDto, visible: usize) -> PrivilegesSummary {
    if role.is_super_admin {
        return PrivilegesSummary::All;
    }
    if role.scopes.is_empty() {
        return PrivilegesSummary::Nothing;
    }

    let labels = role
        .scopes
        .iter()
        .take(visible)
        .map(|scope| {
            if scope.label.is_empty() {
                scope.value.clone()
            } else {
                scope.label.clone()
            }
        })
        .collect();

    PrivilegesSummary::Listed {
        labels,
        remaining: role.scopes.len().saturating_sub(visible),
    }
}

impl PrivilegesSummary {
    pub fn render(&self, i18n: &I18n) -> String {
        match self {
            PrivilegesSummary::All => i18n.t(Key::All).to_string(),
            PrivilegesSummary::Nothing => i18n.t(Key::NoPrivileges).to_string(),
            PrivilegesSummary::Listed { labels, remaining } => {
                let listed = labels.join(", ");
                if *remaining == 0 {
                    listed
                } else {
                    let count = remaining.to_string();
                    let more = i18n.t_with(Key::AndMorePrivilege, &[("count", count.as_str())]);
                    format!("{} {}", listed, more)
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::client::i18n::Locale;
    use test_utils::fixture;

    fn role(body: serde_json::Value) -> RoleDto {
        serde_json::from_value(body).unwrap()
    }

    #[test]
    fn super_admin_has_all_privileges() {
        let role = role(
            fixture::role::builder()
                .super_admin(true)
                .scope("users.read", "Read users")
                .build(),
        );
        let summary = summarize_privileges(&role, 3);
        assert_eq!(summary, PrivilegesSummary::All);
        assert_eq!(summary.render(&I18n::new(Locale::En)), "All");
    }

    #[test]
    fn role_without_scopes_has_none() {
        let summary = summarize_privileges(&role(fixture::role::json()), 3);
        assert_eq!(summary.render(&I18n::new(Locale::Ru)), "Без привилегий");
    }

    #[test]
    fn collapses_scopes_past_visible_count() {
        let role = role(
            fixture::role::builder()
                .scope("a", "Alpha")
                .scope("b", "")
                .scope("c", "Gamma")
                .build(),
        );

        let summary = summarize_privileges(&role, 2);
        assert_eq!(
            summary,
            PrivilegesSummary::Listed {
                labels: vec!["Alpha".to_string(), "b".to_string()],
                remaining: 1,
            }
        );
        assert_eq!(
            summary.render(&I18n::new(Locale::En)),
            "Alpha, b and 1 more privileges..."
        );
    }

    #[test]
    fn lists_everything_when_it_fits() {
        let role = role(fixture::role::builder().scope("a", "Alpha").build());
        assert_eq!(
            summarize_privileges(&role, 3).render(&I18n::new(Locale::En)),
            "Alpha"
        );
    }
}
