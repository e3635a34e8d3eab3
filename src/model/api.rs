use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize)]
pub struct ErrorDto {
    #[serde(alias = "message")]
    pub error: String,
}

/// Body returned by the delete endpoints.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SuccessDto {
    #[serde(default)]
    pub success: bool,
}

/// Response envelope used by the admin backend.
///
/// Most endpoints wrap their payload as `{"data": ...}`, some older ones return the
/// payload bare. Both shapes decode into the same value.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum ResponseBody<T> {
    Wrapped { data: T },
    Bare(T),
}

impl<T> ResponseBody<T> {
    pub fn into_data(self) -> T {
        match self {
            ResponseBody::Wrapped { data } => data,
            ResponseBody::Bare(data) => data,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::role::RoleDto;
    use test_utils::fixture;

    #[test]
    fn decodes_wrapped_and_bare_bodies_alike() {
        let bare: ResponseBody<RoleDto> =
            serde_json::from_value(fixture::role::json()).unwrap();
        let wrapped: ResponseBody<RoleDto> =
            serde_json::from_value(fixture::wrapped(fixture::role::json())).unwrap();

        assert_eq!(bare.into_data(), wrapped.into_data());
    }

    #[test]
    fn decodes_wrapped_lists() {
        let body = fixture::wrapped(serde_json::json!([
            fixture::role::builder().id(1).build(),
            fixture::role::builder().id(2).build(),
        ]));

        let roles: Vec<RoleDto> = serde_json::from_value::<ResponseBody<Vec<RoleDto>>>(body)
            .unwrap()
            .into_data();

        assert_eq!(roles.iter().map(|r| r.id).collect::<Vec<_>>(), vec![1, 2]);
    }
}
