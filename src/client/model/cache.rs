use crate::client::model::error::ApiError;

/// Load state of data fetched for a screen.
#[derive(Clone, Default, PartialEq)]
pub enum Cache<T> {
    #[default]
    NotFetched,
    Loading,
    Fetched(T),
    Error(ApiError),
}

impl<T> From<Result<T, ApiError>> for Cache<T> {
    fn from(result: Result<T, ApiError>) -> Self {
        match result {
            Ok(data) => Cache::Fetched(data),
            Err(err) => Cache::Error(err),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn result_converts_into_matching_state() {
        let ok: Cache<u32> = Ok(3).into();
        assert!(matches!(ok, Cache::Fetched(3)));

        let err: Cache<u32> = Err(ApiError::internal("boom")).into();
        assert!(matches!(err, Cache::Error(ApiError { status: 500, .. })));
    }
}
