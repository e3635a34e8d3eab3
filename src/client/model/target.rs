use std::{fmt, str::FromStr};

use thiserror::Error;

/// Path segment used by form routes for a record that does not exist yet.
pub const CREATE_SEGMENT: &str = "create";

/// Record a form screen operates on, parsed from the `:role_id` / `:admin_id`
/// route segment.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum FormTarget {
    #[default]
    Create,
    Edit(i64),
}

impl FormTarget {
    pub fn is_create(&self) -> bool {
        matches!(self, FormTarget::Create)
    }

    pub fn id(&self) -> Option<i64> {
        match self {
            FormTarget::Create => None,
            FormTarget::Edit(id) => Some(*id),
        }
    }
}

#[derive(Error, Debug, Clone, PartialEq)]
#[error("Invalid record id in path: {0}")]
pub struct FormTargetParseError(pub String);

impl FromStr for FormTarget {
    type Err = FormTargetParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s == CREATE_SEGMENT {
            return Ok(FormTarget::Create);
        }

        s.parse::<i64>()
            .map(FormTarget::Edit)
            .map_err(|_| FormTargetParseError(s.to_string()))
    }
}

impl fmt::Display for FormTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FormTarget::Create => write!(f, "{}", CREATE_SEGMENT),
            FormTarget::Edit(id) => write!(f, "{}", id),
        }
    }
}

/// Data fetched for a form screen, tagged with the record it was fetched for.
///
/// Form components stay mounted when only the route segment changes, and the
/// previous fetch result stays readable until the new one resolves.
#[derive(Debug, Clone, PartialEq)]
pub struct Loaded<T> {
    pub target: FormTarget,
    pub data: T,
}

impl<T> Loaded<T> {
    pub fn new(target: FormTarget, data: T) -> Self {
        Self { target, data }
    }

    /// The data, unless it belongs to a different record than `target`.
    pub fn for_target(&self, target: FormTarget) -> Option<&T> {
        (self.target == target).then_some(&self.data)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_create_and_numeric_ids() {
        assert_eq!("create".parse::<FormTarget>(), Ok(FormTarget::Create));
        assert_eq!("42".parse::<FormTarget>(), Ok(FormTarget::Edit(42)));
    }

    #[test]
    fn rejects_other_segments() {
        let err = "Create".parse::<FormTarget>().unwrap_err();
        assert_eq!(err, FormTargetParseError("Create".to_string()));
        assert!("".parse::<FormTarget>().is_err());
    }

    #[test]
    fn displays_as_route_segment() {
        assert_eq!(FormTarget::Create.to_string(), "create");
        assert_eq!(FormTarget::Edit(7).to_string(), "7");
        assert_eq!(FormTarget::Edit(7).id(), Some(7));
        assert!(FormTarget::Create.id().is_none());
    }

    #[test]
    fn loaded_data_only_matches_its_own_record() {
        let loaded = Loaded::new(FormTarget::Edit(5), "admin 5");

        assert_eq!(loaded.for_target(FormTarget::Edit(5)), Some(&"admin 5"));
        assert_eq!(loaded.for_target(FormTarget::Create), None);
        assert_eq!(loaded.for_target(FormTarget::Edit(6)), None);
    }
}
