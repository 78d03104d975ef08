use super::Error;

/// Error when a relation declares an on-delete policy outside the known set.
#[derive(Debug)]
pub(super) struct UnknownDeleteAction {
    relation: Box<str>,
    action: Box<str>,
}

impl std::error::Error for UnknownDeleteAction {}

impl core::fmt::Display for UnknownDeleteAction {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(
            f,
            "unknown delete action on relation {}: {}",
            self.relation, self.action
        )
    }
}

impl Error {
    /// Creates an unknown delete action error for the named relation.
    pub fn unknown_delete_action(relation: impl Into<String>, action: impl Into<String>) -> Error {
        Error::from(super::ErrorKind::UnknownDeleteAction(UnknownDeleteAction {
            relation: relation.into().into(),
            action: action.into().into(),
        }))
    }

    /// Returns `true` if this error is an unknown delete action error.
    pub fn is_unknown_delete_action(&self) -> bool {
        matches!(self.root_cause().kind(), super::ErrorKind::UnknownDeleteAction(_))
    }
}
