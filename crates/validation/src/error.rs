#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    #[error("{kind} #{index} is missing `{field}`")]
    MissingField {
        kind: &'static str,
        index: usize,
        field: &'static str,
    },

    #[error("{kind} #{index} has a blank `{field}`")]
    BlankField {
        kind: &'static str,
        index: usize,
        field: &'static str,
    },

    #[error("duplicate {kind} id: {id}")]
    DuplicateId { kind: &'static str, id: u64 },
}
