/// Outcome of a bulk delete. A `deleted_count` of zero is the expected
/// "nothing to remove" case and is not an error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeleteResult {
    pub deleted_count: i64,
}
