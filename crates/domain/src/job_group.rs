/// Derives the job group key for a `(case, event)` pairing.
///
/// Pure string concatenation. The same inputs must always produce the
/// same key, since cancellation relies on re-deriving it later without
/// any lookup table.
pub fn generate(case_id: &str, event_id: &str) -> String {
    format!("{}_{}", case_id, event_id)
}
