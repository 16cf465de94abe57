//! The fixed identifier/name pair served over HTTP.

use super::ProfileFields;

/// Holds an identifier and a name fixed at construction.
///
/// The holder is built once at start-up and shared read-only between
/// workers; there is no way to mutate either field afterwards.
///
/// # Examples
/// ```
/// use backend::domain::RecordHolder;
///
/// let record = RecordHolder::new(1, "Alice");
/// assert_eq!(record.id(), 1);
/// assert_eq!(record.name(), "Alice");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordHolder {
    id: i64,
    name: String,
}

impl RecordHolder {
    /// Store `id` and `name` unchanged.
    pub fn new(id: i64, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
        }
    }

    /// Stored identifier.
    #[must_use]
    pub const fn id(&self) -> i64 {
        self.id
    }

    /// Stored name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Accept a full set of profile fields.
    ///
    /// Intentionally unimplemented: the fields are dropped without effect and
    /// the holder is left unchanged.
    pub fn accept_profile(&self, fields: ProfileFields) {
        self.helper();
        drop(fields);
    }

    fn helper(&self) {}
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use zeroize::Zeroizing;

    fn profile() -> ProfileFields {
        ProfileFields {
            id: 99,
            name: "Mallory".to_owned(),
            age: 41,
            address: "2 Side St".to_owned(),
            phone: "555-0199".to_owned(),
            email: "mallory@example.com".to_owned(),
            password: Zeroizing::new("s3cret".to_owned()),
        }
    }

    #[rstest]
    #[case(1, "Alice")]
    #[case(0, "")]
    #[case(-17, "名前")]
    #[case(i64::MAX, "Zed")]
    fn accessors_return_constructor_arguments(#[case] id: i64, #[case] name: &str) {
        let record = RecordHolder::new(id, name);
        assert_eq!(record.id(), id);
        assert_eq!(record.name(), name);
    }

    #[rstest]
    fn repeated_reads_are_stable() {
        let record = RecordHolder::new(5, "Bob");
        let first = (record.id(), record.name().to_owned());
        for _ in 0..3 {
            assert_eq!((record.id(), record.name().to_owned()), first);
        }
    }

    #[rstest]
    fn accept_profile_leaves_holder_unchanged() {
        let record = RecordHolder::new(1, "Alice");
        let before = record.clone();
        record.accept_profile(profile());
        assert_eq!(record, before);
    }
}
