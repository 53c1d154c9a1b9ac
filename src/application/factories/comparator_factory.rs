use crate::adapters::outbound::filesystem::ByteComparator;
use crate::adapters::outbound::process::CmpComparator;
use crate::application::dto::ComparatorKind;
use crate::ports::outbound::ContentComparator;

/// Factory for creating content comparators
///
/// Selection of the comparator adapter is driven by configuration, so it
/// sits in the application layer rather than in `main`.
pub struct ComparatorFactory;

impl ComparatorFactory {
    /// Creates a comparator instance for the configured kind
    ///
    /// # Examples
    /// ```
    /// use rpmsnap::application::dto::ComparatorKind;
    /// use rpmsnap::application::factories::ComparatorFactory;
    /// use rpmsnap::ports::outbound::ContentComparator;
    ///
    /// let comparator = ComparatorFactory::create(ComparatorKind::Builtin);
    /// assert_eq!(comparator.name(), "builtin");
    /// ```
    pub fn create(kind: ComparatorKind) -> Box<dyn ContentComparator> {
        match kind {
            ComparatorKind::Builtin => Box::new(ByteComparator::new()),
            ComparatorKind::Cmp => Box::new(CmpComparator::new()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_builtin() {
        assert_eq!(ComparatorFactory::create(ComparatorKind::Builtin).name(), "builtin");
    }

    #[test]
    fn test_create_cmp() {
        assert_eq!(ComparatorFactory::create(ComparatorKind::Cmp).name(), "cmp");
    }
}
