mod comparator_factory;

pub use comparator_factory::ComparatorFactory;
