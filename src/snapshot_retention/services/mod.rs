mod latest_selector;

pub use latest_selector::LatestSelector;
