pub mod response;
pub mod store;

pub use response::ResponseCache;
pub use store::FeatureStore;
