pub mod algolia;

pub use algolia::AlgoliaProvider;
