pub mod index_min_pq;

pub use index_min_pq::IndexMinPq;
