//! Common test utilities
//!
//! ```rust,ignore
//! use crate::common::{FakeCluster, Op};
//!
//! let cluster = FakeCluster::with_indices(["fg-000001"]);
//! cluster.fail_on(Op::Reindex, "fg-000001", "boom");
//! ```


pub use fake_cluster::{Call, FakeCluster, Op};

/// Assert that a result is Ok and return the value
#[macro_export]
macro_rules! assert_ok {
    ($expr:expr) => {
        match $expr {
            Ok(v) => v,
            Err(e) => panic!("Expected Ok, got Err: {:?}", e),
        }
    };
}

/// Assert that a result is Err
#[macro_export]
macro_rules! assert_err {
    ($expr:expr) => {
        match $expr {
            Ok(v) => panic!("Expected Err, got Ok: {:?}", v),
            Err(e) => e,
        }
    };
}
