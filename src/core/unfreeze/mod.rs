//! Cluster-wide frozen index recovery

mod operator;


pub use operator::{FROZEN_SENTINEL, FrozenIndexDescriptor, UnfreezeOperator, UnfreezeReport};
