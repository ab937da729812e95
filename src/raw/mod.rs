mod arena;
mod count;
mod handle;
mod node;
mod raw_multiset;

pub(crate) use raw_multiset::{RawIntoIter, RawIter, RawMultiset};
