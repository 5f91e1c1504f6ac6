mod llrb;
mod std_btree;

pub use llrb::LlrbMap;
pub use std_btree::StdBTreeMap;
