pub mod entry;
pub mod ignore;
pub mod tree;

pub use entry::Entry;
pub use ignore::IgnoreRules;
pub use tree::FileTree;
