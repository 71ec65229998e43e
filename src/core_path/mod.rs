pub mod normalize;

pub use normalize::{join_under_root, parent_virtual_path, resolve_virtual_path};
