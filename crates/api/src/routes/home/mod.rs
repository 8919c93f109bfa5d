mod index;

pub use index::{index_handler, start_end_hint, start_hint};
