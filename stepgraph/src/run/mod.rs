//! Run records and their in-memory store.

mod record;
mod store;

pub use record::RunRecord;
pub use store::RunStore;
