pub mod guard;
pub mod policy;
pub mod store;

pub use guard::{evaluate, Evaluation, SpamGuard, SpamStatus};
pub use policy::SpamPolicy;
pub use store::{AttributeStore, MemoryAttributeStore, PgAttributeStore};
