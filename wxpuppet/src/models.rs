pub mod common;
pub mod contact;
pub mod contact_internal;
pub mod message;

pub use contact::{ContactInfo, Gender};
pub use contact_internal::ContactInternal;
pub use message::Message;
