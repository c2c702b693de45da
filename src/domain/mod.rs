//! Pure exchange-domain types: no IO, no clocks, no crypto.
pub mod message;
pub mod session;
pub mod vendor;

pub use message::{Message, Payload, PayloadKind};
pub use session::{Extension, Session};
pub use vendor::{Effect, Match, RegistryEntry, RegistryError, VendorId, VendorRegistry};
