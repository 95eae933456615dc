//! Caching of loaded forests by file identity.
mod fingerprint;
mod identity;

pub use fingerprint::Fingerprint;
pub use identity::IdentityCache;
