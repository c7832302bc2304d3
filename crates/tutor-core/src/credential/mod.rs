//! API credential resolution
//!
//! Three sources are consulted, in precedence order: an explicit override
//! supplied by the embedder, the key the user stored, and the built-in
//! default. Blank values never win.

mod resolver;
mod source;
mod store;

pub use resolver::{CredentialResolver, ResolvedCredential, mask_credential};
pub use source::CredentialSource;
pub use store::{
    CREDENTIAL_PROVIDER, CredentialStore, CredentialsFile, FileCredentialStore,
    MemoryCredentialStore,
};
