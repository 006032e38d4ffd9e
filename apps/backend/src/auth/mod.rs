//! Authentication core: token issuance, verification, the per-request
//! context and the ownership gate.

pub mod claims;
pub mod context;
pub mod gate;
pub mod jwt;

pub use claims::{Claims, IdentityClaim};
pub use context::{bind_request_context, RequestContext, TrustedIdentity};
pub use gate::{require_owner, OwnerScope};
pub use jwt::{mint_access_token, verify_access_token, ACCESS_TOKEN_TTL_SECS};
