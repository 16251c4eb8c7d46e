//! Namespace prefix assignment.
//!
//! Serialization engines invent prefixes (`ns1`, `ns2`, …) for every
//! namespace they meet. A [`PrefixResolver`] replaces those with stable,
//! configured prefixes and leaves the default namespace unprefixed when the
//! engine allows it.
//!
//! ## Usage
//!
//! ```
//! use qname_enum::prefix::{PrefixConfig, PrefixResolver};
//!
//! let config = PrefixConfig::new()
//!     .with_default_namespace("urn:x")
//!     .with_prefix("urn:y", "y");
//! let resolver = PrefixResolver::from(config);
//!
//! assert_eq!(resolver.resolve_prefix("urn:x", "ns1", false), "");
//! assert_eq!(resolver.resolve_prefix("urn:y", "ns2", false), "y");
//! assert_eq!(resolver.resolve_prefix("urn:z", "ns3", false), "ns3");
//! ```

mod config;
mod resolver;

pub use config::PrefixConfig;
pub use resolver::PrefixResolver;

/// The callback a serialization engine consults for each namespace it is
/// about to declare.
pub trait PrefixMapper: Send + Sync {
    /// Pick the prefix for `namespace_uri`, given the engine's own
    /// `suggestion` and whether an empty prefix is acceptable.
    fn preferred_prefix<'a>(&'a self, namespace_uri: &str, suggestion: &'a str, require_prefix: bool) -> &'a str;
}
