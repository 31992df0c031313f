//! Native resources: typed handles, the value-keyed registry cache and
//! logical path resolution for images.

pub mod handle;
pub mod locator;
pub mod registry;

use std::io;

use thiserror::Error;

pub use handle::{
    ColorResource, CursorResource, FontResource, GradientResource, ImageResource, Resource,
};
pub use locator::{FileLocator, LocatorChain, ResourceLocator};
pub use registry::ResourceRegistry;

/// Failure to turn a logical resource reference into a native resource.
#[derive(Debug, Error)]
pub enum ResourceError {
    /// No locator could map the logical path to a URI.
    #[error("cannot resolve resource path '{0}'")]
    Unresolved(String),

    /// The URI resolved but reading it failed.
    #[error("cannot read '{uri}'")]
    Io {
        uri: String,
        #[source]
        source: io::Error,
    },

    /// The bytes were read but the toolkit could not decode them.
    #[error("cannot decode '{uri}': {message}")]
    Decode { uri: String, message: String },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_messages() {
        let unresolved = ResourceError::Unresolved("icons/x.png".into());
        insta::assert_snapshot!(unresolved.to_string(), @"cannot resolve resource path 'icons/x.png'");

        let decode = ResourceError::Decode {
            uri: "file:/tmp/x.png".into(),
            message: "bad header".into(),
        };
        insta::assert_snapshot!(decode.to_string(), @"cannot decode 'file:/tmp/x.png': bad header");
    }

    #[test]
    fn io_error_keeps_source() {
        use std::error::Error as _;
        let err = ResourceError::Io {
            uri: "file:/missing".into(),
            source: io::Error::new(io::ErrorKind::NotFound, "gone"),
        };
        assert_eq!(err.to_string(), "cannot read 'file:/missing'");
        assert_eq!(err.source().map(|s| s.to_string()), Some("gone".to_string()));
    }
}
