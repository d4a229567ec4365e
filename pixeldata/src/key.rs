//! Representation keys.

use dicom_pixrep_encoding::adapters::{params_eq, RepresentationParameter, RepresentationParams};
use dicom_pixrep_encoding::TransferSyntaxId;
use std::fmt;
use std::sync::Arc;

/// The key of a pixel data representation:
/// a transfer syntax and optional, codec-defined representation parameters.
///
/// Two keys are equal if their transfer syntaxes are equal
/// and their parameters compare equal (or are both absent).
#[derive(Debug, Clone)]
pub struct RepresentationKey {
    ts: TransferSyntaxId,
    params: Option<RepresentationParams>,
}

impl RepresentationKey {
    pub fn new(ts: TransferSyntaxId, params: Option<RepresentationParams>) -> Self {
        RepresentationKey { ts, params }
    }

    /// Create a key with the given parameters.
    pub fn with_params<P>(ts: TransferSyntaxId, params: P) -> Self
    where
        P: RepresentationParameter,
    {
        RepresentationKey {
            ts,
            params: Some(Arc::new(params)),
        }
    }

    /// The key under which native pixel data is reported.
    pub fn native() -> Self {
        RepresentationKey {
            ts: TransferSyntaxId::NATIVE_PIVOT,
            params: None,
        }
    }

    pub fn ts(&self) -> TransferSyntaxId {
        self.ts
    }

    pub fn params(&self) -> Option<&dyn RepresentationParameter> {
        self.params.as_deref()
    }

    pub fn shared_params(&self) -> Option<&RepresentationParams> {
        self.params.as_ref()
    }

    /// Whether this key refers to native pixel data.
    pub fn is_native(&self) -> bool {
        self.ts.descriptor().uses_native_format()
    }

    /// Whether this key refers to an encapsulated representation.
    pub fn is_encapsulated(&self) -> bool {
        self.ts.descriptor().uses_encapsulated_format()
    }

    pub(crate) fn matches(
        &self,
        ts: TransferSyntaxId,
        params: Option<&dyn RepresentationParameter>,
    ) -> bool {
        self.ts == ts && params_eq(self.params(), params)
    }
}

impl PartialEq for RepresentationKey {
    fn eq(&self, other: &Self) -> bool {
        self.matches(other.ts, other.params())
    }
}

impl From<TransferSyntaxId> for RepresentationKey {
    fn from(ts: TransferSyntaxId) -> Self {
        RepresentationKey { ts, params: None }
    }
}

impl fmt::Display for RepresentationKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.params {
            Some(params) => write!(f, "{} {:?}", self.ts, params),
            None => write!(f, "{}", self.ts),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use dicom_pixrep_encoding::adapters::EncodeOptions;

    #[test]
    fn keys_compare_by_syntax_and_params() {
        let ts = TransferSyntaxId::JpegBaseline;
        let a = RepresentationKey::with_params(ts, EncodeOptions::new().quality(80));
        let b = RepresentationKey::with_params(ts, EncodeOptions::new().quality(80));
        let c = RepresentationKey::with_params(ts, EncodeOptions::new().quality(50));
        let d = RepresentationKey::from(ts);

        assert_eq!(a, b);
        assert_ne!(a, c);
        assert_ne!(a, d);
        assert_eq!(d, RepresentationKey::new(ts, None));
        assert_ne!(
            d,
            RepresentationKey::from(TransferSyntaxId::JpegExtended)
        );
    }

    #[test]
    fn native_key() {
        let key = RepresentationKey::native();
        assert!(key.is_native());
        assert!(!key.is_encapsulated());
        assert_eq!(key.ts(), TransferSyntaxId::ExplicitVRLittleEndian);
        assert!(key.params().is_none());

        assert!(RepresentationKey::from(TransferSyntaxId::ImplicitVRLittleEndian).is_native());
        assert!(RepresentationKey::from(TransferSyntaxId::RleLossless).is_encapsulated());
    }
}
