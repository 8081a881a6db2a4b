//! Signature-attestation markers.

use once_cell::sync::Lazy;
use regex::RegexSet;

static SIGNATURE_MARKERS: Lazy<RegexSet> = Lazy::new(|| {
    RegexSet::new([
        r"(?i)assinado\s*(de forma)?\s*digitalmente",
        r"(?i)pré-assinalado",
        r"(?i)pre-assinalado",
        r"(?i)assinatura\s*digital",
        r"(?i)documento\s*assinado",
    ])
    .unwrap()
});

/// True when any known marker appears anywhere in the text.
pub fn is_signed(normalized: &str) -> bool {
    SIGNATURE_MARKERS.is_match(normalized)
}
