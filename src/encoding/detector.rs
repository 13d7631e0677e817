use encoding_rs::Encoding;

/// Guesses an encoding from raw bytes when every configured candidate failed.
pub trait EncodingDetector {
    fn detect(&self, bytes: &[u8]) -> Option<&'static Encoding>;
}

/// Statistical detector backed by `chardetng`.
#[derive(Debug, Default, Clone, Copy)]
pub struct ChardetDetector;

impl EncodingDetector for ChardetDetector {
    fn detect(&self, bytes: &[u8]) -> Option<&'static Encoding> {
        let mut detector = chardetng::EncodingDetector::new();
        detector.feed(bytes, true);
        Some(detector.guess(None, true))
    }
}
