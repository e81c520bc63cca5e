use amtp_core::config::{AmtpConfig, DetectionConfig};
use amtp_core::errors::AmtpResult;
use amtp_core::models::{DecodeResult, DecodeSource, FieldSequence, Packet};
use amtp_core::traits::{IEncodingDetector, ILanguageDetector};
use amtp_core::LanguageId;

use crate::detection::{CodePageDetector, ScriptRatioDetector};
use crate::text;

/// Decoder facade: input → field sequence → aggregates.
///
/// Holds no per-call state; one instance can serve any number of threads.
pub struct AmtpDecoder {
    encoding_detector: Box<dyn IEncodingDetector>,
    language_detector: Box<dyn ILanguageDetector>,
}

impl AmtpDecoder {
    /// Create a decoder with the default detectors and thresholds.
    pub fn new() -> Self {
        Self::with_detection(DetectionConfig::default())
    }

    /// Create a decoder with custom script-ratio thresholds.
    pub fn with_detection(config: DetectionConfig) -> Self {
        Self::with_detectors(
            Box::new(CodePageDetector::new()),
            Box::new(ScriptRatioDetector::new(config)),
        )
    }

    /// Create a decoder from a loaded [`AmtpConfig`].
    pub fn from_config(config: &AmtpConfig) -> Self {
        Self::with_detection(config.detection.clone())
    }

    /// Create a decoder with caller-supplied detectors.
    pub fn with_detectors(
        encoding_detector: Box<dyn IEncodingDetector>,
        language_detector: Box<dyn ILanguageDetector>,
    ) -> Self {
        Self {
            encoding_detector,
            language_detector,
        }
    }

    /// Decode a string. Without a hint the language detector picks one.
    pub fn decode_text(&self, text: &str, language: Option<LanguageId>) -> DecodeResult {
        let language = language.unwrap_or_else(|| self.language_detector.detect(text));
        let _span = amtp_core::decode_span!("text", text.len(), language).entered();

        analyze(
            amtp_field::map_text(text, language),
            language,
            DecodeSource::Text,
        )
    }

    /// Decode a byte buffer.
    ///
    /// With a hint, the bytes are read in that language's default encoding;
    /// without one, the encoding detector chooses. Bytes that are not valid
    /// in the chosen encoding are mapped one by one as raw binary instead.
    pub fn decode_bytes(&self, data: &[u8], language: Option<LanguageId>) -> DecodeResult {
        let (encoding, language) = match language {
            Some(language) => (language.default_encoding(), language),
            None => self.encoding_detector.detect(data),
        };

        match text::decode(data, encoding) {
            Ok(text) => self.decode_text(&text, Some(language)),
            Err(e) => {
                tracing::debug!(%encoding, %language, error = %e, "falling back to raw binary mapping");
                self.decode_binary(data)
            }
        }
    }

    /// Map every byte through the raw-byte mapper.
    pub fn decode_binary(&self, data: &[u8]) -> DecodeResult {
        let _span = amtp_core::decode_span!("binary", data.len(), LanguageId::BinaryRaw).entered();

        analyze(
            amtp_field::map_bytes(data),
            LanguageId::BinaryRaw,
            DecodeSource::Binary,
        )
    }

    /// Frame a payload for transport.
    pub fn encode_packet(&self, payload: &[u8], language: LanguageId) -> AmtpResult<Vec<u8>> {
        Ok(amtp_codec::encode(payload, language)?)
    }

    /// Validate a frame and decode its payload with the header's language.
    ///
    /// An unrecognised language byte is treated as no hint.
    pub fn decode_packet(&self, frame: &[u8]) -> AmtpResult<(Packet, DecodeResult)> {
        let packet = amtp_codec::decode(frame)?;
        let result = self.decode_bytes(&packet.payload, packet.language());
        Ok((packet, result))
    }
}

impl Default for AmtpDecoder {
    fn default() -> Self {
        Self::new()
    }
}

fn analyze(sequence: FieldSequence, language: LanguageId, source: DecodeSource) -> DecodeResult {
    let (internal, external, snapshot) = amtp_field::aggregate(&sequence);
    let total_coherence = amtp_field::sequence_coherence(&sequence);
    let semantic_density = amtp_field::semantic_density(&sequence);

    tracing::trace!(
        len = sequence.len(),
        total_coherence,
        semantic_density,
        "field sequence analyzed"
    );

    DecodeResult {
        internal,
        external,
        snapshot,
        sequence,
        total_coherence,
        semantic_density,
        language,
        source,
    }
}
