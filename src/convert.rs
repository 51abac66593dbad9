use std::io;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::attributes::{Margins, MediaSize, PrintAttributes, Resolution};
use crate::flow::run_print_flow;
use crate::producer::DocumentProducer;
use crate::target::OutputTarget;

/// Page size choices offered to the user.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum PageSizePreset {
    #[default]
    A4,
    Letter,
    Legal,
}

impl PageSizePreset {
    pub fn media_size(self) -> MediaSize {
        match self {
            PageSizePreset::A4 => MediaSize::ISO_A4,
            PageSizePreset::Letter => MediaSize::NA_LETTER,
            PageSizePreset::Legal => MediaSize::NA_LEGAL,
        }
    }
}

/// Margin choices offered to the user.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum MarginPreset {
    /// ~20 mm on every edge.
    #[default]
    Standard,
    /// ~10 mm on every edge.
    Minimal,
    None,
}

impl MarginPreset {
    pub fn margins(self) -> Margins {
        match self {
            MarginPreset::Standard => Margins::uniform(787),
            MarginPreset::Minimal => Margins::uniform(394),
            MarginPreset::None => Margins::NONE,
        }
    }
}

/// User-facing conversion options, persisted by the host as settings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ConvertOptions {
    pub page_size: PageSizePreset,
    pub margin: MarginPreset,
}

impl ConvertOptions {
    /// Expands the presets into the attributes handed to the producer.
    pub fn to_attributes(&self) -> PrintAttributes {
        PrintAttributes::builder()
            .media_size(self.page_size.media_size())
            .resolution(Resolution::new("pdf", "pdf", 600, 600))
            .min_margins(self.margin.margins())
            .build()
    }
}

/// Errors raised while converting a document to a PDF file.
#[derive(Debug, Error)]
pub enum ConvertError {
    #[error("failed to create output file: {0}")]
    Create(#[from] io::Error),
    #[error("failed to generate PDF")]
    Print,
}

/// Converts a document to a PDF file by driving a producer through the
/// print flow against a freshly created file target.
#[derive(Debug, Clone, Default)]
pub struct PdfConverter {
    options: ConvertOptions,
}

impl PdfConverter {
    pub fn new(options: ConvertOptions) -> Self {
        Self { options }
    }

    pub fn options(&self) -> &ConvertOptions {
        &self.options
    }

    /// Renders `producer`'s document into `dir/file_name` and returns the
    /// path on success. A failed flow leaves any partially written file in
    /// place and reports [`ConvertError::Print`] with no further detail.
    pub fn convert<P>(
        &self,
        producer: &mut P,
        dir: &Path,
        file_name: &str,
    ) -> Result<PathBuf, ConvertError>
    where
        P: DocumentProducer + ?Sized,
    {
        let path = dir.join(file_name);
        let mut target = OutputTarget::create(&path)?;
        let attributes = self.options.to_attributes();

        let succeeded = std::cell::Cell::new(false);
        run_print_flow(
            producer,
            &attributes,
            &mut target,
            || succeeded.set(true),
            || {},
        );
        drop(target);

        if succeeded.get() {
            Ok(path)
        } else {
            Err(ConvertError::Print)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::attributes::MediaSizeId;
    use crate::producer::{LayoutResult, PageRange, ProducerError, ScriptedProducer, WriteResult};

    #[test]
    fn presets_expand_to_expected_attributes() {
        let options = ConvertOptions {
            page_size: PageSizePreset::Letter,
            margin: MarginPreset::Minimal,
        };
        let attributes = options.to_attributes();
        assert_eq!(attributes.media_size.id, MediaSizeId::NaLetter);
        assert_eq!(attributes.min_margins, Margins::uniform(394));
        assert_eq!(attributes.resolution.horizontal_dpi, 600);
    }

    #[test]
    fn legal_preset_maps_to_na_legal() {
        assert_eq!(PageSizePreset::Legal.media_size(), MediaSize::NA_LEGAL);
        assert_eq!(MarginPreset::None.margins(), Margins::NONE);
        assert_eq!(MarginPreset::Standard.margins(), Margins::uniform(787));
    }

    #[test]
    fn options_round_trip_through_json() {
        let options = ConvertOptions {
            page_size: PageSizePreset::Legal,
            margin: MarginPreset::Minimal,
        };
        let json = serde_json::to_string(&options).expect("serialize");
        let parsed: ConvertOptions = serde_json::from_str(&json).expect("deserialize");
        assert_eq!(parsed, options);
    }

    #[test]
    fn default_options_parse_from_empty_fields() {
        let parsed: ConvertOptions =
            serde_json::from_str(r#"{"page_size":"A4","margin":"Standard"}"#).expect("parse");
        assert_eq!(parsed, ConvertOptions::default());
    }

    #[test]
    fn convert_writes_producer_payload_to_file() {
        let dir = tempfile::tempdir().expect("tempdir");
        let mut producer = ScriptedProducer::succeeding().with_payload(b"%PDF-1.4 payload".to_vec());
        let converter = PdfConverter::default();

        let path = converter
            .convert(&mut producer, dir.path(), "out.pdf")
            .expect("convert");

        assert_eq!(path, dir.path().join("out.pdf"));
        assert_eq!(std::fs::read(&path).expect("read"), b"%PDF-1.4 payload");
        assert_eq!(producer.layout_calls.len(), 1);
        assert_eq!(producer.write_calls[0].pages, PageRange::All);
    }

    #[test]
    fn convert_collapses_flow_failure() {
        let dir = tempfile::tempdir().expect("tempdir");
        let mut producer = ScriptedProducer::new(
            LayoutResult::Failed(ProducerError::new("bad attrs")),
            WriteResult::Finished {
                pages: PageRange::All,
            },
        );

        let result = PdfConverter::default().convert(&mut producer, dir.path(), "out.pdf");
        assert!(matches!(result, Err(ConvertError::Print)));
        // The created (empty) file stays behind, as the source app leaves it.
        assert!(dir.path().join("out.pdf").exists());
    }

    #[test]
    fn convert_surfaces_file_creation_errors() {
        let dir = tempfile::tempdir().expect("tempdir");
        let missing = dir.path().join("absent");
        let mut producer = ScriptedProducer::succeeding();

        let result = PdfConverter::default().convert(&mut producer, &missing, "out.pdf");
        assert!(matches!(result, Err(ConvertError::Create(_))));
        // The flow never started.
        assert!(producer.layout_calls.is_empty());
    }
}
