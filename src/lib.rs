//! Print-flow orchestration for the markdown-to-PDF pipeline: drives a
//! document producer through its layout and write phases and reports one
//! success/failure outcome.

pub mod attributes;
pub mod convert;
pub mod flow;
pub mod producer;
pub mod target;

pub use attributes::{
    ColorMode, DuplexMode, Margins, MediaSize, MediaSizeId, PrintAttributes,
    PrintAttributesBuilder, Resolution,
};
pub use convert::{ConvertError, ConvertOptions, MarginPreset, PageSizePreset, PdfConverter};
pub use flow::run_print_flow;
pub use producer::{
    CancellationSignal, ContentType, DocumentInfo, DocumentProducer, LayoutResult, PageCount,
    PageRange, ProducerError, WriteResult,
};
pub use target::OutputTarget;
