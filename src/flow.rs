use crate::attributes::PrintAttributes;
use crate::producer::{DocumentProducer, LayoutResult, PageRange, WriteResult};
use crate::target::OutputTarget;

/// Drives `producer` through its two-phase protocol and reports a single
/// binary outcome through exactly one of the two callbacks.
/// 以兩階段協定驅動產生器，並透過兩個回呼之一回報單一結果。
///
/// The layout phase runs with no prior-attributes hint and no cancellation
/// signal; once the flow starts it runs to one terminal outcome. A
/// successful layout is followed by a write of [`PageRange::All`] into
/// `target`; the metadata both phases report (`info`, `changed`, the
/// written pages) is discarded. A failed layout skips the write phase.
/// No error detail reaches the caller beyond which callback fired.
pub fn run_print_flow<P, S, F>(
    producer: &mut P,
    attributes: &PrintAttributes,
    target: &mut OutputTarget,
    on_success: S,
    on_failure: F,
) where
    P: DocumentProducer + ?Sized,
    S: FnOnce(),
    F: FnOnce(),
{
    match producer.layout(None, attributes, None) {
        LayoutResult::Finished { .. } => {
            match producer.write(&PageRange::All, target, None) {
                WriteResult::Finished { .. } => on_success(),
                WriteResult::Failed(_) => on_failure(),
            }
        }
        LayoutResult::Failed(_) => on_failure(),
    }
}
