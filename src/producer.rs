use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use thiserror::Error;

use crate::attributes::PrintAttributes;
use crate::target::OutputTarget;

/// Cooperative cancellation flag a caller may hand to producer operations.
/// 呼叫端可傳給產生器操作的協作式取消旗標。
#[derive(Debug, Clone, Default)]
pub struct CancellationSignal {
    canceled: Arc<AtomicBool>,
}

impl CancellationSignal {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn cancel(&self) {
        self.canceled.store(true, Ordering::SeqCst);
    }

    pub fn is_canceled(&self) -> bool {
        self.canceled.load(Ordering::SeqCst)
    }
}

/// Page count reported by a producer after layout.
/// 產生器完成佈局後回報的頁數。
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageCount {
    Unknown,
    Exact(u32),
}

/// Kind of content the produced document holds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContentType {
    Document,
    Photo,
    Unknown,
}

/// Metadata a producer reports from its layout phase.
/// 產生器在佈局階段回報的文件中繼資料。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DocumentInfo {
    pub name: String,
    pub content_type: ContentType,
    pub page_count: PageCount,
}

impl DocumentInfo {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            content_type: ContentType::Document,
            page_count: PageCount::Unknown,
        }
    }

    pub fn with_page_count(mut self, page_count: PageCount) -> Self {
        self.page_count = page_count;
        self
    }
}

/// Pages requested from the producer's write phase.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PageRange {
    All,
    Range { start: u32, end: u32 },
    Selection(Vec<u32>),
}

impl PageRange {
    pub fn contains(&self, page: u32) -> bool {
        match self {
            PageRange::All => true,
            PageRange::Range { start, end } => *start <= page && page <= *end,
            PageRange::Selection(set) => set.contains(&page),
        }
    }
}

/// Error detail reported by a failing producer phase.
/// 產生器階段失敗時回報的錯誤內容。
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{0}")]
pub struct ProducerError(pub String);

impl ProducerError {
    pub fn new(message: impl Into<String>) -> Self {
        Self(message.into())
    }
}

/// Outcome of the layout phase. Mirrors the finished/failed callback pair
/// of the source protocol as a single discriminated result.
/// 佈局階段的結果，以單一列舉呈現原協定的完成與失敗回呼。
#[derive(Debug, Clone, PartialEq)]
pub enum LayoutResult {
    Finished { info: DocumentInfo, changed: bool },
    Failed(ProducerError),
}

/// Outcome of the write phase.
#[derive(Debug, Clone, PartialEq)]
pub enum WriteResult {
    Finished { pages: PageRange },
    Failed(ProducerError),
}

/// A document-producing collaborator driven through a two-phase protocol:
/// layout determines document structure, write renders it into the target.
/// Each phase yields exactly one outcome.
/// 以兩階段協定驅動的文件產生器：佈局決定文件結構，寫入將內容輸出到目標。
/// 每個階段僅產生一個結果。
pub trait DocumentProducer {
    /// Lays the document out for `new_attributes`. `old_attributes` carries
    /// the previously laid-out attributes when re-layout is requested.
    fn layout(
        &mut self,
        old_attributes: Option<&PrintAttributes>,
        new_attributes: &PrintAttributes,
        signal: Option<&CancellationSignal>,
    ) -> LayoutResult;

    /// Renders the requested pages into `target`.
    fn write(
        &mut self,
        pages: &PageRange,
        target: &mut OutputTarget,
        signal: Option<&CancellationSignal>,
    ) -> WriteResult;
}

/// A recorded layout invocation captured by the scripted producer.
#[cfg(test)]
#[derive(Debug, Clone)]
pub struct RecordedLayout {
    pub had_old_attributes: bool,
    pub new_attributes: PrintAttributes,
    pub had_signal: bool,
}

/// A recorded write invocation captured by the scripted producer.
#[cfg(test)]
#[derive(Debug, Clone)]
pub struct RecordedWrite {
    pub pages: PageRange,
    pub had_signal: bool,
}

/// Scripted [`DocumentProducer`] used for tests: replays configured
/// outcomes and records every call it receives.
/// 測試用的腳本化產生器：重播設定好的結果並記錄每次呼叫。
#[cfg(test)]
pub struct ScriptedProducer {
    layout_outcome: LayoutResult,
    write_outcome: WriteResult,
    payload: Vec<u8>,
    pub layout_calls: Vec<RecordedLayout>,
    pub write_calls: Vec<RecordedWrite>,
}

#[cfg(test)]
impl ScriptedProducer {
    pub fn new(layout_outcome: LayoutResult, write_outcome: WriteResult) -> Self {
        Self {
            layout_outcome,
            write_outcome,
            payload: Vec::new(),
            layout_calls: Vec::new(),
            write_calls: Vec::new(),
        }
    }

    pub fn succeeding() -> Self {
        Self::new(
            LayoutResult::Finished {
                info: DocumentInfo::new("scripted.pdf").with_page_count(PageCount::Exact(1)),
                changed: true,
            },
            WriteResult::Finished {
                pages: PageRange::All,
            },
        )
    }

    /// Bytes the producer writes into the target during a finishing write.
    pub fn with_payload(mut self, payload: impl Into<Vec<u8>>) -> Self {
        self.payload = payload.into();
        self
    }
}

#[cfg(test)]
impl DocumentProducer for ScriptedProducer {
    fn layout(
        &mut self,
        old_attributes: Option<&PrintAttributes>,
        new_attributes: &PrintAttributes,
        signal: Option<&CancellationSignal>,
    ) -> LayoutResult {
        self.layout_calls.push(RecordedLayout {
            had_old_attributes: old_attributes.is_some(),
            new_attributes: new_attributes.clone(),
            had_signal: signal.is_some(),
        });
        self.layout_outcome.clone()
    }

    fn write(
        &mut self,
        pages: &PageRange,
        target: &mut OutputTarget,
        signal: Option<&CancellationSignal>,
    ) -> WriteResult {
        self.write_calls.push(RecordedWrite {
            pages: pages.clone(),
            had_signal: signal.is_some(),
        });
        if let WriteResult::Finished { .. } = self.write_outcome {
            use std::io::Write as _;
            if target.write_all(&self.payload).is_err() {
                return WriteResult::Failed(ProducerError::new("target rejected payload"));
            }
        }
        self.write_outcome.clone()
    }
}
