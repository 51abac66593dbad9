/// Well-known media size identifiers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MediaSizeId {
    IsoA4,
    NaLetter,
    NaLegal,
    Custom,
}

/// A physical page size expressed in mils (1/1000 inch).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MediaSize {
    pub id: MediaSizeId,
    pub width_mils: u32,
    pub height_mils: u32,
}

impl MediaSize {
    pub const ISO_A4: MediaSize = MediaSize::new(MediaSizeId::IsoA4, 8270, 11690);
    pub const NA_LETTER: MediaSize = MediaSize::new(MediaSizeId::NaLetter, 8500, 11000);
    pub const NA_LEGAL: MediaSize = MediaSize::new(MediaSizeId::NaLegal, 8500, 14000);

    pub const fn new(id: MediaSizeId, width_mils: u32, height_mils: u32) -> Self {
        Self {
            id,
            width_mils,
            height_mils,
        }
    }

    /// Converts the size to PostScript points (1/72").
    pub fn to_points(&self) -> (f32, f32) {
        const POINTS_PER_MIL: f32 = 72.0 / 1000.0;
        (
            self.width_mils as f32 * POINTS_PER_MIL,
            self.height_mils as f32 * POINTS_PER_MIL,
        )
    }
}

/// Output resolution advertised to the producer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Resolution {
    pub id: String,
    pub label: String,
    pub horizontal_dpi: u32,
    pub vertical_dpi: u32,
}

impl Resolution {
    pub fn new(
        id: impl Into<String>,
        label: impl Into<String>,
        horizontal_dpi: u32,
        vertical_dpi: u32,
    ) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
            horizontal_dpi,
            vertical_dpi,
        }
    }
}

/// Minimum margins requested from the producer, in mils.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Margins {
    pub left_mils: u32,
    pub top_mils: u32,
    pub right_mils: u32,
    pub bottom_mils: u32,
}

impl Margins {
    pub const NONE: Margins = Margins::uniform(0);

    pub const fn new(left_mils: u32, top_mils: u32, right_mils: u32, bottom_mils: u32) -> Self {
        Self {
            left_mils,
            top_mils,
            right_mils,
            bottom_mils,
        }
    }

    pub const fn uniform(mils: u32) -> Self {
        Self::new(mils, mils, mils, mils)
    }
}

/// Colour mode requested for the produced document.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorMode {
    Color,
    Monochrome,
}

/// Duplex (two-sided) mode requested for the produced document.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DuplexMode {
    Off,
    LongEdge,
    ShortEdge,
}

/// Attributes handed to the producer's layout phase.
///
/// The flow treats these as opaque pass-through data: only the producer
/// interprets them.
#[derive(Debug, Clone, PartialEq)]
pub struct PrintAttributes {
    pub media_size: MediaSize,
    pub resolution: Resolution,
    pub min_margins: Margins,
    pub color_mode: ColorMode,
    pub duplex_mode: DuplexMode,
}

impl PrintAttributes {
    pub fn builder() -> PrintAttributesBuilder {
        PrintAttributesBuilder::default()
    }
}

impl Default for PrintAttributes {
    fn default() -> Self {
        PrintAttributes::builder().build()
    }
}

/// Builder mirroring the incremental construction of [`PrintAttributes`].
#[derive(Debug, Clone)]
pub struct PrintAttributesBuilder {
    media_size: MediaSize,
    resolution: Resolution,
    min_margins: Margins,
    color_mode: ColorMode,
    duplex_mode: DuplexMode,
}

impl Default for PrintAttributesBuilder {
    fn default() -> Self {
        Self {
            media_size: MediaSize::ISO_A4,
            resolution: Resolution::new("pdf", "pdf", 600, 600),
            min_margins: Margins::NONE,
            color_mode: ColorMode::Color,
            duplex_mode: DuplexMode::Off,
        }
    }
}

impl PrintAttributesBuilder {
    pub fn media_size(mut self, media_size: MediaSize) -> Self {
        self.media_size = media_size;
        self
    }

    pub fn resolution(mut self, resolution: Resolution) -> Self {
        self.resolution = resolution;
        self
    }

    pub fn min_margins(mut self, min_margins: Margins) -> Self {
        self.min_margins = min_margins;
        self
    }

    pub fn color_mode(mut self, color_mode: ColorMode) -> Self {
        self.color_mode = color_mode;
        self
    }

    pub fn duplex_mode(mut self, duplex_mode: DuplexMode) -> Self {
        self.duplex_mode = duplex_mode;
        self
    }

    pub fn build(self) -> PrintAttributes {
        PrintAttributes {
            media_size: self.media_size,
            resolution: self.resolution,
            min_margins: self.min_margins,
            color_mode: self.color_mode,
            duplex_mode: self.duplex_mode,
        }
    }
}
