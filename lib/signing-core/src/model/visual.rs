use serde::{Deserialize, Serialize};
use serde_with::skip_serializing_none;
use strum::{AsRefStr, Display};
use thiserror::Error;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, Display)]
pub enum MeasurementUnits {
    #[default]
    Centimeters,
    PdfPoints,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, Display)]
pub enum HorizontalAlign {
    #[default]
    Left,
    Right,
}

/// Text stamped on the signature. `{{signerName}}` and `{{signerNationalId}}` are
/// substituted by the signing service.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VisualText {
    pub text: String,
    pub include_signing_time: bool,
    #[serde(default)]
    pub horizontal_align: HorizontalAlign,
}

#[derive(Clone, PartialEq)]
pub struct VisualImage {
    pub content: Vec<u8>,
    pub mime_type: String,
}

impl std::fmt::Debug for VisualImage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("VisualImage")
            .field("content", &format_args!("<{} bytes>", self.content.len()))
            .field("mime_type", &self.mime_type)
            .finish()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct VisualSize {
    pub width: f64,
    pub height: f64,
}

/// Rectangle relative to the page edges. Each axis is fixed either by a size and one
/// anchored offset, by both offsets (stretch) or by the size alone (centered).
#[skip_serializing_none]
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VisualRectangle {
    pub left: Option<f64>,
    pub top: Option<f64>,
    pub right: Option<f64>,
    pub bottom: Option<f64>,
    pub width: Option<f64>,
    pub height: Option<f64>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, AsRefStr, Display)]
pub enum Axis {
    Horizontal,
    Vertical,
}

#[derive(Debug, Error, PartialEq)]
pub enum PositioningError {
    #[error("{0} placement is not determined")]
    Undetermined(Axis),
    #[error("{0} placement is over-determined")]
    OverDetermined(Axis),
    #[error("Invalid value {value} for `{field}`")]
    InvalidValue { field: &'static str, value: f64 },
    #[error("Positioning preset `{0}` was not resolved")]
    UnresolvedPreset(PositioningPreset),
}

impl VisualRectangle {
    pub fn width_left_anchored(mut self, width: f64, left: f64) -> Self {
        self.width = Some(width);
        self.left = Some(left);
        self.right = None;
        self
    }

    pub fn width_right_anchored(mut self, width: f64, right: f64) -> Self {
        self.width = Some(width);
        self.right = Some(right);
        self.left = None;
        self
    }

    pub fn width_centered(mut self, width: f64) -> Self {
        self.width = Some(width);
        self.left = None;
        self.right = None;
        self
    }

    pub fn horizontal_stretch(mut self, left: f64, right: f64) -> Self {
        self.left = Some(left);
        self.right = Some(right);
        self.width = None;
        self
    }

    pub fn height_top_anchored(mut self, height: f64, top: f64) -> Self {
        self.height = Some(height);
        self.top = Some(top);
        self.bottom = None;
        self
    }

    pub fn height_bottom_anchored(mut self, height: f64, bottom: f64) -> Self {
        self.height = Some(height);
        self.bottom = Some(bottom);
        self.top = None;
        self
    }

    pub fn height_centered(mut self, height: f64) -> Self {
        self.height = Some(height);
        self.top = None;
        self.bottom = None;
        self
    }

    pub fn vertical_stretch(mut self, top: f64, bottom: f64) -> Self {
        self.top = Some(top);
        self.bottom = Some(bottom);
        self.height = None;
        self
    }

    /// Overrides the offsets present in `margins`, keeping the remaining fields
    pub fn with_margins(mut self, margins: &Margins) -> Self {
        if let Some(left) = margins.left {
            self.left = Some(left);
        }
        if let Some(top) = margins.top {
            self.top = Some(top);
        }
        if let Some(right) = margins.right {
            self.right = Some(right);
        }
        if let Some(bottom) = margins.bottom {
            self.bottom = Some(bottom);
        }
        self
    }

    pub fn validate(&self) -> Result<(), PositioningError> {
        let fields = [
            ("left", self.left),
            ("top", self.top),
            ("right", self.right),
            ("bottom", self.bottom),
            ("width", self.width),
            ("height", self.height),
        ];
        for (field, value) in fields {
            if let Some(value) = value {
                if !value.is_finite() || value < 0.0 {
                    return Err(PositioningError::InvalidValue { field, value });
                }
            }
        }

        validate_axis(Axis::Horizontal, self.left, self.width, self.right)?;
        validate_axis(Axis::Vertical, self.top, self.height, self.bottom)
    }
}

fn validate_axis(
    axis: Axis,
    start: Option<f64>,
    size: Option<f64>,
    end: Option<f64>,
) -> Result<(), PositioningError> {
    match (start, size, end) {
        (Some(_), Some(_), Some(_)) => Err(PositioningError::OverDetermined(axis)),
        (_, Some(_), _) | (Some(_), None, Some(_)) => Ok(()),
        _ => Err(PositioningError::Undetermined(axis)),
    }
}

/// Container margin overrides applied to a positioning preset
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Margins {
    pub left: Option<f64>,
    pub top: Option<f64>,
    pub right: Option<f64>,
    pub bottom: Option<f64>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AutoPositioning {
    pub container: VisualRectangle,
    pub signature_rectangle_size: VisualSize,
    pub row_spacing: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Placement {
    Manual(VisualRectangle),
    Auto(AutoPositioning),
}

/// Resolved position of the signature stamp as understood by the signing service.
///
/// Page number `0` appends a new page, negative numbers count from the end of the
/// document (`-1` is the last page).
#[derive(Debug, Clone, PartialEq)]
pub struct VisualPositioning {
    pub page_number: i32,
    pub measurement_units: MeasurementUnits,
    pub placement: Placement,
}

impl VisualPositioning {
    pub fn validate(&self) -> Result<(), PositioningError> {
        match &self.placement {
            Placement::Manual(rectangle) => rectangle.validate(),
            Placement::Auto(auto) => {
                auto.container.validate()?;
                let size = auto.signature_rectangle_size;
                for (field, value) in [
                    ("signatureRectangleSize.width", size.width),
                    ("signatureRectangleSize.height", size.height),
                    ("rowSpacing", auto.row_spacing),
                ] {
                    if !value.is_finite() || value < 0.0 {
                        return Err(PositioningError::InvalidValue { field, value });
                    }
                }
                Ok(())
            }
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, AsRefStr, Display)]
pub enum PositioningPreset {
    Footnote,
    NewPage,
}

/// Requested signature position, presets are resolved through the signing service
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PositioningRequest {
    /// Last page footnote, subsequent signatures are stacked in the same area
    Footnote,
    FootnoteCustom {
        #[serde(flatten)]
        margins: Margins,
    },
    /// New page appended to the end of the document
    NewPage,
    #[serde(rename_all = "camelCase")]
    NewPageCustom {
        #[serde(flatten)]
        margins: Margins,
        signature_rectangle_size: Option<VisualSize>,
    },
    #[serde(rename_all = "camelCase")]
    Manual {
        page_number: i32,
        #[serde(default)]
        measurement_units: MeasurementUnits,
        rectangle: VisualRectangle,
    },
    #[serde(rename_all = "camelCase")]
    AutoAllocate {
        page_number: i32,
        #[serde(default)]
        measurement_units: MeasurementUnits,
        container: VisualRectangle,
        signature_rectangle_size: VisualSize,
        row_spacing: f64,
    },
}

impl Default for PositioningRequest {
    fn default() -> Self {
        Self::NewPageCustom {
            margins: Margins {
                left: Some(2.54),
                top: Some(2.54),
                right: Some(2.54),
                bottom: None,
            },
            signature_rectangle_size: Some(VisualSize {
                width: 5.0,
                height: 3.0,
            }),
        }
    }
}

impl PositioningRequest {
    pub fn preset(&self) -> Option<PositioningPreset> {
        match self {
            Self::Footnote | Self::FootnoteCustom { .. } => Some(PositioningPreset::Footnote),
            Self::NewPage | Self::NewPageCustom { .. } => Some(PositioningPreset::NewPage),
            Self::Manual { .. } | Self::AutoAllocate { .. } => None,
        }
    }

    /// Builds the final positioning, `preset` must be the resolved value of [`Self::preset`]
    pub fn resolve(
        self,
        preset: Option<VisualPositioning>,
    ) -> Result<VisualPositioning, PositioningError> {
        let positioning = match (self, preset) {
            (Self::Footnote | Self::NewPage, Some(preset)) => preset,
            (Self::FootnoteCustom { margins }, Some(preset)) => customize(preset, &margins, None),
            (
                Self::NewPageCustom {
                    margins,
                    signature_rectangle_size,
                },
                Some(preset),
            ) => customize(preset, &margins, signature_rectangle_size),
            (
                Self::Manual {
                    page_number,
                    measurement_units,
                    rectangle,
                },
                _,
            ) => VisualPositioning {
                page_number,
                measurement_units,
                placement: Placement::Manual(rectangle),
            },
            (
                Self::AutoAllocate {
                    page_number,
                    measurement_units,
                    container,
                    signature_rectangle_size,
                    row_spacing,
                },
                _,
            ) => VisualPositioning {
                page_number,
                measurement_units,
                placement: Placement::Auto(AutoPositioning {
                    container,
                    signature_rectangle_size,
                    row_spacing,
                }),
            },
            (request, None) => {
                return Err(PositioningError::UnresolvedPreset(
                    request.preset().unwrap_or(PositioningPreset::NewPage),
                ));
            }
        };

        positioning.validate()?;
        Ok(positioning)
    }
}

fn customize(
    mut preset: VisualPositioning,
    margins: &Margins,
    signature_rectangle_size: Option<VisualSize>,
) -> VisualPositioning {
    preset.placement = match preset.placement {
        Placement::Auto(mut auto) => {
            auto.container = auto.container.with_margins(margins);
            if let Some(size) = signature_rectangle_size {
                auto.signature_rectangle_size = size;
            }
            Placement::Auto(auto)
        }
        Placement::Manual(rectangle) => Placement::Manual(rectangle.with_margins(margins)),
    };
    preset
}

#[derive(Debug, Clone, PartialEq)]
pub struct VisualRepresentation {
    pub text: VisualText,
    pub image: Option<VisualImage>,
    pub position: VisualPositioning,
}

#[cfg(test)]
mod test;
