use serde::{Deserialize, Serialize};
use std::fmt;

/// Identifier as the server emits it: integer on SQL-backed deployments,
/// object-id string on document-store deployments. Either form interpolates
/// verbatim into request paths.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum StreamId {
    Number(i64),
    Text(String),
}

impl fmt::Display for StreamId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StreamId::Number(n) => write!(f, "{}", n),
            StreamId::Text(s) => f.write_str(s),
        }
    }
}

impl From<i64> for StreamId {
    fn from(id: i64) -> Self {
        StreamId::Number(id)
    }
}

impl From<&str> for StreamId {
    fn from(id: &str) -> Self {
        StreamId::Text(id.to_string())
    }
}

impl From<String> for StreamId {
    fn from(id: String) -> Self {
        StreamId::Text(id)
    }
}

/// A configured video source, optionally bound to a printer. Only the stream
/// URL is mandatory; everything else is a display or transform hint.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CameraStream {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<StreamId>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub printer_id: Option<StreamId>,
    #[serde(rename = "streamURL")]
    pub stream_url: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub aspect_ratio: Option<String>,
    /// Clockwise degrees.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rotation_clockwise: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub flip_horizontal: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub flip_vertical: Option<bool>,
}

/// Body for create and update; the server assigns the id.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateCameraStreamDto {
    #[serde(rename = "streamURL")]
    pub stream_url: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub printer_id: Option<StreamId>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub aspect_ratio: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rotation_clockwise: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub flip_horizontal: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub flip_vertical: Option<bool>,
}

impl CreateCameraStreamDto {
    pub fn new(stream_url: impl Into<String>) -> Self {
        Self {
            stream_url: stream_url.into(),
            name: None,
            printer_id: None,
            aspect_ratio: None,
            rotation_clockwise: None,
            flip_horizontal: None,
            flip_vertical: None,
        }
    }
}

/// Printer record as owned by the server API contract.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PrinterDto {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<StreamId>,
    pub name: String,
    #[serde(rename = "printerURL")]
    pub printer_url: String,
    #[serde(default)]
    pub enabled: bool,
}

/// Read-only pairing of a printer and its camera stream, for display.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CameraWithPrinter {
    pub printer: PrinterDto,
    pub camera_stream: CameraStream,
}
