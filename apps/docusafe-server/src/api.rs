//! API handlers for the DocuSafe server
//!
//! Provides REST endpoints for:
//! - Rule listing
//! - Document upload and analysis
//! - Analysis of already-extracted text
//! - Findings summary export

use std::time::Duration;

use axum::{
    body::Bytes,
    extract::{multipart::MultipartError, rejection::JsonRejection, Multipart, State},
    http::{header, StatusCode},
    response::IntoResponse,
    Json,
};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use audit_engine::{registry, render_summary, segmenter, AuditEngine, ReportInput};
use shared_types::{AuditFlag, AuditRule, RuleOption};
use text_extract::{DocumentFormat, SourceInfo};

use crate::error::ServerError;
use crate::AppState;

/// Health check response
#[derive(Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub service: &'static str,
    pub version: &'static str,
}

/// Handler: GET /health
pub async fn handle_health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy",
        service: "docusafe-server",
        version: env!("CARGO_PKG_VERSION"),
    })
}

/// Rule list response
#[derive(Serialize)]
pub struct RuleListResponse {
    pub success: bool,
    pub rules: Vec<RuleOption>,
    pub count: usize,
    pub default_rule: AuditRule,
}

/// Handler: GET /api/rules
pub async fn handle_list_rules() -> Json<RuleListResponse> {
    let rules = registry::rule_options();
    let count = rules.len();

    Json(RuleListResponse {
        success: true,
        rules,
        count,
        default_rule: registry::DEFAULT_RULE,
    })
}

/// Analysis response, shared by upload and text analysis
#[derive(Serialize)]
pub struct AnalyzeResponse {
    pub text: String,
    pub flags: Vec<AuditFlag>,
    pub rule: AuditRule,
}

/// An uploaded file as received from the multipart form
struct Upload {
    bytes: Bytes,
    source: SourceInfo,
}

fn default_rule_selector() -> String {
    registry::DEFAULT_RULE.id().to_string()
}

/// Body limit overruns surface through the extractors as 413 rejections
fn rejection_error(status: StatusCode, body_text: String) -> ServerError {
    if status == StatusCode::PAYLOAD_TOO_LARGE {
        ServerError::PayloadTooLarge(body_text)
    } else {
        ServerError::InvalidRequest(body_text)
    }
}

fn multipart_error(err: MultipartError) -> ServerError {
    rejection_error(err.status(), err.body_text())
}

fn json_error(err: JsonRejection) -> ServerError {
    rejection_error(err.status(), err.body_text())
}

/// Handler: POST /api/analyze
///
/// Multipart fields: `file` (required) and `rule` (optional id or label).
pub async fn handle_analyze_upload(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> Result<Json<AnalyzeResponse>, ServerError> {
    let mut upload: Option<Upload> = None;
    let mut selector = default_rule_selector();

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(multipart_error)?
    {
        match field.name() {
            Some("file") => {
                let mime_type = field.content_type().unwrap_or("").to_string();
                let file_name = field
                    .file_name()
                    .filter(|name| !name.is_empty())
                    .unwrap_or("document")
                    .to_string();
                let bytes = field
                    .bytes()
                    .await
                    .map_err(multipart_error)?;
                upload = Some(Upload {
                    bytes,
                    source: SourceInfo::new(mime_type, file_name),
                });
            }
            Some("rule") => {
                selector = field
                    .text()
                    .await
                    .map_err(multipart_error)?;
            }
            other => debug!("Ignoring multipart field {:?}", other),
        }
    }

    let upload = upload.ok_or(ServerError::MissingFile)?;
    let format = DocumentFormat::detect(&upload.source);
    info!(
        "Analyze upload: file={}, format={}, bytes={}, rule={}",
        upload.source.file_name,
        format.name(),
        upload.bytes.len(),
        selector
    );
    if format == DocumentFormat::Pdf && !text_extract::pdf::looks_like_pdf(&upload.bytes) {
        debug!("Upload declared as PDF has no %PDF signature");
    }

    let text = extract_with_timeout(upload, state.extract_timeout_ms).await?;
    if text.trim_matches(segmenter::is_space).is_empty() {
        return Err(ServerError::Unextractable("extracted text is empty".into()));
    }

    Ok(Json(analyze(text, &selector)))
}

/// Run extraction on the blocking pool, bounded by the configured timeout
async fn extract_with_timeout(upload: Upload, timeout_ms: u64) -> Result<String, ServerError> {
    let Upload { bytes, source } = upload;
    let task = tokio::task::spawn_blocking(move || text_extract::extract_text(&bytes, &source));

    match tokio::time::timeout(Duration::from_millis(timeout_ms), task).await {
        Err(_) => {
            // Blocking work cannot be cancelled; the thread is held until extraction returns
            warn!(
                "Extraction exceeded {}ms, leaving the blocking task to finish detached",
                timeout_ms
            );
            Err(ServerError::Timeout(timeout_ms))
        }
        // pdf-extract can panic on malformed input; that surfaces here
        Ok(Err(join_err)) => Err(ServerError::Internal(format!(
            "extraction task failed: {}",
            join_err
        ))),
        Ok(Ok(result)) => Ok(result?),
    }
}

fn analyze(text: String, selector: &str) -> AnalyzeResponse {
    let result = AuditEngine::new().analyze(&text, selector);
    info!(
        "Audit complete: rule={}, bytes={}, flags={}",
        result.rule,
        text.len(),
        result.flags.len()
    );

    let flags = to_utf16_offsets(&text, result.flags);
    AnalyzeResponse {
        text,
        flags,
        rule: result.rule,
    }
}

/// Walks a string forward, translating byte offsets to UTF-16 code units
struct Utf16Cursor<'a> {
    text: &'a str,
    byte_pos: usize,
    unit_pos: usize,
}

impl<'a> Utf16Cursor<'a> {
    fn new(text: &'a str) -> Self {
        Self {
            text,
            byte_pos: 0,
            unit_pos: 0,
        }
    }

    fn units_at(&mut self, byte_offset: usize) -> usize {
        if byte_offset < self.byte_pos {
            self.byte_pos = 0;
            self.unit_pos = 0;
        }
        self.unit_pos += self.text[self.byte_pos..byte_offset].encode_utf16().count();
        self.byte_pos = byte_offset;
        self.unit_pos
    }
}

/// Rewrite engine byte offsets into the UTF-16 offsets a browser client
/// slices `text` with
fn to_utf16_offsets(text: &str, mut flags: Vec<AuditFlag>) -> Vec<AuditFlag> {
    let mut cursor = Utf16Cursor::new(text);
    for flag in &mut flags {
        flag.start = cursor.units_at(flag.start);
        flag.end = cursor.units_at(flag.end);
    }
    flags
}

/// Text analysis request body
#[derive(Deserialize)]
pub struct AnalyzeTextRequest {
    /// Already-extracted document text
    pub text: String,

    /// Rule id or label; unknown values fall back to liability
    #[serde(default = "default_rule_selector")]
    pub rule: String,
}

/// Handler: POST /api/analyze/text
pub async fn handle_analyze_text(
    payload: Result<Json<AnalyzeTextRequest>, JsonRejection>,
) -> Result<Json<AnalyzeResponse>, ServerError> {
    let Json(req) = payload.map_err(json_error)?;
    info!("Analyze text: chars={}, rule={}", req.text.len(), req.rule);

    Ok(Json(analyze(req.text, &req.rule)))
}

/// Report request body
#[derive(Deserialize)]
pub struct ReportRequest {
    pub file_name: Option<String>,
    #[serde(default = "default_rule_selector")]
    pub rule: String,
    #[serde(default)]
    pub flags: Vec<AuditFlag>,
}

/// Handler: POST /api/report
pub async fn handle_report(
    payload: Result<Json<ReportRequest>, JsonRejection>,
) -> Result<impl IntoResponse, ServerError> {
    let Json(req) = payload.map_err(json_error)?;
    let rule = registry::resolve(&req.rule);
    info!("Report: rule={}, flags={}", rule, req.flags.len());

    let body = render_summary(&ReportInput {
        file_name: req.file_name,
        rule,
        flags: req.flags,
    });

    Ok(([(header::CONTENT_TYPE, "text/plain; charset=utf-8")], body))
}
