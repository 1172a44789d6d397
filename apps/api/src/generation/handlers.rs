use std::io::Write;

use axum::{
    extract::{Multipart, Path, State},
    Json,
};
use serde::{Deserialize, Serialize};
use tracing::info;
use uuid::Uuid;

use crate::config::ALLOWED_EXTENSION;
use crate::errors::AppError;
use crate::extract::extract_text;
use crate::generation::generator::generate_questions;
use crate::models::response::AnswerPair;
use crate::models::resume::ResumeRow;
use crate::state::AppState;
use crate::store::responses::{create_response, NewResponse};
use crate::store::resumes::{create_resume, get_resume, list_resumes, NewResume};

#[derive(Debug, Serialize)]
pub struct UploadResponse {
    pub success: bool,
    pub resume_id: Uuid,
    pub questions: Vec<String>,
    pub message: String,
}

/// POST /api/upload-resume
///
/// Accepts a multipart `resume` field, extracts its text, generates
/// questions (or the fallback set), and persists the résumé record. The
/// uploaded bytes only ever live in a scoped temp file that is removed on
/// every exit path.
pub async fn handle_upload_resume(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> Result<Json<UploadResponse>, AppError> {
    let mut upload: Option<(String, Vec<u8>)> = None;
    while let Some(field) = multipart.next_field().await? {
        if field.name() == Some("resume") {
            let filename = field.file_name().unwrap_or_default().to_string();
            let data = field.bytes().await?;
            upload = Some((filename, data.to_vec()));
            break;
        }
    }

    let (filename, data) =
        upload.ok_or_else(|| AppError::Validation("No file provided".to_string()))?;
    if filename.is_empty() {
        return Err(AppError::Validation("No file selected".to_string()));
    }
    if !is_allowed_file(&filename) {
        return Err(AppError::Validation("Only PDF files are allowed".to_string()));
    }
    let filename = sanitize_filename(&filename);

    info!("Processing resume upload '{}' ({} bytes)", filename, data.len());

    // Temp-file write and PDF parsing are blocking; the NamedTempFile drop
    // at the end of the closure removes the file whether extraction
    // succeeded or not.
    let upload_dir = state.config.upload_dir.clone();
    let content = tokio::task::spawn_blocking(move || -> Result<String, AppError> {
        let mut temp = tempfile::Builder::new()
            .suffix(".pdf")
            .tempfile_in(&upload_dir)
            .map_err(|e| AppError::Internal(e.into()))?;
        temp.write_all(&data)
            .and_then(|_| temp.flush())
            .map_err(|e| AppError::Internal(e.into()))?;
        Ok(extract_text(temp.path())?)
    })
    .await
    .map_err(|e| AppError::Internal(e.into()))??;

    let questions = generate_questions(state.llm.as_ref(), &content).await;

    let resume = create_resume(
        &state.resumes_db,
        NewResume {
            filename,
            content,
            questions,
        },
    )
    .await?;

    info!("Resume {} stored with {} questions", resume.id, resume.questions.len());

    Ok(Json(UploadResponse {
        success: true,
        resume_id: resume.id,
        questions: resume.questions,
        message: "Resume processed successfully!".to_string(),
    }))
}

#[derive(Debug, Serialize)]
pub struct ResumeResponse {
    pub success: bool,
    pub resume: ResumeRow,
}

/// GET /api/get-questions/:resume_id
pub async fn handle_get_questions(
    State(state): State<AppState>,
    Path(resume_id): Path<Uuid>,
) -> Result<Json<ResumeResponse>, AppError> {
    let resume = get_resume(&state.resumes_db, resume_id)
        .await?
        .ok_or_else(|| AppError::NotFound("Resume not found".to_string()))?;

    Ok(Json(ResumeResponse {
        success: true,
        resume,
    }))
}

#[derive(Debug, Serialize)]
pub struct ResumeListResponse {
    pub success: bool,
    pub resumes: Vec<ResumeRow>,
}

/// GET /api/resumes — all résumés, newest upload first.
pub async fn handle_list_resumes(
    State(state): State<AppState>,
) -> Result<Json<ResumeListResponse>, AppError> {
    let resumes = list_resumes(&state.resumes_db).await?;
    Ok(Json(ResumeListResponse {
        success: true,
        resumes,
    }))
}

#[derive(Debug, Deserialize)]
pub struct SubmitRequest {
    /// Kept as a raw string so a malformed id reaches the handler and maps
    /// to the 404 path instead of a body-deserialization rejection.
    pub resume_id: Option<String>,
    pub responses: Option<Vec<AnswerPair>>,
}

#[derive(Debug, Serialize)]
pub struct SubmitResponse {
    pub success: bool,
    pub response_id: Uuid,
    pub message: String,
}

/// POST /api/submit-responses
///
/// Persists an answer set keyed by the résumé's filename and upload time
/// (copied by value; the response store has no link to the résumé store).
pub async fn handle_submit_responses(
    State(state): State<AppState>,
    Json(req): Json<SubmitRequest>,
) -> Result<Json<SubmitResponse>, AppError> {
    let resume_id = req
        .resume_id
        .ok_or_else(|| AppError::Validation("Resume ID is required".to_string()))?;
    let answers = match req.responses {
        Some(answers) if !answers.is_empty() => answers,
        _ => return Err(AppError::Validation("Responses are required".to_string())),
    };

    // A syntactically invalid id cannot match any record; treat it the same
    // as an unknown one.
    let resume = match Uuid::parse_str(&resume_id) {
        Ok(id) => get_resume(&state.resumes_db, id).await?,
        Err(_) => None,
    }
    .ok_or_else(|| AppError::NotFound("Resume not found".to_string()))?;

    let response = create_response(
        &state.responses_db,
        NewResponse {
            resume_filename: resume.filename,
            resume_upload_time: resume.upload_date,
            answers: serde_json::to_value(&answers)
                .map_err(|e| AppError::Internal(e.into()))?,
        },
    )
    .await?;

    info!(
        "Stored {} answers for resume '{}'",
        answers.len(),
        response.resume_filename
    );

    Ok(Json(SubmitResponse {
        success: true,
        response_id: response.id,
        message: "Responses saved successfully!".to_string(),
    }))
}

/// The upload must carry a `.pdf` extension (case-insensitive).
fn is_allowed_file(filename: &str) -> bool {
    filename
        .rsplit_once('.')
        .is_some_and(|(_, ext)| ext.eq_ignore_ascii_case(ALLOWED_EXTENSION))
}

/// Reduces a client-supplied filename to a safe basename: path components
/// are dropped and anything outside [A-Za-z0-9._-] becomes an underscore.
fn sanitize_filename(filename: &str) -> String {
    let basename = filename
        .rsplit(['/', '\\'])
        .next()
        .unwrap_or(filename);
    basename
        .chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() || matches!(c, '.' | '_' | '-') {
                c
            } else {
                '_'
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_pdf_extension_is_allowed() {
        assert!(is_allowed_file("resume.pdf"));
        assert!(is_allowed_file("resume.PDF"));
        assert!(is_allowed_file("my.resume.pdf"));
        assert!(!is_allowed_file("resume.txt"));
        assert!(!is_allowed_file("resume.pdf.exe"));
        assert!(!is_allowed_file("resume"));
    }

    #[test]
    fn sanitize_strips_path_components() {
        assert_eq!(sanitize_filename("../../etc/passwd"), "passwd");
        assert_eq!(sanitize_filename("C:\\Users\\me\\resume.pdf"), "resume.pdf");
        assert_eq!(sanitize_filename("uploads/resume.pdf"), "resume.pdf");
    }

    #[test]
    fn sanitize_replaces_unsafe_characters() {
        assert_eq!(sanitize_filename("my resume (final).pdf"), "my_resume__final_.pdf");
        assert_eq!(sanitize_filename("jane-doe_v2.pdf"), "jane-doe_v2.pdf");
    }

    #[test]
    fn submit_request_tolerates_missing_fields() {
        let req: SubmitRequest = serde_json::from_str("{}").unwrap();
        assert!(req.resume_id.is_none());
        assert!(req.responses.is_none());

        let req: SubmitRequest = serde_json::from_str(
            r#"{"resume_id": "1f1fcbf6-2c5a-4a36-a19d-1c23ee3289e3", "responses": []}"#,
        )
        .unwrap();
        assert!(req.resume_id.is_some());
        assert_eq!(req.responses.unwrap().len(), 0);
    }

    #[test]
    fn malformed_resume_id_deserializes_instead_of_rejecting() {
        // The handler maps an unparseable id to the not-found path; the
        // request body itself must still deserialize.
        let req: SubmitRequest = serde_json::from_str(
            r#"{"resume_id": "not-a-uuid", "responses": [{"question": "q", "answer": "a"}]}"#,
        )
        .unwrap();
        let raw = req.resume_id.unwrap();
        assert!(Uuid::parse_str(&raw).is_err());
    }
}
