use std::path::Path;

use serde::{Deserialize, Serialize};
use serde_json::Value;

pub const PDF_CONTENT_TYPE: &str = "application/pdf";

/// An interview question as returned by the application call.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Question {
    #[serde(rename = "pregunta_id")]
    pub question_id: String,
    #[serde(rename = "pregunta")]
    pub text: String,
    #[serde(rename = "tipo_pregunta", default)]
    pub kind: Option<String>,
}

/// A file picked by the candidate. The type is whatever was declared for it;
/// the bytes are never inspected.
#[derive(Clone, PartialEq)]
pub struct CvDocument {
    pub file_name: String,
    pub content_type: String,
    pub bytes: Vec<u8>,
}

impl CvDocument {
    pub fn new(
        file_name: impl Into<String>,
        content_type: impl Into<String>,
        bytes: impl Into<Vec<u8>>,
    ) -> Self {
        Self {
            file_name: file_name.into(),
            content_type: content_type.into(),
            bytes: bytes.into(),
        }
    }

    /// Reads a file, declaring its type from the extension.
    pub async fn from_path(path: &Path) -> std::io::Result<Self> {
        let bytes = tokio::fs::read(path).await?;
        let file_name = path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_else(|| "cv".to_string());
        let content_type = content_type_for(&file_name);

        Ok(Self::new(file_name, content_type, bytes))
    }

    pub fn is_pdf(&self) -> bool {
        self.content_type == PDF_CONTENT_TYPE
    }
}

impl std::fmt::Debug for CvDocument {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CvDocument")
            .field("file_name", &self.file_name)
            .field("content_type", &self.content_type)
            .field("bytes", &self.bytes.len())
            .finish()
    }
}

fn content_type_for(file_name: &str) -> &'static str {
    let lower_name = file_name.to_lowercase();
    if lower_name.ends_with(".pdf") {
        PDF_CONTENT_TYPE
    } else if lower_name.ends_with(".docx") {
        "application/vnd.openxmlformats-officedocument.wordprocessingml.document"
    } else if lower_name.ends_with(".doc") {
        "application/msword"
    } else if lower_name.ends_with(".txt") {
        "text/plain"
    } else {
        "application/octet-stream"
    }
}

/// Years of experience as typed. A value with no leading integer is sent as
/// `NaN`, exactly like the web form did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Experience {
    Years(i64),
    NotANumber,
}

impl std::fmt::Display for Experience {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Experience::Years(years) => write!(f, "{years}"),
            Experience::NotANumber => f.write_str("NaN"),
        }
    }
}

/// Everything the `aplicar` call needs, already validated.
#[derive(Debug, Clone, PartialEq)]
pub struct ApplyRequest {
    pub vacancy_id: String,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub city: String,
    pub years_experience: Experience,
    pub cv: CvDocument,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApplyResponse {
    #[serde(rename = "candidato_id", default)]
    pub candidate_id: Option<Value>,
    #[serde(rename = "aplicacion_id")]
    pub application_id: String,
    #[serde(rename = "preguntas", default)]
    pub questions: Vec<Question>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Answer {
    #[serde(rename = "pregunta_id")]
    pub question_id: String,
    #[serde(rename = "respuesta")]
    pub answer: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnswersRequest {
    #[serde(rename = "aplicacion_id")]
    pub application_id: String,
    #[serde(rename = "respuestas")]
    pub answers: Vec<Answer>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnswersResponse {
    #[serde(rename = "mensaje", default)]
    pub message: String,
    #[serde(rename = "puntuacion_ia")]
    pub score: f64,
    #[serde(rename = "compatibilidad_porcentaje")]
    pub compatibility: f64,
    #[serde(rename = "email_enviado", default)]
    pub email_sent: bool,
}
