use log::info;
use reqwest::Request;
use reqwest::multipart::{Form, Part};

use super::{ApiClient, ClientError};
use crate::models::candidate::{AnswersRequest, AnswersResponse, ApplyRequest, ApplyResponse};

pub const APPLY_ENDPOINT: &str = "/api/candidato/aplicar";
pub const ANSWERS_ENDPOINT: &str = "/api/candidato/responder";

/// Candidate-side operations the interview depends on.
pub trait CandidateApi {
    /// Sends the profile and CV; the backend answers with the interview questions.
    async fn apply(&self, request: &ApplyRequest) -> Result<ApplyResponse, ClientError>;

    /// Sends every answer at once and receives the AI evaluation.
    async fn submit_answers(
        &self,
        request: &AnswersRequest,
    ) -> Result<AnswersResponse, ClientError>;
}

#[derive(Debug, Clone)]
pub struct CandidateService {
    client: ApiClient,
}

impl CandidateService {
    pub fn new(client: ApiClient) -> Self {
        Self { client }
    }

    pub fn apply_request(&self, request: &ApplyRequest) -> Result<Request, ClientError> {
        let url = self.client.endpoint(APPLY_ENDPOINT, &[])?;
        let form = application_form(request)?;

        Ok(self.client.post_multipart(url, form).build()?)
    }

    pub fn answers_request(&self, request: &AnswersRequest) -> Result<Request, ClientError> {
        let url = self.client.endpoint(ANSWERS_ENDPOINT, &[])?;

        Ok(self.client.post_json(url, request).build()?)
    }
}

impl CandidateApi for CandidateService {
    async fn apply(&self, request: &ApplyRequest) -> Result<ApplyResponse, ClientError> {
        info!(
            "submitting application for vacancy {} ({}, {} bytes)",
            request.vacancy_id,
            request.cv.file_name,
            request.cv.bytes.len()
        );
        let http_request = self.apply_request(request)?;
        self.client.execute(http_request).await
    }

    async fn submit_answers(
        &self,
        request: &AnswersRequest,
    ) -> Result<AnswersResponse, ClientError> {
        info!(
            "submitting {} answers for application {}",
            request.answers.len(),
            request.application_id
        );
        let http_request = self.answers_request(request)?;
        self.client.execute(http_request).await
    }
}

fn application_form(request: &ApplyRequest) -> Result<Form, ClientError> {
    let cv = Part::bytes(request.cv.bytes.clone())
        .file_name(request.cv.file_name.clone())
        .mime_str(&request.cv.content_type)?;

    Ok(Form::new()
        .percent_encode_noop()
        .text("vacante_id", request.vacancy_id.clone())
        .text("nombre_anonimo", request.name.clone())
        .text("email", request.email.clone())
        .text("telefono", request.phone.clone())
        .text("ciudad", request.city.clone())
        .text("años_experiencia", request.years_experience.to_string())
        .part("cv_pdf", cv))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::tests::{client, json_body};
    use crate::models::candidate::{Answer, CvDocument, Experience, PDF_CONTENT_TYPE};
    use reqwest::Method;
    use reqwest::header::CONTENT_TYPE;
    use serde_json::json;
    use tokio::io::{AsyncReadExt, AsyncWriteExt};
    use tokio::net::TcpListener;

    fn apply_request() -> ApplyRequest {
        ApplyRequest {
            vacancy_id: "v1".into(),
            name: "Ana".into(),
            email: "a@b.com".into(),
            phone: "555".into(),
            city: "Bogotá".into(),
            years_experience: Experience::Years(3),
            cv: CvDocument::new("cv.pdf", PDF_CONTENT_TYPE, b"%PDF-1.4".to_vec()),
        }
    }

    #[test]
    fn application_is_multipart_with_generated_boundary() {
        let service = CandidateService::new(client("http://localhost:8000"));
        let request = service.apply_request(&apply_request()).unwrap();

        assert_eq!(request.method(), Method::POST);
        assert_eq!(
            request.url().as_str(),
            "http://localhost:8000/api/candidato/aplicar"
        );
        let content_type = request.headers()[CONTENT_TYPE].to_str().unwrap();
        assert!(
            content_type.starts_with("multipart/form-data; boundary="),
            "unexpected content type {content_type}"
        );
    }

    /// Accepts one connection, answers it with `body` and returns the raw request.
    async fn capture_one(listener: TcpListener, body: &'static str) -> String {
        let (mut socket, _) = listener.accept().await.unwrap();
        let mut raw = Vec::new();
        let mut chunk = [0u8; 4096];
        while !raw.ends_with(b"--\r\n") {
            let read = socket.read(&mut chunk).await.unwrap();
            if read == 0 {
                break;
            }
            raw.extend_from_slice(&chunk[..read]);
        }

        let response = format!(
            "HTTP/1.1 200 OK\r\ncontent-type: application/json\r\ncontent-length: {}\r\nconnection: close\r\n\r\n{}",
            body.len(),
            body
        );
        socket.write_all(response.as_bytes()).await.unwrap();
        String::from_utf8_lossy(&raw).into_owned()
    }

    #[tokio::test]
    async fn application_parts_go_out_with_plain_names() {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let origin = format!("http://{}", listener.local_addr().unwrap());
        let server = tokio::spawn(capture_one(
            listener,
            r#"{"aplicacion_id": "A1", "preguntas": []}"#,
        ));

        let service = CandidateService::new(client(&origin));
        let response = service.apply(&apply_request()).await.unwrap();
        let raw = server.await.unwrap();

        assert_eq!(response.application_id, "A1");
        for name in [
            "vacante_id",
            "nombre_anonimo",
            "email",
            "telefono",
            "ciudad",
            "años_experiencia",
            "cv_pdf",
        ] {
            assert!(
                raw.contains(&format!("form-data; name=\"{name}\"")),
                "missing part {name} in:\n{raw}"
            );
        }
        assert!(!raw.contains("name*="), "encoded part name in:\n{raw}");
        assert!(raw.contains("name=\"años_experiencia\"\r\n\r\n3\r\n"));
        assert!(raw.contains("name=\"ciudad\"\r\n\r\nBogotá\r\n"));
        assert!(raw.contains(
            "name=\"cv_pdf\"; filename=\"cv.pdf\"\r\nContent-Type: application/pdf\r\n\r\n%PDF-1.4"
        ));
    }

    #[test]
    fn answers_are_posted_as_json() {
        let service = CandidateService::new(client("http://localhost:8000"));
        let request = service
            .answers_request(&AnswersRequest {
                application_id: "A1".into(),
                answers: vec![Answer {
                    question_id: "q1".into(),
                    answer: "Me apasiona".into(),
                }],
            })
            .unwrap();

        assert_eq!(request.method(), Method::POST);
        assert_eq!(request.url().path(), "/api/candidato/responder");
        assert_eq!(request.headers()[CONTENT_TYPE], "application/json");
        assert_eq!(
            json_body(&request),
            json!({
                "aplicacion_id": "A1",
                "respuestas": [{"pregunta_id": "q1", "respuesta": "Me apasiona"}]
            })
        );
    }
}
