use std::sync::LazyLock;

use regex::Regex;

use crate::models::candidate::{ApplyRequest, CvDocument, Experience};

static LEADING_INTEGER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\s*([+-]?\d+)").expect("leading integer pattern"));

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("Por favor sube tu CV")]
    MissingCv,
    #[error("Por favor sube un archivo PDF válido.")]
    NotPdf,
    #[error("El campo \"{0}\" es obligatorio")]
    MissingField(&'static str),
    #[error("Escribe una respuesta antes de enviar")]
    EmptyAnswer,
}

/// The candidate's profile as typed, plus the attached CV.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ApplicationDraft {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub city: String,
    pub years_experience: String,
    pub cv: Option<CvDocument>,
}

impl ApplicationDraft {
    pub fn fields(&self) -> [(&'static str, &str); 5] {
        [
            ("Nombre completo", &self.name),
            ("Email", &self.email),
            ("Teléfono", &self.phone),
            ("Ciudad", &self.city),
            ("Años de experiencia", &self.years_experience),
        ]
    }

    /// Checks the form the way the browser and submit handler did: required
    /// fields first, then the CV and its declared type.
    pub fn to_request(&self, vacancy_id: &str) -> Result<ApplyRequest, ValidationError> {
        if let Some((label, _)) = self.fields().iter().find(|(_, v)| v.trim().is_empty()) {
            return Err(ValidationError::MissingField(*label));
        }

        let cv = self.cv.as_ref().ok_or(ValidationError::MissingCv)?;
        if !cv.is_pdf() {
            return Err(ValidationError::NotPdf);
        }

        Ok(ApplyRequest {
            vacancy_id: vacancy_id.to_string(),
            name: self.name.clone(),
            email: self.email.clone(),
            phone: self.phone.clone(),
            city: self.city.clone(),
            years_experience: parse_years(&self.years_experience),
            cv: cv.clone(),
        })
    }
}

/// Reads the leading integer of `text` (`"3.5"` is 3, `"12 años"` is 12).
/// No range check is applied.
pub fn parse_years(text: &str) -> Experience {
    LEADING_INTEGER
        .captures(text)
        .and_then(|captures| captures[1].parse::<i64>().ok())
        .map(Experience::Years)
        .unwrap_or(Experience::NotANumber)
}
