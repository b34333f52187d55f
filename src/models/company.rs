use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RegisterCompanyRequest {
    #[serde(rename = "nombre_empresa")]
    pub name: String,
    #[serde(rename = "nit")]
    pub tax_id: String,
    #[serde(rename = "industria")]
    pub industry: String,
    #[serde(rename = "tamaño_empresa")]
    pub size: String,
    #[serde(rename = "descripcion")]
    pub description: String,
    #[serde(rename = "ciudad")]
    pub city: String,
    pub email: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RegisterCompanyResponse {
    pub empresa_id: String,
    #[serde(rename = "mensaje", default)]
    pub message: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CreateVacancyRequest {
    pub empresa_id: String,
    #[serde(rename = "titulo")]
    pub title: String,
    #[serde(rename = "descripcion")]
    pub description: String,
    #[serde(rename = "cargo")]
    pub role: String,
    #[serde(rename = "tipo_contrato")]
    pub contract_type: String,
    #[serde(rename = "modalidad")]
    pub modality: String,
    #[serde(rename = "habilidades_requeridas")]
    pub skills: Vec<String>,
    #[serde(rename = "experiencia_min")]
    pub experience_min: u32,
    #[serde(rename = "experiencia_max")]
    pub experience_max: u32,
    #[serde(rename = "salario_min")]
    pub salary_min: u64,
    #[serde(rename = "salario_max")]
    pub salary_max: u64,
    #[serde(rename = "ciudad")]
    pub city: String,
}

/// A question proposed by the backend for a new vacancy. The identifier is
/// only guaranteed once the question has been approved.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SuggestedQuestion {
    #[serde(rename = "pregunta_id", default)]
    pub question_id: Option<String>,
    #[serde(rename = "pregunta")]
    pub text: String,
    #[serde(rename = "tipo_pregunta", default)]
    pub kind: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CreateVacancyResponse {
    pub vacante_id: String,
    #[serde(rename = "preguntas_sugeridas", default)]
    pub suggested_questions: Vec<SuggestedQuestion>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QuestionApproval {
    #[serde(rename = "pregunta_id")]
    pub question_id: String,
    #[serde(rename = "aprobada")]
    pub approved: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApproveQuestionsRequest {
    pub vacante_id: String,
    #[serde(rename = "preguntas_aprobadas")]
    pub approvals: Vec<QuestionApproval>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApproveQuestionsResponse {
    #[serde(rename = "mensaje", default)]
    pub message: String,
    pub vacante_id: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CompanyApplication {
    #[serde(rename = "aplicacion_id")]
    pub application_id: String,
    #[serde(rename = "candidato_nombre", default)]
    pub candidate_name: String,
    #[serde(rename = "vacante_titulo", default)]
    pub vacancy_title: String,
    #[serde(rename = "puntuacion_ia", default)]
    pub score: Option<f64>,
    #[serde(rename = "compatibilidad_porcentaje", default)]
    pub compatibility: Option<f64>,
    #[serde(rename = "estado", default)]
    pub status: String,
    #[serde(rename = "fecha_aplicacion", default)]
    pub applied_at: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApplicationsResponse {
    #[serde(rename = "aplicaciones", default)]
    pub applications: Vec<CompanyApplication>,
}
