use serde::{Deserialize, Serialize};

/// Optional filters for the published vacancy listing.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct JobFilters {
    pub city: Option<String>,
    pub role: Option<String>,
    pub modality: Option<String>,
    pub limit: Option<u32>,
    pub offset: Option<u32>,
}

impl JobFilters {
    /// Query pairs with blank strings and zero numbers left out.
    pub fn query_pairs(&self) -> Vec<(&'static str, String)> {
        let texts = [
            ("ciudad", &self.city),
            ("cargo", &self.role),
            ("modalidad", &self.modality),
        ];
        let numbers = [("limit", self.limit), ("offset", self.offset)];

        texts
            .into_iter()
            .filter_map(|(key, value)| {
                value
                    .as_deref()
                    .map(str::trim)
                    .filter(|v| !v.is_empty())
                    .map(|v| (key, v.to_string()))
            })
            .chain(numbers.into_iter().filter_map(|(key, value)| {
                value.filter(|n| *n > 0).map(|n| (key, n.to_string()))
            }))
            .collect()
    }
}

/// One row of the published vacancy listing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JobSummary {
    pub id: String,
    #[serde(rename = "titulo")]
    pub title: String,
    #[serde(rename = "empresa_nombre", default)]
    pub company_name: String,
    #[serde(rename = "ciudad", default)]
    pub city: String,
    #[serde(rename = "salario_min", default)]
    pub salary_min: Option<f64>,
    #[serde(rename = "salario_max", default)]
    pub salary_max: Option<f64>,
    #[serde(rename = "modalidad", default)]
    pub modality: String,
    #[serde(rename = "habilidades_requeridas", default)]
    pub skills: Vec<String>,
    #[serde(rename = "fecha_publicacion", default)]
    pub published_at: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JobPage {
    #[serde(rename = "vacantes")]
    pub jobs: Vec<JobSummary>,
    #[serde(default)]
    pub total: u64,
    #[serde(default)]
    pub limit: u64,
    #[serde(default)]
    pub offset: u64,
}

impl JobPage {
    pub fn has_next(&self) -> bool {
        self.offset + (self.jobs.len() as u64) < self.total
    }

    pub fn has_previous(&self) -> bool {
        self.offset > 0
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Vacancy {
    pub id: String,
    #[serde(rename = "titulo")]
    pub title: String,
    #[serde(rename = "descripcion", default)]
    pub description: String,
    #[serde(rename = "cargo", default)]
    pub role: String,
    #[serde(rename = "tipo_contrato", default)]
    pub contract_type: String,
    #[serde(rename = "modalidad", default)]
    pub modality: String,
    #[serde(rename = "habilidades_requeridas", default)]
    pub skills: Vec<String>,
    #[serde(rename = "experiencia_min", default)]
    pub experience_min: Option<f64>,
    #[serde(rename = "experiencia_max", default)]
    pub experience_max: Option<f64>,
    #[serde(rename = "salario_min", default)]
    pub salary_min: Option<f64>,
    #[serde(rename = "salario_max", default)]
    pub salary_max: Option<f64>,
    #[serde(rename = "ciudad", default)]
    pub city: String,
    #[serde(rename = "numero_vacantes", default)]
    pub openings: Option<u32>,
    #[serde(rename = "beneficios", default)]
    pub benefits: Vec<String>,
    #[serde(rename = "fecha_publicacion", default)]
    pub published_at: Option<String>,
    #[serde(rename = "fecha_cierre", default)]
    pub closes_at: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CompanyProfile {
    #[serde(rename = "nombre_empresa")]
    pub name: String,
    #[serde(rename = "ciudad", default)]
    pub city: String,
    #[serde(rename = "industria", default)]
    pub industry: String,
    #[serde(rename = "descripcion", default)]
    pub description: String,
    #[serde(rename = "tamaño_empresa", default)]
    pub size: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VacancyQuestion {
    pub id: String,
    #[serde(rename = "pregunta")]
    pub text: String,
    #[serde(rename = "tipo_pregunta", default)]
    pub kind: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JobDetail {
    #[serde(rename = "vacante")]
    pub vacancy: Vacancy,
    #[serde(rename = "empresa")]
    pub company: CompanyProfile,
    #[serde(rename = "preguntas", default)]
    pub questions: Vec<VacancyQuestion>,
    #[serde(rename = "numero_aplicaciones", default)]
    pub applications: u64,
}

/// `$2,500 - $3,500`, or whichever bound is known.
pub fn salary_range(min: Option<f64>, max: Option<f64>) -> String {
    match (min, max) {
        (Some(min), Some(max)) => format!("${} - ${}", thousands(min), thousands(max)),
        (Some(min), None) => format!("desde ${}", thousands(min)),
        (None, Some(max)) => format!("hasta ${}", thousands(max)),
        (None, None) => "a convenir".to_string(),
    }
}

fn thousands(amount: f64) -> String {
    let digits = (amount.round() as i64).unsigned_abs().to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(c);
    }
    if amount < 0.0 {
        grouped.insert(0, '-');
    }
    grouped
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn query_pairs_skip_empty_values() {
        let filters = JobFilters {
            city: Some("Bogotá".into()),
            role: Some("  ".into()),
            modality: None,
            limit: Some(10),
            offset: Some(0),
        };

        assert_eq!(
            filters.query_pairs(),
            vec![("ciudad", "Bogotá".to_string()), ("limit", "10".to_string())]
        );
        assert!(JobFilters::default().query_pairs().is_empty());
    }

    #[test]
    fn detail_parses_with_sparse_fields() {
        let detail: JobDetail = serde_json::from_value(json!({
            "vacante": {"id": "v1", "titulo": "Analista de Datos", "salario_min": 2000},
            "empresa": {"nombre_empresa": "DataDriven Corp", "tamaño_empresa": "50-200"},
            "preguntas": [{"id": "p1", "pregunta": "¿SQL?", "tipo_pregunta": "tecnica"}],
            "numero_aplicaciones": 4
        }))
        .unwrap();

        assert_eq!(detail.vacancy.title, "Analista de Datos");
        assert_eq!(detail.vacancy.salary_min, Some(2000.0));
        assert!(detail.vacancy.skills.is_empty());
        assert_eq!(detail.company.size, "50-200");
        assert_eq!(detail.questions[0].id, "p1");
        assert_eq!(detail.applications, 4);
    }

    fn summary(id: &str) -> JobSummary {
        serde_json::from_value(json!({"id": id, "titulo": "Desarrollador"})).unwrap()
    }

    #[test]
    fn pagination_flags() {
        let middle = JobPage {
            jobs: (0..10).map(|i| summary(&i.to_string())).collect(),
            total: 25,
            limit: 10,
            offset: 10,
        };
        assert!(middle.has_previous());
        assert!(middle.has_next());

        let last = JobPage {
            jobs: (0..5).map(|i| summary(&i.to_string())).collect(),
            total: 25,
            limit: 10,
            offset: 20,
        };
        assert!(last.has_previous());
        assert!(!last.has_next());
    }

    #[test]
    fn salary_formatting() {
        assert_eq!(salary_range(Some(2500.0), Some(3500.0)), "$2,500 - $3,500");
        assert_eq!(salary_range(Some(1200000.0), None), "desde $1,200,000");
        assert_eq!(salary_range(None, None), "a convenir");
    }
}
