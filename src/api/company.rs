use log::{debug, info};
use reqwest::Request;

use super::{ApiClient, ClientError};
use crate::models::company::{
    ApplicationsResponse, ApproveQuestionsRequest, ApproveQuestionsResponse, CreateVacancyRequest,
    CreateVacancyResponse, RegisterCompanyRequest, RegisterCompanyResponse,
};

pub const REGISTER_ENDPOINT: &str = "/api/empresa/registrar";
pub const CREATE_VACANCY_ENDPOINT: &str = "/api/empresa/crear-vacante";
pub const APPROVE_QUESTIONS_ENDPOINT: &str = "/api/empresa/aprobar-preguntas";
pub const APPLICATIONS_ENDPOINT: &str = "/api/empresa/:empresaId/aplicaciones";

pub trait CompanyApi {
    async fn register(
        &self,
        request: &RegisterCompanyRequest,
    ) -> Result<RegisterCompanyResponse, ClientError>;

    /// Creates the vacancy and returns the questions the backend suggests for it.
    async fn create_vacancy(
        &self,
        request: &CreateVacancyRequest,
    ) -> Result<CreateVacancyResponse, ClientError>;

    /// Approving questions is what publishes the vacancy.
    async fn approve_questions(
        &self,
        request: &ApproveQuestionsRequest,
    ) -> Result<ApproveQuestionsResponse, ClientError>;

    async fn applications(&self, company_id: &str) -> Result<ApplicationsResponse, ClientError>;
}

#[derive(Debug, Clone)]
pub struct CompanyService {
    client: ApiClient,
}

impl CompanyService {
    pub fn new(client: ApiClient) -> Self {
        Self { client }
    }

    pub fn register_request(
        &self,
        request: &RegisterCompanyRequest,
    ) -> Result<Request, ClientError> {
        let url = self.client.endpoint(REGISTER_ENDPOINT, &[])?;
        Ok(self.client.post_json(url, request).build()?)
    }

    pub fn create_vacancy_request(
        &self,
        request: &CreateVacancyRequest,
    ) -> Result<Request, ClientError> {
        let url = self.client.endpoint(CREATE_VACANCY_ENDPOINT, &[])?;
        Ok(self.client.post_json(url, request).build()?)
    }

    pub fn approve_questions_request(
        &self,
        request: &ApproveQuestionsRequest,
    ) -> Result<Request, ClientError> {
        let url = self.client.endpoint(APPROVE_QUESTIONS_ENDPOINT, &[])?;
        Ok(self.client.post_json(url, request).build()?)
    }

    pub fn applications_request(&self, company_id: &str) -> Result<Request, ClientError> {
        let url = self
            .client
            .endpoint(APPLICATIONS_ENDPOINT, &[("empresaId", company_id)])?;
        Ok(self.client.get(url).build()?)
    }
}

impl CompanyApi for CompanyService {
    async fn register(
        &self,
        request: &RegisterCompanyRequest,
    ) -> Result<RegisterCompanyResponse, ClientError> {
        info!("registering company {}", request.name);
        let http_request = self.register_request(request)?;
        self.client.execute(http_request).await
    }

    async fn create_vacancy(
        &self,
        request: &CreateVacancyRequest,
    ) -> Result<CreateVacancyResponse, ClientError> {
        info!("creating vacancy {} for company {}", request.title, request.empresa_id);
        let http_request = self.create_vacancy_request(request)?;
        self.client.execute(http_request).await
    }

    async fn approve_questions(
        &self,
        request: &ApproveQuestionsRequest,
    ) -> Result<ApproveQuestionsResponse, ClientError> {
        info!(
            "approving {} questions for vacancy {}",
            request.approvals.iter().filter(|a| a.approved).count(),
            request.vacante_id
        );
        let http_request = self.approve_questions_request(request)?;
        self.client.execute(http_request).await
    }

    async fn applications(&self, company_id: &str) -> Result<ApplicationsResponse, ClientError> {
        debug!("listing applications for company {}", company_id);
        let http_request = self.applications_request(company_id)?;
        self.client.execute(http_request).await
    }
}
