use log::debug;
use reqwest::Request;

use super::{ApiClient, ClientError};
use crate::models::job::{JobDetail, JobFilters, JobPage};

pub const PUBLISHED_ENDPOINT: &str = "/api/vacantes/publicadas";
pub const DETAIL_ENDPOINT: &str = "/api/vacantes/:vacanteId/detalles";

pub trait JobsApi {
    async fn published(&self, filters: &JobFilters) -> Result<JobPage, ClientError>;

    async fn detail(&self, vacancy_id: &str) -> Result<JobDetail, ClientError>;
}

#[derive(Debug, Clone)]
pub struct JobsService {
    client: ApiClient,
}

impl JobsService {
    pub fn new(client: ApiClient) -> Self {
        Self { client }
    }

    pub fn published_request(&self, filters: &JobFilters) -> Result<Request, ClientError> {
        let mut url = self.client.endpoint(PUBLISHED_ENDPOINT, &[])?;
        let pairs = filters.query_pairs();
        if !pairs.is_empty() {
            url.query_pairs_mut().extend_pairs(pairs);
        }

        Ok(self.client.get(url).build()?)
    }

    pub fn detail_request(&self, vacancy_id: &str) -> Result<Request, ClientError> {
        let url = self
            .client
            .endpoint(DETAIL_ENDPOINT, &[("vacanteId", vacancy_id)])?;

        Ok(self.client.get(url).build()?)
    }
}

impl JobsApi for JobsService {
    async fn published(&self, filters: &JobFilters) -> Result<JobPage, ClientError> {
        debug!("listing published vacancies with {:?}", filters);
        let request = self.published_request(filters)?;
        self.client.execute(request).await
    }

    async fn detail(&self, vacancy_id: &str) -> Result<JobDetail, ClientError> {
        debug!("loading vacancy {}", vacancy_id);
        let request = self.detail_request(vacancy_id)?;
        self.client.execute(request).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::tests::client;
    use reqwest::Method;

    #[test]
    fn listing_without_filters_has_no_query() {
        let service = JobsService::new(client("http://localhost:8000"));
        let request = service.published_request(&JobFilters::default()).unwrap();

        assert_eq!(request.method(), Method::GET);
        assert_eq!(
            request.url().as_str(),
            "http://localhost:8000/api/vacantes/publicadas"
        );
    }

    #[test]
    fn listing_encodes_filters() {
        let service = JobsService::new(client("http://localhost:8000"));
        let request = service
            .published_request(&JobFilters {
                city: Some("Bogotá".into()),
                modality: Some("remoto".into()),
                limit: Some(10),
                offset: Some(20),
                ..Default::default()
            })
            .unwrap();

        let pairs: Vec<(String, String)> = request
            .url()
            .query_pairs()
            .map(|(k, v)| (k.into_owned(), v.into_owned()))
            .collect();
        assert_eq!(
            pairs,
            vec![
                ("ciudad".to_string(), "Bogotá".to_string()),
                ("modalidad".to_string(), "remoto".to_string()),
                ("limit".to_string(), "10".to_string()),
                ("offset".to_string(), "20".to_string()),
            ]
        );
    }

    #[test]
    fn detail_path_contains_the_vacancy() {
        let service = JobsService::new(client("http://localhost:8000"));
        let request = service.detail_request("v-42").unwrap();

        assert_eq!(request.method(), Method::GET);
        assert_eq!(request.url().path(), "/api/vacantes/v-42/detalles");
    }
}
