use api_types::{
    ErrorResponse,
    expense::{Expense, ExpenseNew},
    stats::Statistics,
};
use reqwest::{Response, Url};
use thiserror::Error;

use crate::error::{AppError, Result};

#[derive(Debug, Error)]
pub enum ClientError {
    #[error("not found")]
    NotFound,
    #[error("rejected: {0}")]
    Validation(String),
    #[error("server error: {0}")]
    Server(String),
    #[error("unreachable: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("invalid endpoint: {0}")]
    InvalidUrl(String),
}

#[derive(Debug, Clone)]
pub struct Client {
    base_url: Url,
    http: reqwest::Client,
}

impl Client {
    pub fn new(base_url: &str) -> Result<Self> {
        let base_url = Url::parse(base_url)
            .map_err(|err| AppError::InvalidBaseUrl(format!("{base_url}: {err}")))?;
        Ok(Self {
            base_url,
            http: reqwest::Client::new(),
        })
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    fn endpoint(&self, path: &str) -> std::result::Result<Url, ClientError> {
        self.base_url
            .join(path)
            .map_err(|err| ClientError::InvalidUrl(format!("{path}: {err}")))
    }

    /// `GET /get_expenses`, in the order the server returns them.
    pub async fn get_expenses(&self) -> std::result::Result<Vec<Expense>, ClientError> {
        let endpoint = self.endpoint("get_expenses")?;
        tracing::debug!("GET {endpoint}");

        let res = self.http.get(endpoint).send().await?;
        let res = ensure_success(res).await?;
        Ok(res.json::<Vec<Expense>>().await?)
    }

    /// `POST /add_expense`. Only the status matters, the body is ignored.
    pub async fn add_expense(&self, payload: &ExpenseNew) -> std::result::Result<(), ClientError> {
        let endpoint = self.endpoint("add_expense")?;
        tracing::debug!("POST {endpoint}");

        let res = self.http.post(endpoint).json(payload).send().await?;
        ensure_success(res).await?;
        Ok(())
    }

    /// `DELETE /delete_expense/{id}`.
    pub async fn delete_expense(&self, id: i64) -> std::result::Result<(), ClientError> {
        let endpoint = self.endpoint(&format!("delete_expense/{id}"))?;
        tracing::debug!("DELETE {endpoint}");

        let res = self.http.delete(endpoint).send().await?;
        ensure_success(res).await?;
        Ok(())
    }

    /// `GET /get_statistics`.
    pub async fn get_statistics(&self) -> std::result::Result<Statistics, ClientError> {
        let endpoint = self.endpoint("get_statistics")?;
        tracing::debug!("GET {endpoint}");

        let res = self.http.get(endpoint).send().await?;
        let res = ensure_success(res).await?;
        Ok(res.json::<Statistics>().await?)
    }
}

async fn ensure_success(res: Response) -> std::result::Result<Response, ClientError> {
    if res.status().is_success() {
        return Ok(res);
    }

    let status = res.status();
    let body = res
        .json::<ErrorResponse>()
        .await
        .ok()
        .and_then(|err| err.message)
        .unwrap_or_else(|| status.to_string());

    let err = match status.as_u16() {
        404 => ClientError::NotFound,
        400 | 422 => ClientError::Validation(body),
        _ => ClientError::Server(body),
    };
    Err(err)
}
