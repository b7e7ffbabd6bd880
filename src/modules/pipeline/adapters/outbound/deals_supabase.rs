// DealsGateway over the hosted backend's PostgREST interface (`<url>/rest/v1/deals`).
//
// Every request carries the project `apikey` header and a bearer token, the signed in
// user's access token when available, otherwise the anon key. Row level security is
// enforced by the backend.

use crate::modules::pipeline::adapters::outbound::deal_rows::{DealRow, NewDealRow, StagePatch};
use crate::modules::pipeline::adapters::outbound::deals_gateway::{
    CLOSED_LOST_STAGE, DealsGateway, RemoteError,
};
use crate::modules::pipeline::core::deal::{Deal, NewDeal};
use crate::shared::core::primitives::{DealId, StageId};
use async_trait::async_trait;
use reqwest::{Client, RequestBuilder, Response};

#[derive(Debug, Clone)]
pub struct SupabaseDeals {
    client: Client,
    base_url: String,
    api_key: String,
    bearer: String,
}

impl SupabaseDeals {
    pub fn new(
        base_url: impl Into<String>,
        api_key: impl Into<String>,
        access_token: Option<String>,
    ) -> Self {
        let api_key = api_key.into();
        Self {
            client: Client::new(),
            base_url: base_url.into().trim_end_matches('/').to_string(),
            bearer: access_token.unwrap_or_else(|| api_key.clone()),
            api_key,
        }
    }

    fn table_url(&self) -> String {
        format!("{}/rest/v1/deals", self.base_url)
    }

    fn authorized(&self, request: RequestBuilder) -> RequestBuilder {
        request
            .header("apikey", &self.api_key)
            .bearer_auth(&self.bearer)
    }
}

pub fn fetch_query() -> [(&'static str, String); 3] {
    [
        ("select", "*".to_string()),
        ("stage", format!("neq.{CLOSED_LOST_STAGE}")),
        ("order", "created_at.desc".to_string()),
    ]
}

pub fn id_filter(id: &DealId) -> [(&'static str, String); 1] {
    [("id", format!("eq.{id}"))]
}

async fn ensure_success(response: Response) -> Result<Response, RemoteError> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }
    let message = response.text().await.unwrap_or_default();
    Err(RemoteError::Rejected {
        status: status.as_u16(),
        message,
    })
}

fn transport(err: reqwest::Error) -> RemoteError {
    RemoteError::Transport(err.to_string())
}

#[async_trait]
impl DealsGateway for SupabaseDeals {
    async fn fetch_deals(&self) -> Result<Vec<Deal>, RemoteError> {
        let response = self
            .authorized(self.client.get(self.table_url()))
            .query(&fetch_query())
            .send()
            .await
            .map_err(transport)?;
        let rows: Vec<DealRow> = ensure_success(response)
            .await?
            .json()
            .await
            .map_err(transport)?;
        Ok(rows.into_iter().map(Deal::from).collect())
    }

    async fn insert_deal(&self, deal: &NewDeal) -> Result<Deal, RemoteError> {
        let response = self
            .authorized(self.client.post(self.table_url()))
            .header("Prefer", "return=representation")
            .json(&[NewDealRow::from(deal)])
            .send()
            .await
            .map_err(transport)?;
        let rows: Vec<DealRow> = ensure_success(response)
            .await?
            .json()
            .await
            .map_err(transport)?;
        rows.into_iter()
            .next()
            .map(Deal::from)
            .ok_or_else(|| RemoteError::Backend("insert returned no row".to_string()))
    }

    async fn update_deal_stage(&self, id: &DealId, stage: &StageId) -> Result<(), RemoteError> {
        let response = self
            .authorized(self.client.patch(self.table_url()))
            .query(&id_filter(id))
            .header("Prefer", "return=minimal")
            .json(&StagePatch {
                stage: stage.as_str(),
            })
            .send()
            .await
            .map_err(transport)?;
        ensure_success(response).await?;
        Ok(())
    }
}
