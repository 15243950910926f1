use reqwest::{Method, StatusCode};
use std::sync::Arc;
use tracing::{debug, info};

use sheetlist_core::{
    blank_row, items_from_rows, parse_item_index, row_cells, AddressingContext, CredentialSource,
    Item, NewItem, RowCells,
};

use crate::types::{BatchUpdateRequest, ValueRangeResponse, ValueRangeUpdate};
use crate::{ClientError, Endpoints, TokenManager};

const USER_ENTERED: &str = "USER_ENTERED";

/// List operations over the `A:D` columns of one sheet.
///
/// Row 1 of the sheet is a header; every item occupies one row below it.
#[derive(Clone)]
pub struct RecordClient {
    tokens: TokenManager,
}

impl RecordClient {
    pub fn new(tokens: TokenManager) -> Self {
        Self { tokens }
    }

    /// Builds a client with its own token cache on top of `source`.
    pub fn from_source(
        http: reqwest::Client,
        source: Arc<dyn CredentialSource>,
        endpoints: Endpoints,
    ) -> Self {
        Self::new(TokenManager::new(http, source, endpoints))
    }

    pub fn tokens(&self) -> &TokenManager {
        &self.tokens
    }

    pub async fn list(&self) -> Result<Vec<Item>, ClientError> {
        let ctx = self.addressing()?;
        let token = self.tokens.access_token().await?;
        let url = format!(
            "{}/spreadsheets/{}/values/{}",
            self.tokens.endpoints().sheets_base(),
            urlencoding::encode(&ctx.spreadsheet_id),
            urlencoding::encode(&ctx.range(None))
        );
        let (status, body) = self.send(Method::GET, &url, &token, None).await?;
        if !status.is_success() {
            return Err(ClientError::from_read_status(status, body));
        }
        let values: ValueRangeResponse =
            serde_json::from_str(&body).map_err(|_| ClientError::Request {
                status: status.as_u16(),
                body: body.clone(),
            })?;
        let items = items_from_rows(&values.values);
        debug!(rows = values.values.len(), items = items.len(), "listed items");
        Ok(items)
    }

    /// Writes `item` into the row after the last listed item.
    ///
    /// The target row is derived from the number of listed items, so a blanked
    /// row above the last item makes the write land on an existing item.
    pub async fn append(&self, item: &NewItem) -> Result<(), ClientError> {
        let name = item.name.trim();
        if name.is_empty() {
            return Err(ClientError::Validation("item name is required".to_string()));
        }
        let count = self.list().await?.len();
        let row = count + 2;
        let ctx = self.addressing()?;
        let cells = row_cells(name, item.quantity.as_deref(), item.category.as_deref());
        self.batch_update(&ctx, ctx.range(Some((row, row))), vec![cells])
            .await?;
        info!(row, "appended item");
        Ok(())
    }

    /// Blanks the row an id was read from.
    ///
    /// Ids are positional: after a reorder or any shift of rows, an old id
    /// addresses whatever now sits at that position.
    pub async fn delete(&self, item_id: &str) -> Result<(), ClientError> {
        let row = parse_item_index(item_id)
            .and_then(|index| index.checked_add(1))
            .ok_or_else(|| ClientError::Validation(format!("invalid item id: {item_id}")))?;
        let ctx = self.addressing()?;
        self.batch_update(&ctx, ctx.range(Some((row, row))), vec![blank_row()])
            .await?;
        info!(row, "blanked item row");
        Ok(())
    }

    /// Rewrites rows `2..=items.len() + 1` in the given order.
    ///
    /// Rows past the new length are left untouched. An empty slice writes nothing.
    pub async fn reorder(&self, items: &[Item]) -> Result<(), ClientError> {
        let ctx = self.addressing()?;
        if items.is_empty() {
            debug!("reorder with no items; nothing to write");
            return Ok(());
        }
        let rows: Vec<RowCells> = items
            .iter()
            .map(|item| {
                row_cells(
                    &item.name,
                    item.quantity.as_deref(),
                    item.category.as_deref(),
                )
            })
            .collect();
        let last_row = items.len() + 1;
        self.batch_update(&ctx, ctx.range(Some((2, last_row))), rows)
            .await?;
        info!(count = items.len(), "reordered items");
        Ok(())
    }

    /// `true` when the sheet can be listed with the current configuration.
    pub async fn test_connection(&self) -> bool {
        match self.list().await {
            Ok(_) => true,
            Err(err) => {
                debug!(error = %err, "connection test failed");
                false
            }
        }
    }

    fn addressing(&self) -> Result<AddressingContext, ClientError> {
        AddressingContext::resolve(&**self.tokens.source()).ok_or_else(|| {
            ClientError::Configuration("spreadsheet id is not configured".to_string())
        })
    }

    async fn batch_update(
        &self,
        ctx: &AddressingContext,
        range: String,
        values: Vec<RowCells>,
    ) -> Result<(), ClientError> {
        let token = self.tokens.access_token().await?;
        let url = format!(
            "{}/spreadsheets/{}/values:batchUpdate",
            self.tokens.endpoints().sheets_base(),
            urlencoding::encode(&ctx.spreadsheet_id)
        );
        let payload = BatchUpdateRequest {
            value_input_option: USER_ENTERED,
            data: vec![ValueRangeUpdate { range, values }],
        };
        let (status, body) = self
            .send(Method::POST, &url, &token, Some(&payload))
            .await?;
        if !status.is_success() {
            return Err(ClientError::Request {
                status: status.as_u16(),
                body,
            });
        }
        Ok(())
    }

    async fn send(
        &self,
        method: Method,
        url: &str,
        token: &str,
        payload: Option<&BatchUpdateRequest>,
    ) -> Result<(StatusCode, String), ClientError> {
        let builder = self
            .tokens
            .http_client()
            .request(method.clone(), url)
            .bearer_auth(token);
        let builder = if let Some(payload) = payload {
            builder.json(payload)
        } else {
            builder
        };
        debug!(method = %method, url = %url, "http request");
        let start = std::time::Instant::now();
        let response = builder.send().await?;
        let status = response.status();
        debug!(
            method = %method,
            url = %url,
            status = %status,
            elapsed_ms = start.elapsed().as_millis(),
            "http response"
        );
        let body = response.text().await?;
        Ok((status, body))
    }
}
