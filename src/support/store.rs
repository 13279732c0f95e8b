//! Store seam for the summary pipeline.

use async_trait::async_trait;

use super::models::{CustomerRecord, TicketRecord};
use crate::db::{AppState, StoreError};

/// Read access the summary pipeline needs. Implemented by [`AppState`];
/// tests substitute an in-memory double.
#[async_trait]
pub trait SupportStore {
    async fn fetch_customer(
        &self,
        customer_id: &str,
    ) -> Result<Option<CustomerRecord>, StoreError>;

    async fn fetch_tickets(
        &self,
        customer_id: &str,
        timeframe: &str,
    ) -> Result<Vec<TicketRecord>, StoreError>;
}

#[async_trait]
impl SupportStore for AppState {
    async fn fetch_customer(
        &self,
        customer_id: &str,
    ) -> Result<Option<CustomerRecord>, StoreError> {
        self.get_customer(customer_id).await
    }

    async fn fetch_tickets(
        &self,
        customer_id: &str,
        timeframe: &str,
    ) -> Result<Vec<TicketRecord>, StoreError> {
        self.get_support_tickets(customer_id, timeframe).await
    }
}
