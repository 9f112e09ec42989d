//! Phone management service

use std::sync::Arc;
use uuid::Uuid;

use crate::{
    error::AppResult,
    models::{CreatePhone, Phone, UpdatePhone},
    store::RecordStore,
};

#[derive(Clone)]
pub struct PhonesService {
    store: Arc<dyn RecordStore>,
}

impl PhonesService {
    pub fn new(store: Arc<dyn RecordStore>) -> Self {
        Self { store }
    }

    pub async fn list(&self) -> AppResult<Vec<Phone>> {
        self.store.list_phones().await
    }

    pub async fn get_by_id(&self, id: Uuid) -> AppResult<Phone> {
        self.store.get_phone(id).await
    }

    pub async fn create(&self, data: CreatePhone) -> AppResult<Phone> {
        self.store.create_phone(data).await
    }

    pub async fn update(&self, id: Uuid, data: UpdatePhone) -> AppResult<Phone> {
        self.store.update_phone(id, data).await
    }

    pub async fn delete(&self, id: Uuid) -> AppResult<()> {
        self.store.delete_phone(id).await
    }
}
