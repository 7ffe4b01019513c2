use super::catalog::Catalog;
use application::query::dao::PropertyDao;
use application::query::QueryError;
use async_trait::async_trait;
use std::sync::Arc;

pub struct PropertyDaoImpl {
    catalog: Arc<Catalog>,
}

impl PropertyDaoImpl {
    pub fn new(catalog: Arc<Catalog>) -> Self {
        Self { catalog }
    }
}

#[async_trait]
impl PropertyDao for PropertyDaoImpl {
    async fn get(&self, key: &str) -> Result<Option<String>, QueryError> {
        Ok(self.catalog.properties.get(key).map(|v| v.value().clone()))
    }
}
