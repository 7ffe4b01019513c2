use super::catalog::{AnnotationKey, Catalog};
use application::query::dao::AnnotationDao;
use application::query::QueryError;
use async_trait::async_trait;
use model::kind::Kind;
use model::shared::{Annotation, AnnotationMap};
use std::sync::Arc;

pub struct AnnotationDaoImpl {
    catalog: Arc<Catalog>,
}

impl AnnotationDaoImpl {
    pub fn new(catalog: Arc<Catalog>) -> Self {
        Self { catalog }
    }
}

#[async_trait]
impl AnnotationDao for AnnotationDaoImpl {
    async fn get(
        &self,
        user_id: &str,
        kind: Kind,
        item_id: &str,
    ) -> Result<Option<Annotation>, QueryError> {
        let key = AnnotationKey::new(user_id, kind, item_id);
        Ok(self.catalog.annotations.get(&key).map(|a| a.value().clone()))
    }

    async fn get_map(
        &self,
        user_id: &str,
        kind: Kind,
        item_ids: &[String],
    ) -> Result<AnnotationMap, QueryError> {
        let mut map = AnnotationMap::with_capacity(item_ids.len());
        for item_id in item_ids {
            let key = AnnotationKey::new(user_id, kind, item_id);
            if let Some(ann) = self.catalog.annotations.get(&key) {
                map.insert(item_id.clone(), ann.value().clone());
            }
        }
        Ok(map)
    }
}
