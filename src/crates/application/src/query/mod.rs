use thiserror::Error;

pub mod browser;
pub mod dao;
pub mod dto;

#[derive(Error, Debug)]
pub enum QueryError {
    #[error("Not found: {0}")]
    NotFound(String),
    #[error("Database error: {0}")]
    DbError(String),
    #[error("{message}: {source}")]
    Context {
        message: String,
        source: Box<QueryError>,
    },
}

impl QueryError {
    /// 附加上下文信息（例如正在读取的实体和 id），保留原始错误
    pub fn context(self, message: impl Into<String>) -> Self {
        QueryError::Context {
            message: message.into(),
            source: Box::new(self),
        }
    }

    pub fn is_not_found(&self) -> bool {
        match self {
            QueryError::NotFound(_) => true,
            QueryError::Context { source, .. } => source.is_not_found(),
            QueryError::DbError(_) => false,
        }
    }
}
