use uuid::Uuid;

/// 单次请求的上下文：由认证层解析出的用户身份，以及用于日志关联的请求 ID
#[derive(Debug, Clone)]
pub struct AppContext {
    pub user_id: String,
    pub request_id: Uuid,
}

impl AppContext {
    pub fn new(user_id: impl Into<String>) -> Self {
        Self {
            user_id: user_id.into(),
            request_id: Uuid::new_v4(),
        }
    }

    pub fn user_id(&self) -> &str {
        &self.user_id
    }
}
