use crate::db::DbPool;
use std::sync::Arc;

use crate::auth::auth_service::AuthService;
use crate::conversation::conversation_service::ConversationService;
use crate::item::item_service::ItemService;
use crate::message::message_service::MessageService;
use crate::rating::rating_service::RatingService;
use crate::search::search_service::SearchService;

#[derive(Clone)]
pub struct AppState {
    pub db: DbPool,
    pub config: Arc<Config>,
    pub auth_service: AuthService,
    pub item_service: ItemService,
    pub search_service: SearchService,
    pub conversation_service: ConversationService,
    pub message_service: MessageService,
    pub rating_service: RatingService,
}

#[derive(Clone)]
pub struct Config {
    pub jwt_secret: String,
    pub jwt_expiration_hours: i64,
}

impl Config {
    pub fn from_env() -> Self {
        Self {
            jwt_secret: std::env::var("JWT_SECRET").expect("JWT_SECRET must be set"),
            jwt_expiration_hours: std::env::var("JWT_EXPIRATION_HOURS")
                .unwrap_or_else(|_| "24".to_string())
                .parse()
                .expect("JWT_EXPIRATION_HOURS must be a number"),
        }
    }
}
