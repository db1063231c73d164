use crate::{
    auth::auth_handlers,
    conversation::conversation_handlers,
    item::item_handlers,
    message::message_handlers,
    middleware::auth_middleware,
    rating::rating_handlers,
    search::search_handlers,
    state::AppState,
};
use axum::{
    middleware,
    routing::{get, post},
    Router,
};
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::auth::auth_handlers::register,
        crate::auth::auth_handlers::login,
        crate::search::search_handlers::search,
        crate::item::item_handlers::create_item,
        crate::item::item_handlers::delete_item,
        crate::conversation::conversation_handlers::start_or_get_conversation,
        crate::conversation::conversation_handlers::list_conversations,
        crate::message::message_handlers::list_messages,
        crate::message::message_handlers::post_message,
        crate::rating::rating_handlers::submit_rating,
    ),
    components(
        schemas(
            crate::auth::auth_dto::RegisterRequest,
            crate::auth::auth_dto::LoginRequest,
            crate::auth::auth_dto::AuthResponse,
            crate::user::user_models::UserResponse,
            crate::item::item_dto::CreateItemRequest,
            crate::item::item_models::Item,
            crate::item::item_models::ExchangeKind,
            crate::conversation::conversation_dto::StartConversationRequest,
            crate::conversation::conversation_dto::ConversationResponse,
            crate::conversation::conversation_dto::ParticipantResponse,
            crate::message::message_dto::SendMessageRequest,
            crate::message::message_models::Message,
            crate::rating::rating_dto::SubmitRatingRequest,
            crate::rating::rating_models::Rating,
        )
    ),
    tags(
        (name = "auth", description = "Signup and login"),
        (name = "search", description = "Radius search over listings"),
        (name = "items", description = "Listing management"),
        (name = "conversations", description = "Pairing neighbors over items"),
        (name = "messages", description = "Conversation messages"),
        (name = "ratings", description = "Post-exchange ratings")
    ),
    modifiers(&SecurityAddon)
)]
struct ApiDoc;

struct SecurityAddon;

impl utoipa::Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "bearer_auth",
                utoipa::openapi::security::SecurityScheme::Http(
                    utoipa::openapi::security::Http::new(
                        utoipa::openapi::security::HttpAuthScheme::Bearer,
                    ),
                ),
            )
        }
    }
}

pub fn create_router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    // Public routes (no auth required)
    let auth_routes = Router::new()
        .route("/register", post(auth_handlers::register))
        .route("/login", post(auth_handlers::login));

    let search_routes = Router::new().route("/", get(search_handlers::search));

    // Reads are public; create/delete authenticate through the AuthUser
    // extractor since the group mixes both
    let item_routes = Router::new()
        .route(
            "/",
            get(item_handlers::list_items).post(item_handlers::create_item),
        )
        .route(
            "/:id",
            get(item_handlers::get_item).delete(item_handlers::delete_item),
        );

    // Protected routes (auth required)
    let conversation_routes = Router::new()
        .route(
            "/",
            get(conversation_handlers::list_conversations)
                .post(conversation_handlers::start_or_get_conversation),
        )
        .route_layer(middleware::from_fn_with_state(
            state.clone(),
            auth_middleware,
        ));

    let message_routes = Router::new()
        .route(
            "/",
            get(message_handlers::list_messages).post(message_handlers::post_message),
        )
        .route_layer(middleware::from_fn_with_state(
            state.clone(),
            auth_middleware,
        ));

    let rating_routes = Router::new()
        .route("/", post(rating_handlers::submit_rating))
        .route_layer(middleware::from_fn_with_state(
            state.clone(),
            auth_middleware,
        ));

    let api_routes = Router::new()
        .nest("/auth", auth_routes)
        .nest("/search", search_routes)
        .nest("/items", item_routes)
        .nest("/conversations", conversation_routes)
        .nest("/messages", message_routes)
        .nest("/ratings", rating_routes);

    Router::new()
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .nest("/api", api_routes)
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}
