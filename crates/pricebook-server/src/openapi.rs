use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Pricebook API",
        version = "0.1.0",
        description = "In-memory item catalogue with a mock token login."
    ),
    paths(
        crate::routes::list_items,
        crate::routes::get_item,
        crate::routes::create_item,
        crate::routes::update_item,
        crate::routes::delete_item,
        crate::routes::login,
        crate::routes::health,
    ),
    components(schemas(
        pricebook_core::Item,
        pricebook_core::Credentials,
        pricebook_core::ReplaceOutcome,
        crate::dto::HealthResponse,
        crate::dto::ErrorResponse,
    )),
    tags(
        (name = "items", description = "Item catalogue"),
        (name = "auth", description = "Mock token login"),
        (name = "system", description = "Health and system status"),
    )
)]
pub struct ApiDoc;
