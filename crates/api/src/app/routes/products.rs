use axum::{
    extract::{Extension, Path},
    http::Uri,
    routing::{get, post},
    Json, Router,
};

use cuppa_catalog::ProductFacade;

use crate::app::{dto, translate, SharedStore};

pub fn router() -> Router {
    Router::new()
        .route("/", post(create_product).get(list_products))
        .route(
            "/:id",
            get(get_product).put(update_product).delete(delete_product),
        )
}

pub async fn create_product(
    Extension(store): Extension<SharedStore>,
    uri: Uri,
    Json(body): Json<dto::ProductRequest>,
) -> axum::response::Response {
    let facade = ProductFacade::new(store);
    translate::reply(uri.path(), facade.create(body.into_draft()).await)
}

pub async fn get_product(
    Extension(store): Extension<SharedStore>,
    uri: Uri,
    Path(id): Path<String>,
) -> axum::response::Response {
    let facade = ProductFacade::new(store);
    translate::reply(uri.path(), facade.get(&id).await)
}

pub async fn update_product(
    Extension(store): Extension<SharedStore>,
    uri: Uri,
    Path(id): Path<String>,
    Json(body): Json<dto::ProductRequest>,
) -> axum::response::Response {
    let facade = ProductFacade::new(store);
    translate::reply(uri.path(), facade.update(&id, body.into_draft()).await)
}

pub async fn delete_product(
    Extension(store): Extension<SharedStore>,
    uri: Uri,
    Path(id): Path<String>,
) -> axum::response::Response {
    let facade = ProductFacade::new(store);
    translate::reply(uri.path(), facade.delete(&id).await)
}

pub async fn list_products(
    Extension(store): Extension<SharedStore>,
    uri: Uri,
) -> axum::response::Response {
    let facade = ProductFacade::new(store);
    translate::reply(uri.path(), facade.list().await)
}
