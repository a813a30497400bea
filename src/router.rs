use actix_web::web::{self, Json, JsonConfig, ServiceConfig};
use utoipa::OpenApi;

use crate::api::Definition;
use crate::config::ApiConfig;
use crate::controllers;
use crate::errors::json_error_handler;

pub fn route(app: &mut ServiceConfig) {
    app.app_data(JsonConfig::default().error_handler(json_error_handler));
    // User
    app.service(controllers::v1::user::store);
    app.service(controllers::v1::user::show);
    // Auth
    app.service(controllers::v1::auth::login);
    app.service(controllers::v1::auth::logout);

    // Health check endpoints
    app.service(controllers::health::health);
    app.service(controllers::health::health_db);
}

/// OpenAPI document, plus Swagger UI when built with the `docs` feature
///
/// Register after [`route`], the Swagger UI catch-all must come last.
pub fn docs(api: &ApiConfig) -> impl FnOnce(&mut ServiceConfig) + use<> {
    let api = api.clone();

    move |app: &mut ServiceConfig| {
        if !api.openapi_enabled {
            return;
        }

        app.route("/api.json", web::get().to(openapi));

        #[cfg(feature = "docs")]
        {
            use utoipa_swagger_ui::{SwaggerUi, Url};

            let path = api.swagger_path.trim_end_matches('/').to_string();

            app.service(web::redirect(path.clone(), format!("{}/", path)));
            app.service(SwaggerUi::new(format!("{}/{{_:.*}}", path)).urls(vec![(
                Url::new("User Service", "/api.json"),
                Definition::openapi(),
            )]));
        }
    }
}

async fn openapi() -> Json<utoipa::openapi::OpenApi> {
    Json(Definition::openapi())
}
