use crate::application::http::{
    admin::router::AdminApiDoc, health::router::HealthApiDoc, signup::router::SignupApiDoc,
};
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(info(title = "Tablemates API"))]
struct BaseApiDoc;

pub struct ApiDoc;

impl OpenApi for ApiDoc {
    fn openapi() -> utoipa::openapi::OpenApi {
        BaseApiDoc::openapi()
            .nest("", SignupApiDoc::openapi())
            .nest("", AdminApiDoc::openapi())
            .nest("", HealthApiDoc::openapi())
    }
}
