use std::{
    net::{SocketAddr, TcpListener},
    sync::Arc,
};
use tokio::sync::Mutex;

use actix_web::{
    delete,
    dev::Server,
    get,
    http::{header, StatusCode},
    middleware, post,
    web::{self, Data},
    HttpResponse, Responder, ResponseError,
};
use log::{info, warn};
use serde::{Deserialize, Serialize};

use crate::domain::{try_signup, try_unregister, ActivityStore, SignupError};

pub const INDEX_PAGE: &str = "/static/index.html";

type SStore = Data<Mutex<ActivityStore>>;

#[derive(Debug, Serialize, Deserialize)]
pub struct Message {
    pub message: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorDetail {
    pub detail: String,
}

#[derive(Debug, Deserialize)]
struct EmailQuery {
    email: String,
}

impl ResponseError for SignupError {
    fn status_code(&self) -> StatusCode {
        match self {
            SignupError::ActivityNotFound => StatusCode::NOT_FOUND,
            SignupError::AlreadySignedUp | SignupError::NotSignedUp => StatusCode::BAD_REQUEST,
        }
    }

    fn error_response(&self) -> HttpResponse {
        HttpResponse::build(self.status_code()).json(ErrorDetail {
            detail: self.to_string(),
        })
    }
}

#[get("/")]
async fn root() -> impl Responder {
    HttpResponse::TemporaryRedirect()
        .insert_header((header::LOCATION, INDEX_PAGE))
        .finish()
}

#[get("/activities")]
async fn get_activities(store: SStore) -> impl Responder {
    let store = store.lock().await;
    HttpResponse::Ok().json(&*store)
}

#[post("/activities/{name}/signup")]
async fn signup(
    store: SStore,
    name: web::Path<String>,
    query: web::Query<EmailQuery>,
) -> Result<impl Responder, SignupError> {
    let (name, email) = (name.into_inner(), query.into_inner().email);
    let mut store = store.lock().await;
    if let Err(e) = try_signup(&mut store, &name, &email) {
        warn!("Rejected signup of {} for {}: {}", email, name, e);
        return Err(e);
    }
    info!("Signed up {} for {}", email, name);
    Ok(web::Json(Message {
        message: format!("{} signed up for {}", email, name),
    }))
}

#[delete("/activities/{name}/unregister")]
async fn unregister(
    store: SStore,
    name: web::Path<String>,
    query: web::Query<EmailQuery>,
) -> Result<impl Responder, SignupError> {
    let (name, email) = (name.into_inner(), query.into_inner().email);
    let mut store = store.lock().await;
    if let Err(e) = try_unregister(&mut store, &name, &email) {
        warn!("Rejected unregister of {} from {}: {}", email, name, e);
        return Err(e);
    }
    info!("Unregistered {} from {}", email, name);
    Ok(web::Json(Message {
        message: format!("{} unregistered from {}", email, name),
    }))
}

pub fn routes(cfg: &mut web::ServiceConfig) {
    cfg.service(root)
        .service(get_activities)
        .service(signup)
        .service(unregister);
}

pub fn listen(listener: TcpListener, store: Arc<Mutex<ActivityStore>>) -> std::io::Result<Server> {
    let store = Data::from(store);
    let server = actix_web::HttpServer::new(move || {
        actix_web::App::new()
            .app_data(store.clone())
            .configure(routes)
            .wrap(middleware::Logger::default())
    })
    .listen(listener)?
    .run();
    Ok(server)
}

pub async fn run(addr: SocketAddr, store: Arc<Mutex<ActivityStore>>) -> anyhow::Result<()> {
    log::info!("Starting server on {:?}", addr);
    let listener = TcpListener::bind(addr)?;
    listen(listener, store)?.await?;
    Ok(())
}
