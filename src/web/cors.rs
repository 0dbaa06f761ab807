use crate::web::server::Server;
use rocket::fairing::{Fairing, Info, Kind};
use rocket::http::{Header, Status};
use rocket::{Build, Request, Response, Rocket};

/// Let any origin call the API, browsers included.
pub struct Cors;

#[rocket::async_trait]
impl Fairing for Cors {
    fn info(&self) -> Info {
        Info {
            name: "CORS headers",
            kind: Kind::Response,
        }
    }

    async fn on_response<'r>(&self, _request: &'r Request<'_>, response: &mut Response<'r>) {
        response.set_header(Header::new("Access-Control-Allow-Origin", "*"));
        response.set_header(Header::new(
            "Access-Control-Allow-Methods",
            "GET, POST, OPTIONS",
        ));
        response.set_header(Header::new("Access-Control-Allow-Headers", "Content-Type"));
    }
}

/// Answer browsers' preflight requests, whatever the path.
#[options("/<_..>")]
pub fn preflight() -> Status {
    Status::NoContent
}

pub struct CorsServer {}

impl CorsServer {
    pub fn new() -> Self {
        Self {}
    }
}

impl Server for CorsServer {
    fn configure(&self, rocket_build: Rocket<Build>) -> Rocket<Build> {
        rocket_build.attach(Cors).mount("/", routes![preflight])
    }
}
