use rocket::{Build, Rocket};

use crate::tools::env_args::Setting;
use crate::web::api::server::ApiServer;
use crate::web::cors::CorsServer;

const PORT: Setting = Setting::new("--port", "PORT");
const DEFAULT_PORT: u16 = 8080;

pub trait Server {
    fn configure(&self, rocket_build: Rocket<Build>) -> Rocket<Build>;
}

pub fn build_server() -> Rocket<Build> {
    let api_port = get_api_port();
    let rocket_build =
        rocket::build().configure(rocket::Config::figment().merge(("port", api_port)));

    let servers: Vec<Box<dyn Server>> = vec![Box::new(ApiServer::new()), Box::new(CorsServer::new())];
    servers
        .iter()
        .fold(rocket_build, |rocket_build, server| server.configure(rocket_build))
}

fn get_api_port() -> u16 {
    PORT.parsed_value_or(DEFAULT_PORT)
}
