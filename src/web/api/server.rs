use crate::dispatch::configuration::DispatchMode;
use crate::dispatch::dispatcher::BatchDispatcher;
use crate::error::Result;
use crate::mail::configuration::SmtpConfiguration;
use crate::mail::smtp::SmtpTransport;
use crate::summary::configuration::LlmConfiguration;
use crate::summary::summarizer::Summarizer;
use crate::tools::web::build_client;
use crate::web::api::{catchers, email_controller, transcript_controller};
use crate::web::server::Server;
use rocket::{Build, Rocket};

pub struct ApiServer {}

impl ApiServer {
    pub fn new() -> Self {
        Self {}
    }
}

impl Server for ApiServer {
    fn configure(&self, rocket_build: Rocket<Build>) -> Rocket<Build> {
        let (batch_dispatcher, summarizer) = match build_managed_states() {
            Ok(states) => states,
            Err(error) => {
                error!("{error}\n{error:#?}");
                panic!("Initialization failed, aborting.");
            }
        };

        rocket_build
            .manage(batch_dispatcher)
            .manage(summarizer)
            .mount(
                "/api/",
                routes![
                    email_controller::send_email,
                    transcript_controller::parse_transcript,
                ],
            )
            .register("/", catchers![catchers::default_catcher])
    }
}

fn build_managed_states() -> Result<(BatchDispatcher, Summarizer)> {
    let smtp_configuration = SmtpConfiguration::load()?;
    let dispatch_mode = DispatchMode::load()?;
    let llm_configuration = LlmConfiguration::load()?;
    info!("Loaded configuration [smtp: {smtp_configuration:?}, dispatch_mode: {dispatch_mode:?}, llm: {llm_configuration:?}]");

    let batch_dispatcher = BatchDispatcher::new(
        Box::new(SmtpTransport::new(smtp_configuration)),
        dispatch_mode,
    );
    let summarizer = Summarizer::new(build_client()?, llm_configuration);

    Ok((batch_dispatcher, summarizer))
}
