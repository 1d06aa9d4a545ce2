use {
    rocket::{
        Request,
        Response,
        fairing::{Fairing, Info, Kind},
        http::Header
    },
    crate::config::TriviaConfig
};

const ALLOW_HEADERS: &str = "Content-Type, Authorization";
const ALLOW_METHODS: &str = "GET, POST, PUT, DELETE, OPTIONS";

/// Adds the CORS headers to every response.
pub struct Cors;

#[rocket::async_trait]
impl Fairing for Cors {
    fn info(&self) -> Info {
        Info {
            name: "CORS headers",
            kind: Kind::Response
        }
    }

    async fn on_response<'r>(&self, req: &'r Request<'_>, res: &mut Response<'r>) {
        let origin = req
            .rocket()
            .state::<TriviaConfig>()
            .map(|config| config.cors_allow_origin.clone())
            .unwrap_or_else(TriviaConfig::default_allow_origin);

        res.set_header(Header::new("Access-Control-Allow-Origin", origin));
        res.set_header(Header::new("Access-Control-Allow-Headers", ALLOW_HEADERS));
        res.set_header(Header::new("Access-Control-Allow-Methods", ALLOW_METHODS));
    }
}
