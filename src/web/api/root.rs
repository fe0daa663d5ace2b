use rocket::get;
use rocket::serde::json::Json;
use rocket_okapi::openapi;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

#[derive(Debug, PartialEq, Deserialize, Serialize, JsonSchema)]
pub struct Welcome {
    status: u16,
    message: String,
}

impl Welcome {
    pub fn new() -> Self {
        Self {
            status: 200,
            message: "Welcome to the Wake-on-LAN API!".to_string(),
        }
    }
}

impl Default for Welcome {
    fn default() -> Self {
        Self::new()
    }
}

/// # Welcome
///
/// Static welcome message of the API.
#[openapi(tag = "General")]
#[get("/")]
pub fn get_root() -> Json<Welcome> {
    Json(Welcome::new())
}

#[cfg(test)]
mod test {
    use rocket::http::{ContentType, Status};
    use rstest::*;

    use crate::configuration::Configuration;
    use crate::control::test::*;
    use crate::networking::MockWakeupServer;
    use crate::web::server::test::*;

    #[rstest]
    fn test_web_api_returns_the_welcome_message(
        config: Configuration,
        mocked_wakeup_server: MockWakeupServer,
    ) {
        let client = get_client(&config, mocked_wakeup_server);

        let response = client.get("/").dispatch();

        assert_eq!(response.status(), Status::Ok);
        assert_eq!(response.content_type(), Some(ContentType::JSON));
        assert_eq!(
            response.into_string(),
            Some(r#"{"status":200,"message":"Welcome to the Wake-on-LAN API!"}"#.to_string())
        );
    }
}
