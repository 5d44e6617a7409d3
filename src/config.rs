use envconfig::Envconfig;
use log::debug;

#[derive(Envconfig, Clone)]
pub struct Config {
    #[envconfig(from = "PLAYGROUND_API_URL", default = "http://localhost:4000")]
    pub api_url: String,

    #[envconfig(from = "PLAYGROUND_META_PATH", default = "/cubejs-api/v1/meta")]
    pub meta_path: String,

    #[envconfig(from = "PLAYGROUND_API_TOKEN")]
    pub token: Option<String>,

    #[envconfig(from = "PLAYGROUND_FETCH_RETRIES", default = "0")]
    pub retries: u32,
}

impl Config {
    pub fn new() -> Result<Self, envconfig::Error> {
        let config = Self::init_from_env()?;
        debug!(
            "Config loaded: api_url={}, meta_path={}, token_set={}, retries={}",
            config.api_url,
            config.meta_path,
            config.token.is_some(),
            config.retries
        );
        Ok(config)
    }

    pub fn meta_url(&self) -> String {
        format!(
            "{}/{}",
            self.api_url.trim_end_matches('/'),
            self.meta_path.trim_start_matches('/')
        )
    }
}
