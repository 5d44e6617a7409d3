use log::{error, info};
use reqwest::header::{HeaderValue, AUTHORIZATION};

use schema_playground::{
    config::Config,
    playground_fetch,
    schema::{get_members_by_cube, MemberCategory, Meta},
    utils::ucfirst,
    FetchOptions, RequestInit, ReqwestTransport,
};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    let config = Config::new().map_err(|e| {
        error!("Failed to initialize config: {}", e);
        e
    })?;

    let mut init = RequestInit::default();
    if let Some(token) = &config.token {
        init.headers.insert(AUTHORIZATION, HeaderValue::from_str(token)?);
    }

    let transport = ReqwestTransport::new();
    let meta_url = config.meta_url();
    info!("Loading schema metadata from {}", meta_url);

    let response = playground_fetch(
        &transport,
        &meta_url,
        FetchOptions::new(init).with_retries(config.retries),
    )
    .await
    .map_err(|e| {
        error!("Failed to fetch schema metadata: {}", e);
        e
    })?;

    if !response.ok() {
        error!("Meta endpoint answered {}", response.status);
        return Err(format!("unexpected status {}", response.status).into());
    }

    let meta: Meta = response.json().map_err(|e| {
        error!("Failed to decode schema metadata: {}", e);
        e
    })?;

    let members_by_cube = get_members_by_cube(&meta.available_members());
    info!("Found {} cubes", members_by_cube.len());

    for cube in &members_by_cube {
        let title = ucfirst(&cube.cube_title).unwrap_or_else(|_| cube.cube_name.clone());
        let counts: Vec<String> = MemberCategory::ALL
            .iter()
            .map(|category| format!("{}={}", category, cube.bucket(*category).len()))
            .collect();
        println!("{} ({}): {}", title, cube.cube_name, counts.join(" "));
    }

    Ok(())
}
