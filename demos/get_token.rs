use std::io;

use rongcloud::{GetToken, RongCloud, UserId, UserName};

fn required_env(name: &str) -> Result<String, io::Error> {
    std::env::var(name).map_err(|_| {
        io::Error::new(
            io::ErrorKind::InvalidInput,
            format!("{name} environment variable is required"),
        )
    })
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let app_key = required_env("RONGCLOUD_APP_KEY")?;
    let app_secret = required_env("RONGCLOUD_APP_SECRET")?;
    let user_id = required_env("RONGCLOUD_USER_ID")?;
    let name = std::env::var("RONGCLOUD_USER_NAME").unwrap_or_else(|_| user_id.clone());

    let client = RongCloud::new(app_key, app_secret, None)?;
    let mut request = GetToken::new(UserId::new(user_id)?, UserName::new(name)?);
    if let Ok(portrait) = std::env::var("RONGCLOUD_PORTRAIT_URI") {
        request = request.with_portrait_uri(portrait)?;
    }

    let response = client.get_token(request).await?;
    println!(
        "code: {}, user_id: {}, token: {}",
        response.code, response.user_id, response.token
    );

    Ok(())
}
