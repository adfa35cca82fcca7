use std::io;
use std::time::Duration;

use rongcloud::{Credentials, Mobile, Region, RongCloud, SendCode, TemplateId};

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
    let mobile = required_env("RONGCLOUD_MOBILE")?;
    let template_id = required_env("RONGCLOUD_TEMPLATE_ID")?;
    let region = match std::env::var("RONGCLOUD_REGION") {
        Ok(value) => Region::new(value)?,
        Err(_) => Region::default(),
    };

    let client = RongCloud::builder(Credentials::parse(app_key, app_secret)?)
        .timeout(Duration::from_secs(5))
        .build()?;
    let request = SendCode::new(
        Mobile::parse(&region, mobile)?,
        TemplateId::new(template_id)?,
        region,
    );

    let response = client.send_code(request).await?;
    println!("code: {}, session_id: {}", response.code, response.session_id);

    Ok(())
}
