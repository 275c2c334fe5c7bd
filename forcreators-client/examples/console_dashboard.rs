// forcreators-client/examples/console_dashboard.rs
// Interactive console demo driving the session controller against a live API.
//
// Usage:
//   FORCREATORS_API_URL=http://localhost:8000 cargo run --example console_dashboard

use std::io::Write;

use forcreators_client::{ClientConfig, FetchPolicy, HttpClient, SessionController};

fn prompt(label: &str) -> anyhow::Result<String> {
    print!("{label}: ");
    std::io::stdout().flush()?;
    let mut line = String::new();
    std::io::stdin().read_line(&mut line)?;
    Ok(line.trim_end_matches(['\r', '\n']).to_string())
}

fn print_status(label: &str, slot: &forcreators_client::FlowSlot) {
    if !slot.message.is_empty() {
        println!("[{label}] {}", slot.message);
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt::init();

    let eager = std::env::args().any(|arg| arg == "--eager-media-kit");
    let config = ClientConfig::from_env().with_fetch_policy(if eager {
        FetchPolicy::EagerMediaKit
    } else {
        FetchPolicy::OnDemandMediaKit
    });

    tracing::info!("API base: {}", config.base_url);

    let mut controller =
        SessionController::<HttpClient>::with_config(config.build_http_client(), &config);

    loop {
        let command = prompt("\ncomando [signup|login|kit|contatti|view|esci]")?;
        match command.as_str() {
            "signup" => {
                let form = controller.signup_form_mut();
                form.email = prompt("email")?;
                form.password = prompt("password")?;
                form.platform = prompt("piattaforma (instagram/tiktok/youtube/twitch)")?;
                form.username = prompt("username")?;
                form.followers = prompt("follower complessivi")?;
                form.profiles = prompt("profili gestiti")?;
                controller.submit_signup().await;
                print_status("signup", &controller.state().signup_flow);
            }
            "login" => {
                let form = controller.login_form_mut();
                form.email = prompt("email")?;
                form.password = prompt("password")?;
                controller.submit_login().await;
                print_status("login", &controller.state().login_flow);
            }
            "kit" => {
                controller.regenerate_media_kit().await;
                print_status("media kit", &controller.state().media_kit_flow);
            }
            "contatti" => {
                let form = controller.contact_form_mut();
                form.name = prompt("nome")?;
                form.email = prompt("email")?;
                form.subject = prompt("oggetto")?;
                form.message = prompt("messaggio")?;
                controller.submit_contact().await;
                print_status("contatti", &controller.state().contact_flow);
            }
            "view" => {
                println!("{}", serde_json::to_string_pretty(&controller.view())?);
            }
            "esci" | "" => break,
            other => println!("comando sconosciuto: {other}"),
        }
    }

    Ok(())
}
