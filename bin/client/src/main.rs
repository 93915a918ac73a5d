use std::io::{BufRead, Write};

use handwave_client::{config::ClientConfig, context::AppContext, shell};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

fn main() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Load configuration from environment
    let config = ClientConfig::from_env().expect("failed to load configuration");
    tracing::info!("Loaded configuration");

    let storage = AppContext::open_storage(&config);
    let context = AppContext::bootstrap(&config, storage);

    // Rendering layer stand-in: resynchronize document attributes on every
    // preference change.
    context.prefs().borrow_mut().subscribe(|prefs| {
        for (name, value) in prefs.document_attributes() {
            tracing::debug!(attribute = name, value, "document attribute");
        }
    });
    context.session().borrow_mut().subscribe(|state| {
        tracing::debug!(?state, "session state");
    });

    context.clone().install();

    println!("handwave client (type \"help\" for commands)");
    let stdin = std::io::stdin();
    let mut stdout = std::io::stdout();
    prompt(&mut stdout);

    for line in stdin.lock().lines() {
        let line = match line {
            Ok(line) => line,
            Err(e) => {
                tracing::warn!(error = %e, "failed to read input");
                break;
            }
        };
        match shell::execute(&AppContext::current(), &line) {
            Some(reply) => {
                if !reply.is_empty() {
                    println!("{reply}");
                }
            }
            None => break,
        }
        prompt(&mut stdout);
    }
}

fn prompt(stdout: &mut impl Write) {
    print!("> ");
    let _ = stdout.flush();
}
