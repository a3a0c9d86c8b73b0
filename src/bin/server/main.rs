use actix_web::{middleware::Logger as ActixLogger, web, App, HttpServer};
use log::{error, info, trace};
use pigeonhole::{
    checkout::ThreadRandom,
    config::{load_env_file, SiteConfig},
    cors::{build_cors, load_cors_origins_or_default},
    logger::{setup_logger, VERSION},
    routes::{self, AppState},
};
use std::{
    env as stdenv,
    io::{Error as IOError, ErrorKind},
    net::TcpListener,
    process::{id as process_id, Command},
    sync::Arc,
};

const NAME: &str = env!("CARGO_PKG_NAME");

/// Logs whichever process holds `port`, when `lsof` is around to tell us.
fn report_port_owner(port: &str) {
    let output = Command::new("sh")
        .arg("-c")
        .arg(format!("lsof -i :{} -t -sTCP:LISTEN", port))
        .output();

    match output {
        Ok(output) if !output.stdout.is_empty() => {
            let pid = String::from_utf8_lossy(&output.stdout).trim().to_string();
            info!("PID using port {}: {}", port, pid);
            let cmd = format!("ps -o user= -o comm= -p {}", pid);
            if let Ok(output) = Command::new("sh").arg("-c").arg(cmd).output() {
                info!(
                    "Process details: {}",
                    String::from_utf8_lossy(&output.stdout).trim()
                );
            }
        }
        _ => error!("Could not determine the process using port {}", port),
    }
}

fn ensure_port_free(config: &SiteConfig) -> std::io::Result<()> {
    match TcpListener::bind(config.bind_address()) {
        Ok(_) => Ok(()),
        Err(e) => {
            error!("Port {} is already in use: {}", config.port, e);
            report_port_owner(&config.port);
            Err(IOError::new(
                ErrorKind::AddrInUse,
                format!("{} is not available", config.bind_address()),
            ))
        }
    }
}

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    load_env_file();
    setup_logger();

    info!("{} {} starting, PID: {}", NAME, VERSION, process_id());
    trace!("args: {:?}", stdenv::args().collect::<Vec<_>>());

    let config = SiteConfig::from_env();
    info!("Site URL: {}", config.site_url);
    info!("Mock payment base: {}", config.payment_base_url);

    let cors_origins = load_cors_origins_or_default(&config.cors_file);
    ensure_port_free(&config)?;

    let bind_address = config.bind_address();
    let state = web::Data::new(AppState::new(config, Arc::new(ThreadRandom)));

    let server = HttpServer::new(move || {
        App::new()
            .wrap(ActixLogger::default())
            .wrap(build_cors(&cors_origins))
            .app_data(state.clone())
            .configure(routes::configure)
    })
    .bind(&bind_address)?
    .run();

    info!("Server running at http://{}", bind_address);
    let execution = server.await;
    info!("Worker stopped with PID: {}", process_id());

    if let Err(e) = execution {
        error!("Failed to run the server: {:?}", e);
        return Err(e);
    }
    Ok(())
}
