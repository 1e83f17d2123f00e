use axum_server::tls_rustls::RustlsConfig;
use clap::Parser;
use config::{Config, PredictorConfig};
use std::net::SocketAddr;
use std::process;

mod app;
mod config;
mod error;
mod models;
mod routes;
mod view;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Path to a TOML config file. Defaults to weatherform.toml if present.
    #[arg(long, env = "WEATHERFORM_CONFIG")]
    config: Option<String>,

    #[arg(short, long, env = "WEATHERFORM_ADDRESS")]
    address: Option<SocketAddr>,

    /// Endpoint of the prediction service.
    #[arg(short, long, env = "PREDICTOR_URL")]
    predictor_url: Option<String>,

    /// Answer with the built in fake predictor instead of calling a service.
    #[arg(long)]
    fake_predictor: bool,

    #[arg(short, long, env = "KEY_FILE_PATH")]
    key_file_path: Option<String>,

    #[arg(short, long, env = "CERT_FILE_PATH")]
    cert_file_path: Option<String>,
}

fn apply_args(mut config: Config, args: Args) -> Config {
    if let Some(address) = args.address {
        config.server.address = address;
    }
    if let Some(url) = args.predictor_url {
        config.predictor = PredictorConfig::Http { url };
    }
    if args.fake_predictor {
        config.predictor = PredictorConfig::Fake { failing: false };
    }
    if args.key_file_path.is_some() {
        config.server.key_file_path = args.key_file_path;
    }
    if args.cert_file_path.is_some() {
        config.server.cert_file_path = args.cert_file_path;
    }
    config
}

#[tokio::main]
async fn main() {
    env_logger::init();

    let args = Args::parse();

    let config = match Config::read(args.config.as_deref()) {
        Ok(config) => apply_args(config, args),
        Err(err) => {
            log::error!("{} ({:?})", err, err);
            process::exit(1);
        }
    };

    let addr = config.server.address;
    let app = app::create_app(&config);

    log::info!("listening on {}", addr);
    let result = match (&config.server.key_file_path, &config.server.cert_file_path) {
        (Some(key_file_path), Some(cert_file_path)) => {
            log::info!(
                "using tls with key file {} and cert file {}",
                key_file_path,
                cert_file_path
            );
            match RustlsConfig::from_pem_file(cert_file_path, key_file_path).await {
                Ok(tls) => {
                    axum_server::bind_rustls(addr, tls)
                        .serve(app.into_make_service())
                        .await
                }
                Err(err) => Err(err),
            }
        }
        (None, None) => {
            axum_server::bind(addr)
                .serve(app.into_make_service())
                .await
        }
        _ => {
            log::error!("tls needs both a key file and a cert file");
            process::exit(1);
        }
    };

    if let Err(err) = result {
        log::error!("server stopped: {}", err);
        process::exit(1);
    }
}
