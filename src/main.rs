use std::process::exit;
use std::sync::Arc;
use std::time::Duration;
use clap::Parser;
use log::{error, info, warn};
use parking_lot::deadlock;
use sentry::ClientInitGuard;
use tokio::runtime::Builder;
use tokio_shutdown::Shutdown;
use backend_connectors::config::structs::configuration::Configuration;
use backend_connectors::logging::setup_logging;
use backend_connectors::registry::structs::connector_registry::ConnectorRegistry;
use backend_connectors::structs::Cli;

fn main() -> std::io::Result<()>
{
    let args = Cli::parse();

    let config = match Configuration::load_from_file(&args.config, args.create_config) {
        Ok(config) => Arc::new(config),
        Err(_) => exit(101)
    };

    if let Err(message) = setup_logging(&config) {
        eprintln!("[ERROR] {}", message);
        exit(1);
    }

    info!("{} - Version: {}", env!("CARGO_PKG_NAME"), env!("CARGO_PKG_VERSION"));

    let _sentry_guard: Option<ClientInitGuard> = if config.sentry_config.enabled {
        Some(sentry::init((config.sentry_config.dsn.clone(), sentry::ClientOptions {
            release: sentry::release_name!(),
            debug: config.sentry_config.debug,
            sample_rate: config.sentry_config.sample_rate,
            max_breadcrumbs: config.sentry_config.max_breadcrumbs,
            attach_stacktrace: config.sentry_config.attach_stacktrace,
            send_default_pii: config.sentry_config.send_default_pii,
            traces_sample_rate: config.sentry_config.traces_sample_rate,
            ..Default::default()
        })))
    } else {
        None
    };

    Builder::new_multi_thread()
        .enable_all()
        .build()?
        .block_on(async {
            let registry = Arc::new(ConnectorRegistry::new(&config));

            if let Err(error) = registry.connect_all().await {
                error!("[BOOT] Unable to connect: {}", error);
                let _ = registry.shutdown().await;
                exit(1);
            }

            if let Err(error) = registry.relational.test_connection().await {
                error!("[BOOT] PostgreSQL liveness check failed: {}", error);
                let _ = registry.shutdown().await;
                exit(1);
            }

            let status = registry.broker.get_status();
            info!("[BOOT] RabbitMQ status: connected={} channel={}", status.connected, status.channel);

            if args.check {
                if let Ok(status_json) = serde_json::to_string(&status) {
                    println!("{}", status_json);
                }
                return match registry.shutdown().await {
                    Ok(()) => Ok(()),
                    Err(_) => exit(1)
                };
            }

            let shutdown = match Shutdown::new() {
                Ok(shutdown) => shutdown,
                Err(_) => {
                    error!("[BOOT] Unable to register the shutdown handler");
                    let _ = registry.shutdown().await;
                    exit(1);
                }
            };

            let deadlocks_handler = shutdown.clone();
            tokio::spawn(async move {
                info!("[BOOT] Starting thread for deadlocks...");
                let mut interval = tokio::time::interval(Duration::from_secs(30));
                loop {
                    tokio::select! {
                        _ = interval.tick() => {
                            let deadlocks = deadlock::check_deadlock();
                            if !deadlocks.is_empty() {
                                warn!("[DEADLOCK] Found {} deadlocks", deadlocks.len());
                                for (i, threads) in deadlocks.iter().enumerate() {
                                    warn!("[DEADLOCK] #{i}");
                                    for t in threads {
                                        warn!("[DEADLOCK] Thread ID: {:#?}", t.thread_id());
                                        warn!("[DEADLOCK] {:#?}", t.backtrace());
                                        sentry::capture_message(&format!("{:#?}", t.backtrace()), sentry::Level::Error);
                                    }
                                }
                            }
                        }
                        _ = deadlocks_handler.handle() => {
                            info!("[BOOT] Shutting down thread for deadlocks...");
                            return;
                        }
                    }
                }
            });

            info!("[BOOT] Connections ready, waiting for shutdown signal");
            shutdown.handle().await;

            info!("[SHUTDOWN] Request for shutdown received...");
            if registry.shutdown().await.is_err() {
                exit(1);
            }
            info!("[SHUTDOWN] Server shutting down completed");
            Ok(())
        })
}
