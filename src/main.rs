use std::path::Path;

use clap::Parser;
use log::{debug, error, info};
use simplelog::{LevelFilter, SimpleLogger};

mod configuration;
mod control;
mod env;
mod networking;
mod utils;
mod web;

use utils::MacAddr;

#[derive(Parser)]
#[clap(version = clap::crate_version!(), author = clap::crate_authors!())]
struct Opts {
    #[clap(
        short = 'c',
        long = "config",
        value_name = "FILE",
        help = "Path to the JSON configuration file"
    )]
    config: Option<String>,

    #[clap(
        short = 'm',
        long = "mac",
        value_name = "MAC",
        env = "DEFAULT_MAC",
        help = "Default hardware address to wake (overrides the configuration file)"
    )]
    mac: Option<String>,

    #[clap(
        short = 'd',
        long = "debug",
        group = "verbosity",
        help = "Enable debug logging"
    )]
    debug: bool,
    #[clap(
        short = 'v',
        long = "verbose",
        conflicts_with = "debug",
        group = "verbosity",
        help = "Enable verbose logging"
    )]
    verbose: bool,

    #[clap(
        short = 'w',
        long = "wakeup",
        multiple_values = true,
        min_values = 1,
        value_name = "MAC",
        help = "Wake up the specified hardware address(es) and exit"
    )]
    wakeup: Vec<String>,
}

fn run(args: Opts, config: configuration::Configuration) -> exitcode::ExitCode {
    // check if the manual wakeup option has been provided
    if !args.wakeup.is_empty() {
        // make sure all provided hardware addresses are well-formed
        let mut addresses: Vec<MacAddr> = Vec::with_capacity(args.wakeup.len());
        for address in args.wakeup.iter() {
            match address.parse() {
                Err(e) => {
                    error!("cannot wake up {}: {}", address, e);
                    return exitcode::USAGE;
                }
                Ok(mac) => addresses.push(mac),
            };
        }

        let wakeup_server = control::Factory::create_wakeup_server(&config.network);

        // wake up all provided hardware addresses
        let mut exitcode = exitcode::OK;
        for mac in addresses {
            info!("waking up {}...", mac);
            match wakeup_server.wakeup(&mac) {
                Err(e) => {
                    error!("failed to wake up {}: {}", mac, e);
                    exitcode = exitcode::UNAVAILABLE;
                }
                Ok(_) => info!("{} successfully woken up", mac),
            };
        }
        exitcode
    } else {
        process(args, config)
    }
}

fn process(args: Opts, config: configuration::Configuration) -> exitcode::ExitCode {
    // create the tokio runtime
    let rt = tokio::runtime::Builder::new_multi_thread()
        .worker_threads(web::Server::get_num_workers())
        .thread_name(web::Server::get_thread_name(env::PKG_NAME))
        .enable_all()
        .build()
        .expect("failed to build a tokio runtime");

    // setup SIGINT signal handling
    debug!("setting up signal handling for SIGINT");
    let sigterm = tokio::signal::ctrl_c();

    let rocket = rt.spawn(async move {
        // configure logging depending on cli arguments
        let mut log_level = rocket::config::LogLevel::Off;
        if args.verbose {
            log_level = rocket::config::LogLevel::Debug;
        } else if args.debug {
            log_level = rocket::config::LogLevel::Normal;
        }

        let ip = config.web.ip;
        let port = config.web.port;

        let wakeup_server = control::Factory::create_wakeup_server(&config.network);
        let server = web::Server::new(env::PKG_NAME, env::PKG_VERSION, config, wakeup_server);

        debug!("starting the web API...");
        if let Err(e) = server.launch(ip, port, log_level).await {
            panic!("failed to launch Rocket-based web API: {}", e);
        }
    });

    rt.block_on(async move {
        tokio::select! {
            _ = sigterm => exitcode::OK,
            _ = rocket => exitcode::SOFTWARE,
        }
    })
}

fn load_configuration(path: Option<&str>) -> configuration::Configuration {
    let path = match path {
        Some(path) => Path::new(path),
        None => {
            let path = Path::new(configuration::LOCATION);
            // the default location may be absent
            if !path.exists() {
                debug!("no configuration file at {}", configuration::LOCATION);
                return configuration::Configuration::default();
            }
            path
        }
    };

    info!("loading configuration from {}...", path.display());
    match configuration::parse_from_file(path) {
        Err(e) => {
            error!(
                "failed to load configuration from {}: {}",
                path.display(),
                e
            );
            std::process::exit(exitcode::CONFIG);
        }
        Ok(config) => {
            info!("configuration successfully loaded");
            config
        }
    }
}

fn main() {
    // parse command line arguments
    let args: Opts = Opts::parse();

    let mut log_level = LevelFilter::Info;
    if args.verbose {
        log_level = LevelFilter::Trace;
    } else if args.debug {
        log_level = LevelFilter::Debug;
    }

    let _ = SimpleLogger::init(log_level, simplelog::Config::default());

    // read the configuration file
    let mut config = load_configuration(args.config.as_deref());

    // a hardware address from the command line or environment overrides the
    // configuration file
    if let Some(mac) = &args.mac {
        match mac.parse::<MacAddr>() {
            Err(e) => {
                error!("invalid default hardware address: {}", e);
                std::process::exit(exitcode::CONFIG);
            }
            Ok(mac) => config.network.default_mac = Some(mac),
        };
    }

    // log the effective configuration
    info!(
        "broadcast: {}:{}",
        config.network.broadcast_ip, config.network.port
    );
    match &config.network.default_mac {
        Some(mac) => info!("default hardware address: {}", mac),
        None => info!("no default hardware address configured"),
    };

    std::process::exit(run(args, config));
}
