use color_eyre::Result;
use tokio::sync::mpsc::UnboundedReceiver;
use tracing::{debug, info, warn};

use imgboard::adapters::{HeadlessItemFactory, ReqwestImageLoader, ReqwestTransport};
use imgboard::cli::render::render_board;
use imgboard::cli::version::version_line;
use imgboard::cli::{parse_args, CliCommand, RunOptions, USAGE};
use imgboard::config::BoardConfig;
use imgboard::coordinator::{BoardEvent, LoadCoordinator};
use imgboard::feed::FragmentChannelResolver;
use imgboard::logging;
use imgboard::traits::ChannelResolver;

fn main() -> Result<()> {
    let options = match parse_args(std::env::args()) {
        Ok(CliCommand::Version) => {
            println!("{}", version_line());
            return Ok(());
        }
        Ok(CliCommand::Help) => {
            println!("{}", USAGE);
            return Ok(());
        }
        Ok(CliCommand::Run(options)) => options,
        Err(e) => {
            eprintln!("{}\n\n{}", e, USAGE);
            std::process::exit(2);
        }
    };

    color_eyre::install()?;
    if let Err(e) = logging::init() {
        eprintln!("Warning: {}", e);
    }

    let config = BoardConfig::from_env()?;
    let runtime = tokio::runtime::Runtime::new()?;
    runtime.block_on(run(config, options))
}

async fn run(config: BoardConfig, options: RunOptions) -> Result<()> {
    let channels = options
        .location
        .as_deref()
        .map(|location| FragmentChannelResolver.resolve(location))
        .unwrap_or_default();

    let client = reqwest::Client::builder()
        .user_agent(concat!("imgboard/", env!("CARGO_PKG_VERSION")))
        .build()?;

    let (mut coordinator, mut events) = LoadCoordinator::new(
        config,
        ReqwestTransport::with_client(client.clone()),
        ReqwestImageLoader::with_client(client),
        HeadlessItemFactory::default(),
        channels,
    );

    coordinator.apply_width(options.width);

    for page in 1..=options.pages {
        coordinator.load_more();

        let interrupted = tokio::select! {
            _ = coordinator.run_until_settled() => false,
            _ = tokio::signal::ctrl_c() => true,
        };
        if interrupted {
            info!("Interrupted, cancelling outstanding fetches");
            coordinator.cancel_all();
            coordinator.run_until_settled().await;
            report_events(&mut events);
            break;
        }

        report_events(&mut events);
        if coordinator.cursor().token().is_none() {
            info!("Feed exhausted after page {}", page);
            break;
        }
    }

    print!("{}", render_board(coordinator.board()));
    Ok(())
}

fn report_events(events: &mut UnboundedReceiver<BoardEvent>) {
    while let Ok(event) = events.try_recv() {
        match event {
            BoardEvent::ConnectivityAlert { message } => {
                warn!("{}", message);
                eprintln!("{}", message);
            }
            BoardEvent::RequestCompleted(completion) => {
                debug!(
                    "{:?} {} settled as {:?}, {} running",
                    completion.kind,
                    completion.unit,
                    completion.outcome,
                    completion.running_requests
                );
            }
            BoardEvent::AboutToLoadMore => debug!("Loading more"),
            BoardEvent::LayoutChanged(change) => debug!("Layout changed: {:?}", change.plan),
        }
    }
}
