use log::{error, info};
use quiz_practice::cli::Args;
use quiz_practice::date_provider::{DateProvider, OverrideDateProvider, SystemDateProvider};
use quiz_practice::gui;
use quiz_practice::question_source::JsonFileQuestionSource;
use quiz_practice::quiz_service::QuizService;
use quiz_practice::shuffle::{KeepOrder, RandomShuffle, Shuffle};
use quiz_practice::store_factory::{StoreConfig, StoreFactory};
use std::sync::Arc;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    let args = Args::parse_args();
    let override_date = args.validate_override_date()?;

    let date_provider: Arc<dyn DateProvider> = match override_date {
        Some(date) => {
            info!("Using override date {} for answer timestamps", date);
            Arc::new(OverrideDateProvider::new(date))
        }
        None => Arc::new(SystemDateProvider),
    };

    let shuffler: Box<dyn Shuffle> = if args.in_order {
        Box::new(KeepOrder)
    } else {
        Box::new(RandomShuffle::new())
    };

    let config = StoreConfig::from_args(&args);
    let store = StoreFactory::create(&config)?;
    info!("Using store at {}", config.get_path());

    let source = JsonFileQuestionSource::new(&args.questions);
    let session = QuizService::load(&source, Box::new(store), shuffler, date_provider);
    if let Err(e) = &session {
        error!("{}", e);
    }

    gui::run_app(session)?;

    Ok(())
}
