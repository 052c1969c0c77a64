use crate::{
    config::Config,
    error::StoreError,
    models::Gender,
    predict::PredictionClient,
    render::Regions,
    store::{FileStore, Store},
};

/// Everything one user action touches: the output regions, the record store,
/// the prediction client, and the last predicted gender kept as the fallback
/// for saves without an explicit selection.
pub struct Session<P> {
    pub regions: Regions,
    pub store: Box<dyn Store>,
    pub client: P,
    pub last_prediction: Option<Gender>,
}

impl Session<PredictionClient> {
    pub fn new(config: &Config) -> Result<Self, StoreError> {
        let store = FileStore::open(&config.store_path)?;

        Ok(Self::with_parts(
            Box::new(store),
            PredictionClient::new(&config.api_url),
        ))
    }
}

impl<P> Session<P> {
    pub fn with_parts(store: Box<dyn Store>, client: P) -> Self {
        Self {
            regions: Regions::default(),
            store,
            client,
            last_prediction: None,
        }
    }
}
