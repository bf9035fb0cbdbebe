use std::path::PathBuf;

use crate::domain::entities::employee::Employee;
use crate::domain::entities::settings::UiSettings;
use crate::infra::sqlite::queries;
use crate::infra::sqlite::schema;
use crate::usecase::ports::gateway::{DirectoryGateway, GatewayError, PageRequest, PageResponse};

pub struct SqliteDirectory {
    pub db_path: PathBuf,
}

impl SqliteDirectory {
    pub fn new(db_path: PathBuf) -> Self {
        Self { db_path }
    }
}

impl DirectoryGateway for SqliteDirectory {
    fn init(&self) -> Result<(), GatewayError> {
        schema::init_db(&self.db_path)
            .and_then(|_| schema::seed_if_empty(&self.db_path))
            .map_err(|err| GatewayError::Message(err.to_string()))
    }

    fn fetch_page(&self, request: &PageRequest) -> Result<PageResponse<Employee>, GatewayError> {
        queries::query_page(&self.db_path, request)
            .map_err(|err| GatewayError::Message(err.to_string()))
    }

    fn load_settings(&self) -> Result<UiSettings, GatewayError> {
        queries::load_settings(&self.db_path)
            .map_err(|err| GatewayError::Message(err.to_string()))
    }

    fn save_settings(&self, settings: &UiSettings) -> Result<(), GatewayError> {
        queries::save_settings(&self.db_path, settings)
            .map_err(|err| GatewayError::Message(err.to_string()))
    }
}
