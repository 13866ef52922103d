use degrees_core::{Catalog, CatalogError, parse_catalog};
use std::{error::Error, path::PathBuf};

const CATALOG_FILES: [&str; 3] = ["people.csv", "movies.csv", "stars.csv"];

pub struct DegreesApp {
    pub data_dir: PathBuf,
}

impl DegreesApp {
    pub fn new(data_dir: PathBuf) -> Result<Self, Box<dyn Error>> {
        if !data_dir.is_dir() {
            return Err(format!("Data directory does not exist: {:?}", data_dir).into());
        }

        for file_name in CATALOG_FILES {
            let path = data_dir.join(file_name);
            if !path.exists() {
                return Err(format!("Catalog file not found: {:?}", path).into());
            }
        }

        Ok(Self { data_dir })
    }

    pub fn load_catalog(&self) -> Result<Catalog, CatalogError> {
        parse_catalog(&self.data_dir)
    }
}
