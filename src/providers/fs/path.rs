use crate::{
    constants::{APP_DIR_NAME, CONFIG_FILE_NAME},
    errors::{AppError, IOError},
};
use dirs::home_dir;
use std::{
    fs::create_dir_all,
    path::{Path, PathBuf},
};

pub fn get_base_path() -> Result<PathBuf, AppError> {
    let mut path = home_dir().ok_or(AppError::IO(IOError::Msg(
        "could not recognize the home directory".to_string(),
    )))?;
    path.push(APP_DIR_NAME);
    if !path.exists() {
        create_dir_all(&path).map_err(|_| {
            AppError::IO(IOError::Msg(
                "could not create the application directory".to_string(),
            ))
        })?;
    }
    Ok(path)
}

pub fn get_config_file_path(base_path: &Path) -> PathBuf {
    base_path.join(CONFIG_FILE_NAME)
}
