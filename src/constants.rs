pub const APP_DIR_NAME: &str = ".leaguedesk";
pub const CONFIG_FILE_NAME: &str = "config.json";
pub const LOG_FILE_NAME: &str = "leaguedesk.log";

pub const DATE_FORMAT: &str = "%Y-%m-%d";
pub const DEFAULT_GROUP_NAME_PREFIX: &str = "Group";

pub const BASE_URL_ENV_VAR: &str = "LEAGUE_SERVICE_URL";
pub const DEFAULT_BASE_URL: &str = "http://localhost:8000";
pub const HTTP_TIMEOUT_SECS: u64 = 120;

pub const CREATE_LEAGUE_PATH: &str = "/create-league";
pub const PLAYERS_PATH: &str = "/players";
pub const UPLOAD_PLAYERS_PATH: &str = "/upload-players";
pub const CLEAR_PLAYERS_PATH: &str = "/clear-players";
