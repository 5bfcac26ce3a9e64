pub const DEFAULT_API_BASE: &str = "https://form-nutri-backend.onrender.com";
pub const API_URL_ENV: &str = "NUTRISTATS_API_URL";
pub const CONFIG_FILE_RELATIVE: &str = "nutristats/config.toml";

pub const TOP_FOODS_ENDPOINT: &str = "/stats/top-foods";
pub const FREQUENCY_ENDPOINT: &str = "/stats/frequency-by-food";
pub const CATEGORY_ENDPOINT: &str = "/stats/by-category";
pub const USER_ENDPOINT_PREFIX: &str = "/stats/user";

// Chart shaping limits, mirrored by the renderer
pub const TOP_FOODS_LIMIT: usize = 10;
pub const PIVOT_FOODS_LIMIT: usize = 8;
pub const TOP_FOOD_LABEL_CHARS: usize = 15;
pub const PIVOT_LABEL_CHARS: usize = 12;

pub const DEFAULT_BAR_WIDTH: usize = 40;
pub const MAX_BAR_WIDTH: usize = 60;
