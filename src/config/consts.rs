// src/config/consts.rs

// Data source
pub const DEFAULT_DATA_FILE: &str = "data.json";
pub const HTTP_TIMEOUT_SECS: u64 = 15;
pub const USER_AGENT: &str = "contest_board/0.3";

// Local log
pub const STORE_DIR: &str = ".store";
pub const LOG_FILE: &str = "debug.log";

// Filter controls
pub const EDUCATION_ALL: &str = "todos";
pub const EDUCATION_ALL_LABEL: &str = "Todos";
pub const CITY_ALL: &str = "";
pub const CITY_ALL_LABEL: &str = "Todas as Cidades";

// Messages shown in place of results
pub const MSG_NO_RESULTS: &str =
    "Nenhum concurso encontrado para os filtros selecionados. Tente refinar sua busca.";
pub const MSG_LOAD_FAILED: &str =
    "Não foi possível carregar os dados dos concursos. Por favor, verifique o arquivo data.json.";

// Card formatting (pt-BR)
pub const CURRENCY_PREFIX: &str = "R$ ";
pub const RESERVE_SUFFIX: &str = " + CR";
pub const STAGE_SEP: &str = ", ";
pub const DATE_FORMAT: &str = "%d/%m/%Y";
pub const INVALID_DATE: &str = "Invalid Date";
pub const NOTICE_LINK_LABEL: &str = "Ver Edital";
