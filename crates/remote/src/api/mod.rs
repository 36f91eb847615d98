//! # Typed Endpoints
//!
//! One small method per server endpoint. Each builds its positional params
//! and goes through `RemoteServer::request`/`notify`, so every endpoint gets
//! the same retry and recovery behaviour for free.
//!
//! UI models the client has no opinion about come back as `serde_json::Value`.

mod console;
mod events;
mod files;
mod help;
mod history;
mod packages;
mod plots;
mod session;
mod source;
mod workspace;

pub use events::ClientEvent;
pub use files::UploadToken;
pub use help::Link;
pub use history::HistoryEntry;

/// Route namespaces on the server.
pub mod scope {
    pub const RPC: &str = "rpc";
    pub const EVENTS: &str = "events";
    pub const LOG: &str = "log";
    pub const FILES: &str = "files";
    pub const HELP: &str = "help";
    pub const UPLOAD: &str = "upload";
    pub const EXPORT: &str = "export";
    pub const GRAPHICS: &str = "graphics";
    pub const SOURCE: &str = "source";
    pub const FILE_SHOW: &str = "file_show";
}

/// Wire method names.
pub mod method {
    // session
    pub const CLIENT_INIT: &str = "client_init";
    pub const ACCEPT_AGREEMENT: &str = "accept_agreement";
    pub const SUSPEND_SESSION: &str = "suspend_session";
    pub const QUIT_SESSION: &str = "quit_session";
    pub const SET_WORKBENCH_METRICS: &str = "set_workbench_metrics";
    pub const SET_UI_PREFS: &str = "set_ui_prefs";
    pub const GET_R_PREFS: &str = "get_r_prefs";
    pub const SET_R_PREFS: &str = "set_r_prefs";
    pub const SET_CLIENT_STATE: &str = "set_client_state";
    pub const USER_PROMPT_COMPLETED: &str = "user_prompt_completed";
    pub const LOG: &str = "log";

    // console
    pub const CONSOLE_INPUT: &str = "console_input";
    pub const RESET_CONSOLE_ACTIONS: &str = "reset_console_actions";
    pub const INTERRUPT: &str = "interrupt";
    pub const ABORT: &str = "abort";
    pub const HTTP_LOG: &str = "http_log";
    pub const GET_COMPLETIONS: &str = "get_completions";

    // workspace
    pub const LIST_OBJECTS: &str = "list_objects";
    pub const REMOVE_ALL_OBJECTS: &str = "remove_all_objects";
    pub const SET_OBJECT_VALUE: &str = "set_object_value";
    pub const GET_OBJECT_VALUE: &str = "get_object_value";
    pub const SAVE_WORKSPACE: &str = "save_workspace";
    pub const LOAD_WORKSPACE: &str = "load_workspace";
    pub const DOWNLOAD_DATA_FILE: &str = "download_data_file";
    pub const GET_DATA_PREVIEW: &str = "get_data_preview";
    pub const GET_OUTPUT_PREVIEW: &str = "get_output_preview";
    pub const EDIT_COMPLETED: &str = "edit_completed";
    pub const CHOOSE_FILE_COMPLETED: &str = "choose_file_completed";

    // packages
    pub const LIST_PACKAGES: &str = "list_packages";
    pub const AVAILABLE_PACKAGES: &str = "available_packages";
    pub const LOAD_PACKAGE: &str = "load_package";
    pub const UNLOAD_PACKAGE: &str = "unload_package";
    pub const IS_CRAN_CONFIGURED: &str = "is_cran_configured";
    pub const SET_CRAN_REPOS_URL: &str = "set_cran_repos_url";

    // help
    pub const SUGGEST_TOPICS: &str = "suggest_topics";
    pub const GET_HELP: &str = "get_help";
    pub const SHOW_HELP_TOPIC: &str = "show_help_topic";
    pub const SEARCH: &str = "search";
    pub const GET_HELP_LINKS: &str = "get_help_links";
    pub const SET_HELP_LINKS: &str = "set_help_links";

    // files
    pub const LIST_FILES: &str = "list_files";
    pub const LIST_ALL_FILES: &str = "list_all_files";
    pub const CREATE_FILE: &str = "create_file";
    pub const CREATE_FOLDER: &str = "create_folder";
    pub const DELETE_FILES: &str = "delete_files";
    pub const COPY_FILE: &str = "copy_file";
    pub const MOVE_FILES: &str = "move_files";
    pub const RENAME_FILE: &str = "rename_file";
    pub const COMPLETE_UPLOAD: &str = "complete_upload";

    // plots
    pub const NEXT_PLOT: &str = "next_plot";
    pub const PREVIOUS_PLOT: &str = "previous_plot";
    pub const CLEAR_PLOTS: &str = "clear_plots";
    pub const REFRESH_PLOT: &str = "refresh_plot";
    pub const EXPORT_PLOT: &str = "export_plot";
    pub const LOCATOR_COMPLETED: &str = "locator_completed";
    pub const SET_MANIPULATOR_VALUES: &str = "set_manipulator_values";

    // source
    pub const NEW_DOCUMENT: &str = "new_document";
    pub const OPEN_DOCUMENT: &str = "open_document";
    pub const LIST_DOCUMENTS: &str = "list_documents";
    pub const SAVE_DOCUMENT: &str = "save_document";
    pub const SAVE_DOCUMENT_DIFF: &str = "save_document_diff";
    pub const CHECK_FOR_EXTERNAL_EDIT: &str = "check_for_external_edit";
    pub const IGNORE_EXTERNAL_EDIT: &str = "ignore_external_edit";
    pub const CLOSE_DOCUMENT: &str = "close_document";
    pub const CLOSE_ALL_DOCUMENTS: &str = "close_all_documents";
    pub const SET_SOURCE_DOCUMENT_ON_SAVE: &str = "set_source_document_on_save";
    pub const SAVE_ACTIVE_DOCUMENT: &str = "save_active_document";
    pub const MODIFY_DOCUMENT_PROPERTIES: &str = "modify_document_properties";
    pub const REVERT_DOCUMENT: &str = "revert_document";
    pub const REMOVE_CONTENT_URL: &str = "remove_content_url";
    pub const DETECT_FREE_VARS: &str = "detect_free_vars";
    pub const PUBLISH_PDF: &str = "publish_pdf";
    pub const IS_TEX_INSTALLED: &str = "is_tex_installed";

    // history
    pub const GET_HISTORY: &str = "get_history";
    pub const GET_RECENT_HISTORY: &str = "get_recent_history";
    pub const SEARCH_HISTORY: &str = "search_history";
    pub const SEARCH_HISTORY_BY_PREFIX: &str = "search_history_by_prefix";

    // events
    pub const GET_EVENTS: &str = "get_events";
}
