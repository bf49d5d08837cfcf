mod app_context;
mod snapshot;

pub use app_context::AppContext;
pub use snapshot::load_qna_seeds;
