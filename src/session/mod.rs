mod persistence;

pub use persistence::{load_session, save_session, Session};
