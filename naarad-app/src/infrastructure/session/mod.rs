mod user_session;

pub use user_session::UserSession;

#[cfg(test)]
pub(crate) use user_session::test_session;
